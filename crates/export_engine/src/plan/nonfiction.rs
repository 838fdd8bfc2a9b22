//! Section layout for non-fiction projects

use super::{movement_sections, Part, Section};
use project_model::{NonfictionStructure, Project, ReaderPersona};

pub(super) const MOVEMENT_TITLES: [&str; 9] = [
    "Starting Where They Are",
    "Hooking with Hope",
    "The First Shift",
    "The First Wake-Up Call",
    "Gospel-Centered Reframe",
    "The Cost of Change",
    "The Final Breakthrough",
    "Living the Change",
    "Final Encouragement",
];

pub(super) fn parts(project: &Project) -> Vec<Part> {
    let content = &project.nonfiction;

    let mut mapping = Part::new("Part 1: Message Mapping - Pre-Writing Work");
    mapping.push(Section::text("Kingdom Concept", content.kingdom_concept.as_deref()));

    let no_persona = ReaderPersona::default();
    let persona = content.reader_persona.as_ref().unwrap_or(&no_persona);
    mapping.push_opt(
        Section::group(
            "Reader Persona",
            &[
                ("lifeStage", persona.life_stage.as_deref()),
                ("struggle", persona.struggle.as_deref()),
                ("desire", persona.desire.as_deref()),
                ("objections", persona.objections.as_deref()),
            ],
        )
        .map(Section::with_page_break),
    );
    mapping.push(Section::text("Core Themes", content.core_themes.as_deref()).with_page_break());
    mapping.push(Section::text("Source Material", content.source_material.as_deref()).with_page_break());
    mapping.push(Section::text("Holy Spirit Insights", content.holy_spirit.as_deref()).with_page_break());

    let mut structure = Part::new("Part 2: StoryWise™ Nonfiction Structure");
    let no_structure = NonfictionStructure::default();
    let movements = content
        .nonfiction_structure
        .as_ref()
        .unwrap_or(&no_structure)
        .movements();
    structure.sections = movement_sections(&MOVEMENT_TITLES, movements);

    vec![mapping, structure]
}

#[cfg(test)]
mod tests {
    use crate::plan::{ContentPlan, SectionContent};
    use project_model::{Project, ProjectType, ReaderPersona};

    #[test]
    fn test_persona_without_content_is_skipped() {
        let mut project = Project::new(ProjectType::Nonfiction);
        project.nonfiction.reader_persona = Some(ReaderPersona {
            life_stage: Some(" ".into()),
            struggle: Some(String::new()),
            desire: None,
            objections: Some("\t".into()),
        });

        let plan = ContentPlan::for_project(&project);
        assert!(plan.section("Reader Persona").is_none());
        assert_eq!(plan.section_titles()[0], "Kingdom Concept");
        assert_eq!(plan.section_titles()[1], "Core Themes");
    }

    #[test]
    fn test_holy_spirit_placeholder() {
        let plan = ContentPlan::for_project(&Project::new(ProjectType::Nonfiction));
        let section = plan.section("Holy Spirit Insights").unwrap();
        assert_eq!(section.content, SectionContent::Text("Not provided".into()));
        assert!(section.force_page_break_before);
    }

    #[test]
    fn test_movement_titles() {
        let plan = ContentPlan::for_project(&Project::new(ProjectType::Nonfiction));
        let structure = &plan.parts[1];
        assert_eq!(structure.sections[0].title, "Movement 1: Starting Where They Are");
        assert_eq!(structure.sections[8].title, "Movement 9: Final Encouragement");
        assert!(structure.sections[3].force_page_break_before);
        assert!(structure.sections[6].force_page_break_before);
    }
}
