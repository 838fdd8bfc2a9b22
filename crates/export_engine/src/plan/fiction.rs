//! Section layout for fiction projects

use super::{movement_sections, GroupField, Part, Section, SectionContent};
use crate::branding::{format_label, format_word_count, is_present};
use project_model::{Project, StoryStructure};

pub(super) const MOVEMENT_TITLES: [&str; 9] = [
    "Opening Scene",
    "Hooking Moment",
    "First Plot Point",
    "First Pinch Point",
    "Midpoint Shift",
    "Second Pinch Point",
    "Second Plot Point",
    "Final Resolution",
    "World Back to Normal",
];

pub(super) fn parts(project: &Project) -> Vec<Part> {
    let content = &project.fiction;

    let mut concept = Part::new("Story Concept");
    concept.push_opt(project_overview(project));
    concept.push(Section::text("One-Line Premise", content.premise.as_deref()));
    concept.push(Section::text("Story Description", project.description.as_deref()));
    concept.push(Section::text("Central Theme", content.theme.as_deref()));
    concept.push(Section::text("Faith Element", content.faith_element.as_deref()));
    concept.push_opt(Section::group(
        "Key Story Arc",
        &[
            ("storyBeginning", content.story_beginning.as_deref()),
            ("storyMiddle", content.story_middle.as_deref()),
            ("storyEnd", content.story_end.as_deref()),
        ],
    ));
    concept.push(Section::text(
        "Reader Transformation",
        content.reader_transformation.as_deref(),
    ));

    let mut structure = Part::new("StoryWise Structure");
    let empty = StoryStructure::default();
    let movements = content.story_structure.as_ref().unwrap_or(&empty).movements();
    structure.sections = movement_sections(&MOVEMENT_TITLES, movements);

    let mut characters = Part::new("Characters");
    characters.push_opt(Section::group(
        "Protagonist",
        &[
            ("protagonist", content.protagonist.as_deref()),
            ("protagonistGoals", content.protagonist_goals.as_deref()),
            ("protagonistFlaw", content.protagonist_flaw.as_deref()),
        ],
    ));
    characters.push_opt(
        Section::group(
            "Antagonist",
            &[
                ("antagonist", content.antagonist.as_deref()),
                ("antagonistMotivations", content.antagonist_motivations.as_deref()),
            ],
        )
        .map(Section::with_page_break),
    );
    characters.push(
        Section::text("Supporting Characters", content.supporting_characters.as_deref()).with_page_break(),
    );

    let mut world = Part::new("Story World");
    world.push_opt(Section::group(
        "Setting & Time Period",
        &[
            ("setting", content.setting.as_deref()),
            ("timePeriod", content.time_period.as_deref()),
        ],
    ));
    world.push(Section::text("World Rules", content.world_rules.as_deref()));
    world.push_opt(Section::group(
        "Conflict & Stakes",
        &[
            ("conflict", content.conflict.as_deref()),
            ("stakes", content.stakes.as_deref()),
        ],
    ));
    world.push(Section::text("Spiritual Elements", content.spiritual_elements.as_deref()).with_page_break());

    vec![concept, structure, characters, world]
}

/// Title, genre and audience rows when present, and a word-count row
/// whenever the overview is emitted at all. `None` when none of the four
/// is set.
fn project_overview(project: &Project) -> Option<Section> {
    let has_goal = project.word_count_goal.is_some_and(|n| n > 0);
    let mut fields: Vec<GroupField> = [
        ("title", project.title.as_deref()),
        ("genre", project.genre.as_deref()),
        ("targetAudience", project.target_audience.as_deref()),
    ]
    .into_iter()
    .filter(|(_, value)| is_present(*value))
    .map(|(key, value)| GroupField {
        key,
        label: format_label(key),
        value: value.unwrap_or_default().to_string(),
    })
    .collect();

    if fields.is_empty() && !has_goal {
        return None;
    }

    fields.push(GroupField {
        key: "wordCountGoal",
        label: format_label("wordCountGoal"),
        value: format_word_count(project.word_count_goal),
    });

    Some(Section {
        title: "Project Overview".to_string(),
        content: SectionContent::Group(fields),
        force_page_break_before: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::ContentPlan;
    use project_model::ProjectType;

    #[test]
    fn test_overview_keeps_unset_word_count_row() {
        let mut project = Project::new(ProjectType::Fiction);
        project.genre = Some("Historical".into());
        match project_overview(&project).unwrap().content {
            SectionContent::Group(fields) => {
                let rows: Vec<(&str, &str)> =
                    fields.iter().map(|f| (f.label.as_str(), f.value.as_str())).collect();
                assert_eq!(rows, vec![("Genre", "Historical"), ("Word Count Goal", "Not specified")]);
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_overview_for_word_count_alone() {
        let mut project = Project::new(ProjectType::Fiction);
        project.word_count_goal = Some(50000);
        match project_overview(&project).unwrap().content {
            SectionContent::Group(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].value, "50,000 words");
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_overview_is_omitted() {
        let mut project = Project::new(ProjectType::Fiction);
        project.title = Some("  ".into());
        project.word_count_goal = Some(0);
        assert!(project_overview(&project).is_none());

        let plan = ContentPlan::for_project(&Project::new(ProjectType::Fiction));
        assert!(plan.section("Project Overview").is_none());
        assert_eq!(plan.section_titles()[0], "One-Line Premise");
    }

    #[test]
    fn test_empty_fiction_project_keeps_text_sections() {
        let plan = ContentPlan::for_project(&Project::new(ProjectType::Fiction));
        let titles = plan.section_titles();

        assert!(titles.contains(&"One-Line Premise"));
        assert!(titles.contains(&"Supporting Characters"));
        assert!(!titles.contains(&"Key Story Arc"));
        assert!(!titles.contains(&"Protagonist"));
        assert!(!titles.contains(&"Antagonist"));
        assert_eq!(titles.iter().filter(|t| t.starts_with("Movement ")).count(), 9);
    }

    #[test]
    fn test_part_headings() {
        let plan = ContentPlan::for_project(&Project::new(ProjectType::Fiction));
        let headings: Vec<&str> = plan.parts.iter().map(|p| p.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec!["Story Concept", "StoryWise Structure", "Characters", "Story World"]
        );
    }

    #[test]
    fn test_character_breaks() {
        let mut project = Project::new(ProjectType::Fiction);
        project.fiction.antagonist = Some("Herod".into());
        let plan = ContentPlan::for_project(&project);

        assert!(plan.section("Antagonist").unwrap().force_page_break_before);
        assert!(plan.section("Supporting Characters").unwrap().force_page_break_before);
        assert!(plan.section("Spiritual Elements").unwrap().force_page_break_before);
        assert!(!plan.section("World Rules").unwrap().force_page_break_before);
    }
}
