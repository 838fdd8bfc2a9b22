//! Integration tests for the export pipeline
//!
//! Exercises both formats end to end through the public API: content plan
//! order and placeholders, the generated PDF and DOCX containers, and the
//! orchestrator's success/failure reporting.

use export_engine::branding::{format_label, format_word_count, BRANDING_TEXT};
use export_engine::docx::{build_flow_document, DocxStyle, FlowBlock, FlowDocument};
use export_engine::pdf::{render_pdf, PdfLayout};
use export_engine::{
    ContentPlan, ExportError, ExportFormat, ExportOutcome, ExportResult, ExportSettings, Exporter,
    MemorySaver, Packer, SectionContent,
};
use chrono::DateTime;
use project_model::{Author, Project, ProjectType};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::future::Future;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const FICTION_JSON: &str = r#"{
    "id": "p-1",
    "title": "The Narrow Road",
    "type": "fiction",
    "genre": "Historical",
    "targetAudience": "Adults",
    "wordCountGoal": 80000,
    "description": "A widow walks from Antioch to Jerusalem.",
    "premise": "Grief becomes a pilgrimage.",
    "theme": "Providence",
    "faithElement": "Answered prayer",
    "storyBeginning": "The letter arrives.",
    "storyMiddle": "The caravan is lost.",
    "storyEnd": "She reaches the city.",
    "readerTransformation": "Hope in loss",
    "protagonist": "Miriam",
    "protagonistGoals": "Find her son",
    "protagonistFlaw": "Pride",
    "antagonist": "Tobias",
    "antagonistMotivations": "Debt",
    "supportingCharacters": "Ezra, Lydia",
    "setting": "Syria and Judea",
    "timePeriod": "First century",
    "worldRules": "Roman roads, Roman law",
    "conflict": "A race against winter",
    "stakes": "Her son's freedom",
    "spiritualElements": "Psalms of ascent",
    "storyStructure": {
        "openingScene": "1", "hookingMoment": "2", "firstPlotPoint": "3",
        "firstPinchPoint": "4", "midpointShift": "5", "secondPinchPoint": "6",
        "secondPlotPoint": "7", "finalResolution": "8", "worldBackToNormal": "9"
    }
}"#;

const NONFICTION_JSON: &str = r#"{
    "title": "Rest for the Weary",
    "type": "nonfiction",
    "kingdomConcept": "Sabbath as resistance",
    "readerPersona": {
        "lifeStage": "New parents",
        "struggle": "Exhaustion",
        "desire": "Rest",
        "objections": "No time"
    },
    "coreThemes": "Rest, trust",
    "sourceMaterial": "Genesis 2",
    "holySpirit": "Start with confession",
    "nonfictionStructure": {
        "startingWhereTheyAre": "1", "hookingWithHope": "2", "firstShift": "3",
        "firstWakeUpCall": "4", "gospelCenteredReframe": "5", "costOfChange": "6",
        "finalBreakthrough": "7", "livingTheChange": "8", "finalEncouragement": "9"
    }
}"#;

fn fiction() -> Project {
    Project::from_json(FICTION_JSON).unwrap()
}

fn nonfiction() -> Project {
    Project::from_json(NONFICTION_JSON).unwrap()
}

fn fixed_settings() -> ExportSettings {
    let date = DateTime::parse_from_rfc3339("2024-05-01T12:00:00+00:00").unwrap();
    ExportSettings {
        pdf: PdfLayout::default().with_compression(false).with_creation_date(date),
        docx: DocxStyle::default().with_creation_date(date),
    }
}

/// A packer whose serialization step always fails
struct FailingPacker;

impl Packer for FailingPacker {
    fn pack(&self, _document: FlowDocument) -> impl Future<Output = ExportResult<Vec<u8>>> + Send {
        async { Err::<Vec<u8>, _>(ExportError::serialization("packer rejected the document")) }
    }
}

/// Body paragraphs of a DOCX, with `None` for page breaks
fn docx_paragraphs(bytes: &[u8]) -> Vec<Option<String>> {
    let xml = read_docx_part(bytes, "word/document.xml");
    let mut reader = Reader::from_str(&xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut is_break = false;
    let mut in_text = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"w:p" => {
                current.clear();
                is_break = false;
            }
            Event::End(e) if e.name().as_ref() == b"w:p" => {
                paragraphs.push(if is_break { None } else { Some(current.clone()) });
            }
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text = true,
            Event::End(e) if e.name().as_ref() == b"w:t" => in_text = false,
            Event::Text(t) if in_text => current.push_str(&t.unescape().unwrap()),
            Event::Empty(e) if e.name().as_ref() == b"w:br" => {
                if let Some(attr) = e.try_get_attribute("w:type").unwrap() {
                    is_break = attr.value.as_ref() == b"page";
                } else {
                    current.push('\n');
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    paragraphs
}

fn read_docx_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

/// An uncompressed PDF as text
fn pdf_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

// ----------------------------------------------------------------------------
// Content plan
// ----------------------------------------------------------------------------

#[test]
fn test_fiction_section_order() {
    let plan = ContentPlan::for_project(&fiction());
    assert_eq!(
        plan.section_titles(),
        vec![
            "Project Overview",
            "One-Line Premise",
            "Story Description",
            "Central Theme",
            "Faith Element",
            "Key Story Arc",
            "Reader Transformation",
            "Movement 1: Opening Scene",
            "Movement 2: Hooking Moment",
            "Movement 3: First Plot Point",
            "Movement 4: First Pinch Point",
            "Movement 5: Midpoint Shift",
            "Movement 6: Second Pinch Point",
            "Movement 7: Second Plot Point",
            "Movement 8: Final Resolution",
            "Movement 9: World Back to Normal",
            "Protagonist",
            "Antagonist",
            "Supporting Characters",
            "Setting & Time Period",
            "World Rules",
            "Conflict & Stakes",
            "Spiritual Elements",
        ]
    );
}

#[test]
fn test_nonfiction_section_order() {
    let plan = ContentPlan::for_project(&nonfiction());
    assert_eq!(
        plan.section_titles(),
        vec![
            "Kingdom Concept",
            "Reader Persona",
            "Core Themes",
            "Source Material",
            "Holy Spirit Insights",
            "Movement 1: Starting Where They Are",
            "Movement 2: Hooking with Hope",
            "Movement 3: The First Shift",
            "Movement 4: The First Wake-Up Call",
            "Movement 5: Gospel-Centered Reframe",
            "Movement 6: The Cost of Change",
            "Movement 7: The Final Breakthrough",
            "Movement 8: Living the Change",
            "Movement 9: Final Encouragement",
        ]
    );
    assert_eq!(plan.parts[1].heading, "Part 2: StoryWise™ Nonfiction Structure");
}

#[test]
fn test_blank_reader_persona_is_omitted() {
    let mut project = nonfiction();
    project.nonfiction.reader_persona = Some(project_model::ReaderPersona {
        life_stage: Some(" ".into()),
        struggle: Some(String::new()),
        desire: None,
        objections: Some("\t".into()),
    });
    assert!(ContentPlan::for_project(&project).section("Reader Persona").is_none());

    project.nonfiction.reader_persona.as_mut().unwrap().desire = Some("Rest".into());
    let plan = ContentPlan::for_project(&project);
    match &plan.section("Reader Persona").unwrap().content {
        SectionContent::Group(fields) => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].label, "Desire");
        }
        other => panic!("expected a group, got {:?}", other),
    }
}

#[test]
fn test_empty_premise_gets_placeholder() {
    let mut project = fiction();
    project.fiction.premise = Some(String::new());
    let plan = ContentPlan::for_project(&project);
    assert_eq!(
        plan.section("One-Line Premise").unwrap().content,
        SectionContent::Text("Not provided".into())
    );
}

#[test]
fn test_label_humanization() {
    assert_eq!(format_label("protagonistGoals"), "Protagonist Goals");
    assert_eq!(format_label("premise"), "Premise");
}

#[test]
fn test_word_count_formatting() {
    assert_eq!(format_word_count(Some(80000)), "80,000 words");
    assert_eq!(format_word_count(None), "Not specified");

    let plan = ContentPlan::for_project(&fiction());
    match &plan.section("Project Overview").unwrap().content {
        SectionContent::Group(fields) => {
            let goal = fields.iter().find(|f| f.key == "wordCountGoal").unwrap();
            assert_eq!(goal.value, "80,000 words");
        }
        other => panic!("expected a group, got {:?}", other),
    }
}

#[test]
fn test_forced_breaks_in_movement_run() {
    let plan = ContentPlan::for_project(&fiction());
    let breaks: Vec<bool> = plan
        .sections()
        .filter(|s| s.title.starts_with("Movement "))
        .map(|s| s.force_page_break_before)
        .collect();
    assert_eq!(breaks, vec![false, false, false, true, false, false, true, false, false]);
}

// ----------------------------------------------------------------------------
// Orchestrator
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_filenames_for_both_formats() {
    let exporter = Exporter::new(MemorySaver::new(), fixed_settings());
    let project = Project::new(ProjectType::Fiction).with_title("My Book");

    let pdf = exporter.export(&project, &Author::anonymous(), ExportFormat::Pdf).await;
    let word = exporter.export(&project, &Author::anonymous(), ExportFormat::Word).await;
    let untitled = exporter
        .export(&Project::new(ProjectType::Fiction), &Author::anonymous(), ExportFormat::Pdf)
        .await;

    assert_eq!(pdf, ExportOutcome::Success { filename: "My Book_Export.pdf".into() });
    assert_eq!(word, ExportOutcome::Success { filename: "My Book_Export.docx".into() });
    assert_eq!(untitled, ExportOutcome::Success { filename: "Project_Export.pdf".into() });
    assert_eq!(
        exporter.saver().filenames(),
        vec!["My Book_Export.pdf", "My Book_Export.docx", "Project_Export.pdf"]
    );
}

#[tokio::test]
async fn test_failed_serialization_saves_nothing() {
    let exporter = Exporter::with_packer(MemorySaver::new(), FailingPacker, fixed_settings());

    let err = exporter
        .export_to_word(&fiction(), &Author::new("Ruth"))
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::Serialization(_)));

    let outcome = exporter.export(&fiction(), &Author::new("Ruth"), ExportFormat::Word).await;
    match outcome {
        ExportOutcome::Error { message } => assert!(message.contains("packer rejected")),
        other => panic!("expected an error outcome, got {:?}", other),
    }
    assert!(exporter.saver().is_empty());
}

#[tokio::test]
async fn test_render_failure_saves_nothing() {
    let mut settings = fixed_settings();
    settings.pdf = settings.pdf.with_strict_encoding(true);
    let exporter = Exporter::new(MemorySaver::new(), settings);

    let project = Project::new(ProjectType::Fiction).with_title("平安");
    let outcome = exporter.export(&project, &Author::anonymous(), ExportFormat::Pdf).await;
    assert!(!outcome.is_success());
    assert!(exporter.saver().is_empty());
}

#[tokio::test]
async fn test_invalid_docx_style_is_an_export_error() {
    let mut settings = fixed_settings();
    settings.docx.footer_color = "grey".into();
    let exporter = Exporter::new(MemorySaver::new(), settings);

    let outcome = exporter.export(&nonfiction(), &Author::anonymous(), ExportFormat::Word).await;
    assert!(matches!(outcome, ExportOutcome::Error { .. }));
    assert!(exporter.saver().is_empty());
}

// ----------------------------------------------------------------------------
// Determinism
// ----------------------------------------------------------------------------

#[test]
fn test_plan_and_flow_are_deterministic() {
    let project = fiction();
    assert_eq!(ContentPlan::for_project(&project), ContentPlan::for_project(&project));
    assert_eq!(
        build_flow_document(&project, &Author::new("Ruth")),
        build_flow_document(&project, &Author::new("Ruth"))
    );
}

#[test]
fn test_pdf_is_byte_identical_with_fixed_date() {
    let settings = fixed_settings();
    let first = render_pdf(&fiction(), &Author::new("Ruth"), &settings.pdf).unwrap();
    let second = render_pdf(&fiction(), &Author::new("Ruth"), &settings.pdf).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_docx_body_is_deterministic() {
    let exporter = Exporter::new(MemorySaver::new(), fixed_settings());
    exporter.export_to_word(&nonfiction(), &Author::anonymous()).await.unwrap();
    exporter.export_to_word(&nonfiction(), &Author::anonymous()).await.unwrap();

    let saved = exporter.saver().artifacts();
    assert_eq!(
        read_docx_part(&saved[0].1, "word/document.xml"),
        read_docx_part(&saved[1].1, "word/document.xml")
    );
}

// ----------------------------------------------------------------------------
// Rendered containers
// ----------------------------------------------------------------------------

#[test]
fn test_pdf_every_page_has_branding_and_number() {
    let settings = fixed_settings();
    let bytes = render_pdf(&fiction(), &Author::new("Ruth"), &settings.pdf).unwrap();
    let text = pdf_text(&bytes);

    let pages = text.matches("/Type /Page >>").count();
    assert!(pages >= 5, "cover plus four parts, got {}", pages);
    // one footer per page, plus the cover's own branding line
    assert_eq!(text.matches(&format!("({}) Tj", BRANDING_TEXT)).count(), pages + 1);
    for i in 1..=pages {
        assert!(text.contains(&format!("(Page {} of {}) Tj", i, pages)));
    }
    assert!(text.contains("(By Ruth) Tj"));
    assert!(text.contains("(fiction Project) Tj"));
}

#[tokio::test]
async fn test_docx_body_matches_flow_document() {
    let exporter = Exporter::new(MemorySaver::new(), fixed_settings());
    let project = fiction();
    let author = Author::new("Ruth");
    exporter.export_to_word(&project, &author).await.unwrap();

    let bytes = &exporter.saver().artifacts()[0].1;
    let paragraphs = docx_paragraphs(bytes);
    let flow = build_flow_document(&project, &author);

    let expected: Vec<Option<String>> = flow
        .blocks
        .iter()
        .map(|b| match b {
            FlowBlock::PageBreak => None,
            other => other.text().map(str::to_string),
        })
        .collect();
    assert_eq!(paragraphs, expected);
    assert_eq!(paragraphs[0].as_deref(), Some("The Narrow Road"));
    assert!(paragraphs.contains(&Some("Protagonist Goals:".into())));

    let footer = read_docx_part(bytes, "word/footer1.xml");
    assert!(footer.contains(BRANDING_TEXT));
    let core = read_docx_part(bytes, "docProps/core.xml");
    assert!(core.contains("<dc:creator>Ruth</dc:creator>"));
    assert!(core.contains("<dc:description>fiction project export from GospelWise Author App</dc:description>"));
}

#[tokio::test]
async fn test_docx_movement_breaks() {
    let exporter = Exporter::new(MemorySaver::new(), fixed_settings());
    exporter.export_to_word(&fiction(), &Author::anonymous()).await.unwrap();
    let paragraphs = docx_paragraphs(&exporter.saver().artifacts()[0].1);

    for n in 1..=9 {
        let at = paragraphs
            .iter()
            .position(|p| p.as_deref().is_some_and(|t| t.starts_with(&format!("Movement {}:", n))))
            .unwrap();
        let after_break = paragraphs[at - 1].is_none();
        assert_eq!(after_break, n == 4 || n == 7, "movement {}", n);
    }
}
