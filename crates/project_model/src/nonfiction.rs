//! Non-fiction planner content

use serde::{Deserialize, Serialize};

/// Fields captured by the message-mapping planner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NonfictionContent {
    pub kingdom_concept: Option<String>,
    pub reader_persona: Option<ReaderPersona>,
    pub core_themes: Option<String>,
    pub source_material: Option<String>,
    pub holy_spirit: Option<String>,
    pub nonfiction_structure: Option<NonfictionStructure>,
}

/// The intended reader, described as a character
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderPersona {
    pub life_stage: Option<String>,
    pub struggle: Option<String>,
    pub desire: Option<String>,
    pub objections: Option<String>,
}

/// The nine StoryWise movements of a non-fiction message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NonfictionStructure {
    pub starting_where_they_are: Option<String>,
    pub hooking_with_hope: Option<String>,
    pub first_shift: Option<String>,
    pub first_wake_up_call: Option<String>,
    pub gospel_centered_reframe: Option<String>,
    pub cost_of_change: Option<String>,
    pub final_breakthrough: Option<String>,
    pub living_the_change: Option<String>,
    pub final_encouragement: Option<String>,
}

impl NonfictionStructure {
    /// Movement values in message order
    pub fn movements(&self) -> [Option<&str>; 9] {
        [
            self.starting_where_they_are.as_deref(),
            self.hooking_with_hope.as_deref(),
            self.first_shift.as_deref(),
            self.first_wake_up_call.as_deref(),
            self.gospel_centered_reframe.as_deref(),
            self.cost_of_change.as_deref(),
            self.final_breakthrough.as_deref(),
            self.living_the_change.as_deref(),
            self.final_encouragement.as_deref(),
        ]
    }
}
