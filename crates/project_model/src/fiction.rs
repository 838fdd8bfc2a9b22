//! Fiction planner content

use serde::{Deserialize, Serialize};

/// Fields captured by the fiction planner tabs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FictionContent {
    pub premise: Option<String>,
    pub theme: Option<String>,
    pub faith_element: Option<String>,
    pub story_beginning: Option<String>,
    pub story_middle: Option<String>,
    pub story_end: Option<String>,
    pub reader_transformation: Option<String>,
    pub protagonist: Option<String>,
    pub protagonist_goals: Option<String>,
    pub protagonist_flaw: Option<String>,
    pub antagonist: Option<String>,
    pub antagonist_motivations: Option<String>,
    pub supporting_characters: Option<String>,
    pub setting: Option<String>,
    pub time_period: Option<String>,
    pub world_rules: Option<String>,
    pub conflict: Option<String>,
    pub stakes: Option<String>,
    pub spiritual_elements: Option<String>,
    pub story_structure: Option<StoryStructure>,
}

/// The nine StoryWise movements of a novel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryStructure {
    pub opening_scene: Option<String>,
    pub hooking_moment: Option<String>,
    pub first_plot_point: Option<String>,
    pub first_pinch_point: Option<String>,
    pub midpoint_shift: Option<String>,
    pub second_pinch_point: Option<String>,
    pub second_plot_point: Option<String>,
    pub final_resolution: Option<String>,
    pub world_back_to_normal: Option<String>,
}

impl StoryStructure {
    /// Movement values in narrative order
    pub fn movements(&self) -> [Option<&str>; 9] {
        [
            self.opening_scene.as_deref(),
            self.hooking_moment.as_deref(),
            self.first_plot_point.as_deref(),
            self.first_pinch_point.as_deref(),
            self.midpoint_shift.as_deref(),
            self.second_pinch_point.as_deref(),
            self.second_plot_point.as_deref(),
            self.final_resolution.as_deref(),
            self.world_back_to_normal.as_deref(),
        ]
    }
}
