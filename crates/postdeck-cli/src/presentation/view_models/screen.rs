use postdeck_types::PostId;
use serde::Serialize;

use super::{PostRowViewModel, StatusLevel};

/// Everything the interactive screen shows, rebuilt on every frame
#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub header: HeaderViewModel,
    pub body: ListBodyViewModel,
    pub status_bar: StatusBarViewModel,
    pub footer: String,
}

impl ScreenViewModel {
    pub fn rows(&self) -> &[PostRowViewModel] {
        match &self.body {
            ListBodyViewModel::Rows(rows) => rows,
            ListBodyViewModel::Loading { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderViewModel {
    pub title: String,
    pub actions: Vec<ActionViewModel>,
    pub loaded_line: String,
}

/// A trigger affordance shown in the header
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActionViewModel {
    pub key: char,
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ListBodyViewModel {
    Loading { message: String },
    Rows(Vec<PostRowViewModel>),
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub message: String,
    pub level: StatusLevel,
    pub post_count: usize,
    pub expanded_count: usize,
}

/// User intents emitted by the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Refresh,
    ExpandAll,
    CollapseAll,
    Toggle(PostId),
    Quit,
}
