use crate::catalog::{Category, SelectOption};
use crate::resolver::Resolution;

/// What the caller has to show after a step. The reactor never prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    Log(String),
    RenderError(String),
    RenderSuggestion(String),
    /// A previously rendered result is stale and must disappear.
    ClearResult,
    ListOptions {
        category: Category,
        enabled: bool,
        options: Vec<SelectOption>,
    },
}

impl From<&Resolution> for SideEffect {
    fn from(resolution: &Resolution) -> Self {
        match resolution {
            Resolution::Error(msg) => SideEffect::RenderError(msg.clone()),
            Resolution::Suggestion(msg) => SideEffect::RenderSuggestion(msg.clone()),
        }
    }
}
