use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::CreateView;

#[derive(Debug, Serialize)]
pub struct OpenViewModel {
    pub requested: String,
    /// Every route visited, the requested one first.
    pub visited: Vec<String>,
    pub outcome: OpenOutcome,
    pub style: Option<String>,
    pub page_id: Option<String>,
    pub output: Option<PathBuf>,
    /// Present when the HTML goes to stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenOutcome {
    Builder,
    Rendered,
    TemplateNotFound,
}

impl CreateView for OpenViewModel {
    fn create_view<'a>(&'a self, _color: bool) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::open::OpenView;
        Box::new(OpenView::new(self))
    }
}
