use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::CreateView;

#[derive(Debug, Serialize)]
pub struct InitViewModel {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_written: bool,
    pub stored_keys: Vec<String>,
    pub recovered: Vec<RecoveredKey>,
}

/// A stored value that could not be read and was replaced by its default.
#[derive(Debug, Serialize)]
pub struct RecoveredKey {
    pub key: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ResetViewModel {
    pub removed: usize,
}

#[derive(Debug, Serialize)]
pub struct OverviewViewModel {
    pub data_dir: PathBuf,
    pub style: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub name: String,
    pub details_complete: bool,
    pub navigation: Vec<String>,
    pub ready: bool,
}

impl CreateView for InitViewModel {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::InitView;
        Box::new(InitView::new(self, color))
    }
}

impl CreateView for ResetViewModel {
    fn create_view<'a>(&'a self, _color: bool) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ResetView;
        Box::new(ResetView::new(self))
    }
}

impl CreateView for OverviewViewModel {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::OverviewView;
        Box::new(OverviewView::new(self, color))
    }
}
