use serde::Serialize;
use std::fmt;

use super::CreateView;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct StyleListViewModel {
    pub styles: Vec<StyleEntry>,
}

#[derive(Debug, Serialize)]
pub struct StyleEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub current: bool,
}

#[derive(Debug, Serialize)]
pub struct ColorListViewModel {
    pub style: String,
    pub combos: Vec<ColorComboEntry>,
}

#[derive(Debug, Serialize)]
pub struct ColorComboEntry {
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub current: bool,
}

#[derive(Debug, Serialize)]
pub struct ColorsViewModel {
    pub primary: String,
    pub secondary: String,
    pub combo: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WizardResultViewModel {
    pub steps: Vec<WizardStepEntry>,
    pub route: String,
}

#[derive(Debug, Serialize)]
pub struct WizardStepEntry {
    pub number: u8,
    pub title: String,
    pub value: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for StyleListViewModel {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::builder::StyleListView;
        Box::new(StyleListView::new(self, color))
    }
}

impl CreateView for ColorListViewModel {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::builder::ColorListView;
        Box::new(ColorListView::new(self, color))
    }
}

impl CreateView for ColorsViewModel {
    fn create_view<'a>(&'a self, _color: bool) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::builder::ColorsView;
        Box::new(ColorsView::new(self))
    }
}

impl CreateView for WizardResultViewModel {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::builder::WizardResultView;
        Box::new(WizardResultView::new(self, color))
    }
}
