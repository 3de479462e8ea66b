use serde::Serialize;
use std::fmt;

use super::CreateView;

/// Pages in presentation order, disabled ones included.
#[derive(Debug, Serialize)]
pub struct PagesViewModel {
    pub pages: Vec<PageEntry>,
}

#[derive(Debug, Serialize)]
pub struct PageEntry {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub icon: String,
    pub enabled: bool,
    pub order: u32,
}

#[derive(Debug, Serialize)]
pub struct SectionsViewModel {
    pub sections: Vec<SectionEntry>,
}

#[derive(Debug, Serialize)]
pub struct SectionEntry {
    pub id: String,
    pub name: String,
    pub page_id: String,
    pub enabled: bool,
}

impl CreateView for PagesViewModel {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::pages::PagesView;
        Box::new(PagesView::new(self, color))
    }
}

impl CreateView for SectionsViewModel {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::pages::SectionsView;
        Box::new(SectionsView::new(self, color))
    }
}
