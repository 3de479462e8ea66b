use std::fmt;

use super::{dim, green};
use crate::presentation::view_models::{PagesViewModel, SectionsViewModel};

fn state(enabled: bool, color: bool) -> String {
    if enabled {
        green("on ", color)
    } else {
        dim("off", color)
    }
}

pub struct PagesView<'a> {
    data: &'a PagesViewModel,
    color: bool,
}

impl<'a> PagesView<'a> {
    pub fn new(data: &'a PagesViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl<'a> fmt::Display for PagesView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<4} {:<12} {:<12} {:<10} STATE", "POS", "ID", "NAME", "ICON")?;
        for page in &self.data.pages {
            writeln!(
                f,
                "{:<4} {:<12} {:<12} {:<10} {}",
                page.position,
                page.id,
                page.name,
                page.icon,
                state(page.enabled, self.color)
            )?;
        }
        Ok(())
    }
}

pub struct SectionsView<'a> {
    data: &'a SectionsViewModel,
    color: bool,
}

impl<'a> SectionsView<'a> {
    pub fn new(data: &'a SectionsViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl<'a> fmt::Display for SectionsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<18} {:<20} {:<12} STATE", "ID", "NAME", "PAGE")?;
        for section in &self.data.sections {
            writeln!(
                f,
                "{:<18} {:<20} {:<12} {}",
                section.id,
                section.name,
                section.page_id,
                state(section.enabled, self.color)
            )?;
        }
        Ok(())
    }
}
