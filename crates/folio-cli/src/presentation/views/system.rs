use std::fmt;

use super::{bold, dim, yellow};
use crate::presentation::view_models::{InitViewModel, OverviewViewModel, ResetViewModel};

pub struct InitView<'a> {
    data: &'a InitViewModel,
    color: bool,
}

impl<'a> InitView<'a> {
    pub fn new(data: &'a InitViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Data dir: {}", self.data.data_dir.display())?;
        let config_state = if self.data.config_written {
            "written"
        } else {
            "kept"
        };
        writeln!(
            f,
            "Config:   {} {}",
            self.data.config_path.display(),
            dim(&format!("({})", config_state), self.color)
        )?;
        writeln!(f, "Stored:   {} value(s)", self.data.stored_keys.len())?;
        for recovered in &self.data.recovered {
            writeln!(
                f,
                "{}",
                yellow(
                    &format!("  {} reset to default: {}", recovered.key, recovered.reason),
                    self.color
                )
            )?;
        }
        Ok(())
    }
}

pub struct ResetView<'a> {
    data: &'a ResetViewModel,
}

impl<'a> ResetView<'a> {
    pub fn new(data: &'a ResetViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ResetView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Removed {} stored value(s)", self.data.removed)
    }
}

pub struct OverviewView<'a> {
    data: &'a OverviewViewModel,
    color: bool,
}

impl<'a> OverviewView<'a> {
    pub fn new(data: &'a OverviewViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl<'a> fmt::Display for OverviewView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = self.color;
        writeln!(f, "{}", bold("folio - portfolio builder", c))?;
        writeln!(f)?;
        writeln!(f, "Data dir:   {}", self.data.data_dir.display())?;
        writeln!(
            f,
            "Style:      {}",
            self.data.style.as_deref().unwrap_or("(not chosen)")
        )?;
        match (&self.data.primary_color, &self.data.secondary_color) {
            (Some(primary), Some(secondary)) => {
                writeln!(f, "Colors:     {} / {}", primary, secondary)?
            }
            _ => writeln!(f, "Colors:     (not chosen)")?,
        }
        let details = if self.data.details_complete {
            "complete"
        } else {
            "incomplete"
        };
        writeln!(f, "Details:    {} ({})", self.data.name, details)?;
        writeln!(f, "Navigation: {}", self.data.navigation.join(" > "))?;
        Ok(())
    }
}
