use std::fmt;

use super::{bold, dim, marker};
use crate::presentation::view_models::{
    ColorListViewModel, ColorsViewModel, StyleListViewModel, WizardResultViewModel,
};

pub struct StyleListView<'a> {
    data: &'a StyleListViewModel,
    color: bool,
}

impl<'a> StyleListView<'a> {
    pub fn new(data: &'a StyleListViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl<'a> fmt::Display for StyleListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for style in &self.data.styles {
            writeln!(
                f,
                "{} {:<10} {:<10} {}",
                marker(style.current, self.color),
                style.id,
                bold(&style.name, self.color),
                dim(&style.description, self.color)
            )?;
        }
        Ok(())
    }
}

pub struct ColorListView<'a> {
    data: &'a ColorListViewModel,
    color: bool,
}

impl<'a> ColorListView<'a> {
    pub fn new(data: &'a ColorListViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl<'a> fmt::Display for ColorListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Color combos for {}:", bold(&self.data.style, self.color))?;
        for combo in &self.data.combos {
            writeln!(
                f,
                "{} {:<12} {} / {}",
                marker(combo.current, self.color),
                combo.name,
                combo.primary,
                combo.secondary
            )?;
        }
        Ok(())
    }
}

pub struct ColorsView<'a> {
    data: &'a ColorsViewModel,
}

impl<'a> ColorsView<'a> {
    pub fn new(data: &'a ColorsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ColorsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Primary:   {}", self.data.primary)?;
        writeln!(f, "Secondary: {}", self.data.secondary)?;
        writeln!(
            f,
            "Combo:     {}",
            self.data.combo.as_deref().unwrap_or("custom")
        )
    }
}

pub struct WizardResultView<'a> {
    data: &'a WizardResultViewModel,
    color: bool,
}

impl<'a> WizardResultView<'a> {
    pub fn new(data: &'a WizardResultViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl<'a> fmt::Display for WizardResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for step in &self.data.steps {
            writeln!(
                f,
                "{}. {:<18} {}",
                step.number,
                step.title,
                bold(&step.value, self.color)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Portfolio: {}", self.data.route)
    }
}
