//! The four-step builder flow: style, colors, details, generate.

use crate::workspace::Workspace;
use folio_types::{ColorCombo, Route, StyleId, UserDetails, color_combos, find_color_combo};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    MissingStyle,
    MissingColors,
    UnknownCombo(String),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::MissingStyle => write!(f, "Choose a style before generating"),
            WizardError::MissingColors => write!(f, "Choose a color scheme before generating"),
            WizardError::UnknownCombo(name) => write!(f, "Unknown color combo: {}", name),
        }
    }
}

impl std::error::Error for WizardError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Style = 1,
    Colors = 2,
    Details = 3,
    Generate = 4,
}

impl WizardStep {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 4;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WizardStep::Style),
            2 => Some(WizardStep::Colors),
            3 => Some(WizardStep::Details),
            4 => Some(WizardStep::Generate),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Style => "Choose a style",
            WizardStep::Colors => "Pick colors",
            WizardStep::Details => "Add your details",
            WizardStep::Generate => "Generate",
        }
    }
}

/// Selected colors; `combo` is `None` for a custom pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChoice {
    pub combo: Option<String>,
    pub primary: String,
    pub secondary: String,
}

impl From<ColorCombo> for ColorChoice {
    fn from(combo: ColorCombo) -> Self {
        Self {
            combo: Some(combo.name),
            primary: combo.primary,
            secondary: combo.secondary,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    style: Option<StyleId>,
    colors: Option<ColorChoice>,
    details: UserDetails,
}

impl Wizard {
    /// Start at step one with the given details pre-filled.
    pub fn new(details: UserDetails) -> Self {
        Self {
            step: WizardStep::Style,
            style: None,
            colors: None,
            details,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Advance one step; stays on the last step.
    pub fn next(&mut self) -> WizardStep {
        let number = (self.step.number() + 1).min(WizardStep::LAST);
        self.step = WizardStep::from_number(number).unwrap_or(WizardStep::Generate);
        self.step
    }

    /// Go back one step; stays on the first step.
    pub fn back(&mut self) -> WizardStep {
        let number = self.step.number().saturating_sub(1).max(WizardStep::FIRST);
        self.step = WizardStep::from_number(number).unwrap_or(WizardStep::Style);
        self.step
    }

    pub fn style(&self) -> Option<StyleId> {
        self.style
    }

    pub fn colors(&self) -> Option<&ColorChoice> {
        self.colors.as_ref()
    }

    pub fn details(&self) -> &UserDetails {
        &self.details
    }

    pub fn choose_style(&mut self, style: StyleId) {
        self.style = Some(style);
    }

    /// Pick a named combo, preferring the chosen style's palette.
    pub fn choose_combo(&mut self, name: &str) -> Result<&ColorChoice, WizardError> {
        let in_style = self.style.and_then(|style| {
            color_combos(style)
                .into_iter()
                .find(|combo| combo.name.eq_ignore_ascii_case(name.trim()))
        });
        let combo = in_style
            .or_else(|| find_color_combo(name))
            .ok_or_else(|| WizardError::UnknownCombo(name.to_string()))?;
        Ok(self.colors.insert(combo.into()))
    }

    pub fn choose_custom_colors(&mut self, primary: &str, secondary: &str) {
        self.colors = Some(ColorChoice {
            combo: None,
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        });
    }

    pub fn set_details(&mut self, details: UserDetails) {
        self.details = details;
    }

    /// Write style, colors and details, then return where to navigate.
    pub fn finish(&mut self, workspace: &mut Workspace) -> Result<Route, WizardError> {
        let style = self.style.ok_or(WizardError::MissingStyle)?;
        let colors = self.colors.clone().ok_or(WizardError::MissingColors)?;

        workspace.set_style(style);
        workspace.set_colors(&colors.primary, &colors.secondary, colors.combo.as_deref());
        workspace.set_user(self.details.clone());
        self.step = WizardStep::Generate;

        let nav = workspace.snapshot().navigation();
        Ok(nav
            .first()
            .map(|page| Route::Portfolio(page.id.clone()))
            .unwrap_or(Route::BuilderRoot))
    }
}
