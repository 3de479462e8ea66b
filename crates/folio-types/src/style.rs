use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three built-in visual templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleId {
    Minimal,
    Creative,
    Corporate,
}

impl StyleId {
    pub const ALL: [StyleId; 3] = [StyleId::Minimal, StyleId::Creative, StyleId::Corporate];

    /// Exact, case-sensitive match on the stored id.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "minimal" => Some(StyleId::Minimal),
            "creative" => Some(StyleId::Creative),
            "corporate" => Some(StyleId::Corporate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleId::Minimal => "minimal",
            StyleId::Creative => "creative",
            StyleId::Corporate => "corporate",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StyleId::Minimal => "Minimal",
            StyleId::Creative => "Creative",
            StyleId::Corporate => "Corporate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StyleId::Minimal => "Clean typography and plenty of white space",
            StyleId::Creative => "Bold gradients and playful card layouts",
            StyleId::Corporate => "Structured sections with a professional tone",
        }
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named primary/secondary color pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCombo {
    pub name: String,
    pub primary: String,
    pub secondary: String,
}

impl ColorCombo {
    fn new(name: &str, primary: &str, secondary: &str) -> Self {
        Self {
            name: name.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }
}

/// Built-in color combos offered for a style.
pub fn color_combos(style: StyleId) -> Vec<ColorCombo> {
    match style {
        StyleId::Minimal => vec![
            ColorCombo::new("Monochrome", "#111827", "#6b7280"),
            ColorCombo::new("Slate Blue", "#1e3a8a", "#93c5fd"),
            ColorCombo::new("Forest", "#14532d", "#86efac"),
        ],
        StyleId::Creative => vec![
            ColorCombo::new("Sunset", "#f97316", "#db2777"),
            ColorCombo::new("Neon", "#8b5cf6", "#06b6d4"),
            ColorCombo::new("Candy", "#ec4899", "#facc15"),
        ],
        StyleId::Corporate => vec![
            ColorCombo::new("Navy", "#0f172a", "#2563eb"),
            ColorCombo::new("Charcoal", "#1f2937", "#0d9488"),
            ColorCombo::new("Burgundy", "#7f1d1d", "#d97706"),
        ],
    }
}

/// Look up a combo by name (case-insensitive) across all styles.
pub fn find_color_combo(name: &str) -> Option<ColorCombo> {
    StyleId::ALL
        .into_iter()
        .flat_map(color_combos)
        .find(|combo| combo.name.eq_ignore_ascii_case(name.trim()))
}
