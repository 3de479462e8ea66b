use crate::page::{PageConfig, default_pages, navigation};
use crate::section::{SectionConfig, default_sections};
use crate::style::StyleId;
use crate::user::UserDetails;
use serde::Serialize;

/// Everything the store holds, after hydration.
///
/// `style`, `primary_color` and `secondary_color` stay `None` until the
/// builder has written them; the renderer treats that as "not configured".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConfig {
    pub style: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub color_combo_name: Option<String>,
    pub user_details: UserDetails,
    pub pages: Vec<PageConfig>,
    pub sections: Vec<SectionConfig>,
}

impl Default for StoredConfig {
    fn default() -> Self {
        Self {
            style: None,
            primary_color: None,
            secondary_color: None,
            color_combo_name: None,
            user_details: UserDetails::sample(),
            pages: default_pages(),
            sections: default_sections(),
        }
    }
}

impl StoredConfig {
    /// The stored style id, if it names a known template.
    pub fn style_id(&self) -> Option<StyleId> {
        self.style.as_deref().and_then(StyleId::parse)
    }

    /// Both colors, when the builder has chosen them.
    pub fn colors(&self) -> Option<(&str, &str)> {
        match (self.primary_color.as_deref(), self.secondary_color.as_deref()) {
            (Some(primary), Some(secondary)) => Some((primary, secondary)),
            _ => None,
        }
    }

    pub fn navigation(&self) -> Vec<PageConfig> {
        navigation(&self.pages)
    }
}
