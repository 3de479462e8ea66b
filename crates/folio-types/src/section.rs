use crate::error::{ModelError, Result};
use crate::page::PageConfig;
use serde::{Deserialize, Serialize};

/// A content block inside one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    pub id: String,
    pub name: String,
    pub page_id: String,
    pub enabled: bool,
}

impl SectionConfig {
    fn new(id: &str, name: &str, page_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            page_id: page_id.to_string(),
            enabled: true,
        }
    }
}

pub fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig::new("hero", "Hero Banner", "home"),
        SectionConfig::new("featured-projects", "Featured Projects", "home"),
        SectionConfig::new("bio", "Biography", "about"),
        SectionConfig::new("social-links", "Social Links", "about"),
        SectionConfig::new("timeline", "Career Timeline", "experience"),
        SectionConfig::new("project-grid", "Project Grid", "projects"),
        SectionConfig::new("skill-list", "Skill List", "skills"),
        SectionConfig::new("contact-details", "Contact Details", "contact"),
        SectionConfig::new("contact-form", "Contact Form", "contact"),
    ]
}

pub fn toggle_section(sections: &[SectionConfig], id: &str) -> Result<Vec<SectionConfig>> {
    if !sections.iter().any(|s| s.id == id) {
        return Err(ModelError::UnknownSection(id.to_string()));
    }
    Ok(sections
        .iter()
        .map(|section| {
            if section.id == id {
                SectionConfig {
                    enabled: !section.enabled,
                    ..section.clone()
                }
            } else {
                section.clone()
            }
        })
        .collect())
}

/// Enabled sections belonging to `page_id`, in catalog order.
pub fn sections_for_page<'a>(sections: &'a [SectionConfig], page_id: &str) -> Vec<&'a SectionConfig> {
    sections
        .iter()
        .filter(|s| s.page_id == page_id && s.enabled)
        .collect()
}

/// Every section must point at a page in `pages`.
pub fn validate_sections(pages: &[PageConfig], sections: &[SectionConfig]) -> Result<()> {
    for section in sections {
        if !pages.iter().any(|p| p.id == section.page_id) {
            return Err(ModelError::DanglingSection {
                section: section.id.clone(),
                page: section.page_id.clone(),
            });
        }
    }
    Ok(())
}
