//! Assertions over `--format json` output.
//!
//! Every command prints `{ "badge": ..., "content": ..., "suggestions": [...] }`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the status badge level (`success`, `info`, `warning`, `error`).
pub fn assert_badge(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;
    if level != expected {
        anyhow::bail!("Expected badge {}, got {}", expected, level);
    }
    Ok(())
}

/// Ids of `content.pages`, in output order.
pub fn page_ids(json: &Value) -> Result<Vec<String>> {
    let pages = json["content"]["pages"]
        .as_array()
        .context("Expected 'content.pages' array in JSON")?;
    Ok(pages
        .iter()
        .filter_map(|page| page["id"].as_str().map(String::from))
        .collect())
}

/// Assert the enabled pages, in order.
pub fn assert_navigation(json: &Value, expected: &[&str]) -> Result<()> {
    let pages = json["content"]["pages"]
        .as_array()
        .context("Expected 'content.pages' array in JSON")?;
    let enabled: Vec<&str> = pages
        .iter()
        .filter(|page| page["enabled"].as_bool() == Some(true))
        .filter_map(|page| page["id"].as_str())
        .collect();
    if enabled != expected {
        anyhow::bail!("Expected navigation {:?}, got {:?}", expected, enabled);
    }
    Ok(())
}
