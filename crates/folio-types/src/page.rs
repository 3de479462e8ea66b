use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Id of the page that can never be disabled.
pub const HOME_PAGE_ID: &str = "home";

/// Symbolic icon name, resolved to a glyph by each template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageIcon {
    Home,
    User,
    Briefcase,
    Folder,
    Code,
    Mail,
}

impl PageIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageIcon::Home => "home",
            PageIcon::User => "user",
            PageIcon::Briefcase => "briefcase",
            PageIcon::Folder => "folder",
            PageIcon::Code => "code",
            PageIcon::Mail => "mail",
        }
    }
}

/// One navigable page of the generated portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub id: String,
    pub name: String,
    pub icon: PageIcon,
    pub enabled: bool,
    pub order: u32,
}

impl PageConfig {
    pub fn new(id: &str, name: &str, icon: PageIcon, order: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon,
            enabled: true,
            order,
        }
    }

    pub fn is_home(&self) -> bool {
        self.id == HOME_PAGE_ID
    }
}

/// Seed list: six pages, all enabled, ordered 1..6.
pub fn default_pages() -> Vec<PageConfig> {
    vec![
        PageConfig::new("home", "Home", PageIcon::Home, 1),
        PageConfig::new("about", "About", PageIcon::User, 2),
        PageConfig::new("experience", "Experience", PageIcon::Briefcase, 3),
        PageConfig::new("projects", "Projects", PageIcon::Folder, 4),
        PageConfig::new("skills", "Skills", PageIcon::Code, 5),
        PageConfig::new("contact", "Contact", PageIcon::Mail, 6),
    ]
}

/// Flip `enabled` on the page with `id`. Every other field is left alone.
pub fn toggle_page(pages: &[PageConfig], id: &str) -> Vec<PageConfig> {
    pages
        .iter()
        .map(|page| {
            if page.id == id {
                PageConfig {
                    enabled: !page.enabled,
                    ..page.clone()
                }
            } else {
                page.clone()
            }
        })
        .collect()
}

/// Move the page at `source` to `dest` within the order-sorted list, then
/// renumber every page 1..N by its new position.
pub fn reorder(pages: &[PageConfig], source: usize, dest: usize) -> Result<Vec<PageConfig>> {
    let len = pages.len();
    for index in [source, dest] {
        if index >= len {
            return Err(ModelError::IndexOutOfRange { index, len });
        }
    }

    let mut sorted = pages.to_vec();
    sorted.sort_by_key(|page| page.order);

    let moved = sorted.remove(source);
    sorted.insert(dest, moved);

    for (position, page) in sorted.iter_mut().enumerate() {
        page.order = position as u32 + 1;
    }
    Ok(sorted)
}

/// Enabled pages in presentation order. Every nav bar and the route guard read this.
pub fn navigation(pages: &[PageConfig]) -> Vec<PageConfig> {
    let mut enabled: Vec<PageConfig> = pages.iter().filter(|p| p.enabled).cloned().collect();
    enabled.sort_by_key(|page| page.order);
    enabled
}

/// Editing path over a page list. Unlike [`toggle_page`] it refuses to touch
/// the home page and reports unknown ids.
#[derive(Debug, Clone)]
pub struct PageEditor {
    pages: Vec<PageConfig>,
}

impl PageEditor {
    pub fn new(pages: Vec<PageConfig>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[PageConfig] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<PageConfig> {
        self.pages
    }

    /// Toggle a page and return its new `enabled` state.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let page = self
            .pages
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ModelError::UnknownPage(id.to_string()))?;
        if page.is_home() {
            return Err(ModelError::HomePageLocked);
        }
        let enabled = !page.enabled;
        self.pages = toggle_page(&self.pages, id);
        Ok(enabled)
    }

    /// Move by zero-based positions in the current presentation order.
    pub fn move_page(&mut self, source: usize, dest: usize) -> Result<()> {
        self.pages = reorder(&self.pages, source, dest)?;
        Ok(())
    }

    /// Put the home page back into the enabled set if a stored list lost it.
    pub fn ensure_home_enabled(&mut self) -> bool {
        let mut repaired = false;
        for page in self.pages.iter_mut().filter(|p| p.is_home() && !p.enabled) {
            page.enabled = true;
            repaired = true;
        }
        repaired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(pages: &[PageConfig]) -> Vec<&str> {
        pages.iter().map(|p| p.id.as_str()).collect()
    }

    fn orders(pages: &[PageConfig]) -> Vec<u32> {
        pages.iter().map(|p| p.order).collect()
    }

    #[test]
    fn test_toggle_changes_exactly_one_entry() {
        let pages = default_pages();
        let toggled = toggle_page(&pages, "skills");

        for (before, after) in pages.iter().zip(&toggled) {
            if before.id == "skills" {
                assert_eq!(after.enabled, !before.enabled);
                assert_eq!(after.order, before.order);
                assert_eq!(after.name, before.name);
            } else {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let pages = default_pages();
        assert_eq!(toggle_page(&pages, "blog"), pages);
    }

    #[test]
    fn test_reorder_moves_fourth_to_first() {
        let pages: Vec<PageConfig> = default_pages().into_iter().take(5).collect();
        let reordered = reorder(&pages, 3, 0).unwrap();

        assert_eq!(
            ids(&reordered),
            vec!["projects", "home", "about", "experience", "skills"]
        );
        assert_eq!(orders(&reordered), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reorder_uses_order_not_array_position() {
        let mut pages = default_pages();
        pages.reverse();
        let reordered = reorder(&pages, 0, 5).unwrap();
        assert_eq!(
            ids(&reordered),
            vec!["about", "experience", "projects", "skills", "contact", "home"]
        );
    }

    #[test]
    fn test_reorder_densifies_sparse_orders() {
        let mut pages = default_pages();
        for (i, page) in pages.iter_mut().enumerate() {
            page.order = (i as u32 + 1) * 10;
        }
        pages[2].order = 10;

        let first = reorder(&pages, 1, 4).unwrap();
        let second = reorder(&first, 5, 0).unwrap();

        let mut seen = orders(&second);
        seen.sort();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_reorder_every_pair_keeps_dense_orders() {
        let pages = default_pages();
        for source in 0..pages.len() {
            for dest in 0..pages.len() {
                let reordered = reorder(&pages, source, dest).unwrap();
                assert_eq!(orders(&reordered), vec![1, 2, 3, 4, 5, 6]);

                let mut expected = ids(&pages);
                let moved = expected.remove(source);
                expected.insert(dest, moved);
                assert_eq!(ids(&reordered), expected);
            }
        }
    }

    #[test]
    fn test_reorder_out_of_range() {
        let pages = default_pages();
        assert_eq!(
            reorder(&pages, 6, 0),
            Err(ModelError::IndexOutOfRange { index: 6, len: 6 })
        );
        assert!(reorder(&pages, 0, 9).is_err());
        assert!(reorder(&[], 0, 0).is_err());
    }

    #[test]
    fn test_navigation_filters_and_sorts() {
        let mut pages = default_pages();
        pages[5].enabled = false;
        pages[1].order = 99;

        let nav = navigation(&pages);
        assert_eq!(
            ids(&nav),
            vec!["home", "experience", "projects", "skills", "about"]
        );
    }

    #[test]
    fn test_editor_refuses_home() {
        let mut editor = PageEditor::new(default_pages());
        assert_eq!(editor.toggle("home"), Err(ModelError::HomePageLocked));
        assert_eq!(
            editor.toggle("blog"),
            Err(ModelError::UnknownPage("blog".to_string()))
        );
        assert_eq!(editor.toggle("about"), Ok(false));
        assert_eq!(editor.toggle("about"), Ok(true));
        assert!(editor.pages().iter().find(|p| p.is_home()).unwrap().enabled);
    }

    #[test]
    fn test_editor_repairs_disabled_home() {
        let mut pages = default_pages();
        pages[0].enabled = false;
        let mut editor = PageEditor::new(pages);
        assert!(editor.ensure_home_enabled());
        assert!(!editor.ensure_home_enabled());
        assert!(editor.pages()[0].enabled);
    }
}
