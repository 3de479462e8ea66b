use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, PageEntry, PagesViewModel, SectionEntry,
    SectionsViewModel, StatusBadge,
};
use folio_types::{PageConfig, SectionConfig};

/// All pages sorted by `order`, with 1-based positions for `pages move`.
pub fn present_pages(
    pages: &[PageConfig],
    label: Option<String>,
) -> CommandResultViewModel<PagesViewModel> {
    let mut sorted: Vec<&PageConfig> = pages.iter().collect();
    sorted.sort_by_key(|page| page.order);

    let entries = sorted
        .into_iter()
        .enumerate()
        .map(|(i, page)| PageEntry {
            position: i + 1,
            id: page.id.clone(),
            name: page.name.clone(),
            icon: page.icon.as_str().to_string(),
            enabled: page.enabled,
            order: page.order,
        })
        .collect();

    let mut result = CommandResultViewModel::new(PagesViewModel { pages: entries });
    match label {
        Some(label) => result = result.with_badge(StatusBadge::success(label)),
        None => {
            result = result
                .with_suggestion(
                    Guidance::new("Hide or show a page").with_command("folio pages toggle <ID>"),
                )
                .with_suggestion(
                    Guidance::new("Reorder pages").with_command("folio pages move <FROM> <TO>"),
                );
        }
    }
    result
}

pub fn present_sections(
    sections: &[SectionConfig],
    page: Option<&str>,
    label: Option<String>,
) -> CommandResultViewModel<SectionsViewModel> {
    let entries = sections
        .iter()
        .filter(|section| page.is_none_or(|page| section.page_id == page))
        .map(|section| SectionEntry {
            id: section.id.clone(),
            name: section.name.clone(),
            page_id: section.page_id.clone(),
            enabled: section.enabled,
        })
        .collect();

    let mut result = CommandResultViewModel::new(SectionsViewModel { sections: entries });
    if let Some(label) = label {
        result = result.with_badge(StatusBadge::success(label));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{default_pages, default_sections, reorder};

    #[test]
    fn test_pages_sorted_with_positions() {
        let pages = reorder(&default_pages(), 3, 0).unwrap();
        let result = present_pages(&pages, None);
        let ids: Vec<&str> = result.content.pages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["projects", "home", "about", "experience", "skills", "contact"]);
        assert_eq!(result.content.pages[0].position, 1);
    }

    #[test]
    fn test_sections_filtered_by_page() {
        let result = present_sections(&default_sections(), Some("contact"), None);
        let ids: Vec<&str> = result
            .content
            .sections
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["contact-details", "contact-form"]);
    }
}
