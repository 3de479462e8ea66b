pub mod bundle;
pub mod error;
pub mod image;
pub mod keys;
pub mod page;
pub mod route;
pub mod section;
pub mod style;
pub mod user;

pub use bundle::StoredConfig;
pub use error::{ModelError, Result};
pub use image::{DATA_IMAGE_PREFIX, is_data_image_uri, sanitize_image};
pub use page::{PageConfig, PageEditor, PageIcon, default_pages, navigation, reorder, toggle_page};
pub use route::{GuardDecision, Route, guard_route};
pub use section::{
    SectionConfig, default_sections, sections_for_page, toggle_section, validate_sections,
};
pub use style::{ColorCombo, StyleId, color_combos, find_color_combo};
pub use user::{Experience, Project, SocialLinks, UserDetails};
