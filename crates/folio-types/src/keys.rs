//! Storage keys. Names match the browser layout so exported data stays portable.

pub const PORTFOLIO_STYLE: &str = "portfolioStyle";
pub const PRIMARY_COLOR: &str = "primaryColor";
pub const SECONDARY_COLOR: &str = "secondaryColor";
pub const COLOR_COMBO_NAME: &str = "colorComboName";
pub const USER_DETAILS: &str = "userDetails";
pub const PORTFOLIO_PAGES: &str = "portfolioPages";
pub const PORTFOLIO_SECTIONS: &str = "portfolioSections";

/// Every key folio owns, in the order they are listed by `folio reset`.
pub const ALL: [&str; 7] = [
    PORTFOLIO_STYLE,
    PRIMARY_COLOR,
    SECONDARY_COLOR,
    COLOR_COMBO_NAME,
    USER_DETAILS,
    PORTFOLIO_PAGES,
    PORTFOLIO_SECTIONS,
];
