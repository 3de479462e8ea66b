use folio_types::UserDetails;
use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Serialize)]
pub struct DetailsViewModel {
    pub details: UserDetails,
    pub complete: bool,
    pub missing_fields: Vec<String>,
}

impl CreateView for DetailsViewModel {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::details::DetailsView;
        Box::new(DetailsView::new(self, color))
    }
}
