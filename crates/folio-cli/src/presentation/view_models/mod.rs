pub mod builder;
pub mod common;
pub mod details;
pub mod open;
pub mod pages;
pub mod result;
pub mod system;

pub use builder::{
    ColorComboEntry, ColorListViewModel, ColorsViewModel, StyleEntry, StyleListViewModel,
    WizardResultViewModel, WizardStepEntry,
};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use details::DetailsViewModel;
pub use open::{OpenOutcome, OpenViewModel};
pub use pages::{PageEntry, PagesViewModel, SectionEntry, SectionsViewModel};
pub use result::{CommandResultViewModel, CreateView};
pub use system::{InitViewModel, OverviewViewModel, RecoveredKey, ResetViewModel};
