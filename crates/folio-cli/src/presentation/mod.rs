//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                 ==(Text)==> [ View ]
//! ```
//!
//! - `view_models/`: raw data, `Serialize`, no formatting. JSON output is the
//!   complete view model.
//! - `presenters/`: turn runtime results into view models and decide badges
//!   and suggestions.
//! - `views/`: `fmt::Display` layouts for text output.
//! - `renderers/`: pick JSON or text and print.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, OutputFormat, StatusBadge, StatusLevel,
};
