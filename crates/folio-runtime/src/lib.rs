pub mod config;
pub mod error;
pub mod hydrate;
pub mod image;
pub mod render;
pub mod store;
pub mod wizard;
pub mod workspace;

pub use config::Config;
pub use error::{Error, Result};
pub use hydrate::{UserDetailsStore, hydrate_user_details, parse_user_details};
pub use image::{ImageError, ImageInput};
pub use render::{
    RenderContext, RouteOutcome, Template, follow_route, resolve_route, select_template,
    template_for,
};
pub use store::{
    FileStore, Hydration, KeyValueStore, MemoryStore, PersistStatus, PersistedValue, Phase,
    StoreError, StoreEvent, StoreEventKind,
};
pub use wizard::{ColorChoice, Wizard, WizardError, WizardStep};
pub use workspace::{PersistFailure, Workspace};
