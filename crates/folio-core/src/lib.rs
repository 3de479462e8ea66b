pub mod path;

pub use path::{
    DATA_DIR_ENV, Error, Result, config_path, expand_tilde, resolve_workspace_path, storage_dir,
};
