use folio_core::*;
use std::path::PathBuf;

#[test]
fn test_explicit_path_wins() {
    let result = resolve_workspace_path(Some("/explicit/folio")).unwrap();
    assert_eq!(result, PathBuf::from("/explicit/folio"));
}

#[test]
fn test_expand_tilde_leaves_plain_paths() {
    assert_eq!(expand_tilde("/var/data"), PathBuf::from("/var/data"));
    assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
}

#[test]
fn test_expand_tilde_uses_home() {
    if let Some(home) = dirs_home() {
        assert_eq!(expand_tilde("~/.folio"), home.join(".folio"));
    }
}

#[test]
fn test_layout_under_data_dir() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let root = temp_dir.path();
    assert_eq!(config_path(root), root.join("config.toml"));
    assert_eq!(storage_dir(root), root.join("storage"));
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}
