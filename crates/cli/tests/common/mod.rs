//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Menu used by most tests.
pub const SITE_MENU: &str = r#"{
    "Home": {"url": "/", "icon": "fas fa-home", "hideLabel": true},
    "Empresa": {"url": "/empresa"},
    "Produtos": {
        "url": "/produtos",
        "submenu": {
            "Caldeiras": {"url": "/produtos/caldeiras"},
            "Bombas": {"url": "produtos/bombas"}
        }
    },
    "Contato": {"url": "/contato"}
}"#;

/// Test environment with a menu file in a temporary directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    pub menu_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an environment holding `SITE_MENU` as `items-menu.json`.
    pub fn new() -> Self {
        Self::with_menu("items-menu.json", SITE_MENU)
    }

    /// Create an environment holding `contents` under `file_name`.
    pub fn with_menu(file_name: &str, contents: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let menu_path = temp_dir.path().join(file_name);
        fs::write(&menu_path, contents).expect("Failed to write menu");
        Self {
            temp_dir,
            menu_path,
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Binary with no menu-related environment leaking in.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("site-breadcrumbs").expect("Failed to find binary");
        cmd.env_remove("SITE_MENU")
            .env_remove("SITE_ORIGIN")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Binary with `--menu` pointing at this environment's menu.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--menu").arg(&self.menu_path);
        cmd
    }
}
