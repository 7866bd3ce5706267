//! Persona and theme survive a reload.

use folio_core::{Persona, Theme};
use folio_shell::{FileStore, KeyValueStore};

use crate::common::TestHarness;

#[test]
fn test_toggles_written_synchronously() {
    let harness = TestHarness::new();
    let mut shell = harness.open_shell();

    shell.toggle_persona().unwrap();
    // Read the file directly, before any other call on the shell.
    let store = FileStore::open(harness.store_path()).unwrap();
    assert_eq!(store.get("activeRole").unwrap().as_deref(), Some("3D Artist"));

    shell.toggle_theme().unwrap();
    let store = FileStore::open(harness.store_path()).unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_reload_restores_toggles() {
    let harness = TestHarness::new();
    {
        let mut shell = harness.open_shell();
        assert_eq!(shell.persona(), Persona::Programmer);
        assert_eq!(shell.theme(), Theme::Light);
        shell.toggle_persona().unwrap();
        shell.toggle_theme().unwrap();
    }

    let mut shell = harness.open_shell();
    assert_eq!(shell.persona(), Persona::Artist);
    assert_eq!(shell.theme(), Theme::Dark);
    let chrome = &shell.frame().chrome;
    assert_eq!(chrome.theme_class, Some("dark"));
    assert_eq!(chrome.footer, "\u{a9} 2025 Yog Vasaikar");
}

#[test]
fn test_truncated_store_starts_with_defaults() {
    let harness = TestHarness::new();
    std::fs::write(harness.store_path(), "{\n  \"activeRole\": \"3D Ar").unwrap();

    let mut shell = harness.open_shell();
    assert_eq!(shell.persona(), Persona::Programmer);
    assert_eq!(shell.theme(), Theme::Light);

    shell.toggle_persona().unwrap();
    let store = FileStore::open(harness.store_path()).unwrap();
    assert_eq!(store.get("activeRole").unwrap().as_deref(), Some("3D Artist"));
}
