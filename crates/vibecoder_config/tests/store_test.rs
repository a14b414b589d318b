//! Credential store persistence tests.

use vibecoder_config::{CredentialStore, Settings, SETTINGS_FILE};

#[test]
fn missing_file_loads_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = CredentialStore::new(dir.path())?;

    let settings = store.load()?;
    assert_eq!(settings, Settings::default());
    assert!(*settings.options().include_helper());
    Ok(())
}

#[test]
fn api_key_round_trips_with_browser_key_names() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = CredentialStore::new(dir.path())?;

    let saved = Settings::default()
        .with_include_sample_code(false)
        .with_gemini_api_key("AIzaTestKey");
    store.save(&saved)?;

    let raw = std::fs::read_to_string(dir.path().join(SETTINGS_FILE))?;
    let json: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(json["geminiApiKey"], "AIzaTestKey");
    assert_eq!(json["includeSampleCode"], false);
    assert_eq!(json["includeGeminiHelper"], true);

    assert_eq!(store.load()?, saved);
    Ok(())
}

#[test]
fn set_api_key_preserves_toggles() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = CredentialStore::new(dir.path())?;
    store.save(&Settings::default().with_include_gemini_helper(false))?;

    let updated = store.set_api_key("  new-key-value  ")?;
    assert_eq!(updated.api_key(), Some("new-key-value"));
    assert!(!*updated.include_gemini_helper());
    assert_eq!(store.load()?.api_key(), Some("new-key-value"));
    Ok(())
}

#[test]
fn store_creates_nested_directory() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let nested = dir.path().join("a").join("b");
    let store = CredentialStore::new(&nested)?;
    store.save(&Settings::default())?;
    assert!(nested.join(SETTINGS_FILE).exists());

    store.delete()?;
    assert!(!nested.join(SETTINGS_FILE).exists());
    Ok(())
}

#[test]
fn corrupt_file_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = CredentialStore::new(dir.path())?;
    std::fs::write(store.path(), "{not json")?;
    assert!(store.load().is_err());
    Ok(())
}
