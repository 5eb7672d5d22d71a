use dermascan::config::{AppConfig, InferenceSettings, ModelPaths};
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.inference.input_size, 112);
    assert_eq!(cfg.inference.unknown_threshold, 0.45);
    assert_eq!(
        cfg.models.screening,
        PathBuf::from("models").join("skin_screening.rten")
    );
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_empty_file_gives_defaults() -> anyhow::Result<()> {
    assert_eq!(AppConfig::from_toml_str("")?, AppConfig::default());
    Ok(())
}

#[test]
fn test_partial_override() -> anyhow::Result<()> {
    let cfg = AppConfig::from_toml_str(
        r#"
        [models]
        condition = "/opt/models/condition.rten"

        [inference]
        unknown_threshold = 0.6
        "#,
    )?;

    assert_eq!(cfg.models.condition, PathBuf::from("/opt/models/condition.rten"));
    assert_eq!(cfg.models.screening, ModelPaths::default().screening);
    assert_eq!(cfg.inference.unknown_threshold, 0.6);
    assert_eq!(cfg.inference.input_size, InferenceSettings::default().input_size);
    Ok(())
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(AppConfig::from_toml_str("[inference]\nunknown_threshold = 1.5").is_err());
    assert!(AppConfig::from_toml_str("[inference]\ninput_size = 0").is_err());
    assert!(AppConfig::from_toml_str("[models]\nscreening = \"\"").is_err());
}

#[test]
fn test_unknown_keys_are_rejected() {
    assert!(AppConfig::from_toml_str("[inference]\nthreshold = 0.5").is_err());
    assert!(AppConfig::from_toml_str("[server]\nport = 80").is_err());
}

#[test]
fn test_missing_file() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("absent.toml");

    assert!(AppConfig::from_path(&path)?.is_none());
    assert!(AppConfig::load(Some(&path)).is_err());
    Ok(())
}

#[test]
fn test_relative_paths_follow_config_file() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("dermascan.toml");
    std::fs::write(
        &path,
        "[models]\nscreening = \"weights/screen.rten\"\ndiabetes = \"/abs/diabetes.rten\"\n",
    )?;

    let cfg = AppConfig::load(Some(&path))?;
    assert_eq!(cfg.models.screening, dir.path().join("weights/screen.rten"));
    assert_eq!(cfg.models.diabetes, PathBuf::from("/abs/diabetes.rten"));
    Ok(())
}

#[test]
fn test_missing_models_fail_to_load() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let cfg = AppConfig {
        models: ModelPaths {
            screening: dir.path().join("a.rten"),
            condition: dir.path().join("b.rten"),
            diabetes: dir.path().join("c.rten"),
        },
        ..AppConfig::default()
    };

    let err = dermascan::Artifacts::load(&cfg).expect_err("load should fail");
    assert!(format!("{:#}", err).contains("skin screening"));
    Ok(())
}
