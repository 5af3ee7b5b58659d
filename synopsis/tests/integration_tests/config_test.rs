// tests/integration_tests/config_test.rs
use super::common::create_test_file;
use anyhow::Result;
use synopsis::{Args, Config, ModelChoice};
use tempfile::TempDir;

#[test]
fn test_flags_override_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(
        temp_dir.path(),
        "synopsis.toml",
        "model = \"pegasus\"\n\n[generation]\nmax_length = 300\nmin_length = 40\ntemperature = 0.4\n",
    )?;
    let config = Config::load(&path)?;

    let args = Args {
        model: Some(ModelChoice::T5Base),
        min_length: Some(25),
        sampling: true,
        ..Args::default()
    };

    let settings = args.settings(&config);
    assert_eq!(args.model(&config), ModelChoice::T5Base);
    assert_eq!(settings.max_length, 300);
    assert_eq!(settings.min_length, 25);
    assert!(settings.sampling);
    assert_eq!(settings.temperature, 0.4);
    assert_eq!(settings.top_p, 0.9);

    let defaults = Args::default();
    assert_eq!(defaults.model(&config), ModelChoice::Pegasus);
    Ok(())
}

#[test]
fn test_no_sampling_overrides_config() -> Result<()> {
    let config = Config::from_toml("[generation]\nsampling = true\n")?;

    let args = Args {
        no_sampling: true,
        ..Args::default()
    };
    assert!(!args.settings(&config).sampling);
    assert!(Args::default().settings(&config).sampling);
    Ok(())
}

#[test]
fn test_invalid_config_reports_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), ".synopsis.toml", "[generation]\nmax_length = \"long\"\n")?;

    let error = Config::resolve(None, temp_dir.path()).expect_err("invalid config");
    assert!(error.to_string().contains(&path.display().to_string()));
    Ok(())
}
