use showcase_kernel::ConfigError;
use showcase_kernel::config::{ConfigLoader, load_config};
use showcase_kernel::domain::Demo;
use showcase_kernel::domain::config::ShowcaseConfig;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn no_env() -> HashMap<String, String> {
    HashMap::new()
}

#[test]
fn missing_file_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let cfg: ShowcaseConfig =
        ConfigLoader::new().file(dir.path().join("absent")).env_source(no_env()).load()?;

    assert_eq!(cfg.demo, Demo::Landing);
    assert_eq!(cfg.window.title, "Showcase");
    assert_eq!(cfg.export.out_dir, PathBuf::from("dist"));
    Ok(())
}

#[test]
fn toml_file_is_applied() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("showcase.toml");
    fs::write(
        &path,
        r#"
demo = "gallery"

[window]
title = "Gallery"
width = 1024.0

[export]
out_dir = "public"
"#,
    )?;

    let cfg: ShowcaseConfig = ConfigLoader::new().file(&path).env_source(no_env()).load()?;

    assert_eq!(cfg.demo, Demo::Gallery);
    assert_eq!(cfg.window.title, "Gallery");
    assert!((cfg.window.width - 1024.0).abs() < f64::EPSILON);
    assert!((cfg.window.height - 800.0).abs() < f64::EPSILON);
    assert_eq!(cfg.export.out_dir, PathBuf::from("public"));
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("showcase.toml");
    fs::write(&path, "demo = \"gallery\"\n[window]\nheight = 600.0\n")?;

    let env = HashMap::from([
        ("SHOWCASE__DEMO".to_owned(), "catalog".to_owned()),
        ("SHOWCASE__WINDOW__HEIGHT".to_owned(), "900".to_owned()),
        ("UNRELATED__DEMO".to_owned(), "gallery".to_owned()),
    ]);
    let cfg: ShowcaseConfig = ConfigLoader::new().file(&path).env_source(env).load()?;

    assert_eq!(cfg.demo, Demo::Catalog);
    assert!((cfg.window.height - 900.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn malformed_file_is_reported_with_context() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "demo = [\n")?;

    let err = ConfigLoader::new()
        .file(&path)
        .env_source(no_env())
        .load::<ShowcaseConfig>()
        .expect_err("broken TOML must fail");

    let ConfigError::Config { context, .. } = &err;
    assert_eq!(context.as_deref(), Some("Failed to build config"));
    Ok(())
}

#[test]
fn unknown_demo_fails_deserialization() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("showcase.toml");
    fs::write(&path, "demo = \"blog\"\n")?;

    let err = ConfigLoader::new()
        .file(&path)
        .env_source(no_env())
        .load::<ShowcaseConfig>()
        .expect_err("unknown demo must fail");

    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}

#[test]
fn load_config_accepts_explicit_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[theme]\nstylesheet = \"/assets/tailwind.css\"\n")?;

    let cfg: ShowcaseConfig = load_config(Some(&path))?;
    assert_eq!(cfg.theme.stylesheet, "/assets/tailwind.css");
    Ok(())
}

fn load_demo(path: &std::path::Path) -> showcase_kernel::Result<Demo> {
    ConfigLoader::new()
        .file(path)
        .env_source(no_env())
        .load::<ShowcaseConfig>()
        .map(|cfg| cfg.demo)
}

#[test]
fn result_alias_is_exported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("showcase.toml");
    fs::write(&path, "demo = \"catalog\"\n")?;

    assert_eq!(load_demo(&path)?, Demo::Catalog);
    Ok(())
}
