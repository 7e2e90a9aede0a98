//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use std::path::Path;

use ctx_config::{CtxConfig, Driver};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
connection = "mariadb"
host = "db.internal"
port = 3307
database = "shop"
username = "reader"
password = "s3cret"
"#,
        )?;

        let config: CtxConfig = Figment::from(Serialized::defaults(CtxConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.driver().unwrap(), Driver::MySql);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.database, "shop");
        assert_eq!(config.database.username, "reader");
        assert_eq!(config.database.password, "s3cret");
        assert!(config.database.is_configured());
        Ok(())
    });
}

#[test]
fn loads_catalog_and_output_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[tables]
excluded = ["migrations", "sessions"]

[files]
include_dirs = ["app", "modules"]
exclude_dirs = ["vendor"]
extension = "inc"

[output]
bundle_file = "context.txt"
store_file = ".ctxgen/setups.json"
report_threshold_bytes = 2048
"#,
        )?;

        let config: CtxConfig = Figment::from(Serialized::defaults(CtxConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.tables.excluded, vec!["migrations", "sessions"]);
        assert_eq!(config.files.include_dirs, vec!["app", "modules"]);
        assert_eq!(config.files.exclude_dirs, vec!["vendor"]);
        assert_eq!(config.files.extension, "inc");
        assert_eq!(config.output.bundle_file, "context.txt");
        assert_eq!(config.output.store_file, ".ctxgen/setups.json");
        assert_eq!(config.output.report_threshold_bytes, 2048);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[output]
bundle_file = "context.txt"
"#,
        )?;

        let config: CtxConfig = Figment::from(Serialized::defaults(CtxConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.output.bundle_file, "context.txt");
        assert_eq!(config.output.store_file, ".suggests.txt");
        assert_eq!(config.output.report_threshold_bytes, 13_000);
        assert_eq!(config.files.extension, "php");
        assert_eq!(config.tables.excluded.len(), 10);
        Ok(())
    });
}

#[test]
fn project_config_file_is_discovered() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ctxgen")?;
        jail.create_file(
            ".ctxgen/config.toml",
            r#"
[files]
extension = "inc"
"#,
        )?;

        let config = CtxConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.files.extension, "inc");
        Ok(())
    });
}

#[test]
fn invalid_port_is_a_config_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ctxgen")?;
        jail.create_file(
            ".ctxgen/config.toml",
            r#"
[database]
port = "not-a-port"
"#,
        )?;

        let result = CtxConfig::load(Path::new("."));
        assert!(matches!(result, Err(ctx_config::ConfigError::Figment(_))));
        Ok(())
    });
}
