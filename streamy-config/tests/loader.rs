use std::{collections::HashMap, fs, path::PathBuf, time::Duration};

use streamy_config::{ConfigSource, StreamyConfig, constants};
use tempfile::tempdir;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_configured() {
    let dir = tempdir().expect("tempdir");
    let load = StreamyConfig::load_with(vars(&[]), dir.path()).expect("load");

    assert_eq!(load.source, ConfigSource::Default);
    assert!(load.overrides.is_empty());
    assert_eq!(load.config, StreamyConfig::default());
    assert_eq!(load.config.spotlight.period(), Duration::from_secs(6));
    assert_eq!(load.config.catalog.base_url, constants::catalog::BASE_URL);
}

#[test]
fn default_file_in_search_root_is_picked_up() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("streamy.toml"),
        "[catalog]\nbase_url = \"http://catalog.internal:9000\"\n\n[spotlight]\nperiod_ms = 8000\n",
    )
    .expect("write config");

    let load = StreamyConfig::load_with(vars(&[]), dir.path()).expect("load");

    assert_eq!(load.source, ConfigSource::File(dir.path().join("streamy.toml")));
    assert_eq!(load.config.catalog.base_url, "http://catalog.internal:9000");
    assert_eq!(load.config.spotlight.period_ms, 8000);
    // Unspecified fields keep their defaults.
    assert_eq!(load.config.spotlight.fade_out_ms, constants::spotlight::FADE_OUT_MS);
}

#[test]
fn explicit_path_beats_inline_json_and_default_file() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("streamy.toml"), "[spotlight]\nperiod_ms = 1000\n")
        .expect("write default");
    let explicit = dir.path().join("custom.json");
    fs::write(&explicit, r#"{"spotlight": {"period_ms": 2500}}"#).expect("write explicit");

    let path = explicit.display().to_string();
    let load = StreamyConfig::load_with(
        vars(&[
            ("STREAMY_CONFIG_PATH", path.as_str()),
            ("STREAMY_CONFIG_JSON", r#"{"spotlight": {"period_ms": 4000}}"#),
        ]),
        dir.path(),
    )
    .expect("load");

    assert_eq!(load.source, ConfigSource::EnvPath(PathBuf::from(&path)));
    assert_eq!(load.config.spotlight.period_ms, 2500);
}

#[test]
fn inline_json_beats_default_file() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("streamy.toml"), "[spotlight]\nperiod_ms = 1000\n")
        .expect("write default");

    let load = StreamyConfig::load_with(
        vars(&[("STREAMY_CONFIG_JSON", r#"{"focus": {"item_gap": 16.0}}"#)]),
        dir.path(),
    )
    .expect("load");

    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.focus.item_gap, 16.0);
    assert_eq!(load.config.spotlight.period_ms, constants::spotlight::PERIOD_MS);
}

#[test]
fn env_overrides_apply_on_top_of_file() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("streamy.json"),
        r#"{"catalog": {"base_url": "http://from-file:8001"}}"#,
    )
    .expect("write config");

    let load = StreamyConfig::load_with(
        vars(&[
            ("STREAMY_API_URL", "https://catalog.example.com/"),
            ("STREAMY_REQUEST_TIMEOUT", "2s"),
            ("STREAMY_SPOTLIGHT_PERIOD", "4500"),
            ("STREAMY_FEED_PLAN_PATH", "plans/home.toml"),
        ]),
        dir.path(),
    )
    .expect("load");

    assert_eq!(load.config.catalog.base_url, "https://catalog.example.com");
    assert_eq!(load.config.catalog.request_timeout(), Duration::from_secs(2));
    assert_eq!(load.config.spotlight.period_ms, 4500);
    assert_eq!(
        load.config.feed_plan_path.as_deref(),
        Some(std::path::Path::new("plans/home.toml"))
    );
    assert_eq!(load.overrides.len(), 4);
}

#[test]
fn blank_overrides_are_ignored() {
    let dir = tempdir().expect("tempdir");
    let load = StreamyConfig::load_with(
        vars(&[("STREAMY_API_URL", "   "), ("STREAMY_CONFIG_JSON", "")]),
        dir.path(),
    )
    .expect("load");

    assert_eq!(load.source, ConfigSource::Default);
    assert!(load.overrides.is_empty());
}

#[test]
fn invalid_layers_are_rejected() {
    let dir = tempdir().expect("tempdir");

    let bad_url = StreamyConfig::load_with(
        vars(&[("STREAMY_API_URL", "ftp://catalog")]),
        dir.path(),
    );
    assert!(bad_url.is_err());

    let bad_period = StreamyConfig::load_with(
        vars(&[("STREAMY_SPOTLIGHT_PERIOD", "whenever")]),
        dir.path(),
    );
    assert!(bad_period.is_err());

    let bad_json = StreamyConfig::load_with(
        vars(&[("STREAMY_CONFIG_JSON", "{not json")]),
        dir.path(),
    );
    assert!(bad_json.is_err());

    let missing = StreamyConfig::load_with(
        vars(&[("STREAMY_CONFIG_PATH", "/definitely/not/here.toml")]),
        dir.path(),
    );
    assert!(missing.is_err());
}

#[test]
fn extensionless_files_accept_toml_or_json() {
    let dir = tempdir().expect("tempdir");
    let toml_path = dir.path().join("streamy-conf");
    fs::write(&toml_path, "[focus]\nitem_width = 280.0\n").expect("write");
    let parsed = StreamyConfig::load_from_file(&toml_path).expect("toml");
    assert_eq!(parsed.focus.item_width, 280.0);

    let json_path = dir.path().join("streamy-conf-json");
    fs::write(&json_path, r#"{"focus": {"item_width": 300.0}}"#).expect("write");
    let parsed = StreamyConfig::load_from_file(&json_path).expect("json");
    assert_eq!(parsed.focus.item_width, 300.0);
}
