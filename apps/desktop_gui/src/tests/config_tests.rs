use super::{
    apply_env_overrides, load_settings, load_settings_with, parse_settings, read_settings_file,
    Settings, CONFIG_FILE_NAME,
};

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_file_yields_defaults() {
    let settings = parse_settings("").expect("parse");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.advisor_name, "A. Corbin");
    assert_eq!(settings.demo_email, "a.corbin@wealth.co");
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let settings = parse_settings(
        r#"
advisor_name = "L. Hayes"
text_scale = 1.2
"#,
    )
    .expect("parse");
    assert_eq!(settings.advisor_name, "L. Hayes");
    assert_eq!(settings.text_scale, 1.2);
    assert_eq!(settings.advisor_title, "Wealth Manager");
    assert_eq!(settings.window_width, 1280.0);
}

#[test]
fn wrong_value_type_is_rejected() {
    assert!(parse_settings("text_scale = \"large\"").is_err());
}

#[test]
fn env_overrides_win_and_bad_numbers_are_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("OPERATI__LOG_FILTER", "debug,eframe=warn"),
            ("OPERATI__ADVISOR_NAME", "S. Patel"),
            ("OPERATI__TEXT_SCALE", "not-a-number"),
            ("OPERATI__WINDOW_WIDTH", " 1600 "),
        ]),
    );
    assert_eq!(settings.log_filter, "debug,eframe=warn");
    assert_eq!(settings.advisor_name, "S. Patel");
    assert_eq!(settings.text_scale, 1.0);
    assert_eq!(settings.window_width, 1600.0);
}

#[test]
fn sanitize_clamps_scale_and_window() {
    let settings = Settings {
        text_scale: 3.0,
        window_width: 200.0,
        window_height: f32::NAN,
        log_filter: "   ".into(),
        ..Settings::default()
    }
    .sanitized();
    assert_eq!(settings.text_scale, 1.4);
    assert_eq!(settings.window_width, 980.0);
    assert_eq!(settings.window_height, 800.0);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn reads_explicit_file_and_reports_missing_one() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("operati_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("operati.toml");
    fs::write(&path, "advisor_title = \"Senior Partner\"\n").expect("write config");

    let settings = read_settings_file(&path).expect("read");
    assert_eq!(settings.advisor_title, "Senior Partner");

    let missing = temp_root.join("absent.toml");
    let err = load_settings(Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));

    fs::remove_dir_all(temp_root).expect("cleanup");
}

fn scratch_dir(label: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("operati_{label}_{suffix}"));
    fs::create_dir_all(&dir).expect("scratch dir");
    dir
}

#[test]
fn no_config_file_anywhere_yields_defaults() {
    let empty_config_dir = scratch_dir("empty_config_dir");
    let settings =
        load_settings_with(None, Some(empty_config_dir.clone()), |_| None).expect("defaults");
    assert_eq!(settings, Settings::default());

    let settings = load_settings_with(None, None, |_| None).expect("defaults");
    assert_eq!(settings, Settings::default());

    fs::remove_dir_all(empty_config_dir).expect("cleanup");
}

#[test]
fn user_config_dir_file_is_picked_up_and_env_still_wins() {
    let config_dir = scratch_dir("user_config_dir");
    fs::create_dir_all(config_dir.join("operati")).expect("app dir");
    fs::write(
        config_dir.join("operati").join(CONFIG_FILE_NAME),
        "advisor_name = \"M. Ortiz\"\ntext_scale = 1.1\n",
    )
    .expect("write config");

    let settings = load_settings_with(
        None,
        Some(config_dir.clone()),
        lookup_from(&[("OPERATI__TEXT_SCALE", "1.3")]),
    )
    .expect("load");
    assert_eq!(settings.advisor_name, "M. Ortiz");
    assert_eq!(settings.text_scale, 1.3);

    fs::remove_dir_all(config_dir).expect("cleanup");
}

#[test]
fn malformed_file_on_disk_is_a_parse_error() {
    let dir = scratch_dir("malformed_config");
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, "text_scale = [\n").expect("write config");

    let err = load_settings_with(Some(&path), None, |_| None).unwrap_err();
    assert!(
        format!("{err:#}").contains("failed to parse config file"),
        "{err:#}"
    );
    assert!(read_settings_file(&path).is_err());

    fs::remove_dir_all(dir).expect("cleanup");
}
