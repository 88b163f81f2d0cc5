//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("devlog_test_{}_{name}.toml", std::process::id()));
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

// ===== Paths =====

#[test]
fn default_config_path_contains_devlog_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("devlog") && path_str.ends_with("config.toml"),
        "got: {path_str}"
    );
}

#[test]
fn default_log_path_ends_with_devlog_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("devlog.log"),
        "got: {path:?}"
    );
}

// ===== Loading =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/devlog.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = write_temp_config(
        "valid",
        r#"
android_command = ["adb", "-s", "emulator-5554", "logcat", "-T", "{since}"]
kill_on_quit = false
tick_rate_ms = 50
log_file_path = "/tmp/devlog-test.log"
no_color = true
"#,
    );

    let config = load_config_file(&path)
        .expect("valid TOML should parse")
        .expect("file exists");

    assert_eq!(
        config.android_command.as_deref().map(|argv| argv.len()),
        Some(6)
    );
    assert_eq!(config.ios_command, None);
    assert_eq!(config.kill_on_quit, Some(false));
    assert_eq!(config.tick_rate_ms, Some(50));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/devlog-test.log"))
    );
    assert_eq!(config.no_color, Some(true));

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = write_temp_config("invalid", "kill_on_quit = [not valid");

    let result = load_config_file(&path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "got: {result:?}"
    );

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let path = write_temp_config("unknown", "theme = \"dark\"\n");

    let result = load_config_file(&path);
    match result {
        Err(ConfigError::ParseError { reason, .. }) => {
            assert!(reason.contains("theme"), "reason should name the key: {reason}")
        }
        other => panic!("expected ParseError, got {other:?}"),
    }

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_reports_directory_as_read_error() {
    let result = load_config_file(env::temp_dir());
    assert!(
        matches!(result, Err(ConfigError::ReadError { .. })),
        "got: {result:?}"
    );
}

#[test]
#[serial(devlog_env)]
fn explicit_path_wins_over_env_var() {
    let explicit = write_temp_config("explicit", "tick_rate_ms = 10\n");
    let from_env = write_temp_config("from_env", "tick_rate_ms = 20\n");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("should load")
        .expect("file exists");
    assert_eq!(config.tick_rate_ms, Some(10));

    env::remove_var(CONFIG_ENV_VAR);
    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(devlog_env)]
fn env_var_used_without_explicit_path() {
    let from_env = write_temp_config("env_only", "tick_rate_ms = 20\n");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(None)
        .expect("should load")
        .expect("file exists");
    assert_eq!(config.tick_rate_ms, Some(20));

    env::remove_var(CONFIG_ENV_VAR);
    fs::remove_file(from_env).ok();
}

// ===== Merging =====

#[test]
fn merge_without_file_yields_defaults() {
    let resolved = merge_config(None).expect("defaults are valid");
    assert_eq!(resolved, ResolvedConfig::default());
    assert!(resolved.kill_on_quit);
    assert_eq!(resolved.tick_rate_ms, 100);
    assert!(!resolved.no_color);
}

#[test]
fn merge_applies_file_values() {
    let file = ConfigFile {
        ios_command: Some(vec!["cat".to_string(), "/tmp/sim.log".to_string()]),
        kill_on_quit: Some(false),
        log_file_path: Some(PathBuf::from("/custom/app.log")),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file)).expect("valid overrides");
    assert_eq!(resolved.ios_command, CommandSpec::new("cat", ["/tmp/sim.log"]));
    assert_eq!(resolved.android_command, default_command(Platform::Android));
    assert_eq!(resolved.shutdown_policy(), ShutdownPolicy::Wait);
    assert_eq!(resolved.log_file_path, PathBuf::from("/custom/app.log"));
}

#[test]
fn merge_rejects_empty_command() {
    let file = ConfigFile {
        android_command: Some(Vec::new()),
        ..ConfigFile::default()
    };
    assert_eq!(
        merge_config(Some(file)),
        Err(ConfigError::EmptyCommand {
            key: "android_command"
        })
    );
}

#[test]
fn merge_clamps_zero_tick_rate() {
    let file = ConfigFile {
        tick_rate_ms: Some(0),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file)).expect("valid");
    assert_eq!(resolved.tick_rate(), Duration::from_millis(1));
}

// ===== Overrides =====

#[test]
#[serial(devlog_env)]
fn env_overrides_log_file_path() {
    env::set_var(LOG_FILE_ENV_VAR, "/tmp/from-env.log");
    let config = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(LOG_FILE_ENV_VAR);

    assert_eq!(config.log_file_path, PathBuf::from("/tmp/from-env.log"));
}

#[test]
#[serial(devlog_env)]
fn env_without_override_keeps_config() {
    env::remove_var(LOG_FILE_ENV_VAR);
    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
fn cli_no_color_only_turns_colors_off() {
    let mut from_file = ResolvedConfig::default();
    from_file.no_color = true;

    assert!(apply_cli_overrides(from_file, false).no_color);
    assert!(apply_cli_overrides(ResolvedConfig::default(), true).no_color);
    assert!(!apply_cli_overrides(ResolvedConfig::default(), false).no_color);
}

// ===== Command resolution =====

#[test]
fn android_command_resolves_since_placeholder() {
    let command = ResolvedConfig::default().command_for(Platform::Android);
    assert_eq!(command.program(), "adb");
    assert_eq!(&command.args()[..2], ["logcat", "-T"]);
    assert!(!command.args()[2].contains(crate::source::SINCE_PLACEHOLDER));
    // MM-DD hh:mm:ss.mmm
    assert_eq!(command.args()[2].len(), 18);
}

#[test]
fn ios_command_is_simctl_log_stream() {
    let command = ResolvedConfig::default().command_for(Platform::Ios);
    assert_eq!(
        command.to_string(),
        "xcrun simctl spawn booted log stream"
    );
}
