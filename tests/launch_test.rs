use anyhow::Result;
use cnc_launch::core::launch::{self, Invocation, ParsedArgs, PROGRAM};
use cnc_launch::utils::validation::Validate;
use cnc_launch::{
    CannedPrompt, LaunchError, LauncherConfig, Launcher, LogLevel, Logger, MemorySink,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

fn parse(argv: &[&str]) -> Result<ParsedArgs> {
    let mut full = vec![PROGRAM];
    full.extend_from_slice(argv);
    match launch::parse_args(full)? {
        Invocation::Launch(parsed) => Ok(parsed),
        Invocation::Help => anyhow::bail!("unexpected help"),
    }
}

const JOBS_CONFIG: &str = r#"
[logging]
level = "info"

[recent]
capacity = 5
files = ["/jobs/foo.nc", "/jobs/bar.nc"]

[serial]
port = "/dev/ttyACM0"
baud = 115200
"#;

#[test]
fn test_recent_index_appended_after_positional_files() -> Result<()> {
    let config_file = write_config(JOBS_CONFIG)?;
    let ini = config_file.path().to_str().unwrap().to_string();
    let parsed = parse(&["-i", &ini, "extra.nc", "-R", "2", "--run"])?;

    let config = LauncherConfig::load(parsed.args.ini.as_deref())?;
    config.validate()?;

    let sink = MemorySink::new();
    let mut logger = Logger::with_sink(config.log_level(), sink.clone());
    let plan = Launcher::new(&config).plan(
        &parsed,
        &config.history(),
        &mut CannedPrompt::unanswered(),
        &mut logger,
    );

    assert_eq!(plan.files, vec!["extra.nc".to_string(), "/jobs/bar.nc".to_string()]);
    assert!(plan.run);
    assert_eq!(plan.serial_port.as_deref(), Some("/dev/ttyACM0"));
    assert_eq!(plan.baud, Some(115200));
    assert_eq!(plan.ini.as_deref(), Some(ini.as_str()));
    assert!(sink.is_empty());
    Ok(())
}

#[test]
fn test_command_line_overrides_serial_settings() -> Result<()> {
    let config = LauncherConfig::from_toml_str(JOBS_CONFIG)?;
    let parsed = parse(&["-s", "/dev/ttyUSB1", "-b", "9600", "-S", "-p", "/dev/ttyUSB2", "-P"])?;

    let mut logger = Logger::with_sink(LogLevel::WARNING, MemorySink::new());
    let plan = Launcher::new(&config).plan(
        &parsed,
        &config.history(),
        &mut CannedPrompt::unanswered(),
        &mut logger,
    );

    assert_eq!(plan.serial_port.as_deref(), Some("/dev/ttyUSB1"));
    assert_eq!(plan.baud, Some(9600));
    assert!(!plan.open_serial);
    assert_eq!(plan.pendant_port.as_deref(), Some("/dev/ttyUSB2"));
    assert!(!plan.start_pendant);
    assert!(plan.files.is_empty());
    Ok(())
}

#[test]
fn test_list_prompt_picks_file() -> Result<()> {
    let config = LauncherConfig::from_toml_str(JOBS_CONFIG)?;
    let parsed = parse(&["-l"])?;

    let sink = MemorySink::new();
    let mut logger = Logger::with_sink(LogLevel::CRITICAL, sink.clone());
    let mut prompt = CannedPrompt::new([Some(2)]);
    let plan = Launcher::new(&config).plan(&parsed, &config.history(), &mut prompt, &mut logger);

    assert_eq!(plan.files, vec!["/jobs/bar.nc".to_string()]);
    let text = sink.text();
    assert!(text.contains("Recent files:"));
    assert!(text.contains("/jobs"));
    assert!(text.ends_with("Select one:"));
    Ok(())
}

#[test]
fn test_name_miss_policy_from_config() -> Result<()> {
    let config = LauncherConfig::from_toml_str(
        r#"
[recent]
on_name_miss = "none"
files = ["/jobs/foo.nc"]
"#,
    )?;
    let parsed = parse(&["-R", "missing"])?;

    let mut logger = Logger::with_sink(LogLevel::WARNING, MemorySink::new());
    let plan = Launcher::new(&config).plan(
        &parsed,
        &config.history(),
        &mut CannedPrompt::unanswered(),
        &mut logger,
    );
    assert!(plan.files.is_empty());
    Ok(())
}

#[test]
fn test_usage_error_and_help() {
    let err = launch::parse_args([PROGRAM, "-x"]).unwrap_err();
    assert!(matches!(err, LaunchError::UsageError { .. }));
    assert!(!err.user_friendly_message().is_empty());

    assert!(matches!(
        launch::parse_args([PROGRAM, "-r", "--help"]).unwrap(),
        Invocation::Help
    ));
}

#[test]
fn test_print_usage_ignores_threshold() {
    let sink = MemorySink::new();
    let mut logger = Logger::with_sink(LogLevel(i32::MAX), sink.clone());
    launch::print_usage(&mut logger);

    let text = sink.text();
    assert!(text.contains("Usage: [options] [filename...]"));
    assert!(text.contains("-R #"));
    assert!(text.contains("--run"));
}

#[test]
fn test_invalid_config_rejected() -> Result<()> {
    let config_file = write_config("[recent]\ncapacity = 500\n")?;
    let config = LauncherConfig::from_file(config_file.path())?;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, LaunchError::InvalidConfigValueError { .. }));
    Ok(())
}
