use crate::config::toml_config::LauncherConfig;
use crate::config::CliArgs;
use crate::core::logger::Logger;
use crate::core::resolver::SelectorResolver;
use crate::domain::model::Selector;
use crate::domain::ports::{Prompt, RecentStore};
use crate::utils::error::{LaunchError, Result};
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use std::ffi::OsString;

pub const PROGRAM: &str = "cnc-launch";

const OPTIONS: [(&str, &str); 15] = [
    ("-b # | --baud #", "Set the baud rate"),
    ("-d", "Enable developer features"),
    ("-D", "Disable developer features"),
    ("-f | --fullscreen", "Enable fullscreen mode"),
    ("-g #", "Set the default geometry"),
    ("-h | -? | --help", "This help page"),
    ("-i # | --ini #", "Alternative ini file for testing"),
    ("-l | --list", "List all recently opened files"),
    ("-p # | --pendant #", "Open pendant to specified port"),
    ("-P", "Do not start pendant"),
    ("-r | --recent", "Load the most recent file opened"),
    ("-R #", "Load the recent file matching the argument"),
    ("-s # | --serial #", "Open serial port specified"),
    ("-S", "Do not open serial port"),
    ("--run", "Directly run the file once loaded"),
];

pub fn usage_lines() -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} V{} [{}-{}]",
            PROGRAM,
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        ),
        String::new(),
        "Usage: [options] [filename...]".to_string(),
        String::new(),
        "Options:".to_string(),
    ];
    for (flags, help) in OPTIONS {
        lines.push(format!("    {:<22}{}", flags, help));
    }
    lines
}

/// Prints usage through the unconditional channel.
pub fn print_usage(logger: &mut Logger) {
    for line in usage_lines() {
        logger.always(&[&line]);
    }
}

/// What the command line asks for.
#[derive(Debug, Clone)]
pub enum Invocation {
    Help,
    Launch(ParsedArgs),
}

#[derive(Debug, Clone, Default)]
pub struct ParsedArgs {
    pub args: CliArgs,
    /// Last of `-r`, `-R`, `-l` on the command line.
    pub selector: Option<Selector>,
    /// Last of `-d`, `-D` on the command line.
    pub developer: Option<bool>,
}

/// Parses `argv` (program name first). Malformed options become
/// [`LaunchError::UsageError`].
pub fn parse_args<I, T>(argv: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = CliArgs::command()
        .try_get_matches_from(argv)
        .map_err(usage_error)?;
    let args = CliArgs::from_arg_matches(&matches).map_err(usage_error)?;

    if args.help {
        return Ok(Invocation::Help);
    }

    let selector = match last_given(&matches, &["recent", "list", "recent_value"]) {
        Some("recent") => Selector::from_flag("-r", None),
        Some("list") => Selector::from_flag("-l", None),
        Some(_) => Selector::from_flag("-R", args.recent_value.as_deref()),
        None => None,
    };

    let developer = match last_given(&matches, &["developer", "no_developer"]) {
        Some("developer") => Some(true),
        Some(_) => Some(false),
        None => None,
    };

    Ok(Invocation::Launch(ParsedArgs {
        args,
        selector,
        developer,
    }))
}

fn usage_error(e: clap::Error) -> LaunchError {
    let rendered = e.to_string();
    LaunchError::UsageError {
        message: rendered.lines().next().unwrap_or_default().to_string(),
    }
}

/// Id of the argument given last on the command line among `ids`.
fn last_given<'a>(matches: &ArgMatches, ids: &[&'a str]) -> Option<&'a str> {
    ids.iter()
        .copied()
        .filter(|id| matches.value_source(id) == Some(ValueSource::CommandLine))
        .filter_map(|id| matches.index_of(id).map(|index| (index, id)))
        .max_by_key(|(index, _)| *index)
        .map(|(_, id)| id)
}

/// Everything the application shell needs to start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchPlan {
    pub files: Vec<String>,
    pub fullscreen: bool,
    pub run: bool,
    pub developer: Option<bool>,
    pub baud: Option<u32>,
    pub serial_port: Option<String>,
    pub open_serial: bool,
    pub pendant_port: Option<String>,
    pub start_pendant: bool,
    pub geometry: Option<String>,
    pub ini: Option<String>,
}

impl LaunchPlan {
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.files.is_empty() {
            lines.push("Files: (none)".to_string());
        } else {
            lines.push(format!("Files: {}", self.files.join(", ")));
        }
        match (&self.serial_port, self.open_serial) {
            (_, false) => lines.push("Serial: disabled".to_string()),
            (Some(port), true) => lines.push(format!(
                "Serial: {} @ {}",
                port,
                self.baud.map(|b| b.to_string()).unwrap_or_else(|| "default".to_string())
            )),
            (None, true) => lines.push("Serial: not configured".to_string()),
        }
        if let Some(port) = self.pendant_port.as_ref().filter(|_| self.start_pendant) {
            lines.push(format!("Pendant: {}", port));
        }
        if let Some(geometry) = &self.geometry {
            lines.push(format!("Geometry: {}", geometry));
        }
        if let Some(developer) = self.developer {
            lines.push(format!("Developer: {}", developer));
        }
        lines.push(format!("Fullscreen: {}", self.fullscreen));
        lines.push(format!("Run after load: {}", self.run));
        lines
    }
}

/// Turns parsed arguments into a [`LaunchPlan`], resolving the recent-file
/// selector against the history.
#[derive(Debug, Clone, Copy)]
pub struct Launcher<'a> {
    config: &'a LauncherConfig,
    resolver: SelectorResolver,
}

impl<'a> Launcher<'a> {
    pub fn new(config: &'a LauncherConfig) -> Self {
        Self {
            config,
            resolver: SelectorResolver::new(config.name_miss_policy()),
        }
    }

    pub fn plan<S, P>(
        &self,
        parsed: &ParsedArgs,
        store: &S,
        prompt: &mut P,
        logger: &mut Logger,
    ) -> LaunchPlan
    where
        S: RecentStore + ?Sized,
        P: Prompt + ?Sized,
    {
        let args = &parsed.args;
        let mut files = args.files.clone();

        if let Some(selector) = &parsed.selector {
            match self.resolver.resolve(selector, store, prompt, logger) {
                Some(path) => {
                    tracing::debug!("Recent selection {:?} -> {}", selector, path);
                    files.push(path);
                }
                None => tracing::debug!("Recent selection {:?} picked nothing", selector),
            }
        }

        LaunchPlan {
            files,
            fullscreen: args.fullscreen,
            run: args.run,
            developer: parsed.developer,
            baud: args.baud.or(self.config.serial.baud),
            serial_port: args.serial.clone().or_else(|| self.config.serial.port.clone()),
            open_serial: !args.no_serial,
            pendant_port: args.pendant.clone(),
            start_pendant: args.pendant.is_some() && !args.no_pendant,
            geometry: args.geometry.clone(),
            ini: args.ini.clone(),
        }
    }
}
