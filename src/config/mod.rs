pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

/// Command-line options of the launcher. Help is handled by the launcher
/// itself so usage text goes through the user-facing logger.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cnc-launch")]
#[command(about = "Launcher for the CNC controller application")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct CliArgs {
    #[arg(short = 'b', long = "baud", value_name = "BAUD")]
    pub baud: Option<u32>,

    #[arg(short = 'd')]
    pub developer: bool,

    #[arg(short = 'D')]
    pub no_developer: bool,

    #[arg(short = 'f', long = "fullscreen")]
    pub fullscreen: bool,

    #[arg(short = 'g', value_name = "GEOMETRY")]
    pub geometry: Option<String>,

    #[arg(short = 'h', long = "help", short_alias = '?')]
    pub help: bool,

    #[arg(short = 'i', long = "ini", value_name = "FILE")]
    pub ini: Option<String>,

    #[arg(short = 'l', long = "list")]
    pub list: bool,

    #[arg(short = 'p', long = "pendant", value_name = "PORT")]
    pub pendant: Option<String>,

    #[arg(short = 'P')]
    pub no_pendant: bool,

    #[arg(short = 'r', long = "recent")]
    pub recent: bool,

    #[arg(short = 'R', value_name = "VALUE", allow_hyphen_values = true)]
    pub recent_value: Option<String>,

    #[arg(short = 's', long = "serial", value_name = "PORT")]
    pub serial: Option<String>,

    #[arg(short = 'S')]
    pub no_serial: bool,

    #[arg(long = "run")]
    pub run: bool,

    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}
