use std::fmt::Write;
use std::path::PathBuf;

use advocates::app_dirs;
use clap::{
    ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use super::annotations::dim_cli_annotations;

/// Version banner including the config and data directories.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let data_dir = match app_dirs::get_data_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("advocates {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "data directory: {data_dir}");

    Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
    let mut matches = tinted_cli_command().get_matches();
    CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn tinted_cli_command() -> Command {
    CliArgs::command().mut_args(dim_cli_annotations)
}

#[derive(Parser, Debug)]
#[command(
    name = "advocates",
    version,
    long_version = long_version(),
    about = "Search and browse the advocate directory from the terminal",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `advocates` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "ADVOCATES_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'e',
        long,
        value_name = "URL",
        help = "Fetch advocates from this endpoint (default: http://localhost:3000/api/advocates)"
    )]
    pub(crate) endpoint: Option<String>,
    #[arg(
        short = 'f',
        long,
        value_name = "PATH",
        conflicts_with = "endpoint",
        help = "Read advocates from a JSON file shaped like the API response"
    )]
    pub(crate) file: Option<PathBuf>,
    #[arg(
        long,
        conflicts_with_all = ["endpoint", "file"],
        help = "Use the built-in sample advocates instead of fetching (default: disabled)"
    )]
    pub(crate) seed: bool,
    #[arg(
        long,
        value_name = "SECS",
        help = "Abort the fetch after this many seconds (default: no timeout)"
    )]
    pub(crate) timeout: Option<u64>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Start with this search term (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the search prompt title (default: Search)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: default)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long,
        help = "Fetch, filter by --query and print the table without starting the UI (default: disabled)"
    )]
    pub(crate) list: bool,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log filter such as info or advocates=debug (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
