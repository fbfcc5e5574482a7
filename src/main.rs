mod cli;
mod settings;
mod workflow;

use advocates::logging::{self, LogTarget};
use advocates::ui::style;
use anyhow::Result;
use cli::{
    CliArgs, OutputFormat, parse_cli, print_json, print_listing_json, print_listing_plain,
    print_plain,
};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in style::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    init_logging(&cli, &resolved);

    if cli.list {
        run_listing(cli.output, &resolved)
    } else {
        run_search(cli.output, resolved)
    }
}

/// Interactive sessions log to a file so the terminal stays clean; listing
/// logs to stderr unless a file is configured.
fn init_logging(cli: &CliArgs, settings: &ResolvedConfig) {
    let target = match (&settings.log_file, cli.list) {
        (None, true) => Ok(LogTarget::Stderr),
        (file, _) => LogTarget::file_or_default(file.clone()),
    };
    let installed = target.and_then(|target| logging::initialize(&settings.log_level, &target));
    if let Err(err) = installed {
        eprintln!("warning: logging disabled: {err:#}");
    }
}

/// Execute the interactive browser and print the outcome in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
    let workflow = SearchWorkflow::from_config(settings)?;
    let outcome = workflow.run()?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}

fn run_listing(format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
    let listing = workflow::list(settings)?;

    match format {
        OutputFormat::Plain => print_listing_plain(&listing.model),
        OutputFormat::Json => print_listing_json(
            listing.directory.search(),
            listing.directory.full().len(),
            listing.directory.display(),
        )?,
    }

    Ok(())
}
