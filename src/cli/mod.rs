mod annotations;
mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{print_json, print_listing_json, print_listing_plain, print_plain};
