//! errpages entry point.
//! Parses the command line, loads the configuration and runs the generator
//! for the requested applications.

use errpages::{
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Result},
    generator::generate_apps,
    layout::Layout,
    logger::init_logger,
};
use log::debug;

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the configuration file and selected applications
/// 2. Loads the configuration
/// 3. Generates the pages of every selected application
fn run(args: Args) -> Result<()> {
    let invocation = args.invocation();
    debug!("{:?}", invocation);

    let config = load_config(&invocation.config_file)?;
    let layout = Layout::new(&invocation.root);

    generate_apps(&layout, &config, &invocation.selection)
}
