mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::AppearanceError;

pub fn run() -> Result<(), AppearanceError> {
    let cli = parse::Cli::parse();
    handlers::init_logging(cli.debug);
    handlers::report(cli)
}
