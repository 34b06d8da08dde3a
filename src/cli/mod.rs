mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::TableError;

pub fn run() -> Result<(), TableError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Csv(a) => handlers::csv(&a),
        parse::Command::Styles => {
            handlers::styles();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
