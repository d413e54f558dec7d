mod handlers;
mod logging;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::BiasError;

pub fn run() -> Result<(), BiasError> {
    let cli = parse::Cli::parse();
    let debug = match &cli.cmd {
        parse::Command::Sample(a) | parse::Command::Stats(a) => a.source.debug,
        parse::Command::Histogram(a) => a.source.debug,
        parse::Command::Settings(s) => s.debug,
        parse::Command::Examples => false,
    };
    logging::init_logging(debug);

    match cli.cmd {
        parse::Command::Sample(a) => handlers::sample(&a),
        parse::Command::Stats(a) => handlers::stats(&a),
        parse::Command::Histogram(a) => handlers::histogram(&a),
        parse::Command::Settings(s) => handlers::settings(&s),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
