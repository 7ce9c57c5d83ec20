//! `notebook-pages` - generate tutorial and project listing pages

use clap::Parser;

use notebook_pages::cli::Cli;
use notebook_pages::cli::generate;
use notebook_pages::error::ExitCode;
use notebook_pages::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match generate::run(&cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
