// CLI binary entry point for mp3meta

mod cli;

use std::process;

use clap::Parser;

use cli::commands::{command_detect, command_read};
use cli::config::read_options;
use cli::logging::init_logging;
use cli::{Commands, Config, OutputFormatter};

fn main() {
    let config = Config::parse();
    init_logging(config.quiet, config.verbose);

    let formatter = OutputFormatter::new(config.format, config.quiet);

    let result = match &config.command {
        Commands::Read {
            files,
            fields,
            output,
            trim,
            utf16,
        } => command_read(
            files,
            fields.as_deref(),
            output.as_deref(),
            &read_options(*trim, *utf16),
            &formatter,
        ),
        Commands::Detect { files } => command_detect(files, &formatter),
    };

    match result {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}
