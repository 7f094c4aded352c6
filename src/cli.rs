//! Command-line interface implementation for stencil.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "stencil: scaffold files and directories from name-aware templates", long_about = None)]
pub struct Args {
    /// Location to generate into (a directory, or a file whose parent
    /// directory is used)
    #[arg(value_name = "DESTINATION")]
    pub destination: PathBuf,

    /// Directory holding the available templates
    #[arg(long, value_name = "DIR", default_value = ".templates")]
    pub templates_dir: PathBuf,

    /// Template to instantiate, bypassing the interactive picker
    #[arg(short, long, value_name = "NAME")]
    pub template: Option<String>,

    /// Target name, bypassing the interactive prompt
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Overwrite existing files and directories without asking
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
