//! Error handling for the stencil application.
//! Defines the error types and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors surfaced by a scaffolding invocation.
///
/// Declined overwrites and cancelled prompts are deliberately not errors;
/// they are ordinary outcomes and flow through
/// [`CompilationReport`](crate::compilation::CompilationReport) and
/// [`Outcome`](crate::workflow::Outcome) instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),

    /// Represents errors that occur while rendering a template name or body
    #[error("Template error: {0}.")]
    Template(#[from] minijinja::Error),

    /// The output base location does not exist; nothing is written
    #[error("Destination '{destination}' does not exist.")]
    DestinationNotFound { destination: String },

    /// Discovery found nothing to instantiate
    #[error("No templates found in '{templates_dir}'.")]
    NoTemplates { templates_dir: String },

    /// A template named on the command line is not among the discovered entries
    #[error("No template named '{name}'.")]
    TemplateNotFound { name: String },
}

/// Convenience type alias for Results with stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
