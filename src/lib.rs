//! Stencil scaffolds new files and directory trees from user-supplied
//! templates, substituting case-transformed variants of a target name into
//! both file names and file contents.

/// Case variants for identifier-like strings
pub mod case;

/// Command-line interface module for the stencil binary
pub mod cli;

/// Core compilation engine
/// Walks a template entry and materializes the rendered output
pub mod compilation;

/// Variable-mapping construction
/// Explodes name and directory fields into per-case-variant entries
pub mod context;

/// Error types and handling for the stencil application
pub mod error;

/// File-system access behind an injectable trait
pub mod fs;

/// Logger initialization
pub mod logger;

/// Target-name analysis (extension, prefix and suffix breakdown)
pub mod name;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
/// Applies the variable mapping to file names and file contents
pub mod renderer;

/// Template entries and discovery of the templates directory
pub mod template;

/// One scaffolding invocation from discovery to compilation
pub mod workflow;
