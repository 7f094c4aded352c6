//! stencil's main entry point.
//! Parses arguments and wires the OS file system, the terminal prompts and
//! the MiniJinja renderer into one scaffolding invocation.

use stencil::{
    cli::get_args,
    compilation::CompilationReport,
    error::{default_error_handler, Error},
    fs::OsFileSystem,
    logger::init_logger,
    prompt::DialoguerInteraction,
    renderer::MiniJinjaRenderer,
    workflow::{scaffold, Outcome, ScaffoldRequest},
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let renderer = MiniJinjaRenderer::new();
    let fs = OsFileSystem;
    let ui = DialoguerInteraction;

    let request = ScaffoldRequest {
        templates_dir: &args.templates_dir,
        destination: &args.destination,
        template: args.template.as_deref(),
        name: args.name.as_deref(),
        skip_overwrite_check: args.force,
    };

    match scaffold(&renderer, &fs, &ui, request) {
        Ok(Outcome::Cancelled) => {}
        Ok(Outcome::Completed(report)) => {
            std::process::exit(report_outcomes(&report));
        }
        // The workflow already reported this through the interaction
        // collaborator; only the exit status is left to set.
        Err(Error::NoTemplates { .. }) => std::process::exit(1),
        Err(err) => default_error_handler(err),
    }
}

/// Prints skipped and failed entries (written files were already announced
/// as they appeared) and returns the process exit code.
fn report_outcomes(report: &CompilationReport) -> i32 {
    for path in &report.skipped {
        println!("Skipped: '{}'", path.display());
    }
    for (path, err) in &report.failed {
        eprintln!("Failed: '{}': {}", path.display(), err);
    }
    if report.failed.is_empty() {
        0
    } else {
        1
    }
}
