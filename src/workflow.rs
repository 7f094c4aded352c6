//! One scaffolding invocation end to end: discover templates, pick one,
//! prompt for the target name, compile.

use crate::compilation::{Compilation, CompilationReport};
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::prompt::Interaction;
use crate::renderer::TemplateRenderer;
use crate::template::{find_templates, TemplateEntry};
use std::path::Path;

/// How an invocation ended.
#[derive(Debug)]
pub enum Outcome {
    Completed(CompilationReport),
    /// The user backed out of the picker or the name prompt. Not an error.
    Cancelled,
}

/// Everything one invocation needs from the caller.
pub struct ScaffoldRequest<'a> {
    /// Directory holding the available templates
    pub templates_dir: &'a Path,
    /// Output base location (a directory, or a file whose parent is used)
    pub destination: &'a Path,
    /// Bypasses the interactive picker when set
    pub template: Option<&'a str>,
    /// Bypasses the name prompt when set
    pub name: Option<&'a str>,
    /// Overwrite existing output without asking
    pub skip_overwrite_check: bool,
}

/// Runs one scaffolding invocation.
///
/// Zero discovered templates is fatal: the message goes through
/// [`Interaction::report_error`] and `Error::NoTemplates` comes back so the
/// caller can set its exit status without printing again.
pub fn scaffold(
    renderer: &dyn TemplateRenderer,
    fs: &dyn FileSystem,
    ui: &dyn Interaction,
    request: ScaffoldRequest<'_>,
) -> Result<Outcome> {
    let entries = find_templates(fs, request.templates_dir);
    if entries.is_empty() {
        ui.report_error(&format!(
            "No templates found. Create one under '{}' to get started.",
            request.templates_dir.display()
        ));
        return Err(Error::NoTemplates {
            templates_dir: request.templates_dir.display().to_string(),
        });
    }

    let entry = match request.template {
        Some(name) => select_named(&entries, name)?,
        None => match ui.pick_template(&entries) {
            Some(index) => &entries[index],
            None => return Ok(Outcome::Cancelled),
        },
    };

    let name = match request.name {
        Some(name) => name.to_string(),
        None => match ui.prompt_name() {
            Some(name) => name,
            None => return Ok(Outcome::Cancelled),
        },
    };

    let compilation = Compilation::new(
        renderer,
        fs,
        ui,
        entry,
        request.destination,
        &name,
        request.skip_overwrite_check,
    )?;
    Ok(Outcome::Completed(compilation.run()?))
}

/// Finds an entry by its logical name or its raw on-disk name.
fn select_named<'e>(entries: &'e [TemplateEntry], name: &str) -> Result<&'e TemplateEntry> {
    entries
        .iter()
        .find(|entry| entry.template_name == name || entry.file_name == name)
        .ok_or_else(|| Error::TemplateNotFound {
            name: name.to_string(),
        })
}
