//! The compilation engine.
//! Resolves the destination, builds the variable mapping and materializes a
//! template entry: a single rendered file, or a whole directory tree walked
//! depth-first with every path segment and file body rendered through the
//! same context.

use crate::context::{build_context, to_render_context};
use crate::error::{Error, Result};
use crate::fs::{EntryKind, FileSystem};
use crate::prompt::Interaction;
use crate::renderer::TemplateRenderer;
use crate::template::TemplateEntry;
use log::{debug, error};
use std::path::{Path, PathBuf};

/// Pseudo-extension marking template files. It is stripped from generated
/// names, exposing the real extension beneath it:
/// `foo.ts.template` produces a `.ts` file.
pub const TEMPLATE_EXTENSION: &str = "template";

/// Per-entry outcomes of one invocation. Failures never abort sibling
/// entries; they are collected here and surfaced by the caller.
#[derive(Debug, Default)]
pub struct CompilationReport {
    /// Files and directories created (or overwritten)
    pub written: Vec<PathBuf>,
    /// Entries left untouched because an overwrite was declined
    pub skipped: Vec<PathBuf>,
    /// Entries that could not be read, rendered or persisted
    pub failed: Vec<(PathBuf, Error)>,
}

/// One compile invocation: the resolved output directory, the template
/// entry, the target name and the derived variable mapping. Created on
/// demand, discarded after [`Compilation::run`].
pub struct Compilation<'a> {
    renderer: &'a dyn TemplateRenderer,
    fs: &'a dyn FileSystem,
    ui: &'a dyn Interaction,
    entry: &'a TemplateEntry,
    output_dir: PathBuf,
    name: String,
    context: serde_json::Value,
    skip_overwrite_check: bool,
}

impl<'a> Compilation<'a> {
    /// Resolves the destination and builds the variable mapping.
    ///
    /// # Errors
    /// * `Error::DestinationNotFound` if `output_base` does not exist
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        fs: &'a dyn FileSystem,
        ui: &'a dyn Interaction,
        entry: &'a TemplateEntry,
        output_base: &Path,
        name: &str,
        skip_overwrite_check: bool,
    ) -> Result<Self> {
        let output_dir = resolve_destination(fs, output_base)?;
        let dir = output_dir
            .file_name()
            .map(|segment| segment.to_string_lossy().into_owned())
            .unwrap_or_default();
        let context = to_render_context(&build_context(name, &dir));
        Ok(Self {
            renderer,
            fs,
            ui,
            entry,
            output_dir,
            name: name.to_string(),
            context,
            skip_overwrite_check,
        })
    }

    /// Runs the invocation to completion and reports per-entry outcomes.
    pub fn run(&self) -> Result<CompilationReport> {
        let mut report = CompilationReport::default();
        match self.entry.kind {
            EntryKind::File => {
                let extension = real_extension(&self.entry.file_name);
                let output_path =
                    self.output_dir.join(format!("{}{}", self.name, extension));
                self.write_rendered_file(&self.entry.path, &output_path, &mut report);
            }
            EntryKind::Directory => {
                self.compile_dir(&self.entry.path, &self.output_dir, &mut report);
            }
        }
        Ok(report)
    }

    /// Walks one template directory level. Entry names render through the
    /// variable mapping before joining the output path; subdirectories
    /// recurse depth-first under their rendered name.
    fn compile_dir(
        &self,
        template_dir: &Path,
        output_dir: &Path,
        report: &mut CompilationReport,
    ) {
        for entry in self.fs.read_dir(template_dir) {
            let template_path = template_dir.join(&entry.name);
            let rendered = match self.renderer.render(&entry.name, &self.context) {
                Ok(rendered) => rendered,
                Err(err) => {
                    error!("Failed to render entry name '{}': {}", entry.name, err);
                    report.failed.push((template_path, err));
                    continue;
                }
            };
            if rendered.trim().is_empty() {
                debug!("Skipping '{}': rendered name is empty", entry.name);
                continue;
            }
            let output_path = resolve_output_path(output_dir, &rendered);
            match entry.kind {
                EntryKind::File => {
                    self.write_rendered_file(&template_path, &output_path, report);
                }
                EntryKind::Directory => {
                    if self.materialize_dir(&output_path, report) {
                        self.compile_dir(&template_path, &output_path, report);
                    }
                }
            }
        }
    }

    /// Renders one template file into place and records the outcome.
    fn write_rendered_file(
        &self,
        template_path: &Path,
        output_path: &Path,
        report: &mut CompilationReport,
    ) {
        match self.try_write_file(template_path, output_path) {
            Ok(true) => {
                debug!("Wrote '{}'", output_path.display());
                report.written.push(output_path.to_path_buf());
                self.ui.present_file(output_path);
            }
            Ok(false) => {
                debug!("Skipping '{}': overwrite declined", output_path.display());
                report.skipped.push(output_path.to_path_buf());
            }
            Err(err) => {
                error!("Failed to write '{}': {}", output_path.display(), err);
                report.failed.push((output_path.to_path_buf(), err));
            }
        }
    }

    /// Returns `Ok(false)` when the user declines to overwrite an existing
    /// file.
    fn try_write_file(&self, template_path: &Path, output_path: &Path) -> Result<bool> {
        let template = self.fs.read_file(template_path)?;
        let content = self.renderer.render(&template, &self.context)?;
        if self.fs.stat(output_path).is_some() && !self.confirm_overwrite(output_path) {
            return Ok(false);
        }
        self.fs.write_file(output_path, &content)?;
        Ok(true)
    }

    /// Creates one output directory, honoring the overwrite prompt when the
    /// location already exists. Returns whether to descend into the subtree.
    fn materialize_dir(&self, output_path: &Path, report: &mut CompilationReport) -> bool {
        if self.fs.stat(output_path).is_some() && !self.confirm_overwrite(output_path) {
            debug!("Skipping '{}': overwrite declined", output_path.display());
            report.skipped.push(output_path.to_path_buf());
            return false;
        }
        match self.fs.create_dir(output_path) {
            Ok(()) => {
                debug!("Created directory '{}'", output_path.display());
                report.written.push(output_path.to_path_buf());
                true
            }
            Err(err) => {
                error!("Failed to create '{}': {}", output_path.display(), err);
                report.failed.push((output_path.to_path_buf(), err));
                false
            }
        }
    }

    fn confirm_overwrite(&self, path: &Path) -> bool {
        self.skip_overwrite_check || self.ui.confirm_overwrite(path)
    }
}

/// Resolves the output base location. An existing plain file is silently
/// reinterpreted as its parent directory; a missing path is fatal.
pub fn resolve_destination(fs: &dyn FileSystem, base: &Path) -> Result<PathBuf> {
    match fs.stat(base) {
        None => Err(Error::DestinationNotFound {
            destination: base.display().to_string(),
        }),
        Some(stat) if stat.is_directory => Ok(base.to_path_buf()),
        Some(_) => Ok(base
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .to_path_buf()),
    }
}

/// Joins a rendered entry name onto `base`, stripping a trailing
/// `.template` pseudo-extension from the name first.
pub fn resolve_output_path(base: &Path, rendered_name: &str) -> PathBuf {
    let path = Path::new(rendered_name);
    if path.extension().and_then(|ext| ext.to_str()) == Some(TEMPLATE_EXTENSION) {
        if let Some(stem) = path.file_stem() {
            return base.join(stem);
        }
    }
    base.join(rendered_name)
}

/// Extension carried over to the output of a single-file template: the
/// template's own extension, with a trailing `.template` peeled off first.
/// `component.ts.template` -> `.ts`, `snippet.rs` -> `.rs`.
pub fn real_extension(template_file_name: &str) -> String {
    let path = Path::new(template_file_name);
    let path = if path.extension().and_then(|ext| ext.to_str()) == Some(TEMPLATE_EXTENSION)
    {
        path.file_stem().map(PathBuf::from).unwrap_or_default()
    } else {
        path.to_path_buf()
    };
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}
