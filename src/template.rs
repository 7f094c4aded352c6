//! Template entries and discovery.
//! Templates live as plain files and directories inside a single templates
//! directory; discovery lists that directory and nothing else.

use crate::fs::{EntryKind, FileSystem};
use std::path::{Path, PathBuf};

/// Description shown for directory templates, which expand into multiple
/// output files.
pub const MULTI_FILE_DESCRIPTION: &str = "multiple";

/// One discoverable template unit.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// Logical identifier shown in the picker (file name minus extension
    /// for files, raw directory name for directories)
    pub template_name: String,
    /// Extension for single files, [`MULTI_FILE_DESCRIPTION`] for directories
    pub template_description: String,
    /// Where to read the template from
    pub path: PathBuf,
    /// The entry name exactly as stored on disk
    pub file_name: String,
    /// Determines which compilation branch runs; fixed at discovery
    pub kind: EntryKind,
}

/// Lists the templates available under `templates_dir`.
/// A missing or unreadable directory yields no templates, not an error.
pub fn find_templates(fs: &dyn FileSystem, templates_dir: &Path) -> Vec<TemplateEntry> {
    fs.read_dir(templates_dir)
        .into_iter()
        .map(|entry| {
            let (template_name, template_description) = match entry.kind {
                EntryKind::File => describe_file(&entry.name),
                EntryKind::Directory => {
                    (entry.name.clone(), MULTI_FILE_DESCRIPTION.to_string())
                }
            };
            TemplateEntry {
                template_name,
                template_description,
                path: templates_dir.join(&entry.name),
                file_name: entry.name,
                kind: entry.kind,
            }
        })
        .collect()
}

fn describe_file(file_name: &str) -> (String, String) {
    let path = Path::new(file_name);
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
        .to_string();
    let description = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();
    (name, description)
}
