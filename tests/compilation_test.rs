use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use stencil::compilation::{resolve_destination, Compilation};
use stencil::error::{Error, Result};
use stencil::fs::{DirEntry, EntryKind, FileSystem, OsFileSystem, Stat};
use stencil::prompt::Interaction;
use stencil::renderer::MiniJinjaRenderer;
use stencil::template::TemplateEntry;
use tempfile::TempDir;

/// Scripted stand-in for the interactive prompts.
#[derive(Default)]
struct FakeInteraction {
    overwrite_answer: bool,
    confirmed: RefCell<Vec<PathBuf>>,
    presented: RefCell<Vec<PathBuf>>,
}

impl Interaction for FakeInteraction {
    fn pick_template(&self, _entries: &[TemplateEntry]) -> Option<usize> {
        Some(0)
    }

    fn prompt_name(&self) -> Option<String> {
        None
    }

    fn confirm_overwrite(&self, path: &Path) -> bool {
        self.confirmed.borrow_mut().push(path.to_path_buf());
        self.overwrite_answer
    }

    fn present_file(&self, path: &Path) {
        self.presented.borrow_mut().push(path.to_path_buf());
    }

    fn report_error(&self, _message: &str) {}
}

/// File system that refuses to persist one particular file name and
/// delegates everything else to the real disk.
struct RejectingFs {
    reject: String,
}

impl FileSystem for RejectingFs {
    fn stat(&self, path: &Path) -> Option<Stat> {
        OsFileSystem.stat(path)
    }

    fn read_dir(&self, path: &Path) -> Vec<DirEntry> {
        OsFileSystem.read_dir(path)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        OsFileSystem.read_file(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if path.file_name().and_then(|name| name.to_str()) == Some(self.reject.as_str()) {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            )));
        }
        OsFileSystem.write_file(path, content)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        OsFileSystem.create_dir(path)
    }
}

fn entry(path: &Path, kind: EntryKind) -> TemplateEntry {
    let file_name = path.file_name().unwrap().to_str().unwrap().to_string();
    TemplateEntry {
        template_name: file_name.clone(),
        template_description: String::new(),
        path: path.to_path_buf(),
        file_name,
        kind,
    }
}

#[test]
fn test_single_file_template() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("component.ts.template");
    fs::write(&template_path, "export class {{namePascal}}Component {}").unwrap();
    let destination = temp_dir.path().join("features");
    fs::create_dir(&destination).unwrap();

    let renderer = MiniJinjaRenderer::new();
    let ui = FakeInteraction::default();
    let template = entry(&template_path, EntryKind::File);
    let compilation = Compilation::new(
        &renderer,
        &OsFileSystem,
        &ui,
        &template,
        &destination,
        "user-profile",
        false,
    )
    .unwrap();
    let report = compilation.run().unwrap();

    // `.template` is stripped, the extension beneath it survives.
    let output = destination.join("user-profile.ts");
    assert_eq!(report.written, vec![output.clone()]);
    assert!(report.skipped.is_empty());
    assert!(report.failed.is_empty());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "export class UserProfileComponent {}"
    );
    assert_eq!(*ui.presented.borrow(), vec![output]);
}

#[test]
fn test_directory_template_renders_names_and_recurses() {
    let temp_dir = TempDir::new().unwrap();
    let template_dir = temp_dir.path().join("feature");
    fs::create_dir_all(template_dir.join("{{namePascal}}")).unwrap();
    fs::write(template_dir.join("index.ts"), "export * from './{{nameParam}}';").unwrap();
    fs::write(
        template_dir.join("{{namePascal}}").join("{{namePascal}}.ts"),
        "export class {{namePascal}} {}",
    )
    .unwrap();
    let destination = temp_dir.path().join("out");
    fs::create_dir(&destination).unwrap();

    let renderer = MiniJinjaRenderer::new();
    let ui = FakeInteraction::default();
    let template = entry(&template_dir, EntryKind::Directory);
    let compilation = Compilation::new(
        &renderer,
        &OsFileSystem,
        &ui,
        &template,
        &destination,
        "shape",
        false,
    )
    .unwrap();
    let report = compilation.run().unwrap();

    // Literal names copy through, templated names render, and the same
    // context applies at every depth.
    assert_eq!(
        fs::read_to_string(destination.join("index.ts")).unwrap(),
        "export * from './shape';"
    );
    assert_eq!(
        fs::read_to_string(destination.join("Shape").join("Shape.ts")).unwrap(),
        "export class Shape {}"
    );
    assert!(report.failed.is_empty());
    assert!(report.written.contains(&destination.join("Shape")));
}

#[test]
fn test_directory_entry_with_template_extension() {
    let temp_dir = TempDir::new().unwrap();
    let template_dir = temp_dir.path().join("component");
    fs::create_dir(&template_dir).unwrap();
    fs::write(
        template_dir.join("{{nameParam}}.component.ts.template"),
        "export class {{namePascal}}Component {}",
    )
    .unwrap();
    let destination = temp_dir.path().join("features");
    fs::create_dir(&destination).unwrap();

    let renderer = MiniJinjaRenderer::new();
    let ui = FakeInteraction::default();
    let template = entry(&template_dir, EntryKind::Directory);
    let compilation = Compilation::new(
        &renderer,
        &OsFileSystem,
        &ui,
        &template,
        &destination,
        "user-profile",
        false,
    )
    .unwrap();
    let report = compilation.run().unwrap();

    let output = destination.join("user-profile.component.ts");
    assert_eq!(report.written, vec![output.clone()]);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "export class UserProfileComponent {}"
    );
}

#[test]
fn test_declined_overwrite_skips_entry_but_not_siblings() {
    let temp_dir = TempDir::new().unwrap();
    let template_dir = temp_dir.path().join("tpl");
    fs::create_dir(&template_dir).unwrap();
    fs::write(template_dir.join("a.txt"), "new a").unwrap();
    fs::write(template_dir.join("b.txt"), "new b").unwrap();
    let destination = temp_dir.path().join("out");
    fs::create_dir(&destination).unwrap();
    fs::write(destination.join("a.txt"), "old a").unwrap();

    let renderer = MiniJinjaRenderer::new();
    let ui = FakeInteraction {
        overwrite_answer: false,
        ..FakeInteraction::default()
    };
    let template = entry(&template_dir, EntryKind::Directory);
    let compilation = Compilation::new(
        &renderer,
        &OsFileSystem,
        &ui,
        &template,
        &destination,
        "ignored",
        false,
    )
    .unwrap();
    let report = compilation.run().unwrap();

    // The existing file stays, the decline is not an error, and the
    // sibling is still written.
    assert_eq!(fs::read_to_string(destination.join("a.txt")).unwrap(), "old a");
    assert_eq!(fs::read_to_string(destination.join("b.txt")).unwrap(), "new b");
    assert_eq!(report.skipped, vec![destination.join("a.txt")]);
    assert_eq!(report.written, vec![destination.join("b.txt")]);
    assert!(report.failed.is_empty());
    assert_eq!(*ui.confirmed.borrow(), vec![destination.join("a.txt")]);
}

#[test]
fn test_force_overwrites_without_asking() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("note.md.template");
    fs::write(&template_path, "# {{namePascal}}").unwrap();
    let destination = temp_dir.path().join("out");
    fs::create_dir(&destination).unwrap();
    fs::write(destination.join("daily.md"), "old").unwrap();

    let renderer = MiniJinjaRenderer::new();
    let ui = FakeInteraction::default();
    let template = entry(&template_path, EntryKind::File);
    let compilation = Compilation::new(
        &renderer,
        &OsFileSystem,
        &ui,
        &template,
        &destination,
        "daily",
        true,
    )
    .unwrap();
    let report = compilation.run().unwrap();

    assert_eq!(fs::read_to_string(destination.join("daily.md")).unwrap(), "# Daily");
    assert!(ui.confirmed.borrow().is_empty());
    assert_eq!(report.written, vec![destination.join("daily.md")]);
}

#[test]
fn test_file_destination_resolves_to_parent() {
    let temp_dir = TempDir::new().unwrap();
    let destination_file = temp_dir.path().join("existing.txt");
    fs::write(&destination_file, "").unwrap();
    let template_path = temp_dir.path().join("note.md.template");
    fs::write(&template_path, "# {{namePascal}}").unwrap();

    let renderer = MiniJinjaRenderer::new();
    let ui = FakeInteraction::default();
    let template = entry(&template_path, EntryKind::File);
    let compilation = Compilation::new(
        &renderer,
        &OsFileSystem,
        &ui,
        &template,
        &destination_file,
        "memo",
        false,
    )
    .unwrap();
    let report = compilation.run().unwrap();

    // The plain-file destination silently becomes its parent directory.
    assert_eq!(report.written, vec![temp_dir.path().join("memo.md")]);
    assert!(temp_dir.path().join("memo.md").exists());
}

#[test]
fn test_missing_destination_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("note.md.template");
    fs::write(&template_path, "").unwrap();

    let renderer = MiniJinjaRenderer::new();
    let ui = FakeInteraction::default();
    let template = entry(&template_path, EntryKind::File);
    let result = Compilation::new(
        &renderer,
        &OsFileSystem,
        &ui,
        &template,
        &temp_dir.path().join("absent"),
        "memo",
        false,
    );

    match result {
        Err(Error::DestinationNotFound { .. }) => (),
        Err(other) => panic!("expected DestinationNotFound, got {other:?}"),
        Ok(_) => panic!("expected DestinationNotFound, got a compilation"),
    }
}

#[test]
fn test_resolve_destination() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("file.txt");
    fs::write(&file, "").unwrap();

    let resolved = resolve_destination(&OsFileSystem, temp_dir.path()).unwrap();
    assert_eq!(resolved, temp_dir.path());

    let resolved = resolve_destination(&OsFileSystem, &file).unwrap();
    assert_eq!(resolved, temp_dir.path());

    assert!(resolve_destination(&OsFileSystem, &temp_dir.path().join("absent")).is_err());
}

#[test]
fn test_used_context_draws_dir_from_resolved_destination() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("features");
    fs::create_dir(&destination).unwrap();
    let template_path = temp_dir.path().join("mod.rs.template");
    fs::write(&template_path, "// {{dirPascal}}::{{namePascal}}").unwrap();

    let renderer = MiniJinjaRenderer::new();
    let ui = FakeInteraction::default();
    let template = entry(&template_path, EntryKind::File);
    let compilation = Compilation::new(
        &renderer,
        &OsFileSystem,
        &ui,
        &template,
        &destination,
        "user-profile",
        false,
    )
    .unwrap();
    compilation.run().unwrap();

    assert_eq!(
        fs::read_to_string(destination.join("user-profile.rs")).unwrap(),
        "// Features::UserProfile"
    );
}

#[test]
fn test_write_failure_is_recorded_and_siblings_continue() {
    let temp_dir = TempDir::new().unwrap();
    let template_dir = temp_dir.path().join("tpl");
    fs::create_dir(&template_dir).unwrap();
    fs::write(template_dir.join("a.txt"), "content a").unwrap();
    fs::write(template_dir.join("b.txt"), "content b").unwrap();
    let destination = temp_dir.path().join("out");
    fs::create_dir(&destination).unwrap();

    let renderer = MiniJinjaRenderer::new();
    let fs_impl = RejectingFs {
        reject: "a.txt".to_string(),
    };
    let ui = FakeInteraction::default();
    let template = entry(&template_dir, EntryKind::Directory);
    let compilation = Compilation::new(
        &renderer,
        &fs_impl,
        &ui,
        &template,
        &destination,
        "ignored",
        false,
    )
    .unwrap();
    let report = compilation.run().unwrap();

    // A failed persist aborts only that entry; the sibling still writes
    // and the failure surfaces through the report, not as an Err.
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, destination.join("a.txt"));
    assert!(matches!(report.failed[0].1, Error::Io(_)));
    assert_eq!(report.written, vec![destination.join("b.txt")]);
    assert!(report.skipped.is_empty());
    assert!(!destination.join("a.txt").exists());
    assert_eq!(fs::read_to_string(destination.join("b.txt")).unwrap(), "content b");
}

#[test]
fn test_declined_directory_overwrite_skips_subtree() {
    let temp_dir = TempDir::new().unwrap();
    let template_dir = temp_dir.path().join("tpl");
    fs::create_dir_all(template_dir.join("sub")).unwrap();
    fs::write(template_dir.join("sub").join("inner.txt"), "inner").unwrap();
    fs::write(template_dir.join("top.txt"), "top").unwrap();
    let destination = temp_dir.path().join("out");
    fs::create_dir_all(destination.join("sub")).unwrap();

    let renderer = MiniJinjaRenderer::new();
    let ui = FakeInteraction {
        overwrite_answer: false,
        ..FakeInteraction::default()
    };
    let template = entry(&template_dir, EntryKind::Directory);
    let compilation = Compilation::new(
        &renderer,
        &OsFileSystem,
        &ui,
        &template,
        &destination,
        "ignored",
        false,
    )
    .unwrap();
    let report = compilation.run().unwrap();

    // Declining the directory skips its whole subtree; the sibling file
    // at the same level still writes.
    assert_eq!(report.skipped, vec![destination.join("sub")]);
    assert!(!destination.join("sub").join("inner.txt").exists());
    assert_eq!(report.written, vec![destination.join("top.txt")]);
    assert!(report.failed.is_empty());
    assert_eq!(*ui.confirmed.borrow(), vec![destination.join("sub")]);
}
