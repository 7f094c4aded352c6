//! User interaction handling.
//! The engine and workflow call through the [`Interaction`] trait; the CLI
//! wires in a dialoguer-backed implementation and tests inject fakes.

use crate::template::TemplateEntry;
use dialoguer::{Confirm, Input, Select};
use std::path::Path;

/// User-facing decisions consumed by the workflow and the engine.
pub trait Interaction {
    /// Lets the user pick one of the discovered templates.
    /// Returns the index of the chosen entry, or `None` when cancelled.
    fn pick_template(&self, entries: &[TemplateEntry]) -> Option<usize>;

    /// Prompts for the target name. Returns `None` when cancelled or left
    /// empty.
    fn prompt_name(&self) -> Option<String>;

    /// Asks whether an existing output location may be overwritten.
    fn confirm_overwrite(&self, path: &Path) -> bool;

    /// Presents a freshly written file to the user. Best-effort; failures
    /// are swallowed.
    fn present_file(&self, path: &Path);

    /// Reports a user-visible error message.
    fn report_error(&self, message: &str);
}

/// [`Interaction`] backed by dialoguer prompts on the terminal.
pub struct DialoguerInteraction;

impl Interaction for DialoguerInteraction {
    fn pick_template(&self, entries: &[TemplateEntry]) -> Option<usize> {
        let items: Vec<String> = entries
            .iter()
            .map(|entry| {
                if entry.template_description.is_empty() {
                    entry.template_name.clone()
                } else {
                    format!("{} ({})", entry.template_name, entry.template_description)
                }
            })
            .collect();

        Select::new()
            .with_prompt("Pick a template")
            .items(&items)
            .default(0)
            .interact_opt()
            .ok()
            .flatten()
    }

    fn prompt_name(&self) -> Option<String> {
        let input: String = Input::new()
            .with_prompt("Name")
            .allow_empty(true)
            .interact_text()
            .ok()?;
        if input.is_empty() {
            None
        } else {
            Some(input)
        }
    }

    fn confirm_overwrite(&self, path: &Path) -> bool {
        Confirm::new()
            .with_prompt(format!("'{}' already exists, overwrite?", path.display()))
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn present_file(&self, path: &Path) {
        // No editor to open from a terminal; announcing the path stands in.
        println!("Created: '{}'", path.display());
    }

    fn report_error(&self, message: &str) {
        eprintln!("{message}");
    }
}
