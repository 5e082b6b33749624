//! `prj goto`: print shell commands that change into a project directory.
//!
//! The output is meant to be evaluated by the calling shell, e.g.
//! `eval "$(prj goto web)"`.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::registry::Registry;

/// Print `cd <path>;` for `name`, plus an editor launch line when `editor` is given.
pub fn run<W: Write>(
    registry: &Registry,
    name: &str,
    editor: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let path = registry.lookup_project_path(name)?;
    writeln!(out, "cd {};", shell_quote_path(path))?;

    if let Some(editor) = editor {
        writeln!(out, "{}", editor_line(editor, registry.editor_in_background()))?;
    }

    Ok(())
}

/// `<editor> .;`, or `<editor> . &` to leave the shell usable.
///
/// `&` already terminates the command, so it is never followed by `;`.
pub fn editor_line(editor: &str, in_background: bool) -> String {
    if in_background {
        format!("{} . &", editor)
    } else {
        format!("{} .;", editor)
    }
}

fn shell_quote_path(path: &Path) -> String {
    let text = path.display().to_string();
    let plain = text
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "/._-+,:@%".contains(c));

    if plain && !text.is_empty() {
        text
    } else {
        format!("'{}'", text.replace('\'', r"'\''"))
    }
}
