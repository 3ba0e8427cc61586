use crate::migration::docstring::module_docstring;
use crate::migration::parsing::MigrationFile;
use serde::Serialize;
use tracing::debug;

/// One line of the branch report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationReportRow {
    pub revision: String,
    pub message: String,
}

impl MigrationReportRow {
    pub fn new(revision: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            revision: revision.into(),
            message: message.into(),
        }
    }
}

/// Derive the revision and message for a migration file. Never fails: any
/// problem reading or scanning the module falls back to the filename.
pub fn resolve(file: &MigrationFile) -> MigrationReportRow {
    MigrationReportRow {
        revision: file.revision(),
        message: migration_message(file),
    }
}

/// Human-readable message from the module docstring's first non-blank line
pub fn migration_message(file: &MigrationFile) -> String {
    let source = match std::fs::read_to_string(file.path()) {
        Ok(source) => source,
        Err(e) => {
            debug!("Could not read {}: {}", file.path().display(), e);
            return file.fallback_message();
        }
    };

    match module_docstring(&source, &file.path().to_string_lossy()) {
        Ok(Some(docstring)) => first_docstring_line(&docstring).unwrap_or_else(|| {
            debug!("Blank docstring in {}", file.path().display());
            file.fallback_message()
        }),
        Ok(None) => {
            debug!("No docstring in {}", file.path().display());
            file.fallback_message()
        }
        Err(e) => {
            debug!("Could not parse {}: {}", file.path().display(), e);
            file.fallback_message()
        }
    }
}

/// First non-blank line of a docstring, trimmed, with tabs expanded to
/// 8-column stops
pub fn first_docstring_line(docstring: &str) -> Option<String> {
    docstring
        .split(is_line_boundary)
        .map(|line| expand_tabs(line).trim().to_string())
        .find(|line| !line.is_empty())
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn expand_tabs(line: &str) -> String {
    const TAB_SIZE: usize = 8;

    let mut expanded = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let spaces = TAB_SIZE - column % TAB_SIZE;
            expanded.extend(std::iter::repeat_n(' ', spaces));
            column += spaces;
        } else {
            expanded.push(c);
            column += 1;
        }
    }
    expanded
}
