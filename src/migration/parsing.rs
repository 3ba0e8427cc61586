use crate::constants::REVISION_SEPARATOR;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A migration module named `<revision>_<slug>.py`.
///
/// The first separator is authoritative: a revision that itself contains `_`
/// is split at its first underscore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    pub path: PathBuf,
}

impl MigrationFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directory or extension
    pub fn stem(&self) -> Cow<'_, str> {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy())
            .unwrap_or_default()
    }

    pub fn revision(&self) -> String {
        split_stem(&self.stem()).0.to_string()
    }

    pub fn slug(&self) -> Option<String> {
        split_stem(&self.stem()).1.map(str::to_string)
    }

    /// Message used when the module docstring can't provide one: the slug with
    /// separators turned into spaces, or the whole stem when that is empty.
    pub fn fallback_message(&self) -> String {
        let message = self
            .slug()
            .map(|slug| slug.replace(REVISION_SEPARATOR, " ").trim().to_string())
            .unwrap_or_default();

        if message.is_empty() {
            self.stem().into_owned()
        } else {
            message
        }
    }
}

fn split_stem(stem: &str) -> (&str, Option<&str>) {
    match stem.split_once(REVISION_SEPARATOR) {
        Some((revision, slug)) => (revision, Some(slug)),
        None => (stem, None),
    }
}
