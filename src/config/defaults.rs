use crate::config::types::*;
use std::path::PathBuf;

// Config derives Default from its sections

impl Default for Git {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("/usr/bin/git"),
            commit_base: "origin/main".to_string(),
        }
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self {
            versions: PathBuf::from("./alembic/versions/"),
        }
    }
}
