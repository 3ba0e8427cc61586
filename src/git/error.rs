use std::path::PathBuf;
use thiserror::Error;

/// Failure of a git query. Never retried: a bad reference or a missing
/// repository fails the same way every time.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to execute {}: {source}", executable.display())]
    Spawn {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    CommandFailed {
        args: Vec<String>,
        status: Option<i32>,
        message: String,
    },
}

impl GitError {
    /// Build a `CommandFailed` from the captured stderr, falling back to a
    /// generic description when git printed nothing.
    pub fn command_failed(args: &[&str], status: Option<i32>, stderr: &str) -> Self {
        let stderr = stderr.trim();
        let message = if stderr.is_empty() {
            match status {
                Some(code) => format!("`git {}` exited with status {}", args.join(" "), code),
                None => format!("`git {}` was terminated by a signal", args.join(" ")),
            }
        } else {
            stderr.to_string()
        };

        GitError::CommandFailed {
            args: args.iter().map(|arg| arg.to_string()).collect(),
            status,
            message,
        }
    }
}
