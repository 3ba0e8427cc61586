pub mod error;
#[cfg(test)]
pub(crate) mod testing;

pub use error::GitError;

use std::future::Future;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// Read-only query against the repository history
pub trait GitQuery {
    /// Run git with `args`, returning its trimmed standard output
    fn run(&self, args: &[&str]) -> impl Future<Output = Result<String, GitError>> + Send;
}

/// Runs the git executable as a subprocess (no shell) inside a working directory
#[derive(Debug, Clone)]
pub struct GitCommand {
    executable: PathBuf,
    work_dir: PathBuf,
}

impl GitCommand {
    pub fn new(executable: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            work_dir: work_dir.into(),
        }
    }
}

impl GitQuery for GitCommand {
    async fn run(&self, args: &[&str]) -> Result<String, GitError> {
        debug!(
            "Running {} {} in {}",
            self.executable.display(),
            args.join(" "),
            self.work_dir.display()
        );

        let output = Command::new(&self.executable)
            .args(args)
            .current_dir(&self.work_dir)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| GitError::Spawn {
                executable: self.executable.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("git exited with {}: {}", output.status, stderr.trim());
            Err(GitError::command_failed(args, output.status.code(), &stderr))
        }
    }
}
