use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A throwaway git repository with a `main` branch and one initial commit
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestRepo {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp directory")?;
        let root = temp_dir.path().to_path_buf();
        let repo = Self { temp_dir, root };

        repo.git(&["init", "-q"])?;
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"])?;
        repo.write_file("README.md", "# test project\n")?;
        repo.commit_all("Initial commit")?;

        Ok(repo)
    }

    /// Run git inside the repository with a fixed identity
    pub fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args([
                "-c",
                "user.name=Test User",
                "-c",
                "user.email=test@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(&self.root)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .output()
            .with_context(|| format!("Failed to run git {}", args.join(" ")))?;

        if !output.status.success() {
            bail!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    pub fn write_file(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content).context("Failed to write file")
    }

    /// Write a migration module under `alembic/versions/`
    pub fn write_migration(&self, filename: &str, content: &str) -> Result<()> {
        self.write_file(&format!("alembic/versions/{}", filename), content)
    }

    pub fn commit_all(&self, message: &str) -> Result<()> {
        self.git(&["add", "-A"])?;
        self.git(&["commit", "-q", "-m", message])?;
        Ok(())
    }

    pub fn checkout_new_branch(&self, name: &str) -> Result<()> {
        self.git(&["checkout", "-q", "-b", name])?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}

/// Alembic-style module with a docstring
pub fn migration_source(message: &str, revision: &str, down_revision: Option<&str>) -> String {
    let down = down_revision
        .map(|r| format!("'{}'", r))
        .unwrap_or_else(|| "None".to_string());

    format!(
        r#""""{message}

Revision ID: {revision}
Revises: {revises}
Create Date: 2024-03-01 12:00:00.000000

"""
from alembic import op
import sqlalchemy as sa


# revision identifiers, used by Alembic.
revision = '{revision}'
down_revision = {down}
branch_labels = None
depends_on = None


def upgrade() -> None:
    pass


def downgrade() -> None:
    pass
"#,
        message = message,
        revision = revision,
        revises = down_revision.unwrap_or(""),
        down = down,
    )
}

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// Run a test against a fresh repository; skipped when git isn't installed
pub fn with_test_repo<F>(test_fn: F) -> Result<()>
where
    F: FnOnce(&TestRepo) -> Result<()>,
{
    if !git_available() {
        eprintln!("git not available, skipping");
        return Ok(());
    }

    let repo = TestRepo::new()?;
    test_fn(&repo)
}
