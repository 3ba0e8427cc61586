use crate::config::Config;
use crate::git::{GitCommand, GitError, GitQuery};
use crate::migration::discover;
use crate::report::{MigrationReport, ReportFormat, build_report, format_report};
use anyhow::Result;
use console::style;
use std::path::Path;
use tracing::info;

/// How a `branch` run ended; mapped to the process exit status by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOutcome {
    /// A table (or JSON) with this many migrations was printed
    Reported(usize),
    /// No migration was added on this branch
    NoMigrations,
    /// A git query failed; the error line was printed
    GitFailed,
}

/// Discover migrations added on this branch and resolve their descriptions.
/// Nothing is resolved unless discovery fully succeeds.
pub async fn branch_report<G: GitQuery>(
    git: &G,
    config: &Config,
    repo_root: &Path,
) -> Result<MigrationReport, GitError> {
    let files = discover(
        git,
        repo_root,
        &config.directories.versions,
        &config.git.commit_base,
    )
    .await?;

    Ok(build_report(&files))
}

/// Find new alembic migrations added in the current branch
pub async fn cmd_branch(
    config: &Config,
    repo_root: &Path,
    format: ReportFormat,
) -> Result<BranchOutcome> {
    info!(
        "Comparing {} against {}",
        config.directories.versions.display(),
        config.git.commit_base
    );

    let git = GitCommand::new(&config.git.executable, repo_root);
    let report = match branch_report(&git, config, repo_root).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", style("Git command failed:").red(), e);
            return Ok(BranchOutcome::GitFailed);
        }
    };

    println!("{}", format_report(&report, format)?);

    Ok(match report {
        MigrationReport::Empty => BranchOutcome::NoMigrations,
        MigrationReport::Rows(rows) => BranchOutcome::Reported(rows.len()),
    })
}
