//! CLI error handling tests
//!
//! What the user sees when git, the config file or the arguments are wrong.

use crate::helpers::cli::command_in;
use crate::helpers::repo::{migration_source, with_test_repo};
use anyhow::Result;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_unknown_base_reference_exits_with_git_error() -> Result<()> {
    with_test_repo(|repo| {
        repo.checkout_new_branch("feature")?;
        repo.write_migration("0001_init.py", &migration_source("Initial schema", "0001", None))?;
        repo.commit_all("Add migration")?;

        repo.command()
            .args(["branch", "--git", "git", "--base", "origin/does-not-exist"])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Git command failed:"));

        Ok(())
    })
}

#[test]
fn test_outside_repository_exits_with_git_error() -> Result<()> {
    with_test_repo(|_| {
        let dir = TempDir::new()?;

        command_in(dir.path())
            .args(["branch", "--git", "git", "--base", "main"])
            .env("GIT_CEILING_DIRECTORIES", dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Git command failed:"));

        Ok(())
    })
}

#[test]
fn test_missing_git_executable_exits_with_git_error() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("bin/git");

    command_in(dir.path())
        .args(["branch", "--git"])
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Git command failed:"))
        .stderr(predicate::str::contains("bin/git"));

    Ok(())
}

#[test]
fn test_invalid_config_yaml_error() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("alembic-versions.yaml"),
        "invalid: yaml: content: [unbalanced",
    )?;

    command_in(dir.path())
        .args(["branch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));

    Ok(())
}

#[test]
fn test_unknown_format_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;

    command_in(dir.path())
        .args(["branch", "--format", "csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));

    Ok(())
}

#[test]
fn test_missing_subcommand_shows_usage() -> Result<()> {
    let dir = TempDir::new()?;

    command_in(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    Ok(())
}
