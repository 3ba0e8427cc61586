use crate::constants::{BRANCH_TIP, MIGRATION_FILE_EXTENSION};
use crate::git::{GitError, GitQuery};
use crate::migration::parsing::MigrationFile;
use std::path::Path;
use tracing::{debug, info};

/// Glob matching migration modules directly inside `versions_dir`.
///
/// A root or empty directory degrades to `./*.py`, which matches any top-level
/// module in the repository.
pub fn versions_glob(versions_dir: &Path) -> String {
    let dir = versions_dir.to_string_lossy().replace('\\', "/");
    let dir = dir.trim_end_matches('/');
    let dir = if dir.is_empty() { "." } else { dir };

    format!("{}/*.{}", dir, MIGRATION_FILE_EXTENSION)
}

/// Pathspec handed to git; `:(glob)` keeps `*` from crossing `/`
pub fn versions_pathspec(versions_dir: &Path) -> String {
    format!(":(glob){}", versions_glob(versions_dir))
}

/// Find migration files added between the merge-base of `HEAD` and
/// `base_ref`, and `HEAD`, in the order git lists them.
pub async fn discover<G: GitQuery>(
    git: &G,
    repo_root: &Path,
    versions_dir: &Path,
    base_ref: &str,
) -> Result<Vec<MigrationFile>, GitError> {
    let merge_base = git.run(&["merge-base", BRANCH_TIP, base_ref]).await?;
    debug!("Merge-base of {} and {}: {}", BRANCH_TIP, base_ref, merge_base);

    let range = format!("{}..{}", merge_base, BRANCH_TIP);
    let pathspec = versions_pathspec(versions_dir);
    let added = git
        .run(&[
            "diff",
            "--name-only",
            "--diff-filter=A",
            &range,
            "--",
            &pathspec,
        ])
        .await?;

    let migrations: Vec<MigrationFile> = added
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| MigrationFile::new(repo_root.join(line)))
        .collect();

    info!(
        "Found {} new migration(s) since {}",
        migrations.len(),
        merge_base
    );

    Ok(migrations)
}
