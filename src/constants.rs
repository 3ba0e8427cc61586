// Configuration file name
pub const CONFIG_FILENAME: &str = "alembic-versions.yaml";

// Environment variables consulted when neither the CLI nor the config file set a value
pub const GIT_ENV_VAR: &str = "AV_GIT";
pub const VERSIONS_ENV_VAR: &str = "AV_VERSIONS";
pub const COMMIT_BASE_ENV_VAR: &str = "AV_COMMIT_BASE";

// Migration file naming conventions: <revision>_<slug>.py
pub const MIGRATION_FILE_EXTENSION: &str = "py";
pub const REVISION_SEPARATOR: char = '_';

// Git revision the merge-base is computed from
pub const BRANCH_TIP: &str = "HEAD";
