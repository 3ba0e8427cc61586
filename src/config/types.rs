use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigInput {
    pub git: Option<GitInput>,
    pub directories: Option<DirectoriesInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    pub git: Git,
    pub directories: Directories,
}

// Git configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GitInput {
    pub executable: Option<PathBuf>,
    pub commit_base: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Git {
    pub executable: PathBuf,
    pub commit_base: String,
}

// Directory configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DirectoriesInput {
    pub versions: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Directories {
    pub versions: PathBuf,
}

// CLI argument groups for command-specific options
#[derive(Debug, Clone, Default, Args)]
pub struct GitArgs {
    #[arg(short = 'g', long = "git", value_name = "PATH", help = "Path to git executable")]
    pub git: Option<PathBuf>,

    #[arg(
        short = 'b',
        long = "base",
        value_name = "COMMIT",
        help = "Base commit to compare against"
    )]
    pub base: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct DirectoryArgs {
    #[arg(
        short = 'v',
        long = "versions",
        value_name = "PATH",
        help = "Path to alembic versions directory"
    )]
    pub versions: Option<PathBuf>,
}

// Conversion functions from CLI args to config input
impl From<GitArgs> for GitInput {
    fn from(args: GitArgs) -> Self {
        Self {
            executable: args.git,
            commit_base: args.base,
        }
    }
}

impl From<DirectoryArgs> for DirectoriesInput {
    fn from(args: DirectoryArgs) -> Self {
        Self {
            versions: args.versions,
        }
    }
}
