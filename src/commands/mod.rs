pub mod branch;
pub mod config;

// Re-export all command functions
pub use branch::{BranchOutcome, branch_report, cmd_branch};
pub use config::cmd_config;
