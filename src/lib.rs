//! Report the Alembic migrations added on the current git branch.
//!
//! Discovery asks git for the merge-base of `HEAD` and a base reference, then
//! for the migration modules added since. Each module's revision comes from
//! its filename and its message from the module docstring, with the filename
//! slug as a fallback.

pub mod commands;
pub mod config;
pub mod constants;
pub mod git;
pub mod migration;
pub mod report;
