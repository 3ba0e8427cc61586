pub mod description;
pub mod discovery;
pub mod docstring;
pub mod parsing;

pub use description::{MigrationReportRow, migration_message, resolve};
pub use discovery::{discover, versions_glob, versions_pathspec};
pub use docstring::{ParseError, module_docstring};
pub use parsing::MigrationFile;
