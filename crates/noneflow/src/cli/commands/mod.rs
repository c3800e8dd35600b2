//! CLI commands

mod init;
mod validate;

pub use init::InitCommand;
pub use validate::ValidateCommand;
