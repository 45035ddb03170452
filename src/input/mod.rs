pub mod command;
pub mod handler;

pub use command::Command;
pub use handler::{command_for, key_command};
