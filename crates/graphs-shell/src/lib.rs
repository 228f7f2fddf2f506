//! Text front end for the graph engine
//!
//! Stands where a GUI would: turns user-facing node ids into handles and
//! dispatches edits, undo and queries as line commands.

pub mod command;
pub mod error;
pub mod session;


pub use command::{Command, HELP};
pub use error::ShellError;
pub use session::{OutputFormat, Session};
