pub mod extract;
pub mod init;
pub mod langs;
pub mod materialize;
pub mod merge;
pub mod sheet;
mod command_result;

pub use command_result::*;
