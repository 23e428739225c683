mod command_result;
pub mod generate;
pub mod helper;
pub mod verify;

pub use command_result::*;
