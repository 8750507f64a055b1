pub mod commands;
pub mod output;
pub mod replay;
