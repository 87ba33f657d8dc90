//! Command implementations

pub mod bom;
pub mod completions;
pub mod config;
pub mod cost;
pub mod decision;
pub mod init;
pub mod marker;
pub mod op;
pub mod overhead;
pub mod pack;
pub mod quote;
pub mod status;
pub mod style;
