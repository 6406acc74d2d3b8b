//! Command implementations for the brewboard CLI.
//!
//! Each submodule handles a specific command or group of related commands.

pub mod control;
pub mod status;
