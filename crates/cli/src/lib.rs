//! Command-line front end: argument parsing, command execution, and the
//! demonstration routine.

pub mod cli;
pub mod commands;
pub mod demo;

pub use cli::{Cli, Command};
