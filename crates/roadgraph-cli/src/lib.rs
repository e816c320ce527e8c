//! Road map routing CLI library.
//!
//! This crate provides the command handlers and output formatting behind the
//! `roadgraph-cli` binary.

pub mod commands;
pub mod output;
