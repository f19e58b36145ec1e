//! CLI commands

pub mod link;
