//! Top level subcommands

pub(crate) mod command;
pub(crate) mod descriptor;
pub(crate) mod docs;
