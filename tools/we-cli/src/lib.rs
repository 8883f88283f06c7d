//! `we`: record consumption readings on the ledger and read them back.

pub mod cli;
pub mod commands;
pub mod keys;
pub mod logging;
