//! Ports of the transaction processor.

pub mod handler;
