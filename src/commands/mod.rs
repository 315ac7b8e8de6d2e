//! CLI command implementations.

pub mod ask;
pub mod chat;
pub mod common;
pub mod entry;
pub mod reset;
pub mod transfer;
