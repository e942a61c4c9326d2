//! Core domain + application logic for the LeetCode problem bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the LeetCode
//! dataset endpoint live behind ports (traits) implemented in adapter crates.

pub mod catalog;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod ports;
pub mod qotd;
pub mod response;
pub mod selector;

pub use errors::{Error, Result};
