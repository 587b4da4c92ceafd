//! gaintracker: in-memory stock trade capital gains tracker.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`]. [`session`] drives the
//! interactive page and [`cli`] the command line.

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
pub mod session;
