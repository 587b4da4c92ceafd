//! Core domain types and logic.

pub mod trade_record;
pub mod store;
pub mod form;
pub mod overview;
pub mod record_list;
pub mod format;
pub mod command;
pub mod settings;
pub mod config_validation;
pub mod error;
