//! Main module for call number functionality

pub mod call_number;
pub mod formats;
pub mod lexing;
pub mod ordering;
pub mod parsing;
