//! Rendering call numbers back to text
//!
//! A single call number renders in one of two [`DisplayMode`]s:
//!
//! - `Separated`: every part after the class number gets its own period
//!   (`PR192.4.B3.N4`). Lossless; this is the form the parser reads.
//! - `Compact`: how spine labels are often printed. When a class fraction is
//!   present its period stays and all later periods go (`PR192.4B3N4`);
//!   otherwise every period goes (`A4.B9.C2` becomes `A4B9C2`). Compact text
//!   does not round-trip through the parser.
//!
//! Lists of call numbers are serialized through the [`FormatRegistry`]
//! (`text`, `json`, `yaml`).

pub mod list;
pub mod registry;

pub use list::{JsonFormatter, TextFormatter, YamlFormatter};
pub use registry::{FormatError, FormatRegistry, ListFormatter};

use crate::lcc::call_number::CallNumber;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a call number is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    #[default]
    Separated,
    Compact,
}

impl DisplayMode {
    pub fn name(&self) -> &'static str {
        match self {
            DisplayMode::Separated => "separated",
            DisplayMode::Compact => "compact",
        }
    }

    pub fn all() -> [DisplayMode; 2] {
        [DisplayMode::Separated, DisplayMode::Compact]
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayMode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "separated" => Ok(DisplayMode::Separated),
            "compact" => Ok(DisplayMode::Compact),
            other => Err(FormatError::UnknownDisplayMode(other.to_string())),
        }
    }
}

/// Render a call number in the given mode.
pub fn render(value: &CallNumber, mode: DisplayMode) -> String {
    let separated = render_separated(value);
    match mode {
        DisplayMode::Separated => separated,
        DisplayMode::Compact => compact(&separated),
    }
}

fn render_separated(value: &CallNumber) -> String {
    let mut out = format!("{}{}", value.class_letters(), value.class_number());
    if let Some(fraction) = value.class_fraction() {
        out.push('.');
        out.push_str(fraction);
    }
    for cutter in value.cutters() {
        out.push('.');
        out.push_str(&cutter.to_string());
    }
    out
}

/// Strip periods from a separated rendering.
///
/// The first period survives only when it introduces a class fraction.
fn compact(separated: &str) -> String {
    let Some(first) = separated.find('.') else {
        return separated.to_string();
    };
    let (head, tail) = separated.split_at(first + 1);

    if tail.starts_with(|c: char| c.is_ascii_digit()) {
        let mut out = head.to_string();
        out.extend(tail.chars().filter(|&c| c != '.'));
        out
    } else {
        separated.replace('.', "")
    }
}
