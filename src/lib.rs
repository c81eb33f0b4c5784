//! # shelfmark
//!
//! Library of Congress call numbers: parsing, shelf ordering and rendering.
//!
//! A call number such as `PR192.4.B3.N4` is parsed into a [`CallNumber`]
//! (class letters `PR`, class number `192`, fraction `4`, cutters `B3` and
//! `N4`). Collections of call numbers are put into shelf order with
//! [`compare`] (or [`sort_shelf`]), and rendered back to text with
//! [`render`] in either [`DisplayMode::Separated`] or [`DisplayMode::Compact`].
//!
//! ```rust,ignore
//! use shelfmark::{parse, sort_shelf, render, DisplayMode};
//!
//! let mut shelf: Vec<_> = ["H432.2.P29", "H432.P29", "H432.15.P29"]
//!     .iter()
//!     .map(|text| parse(text))
//!     .collect::<Result<_, _>>()?;
//! sort_shelf(&mut shelf);
//! assert_eq!(render(&shelf[0], DisplayMode::Separated), "H432.P29");
//! ```
//!
//! ## Equality vs. ordering
//!
//! Two call numbers are `==` only when their original text is identical.
//! Shelf ordering is semantic, so `A4.B2` and `A4.B20` are tied on the shelf
//! while remaining unequal. For ordered collections use [`ShelfKey`].

pub mod lcc;

pub use lcc::call_number::{CallNumber, CallNumberBuilder, Cutter, CLASS_START_LETTERS};
pub use lcc::formats::{render, DisplayMode, FormatError, FormatRegistry, ListFormatter};
pub use lcc::ordering::{compare, shelf_positions, sort_shelf, ShelfKey};
pub use lcc::parsing::{parse, ParseError};
