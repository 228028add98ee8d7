//! # ferrocase
//!
//! Unicode case mapping and caseless comparison over UTF-8, UTF-16 and
//! UTF-32 code unit sequences, with full (1:n) mappings, locale tailorings
//! (Turkish, Azerbaijani, Lithuanian), Greek final sigma, UAX #29
//! titlecasing, folding comparison, search, collation and LIKE matching.
//!
//! Every unit-level walk goes through the bounds-checked primitives in
//! [`safe`]. With the default `safe-layer` feature an out-of-bounds access
//! aborts the process at the faulting access.
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrocase::prelude::*;
//!
//! assert_eq!(CaseMapper::uppercase().map_str("straße").unwrap(), "STRASSE");
//! assert_eq!(
//!     CaseMapper::lowercase()
//!         .locale(Locale::TURKISH)
//!         .map_str("DİYARBAKIR")
//!         .unwrap(),
//!     "diyarbakır"
//! );
//!
//! let hit = caseless::search("Hello World", "WORLD");
//! assert!(hit.found());
//! assert_eq!((hit.start(), hit.end()), (6, 11));
//! ```
//!
//! ## Other widths
//!
//! The engines are generic over an [`Encoding`](encoding::Encoding)
//! strategy:
//!
//! ```rust
//! use ferrocase::casemap::{map, CaseMode, MapOptions};
//! use ferrocase::encodings::Utf16;
//!
//! let text: Vec<u16> = "ﬃ".encode_utf16().collect();
//! let upper = map::<Utf16>(&text, &MapOptions::new(CaseMode::Uppercase)).unwrap();
//! assert_eq!(String::from_utf16(&upper).unwrap(), "FFI");
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`safe`] | Bounds-checked array and cursors |
//! | [`encoding`], [`encodings`] | Per-width decode/encode strategies |
//! | [`unicode`] | Codepoint properties and mappings |
//! | [`locale`], [`tailoring`] | Language tags and conditional rules |
//! | [`words`] | Word boundaries for titlecasing |
//! | [`casemap`] | Case mapping engine |
//! | [`fold`] | Lazy case-folding cursor |
//! | [`compare`] | Compare, search, LIKE |
//! | [`collate`] | Collation and sort keys |
//! | [`api`] | `&str` helpers and [`CaseMapper`](api::CaseMapper) |

pub mod api;
pub mod casemap;
pub mod collate;
pub mod compare;
pub mod encoding;
pub mod encodings;
pub mod error;
pub mod fold;
pub mod locale;
pub mod prelude;
pub mod safe;
pub mod tailoring;
pub mod unicode;
pub mod words;
