// prelude.rs - Convenient re-exports for the idiomatic API.
//
//! # Prelude
//!
//! ```
//! use ferrocase::prelude::*;
//!
//! assert_eq!(CaseMapper::uppercase().map_str("straße").unwrap(), "STRASSE");
//! assert!(caseless::eq("HELLO", "hello"));
//! assert_eq!(caseless::search("Hello World", "WORLD").range(), Some(6..11));
//! ```

pub use crate::api::{caseless, casesens, CaseMapper, Match};
pub use crate::casemap::CaseMode;
pub use crate::compare::SearchResult;
pub use crate::error::CaseError;
pub use crate::locale::{Language, Locale};
pub use crate::words::{WordBreaks, WordStarts};
