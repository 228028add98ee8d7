// encodings/mod.rs - Encoding registry
// One module per Unicode transformation format.

pub mod utf16;
pub mod utf32;
pub mod utf8;

pub use utf16::Utf16;
pub use utf32::Utf32;
pub use utf8::Utf8;
