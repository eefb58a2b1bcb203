//! Bidirectional reordering built on `unicode-bidi`.
//!
//! The pipeline only talks to [`BidiEngine`]; [`UnicodeBidiEngine`] is the
//! production implementation.

pub mod levels;
pub mod mirror;
pub mod reorder;

pub use levels::ParagraphDirection;
pub use mirror::mirrored_bracket;
pub use reorder::{BidiEngine, Reordered, UnicodeBidiEngine};
