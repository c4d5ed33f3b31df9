//! Core definitions shared by all tview-* crates: the error type and the result alias.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
