//! Test utilities and helpers for the tview crates.
//!
//! This crate provides:
//! - Sequences covering every traversal strength the std implementations do not:
//!   a forward-only list, a bidirectional list and a single-pass stream
//! - A slice prefix whose end marker is not a cursor but supports distance
//! - Function objects that count their invocations or refuse assignment
//! - Data generation and sample-file helpers
//!
//! # Usage
//!
//! This crate is intended for use within the tview test suites.

pub mod arena_list;
pub mod data_gen;
pub mod dirs;
pub mod fn_objects;
pub mod forward_list;
pub mod prefix;
pub mod stream;

pub use arena_list::ArenaList;
pub use fn_objects::{CallCounter, Counted, Shift};
pub use forward_list::ForwardList;
pub use prefix::{Prefix, PrefixEnd};
pub use stream::StreamSequence;
