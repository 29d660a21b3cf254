//! Input records.
//!
//! The engine only reads a subject and a body from whatever record it is
//! given; [`TextFields`] is that seam. [`EmailRecord`] is the concrete record
//! shape used by the command line and the JSON Lines reader.

pub mod email;
pub mod jsonl;

pub use email::{EmailRecord, TextFields};
pub use jsonl::JsonlRecordReader;
