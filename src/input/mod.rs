//! Console input: validated integers from a line source.

pub mod reader;

pub use reader::{parse_non_negative, InputReader, Rejection, RETRY_EOF_FALLBACK};
