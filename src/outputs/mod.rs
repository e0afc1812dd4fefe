//! Console rendering of search results.
//!
//! # Submodules
//!
//! - [`summary`]: Result header and the bordered per-article block
//!
//! Everything here writes to a caller-supplied [`std::io::Write`], so the same
//! code prints to stdout in the binary and to a buffer in tests.

pub mod summary;
