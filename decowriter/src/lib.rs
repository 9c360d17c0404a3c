//! A writer that adds a prefix and a suffix to each line.
//!
//! [`DecoWriter`] wraps any [`Write`]r and rewrites every line passing
//! through it. Lines may be split across any number of writes, the
//! decoration happens exactly once per line.
//!
//! ```rust
//! use std::io::Write;
//!
//! use decowriter::DecoWriter;
//!
//! let mut w = DecoWriter::new(Vec::<u8>::new(), "[log] ", "");
//! writeln!(w, "This is a log message").unwrap();
//! writeln!(w, "Another log message").unwrap();
//!
//! assert_eq!(
//!     w.into_inner().0,
//!     b"[log] This is a log message\n[log] Another log message\n"
//! );
//! ```
//!
//! [`Write`]: decowriter_io::Write
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;

mod writer;

pub use self::error::{Segment, WriteError};
pub use self::writer::{DecoWriter, TERMINATOR};

/// Sink abstractions used by [`DecoWriter`].
pub mod io {
	pub use decowriter_io::*;
}
