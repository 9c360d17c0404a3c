//! Abstractions over byte sinks that may or may not support flushing.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
mod impls;
mod write;

pub use self::error::{Partial, WriteError};
pub use self::impls::*;
pub use self::write::{IntoWriter, Write, WriteExt, Writer};

/// Common trait imports.
pub mod prelude {
	pub use super::{IntoWriter, Write, WriteExt, Writer};
}
