use core::fmt;

/// A trait that describes an error returned by [`Write`].
///
/// [`Write`]: trait@crate::Write
pub trait WriteError {
	/// Create a new error for a sink that accepted 0 bytes.
	fn write_zero() -> Self;
}

/// An error that happened after a sink had already accepted some bytes.
///
/// Bytes accepted by a sink cannot be taken back, so every multi-step write
/// reports how far it got before `error` occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partial<E> {
	/// Number of bytes the sink accepted before failing.
	pub accepted: usize,
	/// The error reported by the sink.
	pub error: E,
}

impl<E> Partial<E> {
	/// Create a new [`Partial`].
	pub const fn new(accepted: usize, error: E) -> Self {
		Self { accepted, error }
	}

	/// Get back the sink error, discarding the accepted count.
	pub fn into_inner(self) -> E {
		self.error
	}
}

impl<E: fmt::Display> fmt::Display for Partial<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} (after {} bytes)", self.error, self.accepted)
	}
}

#[cfg(feature = "std")]
impl<E> std::error::Error for Partial<E>
where
	E: std::error::Error + 'static,
{
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.error)
	}
}
