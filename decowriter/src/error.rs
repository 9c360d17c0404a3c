//! Error types returned by [`DecoWriter`].
//!
//! [`DecoWriter`]: crate::DecoWriter

use core::fmt;

/// The part of the output that was being written when the sink failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
	/// The prefix emitted at the start of a line.
	Prefix,
	/// Bytes of the line taken from the caller's input.
	Payload,
	/// The suffix together with the line terminator.
	Suffix,
	/// The flush issued after a successful write.
	Flush,
}

impl fmt::Display for Segment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Prefix => "prefix",
			Self::Payload => "payload",
			Self::Suffix => "suffix",
			Self::Flush => "flush",
		})
	}
}

/// The error returned by [`DecoWriter::write()`].
///
/// Besides the sink error, it records how many bytes of the caller's input
/// had been consumed when the error occurred. Decoration bytes are never
/// part of that count.
///
/// When the sink fails on [`Segment::Suffix`], the line payload has already
/// been written without its suffix. The line terminator is still counted as
/// consumed.
///
/// [`DecoWriter::write()`]: crate::DecoWriter::write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteError<E> {
	consumed: usize,
	segment: Segment,
	source: E,
}

impl<E> WriteError<E> {
	pub(crate) const fn new(
		consumed: usize,
		segment: Segment,
		source: E,
	) -> Self {
		Self { consumed, segment, source }
	}

	/// Number of input bytes consumed before the error.
	#[must_use]
	pub fn consumed(&self) -> usize {
		self.consumed
	}

	/// The segment that the sink was writing when it failed.
	#[must_use]
	pub fn segment(&self) -> Segment {
		self.segment
	}

	/// Get a reference to the sink error.
	pub fn error(&self) -> &E {
		&self.source
	}

	/// Get back the sink error.
	pub fn into_inner(self) -> E {
		self.source
	}

	/// Convert the error into the result of a short write.
	///
	/// Writer traits only return an error when nothing was written, so once
	/// some input was consumed the error becomes `Ok(consumed)`. The sink is
	/// expected to fail again on the next write. A failed flush always stays
	/// an error.
	pub fn into_short_write(self) -> Result<usize, E> {
		match self.segment {
			Segment::Flush => Err(self.source),
			_ if self.consumed > 0 => {
				log::trace!("{} failed, reporting a short write", self.segment);
				Ok(self.consumed)
			},
			_ => Err(self.source),
		}
	}
}

impl<E: fmt::Display> fmt::Display for WriteError<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"failed to write {} after consuming {} bytes: {}",
			self.segment, self.consumed, self.source
		)
	}
}

#[cfg(feature = "std")]
impl<E> std::error::Error for WriteError<E>
where
	E: std::error::Error + 'static,
{
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.source)
	}
}

#[cfg(feature = "std")]
impl From<WriteError<std::io::Error>> for std::io::Error {
	fn from(value: WriteError<std::io::Error>) -> Self {
		value.source
	}
}
