//! The [`DecoWriter`] type.

use alloc::vec::Vec;

use decowriter_io::{IntoWriter, Partial, Write, WriteExt};

use crate::error::{Segment, WriteError};

/// The byte that ends a line.
pub const TERMINATOR: u8 = b'\n';

/// A writer that adds a prefix and a suffix to each line.
///
/// A line is a sequence of zero or more non-`'\n'` bytes followed by a
/// `'\n'`. The prefix is written before the first byte of a line and the
/// suffix just before its trailing `'\n'`. Bytes without a trailing `'\n'`
/// do not form a line yet, so they get a prefix but no suffix. This allows
/// a single line to be split across many [`write()`] calls.
///
/// The writer does no buffering of its own. Each segment goes straight to
/// the sink, so pass an already buffered sink if that matters.
///
/// # Example
///
/// ```rust
/// use decowriter::DecoWriter;
///
/// // `Vec<u8>` is a `std::io::Write`r, so it gets wrapped in `Std`.
/// let mut w = DecoWriter::new(Vec::<u8>::new(), ">>", "<<");
///
/// w.write(b"hello").unwrap();
/// w.write(b" world\n").unwrap();
/// w.write(b"hello\n").unwrap();
/// w.write(b"world").unwrap();
///
/// assert_eq!(w.get().0, b">>hello world<<\n>>hello<<\n>>world");
/// assert_eq!(w.written(), 33);
/// ```
///
/// [`write()`]: DecoWriter::write
#[derive(Debug, Clone)]
pub struct DecoWriter<W> {
	writer: W,
	prefix: Vec<u8>,
	/// The suffix followed by [`TERMINATOR`].
	suffix: Vec<u8>,
	line_start: bool,
	written: u64,
}

impl<W> DecoWriter<W>
where
	W: Write,
{
	/// Create a new [`DecoWriter`] that writes to `writer`.
	///
	/// `writer` can be any [`Write`]r or anything that converts into one,
	/// like a [`std::io::Write`]r.
	///
	/// `prefix` and `suffix` are copied. Both may be empty.
	///
	/// Whether the writer is flushed depends on its [`Write::flush_once()`].
	/// Writers that do not support flushing keep the default, which does
	/// nothing.
	///
	/// [`std::io::Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
	pub fn new(
		writer: impl IntoWriter<W>,
		prefix: impl AsRef<[u8]>,
		suffix: impl AsRef<[u8]>,
	) -> Self {
		let writer = writer.into_writer();
		let prefix = prefix.as_ref().to_vec();

		let suffix = suffix.as_ref();
		let mut terminated = Vec::with_capacity(suffix.len() + 1);
		terminated.extend_from_slice(suffix);
		terminated.push(TERMINATOR);

		Self {
			writer,
			prefix,
			suffix: terminated,
			line_start: true,
			written: 0,
		}
	}

	/// Write `buf` to the underlying writer, decorating every line.
	///
	/// Returns the number of bytes from `buf` that were processed. Added
	/// prefixes and suffixes are not part of it, so it is never more than
	/// `buf.len()`.
	///
	/// An empty `buf` is a no-op: nothing is written, nothing is flushed
	/// and `Ok(0)` is returned.
	///
	/// Processing stops at the first error of the underlying writer. The
	/// returned [`WriteError`] tells how many bytes of `buf` were consumed
	/// up to that point. No retry is attempted.
	///
	/// If `buf` was processed fully, the underlying writer is flushed once
	/// and the error of the flush, if any, is returned.
	pub fn write(
		&mut self,
		buf: &[u8],
	) -> Result<usize, WriteError<W::Error>> {
		if buf.is_empty() {
			return Ok(0);
		}

		let n = self.decorate(buf)?;

		match self.flush() {
			Ok(()) => {
				log::trace!("flushed after consuming {n} bytes");
				Ok(n)
			},
			Err(e) => {
				log::trace!("flush failed after consuming {n} bytes");
				Err(WriteError::new(n, Segment::Flush, e))
			},
		}
	}

	fn decorate(
		&mut self,
		mut buf: &[u8],
	) -> Result<usize, WriteError<W::Error>> {
		let Self { writer, prefix, suffix, line_start, written } = self;

		let mut n = 0;

		while !buf.is_empty() {
			if *line_start {
				emit(writer, written, prefix)
					.map_err(|e| fail(n, Segment::Prefix, e))?;
				*line_start = false;
			}

			let Some(i) = buf.iter().position(|&b| b == TERMINATOR)
			else {
				match emit(writer, written, buf) {
					Ok(nn) => return Ok(n + nn),
					Err(e) => {
						return Err(fail(n + e.accepted, Segment::Payload, e))
					},
				}
			};

			match emit(writer, written, &buf[..i]) {
				Ok(nn) => n += nn,
				Err(e) => {
					return Err(fail(n + e.accepted, Segment::Payload, e))
				},
			}

			let r = emit(writer, written, suffix);
			n += 1;
			r.map_err(|e| fail(n, Segment::Suffix, e))?;

			buf = &buf[i + 1..];
			*line_start = true;
		}

		Ok(n)
	}

	/// Flush the underlying writer.
	///
	/// Does nothing if the underlying writer does not support flushing.
	pub fn flush(&mut self) -> Result<(), W::Error> {
		self.writer.flush_once()
	}
}

impl<W> DecoWriter<W> {
	/// Get the total number of bytes accepted by the underlying writer.
	///
	/// This includes prefixes, suffixes and line terminators.
	#[must_use]
	pub fn written(&self) -> u64 {
		self.written
	}

	/// Get the prefix written at the start of each line.
	#[must_use]
	pub fn prefix(&self) -> &[u8] {
		&self.prefix
	}

	/// Get the suffix written at the end of each line.
	#[must_use]
	pub fn suffix(&self) -> &[u8] {
		&self.suffix[..self.suffix.len() - 1]
	}

	/// Check whether the next byte written starts a new line.
	#[must_use]
	pub fn is_line_start(&self) -> bool {
		self.line_start
	}

	/// Get a reference to the underlying writer.
	pub fn get(&self) -> &W {
		&self.writer
	}

	/// Get a mutable reference to the underlying writer.
	///
	/// Writing to it directly will mess up the line framing.
	pub fn get_mut(&mut self) -> &mut W {
		&mut self.writer
	}

	/// Destruct the [`DecoWriter`] and get back the underlying writer.
	pub fn into_inner(self) -> W {
		self.writer
	}
}

/// Write all of `buf` to `writer` and count what it accepted, even on error.
fn emit<W>(
	writer: &mut W,
	written: &mut u64,
	buf: &[u8],
) -> Result<usize, Partial<W::Error>>
where
	W: Write,
{
	let r = writer.write_slice_all(buf);
	let accepted = match r {
		Ok(n) => n,
		Err(ref e) => e.accepted,
	};
	*written += accepted as u64;
	r
}

fn fail<E>(
	consumed: usize,
	segment: Segment,
	e: Partial<E>,
) -> WriteError<E> {
	log::trace!(
		"writer failed on {segment} after accepting {} bytes",
		e.accepted
	);
	WriteError::new(consumed, segment, e.error)
}

impl<W> Write for DecoWriter<W>
where
	W: Write,
{
	type Error = W::Error;

	fn write_slice(
		&mut self,
		buf: &[u8],
	) -> Result<usize, Self::Error> {
		DecoWriter::write(self, buf).or_else(WriteError::into_short_write)
	}

	fn flush_once(&mut self) -> Result<(), Self::Error> {
		DecoWriter::flush(self)
	}
}

#[cfg(feature = "std")]
impl<W> std::io::Write for DecoWriter<W>
where
	W: Write<Error = std::io::Error>,
{
	/// Decorate `buf` as [`DecoWriter::write()`] does.
	///
	/// Errors after some of `buf` was consumed are reported as a short
	/// write, see [`WriteError::into_short_write()`].
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		DecoWriter::write(self, buf).or_else(WriteError::into_short_write)
	}

	fn flush(&mut self) -> std::io::Result<()> {
		DecoWriter::flush(self)
	}
}
