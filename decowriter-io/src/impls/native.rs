use super::prelude::*;

newtype! {
	/// Wrapper that hides the flush capability of a [`Write`]r.
	///
	/// [`flush_once()`] on the wrapper never reaches the inner writer.
	///
	/// [`flush_once()`]: Write::flush_once
	NoFlush
}

impl_newtype_writer! { NoFlush: Write }

impl<T> Write for NoFlush<T>
where
	T: Write,
{
	type Error = T::Error;

	fn write_slice(
		&mut self,
		buf: &[u8],
	) -> Result<usize, Self::Error> {
		self.0.write_slice(buf)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::prelude::*;

	#[derive(Debug, PartialEq, Eq)]
	struct Full;

	impl WriteError for Full {
		fn write_zero() -> Self {
			Self
		}
	}

	struct Flushes(usize);

	impl Write for Flushes {
		type Error = Full;

		fn write_slice(&mut self, buf: &[u8]) -> Result<usize, Full> {
			Ok(buf.len())
		}

		fn flush_once(&mut self) -> Result<(), Full> {
			self.0 += 1;
			Ok(())
		}
	}

	#[test]
	fn no_flush_hides_flush() {
		let mut w = NoFlush(Flushes(0));
		w.write_slice_all(b"abc").unwrap();
		w.flush_once().unwrap();
		assert_eq!(w.get().0, 0);

		let mut inner = w.into_inner();
		inner.flush_once().unwrap();
		assert_eq!(inner.0, 1);
	}

	#[test]
	fn writers_convert_into_themselves() {
		let mut w: Flushes = Flushes(0).into_writer();
		w.flush_once().unwrap();
		assert_eq!(w.0, 1);
	}
}
