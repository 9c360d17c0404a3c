use crate::error::{Partial, WriteError};

/// This trait allows writing bytes to a sink.
///
/// Types implementing this trait are called "writers".
///
/// Flushing is an optional capability. Writers that have nothing to flush
/// keep the default [`flush_once()`] which does nothing, so callers can
/// always call it without first asking whether the writer supports it.
///
/// [`flush_once()`]: Write::flush_once
pub trait Write {
	/// Error type for IO operations involving the writer.
	type Error: WriteError;

	/// Write some bytes from `buf` to the writer.
	///
	/// Returns how many bytes of `buf` the writer accepted. This may be less
	/// than `buf.len()`. [`write_slice_all()`] should, usually, be preferred.
	///
	/// [`write_slice_all()`]: WriteExt::write_slice_all
	fn write_slice(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

	/// Flush this writer once ensuring all bytes reach their destination.
	///
	/// The default implementation does nothing.
	fn flush_once(&mut self) -> Result<(), Self::Error> {
		Ok(())
	}
}

/// Write bytes to a writer.
///
/// Extension trait for all [`Write`] types.
pub trait WriteExt: Write {
	/// Write all of `buf` to the writer.
	///
	/// This method calls [`write_slice()`] repeatedly until either a) `buf`
	/// has no more data, b) an error occurs, c) the writer cannot accept any
	/// more bytes. Errors are never retried.
	///
	/// On success, returns `buf.len()`. On failure, the returned [`Partial`]
	/// holds the number of bytes the writer accepted before the error.
	///
	/// [`write_slice()`]: Write::write_slice
	fn write_slice_all(
		&mut self,
		buf: &[u8],
	) -> Result<usize, Partial<Self::Error>> {
		write_slice_all(self, buf)
	}

	/// Create a "by reference" adapter that takes the current instance of
	/// [`Write`] by mutable reference.
	fn by_ref(&mut self) -> &mut Self
	where
		Self: Sized,
	{
		self
	}
}

impl<T: Write + ?Sized> WriteExt for T {}

fn write_slice_all<T>(
	writer: &mut T,
	buf: &[u8],
) -> Result<usize, Partial<T::Error>>
where
	T: Write + ?Sized,
{
	let mut accepted = 0;

	while accepted < buf.len() {
		match writer.write_slice(&buf[accepted..]) {
			Ok(0) => {
				return Err(Partial::new(accepted, T::Error::write_zero()))
			},
			Ok(n) => accepted += n,
			Err(e) => return Err(Partial::new(accepted, e)),
		}
	}

	Ok(accepted)
}

/// A wrapper around a writer that gives access to it.
pub trait Writer {
	/// The wrapped writer.
	type Inner;

	/// Get a reference to the inner writer.
	fn get(&self) -> &Self::Inner;

	/// Get a mutable reference to the inner writer.
	fn get_mut(&mut self) -> &mut Self::Inner;

	/// Destruct the wrapper and get back the inner writer.
	fn into_inner(self) -> Self::Inner;
}

/// Types that can be converted to [`Write`]ers.
///
/// Every [`Write`]r converts into itself. Writers of other IO libraries
/// convert into their wrapper type, e.g. a `std::io::Write`r into `Std`
/// when the `std` feature is enabled.
pub trait IntoWriter<T: Write> {
	/// Convert this type into a writer `T`.
	fn into_writer(self) -> T;
}

impl<T: Write> IntoWriter<T> for T {
	fn into_writer(self) -> T {
		self
	}
}

macro_rules! forward_impl_write {
	($typ:ty) => {
		impl<T: Write + ?Sized> Write for $typ {
			type Error = T::Error;

			fn write_slice(
				&mut self,
				buf: &[u8],
			) -> Result<usize, Self::Error> {
				(**self).write_slice(buf)
			}

			fn flush_once(&mut self) -> Result<(), Self::Error> {
				(**self).flush_once()
			}
		}
	};
}

forward_impl_write! { &mut T }

#[cfg(feature = "alloc")]
forward_impl_write! { alloc::boxed::Box<T> }
