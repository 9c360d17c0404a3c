use super::prelude::*;

use ::std::io::ErrorKind as E;

impl WriteError for ::std::io::Error {
	fn write_zero() -> Self {
		Self::from(E::WriteZero)
	}
}

newtype! {
	/// Wrapper IO type for [`std::io::Write`].
	///
	/// The wrapped writer always supports flushing.
	Std
}

impl_newtype_write! { Std: ::std::io::Write }

impl<T> Write for Std<T>
where
	T: ::std::io::Write,
{
	type Error = ::std::io::Error;

	fn write_slice(
		&mut self,
		buf: &[u8],
	) -> Result<usize, Self::Error> {
		self.0.write(buf)
	}

	fn flush_once(&mut self) -> Result<(), Self::Error> {
		self.0.flush()
	}
}
