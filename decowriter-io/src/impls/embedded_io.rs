use super::prelude::*;

use ::embedded_io::{Error as _, ErrorKind};

impl WriteError for ErrorKind {
	fn write_zero() -> Self {
		ErrorKind::WriteZero
	}
}

newtype! {
	/// Wrapper IO type for [`embedded_io::Write`].
	///
	/// [`embedded_io::Write`]: ::embedded_io::Write
	EmbeddedIo
}

impl_newtype_write! { EmbeddedIo: ::embedded_io::Write }

impl<T> Write for EmbeddedIo<T>
where
	T: ::embedded_io::Write,
{
	type Error = ErrorKind;

	fn write_slice(
		&mut self,
		buf: &[u8],
	) -> Result<usize, Self::Error> {
		self.0.write(buf).map_err(|x| x.kind())
	}

	fn flush_once(&mut self) -> Result<(), Self::Error> {
		self.0.flush().map_err(|x| x.kind())
	}
}
