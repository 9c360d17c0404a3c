use super::prelude::*;

impl WriteError for ::core2::io::Error {
	fn write_zero() -> Self {
		Self::new(
			::core2::io::ErrorKind::WriteZero,
			"failed to write whole buffer",
		)
	}
}

newtype! {
	/// Wrapper IO type for [`core2::io::Write`].
	Core2
}

impl_newtype_write! { Core2: ::core2::io::Write }

impl<T> Write for Core2<T>
where
	T: ::core2::io::Write,
{
	type Error = ::core2::io::Error;

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
