macro_rules! newtype {
	(
		$(#[$attr:meta])*
		$name:ident
	) => {
		$(#[$attr])*
		#[derive(Debug)]
		pub struct $name<T>(pub T);
	};
}

macro_rules! impl_newtype_writer {
	($name:ident: $($bounds:tt)*) => {
		impl<T> $crate::Writer for $name<T>
		where
			T: $($bounds)*
		{
			type Inner = T;

			fn get(&self) -> &Self::Inner {
				&self.0
			}

			fn get_mut(&mut self) -> &mut Self::Inner {
				&mut self.0
			}

			fn into_inner(self) -> Self::Inner {
				self.0
			}
		}
	};
}

macro_rules! impl_newtype_write {
	($name:ident: $($bounds:tt)*) => {
		impl_newtype_writer! { $name: $($bounds)* }

		impl<T> $crate::IntoWriter<$name<T>> for T
		where
			T: $($bounds)*
		{
			fn into_writer(self) -> $name<T> {
				$name(self)
			}
		}
	}
}

use impl_newtype_write;
use impl_newtype_writer;
use newtype;

mod prelude {
	pub(super) use super::{
		impl_newtype_write, impl_newtype_writer, newtype,
	};
	pub(super) use crate::{Write, WriteError};
}

macro_rules! declare_impl {
	($mod:ident :: $name:ident, $feature:literal) => {
		#[cfg(feature = $feature)]
		mod $mod;

		#[cfg(feature = $feature)]
		pub use self::$mod::$name;
	};
}

mod native;
pub use self::native::NoFlush;

declare_impl! { std::Std, "std" }
declare_impl! { embedded_io::EmbeddedIo, "embedded-io" }
declare_impl! { core2::Core2, "core2" }
