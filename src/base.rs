//! Functionality shared by every result container.

/// Implement inspection and the outward `Result` conversion for a container
/// wrapping `Result<$payload, Error>`.
macro_rules! impl_base {
    ($name:ident<$($param:ident),*>, $payload:ty) => {
        impl<$($param),*> $name<$($param),*> {
            /// Check if the container holds no error.
            #[inline]
            pub fn is_ok(&self) -> bool {
                self.0.is_ok()
            }

            /// Check if the container holds an error.
            #[inline]
            pub fn is_err(&self) -> bool {
                self.0.is_err()
            }

            /// The held error, if any.
            #[inline]
            pub fn err(&self) -> Option<&$crate::Error> {
                self.0.as_ref().err()
            }

            /// The error's message, or `""` if ok.
            pub fn message(&self) -> ::std::string::String {
                match &self.0 {
                    ::core::result::Result::Ok(_) => ::std::string::String::new(),
                    ::core::result::Result::Err(e) => e.to_string(),
                }
            }

            /// Convert into a plain `Result`.
            #[inline]
            pub fn into_result(self) -> ::core::result::Result<$payload, $crate::Error> {
                self.0
            }
        }

        impl<$($param),*> From<$name<$($param),*>> for ::core::result::Result<$payload, $crate::Error> {
            #[inline]
            fn from(c: $name<$($param),*>) -> Self {
                c.0
            }
        }

        impl<$($param,)* E: Into<$crate::Error>> From<::core::result::Result<$payload, E>> for $name<$($param),*> {
            #[inline]
            fn from(r: ::core::result::Result<$payload, E>) -> Self {
                Self(r.map_err(Into::into))
            }
        }
    };
}

pub(crate) use impl_base;
