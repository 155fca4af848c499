//! The error type held by result containers.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Type-erased, shared error held inside a [`Status`](crate::Status),
/// [`Val`](crate::Val) or [`Vals`](crate::Vals).
///
/// Cloning is cheap: the underlying error is reference-counted, so containers
/// can be copied around freely.
///
/// `Error` does not implement [`std::error::Error`], which keeps the blanket
/// `From<E: std::error::Error>` impl coherent: any error type converts with
/// `.into()` or `Error::new`. Use [`Error::as_dyn_error`] for a trait object.
#[derive(Clone)]
pub struct Error(Arc<dyn StdError + Send + Sync + 'static>);

impl Error {
    /// Create from any error type.
    #[inline]
    pub fn new<E: StdError + Send + Sync + 'static>(e: E) -> Self {
        Self(Arc::new(e))
    }

    /// Create from a plain message.
    pub fn msg(message: impl fmt::Display) -> Self {
        Self::new(MessageError(message.to_string()))
    }

    /// Create from a boxed error.
    #[inline]
    pub fn from_box(e: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self(Arc::from(e))
    }

    /// Prefix the error with a context message.
    ///
    /// The new message is exactly `"{ctx}: {self}"`. The original error stays
    /// reachable through [`Error::chain`] and [`Error::downcast_ref`].
    pub fn context(self, ctx: impl fmt::Display) -> Self {
        Self::new(ContextError {
            context: ctx.to_string(),
            inner: self,
        })
    }

    /// Get the inner error as a trait object reference.
    #[inline]
    pub fn as_dyn_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Iterate over this error and every error it wraps, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        let first: &(dyn StdError + 'static) = self.0.as_ref();
        std::iter::successors(Some(first), |&e| e.source())
    }

    /// Find the first error of type `T` in the chain.
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.chain().find_map(|e| e.downcast_ref::<T>())
    }

    /// Whether `T` appears anywhere in the chain.
    pub fn is<T: StdError + 'static>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.debug_tuple("Error").field(&self.0).finish();
        }
        write!(f, "{:?}", self.to_string())
    }
}

// Error doesn't implement StdError, so this doesn't overlap with From<T> for T
impl<E: StdError + Send + Sync + 'static> From<E> for Error {
    fn from(e: E) -> Self {
        Error::new(e)
    }
}

#[cfg(feature = "anyhow")]
impl Error {
    /// Create from an [`anyhow::Error`], keeping its source chain.
    pub fn from_anyhow(e: anyhow::Error) -> Self {
        Self::from_box(e.into())
    }
}

// Lets `?` hand a held error to code built on anyhow
#[cfg(feature = "anyhow")]
impl From<Error> for anyhow::Error {
    fn from(e: Error) -> Self {
        anyhow::Error::new(SharedError(e))
    }
}

/// Build an [`Error`] from format arguments.
///
/// ```
/// let e = handle_result::format_err!("no row {}", 7);
/// assert_eq!(e.to_string(), "no row 7");
/// ```
#[macro_export]
macro_rules! format_err {
    ($($arg:tt)*) => {
        $crate::Error::msg(::core::format_args!($($arg)*))
    };
}

// ============================================================
// Leaf errors
// ============================================================

#[derive(Debug)]
struct MessageError(String);

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for MessageError {}

#[derive(Debug)]
struct ContextError {
    context: String,
    inner: Error,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.inner)
    }
}

impl StdError for ContextError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.inner.0.as_ref())
    }
}

/// Adapter giving a held error a `std::error::Error` impl for foreign error types.
#[cfg(feature = "anyhow")]
#[derive(Debug)]
struct SharedError(Error);

#[cfg(feature = "anyhow")]
impl fmt::Display for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(feature = "anyhow")]
impl StdError for SharedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0 .0.source()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // Only the message survives a round trip
    impl Serialize for Error {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Error {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            String::deserialize(deserializer).map(Error::msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn context_prefixes_message() {
        let e = Error::msg("disk full").context("saving");
        assert_eq!(e.to_string(), "saving: disk full");
    }

    #[test]
    fn downcast_searches_context_chain() {
        let e = Error::new(io::Error::new(io::ErrorKind::NotFound, "gone"))
            .context("open")
            .context("load");
        assert_eq!(e.to_string(), "load: open: gone");
        assert_eq!(e.downcast_ref::<io::Error>().map(|e| e.kind()), Some(io::ErrorKind::NotFound));
        assert_eq!(e.chain().count(), 3);
    }

    #[test]
    fn clones_share_the_error() {
        let e = Error::msg("x");
        let c = e.clone();
        assert!(Arc::ptr_eq(&e.0, &c.0));
    }

    #[test]
    fn format_err_macro() {
        let e = format_err!("{} {}! {}", "hello", "world", 1);
        assert_eq!(e.to_string(), "hello world! 1");
    }
}
