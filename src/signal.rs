//! Early-exit signals - control flow as data.
//!
//! An [`Unwind`] is what an unwinding terminal operation produces when its
//! container holds an error. It normally travels by `?` up to the nearest
//! handler; [`Unwind::raise`] moves it by native stack unwinding instead.

use std::error::Error as StdError;
use std::fmt;

use crate::error::Error;
use crate::scope;

/// Early-exit signal claimed by [`handle`](crate::handle),
/// [`handle_error`](crate::handle_error) and
/// [`handle_return`](crate::handle_return).
///
/// Every variant carries the error that triggered it. Only `Error` hands that
/// error to the enclosing function's output; for `Return` it is diagnostic.
#[derive(Clone)]
pub enum Unwind {
    /// The enclosing function must stop and return now.
    Return(Error),
    /// The enclosing function must return this error.
    Error(Error),
}

impl Unwind {
    /// The error carried by the signal.
    #[inline]
    pub fn error(&self) -> &Error {
        match self {
            Unwind::Return(e) | Unwind::Error(e) => e,
        }
    }

    /// Consume the signal, keeping its error.
    #[inline]
    pub fn into_error(self) -> Error {
        match self {
            Unwind::Return(e) | Unwind::Error(e) => e,
        }
    }

    /// Check if this is a plain early return.
    #[inline]
    pub fn is_return(&self) -> bool {
        matches!(self, Unwind::Return(_))
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Unwind::Return(_) => "return",
            Unwind::Error(_) => "error",
        }
    }

    /// Unwind the native stack up to the nearest handler able to claim this
    /// signal.
    ///
    /// Use this where `?` can't reach, e.g. inside a callback with a fixed
    /// signature. If no capable handler is installed on the current thread the
    /// signal can never be claimed, so this panics with the diagnostic message
    /// naming the missing directive.
    ///
    /// # Panics
    ///
    /// Always; either as a claimable unwind or as an unhandled-signal panic.
    pub fn raise(self) -> ! {
        if scope::can_claim(&self) {
            std::panic::resume_unwind(Box::new(self))
        }
        panic!("{}", self)
    }
}

impl fmt::Display for Unwind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unwind::Return(_) => f.write_str(
                "unhandled early return: use `#[handle_return]`, `#[handle]`, or `#[handle_error]` \
                 on the enclosing fn to convert it into a return",
            ),
            Unwind::Error(e) => write!(
                f,
                "unhandled error: use `#[handle]` or `#[handle_error]` on the enclosing fn \
                 to convert it into a returned result or error: {}",
                e
            ),
        }
    }
}

// Debug is what `fn main() -> Result<(), Unwind>` prints, so it carries the
// diagnostic. `{:#?}` shows the structure.
impl fmt::Debug for Unwind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return match self {
                Unwind::Return(e) => f.debug_tuple("Return").field(e).finish(),
                Unwind::Error(e) => f.debug_tuple("Error").field(e).finish(),
            };
        }
        fmt::Display::fmt(self, f)
    }
}

impl StdError for Unwind {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.error().as_dyn_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_message_names_every_directive() {
        let msg = Unwind::Return(Error::msg("boom")).to_string();
        assert!(msg.contains("#[handle_return]"));
        assert!(msg.contains("#[handle]"));
        assert!(msg.contains("#[handle_error]"));
        assert!(!msg.contains("boom"));
    }

    #[test]
    fn error_message_chains_original() {
        let msg = Unwind::Error(Error::msg("ctx: boom")).to_string();
        assert!(!msg.contains("#[handle_return]"));
        assert!(msg.ends_with(": ctx: boom"));
    }

    #[test]
    fn debug_matches_display() {
        let signal = Unwind::Error(Error::msg("x"));
        assert_eq!(format!("{:?}", signal), signal.to_string());
        let pretty = format!("{:#?}", signal);
        assert!(pretty.starts_with("Error("));
        assert!(pretty.contains("MessageError"));
    }

    #[test]
    fn raise_without_handler_panics_with_message() {
        let payload = std::panic::catch_unwind(|| Unwind::Error(Error::msg("lost")).raise())
            .unwrap_err();
        let msg = payload.downcast_ref::<String>().unwrap();
        assert!(msg.starts_with("unhandled error:"));
        assert!(msg.ends_with(": lost"));
    }
}
