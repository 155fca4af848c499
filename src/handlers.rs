//! Handler installers - convert early-exit signals into a function's return.
//!
//! Each installer runs a body with a handler registered for its duration and
//! claims the signals its directive allows, whether they arrive by `?` or by
//! a native unwind from [`Unwind::raise`]. Signals it may not claim are
//! re-raised; any other panic is resumed untouched.

use std::panic::{self, AssertUnwindSafe};

use crate::error::Error;
use crate::scope::{Directive, Installed};
use crate::signal::Unwind;

/// Capability of a return type to receive a claimed signal.
///
/// Implemented by [`Status`](crate::Status), [`Val`](crate::Val),
/// [`Vals`](crate::Vals) and `Result<T, E>` for `E: From<Error>`.
pub trait Receiver: Sized {
    /// Output for a claimed `Unwind::Error`.
    fn receive(err: Error) -> Self;

    /// Output for a claimed `Unwind::Return`: the zero value of the type.
    fn returned() -> Self;
}

impl<T: Default, E: From<Error>> Receiver for Result<T, E> {
    #[inline]
    fn receive(err: Error) -> Self {
        Err(err.into())
    }

    #[inline]
    fn returned() -> Self {
        Ok(T::default())
    }
}

/// Run `body`, claiming both signal kinds into a result container.
///
/// `body` yields the function's own return value. `Unwind::Error(e)`
/// becomes `R::receive(e)`; `Unwind::Return` becomes `R::returned()`.
/// Usually applied with the `#[handle]` attribute:
///
/// ```
/// use handle_result::{handle, Val};
///
/// fn parse(s: &str) -> Val<i32> {
///     handle(|| {
///         let n = Val::from_result(s.parse::<i32>()).or_error("parsing")?;
///         Ok(Val::new(n + 1))
///     })
/// }
///
/// assert_eq!(parse("41").or_use(0), 42);
/// assert_eq!(parse("x").message(), "parsing: invalid digit found in string");
/// ```
pub fn handle<R, F>(body: F) -> R
where
    R: Receiver,
    F: FnOnce() -> Result<R, Unwind>,
{
    claim(Directive::Handle, body)
}

/// Run `body`, claiming both signal kinds into a plain `Result`.
///
/// `body` yields the function's own `Result<T, E>`. `Unwind::Error(e)`
/// becomes `Err(e.into())`; `Unwind::Return` becomes `Ok(T::default())`.
/// Usually applied with the `#[handle_error]` attribute:
///
/// ```
/// use handle_result::{handle_error, Error, Status};
///
/// #[handle_error]
/// fn save(free: u64) -> Result<(), Error> {
///     if free == 0 {
///         Status::errorf(format_args!("disk full")).or_error("saving")?;
///     }
///     Ok(())
/// }
///
/// assert!(save(10).is_ok());
/// assert_eq!(save(0).unwrap_err().to_string(), "saving: disk full");
/// ```
pub fn handle_error<T, E, F>(body: F) -> Result<T, E>
where
    T: Default,
    E: From<Error>,
    F: FnOnce() -> Result<Result<T, E>, Unwind>,
{
    claim(Directive::HandleError, body)
}

fn claim<R, F>(directive: Directive, body: F) -> R
where
    R: Receiver,
    F: FnOnce() -> Result<R, Unwind>,
{
    match intercept(directive, body) {
        Ok(r) => r,
        Err(Unwind::Return(_)) => R::returned(),
        Err(Unwind::Error(e)) => R::receive(e),
    }
}

/// Run `body`, claiming only `Unwind::Return`.
///
/// For functions with no return value. An `Unwind::Error` reaching this
/// handler is re-raised so a handler further up can claim it; with none
/// installed it ends as a panic naming the missing directive.
pub fn handle_return<F>(body: F)
where
    F: FnOnce() -> Result<(), Unwind>,
{
    match intercept(Directive::HandleReturn, body) {
        Ok(()) | Err(Unwind::Return(_)) => {}
        Err(signal) => {
            tracing::debug!(directive = %Directive::HandleReturn, signal = signal.kind(), "re-raising unclaimed signal");
            signal.raise()
        }
    }
}

/// Run `body` with a handler installed, folding native unwinds that carry a
/// signal back into the explicit channel.
fn intercept<T, F>(directive: Directive, body: F) -> Result<T, Unwind>
where
    F: FnOnce() -> Result<T, Unwind>,
{
    let caught = {
        let _installed = Installed::new(directive);
        panic::catch_unwind(AssertUnwindSafe(body))
    };
    let flow = match caught {
        Ok(flow) => flow,
        Err(payload) => match payload.downcast::<Unwind>() {
            Ok(signal) => Err(*signal),
            Err(other) => panic::resume_unwind(other),
        },
    };
    if let Err(signal) = &flow {
        tracing::trace!(%directive, signal = signal.kind(), error = %signal.error(), "intercepted signal");
    }
    flow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope;
    use crate::Status;

    #[test]
    fn guard_released_after_claimed_native_unwind() {
        let before = scope::depth();
        let s: Status = handle(|| Unwind::Error(Error::msg("deep")).raise());
        assert_eq!(s.message(), "deep");
        assert_eq!(scope::depth(), before);
    }

    #[test]
    fn guard_released_after_foreign_panic() {
        let before = scope::depth();
        let caught = panic::catch_unwind(|| handle_return(|| panic!("unrelated")));
        assert!(caught.is_err());
        assert_eq!(scope::depth(), before);
    }
}
