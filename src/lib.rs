//! handle-result - Result containers with a structured early-return protocol
//!
//! # Overview
//!
//! `handle-result` offers three result containers, [`Status`], [`Val`] and
//! [`Vals`], holding either a success payload or an error. Terminal
//! operations resolve a container into its value or take the error path. The
//! unwinding ones produce an [`Unwind`] signal that `?` carries up to the
//! nearest handler, which turns it into the function's own return value.
//!
//! # Quick Start
//!
//! ```
//! use handle_result::{handle, Val};
//! use std::collections::HashMap;
//!
//! #[handle]
//! fn port(config: &HashMap<&str, String>) -> Val<u16> {
//!     let raw = Val::from_map(config, "port").or_error("reading port")?;
//!     let port = Val::from_result(raw.parse::<u16>()).or_error("parsing port")?;
//!     Val::new(port)
//! }
//!
//! let mut config = HashMap::new();
//! assert_eq!(port(&config).message(), "reading port: Map had no value for key port");
//! config.insert("port", "8080".to_string());
//! assert_eq!(port(&config).or_use(0), 8080);
//! ```
//!
//! # Terminal operations
//!
//! | Operation | If ok | If error |
//! |-----------|-------|----------|
//! | `or_use(default)` | value | `default`, no unwind |
//! | `or_do(f)` (`Status`) | nothing | `f(&err)`, no unwind |
//! | `or_panic(ctx)` | value | panics with `"{ctx}: {err}"`; never claimed by a handler |
//! | `or_do_and_return(f)?` | value | `f(&err)`, then `Unwind::Return` |
//! | `or_error(ctx)?` | value | `Unwind::Error` carrying `"{ctx}: {err}"` |
//!
//! # Handlers
//!
//! | Directive | Claims | Output on `Return` | Output on `Error(e)` |
//! |-----------|--------|--------------------|----------------------|
//! | `#[handle]` / [`handle`] | both | zero container | container holding `e` |
//! | `#[handle_error]` / [`handle_error`] | both | `Ok(T::default())` | `Err(e.into())` |
//! | `#[handle_return]` / [`handle_return`] | `Return` | `()` | re-raised |
//!
//! A function that uses `?` on a signal without a handler must return
//! `Result<_, Unwind>` itself, so the signal passes through to its caller. A
//! signal that escapes `main` prints a message naming the missing directive.
//!
//! # Native unwinding
//!
//! Where `?` can't reach, [`Unwind::raise`] unwinds the stack to the nearest
//! capable handler, which claims it like a returned signal. Handlers resume
//! every other panic untouched, including [`Val::or_panic`] and friends. The
//! handler registry is per thread, and the native channel needs the default
//! `panic = "unwind"` strategy.

// ============================================================
// Modules
// ============================================================

mod base;
mod error;
mod ext;
mod handlers;
mod scope;
mod signal;
mod status;
mod val;
mod vals;

#[cfg(feature = "serde")]
mod serde_impl;

// Lets the attribute macros' `::handle_result` paths resolve inside this crate
extern crate self as handle_result;

// ============================================================
// Re-exports
// ============================================================

pub use error::Error;
pub use ext::{HandleExt, StatusExt, ValsExt};
pub use handlers::{handle, handle_error, handle_return, Receiver};
pub use signal::Unwind;
pub use status::Status;
pub use val::Val;
pub use vals::Vals;

/// Attribute directives installing a handler around a function body.
///
/// - `#[handle]`: the fn returns a container implementing [`Receiver`].
/// - `#[handle_error]`: the fn returns `Result<T, E>` with `T: Default` and
///   `E: From<Error>`.
/// - `#[handle_return]`: the fn returns nothing.
///
/// Inside the body `?` works on `Result<_, Unwind>`, and `return x` returns
/// `x` from the function as usual.
pub use handle_result_macros::{handle, handle_error, handle_return};
