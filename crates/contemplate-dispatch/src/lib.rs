//! Decorator chains and controller dispatch.
//!
//! `contemplate-dispatch` provides the invocation side of the `contemplate`
//! engine: wrapping a target call in declared decorators, addressing
//! controllers by path, and looking up named helper functions.
//!
//! # Features
//!
//! - **Decorator chains**: [`Decorated`] targets with ordered [`Decorator`]s;
//!   first declared is outermost, any layer may short-circuit
//! - **Controllers**: [`Controller`] targets over JSON arguments, loaded by
//!   path through a [`ControllerLoader`] such as [`ControllerTable`]
//! - **Functions**: [`FunctionTable`] name → callable lookup
//!
//! # Usage
//!
//! ```rust
//! use contemplate_dispatch::Decorated;
//!
//! let stack = Decorated::new(|mut trail: Vec<String>| {
//!     trail.push("target".into());
//!     trail
//! })
//! .decorate(|_target, next, mut trail: Vec<String>| {
//!     trail.push("enter 1".into());
//!     let mut out = next(trail);
//!     out.push("exit 1".into());
//!     out
//! })
//! .decorate(|_target, next, mut trail: Vec<String>| {
//!     trail.push("enter 2".into());
//!     let mut out = next(trail);
//!     out.push("exit 2".into());
//!     out
//! });
//!
//! assert_eq!(
//!     stack.invoke(vec!["initial".into()]),
//!     ["initial", "enter 1", "enter 2", "target", "exit 2", "exit 1"]
//! );
//! ```

mod controller;
mod decorator;
mod error;
mod function;

pub use controller::{
    controller, Controller, ControllerArgs, ControllerLoader, ControllerResult, ControllerTable,
};
pub use decorator::{Decorated, Decorator, Next, Target};
pub use error::DispatchError;
pub use function::{Function, FunctionTable};
