//! Decorator chains around a target call.
//!
//! Decorators let independent concerns (argument rewriting, guards, caching,
//! result post-processing) wrap a target without the target knowing about
//! them. Each decorator receives the target, a `next` continuation and the
//! arguments, and decides what to do:
//!
//! ```text
//! invoke(args)
//!   → Dec1 (enter)          first declared, outermost
//!     → Dec2 (enter)
//!       → target(args)
//!     ← Dec2 (exit)
//!   ← Dec1 (exit)
//! ```
//!
//! - Continue: call `next(args)`, optionally with rewritten arguments
//! - Short-circuit: return without calling `next`; inner decorators and the
//!   target never run
//! - Post-process: inspect or replace what `next` returned
//!
//! The chain itself adds nothing: whatever the target or a decorator returns,
//! errors included, is handed back unchanged to the enclosing decorator.
//!
//! # Example
//!
//! ```rust
//! use contemplate_dispatch::Decorated;
//!
//! let greet = Decorated::new(|name: String| format!("hello {name}"))
//!     .decorate(|_target, next, name: String| next(name.to_uppercase()))
//!     .decorate(|_target, next, name: String| format!("<{}>", next(name)));
//!
//! assert_eq!(greet.invoke("ada".into()), "<hello ADA>");
//! ```

use std::fmt;
use std::sync::Arc;

/// A decoratable call target.
pub type Target<A, R> = dyn Fn(A) -> R + Send + Sync;

/// The continuation handed to a decorator: the rest of the chain.
pub type Next<'a, A, R> = &'a dyn Fn(A) -> R;

/// A wrapper invoked around a target call.
pub trait Decorator<A, R>: Send + Sync {
    /// Runs this layer of the chain.
    ///
    /// Call `next(args)` to continue to the next decorator, or to the target
    /// if this is the innermost one. Returning without calling `next`
    /// short-circuits the rest of the chain.
    fn decorate(&self, target: &Target<A, R>, next: Next<'_, A, R>, args: A) -> R;
}

impl<A, R, F> Decorator<A, R> for F
where
    F: Fn(&Target<A, R>, Next<'_, A, R>, A) -> R + Send + Sync,
{
    fn decorate(&self, target: &Target<A, R>, next: Next<'_, A, R>, args: A) -> R {
        self(target, next, args)
    }
}

/// A target together with its declared decorators.
///
/// Decorators are declared in order; the first declared is the outermost
/// layer. The declaration list is fixed when the value is built, and the
/// nested continuations are rebuilt for each [`invoke`](Self::invoke).
pub struct Decorated<A, R> {
    target: Arc<Target<A, R>>,
    decorators: Vec<Arc<dyn Decorator<A, R>>>,
}

impl<A, R> Clone for Decorated<A, R> {
    fn clone(&self) -> Self {
        Self {
            target: Arc::clone(&self.target),
            decorators: self.decorators.clone(),
        }
    }
}

impl<A: 'static, R: 'static> Decorated<A, R> {
    /// Wraps `target` with no decorators.
    pub fn new<F>(target: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self {
            target: Arc::new(target),
            decorators: Vec::new(),
        }
    }

    /// Declares a closure decorator inside any already declared.
    pub fn decorate<F>(self, decorator: F) -> Self
    where
        F: Fn(&Target<A, R>, Next<'_, A, R>, A) -> R + Send + Sync + 'static,
    {
        self.with_decorator(decorator)
    }

    /// Declares a decorator inside any already declared.
    pub fn with_decorator<D>(mut self, decorator: D) -> Self
    where
        D: Decorator<A, R> + 'static,
    {
        self.decorators.push(Arc::new(decorator));
        self
    }

    /// Declares several shared decorators, outermost first.
    pub fn with_decorators<I>(mut self, decorators: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Decorator<A, R>>>,
    {
        self.decorators.extend(decorators);
        self
    }
}

impl<A, R> Decorated<A, R> {
    /// Number of declared decorators.
    pub fn decorator_count(&self) -> usize {
        self.decorators.len()
    }

    /// Returns `true` if the target has no decorators.
    pub fn is_bare(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Calls the target directly, skipping every decorator.
    pub fn call_undecorated(&self, args: A) -> R {
        (self.target)(args)
    }

    /// Calls the target through its decorator chain.
    pub fn invoke(&self, args: A) -> R {
        if self.decorators.is_empty() {
            return (self.target)(args);
        }

        tracing::trace!(
            target: "contemplate_dispatch::decorator",
            layers = self.decorators.len(),
            "building decorator chain"
        );

        let target: &Target<A, R> = self.target.as_ref();
        let mut next: Box<dyn Fn(A) -> R + '_> = Box::new(move |args| target(args));
        for decorator in self.decorators.iter().rev() {
            let inner = next;
            next = Box::new(move |args| decorator.decorate(target, &*inner, args));
        }
        next(args)
    }
}

impl<A, R> fmt::Debug for Decorated<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorated")
            .field("decorator_count", &self.decorators.len())
            .finish_non_exhaustive()
    }
}
