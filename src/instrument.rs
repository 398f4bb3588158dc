//! Registering callbacks on test cases.
//!
//! Registration is plain composition. An [`Instrumentation`] is a blueprint
//! that knows which callbacks a kind of test case gets. It builds
//! [`Instrumented`] values, and each of those wraps one base test together with
//! its own list of callbacks.
//!
//! Callback order is part of the contract: callbacks are listed in the order
//! they were registered, so the first [`with_callback`] applied is the first
//! one a runner calls. Constructing many instances from the same blueprint
//! always yields the same order.
//!
//! An [`Instrumented`] value has exactly one list. More registrations go onto
//! that list with [`Instrumentation::extend`] or [`Instrumented::with_callback`].
//! Wrapping it once more as `Instrumented<Instrumented<T>>` keeps the lists
//! apart, and only the outer one is dispatched until
//! [`flatten`](Instrumented::flatten) merges them.

use std::{
    borrow::Cow,
    fmt,
    marker::PhantomData,
    ops::{Deref, DerefMut},
    sync::Arc,
};

use crate::{
    callback::{SharedCallback, TestCallback},
    case::TestCase,
    driver::ScreenshotDriver,
};

/// Start an [`Instrumentation`] for test type `T` with a single callback.
///
/// Further callbacks are added with [`Instrumentation::with_callback`].
pub fn with_callback<T>(callback: impl TestCallback + 'static) -> Instrumentation<T> {
    Instrumentation::new().with_callback(callback)
}

/// A blueprint for test cases of type `T` that carry callbacks.
///
/// The blueprint does not change how a `T` is built. It runs the base
/// construction first and only attaches callbacks once that succeeded.
pub struct Instrumentation<T> {
    callbacks: Vec<SharedCallback>,
    _base: PhantomData<fn() -> T>,
}

impl<T> Instrumentation<T> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
            _base: PhantomData,
        }
    }

    /// Register one more callback.
    pub fn with_callback(self, callback: impl TestCallback + 'static) -> Self {
        self.with_shared_callback(Arc::new(callback))
    }

    /// Register a callback that is already shared elsewhere.
    ///
    /// Registering the same callback twice attaches it twice.
    pub fn with_shared_callback(mut self, callback: SharedCallback) -> Self {
        self.callbacks.push(callback);
        log::debug!(
            "registered callback #{} for {}",
            self.callbacks.len(),
            std::any::type_name::<T>()
        );
        self
    }

    pub fn callbacks(&self) -> &[SharedCallback] {
        &self.callbacks
    }

    /// Build an instance from a fallible constructor.
    ///
    /// The constructor's error is returned unchanged, and no callbacks are
    /// attached in that case.
    pub fn construct<E>(&self, ctor: impl FnOnce() -> Result<T, E>) -> Result<Instrumented<T>, E> {
        let base = ctor()?;
        Ok(self.instrument(base))
    }

    /// Attach the registered callbacks to an already built `base`.
    pub fn instrument(&self, base: T) -> Instrumented<T> {
        self.extend(Instrumented::new(base))
    }

    /// Append the registered callbacks to the list `instrumented` already has.
    pub fn extend(&self, mut instrumented: Instrumented<T>) -> Instrumented<T> {
        for callback in &self.callbacks {
            instrumented.register_shared(Arc::clone(callback));
        }
        instrumented
    }
}

impl<T> Default for Instrumentation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Instrumentation<T> {
    fn clone(&self) -> Self {
        Self {
            callbacks: self.callbacks.clone(),
            _base: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Instrumentation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instrumentation")
            .field("base", &std::any::type_name::<T>())
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

/// A test case together with the callbacks registered on it.
///
/// Derefs to the base test, so everything the base can do is still available
/// unchanged.
pub struct Instrumented<T> {
    base: T,
    callbacks: Vec<SharedCallback>,
}

impl<T> Instrumented<T> {
    pub fn new(base: T) -> Self {
        Self {
            base,
            callbacks: Vec::new(),
        }
    }

    /// Append a callback to this instance only.
    pub fn register(&mut self, callback: impl TestCallback + 'static) {
        self.register_shared(Arc::new(callback));
    }

    pub fn register_shared(&mut self, callback: SharedCallback) {
        self.callbacks.push(callback);
    }

    pub fn with_callback(mut self, callback: impl TestCallback + 'static) -> Self {
        self.register(callback);
        self
    }

    pub fn callbacks(&self) -> &[SharedCallback] {
        &self.callbacks
    }

    pub fn base(&self) -> &T {
        &self.base
    }

    pub fn into_inner(self) -> T {
        self.base
    }
}

impl<T> Instrumented<Instrumented<T>> {
    /// Merge a doubly wrapped test into one list.
    ///
    /// The inner callbacks were registered first, so they come first.
    pub fn flatten(self) -> Instrumented<T> {
        let Instrumented {
            base: mut inner,
            callbacks,
        } = self;
        inner.callbacks.extend(callbacks);
        inner
    }
}

impl<T> Deref for Instrumented<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl<T> DerefMut for Instrumented<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl<T: TestCase> TestCase for Instrumented<T> {
    fn id(&self) -> Cow<'_, str> {
        self.base.id()
    }

    fn driver(&self) -> Option<&dyn ScreenshotDriver> {
        self.base.driver()
    }
}

impl<T: fmt::Debug> fmt::Debug for Instrumented<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instrumented")
            .field("base", &self.base)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
