//! Tap helpers.
//!
//! `tap` runs a side-effecting closure against a value and hands the value
//! back, so a chain of calls can be observed without being broken.
//! `TapProxy` is the callback-less form: every call made through it is
//! applied to the target and the proxy (never the call's result) comes back.

use std::ops::{Deref, DerefMut};

/// Call `callback` with the value, then return the value
pub fn tap<T, F>(value: T, callback: F) -> T
where
    F: FnOnce(&T),
{
    callback(&value);
    value
}

/// Wrap a value in a chainable proxy
pub fn tapped<T>(value: T) -> TapProxy<T> {
    TapProxy::new(value)
}

/// Method-call form of the tap helpers, available on every sized type
pub trait Tap: Sized {
    fn tap<F>(self, callback: F) -> Self
    where
        F: FnOnce(&Self),
    {
        callback(&self);
        self
    }

    fn tap_mut<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        callback(&mut self);
        self
    }

    fn tapped(self) -> TapProxy<Self> {
        TapProxy::new(self)
    }
}

impl<T> Tap for T {}

/// Forwards calls to the target and always yields the target back
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TapProxy<T> {
    target: T,
}

impl<T> TapProxy<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    /// Run `method` against the target and discard whatever it returns
    pub fn call<R, F>(mut self, method: F) -> Self
    where
        F: FnOnce(&mut T) -> R,
    {
        let _ = method(&mut self.target);
        self
    }

    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T> Deref for TapProxy<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.target
    }
}

impl<T> DerefMut for TapProxy<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Default)]
    struct Counter {
        hits: u32,
        saved: bool,
    }

    impl Counter {
        fn hit(&mut self) -> u32 {
            self.hits += 1;
            self.hits
        }

        fn save(&mut self) -> Result<(), String> {
            self.saved = true;
            Ok(())
        }
    }

    #[test]
    fn test_tap_returns_value() {
        let seen = Cell::new(None);
        let value = tap("foo", |v| seen.set(Some(*v)));
        assert_eq!(value, "foo");
        assert_eq!(seen.get(), Some("foo"));
    }

    #[test]
    fn test_tap_trait() {
        let seen = Cell::new(0);
        let value = vec![1, 2, 3].tap(|v| seen.set(v.len())).tap_mut(|v| v.push(4));
        assert_eq!(seen.get(), 3);
        assert_eq!(value, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_proxy_calls_methods_on_target() {
        let counter = tapped(Counter::default())
            .call(Counter::hit)
            .call(Counter::hit)
            .call(Counter::save)
            .into_inner();

        assert_eq!(counter.hits, 2);
        assert!(counter.saved);
    }

    #[test]
    fn test_proxy_derefs_to_target() {
        let mut proxy = Counter::default().tapped();
        proxy.hit();
        assert_eq!(proxy.hits, 1);
    }
}
