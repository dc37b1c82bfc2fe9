//! PrngFn - a shared handle to a pseudo-random number function.

use std::fmt;
use std::sync::Arc;

/// A named, shareable PRNG function returning values on `[0, 1)`.
///
/// Two handles are equal only when they point at the same function.
#[derive(Clone)]
pub struct PrngFn {
    name: Arc<str>,
    func: Arc<dyn Fn() -> f64 + Send + Sync>,
}

impl PrngFn {
    pub fn new(name: impl Into<Arc<str>>, func: impl Fn() -> f64 + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Draws the next pseudo-random number.
    pub fn call(&self) -> f64 {
        (self.func)()
    }

    pub fn same_fn(&self, other: &PrngFn) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl PartialEq for PrngFn {
    fn eq(&self, other: &Self) -> bool {
        self.same_fn(other)
    }
}

impl fmt::Debug for PrngFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrngFn").field("name", &self.name).finish()
    }
}
