/// The receiver whose methods get wrapped and benchmarked.
///
/// Holds a single value fixed at construction. [`Target::add`] is stateless and
/// ignores that value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    value: i32,
}

impl Target {
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self { value }
    }

    /// Returns the value given at construction.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns `x + y`, wrapping on overflow.
    #[inline]
    pub const fn add(&self, x: i32, y: i32) -> i32 {
        x.wrapping_add(y)
    }
}
