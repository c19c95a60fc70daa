//! Read-only access to the host's shared variable store (the `v` binding).

/// Numeric variable store addressable from formulas as `v[n]`.
pub trait VarsOracle {
    /// Returns the value of variable `index`, or `None` if it was never set.
    fn value(&self, index: usize) -> Option<f64>;
}
