//! Shared variable store (the `v` formula binding).

use std::collections::HashMap;

use skill_core::VarsOracle;

/// Sparse numeric variables indexed from formulas as `v[n]`.
#[derive(Clone, Debug, Default)]
pub struct VariableStore {
    values: HashMap<usize, f64>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, index: usize, value: f64) {
        self.values.insert(index, value);
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(&index).copied()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl VarsOracle for VariableStore {
    fn value(&self, index: usize) -> Option<f64> {
        self.get(index)
    }
}
