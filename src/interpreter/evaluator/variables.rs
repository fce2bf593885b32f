use std::collections::{BTreeMap, btree_map};

use crate::interpreter::value::big_int::BigInt;

/// The name-to-value store of one program run.
///
/// Only assignments write to it, plus reads of unknown names under the
/// permissive policy, which define the name as the empty value. Names iterate
/// in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    values: BTreeMap<String, BigInt>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.values.get(name)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn assign(&mut self, name: &str, value: BigInt) {
        self.values.insert(name.to_string(), value);
    }

    /// Returns the value bound to `name`, first binding it to the empty value
    /// if it is unknown.
    ///
    /// # Example
    /// ```
    /// use digitwise::interpreter::evaluator::variables::VariableTable;
    ///
    /// let mut table = VariableTable::new();
    /// assert!(table.get_or_define("x").is_empty());
    /// assert!(table.contains("x"));
    /// ```
    pub fn get_or_define(&mut self, name: &str) -> &BigInt {
        self.values.entry(name.to_string()).or_default()
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no name is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, BigInt> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a VariableTable {
    type IntoIter = btree_map::Iter<'a, String, BigInt>;
    type Item = (&'a String, &'a BigInt);

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
