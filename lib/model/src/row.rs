use crate::Term;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// A single solution: the terms bound to variables.
///
/// Variables that are unbound in this solution have no entry, so [`Row::get`] returns `None` for
/// them. This is distinct from a variable bound to an empty literal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    bindings: BTreeMap<String, Term>,
}

impl Row {
    pub fn new(bindings: BTreeMap<String, Term>) -> Self {
        Self { bindings }
    }

    /// Returns the term bound to `variable`, without the `?` sigil.
    pub fn get(&self, variable: &str) -> Option<&Term> {
        self.bindings.get(variable)
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.bindings.contains_key(variable)
    }

    /// The number of bound variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bound variables, ordered by name.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Term> {
        self.bindings.iter()
    }
}

impl FromIterator<(String, Term)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, Term)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Row {
    type Item = (String, Term);
    type IntoIter = btree_map::IntoIter<String, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a String, &'a Term);
    type IntoIter = btree_map::Iter<'a, String, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}
