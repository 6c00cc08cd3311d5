// Copyright 2026 the Choro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selectable attributes.

use hashbrown::HashSet;
use thiserror::Error;

/// Errors raised when building or selecting attributes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// An attribute set must name at least one attribute.
    #[error("attribute list is empty")]
    Empty,
    /// Each attribute may appear once.
    #[error("attribute {0:?} is listed more than once")]
    Duplicate(String),
    /// The attribute is not part of the set.
    #[error("unknown attribute {0:?}")]
    Unknown(String),
}

fn first_duplicate(names: &[String]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(names.len());
    names
        .iter()
        .map(String::as_str)
        .find(|name| !seen.insert(*name))
}

/// A fixed, ordered, non-empty list of attribute names.
///
/// The first attribute is the default selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeSet {
    names: Vec<String>,
}

impl AttributeSet {
    /// Builds a set from names in display order.
    pub fn new<I, S>(names: I) -> Result<Self, AttributeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(AttributeError::Empty);
        }
        if let Some(dup) = first_duplicate(&names) {
            return Err(AttributeError::Duplicate(dup.to_owned()));
        }
        Ok(Self { names })
    }

    /// Number of attributes. Never zero.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the position of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Returns `true` if `name` is part of the set.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the attribute at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Iterates over names in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// The attribute set plus the currently active attribute.
#[derive(Clone, Debug)]
pub struct AttributeStore {
    set: AttributeSet,
    active: usize,
}

impl AttributeStore {
    /// Creates a store with the first attribute active.
    pub fn new(set: AttributeSet) -> Self {
        Self { set, active: 0 }
    }

    /// The selectable attributes.
    pub fn attributes(&self) -> &AttributeSet {
        &self.set
    }

    /// Name of the active attribute.
    pub fn active(&self) -> &str {
        &self.set.names[self.active]
    }

    /// Index of the active attribute.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Makes `name` the active attribute. Unknown names leave the store unchanged.
    pub fn select(&mut self, name: &str) -> Result<(), AttributeError> {
        let index = self
            .set
            .position(name)
            .ok_or_else(|| AttributeError::Unknown(name.to_owned()))?;
        self.active = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_attribute_is_active_by_default() {
        let set = AttributeSet::new(["2015", "2016", "2017"]).unwrap();
        let store = AttributeStore::new(set);
        assert_eq!(store.active(), "2015");
        assert_eq!(store.active_index(), 0);
    }

    #[test]
    fn empty_and_duplicate_sets_are_rejected() {
        assert_eq!(
            AttributeSet::new(Vec::<String>::new()),
            Err(AttributeError::Empty)
        );
        assert_eq!(
            AttributeSet::new(["2015", "2016", "2015"]),
            Err(AttributeError::Duplicate("2015".into()))
        );
    }

    #[test]
    fn unique_names_keep_their_order() {
        let set = AttributeSet::new(vec![String::from("2017"), "2015".into(), "2016".into()])
            .unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), ["2017", "2015", "2016"]);
        assert_eq!(set.position("2016"), Some(2));
        assert_eq!(
            AttributeSet::new(["a", "b", "b", "a"]),
            Err(AttributeError::Duplicate("b".into()))
        );
    }

    #[test]
    fn selecting_unknown_attribute_keeps_state() {
        let mut store = AttributeStore::new(AttributeSet::new(["2015", "2016"]).unwrap());
        store.select("2016").unwrap();
        assert_eq!(store.active(), "2016");
        assert!(store.select("1999").is_err());
        assert_eq!(store.active(), "2016");
    }
}
