use crate::nfa::StateSet;

use std::collections::HashMap;
use std::fmt;

/// The canonical, human-stable name of a DFA state. Labels are drawn from the sequence
/// `A, B, ..., Z, AA, AB, ..., ZZ, AAA, ...`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    /// The label at position `n` of the canonical sequence (bijective base-26).
    pub fn nth(n: usize) -> Self {
        let mut letters = Vec::new();
        let mut rest = n + 1;
        while rest > 0 {
            rest -= 1;
            letters.push((b'A' + (rest % 26) as u8) as char);
            rest /= 26;
        }

        Label(letters.into_iter().rev().collect())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Label {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Label {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Registry assigning each distinct NFA-state subset a DFA state id, in order of first
/// discovery. The id doubles as the position of the subset's [`Label`] in the canonical
/// sequence. Ids are never reassigned or reused.
#[derive(Clone, Debug, Default)]
pub struct StateNames {
    ids: HashMap<StateSet, usize>,
    subsets: Vec<StateSet>,
}

impl StateNames {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The id of an already-named subset.
    #[inline]
    pub fn get(&self, subset: &StateSet) -> Option<usize> {
        self.ids.get(subset).copied()
    }

    /// Name a subset. Returns its id and whether it was newly named; a subset seen before keeps
    /// the id it was first given.
    pub fn get_or_insert(&mut self, subset: StateSet) -> (usize, bool) {
        if let Some(id) = self.get(&subset) {
            return (id, false);
        }

        let id = self.subsets.len();
        self.subsets.push(subset.clone());
        self.ids.insert(subset, id);
        (id, true)
    }

    #[inline]
    pub fn label(&self, id: usize) -> Option<Label> {
        if id < self.subsets.len() {
            Some(Label::nth(id))
        } else {
            None
        }
    }

    #[inline]
    pub fn subset(&self, id: usize) -> Option<&StateSet> {
        self.subsets.get(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    /// Consume the registry, yielding subsets indexed by id.
    #[inline]
    pub fn into_subsets(self) -> Vec<StateSet> {
        self.subsets
    }
}
