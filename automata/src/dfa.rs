use crate::naming::Label;
use crate::table::Table;

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::ops::Range;

/// A deterministic finite automaton, or DFA. Its transition function may be partial: a missing
/// transition rejects the input.
#[derive(Debug, Clone)]
pub struct DFA<T>
where
    T: Clone + Eq + Hash,
{
    /// A DFA has a single start state.
    pub start_state: usize,
    /// The number of total states in the DFA. There is a state labeled i for every i where 0 <= i
    /// < total_states.
    pub total_states: usize,
    /// The set of accepting states.
    pub accepting_states: HashSet<usize>,
    /// A lookup table for transitions between states. There is at most one destination per
    /// state and symbol.
    pub transition: Table<usize, T, usize>,

    alphabet: Vec<T>,
    labels: Vec<Label>,
}

impl<T> DFA<T>
where
    T: Clone + Eq + Hash,
{
    /// Create a new DFA over the given alphabet with a single start state named `start_label`.
    #[inline]
    pub fn new(alphabet: Vec<T>, start_label: Label, is_final: bool) -> Self {
        let mut dfa = Self {
            start_state: 0,
            total_states: 0,
            accepting_states: HashSet::new(),
            transition: Table::new(),
            alphabet,
            labels: Vec::new(),
        };
        dfa.start_state = dfa.add_state(start_label, is_final);
        dfa
    }

    #[inline]
    pub fn add_state(&mut self, label: Label, is_final: bool) -> usize {
        let state = self.total_states;
        self.total_states += 1;
        self.labels.push(label);
        if is_final {
            self.accepting_states.insert(state);
        }
        state
    }

    /// Add a transition, replacing any existing transition from `start` on `symbol`. Returns
    /// None if one or more of the states does not exist.
    #[inline]
    pub fn add_transition(&mut self, start: usize, end: usize, symbol: T) -> Option<()> {
        if !self.has_state(start) || !self.has_state(end) {
            None
        } else {
            self.transition.set(start, symbol, end);
            Some(())
        }
    }

    #[inline]
    pub fn has_state(&self, state: usize) -> bool {
        state < self.total_states
    }

    #[inline]
    pub fn states(&self) -> Range<usize> {
        0..self.total_states
    }

    /// The declared input alphabet. Epsilon is never part of it.
    #[inline]
    pub fn alphabet(&self) -> &[T] {
        &self.alphabet
    }

    #[inline]
    pub fn label(&self, state: usize) -> Option<&Label> {
        self.labels.get(state)
    }

    #[inline]
    pub fn state_by_label(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l.as_str() == label)
    }

    #[inline]
    pub fn next_state(&self, state: usize, symbol: &T) -> Option<usize> {
        self.transition.get(&state, symbol).copied()
    }

    #[inline]
    pub fn transitions_on(&self, state: &usize) -> HashMap<&T, &usize> {
        self.transition.get_row(state)
    }

    #[inline]
    pub fn is_accepting_state(&self, state: &usize) -> bool {
        self.accepting_states.contains(state)
    }
}

impl<T> DFA<T>
where
    T: Clone + Eq + Hash,
{
    /// Walk the transitions for the given input from the start state. Returns the state reached
    /// after consuming all input, or None as soon as some symbol has no transition.
    #[inline]
    pub fn run<I>(&self, input: I) -> Option<usize>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        input
            .into_iter()
            .try_fold(self.start_state, |state, is| self.next_state(state, is.borrow()))
    }

    /// Determine if the given input is accepted by the DFA.
    #[inline]
    pub fn is_match<I>(&self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        match self.run(input) {
            Some(state) => self.is_accepting_state(&state),
            None => false,
        }
    }
}
