use crate::table::Table;

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::ops::Range;

use im::OrdSet;

/// A set of NFA states. Equality and hashing depend only on the contained states, never on
/// the order in which they were inserted.
pub type StateSet = OrdSet<usize>;

/// A non-deterministic finite automaton, or NFA.
#[derive(Clone, Debug)]
pub struct NFA<T: Clone + Eq + Hash> {
    /// An NFA has a single start state.
    pub start_state: usize,
    /// The number of total states in the NFA. There is a state labeled i for every i where 0 <= i
    /// < total_states.
    pub total_states: usize,
    /// The set of accepting states.
    pub accepting_states: HashSet<usize>,
    /// A lookup table for transitions between states.
    pub transition: Table<usize, Symbol<T>, HashSet<usize>>,
}

/// The label of an NFA transition.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Symbol<T: Clone + Eq + Hash> {
    /// A transition that consumes the given input symbol.
    Input(T),
    /// An epsilon transition allows the NFA to change its state spontaneously without consuming an
    /// input symbol. It can never collide with an input symbol.
    Epsilon,
}

impl<T> From<T> for Symbol<T>
where
    T: Clone + Eq + Hash,
{
    #[inline]
    fn from(t: T) -> Self {
        Symbol::Input(t)
    }
}

impl<T> NFA<T>
where
    T: Clone + Eq + Hash,
{
    /// Create a new NFA with a single start state.
    #[allow(clippy::new_without_default)]
    #[inline]
    pub fn new() -> Self {
        Self::with_states(1, 0)
    }

    /// Create an NFA with `total_states` states, labeled `0..total_states`, and no transitions
    /// or accepting states.
    #[inline]
    pub fn with_states(total_states: usize, start_state: usize) -> Self {
        debug_assert!(start_state < total_states);
        NFA {
            start_state,
            total_states,
            accepting_states: HashSet::new(),
            transition: Table::new(),
        }
    }

    /// Add a state to the NFA. The label of the state is returned. The total number of states is
    /// always greater than the label of the newest state by 1.
    #[inline]
    pub fn add_state(&mut self, is_final: bool) -> usize {
        let label = self.total_states;
        if is_final {
            self.accepting_states.insert(label);
        }

        self.total_states += 1;
        label
    }

    /// Add a transition. Returns None if one or more of the states does not exist.
    #[inline]
    pub fn add_transition(&mut self, start: usize, end: usize, label: Symbol<T>) -> Option<()> {
        if !self.has_state(start) || !self.has_state(end) {
            return None;
        }

        self.transition
            .get_or_insert_with(start, label, HashSet::new)
            .insert(end);
        Some(())
    }

    /// Add a non-epsilon transition. See [`NFA::add_transition`].
    #[inline]
    pub fn add_labeled_transition(&mut self, start: usize, end: usize, label: T) -> Option<()> {
        self.add_transition(start, end, Symbol::Input(label))
    }

    /// Add an epsilon transition. See [`NFA::add_transition`].
    #[inline]
    pub fn add_epsilon_transition(&mut self, start: usize, end: usize) -> Option<()> {
        self.add_transition(start, end, Symbol::Epsilon)
    }

    #[inline]
    pub fn has_state(&self, state: usize) -> bool {
        state < self.total_states
    }

    #[inline]
    pub fn states(&self) -> Range<usize> {
        0..self.total_states
    }

    #[inline]
    pub fn is_accepting_state(&self, label: &usize) -> bool {
        self.accepting_states.contains(label)
    }

    /// Returns true if any state of the set is accepting.
    #[inline]
    pub fn accepts_any(&self, states: &StateSet) -> bool {
        states.iter().any(|s| self.is_accepting_state(s))
    }

    /// Returns the transitions and destinations from a specific state.
    #[inline]
    pub fn transitions_from(&self, state: usize) -> HashMap<&Symbol<T>, &HashSet<usize>> {
        self.transition.get_row(&state)
    }

    /// The distinct non-epsilon symbols that label at least one transition.
    #[inline]
    pub fn alphabet(&self) -> HashSet<T> {
        self.transition
            .iter()
            .filter_map(|(_, label, _)| match label {
                Symbol::Input(t) => Some(t.clone()),
                Symbol::Epsilon => None,
            })
            .collect()
    }

    /// The set of states directly reachable from any state in `state_set` on a transition
    /// labeled with `input`. Epsilon transitions are not followed.
    #[inline]
    pub fn move_set(&self, state_set: &StateSet, input: &T) -> StateSet {
        let label = Symbol::Input(input.clone());
        state_set
            .iter()
            .filter_map(|state| self.transition.get(state, &label))
            .flat_map(|dests| dests.iter().copied())
            .collect()
    }

    /// Determines if the given input is accepted by the NFA, i.e. if some run consumes the
    /// whole input and ends in an accepting state.
    #[inline]
    pub fn is_match<I>(&self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut state_set = self.epsilon_closure(self.start_state);

        for is in input {
            if state_set.is_empty() {
                return false;
            }

            let moved_set = self.move_set(&state_set, is.borrow());
            state_set = self.epsilon_closure_set(&moved_set);
        }

        self.accepts_any(&state_set)
    }
}
