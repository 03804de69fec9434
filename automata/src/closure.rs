use crate::nfa::{StateSet, Symbol, NFA};

use std::hash::Hash;

impl<T> NFA<T>
where
    T: Clone + Eq + Hash,
{
    /// Computes the epsilon-closure of a single state: every state reachable from it on epsilon
    /// transitions only, including the state itself.
    #[inline]
    pub fn epsilon_closure(&self, state: usize) -> StateSet {
        self.epsilon_closure_set(&StateSet::unit(state))
    }

    /// Computes the epsilon-closure of a set of states: the smallest superset of `seeds` that is
    /// closed under epsilon transitions. Each state is pushed onto the worklist at most once,
    /// so this terminates on cyclic epsilon paths.
    pub fn epsilon_closure_set(&self, seeds: &StateSet) -> StateSet {
        let mut closure = seeds.clone();
        let mut worklist: Vec<usize> = seeds.iter().copied().collect();

        while let Some(state) = worklist.pop() {
            let dests = match self.transition.get(&state, &Symbol::Epsilon) {
                Some(dests) => dests,
                None => continue,
            };

            for &next in dests {
                if !closure.contains(&next) {
                    closure.insert(next);
                    worklist.push(next);
                }
            }
        }

        closure
    }
}
