use crate::dfa::DFA;
use crate::naming::{Label, StateNames};
use crate::nfa::{StateSet, NFA};

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use log::{debug, trace};

/// Error returned when determinization cannot complete.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Subset construction discovered more DFA states than allowed.
    #[error("subset construction exceeded the limit of {limit} DFA states")]
    StateLimitExceeded { limit: usize },
}

/// A DFA together with the NFA-state subset each of its states was built from.
#[derive(Debug)]
pub struct DFAFromNFA<T>
where
    T: Clone + Eq + Hash,
{
    pub dfa: DFA<T>,
    pub nfa_mapping: HashMap<usize, StateSet>,
}

impl<T> DFAFromNFA<T>
where
    T: Clone + Eq + Hash,
{
    /// Create an equivalent DFA from an NFA using the subset construction. Only the symbols of
    /// `alphabet` are explored, in the order given; DFA states are named in order of discovery,
    /// starting with the epsilon-closure of the NFA start state.
    ///
    /// A subset with no successor on some symbol gets no transition for it, so the resulting
    /// transition function is partial.
    #[inline]
    pub fn new(nfa: &NFA<T>, alphabet: &[T]) -> Self {
        match Self::with_limit(nfa, alphabet, None) {
            Ok(converted) => converted,
            Err(ConvertError::StateLimitExceeded { .. }) => unreachable!("no state limit was set"),
        }
    }

    /// Like [`DFAFromNFA::new`], but fail once more than `limit` DFA states are discovered.
    pub fn with_limit(
        nfa: &NFA<T>,
        alphabet: &[T],
        limit: Option<usize>,
    ) -> Result<Self, ConvertError> {
        let mut names = StateNames::new();
        let check_limit = |names: &StateNames| match limit {
            Some(limit) if names.len() > limit => Err(ConvertError::StateLimitExceeded { limit }),
            _ => Ok(()),
        };

        let initial = nfa.epsilon_closure(nfa.start_state);
        let is_final = nfa.accepts_any(&initial);
        let (start_id, _) = names.get_or_insert(initial);
        check_limit(&names)?;
        let mut dfa = DFA::new(alphabet.to_vec(), Label::nth(start_id), is_final);
        debug_assert_eq!(start_id, dfa.start_state);

        let mut unmarked = VecDeque::new();
        unmarked.push_back(start_id);

        while let Some(id) = unmarked.pop_front() {
            let current = match names.subset(id) {
                Some(subset) => subset.clone(),
                None => unreachable!("unmarked DFA state {} was never named", id),
            };

            for symbol in alphabet {
                let moved = nfa.move_set(&current, symbol);
                if moved.is_empty() {
                    continue;
                }

                let closure = nfa.epsilon_closure_set(&moved);
                let is_final = nfa.accepts_any(&closure);
                let (target, is_new) = names.get_or_insert(closure);

                if is_new {
                    check_limit(&names)?;

                    let label = Label::nth(target);
                    trace!("discovered DFA state {} from {:?}", label, names.subset(target));

                    let state = dfa.add_state(label, is_final);
                    debug_assert_eq!(target, state);
                    unmarked.push_back(target);
                }

                dfa.add_transition(id, target, symbol.clone());
            }
        }

        debug!(
            "subset construction: {} NFA states -> {} DFA states",
            nfa.total_states, dfa.total_states
        );

        let nfa_mapping = names.into_subsets().into_iter().enumerate().collect();
        Ok(Self { dfa, nfa_mapping })
    }
}

impl<T> From<DFAFromNFA<T>> for DFA<T>
where
    T: Clone + Eq + Hash,
{
    #[inline]
    fn from(dfa_from_nfa: DFAFromNFA<T>) -> Self {
        dfa_from_nfa.dfa
    }
}

impl<T> From<NFA<T>> for DFA<T>
where
    T: Clone + Eq + Hash + Ord,
{
    /// Determinize over the symbols that label the NFA's transitions, in ascending order.
    #[inline]
    fn from(nfa: NFA<T>) -> Self {
        let mut alphabet: Vec<T> = nfa.alphabet().into_iter().collect();
        alphabet.sort();
        DFAFromNFA::new(&nfa, &alphabet).into()
    }
}

#[cfg(test)]
mod tests {
    use super::{ConvertError, DFAFromNFA};
    use crate::dfa::DFA;
    use crate::nfa::NFA;

    use im::ordset;

    // (a|b)*abb, hand-wired with the classical Thompson numbering.
    fn dragon_book() -> NFA<char> {
        let mut n = NFA::with_states(11, 0);
        n.accepting_states.insert(10);
        for &(from, to) in [(0, 1), (0, 7), (1, 2), (1, 4), (3, 6), (5, 6), (6, 1), (6, 7)].iter()
        {
            n.add_epsilon_transition(from, to);
        }
        n.add_labeled_transition(2, 3, 'a');
        n.add_labeled_transition(4, 5, 'b');
        n.add_labeled_transition(7, 8, 'a');
        n.add_labeled_transition(8, 9, 'b');
        n.add_labeled_transition(9, 10, 'b');
        n
    }

    #[test]
    fn test_dragon_book_subsets() {
        let nfa = dragon_book();
        let converted = DFAFromNFA::new(&nfa, &['a', 'b']);
        let dfa = &converted.dfa;

        assert_eq!(5, dfa.total_states);
        assert_eq!(
            ordset![0, 1, 2, 4, 7],
            converted.nfa_mapping[&dfa.start_state]
        );
        assert_eq!("A", dfa.label(dfa.start_state).unwrap().as_str());

        let b = dfa.next_state(0, &'a').unwrap();
        assert_eq!(ordset![1, 2, 3, 4, 6, 7, 8], converted.nfa_mapping[&b]);
        let c = dfa.next_state(0, &'b').unwrap();
        assert_eq!(ordset![1, 2, 4, 5, 6, 7], converted.nfa_mapping[&c]);

        assert_eq!(1, dfa.accepting_states.len());
        assert!(dfa.is_match("abb".chars()));
        assert!(dfa.is_match("babaabb".chars()));
        assert!(!dfa.is_match("abab".chars()));
    }

    #[test]
    fn test_partial_transitions() {
        let mut nfa: NFA<char> = NFA::new();
        let s1 = nfa.add_state(true);
        nfa.add_labeled_transition(0, s1, 'a');

        let dfa: DFA<char> = DFAFromNFA::new(&nfa, &['a', 'b']).into();
        assert_eq!(2, dfa.total_states);
        assert_eq!(None, dfa.next_state(0, &'b'));
        assert!(dfa.transitions_on(&1).is_empty());
        assert!(dfa.is_match("a".chars()));
        assert!(!dfa.is_match("b".chars()));
    }

    #[test]
    fn test_state_limit() {
        let nfa = dragon_book();
        assert_eq!(
            ConvertError::StateLimitExceeded { limit: 3 },
            DFAFromNFA::with_limit(&nfa, &['a', 'b'], Some(3)).unwrap_err()
        );
        assert!(DFAFromNFA::with_limit(&nfa, &['a', 'b'], Some(5)).is_ok());
    }

    #[test]
    fn test_state_limit_counts_start() {
        let nfa: NFA<char> = NFA::new();
        assert_eq!(
            ConvertError::StateLimitExceeded { limit: 0 },
            DFAFromNFA::with_limit(&nfa, &['a'], Some(0)).unwrap_err()
        );

        let converted = DFAFromNFA::with_limit(&nfa, &['a'], Some(1)).unwrap();
        assert_eq!(1, converted.dfa.total_states);
    }

    #[test]
    fn test_from_nfa_infers_alphabet() {
        let dfa: DFA<char> = dragon_book().into();
        assert_eq!(&['a', 'b'], dfa.alphabet());
        assert!(dfa.is_match("aabb".chars()));
    }
}
