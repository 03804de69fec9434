use crate::error::{Malformed, Result};
use crate::token::{Operator, Postfix, PostfixToken};

use automata::{Symbol, NFA};
use log::debug;

/// Allocates fresh state ids for one compilation. Ids are handed out in increasing order and
/// never reused.
#[derive(Debug, Default)]
pub struct StateCounter {
    next: usize,
}

impl StateCounter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn fresh(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The number of ids allocated so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.next
    }
}

/// A partially built automaton with a single entry and a single exit state.
#[derive(Debug)]
pub struct Fragment {
    pub entry: usize,
    pub exit: usize,
    pub transitions: Vec<(usize, Symbol<char>, usize)>,
}

impl Fragment {
    #[inline]
    fn new(entry: usize, exit: usize) -> Self {
        Self {
            entry,
            exit,
            transitions: Vec::new(),
        }
    }

    #[inline]
    fn epsilon(&mut self, from: usize, to: usize) {
        self.transitions.push((from, Symbol::Epsilon, to));
    }

    /// Take over the transitions of an inner fragment.
    #[inline]
    fn absorb(&mut self, inner: Fragment) {
        self.transitions.extend(inner.transitions);
    }
}

/// Builds an NFA from a postfix token sequence using Thompson's construction.
#[derive(Debug, Default)]
pub struct Builder {
    counter: StateCounter,
    stack: Vec<Fragment>,
}

impl Builder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the builder, producing an NFA whose single accepting state is the exit of the
    /// final fragment.
    pub fn build(mut self, postfix: &Postfix) -> Result<NFA<char>> {
        for token in postfix.tokens() {
            match *token {
                PostfixToken::Symbol(c) => self.symbol(c),
                PostfixToken::Op(Operator::Concat) => self.concat()?,
                PostfixToken::Op(Operator::Union) => self.union()?,
                PostfixToken::Op(Operator::Star) => self.repeat(Operator::Star)?,
                PostfixToken::Op(Operator::Plus) => self.repeat(Operator::Plus)?,
            }
        }

        let count = self.stack.len();
        let fragment = match self.stack.pop() {
            Some(fragment) if count == 1 => fragment,
            _ => return Err(Malformed::Fragments { count }.into()),
        };

        let mut nfa = NFA::with_states(self.counter.count(), fragment.entry);
        nfa.accepting_states.insert(fragment.exit);
        for (from, symbol, to) in fragment.transitions {
            nfa.add_transition(from, to, symbol);
        }

        debug!(
            "built NFA with {} states and {} transition cells",
            nfa.total_states,
            nfa.transition.len()
        );
        Ok(nfa)
    }

    fn pop(&mut self, op: Operator) -> Result<Fragment> {
        self.stack.pop().ok_or_else(|| {
            Malformed::MissingOperand {
                op: op.as_char(),
            }
            .into()
        })
    }

    fn symbol(&mut self, c: char) {
        let mut fragment = Fragment::new(self.counter.fresh(), self.counter.fresh());
        fragment
            .transitions
            .push((fragment.entry, Symbol::Input(c), fragment.exit));
        self.stack.push(fragment);
    }

    fn concat(&mut self) -> Result<()> {
        let right = self.pop(Operator::Concat)?;
        let left = self.pop(Operator::Concat)?;

        let mut fragment = Fragment::new(left.entry, right.exit);
        fragment.epsilon(left.exit, right.entry);
        fragment.absorb(left);
        fragment.absorb(right);
        self.stack.push(fragment);
        Ok(())
    }

    fn union(&mut self) -> Result<()> {
        let right = self.pop(Operator::Union)?;
        let left = self.pop(Operator::Union)?;

        let mut fragment = Fragment::new(self.counter.fresh(), self.counter.fresh());
        for branch in [left, right] {
            fragment.epsilon(fragment.entry, branch.entry);
            fragment.epsilon(branch.exit, fragment.exit);
            fragment.absorb(branch);
        }
        self.stack.push(fragment);
        Ok(())
    }

    /// `*` and `+` share their wiring; only `*` may skip the inner fragment entirely.
    fn repeat(&mut self, op: Operator) -> Result<()> {
        let inner = self.pop(op)?;

        let mut fragment = Fragment::new(self.counter.fresh(), self.counter.fresh());
        fragment.epsilon(fragment.entry, inner.entry);
        if op == Operator::Star {
            fragment.epsilon(fragment.entry, fragment.exit);
        }
        fragment.epsilon(inner.exit, inner.entry);
        fragment.epsilon(inner.exit, fragment.exit);
        fragment.absorb(inner);
        self.stack.push(fragment);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Builder, StateCounter};
    use crate::alphabet::Alphabet;
    use crate::error::{Error, Malformed};
    use crate::parser::Parser;

    use automata::{Symbol, NFA};

    fn build(pattern: &str) -> NFA<char> {
        let alphabet = Alphabet::new("ab".chars()).unwrap();
        let postfix = Parser::new(&alphabet).parse(pattern).unwrap();
        Builder::new().build(&postfix).unwrap()
    }

    fn epsilon_count(nfa: &NFA<char>) -> usize {
        nfa.transition
            .iter()
            .filter(|(_, s, _)| **s == Symbol::Epsilon)
            .map(|(_, _, dests)| dests.len())
            .sum()
    }

    #[test]
    fn test_counter_is_monotonic() {
        let mut counter = StateCounter::new();
        assert_eq!(0, counter.fresh());
        assert_eq!(1, counter.fresh());
        assert_eq!(2, counter.count());
    }

    #[test]
    fn test_symbol() {
        let nfa = build("a");
        assert_eq!(2, nfa.total_states);
        assert_eq!(0, nfa.start_state);
        assert!(nfa.is_accepting_state(&1));
        assert_eq!(0, epsilon_count(&nfa));
    }

    #[test]
    fn test_state_counts() {
        // Symbols and unions/repeats each allocate two states; concatenation allocates none.
        let cases = [("ab", 4, 1), ("a|b", 6, 4), ("a*", 4, 4), ("a+", 4, 3)];
        for &(pattern, states, epsilons) in cases.iter() {
            let nfa = build(pattern);
            assert_eq!(states, nfa.total_states, "states of {:?}", pattern);
            assert_eq!(epsilons, epsilon_count(&nfa), "epsilons of {:?}", pattern);
            assert_eq!(1, nfa.accepting_states.len());
        }
    }

    #[test]
    fn test_concat_keeps_operand_order() {
        let nfa = build("ab");
        assert!(nfa.is_match("ab".chars()));
        assert!(!nfa.is_match("ba".chars()));
    }

    #[test]
    fn test_plus_requires_one() {
        let nfa = build("a+");
        assert!(!nfa.is_match("".chars()));
        assert!(nfa.is_match("a".chars()));
        assert!(nfa.is_match("aaa".chars()));
    }

    #[test]
    fn test_missing_operands() {
        let alphabet = Alphabet::new("ab".chars()).unwrap();
        let parser = Parser::new(&alphabet);

        let postfix = parser.parse("a|").unwrap();
        assert_eq!(
            Error::MalformedPattern {
                reason: Malformed::MissingOperand { op: '|' }
            },
            Builder::new().build(&postfix).unwrap_err()
        );

        let postfix = parser.parse(".b").unwrap();
        assert_eq!(
            Error::MalformedPattern {
                reason: Malformed::MissingOperand { op: '.' }
            },
            Builder::new().build(&postfix).unwrap_err()
        );
    }

    #[test]
    fn test_fragment_count() {
        let alphabet = Alphabet::new("ab".chars()).unwrap();
        let parser = Parser::new(&alphabet);

        let postfix = parser.parse("()").unwrap();
        assert_eq!(
            Error::MalformedPattern {
                reason: Malformed::Fragments { count: 0 }
            },
            Builder::new().build(&postfix).unwrap_err()
        );
    }
}
