use crate::alphabet::Alphabet;

/// Options controlling how patterns are compiled.
///
/// ```
/// use regdfa::{Alphabet, Config};
///
/// let config = Config::new()
///     .alphabet(Alphabet::new("ab".chars()).unwrap())
///     .dfa_state_limit(64);
/// assert_eq!(Some(64), config.get_dfa_state_limit());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Config {
    alphabet: Option<Alphabet>,
    dfa_state_limit: Option<usize>,
}

impl Config {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the alphabet. Without one, the alphabet is inferred from the ASCII alphanumeric
    /// characters of each pattern.
    #[inline]
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Fail compilation once subset construction discovers more than `limit` DFA states.
    #[inline]
    pub fn dfa_state_limit(mut self, limit: usize) -> Self {
        self.dfa_state_limit = Some(limit);
        self
    }

    #[inline]
    pub fn get_alphabet(&self) -> Option<&Alphabet> {
        self.alphabet.as_ref()
    }

    #[inline]
    pub fn get_dfa_state_limit(&self) -> Option<usize> {
        self.dfa_state_limit
    }

    /// The alphabet used for `pattern`: the declared one, or the inferred one.
    #[inline]
    pub fn alphabet_for(&self, pattern: &str) -> Alphabet {
        match &self.alphabet {
            Some(alphabet) => alphabet.clone(),
            None => Alphabet::infer(pattern),
        }
    }
}
