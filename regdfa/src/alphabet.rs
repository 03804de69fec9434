use crate::error::{Error, Result};

use im::OrdSet;

/// A finite set of single ASCII alphanumeric input symbols. Iteration is in ascending order,
/// which fixes the order DFA states are discovered and labeled in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: OrdSet<char>,
}

impl Alphabet {
    /// Declare an alphabet. Fails if any symbol is not ASCII alphanumeric.
    pub fn new<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut set = OrdSet::new();
        for symbol in symbols {
            if !symbol.is_ascii_alphanumeric() {
                return Err(Error::InvalidAlphabet { symbol });
            }
            set.insert(symbol);
        }

        Ok(Self { symbols: set })
    }

    /// The ASCII alphanumeric characters occurring in `pattern`.
    #[inline]
    pub fn infer(pattern: &str) -> Self {
        Self {
            symbols: pattern.chars().filter(char::is_ascii_alphanumeric).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    #[inline]
    pub fn to_vec(&self) -> Vec<char> {
        self.iter().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
