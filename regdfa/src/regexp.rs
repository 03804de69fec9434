use crate::alphabet::Alphabet;
use crate::compiler::Compiler;
use crate::config::Config;
use crate::error::Result;

use automata::{DFA, NFA};

/// A compiled regular expression. It may be used to determine if given strings are within the
/// language described by the regular expression.
#[derive(Debug)]
pub struct RegExp<E: Engine> {
    /// The regular expression represented by this structure.
    expr: String,
    /// The alphabet the expression was compiled over.
    alphabet: Alphabet,
    /// Options carried over when the backend is converted.
    config: Config,
    /// The compiled backend of the regular expression used to evaluate input strings.
    engine: E,
}

impl<E: Engine> RegExp<E> {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.expr
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Determine if the whole input string is within the language described by the regular
    /// expression.
    #[inline]
    pub fn is_match(&self, input: &str) -> bool {
        self.engine.is_match(input)
    }
}

impl RegExp<DFA<char>> {
    /// Compile a regular expression that uses a DFA to evaluate input strings. The alphabet is
    /// inferred from the expression.
    #[inline]
    pub fn new(expr: &str) -> Result<Self> {
        Self::with_config(expr, &Config::default())
    }

    #[inline]
    pub fn with_config(expr: &str, config: &Config) -> Result<Self> {
        let alphabet = config.alphabet_for(expr);
        let config = config.clone().alphabet(alphabet.clone());
        let engine = Compiler::new(config.clone()).compile(expr)?;

        Ok(RegExp {
            expr: expr.to_owned(),
            alphabet,
            config,
            engine,
        })
    }
}

impl RegExp<NFA<char>> {
    /// Compile a regular expression that uses an NFA to evaluate input strings.
    #[inline]
    pub fn new_nfa(expr: &str) -> Result<Self> {
        Self::nfa_with_config(expr, &Config::default())
    }

    #[inline]
    pub fn nfa_with_config(expr: &str, config: &Config) -> Result<Self> {
        let alphabet = config.alphabet_for(expr);
        let config = config.clone().alphabet(alphabet.clone());
        let engine = Compiler::new(config.clone()).compile_nfa(expr)?;

        Ok(RegExp {
            expr: expr.to_owned(),
            alphabet,
            config,
            engine,
        })
    }

    /// Determinize the backing NFA, honoring the DFA state limit it was configured with.
    #[inline]
    pub fn with_dfa(self) -> Result<RegExp<DFA<char>>> {
        let compiler = Compiler::new(self.config.clone());
        let engine = compiler.determinize(&self.engine, &self.alphabet)?;
        Ok(RegExp {
            expr: self.expr,
            alphabet: self.alphabet,
            config: self.config,
            engine,
        })
    }
}

/// A trait implemented by regular expression backends, used to evaluate input strings.
pub trait Engine {
    fn is_match(&self, input: &str) -> bool;
}

impl Engine for NFA<char> {
    #[inline]
    fn is_match(&self, input: &str) -> bool {
        NFA::is_match(self, input.chars())
    }
}

impl Engine for DFA<char> {
    #[inline]
    fn is_match(&self, input: &str) -> bool {
        DFA::is_match(self, input.chars())
    }
}
