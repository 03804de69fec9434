use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::error::Result;
use crate::parser::Parser;
use crate::thompson::Builder;
use crate::token::Postfix;

use automata::{DFAFromNFA, DFA, NFA};
use log::debug;

/// Compile a pattern into a DFA, inferring the alphabet from the pattern.
#[inline]
pub fn compile(pattern: &str) -> Result<DFA<char>> {
    Compiler::default().compile(pattern)
}

/// Compile a pattern over a declared alphabet.
#[inline]
pub fn compile_with_alphabet(pattern: &str, alphabet: Alphabet) -> Result<DFA<char>> {
    Compiler::new(Config::new().alphabet(alphabet)).compile(pattern)
}

/// Runs the compilation pipeline: pattern → postfix → NFA → DFA. Every call owns its own
/// state counter and naming registry, so one compiler may be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    config: Config,
}

impl Compiler {
    #[inline]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn compile(&self, pattern: &str) -> Result<DFA<char>> {
        let alphabet = self.config.alphabet_for(pattern);
        let nfa = self.compile_nfa_over(pattern, &alphabet)?;
        self.determinize(&nfa, &alphabet)
    }

    /// Compile only as far as the Thompson NFA.
    #[inline]
    pub fn compile_nfa(&self, pattern: &str) -> Result<NFA<char>> {
        let alphabet = self.config.alphabet_for(pattern);
        self.compile_nfa_over(pattern, &alphabet)
    }

    #[inline]
    pub fn postfix(&self, pattern: &str) -> Result<Postfix> {
        let alphabet = self.config.alphabet_for(pattern);
        Parser::new(&alphabet).parse(pattern)
    }

    /// Determinize an NFA over `alphabet`, honoring the configured state limit. The result
    /// owns its tables; the NFA may be dropped afterwards.
    pub fn determinize(&self, nfa: &NFA<char>, alphabet: &Alphabet) -> Result<DFA<char>> {
        let symbols = alphabet.to_vec();
        let converted =
            DFAFromNFA::with_limit(nfa, &symbols, self.config.get_dfa_state_limit())?;

        debug!(
            "DFA has {} states, {} accepting",
            converted.dfa.total_states,
            converted.dfa.accepting_states.len()
        );
        Ok(converted.into())
    }

    fn compile_nfa_over(&self, pattern: &str, alphabet: &Alphabet) -> Result<NFA<char>> {
        let postfix = Parser::new(alphabet).parse(pattern)?;
        Builder::new().build(&postfix)
    }
}
