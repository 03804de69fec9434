//! Compiles regular expressions over a finite alphabet of alphanumeric symbols into
//! deterministic finite automata.
//!
//! Supported syntax: symbols, grouping with `(` `)`, union `|`, explicit concatenation `.`
//! (adjacency also concatenates), `*` and `+`.
//!
//! ```
//! let dfa = regdfa::compile("(a|b)*abb").unwrap();
//! assert!(dfa.is_match("aababb".chars()));
//! assert!(!dfa.is_match("abab".chars()));
//! ```
#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod compiler;
mod config;
mod error;
mod regexp;

pub mod alphabet;
pub mod parser;
pub mod thompson;
pub mod token;

pub use automata;

pub use alphabet::Alphabet;
pub use compiler::{compile, compile_with_alphabet, Compiler};
pub use config::Config;
pub use error::{Error, ErrorKind, Malformed, Result};
pub use regexp::{Engine, RegExp};
