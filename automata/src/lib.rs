//! Finite automata over an arbitrary symbol type, and the subset construction turning an NFA
//! into an equivalent DFA.
#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod closure;

pub mod convert;
pub mod dfa;
pub mod naming;
pub mod nfa;
pub mod table;

pub use convert::{ConvertError, DFAFromNFA};
pub use dfa::DFA;
pub use naming::{Label, StateNames};
pub use nfa::{StateSet, Symbol, NFA};
