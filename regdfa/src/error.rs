use automata::ConvertError;

/// Alias for [`Result`] for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned when a pattern cannot be compiled. Positions are zero-based character
/// offsets into the raw pattern.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `)` has no matching `(`, or a `(` is never closed.
    #[error("unbalanced parentheses at position {pos}")]
    UnbalancedParentheses { pos: usize },
    /// The pattern does not form a single well-formed expression.
    #[error("malformed pattern: {reason}")]
    MalformedPattern { reason: Malformed },
    /// A character that is neither an operator nor part of the alphabet.
    #[error("unknown symbol {symbol:?} at position {pos}")]
    UnknownSymbol { symbol: char, pos: usize },
    /// A declared alphabet contains something other than a single ASCII alphanumeric character.
    #[error("alphabet symbol {symbol:?} is not ASCII alphanumeric")]
    InvalidAlphabet { symbol: char },
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Why a pattern was rejected as malformed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    #[error("empty pattern")]
    Empty,
    /// `*` or `+` with nothing to repeat.
    #[error("{op:?} at position {pos} has no preceding operand")]
    DanglingQuantifier { op: char, pos: usize },
    /// An operator popped more operands than were available.
    #[error("{op:?} is missing an operand")]
    MissingOperand { op: char },
    /// Construction did not reduce to exactly one automaton fragment.
    #[error("expected a single expression, found {count}")]
    Fragments { count: usize },
}

/// The kind of an [`Error`], without its details.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnbalancedParentheses,
    MalformedPattern,
    UnknownSymbol,
    InvalidAlphabet,
    StateLimitExceeded,
}

impl Error {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnbalancedParentheses { .. } => ErrorKind::UnbalancedParentheses,
            Error::MalformedPattern { .. } => ErrorKind::MalformedPattern,
            Error::UnknownSymbol { .. } => ErrorKind::UnknownSymbol,
            Error::InvalidAlphabet { .. } => ErrorKind::InvalidAlphabet,
            Error::Convert(ConvertError::StateLimitExceeded { .. }) => {
                ErrorKind::StateLimitExceeded
            }
        }
    }
}

impl From<Malformed> for Error {
    #[inline]
    fn from(reason: Malformed) -> Self {
        Error::MalformedPattern { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind, Malformed};
    use automata::ConvertError;

    #[test]
    fn test_messages() {
        let err = Error::UnknownSymbol { symbol: ' ', pos: 3 };
        assert_eq!("unknown symbol ' ' at position 3", err.to_string());

        let err: Error = Malformed::DanglingQuantifier { op: '*', pos: 0 }.into();
        assert_eq!(
            "malformed pattern: '*' at position 0 has no preceding operand",
            err.to_string()
        );
    }

    #[test]
    fn test_kinds() {
        let err: Error = ConvertError::StateLimitExceeded { limit: 1 }.into();
        assert_eq!(ErrorKind::StateLimitExceeded, err.kind());
        assert_eq!(
            ErrorKind::MalformedPattern,
            Error::from(Malformed::Empty).kind()
        );
    }
}
