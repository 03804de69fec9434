use std::fmt;

/// A regular expression operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `.`, explicit concatenation.
    Concat,
    /// `|`
    Union,
    /// `*`, zero or more repetitions.
    Star,
    /// `+`, one or more repetitions.
    Plus,
}

impl Operator {
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Operator::Concat),
            '|' => Some(Operator::Union),
            '*' => Some(Operator::Star),
            '+' => Some(Operator::Plus),
            _ => None,
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Operator::Concat => '.',
            Operator::Union => '|',
            Operator::Star => '*',
            Operator::Plus => '+',
        }
    }

    #[inline]
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Star | Operator::Plus => 3,
            Operator::Concat => 2,
            Operator::Union => 1,
        }
    }

    /// Quantifiers are unary postfix operators; they are also the only right-associative ones.
    #[inline]
    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Star | Operator::Plus)
    }
}

/// A lexical unit of an infix pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Symbol(char),
    Op(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Token::Symbol(c) => c,
            Token::Op(op) => op.as_char(),
            Token::LeftParen => '(',
            Token::RightParen => ')',
        }
    }

    /// Whether the token can end an operand: a concatenation may follow it.
    #[inline]
    pub fn ends_operand(self) -> bool {
        matches!(
            self,
            Token::Symbol(_) | Token::RightParen | Token::Op(Operator::Star | Operator::Plus)
        )
    }

    /// Whether the token can begin an operand: a concatenation may precede it.
    #[inline]
    pub fn begins_operand(self) -> bool {
        matches!(self, Token::Symbol(_) | Token::LeftParen)
    }
}

/// A token of a postfix sequence. Parentheses never survive infix-to-postfix translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PostfixToken {
    Symbol(char),
    Op(Operator),
}

/// A pattern in postfix (reverse Polish) order, ready for Thompson construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<PostfixToken>,
}

impl Postfix {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: PostfixToken) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            let c = match *token {
                PostfixToken::Symbol(c) => c,
                PostfixToken::Op(op) => op.as_char(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Operator, Token};

    #[test]
    fn test_precedence_order() {
        assert!(Operator::Star.precedence() > Operator::Concat.precedence());
        assert_eq!(Operator::Star.precedence(), Operator::Plus.precedence());
        assert!(Operator::Concat.precedence() > Operator::Union.precedence());
    }

    #[test]
    fn test_operator_chars() {
        for c in ['.', '|', '*', '+'].iter() {
            let op = Operator::from_char(*c).unwrap();
            assert_eq!(*c, op.as_char());
        }
        assert_eq!(None, Operator::from_char('('));
        assert_eq!(None, Operator::from_char('a'));
    }

    #[test]
    fn test_operand_boundaries() {
        assert!(Token::Op(Operator::Plus).ends_operand());
        assert!(!Token::Op(Operator::Union).ends_operand());
        assert!(!Token::LeftParen.ends_operand());
        assert!(Token::LeftParen.begins_operand());
        assert!(!Token::RightParen.begins_operand());
        assert!(!Token::Op(Operator::Star).begins_operand());
    }
}
