use crate::alphabet::Alphabet;
use crate::error::{Error, Malformed, Result};
use crate::token::{Operator, Postfix, PostfixToken, Token};

use log::debug;

/// A token tagged with the char position it came from.
pub type Spanned = (usize, Token);

/// Translates infix patterns over an alphabet into postfix token sequences.
///
/// Parsing happens in three passes: tokenization against the alphabet, insertion of explicit
/// concatenation operators, and shunting-yard translation to postfix order.
#[derive(Debug)]
pub struct Parser<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Parser<'a> {
    #[inline]
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Translate a raw pattern into postfix order.
    pub fn parse(&self, pattern: &str) -> Result<Postfix> {
        if pattern.is_empty() {
            return Err(Malformed::Empty.into());
        }

        let tokens = self.tokenize(pattern)?;
        let explicit = insert_concat(&tokens)?;
        debug!("normalized {:?} to {:?}", pattern, render(&explicit));

        let postfix = to_postfix(&explicit)?;
        debug!("postfix of {:?} is {:?}", pattern, postfix.to_string());
        Ok(postfix)
    }

    /// Render the pattern with every concatenation written out as `.`.
    #[inline]
    pub fn normalize(&self, pattern: &str) -> Result<String> {
        let tokens = self.tokenize(pattern)?;
        Ok(render(&insert_concat(&tokens)?))
    }

    /// Split a pattern into tokens. Every character must be an operator, a parenthesis or a
    /// member of the alphabet.
    pub fn tokenize(&self, pattern: &str) -> Result<Vec<Spanned>> {
        pattern
            .chars()
            .enumerate()
            .map(|(pos, c)| {
                let token = match c {
                    '(' => Token::LeftParen,
                    ')' => Token::RightParen,
                    c if self.alphabet.contains(c) => Token::Symbol(c),
                    c => match Operator::from_char(c) {
                        Some(op) => Token::Op(op),
                        None => return Err(Error::UnknownSymbol { symbol: c, pos }),
                    },
                };
                Ok((pos, token))
            })
            .collect()
    }
}

/// Insert an explicit concatenation between every pair of adjacent tokens where the first ends
/// an operand (symbol, `)`, `*`, `+`) and the second begins one (symbol, `(`). Patterns that
/// are already explicit pass through unchanged.
///
/// Fails if a quantifier has no operand before it.
pub fn insert_concat(tokens: &[Spanned]) -> Result<Vec<Spanned>> {
    let mut explicit = Vec::with_capacity(tokens.len() * 2);
    let mut prev: Option<Token> = None;

    for &(pos, token) in tokens {
        if let Token::Op(op) = token {
            if op.is_unary() && !prev.map_or(false, Token::ends_operand) {
                return Err(Malformed::DanglingQuantifier {
                    op: op.as_char(),
                    pos,
                }
                .into());
            }
        }

        if let Some(prev) = prev {
            if prev.ends_operand() && token.begins_operand() {
                explicit.push((pos, Token::Op(Operator::Concat)));
            }
        }

        explicit.push((pos, token));
        prev = Some(token);
    }

    Ok(explicit)
}

/// Pending entries of the shunting-yard operator stack.
#[derive(Clone, Copy, Debug)]
enum Pending {
    Op(Operator),
    /// An open group, with the position of its `(`.
    Group(usize),
}

/// Translate explicit infix tokens to postfix order with the shunting-yard algorithm.
///
/// Binary operators are left-associative and pop operators of greater or equal precedence;
/// quantifiers are right-associative and pop only strictly greater ones.
pub fn to_postfix(tokens: &[Spanned]) -> Result<Postfix> {
    let mut output = Postfix::new();
    let mut stack: Vec<Pending> = Vec::new();

    for &(pos, token) in tokens {
        match token {
            Token::Symbol(c) => output.push(PostfixToken::Symbol(c)),
            Token::LeftParen => stack.push(Pending::Group(pos)),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Pending::Group(_)) => break,
                    Some(Pending::Op(op)) => output.push(PostfixToken::Op(op)),
                    None => return Err(Error::UnbalancedParentheses { pos }),
                }
            },
            Token::Op(op) => {
                while let Some(&Pending::Op(top)) = stack.last() {
                    let pops = if op.is_unary() {
                        top.precedence() > op.precedence()
                    } else {
                        top.precedence() >= op.precedence()
                    };
                    if !pops {
                        break;
                    }

                    stack.pop();
                    output.push(PostfixToken::Op(top));
                }
                stack.push(Pending::Op(op));
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Op(op) => output.push(PostfixToken::Op(op)),
            Pending::Group(pos) => return Err(Error::UnbalancedParentheses { pos }),
        }
    }

    Ok(output)
}

fn render(tokens: &[Spanned]) -> String {
    tokens.iter().map(|&(_, t)| t.as_char()).collect()
}
