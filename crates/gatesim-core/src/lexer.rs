//! Character-level tokenizer for expression text.

use crate::token::Token;

/// Split an expression into tokens.
///
/// Whitespace is dropped without ending the current identifier, so
/// `"in 1"` reads as the single identifier `in1`. Identifier contents are
/// not validated here.
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut ident = String::new();

    for ch in expression.chars() {
        if ch.is_whitespace() {
            continue;
        }
        match Token::from_delimiter(ch) {
            Some(token) => {
                flush(&mut ident, &mut tokens);
                tokens.push(token);
            }
            None => ident.push(ch),
        }
    }
    flush(&mut ident, &mut tokens);

    tokens
}

fn flush(ident: &mut String, tokens: &mut Vec<Token>) {
    if !ident.is_empty() {
        tokens.push(Token::Var(std::mem::take(ident)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Operator;

    fn var(name: &str) -> Token {
        Token::Var(name.to_string())
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t ").is_empty());
    }

    #[test]
    fn test_binary_expression() {
        assert_eq!(
            tokenize("a & b"),
            vec![var("a"), Token::Op(Operator::And), var("b")]
        );
    }

    #[test]
    fn test_delimiters_flush_identifier() {
        assert_eq!(
            tokenize("!(x1|y2)&z"),
            vec![
                Token::Op(Operator::Not),
                Token::LParen,
                var("x1"),
                Token::Op(Operator::Or),
                var("y2"),
                Token::RParen,
                Token::Op(Operator::And),
                var("z"),
            ]
        );
    }

    #[test]
    fn test_whitespace_does_not_split_identifier() {
        assert_eq!(tokenize("in 1 & b"), vec![var("in1"), Token::Op(Operator::And), var("b")]);
    }

    #[test]
    fn test_identifier_contents_not_validated() {
        assert_eq!(tokenize("9$ | _"), vec![var("9$"), Token::Op(Operator::Or), var("_")]);
    }

    #[test]
    fn test_adjacent_delimiters() {
        assert_eq!(
            tokenize("(())"),
            vec![Token::LParen, Token::LParen, Token::RParen, Token::RParen]
        );
    }
}
