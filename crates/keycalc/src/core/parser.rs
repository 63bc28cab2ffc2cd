//! Tokenizer and recursive-descent parser for canonical expressions
//!
//! Input is the stored expression text: no whitespace, canonical operators
//! only. Anything else is rejected with [`CalcError::EvaluationFailure`].

use crate::core::{CalcError, CalcResult, Operator};

/// Lexical token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Arithmetic operator (binary or unary sign)
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// Abstract syntax tree
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operator,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary minus
    Negate(Box<AstNode>),
}

// Long operator chains build left-leaning trees as deep as the chain is
// long. Children are detached onto a heap stack so dropping never recurses.
impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children(node: &mut AstNode, out: &mut Vec<AstNode>) {
    let take = |child: &mut Box<AstNode>| std::mem::replace(&mut **child, AstNode::Number(0.0));
    match node {
        AstNode::Number(_) => {}
        AstNode::Negate(inner) => out.push(take(inner)),
        AstNode::BinaryOp { left, right, .. } => {
            out.push(take(left));
            out.push(take(right));
        }
    }
}

impl AstNode {
    /// Creates a number node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operator, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Splits an expression into tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or `None` at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            _ => match Operator::from_symbol(ch).filter(|op| op.canonical() == ch) {
                Some(op) => {
                    self.advance();
                    Token::Operator(op)
                }
                None => return Err(CalcError::InvalidCharacter(ch)),
            },
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    // Digits with at most one dot. A second dot ends the literal and starts
    // the next one, which the parser then rejects as two adjacent numbers.
    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let literal = &self.input[start..self.pos];
        if literal == "." {
            return Err(CalcError::failure("lone decimal point"));
        }
        let value: f64 = literal
            .parse()
            .map_err(|_| CalcError::failure(format!("invalid number '{literal}'")))?;

        Ok(Token::Number(value))
    }
}

/// Recursive descent parser
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('+' | '-') unary | primary
/// primary    ::= NUMBER | '(' expression ')'
/// ```
///
/// Parentheses may nest at most [`Parser::MAX_DEPTH`] levels; deeper input
/// is an evaluation failure.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    /// Deepest parenthesis nesting accepted
    pub const MAX_DEPTH: usize = 256;

    /// Creates a parser over a token list
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Tokenizes and parses an expression string
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let tokens = Tokenizer::new(input).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into a single AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::failure("empty expression"));
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::failure(format!(
                "unexpected {token:?} at position {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(Token::Operator(op @ (Operator::Add | Operator::Subtract))) = self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;

        while let Some(Token::Operator(op @ (Operator::Multiply | Operator::Divide))) =
            self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    // A run of signs folds into at most one negation; unary plus is the
    // identity.
    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        let mut negative = false;
        while let Some(Token::Operator(op @ (Operator::Add | Operator::Subtract))) = self.current()
        {
            negative ^= *op == Operator::Subtract;
            self.advance();
        }

        let operand = self.parse_primary()?;
        Ok(if negative {
            AstNode::negate(operand)
        } else {
            operand
        })
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        let token = self
            .advance()
            .cloned()
            .ok_or_else(|| CalcError::failure("unexpected end of expression"))?;

        match token {
            Token::Number(n) => Ok(AstNode::number(n)),
            Token::LeftParen => {
                if self.depth == Self::MAX_DEPTH {
                    return Err(CalcError::failure("expression nested too deeply"));
                }
                self.depth += 1;
                let expr = self.parse_expression()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token::RightParen) => Ok(expr),
                    Some(t) => Err(CalcError::failure(format!("expected ')' but found {t:?}"))),
                    None => Err(CalcError::failure("unclosed parenthesis")),
                }
            }
            other => Err(CalcError::failure(format!("unexpected {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Tokenizer::new(input).tokenize().unwrap()
    }

    // ===== Tokenizer =====

    #[test]
    fn test_tokenize_integer() {
        assert_eq!(tokens("42"), vec![Token::Number(42.0)]);
    }

    #[test]
    fn test_tokenize_decimal_forms() {
        assert_eq!(tokens("3.25"), vec![Token::Number(3.25)]);
        assert_eq!(tokens(".5"), vec![Token::Number(0.5)]);
        assert_eq!(tokens("5."), vec![Token::Number(5.0)]);
    }

    #[test]
    fn test_tokenize_leading_zero_is_decimal() {
        assert_eq!(tokens("007"), vec![Token::Number(7.0)]);
    }

    #[test]
    fn test_tokenize_operators_and_parens() {
        assert_eq!(
            tokens("(1+2)*3/4-5"),
            vec![
                Token::LeftParen,
                Token::Number(1.0),
                Token::Operator(Operator::Add),
                Token::Number(2.0),
                Token::RightParen,
                Token::Operator(Operator::Multiply),
                Token::Number(3.0),
                Token::Operator(Operator::Divide),
                Token::Number(4.0),
                Token::Operator(Operator::Subtract),
                Token::Number(5.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_second_dot_starts_new_literal() {
        assert_eq!(tokens("1.2.3"), vec![Token::Number(1.2), Token::Number(0.3)]);
    }

    #[test]
    fn test_tokenize_rejects_presentation_glyphs() {
        let err = Tokenizer::new("2×3").tokenize().unwrap_err();
        assert_eq!(err, CalcError::InvalidCharacter('×'));
    }

    #[test]
    fn test_tokenize_rejects_whitespace() {
        let err = Tokenizer::new("2 + 3").tokenize().unwrap_err();
        assert_eq!(err, CalcError::InvalidCharacter(' '));
    }

    #[test]
    fn test_tokenize_lone_dot() {
        assert!(matches!(
            Tokenizer::new(".").tokenize(),
            Err(CalcError::EvaluationFailure(_))
        ));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokens("").is_empty());
    }

    // ===== Parser =====

    #[test]
    fn test_parse_precedence() {
        let ast = Parser::parse_str("1+2*3").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::number(1.0),
                Operator::Add,
                AstNode::binary(AstNode::number(2.0), Operator::Multiply, AstNode::number(3.0)),
            )
        );
    }

    #[test]
    fn test_parse_left_associative() {
        let ast = Parser::parse_str("8-3-2").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::binary(AstNode::number(8.0), Operator::Subtract, AstNode::number(3.0)),
                Operator::Subtract,
                AstNode::number(2.0),
            )
        );
    }

    #[test]
    fn test_parse_parentheses() {
        let ast = Parser::parse_str("(1+2)*3").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::binary(AstNode::number(1.0), Operator::Add, AstNode::number(2.0)),
                Operator::Multiply,
                AstNode::number(3.0),
            )
        );
    }

    #[test]
    fn test_parse_unary_minus() {
        assert_eq!(
            Parser::parse_str("-5").unwrap(),
            AstNode::negate(AstNode::number(5.0))
        );
        assert_eq!(
            Parser::parse_str("2*-3").unwrap(),
            AstNode::binary(
                AstNode::number(2.0),
                Operator::Multiply,
                AstNode::negate(AstNode::number(3.0)),
            )
        );
    }

    #[test]
    fn test_parse_unary_plus() {
        assert_eq!(Parser::parse_str("+5").unwrap(), AstNode::number(5.0));
    }

    #[test]
    fn test_parse_sign_runs_fold() {
        assert_eq!(Parser::parse_str("--5").unwrap(), AstNode::number(5.0));
        assert_eq!(
            Parser::parse_str("-+-+-5").unwrap(),
            AstNode::negate(AstNode::number(5.0))
        );
        let signs = "-".repeat(100_001);
        assert_eq!(
            Parser::parse_str(&format!("{signs}1")).unwrap(),
            AstNode::negate(AstNode::number(1.0))
        );
    }

    // ===== Nesting and length limits =====

    fn nested(depth: usize) -> String {
        format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn test_parse_nesting_at_limit() {
        let ast = Parser::parse_str(&nested(Parser::MAX_DEPTH)).unwrap();
        assert_eq!(ast, AstNode::number(1.0));
    }

    #[test]
    fn test_parse_nesting_over_limit() {
        let err = Parser::parse_str(&nested(Parser::MAX_DEPTH + 1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid expression: expression nested too deeply"
        );
    }

    #[test]
    fn test_parse_deep_unbalanced_nesting_fails() {
        let input = format!("{}1", "(".repeat(200_000));
        assert!(matches!(
            Parser::parse_str(&input),
            Err(CalcError::EvaluationFailure(_))
        ));
    }

    #[test]
    fn test_parse_and_drop_long_chain() {
        let input = vec!["1"; 200_000].join("+");
        let ast = Parser::parse_str(&input).unwrap();
        assert!(matches!(ast, AstNode::BinaryOp { op: Operator::Add, .. }));
        drop(ast);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            Parser::parse_str(""),
            Err(CalcError::EvaluationFailure(_))
        ));
    }

    #[test]
    fn test_parse_failures() {
        for input in ["2+", "*3", "(", "(1+2", "1+2)", "()", "5(3)", "(3)(4)", "1.2.3", "-"] {
            assert!(
                matches!(Parser::parse_str(input), Err(CalcError::EvaluationFailure(_))),
                "{input} should fail to parse"
            );
        }
    }

    #[test]
    fn test_parse_unclosed_message() {
        let err = Parser::parse_str("(1").unwrap_err();
        assert_eq!(err.to_string(), "invalid expression: unclosed parenthesis");
    }
}
