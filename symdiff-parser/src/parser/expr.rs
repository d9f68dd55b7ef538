use crate::{
    parser::{error::{kind, Error}, Parser},
    tokenizer::{Token, TokenKind},
    tree::{Node, OpKind},
};

/// Tokens that can start an atom.
const ATOM_START: &[TokenKind] = &[
    TokenKind::OpenParen,
    TokenKind::Number,
    TokenKind::Name,
    TokenKind::Sub,
];

impl Parser<'_> {
    /// Parses operands separated by any of the given operators, folding them to the left.
    fn parse_left_assoc(
        &mut self,
        operators: &[(TokenKind, OpKind)],
        operand: fn(&mut Self) -> Result<Node, Error>,
    ) -> Result<Node, Error> {
        let mut value = operand(self)?;
        while let Some(kind) = self.peek_kind()
            .and_then(|next| operators.iter().find(|(token, _)| *token == next))
            .map(|(_, kind)| *kind)
        {
            self.next_token()?;
            let rhs = operand(self)?;
            value = Node::op(kind, value, rhs);
        }
        Ok(value)
    }

    /// `expr := term (('+' | '-') term)*`
    pub(crate) fn parse_expr(&mut self) -> Result<Node, Error> {
        self.parse_left_assoc(
            &[(TokenKind::Add, OpKind::Add), (TokenKind::Sub, OpKind::Sub)],
            Self::parse_term,
        )
    }

    /// `term := power (('*' | '/') power)*`
    fn parse_term(&mut self) -> Result<Node, Error> {
        self.parse_left_assoc(
            &[(TokenKind::Mul, OpKind::Mul), (TokenKind::Div, OpKind::Div)],
            Self::parse_power,
        )
    }

    /// `power := atom ('^' atom)*`
    fn parse_power(&mut self) -> Result<Node, Error> {
        self.parse_left_assoc(&[(TokenKind::Exp, OpKind::Pow)], Self::parse_atom)
    }

    /// `atom := '(' expr ')' | number | letter | function '(' expr ')' | '-' atom`
    fn parse_atom(&mut self) -> Result<Node, Error> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::OpenParen => self.parse_paren_rest(&token),
            TokenKind::Number => parse_number(&token, false),
            TokenKind::Name => self.parse_name(&token),
            TokenKind::Sub => match self.next_if(TokenKind::Number) {
                Some(number) => parse_number(&number, true),
                None => Ok(-self.parse_atom()?),
            },
            found => Err(Error::new(
                vec![token.span],
                kind::UnexpectedToken { expected: ATOM_START, found },
            )),
        }
    }

    /// Parses the inside of a parenthesized expression, given the opening parenthesis that was
    /// just consumed, and the closing parenthesis.
    fn parse_paren_rest(&mut self, open_paren: &Token) -> Result<Node, Error> {
        let inner = self.parse_expr()?;
        match self.next_if(TokenKind::CloseParen) {
            Some(_) => Ok(inner),
            None => Err(Error::new(
                vec![open_paren.span.clone()],
                kind::UnclosedParenthesis { opening: true },
            )),
        }
    }

    /// Parses a variable or a function call, given the name token that was just consumed.
    fn parse_name(&mut self, name: &Token) -> Result<Node, Error> {
        let lowercase = name.lexeme.to_lowercase();

        if let Some(function) = OpKind::from_function_name(&lowercase) {
            let Some(open_paren) = self.next_if(TokenKind::OpenParen) else {
                return Err(Error::new(
                    vec![name.span.clone()],
                    kind::MissingFunctionArgument {
                        name: function.function_name().unwrap_or_default(),
                    },
                ));
            };
            let argument = self.parse_paren_rest(&open_paren)?;
            return Ok(Node::unary(function, argument));
        }

        let mut chars = lowercase.chars();
        match (chars.next(), chars.next()) {
            (Some(identifier), None) => Ok(Node::variable(identifier)),
            _ => Err(Error::new(vec![name.span.clone()], kind::UnknownName { name: lowercase })),
        }
    }
}

/// Converts a number token into a constant, negated if `negative` is set.
fn parse_number(token: &Token, negative: bool) -> Result<Node, Error> {
    let invalid = || Error::new(
        vec![token.span.clone()],
        kind::InvalidNumber { lexeme: token.lexeme.to_owned() },
    );

    let value = token.lexeme.parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(Node::constant(if negative { -value } else { value }))
}
