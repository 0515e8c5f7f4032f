const SPACE_LITERAL: &str = "' '";

/// Splits on whitespace, except that the space character literal `' '`
/// stays one token.
pub fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = vec![];
    let mut rest = s.trim_start();
    while !rest.is_empty() {
        let len = if rest.starts_with(SPACE_LITERAL) {
            SPACE_LITERAL.len()
        } else {
            rest.find(char::is_whitespace).unwrap_or_else(|| rest.len())
        };
        tokens.push(&rest[..len]);
        rest = rest[len..].trim_start();
    }
    tokens
}

/// ## Operand kind
///
/// How an operand was written: `[n]` is an address, anything else a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Address,
    Literal,
}

impl Kind {
    pub fn of(token: &str) -> Kind {
        if token.starts_with('[') {
            Kind::Address
        } else {
            Kind::Literal
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::Address => write!(f, "ADDRESS"),
            Kind::Literal => write!(f, "LITERAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_literal_is_one_token() {
        assert_eq!(tokenize("APRINT ' '  HALT"), vec!["APRINT", "' '", "HALT"]);
        assert_eq!(tokenize("  MOV\t[0]   1 "), vec!["MOV", "[0]", "1"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_kind() {
        assert_eq!(Kind::of("[1]"), Kind::Address);
        assert_eq!(Kind::of("1"), Kind::Literal);
        assert_eq!(Kind::of("'a'"), Kind::Literal);
    }
}
