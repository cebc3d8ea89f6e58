//! Parsing declaration blocks back into property/value pairs.
//!
//! Resolver output is plain text meant to be dropped into a rule body. This
//! module reads such a block with `cssparser` (the tokenizer used by
//! Firefox), which lets hosts and tests check that a block is well-formed
//! and inspect it without string matching.
//!
//! ```rust
//! use flexstyle::parse_declarations;
//!
//! let pairs = parse_declarations("display: flex;\ngap: var(--gap-size-2);").unwrap();
//! assert_eq!(pairs[1].property, "gap");
//! assert_eq!(pairs[1].value, "var(--gap-size-2)");
//!
//! assert!(parse_declarations("display flex;").is_err());
//! ```

use std::fmt;

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

use crate::error::DeclarationError;

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    /// The value as written, without surrounding whitespace.
    pub value: String,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Parses a declaration block (no selector, no braces).
///
/// # Errors
///
/// Returns [`DeclarationError::Syntax`] for the first malformed declaration,
/// with its 1-based line number.
pub fn parse_declarations(css: &str) -> Result<Vec<Declaration>, DeclarationError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut collector = DeclarationCollector;

    let mut declarations = Vec::new();
    for result in RuleBodyParser::new(&mut parser, &mut collector) {
        match result {
            Ok(declaration) => declarations.push(declaration),
            Err((error, source)) => {
                return Err(DeclarationError::Syntax {
                    line: error.location.line + 1,
                    message: format!("{:?} in '{}'", error.kind, source.trim()),
                });
            }
        }
    }

    Ok(declarations)
}

struct DeclarationCollector;

impl<'i> DeclarationParser<'i> for DeclarationCollector {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next().is_ok() {}

        let value = input.slice_from(start).trim();
        if value.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }

        Ok(Declaration {
            property: name.as_ref().to_string(),
            value: value.to_string(),
        })
    }
}

impl<'i> AtRuleParser<'i> for DeclarationCollector {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationCollector {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Declaration, ()> for DeclarationCollector {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}
