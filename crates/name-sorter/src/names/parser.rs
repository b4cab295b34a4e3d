/// Most given names a single person may carry.
pub const MAX_GIVEN_NAMES: usize = 3;

const MIN_TOKENS: usize = 2;
const MAX_TOKENS: usize = MAX_GIVEN_NAMES + 1;

/// A raw name split into its last name and ordered given names.
///
/// Both parts keep the casing of the input. A `ParsedName` always holds
/// between one and [`MAX_GIVEN_NAMES`] given names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    last_name: String,
    given_names: Vec<String>,
}

impl ParsedName {
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn given_names(&self) -> &[String] {
        &self.given_names
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameFormatError {
    #[error("invalid name format: '{raw}' must have at least 1 given name and 1 last name")]
    MissingGivenName { raw: String },
    #[error("invalid name format: '{raw}' cannot have more than 3 given names")]
    TooManyGivenNames { raw: String },
}

impl NameFormatError {
    /// The input string that failed to parse, exactly as supplied.
    pub fn raw(&self) -> &str {
        match self {
            Self::MissingGivenName { raw } | Self::TooManyGivenNames { raw } => raw,
        }
    }
}

/// Splits `raw` on whitespace runs; the final token is the last name.
pub fn parse(raw: &str) -> Result<ParsedName, NameFormatError> {
    let mut tokens: Vec<String> = raw.split_whitespace().map(str::to_owned).collect();

    if tokens.len() < MIN_TOKENS {
        return Err(NameFormatError::MissingGivenName {
            raw: raw.to_owned(),
        });
    }
    if tokens.len() > MAX_TOKENS {
        return Err(NameFormatError::TooManyGivenNames {
            raw: raw.to_owned(),
        });
    }

    // len >= MIN_TOKENS, so there is always a last token.
    let last_name = tokens.pop().unwrap_or_default();

    Ok(ParsedName {
        last_name,
        given_names: tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_last_name_from_given_names() {
        let parsed = parse("John Michael Smith").expect("two given names parse");
        assert_eq!(parsed.last_name(), "Smith");
        assert_eq!(parsed.given_names(), ["John", "Michael"]);
    }

    #[test]
    fn accepts_one_to_three_given_names() {
        for (raw, given) in [
            ("John Smith", 1),
            ("John Michael Smith", 2),
            ("John Michael David Smith", 3),
        ] {
            let parsed = parse(raw).expect("valid arity parses");
            assert_eq!(parsed.given_names().len(), given, "given names for '{raw}'");
            assert_eq!(parsed.last_name(), "Smith");
        }
    }

    #[test]
    fn collapses_surrounding_and_interior_whitespace() {
        let parsed = parse("  John   Smith  ").expect("padded name parses");
        assert_eq!(parsed.last_name(), "Smith");
        assert_eq!(parsed.given_names(), ["John"]);

        let tabbed = parse("Ada\t\tKing").expect("tab separated name parses");
        assert_eq!(tabbed.given_names(), ["Ada"]);
        assert_eq!(tabbed.last_name(), "King");
    }

    #[test]
    fn rejects_names_without_given_name() {
        for raw in ["Smith", "", "   "] {
            let err = parse(raw).expect_err("single token is rejected");
            assert!(matches!(err, NameFormatError::MissingGivenName { .. }));
            assert_eq!(err.raw(), raw);
        }
    }

    #[test]
    fn rejects_more_than_three_given_names() {
        let err = parse("John Michael David Robert Smith").expect_err("five tokens rejected");
        assert!(matches!(err, NameFormatError::TooManyGivenNames { .. }));
        assert!(err.to_string().contains("John Michael David Robert Smith"));
        assert!(err.to_string().contains("more than 3 given names"));
    }

    #[test]
    fn keeps_punctuated_tokens_verbatim() {
        let parsed = parse("Martin Luther King Jr.").expect("four tokens parse");
        assert_eq!(parsed.last_name(), "Jr.");
        assert_eq!(parsed.given_names(), ["Martin", "Luther", "King"]);
    }
}
