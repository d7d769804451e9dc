use crate::error::QueryRejection;

/// Characters that block a search outright. Nothing is escaped or stripped.
pub const FORBIDDEN_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

pub const SPECIAL_CHARACTERS_ALERT: &str = "Search query contains special characters!!!";

/// A trimmed, non-empty query free of forbidden characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn validate(raw: &str) -> Result<SearchQuery, QueryRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QueryRejection::Empty);
    }
    if let Some(found) = trimmed.chars().find(|c| FORBIDDEN_CHARACTERS.contains(*c)) {
        return Err(QueryRejection::ForbiddenCharacter(found));
    }
    Ok(SearchQuery(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_input_is_empty(#[case] raw: &str) {
        assert_eq!(validate(raw), Err(QueryRejection::Empty));
    }

    #[rstest]
    #[case("test!", '!')]
    #[case("me@home", '@')]
    #[case("c#", '#')]
    #[case("Dune: Messiah", ':')]
    #[case("Hello, World", ',')]
    #[case("Mr. Smith", '.')]
    #[case("why?", '?')]
    #[case("\"quoted\"", '"')]
    #[case("a|b", '|')]
    #[case("<tag>", '<')]
    #[case("{x}", '{')]
    fn forbidden_characters_are_rejected(#[case] raw: &str, #[case] expected: char) {
        assert_eq!(validate(raw), Err(QueryRejection::ForbiddenCharacter(expected)));
    }

    #[test]
    fn every_forbidden_character_rejects() {
        for c in FORBIDDEN_CHARACTERS.chars() {
            let raw = format!("harry {c} potter");
            assert!(
                matches!(validate(&raw), Err(QueryRejection::ForbiddenCharacter(_))),
                "{c} should be rejected"
            );
        }
    }

    #[rstest]
    #[case("harry potter", "harry potter")]
    #[case("  dune  ", "dune")]
    #[case("o'brien", "o'brien")]
    #[case("sci-fi", "sci-fi")]
    #[case("Città invisibili", "Città invisibili")]
    fn clean_input_is_trimmed_and_accepted(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(validate(raw).unwrap().as_str(), expected);
    }
}
