//! The validated city name handed from the search screen to the results screen.

use std::fmt;

use thiserror::Error;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Returned when the user submits a blank or whitespace-only city name.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Please enter a city name")]
pub struct EmptyQuery;

/// A non-empty, trimmed city name.
///
/// The only way to obtain a `Query` is [`Query::new`], so holding one proves the
/// input passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Trims `input` and wraps it, rejecting the empty result.
    ///
    /// A byte order mark counts as whitespace here, so a pasted BOM on its own
    /// is still blank.
    ///
    /// # Examples
    /// ```
    /// let query = api::Query::new("  London ").unwrap();
    /// assert_eq!(query.as_str(), "London");
    /// assert!(api::Query::new(" \t ").is_err());
    /// ```
    pub fn new(input: &str) -> Result<Self, EmptyQuery> {
        let trimmed = input.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
        if trimmed.is_empty() {
            return Err(EmptyQuery);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let query = Query::new("\t  San Francisco \n").unwrap();
        assert_eq!(query.as_str(), "San Francisco");
        assert_eq!(query.to_string(), "San Francisco");
    }

    #[test]
    fn keeps_inner_whitespace() {
        let query = Query::new("New   York").unwrap();
        assert_eq!(query.as_str(), "New   York");
    }

    #[test]
    fn rejects_empty_and_blank_input() {
        for input in ["", " ", "   ", "\t\n", "\u{3000}"] {
            assert_eq!(Query::new(input), Err(EmptyQuery), "input {input:?}");
        }
    }

    #[test]
    fn byte_order_mark_is_trimmed() {
        assert_eq!(Query::new("\u{FEFF}"), Err(EmptyQuery));
        assert_eq!(Query::new(" \u{FEFF}\t"), Err(EmptyQuery));

        let query = Query::new("\u{FEFF}Berlin ").unwrap();
        assert_eq!(query.as_str(), "Berlin");
    }

    #[test]
    fn empty_query_message_is_user_facing() {
        assert_eq!(EmptyQuery.to_string(), "Please enter a city name");
    }
}
