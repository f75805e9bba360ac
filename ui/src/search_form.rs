//! State behind the search screen's form.

use api::Query;

/// The draft city name and its validation message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchForm {
    draft: String,
    error: Option<String>,
}

impl SearchForm {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The validation message, if the last submit was rejected and the field
    /// has not been edited since.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the draft. A shown error disappears on the first edit and is
    /// not re-checked until the next submit.
    pub fn edit(&mut self, text: String) {
        self.draft = text;
        if self.error.is_some() {
            self.error = None;
        }
    }

    /// Validates the draft. Returns the query to navigate with, or `None` after
    /// recording the validation message.
    pub fn submit(&mut self) -> Option<Query> {
        match Query::new(&self.draft) {
            Ok(query) => {
                self.error = None;
                Some(query)
            }
            Err(empty) => {
                self.error = Some(empty.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(text: &str) -> SearchForm {
        let mut form = SearchForm::default();
        form.edit(text.to_string());
        form
    }

    #[test]
    fn submit_returns_trimmed_query() {
        let mut form = form_with("  London  ");

        let query = form.submit().expect("non-blank input must submit");
        assert_eq!(query.as_str(), "London");
        assert_eq!(form.error(), None);
        // The draft itself is left as typed.
        assert_eq!(form.draft(), "  London  ");
    }

    #[test]
    fn blank_input_is_blocked_with_message() {
        for input in ["", "   ", "\t", "\u{FEFF}"] {
            let mut form = form_with(input);

            assert_eq!(form.submit(), None, "input {input:?}");
            assert_eq!(form.error(), Some("Please enter a city name"));
        }
    }

    #[test]
    fn error_clears_on_next_edit_without_revalidating() {
        let mut form = form_with("   ");
        assert!(form.submit().is_none());

        // Still blank, but editing alone must not bring the error back.
        form.edit("  ".to_string());
        assert_eq!(form.error(), None);

        form.edit("Paris".to_string());
        assert_eq!(form.error(), None);
        assert_eq!(form.submit().map(|q| q.to_string()), Some("Paris".to_string()));
    }

    #[test]
    fn successful_submit_clears_previous_error() {
        let mut form = SearchForm::default();
        assert!(form.submit().is_none());
        assert!(form.error().is_some());

        form.draft = "Oslo".to_string();
        assert!(form.submit().is_some());
        assert_eq!(form.error(), None);
    }
}
