//! Search Bar Widget
//! One-shot person search: validate non-empty input, then route to
//! /person/<percent-encoded query>. No history, no retry.

use egui::RichText;

/// Outcome of one frame of the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    None,
    /// Submitted with nothing typed; the shell shows a blocking alert.
    EmptyQuery,
    /// Submitted with a query; the shell navigates to `path`.
    Navigate { query: String, path: String },
}

/// Person route for a raw query, percent-encoded the way a browser would.
pub fn person_path(query: &str) -> String {
    format!("/person/{}", urlencoding::encode(query))
}

/// Validation + routing decision for a single submission.
pub fn submit_query(raw: &str) -> SearchAction {
    let query = raw.trim();
    if query.is_empty() {
        SearchAction::EmptyQuery
    } else {
        SearchAction::Navigate {
            query: query.to_string(),
            path: person_path(query),
        }
    }
}

/// Text input plus submit button; Enter submits too.
#[derive(Default)]
pub struct SearchBar {
    query: String,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> SearchAction {
        let mut submitted = false;

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("Search people in the news...")
                    .desired_width(260.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }
            if ui.button(RichText::new("Search").size(13.0)).clicked() {
                submitted = true;
            }
        });

        if submitted {
            submit_query(&self.query)
        } else {
            SearchAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_query_navigates_to_encoded_path() {
        let action = submit_query("john smith");
        assert_eq!(
            action,
            SearchAction::Navigate {
                query: "john smith".to_string(),
                path: "/person/john%20smith".to_string(),
            }
        );
    }

    #[test]
    fn empty_and_whitespace_queries_are_rejected() {
        assert_eq!(submit_query(""), SearchAction::EmptyQuery);
        assert_eq!(submit_query("   "), SearchAction::EmptyQuery);
    }

    #[test]
    fn person_path_encodes_reserved_characters() {
        assert_eq!(person_path("a/b&c"), "/person/a%2Fb%26c");
    }
}
