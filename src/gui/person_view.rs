//! Person View
//! The navigation target of a search: shows the routed path and the queried
//! name. Profile content itself is served by the news backend.

use egui::RichText;

pub struct PersonView {
    query: String,
    path: String,
}

impl PersonView {
    pub fn new(query: String, path: String) -> Self {
        Self { query, path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Draw the view; returns true when the user wants to go back.
    pub fn show(&self, ui: &mut egui::Ui) -> bool {
        let mut back = false;

        ui.horizontal(|ui| {
            if ui.button("< Dashboard").clicked() {
                back = true;
            }
            ui.label(RichText::new(&self.path).monospace().size(12.0));
        });

        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.query).size(26.0).strong());
            ui.add_space(8.0);
            ui.label(
                RichText::new("Mentions and coverage for this person are served by the news backend.")
                    .size(13.0)
                    .color(egui::Color32::GRAY),
            );
        });

        back
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_keeps_query_and_path() {
        let view = PersonView::new(
            "john smith".to_string(),
            "/person/john%20smith".to_string(),
        );
        assert_eq!(view.query(), "john smith");
        assert_eq!(view.path(), "/person/john%20smith");
    }
}
