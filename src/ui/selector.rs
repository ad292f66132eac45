use crate::{landmarks, selection::SelectionController};
use egui::Ui;

/// Landmark dropdown. Returns the identifier the user clicked this frame.
///
/// While nothing has been chosen the closed box shows the first landmark.
pub fn landmark_picker(ui: &mut Ui, selected: Option<&str>) -> Option<&'static str> {
    let options = SelectionController::options();
    let current = selected.and_then(landmarks::find).unwrap_or(&options[0]);
    let mut choice = None;

    egui::ComboBox::from_id_source("landmark_picker")
        .selected_text(current.display_name)
        .width(200.0)
        .show_ui(ui, |ui| {
            for landmark in options {
                if ui
                    .selectable_label(current.id == landmark.id, landmark.display_name)
                    .clicked()
                {
                    choice = Some(landmark.id);
                }
            }
        });

    choice
}
