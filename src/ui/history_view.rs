//! Move list rendering

use egui::{RichText, ScrollArea};

use crate::game::MoveListItem;

use super::theme::*;

/// User action on the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Jump(usize),
    ToggleOrder,
}

/// Render the move list and the sort button
pub fn show(ui: &mut egui::Ui, items: &[MoveListItem]) -> Option<HistoryAction> {
    let mut action = None;

    ScrollArea::vertical()
        .max_height((ui.available_height() - 40.0).max(80.0))
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for (row, item) in items.iter().enumerate() {
                // Rows are keyed by history index so widget identity survives re-sorting
                ui.push_id(item.move_index, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("{}.", row + 1)).color(TEXT_MUTED));
                        let text = RichText::new(&item.label).color(TEXT_PRIMARY);
                        if ui.selectable_label(item.is_current, text).clicked() {
                            action = Some(HistoryAction::Jump(item.move_index));
                        }
                    });
                    ui.label(
                        RichText::new(item.location_text())
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            }
        });

    ui.add_space(8.0);
    if ui.button("Sort the moves").clicked() {
        action = Some(HistoryAction::ToggleOrder);
    }

    action
}
