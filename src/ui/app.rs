//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, Key, RichText, SidePanel, TopBottomPanel};
use tracing::{debug, info};

use super::board_view::{mark_color, BoardView};
use super::history_view::{self, HistoryAction};
use super::theme::*;
use crate::config::AppConfig;
use crate::game::{GameState, Status};

/// A discrete user action. Each one is applied to completion before the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Click(usize),
    Jump(usize),
    ToggleOrder,
    StepBack,
    StepForward,
    NewGame,
}

impl From<HistoryAction> for Action {
    fn from(action: HistoryAction) -> Self {
        match action {
            HistoryAction::Jump(idx) => Action::Jump(idx),
            HistoryAction::ToggleOrder => Action::ToggleOrder,
        }
    }
}

const DIGIT_KEYS: [Key; 9] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_shortcuts: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            state: GameState::with_order(config.sort_ascending),
            board_view: BoardView::default(),
            show_shortcuts: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one action to the game state
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "applying action");
        self.state = match action {
            Action::Click(idx) => self.state.click(idx),
            Action::Jump(idx) => self.state.jump_to(idx),
            Action::ToggleOrder => self.state.toggle_order(),
            Action::StepBack => self.state.step_back(),
            Action::StepForward => self.state.step_forward(),
            Action::NewGame => {
                info!("new game");
                self.state.reset()
            }
        };
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) -> Option<Action> {
        let mut action = None;
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        action = Some(Action::NewGame);
                        ui.close_menu();
                    }
                    if ui.button("Sort the moves (S)").clicked() {
                        action = Some(Action::ToggleOrder);
                        ui.close_menu();
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_shortcuts, "Keyboard shortcuts");
                });
            });
        });
        action
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the side panel with the move list
    fn render_side_panel(&self, ctx: &Context) -> Option<Action> {
        let mut action = None;
        SidePanel::right("history_panel")
            .min_width(200.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let items = self.state.move_list();
                Self::card_frame().show(ui, |ui| {
                    action = history_view::show(ui, &items).map(Action::from);
                });

                if self.show_shortcuts {
                    ui.add_space(10.0);
                    self.render_shortcuts_card(ui);
                }
            });
        action
    }

    fn render_shortcuts_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            for line in [
                "1-9  play a cell",
                "←/→  step through moves",
                "S    sort the moves",
                "N    new game",
            ] {
                ui.label(RichText::new(line).monospace().size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Render the status line and the board
    fn render_board(&mut self, ctx: &Context) -> Option<Action> {
        let mut action = None;
        CentralPanel::default().show(ctx, |ui| {
            let status = self.state.status();
            let color = match status {
                Status::Winner(_) => WIN_TEXT,
                Status::NextPlayer(mark) => mark_color(mark),
            };
            ui.label(RichText::new(status.to_string()).size(20.0).strong().color(color));
            ui.add_space(8.0);

            let winning_line = self.state.winner_info().map(|info| info.line);
            let clicked = self.board_view.show(
                ui,
                self.state.board(),
                self.state.current_player(),
                winning_line,
            );
            action = clicked.map(Action::Click);
        });
        action
    }

    /// Handle keyboard shortcuts
    fn handle_input(&self, ctx: &Context) -> Option<Action> {
        ctx.input(|i| {
            if i.key_pressed(Key::N) {
                return Some(Action::NewGame);
            }
            if i.key_pressed(Key::S) {
                return Some(Action::ToggleOrder);
            }
            if i.key_pressed(Key::ArrowLeft) {
                return Some(Action::StepBack);
            }
            if i.key_pressed(Key::ArrowRight) {
                return Some(Action::StepForward);
            }
            DIGIT_KEYS
                .iter()
                .position(|&key| i.key_pressed(key))
                .map(Action::Click)
        })
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();
        actions.extend(self.handle_input(ctx));
        actions.extend(self.render_menu_bar(ctx));
        actions.extend(self.render_side_panel(ctx));
        actions.extend(self.render_board(ctx));

        if !actions.is_empty() {
            for action in actions {
                self.apply(action);
            }
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_config_sets_initial_order() {
        let config = AppConfig {
            sort_ascending: false,
            ..AppConfig::default()
        };
        let app = TicTacToeApp::with_config(&config);
        assert!(!app.state().sort_ascending());
    }

    #[test]
    fn test_apply_sequence() {
        let mut app = TicTacToeApp::default();
        for action in [Action::Click(0), Action::Click(4), Action::StepBack] {
            app.apply(action);
        }
        assert_eq!(app.state().current_move(), 1);
        assert_eq!(app.state().history().len(), 3);
        assert_eq!(app.state().board().get(0), Some(Some(Mark::X)));

        app.apply(Action::StepForward);
        assert_eq!(app.state().current_move(), 2);

        app.apply(Action::Jump(0));
        assert!(app.state().board().is_board_empty());

        app.apply(Action::NewGame);
        assert_eq!(app.state().history().len(), 1);
    }

    #[test]
    fn test_history_action_conversion() {
        assert_eq!(Action::from(HistoryAction::Jump(3)), Action::Jump(3));
        assert_eq!(Action::from(HistoryAction::ToggleOrder), Action::ToggleOrder);
    }
}
