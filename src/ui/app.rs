//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{
    CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel,
    Vec2,
};
use tracing::info;

use crate::board::{Player, Pos};
use crate::game::{GameState, GameStatus, HistoryEntry};
use super::board_view::{BoardFrame, BoardView};
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    /// Feedback for the last rejected action
    message: Option<String>,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
            message: None,
        }
    }

    fn new_game(&mut self) {
        info!(size = self.state.board_size(), "new game");
        self.state.reset();
        self.message = None;
    }

    fn place_stone(&mut self, pos: Pos) {
        self.message = self.state.apply_move(pos).err().map(|err| err.to_string());
    }

    fn jump_to(&mut self, index: usize) {
        self.message = self.state.jump_to(index).err().map(|err| err.to_string());
    }

    fn undo(&mut self) {
        // Already at the start: nothing to do
        if self.state.undo().is_ok() {
            self.message = None;
        }
    }

    fn redo(&mut self) {
        if self.state.redo().is_ok() {
            self.message = None;
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                    if ui.button("Redo (R)").clicked() {
                        self.redo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.state.board_size();
                    ui.label(format!("{size}x{size} - Hotseat"));
                });
            });
        });
    }

    /// Render the side panel with status, actions and move list
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                if let Some(msg) = &self.message {
                    Self::render_message_card(ui, msg);
                    ui.add_space(10.0);
                }

                self.render_history_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn / winner card
    fn render_status_card(&self, ui: &mut egui::Ui) {
        let status = self.state.status();
        let frame = match status {
            GameStatus::InProgress { .. } => Self::card_frame(),
            GameStatus::Won(_) | GameStatus::Draw => Self::card_frame().fill(GAME_OVER_BG),
        };

        frame.show(ui, |ui| {
            let (symbol, accent) = match status {
                GameStatus::InProgress { to_move: player } | GameStatus::Won(player) => {
                    stone_symbol(player)
                }
                GameStatus::Draw => ("=", TEXT_SECONDARY),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    symbol,
                    egui::FontId::proportional(28.0),
                    TEXT_PRIMARY,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let (headline, detail, color) = match status {
                        GameStatus::InProgress { to_move } => {
                            (player_label(to_move), "to move", STATUS_ACTIVE)
                        }
                        GameStatus::Won(winner) => (player_label(winner), "WINS!", WIN_HIGHLIGHT),
                        GameStatus::Draw => ("DRAW", "board full", STATUS_WARNING),
                    };
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(12.0).color(color));
                });
            });

            if !self.state.is_at_latest() {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!(
                        "Viewing move {} of {}",
                        self.state.cursor(),
                        self.state.history().len() - 1
                    ))
                    .size(11.0)
                    .color(STATUS_WARNING),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::action_button(ui, "New") {
                    self.new_game();
                }
                ui.add_space(4.0);
                if Self::action_button(ui, "↩ Undo") {
                    self.undo();
                }
                ui.add_space(4.0);
                if Self::action_button(ui, "↪ Redo") {
                    self.redo();
                }
            });
        });
    }

    /// Styled clickable label, returns true when clicked
    fn action_button(ui: &mut egui::Ui, label: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                let text = RichText::new(label).size(12.0).color(TEXT_PRIMARY);
                ui.add(egui::Label::new(text).sense(egui::Sense::click())).clicked()
            })
            .inner
    }

    /// Render the move list; clicking an entry jumps there
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let size = self.state.board_size();
        let cursor = self.state.cursor();
        let captions: Vec<String> = self
            .state
            .history()
            .iter()
            .map(|entry| move_caption(entry, size))
            .collect();

        let mut target = None;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                for (index, caption) in captions.iter().enumerate() {
                    let text = RichText::new(caption).size(12.0).color(TEXT_PRIMARY);
                    let button = egui::Button::new(text).fill(if index == cursor {
                        HISTORY_CURRENT
                    } else {
                        BUTTON_BG
                    });
                    if ui.add(button).clicked() {
                        target = Some(index);
                    }
                }
            });
        });

        if let Some(index) = target {
            self.jump_to(index);
        }
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let frame = BoardFrame {
                    board: self.state.current(),
                    to_move: self.state.player_to_move(),
                    last_move: self.state.last_move().map(|(pos, _)| pos),
                    winning_line: self.state.winning_line(),
                    frozen: self.state.status().is_finished(),
                };

                if let Some(pos) = self.board_view.show(ui, frame) {
                    self.place_stone(pos);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, redo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::N),
            )
        });

        if undo {
            self.undo();
        }
        if redo {
            self.redo();
        }
        if new_game {
            self.new_game();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

fn player_label(player: Player) -> &'static str {
    match player {
        Player::Black => "BLACK",
        Player::White => "WHITE",
    }
}

fn stone_symbol(player: Player) -> (&'static str, egui::Color32) {
    match player {
        Player::Black => ("●", egui::Color32::from_rgb(70, 70, 75)),
        Player::White => ("○", egui::Color32::from_rgb(220, 220, 225)),
    }
}

/// Move list caption, e.g. "#3 Black H8"
fn move_caption(entry: &HistoryEntry, size: usize) -> String {
    match entry.placed {
        None => "Game start".to_string(),
        Some((pos, player)) => {
            let color = match player {
                Player::Black => "Black",
                Player::White => "White",
            };
            format!(
                "#{} {} {}{}",
                entry.move_index,
                color,
                column_label(pos.col),
                size - pos.row
            )
        }
    }
}
