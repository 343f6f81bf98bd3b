//! Application state and main UI controller

use std::collections::VecDeque;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use tracing::debug;

use crate::game::{CombatPreview, Game};

use super::input::{key_to_command, Command};
use super::widgets::{MessagesWidget, RoomWidget, StatusWidget};

/// Messages kept in the log panel.
const LOG_CAPACITY: usize = 5;

/// UI mode - what the app is currently waiting for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiMode {
    /// Picking a card or command
    Normal,
    /// Choosing weapon or barehanded against the monster at `index`.
    /// `cursor` 0 is the weapon, 1 is barehanded.
    Combat { index: usize, cursor: usize },
}

/// Application state
pub struct App {
    game: Game,
    log: VecDeque<String>,
    mode: UiMode,
    should_quit: bool,
}

impl App {
    pub fn new(game: Game) -> Self {
        let mut app = Self {
            game,
            log: VecDeque::with_capacity(LOG_CAPACITY),
            mode: UiMode::Normal,
            should_quit: false,
        };
        app.push_message("Welcome to Scoundrel!");
        app
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn messages(&self) -> &VecDeque<String> {
        &self.log
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn push_message(&mut self, message: impl Into<String>) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(message.into());
    }

    // === Input ===

    /// Handle a terminal event. Returns a command for normal-mode keys;
    /// combat dialog keys are consumed here.
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match self.mode {
            UiMode::Normal => key_to_command(key),
            UiMode::Combat { index, cursor } => {
                self.handle_combat_key(key, index, cursor);
                None
            }
        }
    }

    /// A blocked weapon option is disabled: it cannot be selected or chosen.
    fn handle_combat_key(&mut self, key: KeyEvent, index: usize, cursor: usize) {
        let blocked = self.weapon_blocked(index);
        match key.code {
            KeyCode::Char('w') if !blocked => self.fight(index, true),
            KeyCode::Char('b') => self.fight(index, false),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Tab
                if !blocked =>
            {
                self.mode = UiMode::Combat {
                    index,
                    cursor: 1 - cursor,
                };
            }
            KeyCode::Enter if !(blocked && cursor == 0) => self.fight(index, cursor == 0),
            KeyCode::Esc => {
                self.mode = UiMode::Normal;
                self.push_message("Combat canceled.");
            }
            _ => {}
        }
    }

    /// Execute a normal-mode command.
    pub fn execute(&mut self, command: Command) {
        debug!(?command, "execute");
        match command {
            Command::SelectCard(index) => self.select_card(index),
            Command::Run => self.run(),
            Command::NewGame => self.new_game(),
            Command::Quit => self.should_quit = true,
        }
    }

    // === Game actions ===

    /// Monsters open the combat dialog when a weapon is equipped; every
    /// other card is played directly.
    fn select_card(&mut self, index: usize) {
        if self.game.state().is_game_over() {
            return;
        }
        let Some(card) = self.game.state().current_room().get(index).copied() else {
            self.push_message("Invalid card index.");
            return;
        };

        if card.is_monster() && self.game.state().equipped_weapon().is_some() {
            let cursor = usize::from(self.weapon_blocked(index));
            self.mode = UiMode::Combat { index, cursor };
        } else {
            self.play(index, true);
        }
    }

    fn weapon_blocked(&self, index: usize) -> bool {
        self.game
            .preview_fight(index)
            .is_some_and(|preview| preview.weapon_blocked())
    }

    fn fight(&mut self, index: usize, use_weapon: bool) {
        self.mode = UiMode::Normal;
        self.play(index, use_weapon);
    }

    fn play(&mut self, index: usize, use_weapon: bool) {
        let message = match self.game.play_card(index, use_weapon) {
            Ok(outcome) => outcome.to_string(),
            Err(err) => err.to_string(),
        };
        self.push_message(message);
    }

    fn run(&mut self) {
        if self.game.state().is_game_over() {
            return;
        }
        match self.game.run_from_room() {
            Ok(()) => self.push_message("You ran away from the room!"),
            Err(_) => self.push_message("You cannot run at this time!"),
        }
    }

    fn new_game(&mut self) {
        self.game = Game::from_entropy();
        self.mode = UiMode::Normal;
        self.log.clear();
        self.push_message("New game started!");
    }

    // === Rendering ===

    pub fn render(&self, frame: &mut Frame) {
        let state = self.game.state();
        let [title, room, status, log, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(6),
            Constraint::Length(LOG_CAPACITY as u16 + 2),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from("SCOUNDREL").bold().fg(Color::Yellow)).centered(),
            title,
        );
        frame.render_widget(RoomWidget::new(state), room);
        frame.render_widget(StatusWidget::new(state), status);
        frame.render_widget(MessagesWidget::new(&self.log), log);

        let help = if state.is_game_over() {
            "[n] New game  [q] Quit"
        } else {
            "[1-4] Select card  [r] Run  [n] New game  [q] Quit"
        };
        frame.render_widget(Paragraph::new(help).fg(Color::DarkGray), footer);

        if let UiMode::Combat { index, cursor } = self.mode {
            if let Some(preview) = self.game.preview_fight(index) {
                self.render_combat_dialog(frame, &preview, cursor);
            }
        }
    }

    fn render_combat_dialog(&self, frame: &mut Frame, preview: &CombatPreview, cursor: usize) {
        let area = centered_rect(frame.area(), 48, 8);
        frame.render_widget(Clear, area);

        let weapon_line = match (preview.weapon, preview.weapon_damage) {
            (Some(weapon), Some(damage)) => format!("[w] Use {} (take {damage} damage)", weapon.card()),
            (Some(weapon), None) => match weapon.last_defeated() {
                Some(last) => format!("[w] Cannot use weapon (only monsters < {})", last.value()),
                None => "[w] Cannot use weapon".to_string(),
            },
            (None, _) => "[w] No weapon".to_string(),
        };
        let bare_line = format!("[b] Barehanded (take {} damage)", preview.barehanded_damage);

        let highlight = |selected: bool| {
            if selected {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            }
        };

        let lines = vec![
            Line::from(format!("Fight {}?", preview.monster)).bold(),
            Line::from(""),
            Line::styled(weapon_line, highlight(cursor == 0)),
            Line::styled(bare_line, highlight(cursor == 1)),
            Line::from(""),
            Line::from("[Esc] Cancel").fg(Color::DarkGray),
        ];

        frame.render_widget(
            Paragraph::new(lines).block(
                Block::bordered()
                    .title("Combat")
                    .border_style(Style::default().fg(Color::Green)),
            ),
            area,
        );
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
