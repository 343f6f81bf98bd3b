//! Room, status and message log widgets.

use std::collections::VecDeque;

use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use crate::cards::{Card, Category};
use crate::core::GameState;

/// Border colour and style per card category.
fn category_style(category: Category) -> (Color, BorderType) {
    match category {
        Category::Monster => (Color::Green, BorderType::Double),
        Category::Weapon => (Color::Yellow, BorderType::Rounded),
        Category::Potion => (Color::Red, BorderType::Plain),
    }
}

/// A single face-up room card.
pub struct CardWidget {
    card: Card,
    slot: usize,
}

impl CardWidget {
    pub fn new(card: Card, slot: usize) -> Self {
        Self { card, slot }
    }
}

impl Widget for CardWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (color, border) = category_style(self.card.category());
        let block = Block::bordered()
            .border_type(border)
            .border_style(Style::default().fg(color))
            .title(format!("[{}]", self.slot + 1));

        let text = vec![
            Line::from(""),
            Line::from(self.card.name()).bold(),
            Line::from(self.card.category().to_string()).fg(color),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

/// The row of room cards, or the end-of-game banner.
pub struct RoomWidget<'a> {
    state: &'a GameState,
}

impl<'a> RoomWidget<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }
}

impl Widget for RoomWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.is_game_over() {
            let (message, color) = if self.state.is_victory() {
                ("Victory! You've defeated all monsters!", Color::Green)
            } else {
                ("Game Over! You were defeated!", Color::Red)
            };
            Paragraph::new(vec![Line::from(""), Line::from(message).bold().fg(color)])
                .alignment(Alignment::Center)
                .block(Block::bordered().title("Room"))
                .render(area, buf);
            return;
        }

        let block = Block::bordered().title(format!("Room {}", self.state.room_number()));
        let inner = block.inner(area);
        block.render(area, buf);

        let slots = Layout::horizontal([Constraint::Length(14); crate::core::ROOM_SIZE])
            .flex(Flex::Center)
            .spacing(2)
            .split(inner);

        for (slot, card) in self.state.current_room().iter().enumerate() {
            CardWidget::new(*card, slot).render(slots[slot], buf);
        }
    }
}

/// Player status panel.
pub struct StatusWidget<'a> {
    state: &'a GameState,
}

impl<'a> StatusWidget<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    fn weapon_line(&self) -> String {
        match self.state.equipped_weapon() {
            None => "Weapon: None".to_string(),
            Some(weapon) => match weapon.last_defeated() {
                Some(last) => format!(
                    "Weapon: {} (can only defeat monsters < {})",
                    weapon.card(),
                    last.value()
                ),
                None => format!("Weapon: {} (can defeat any monster)", weapon.card()),
            },
        }
    }

    fn flags_line(&self) -> String {
        let mut flags = Vec::new();
        if !self.state.is_game_over() && !self.state.can_run() {
            flags.push("Cannot Run");
        }
        if self.state.potion_used_this_room() {
            flags.push("Potion Used");
        }
        if flags.is_empty() {
            "Status: None".to_string()
        } else {
            format!("Status: {}", flags.join(", "))
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let s = self.state;
        let health_color = if s.health() <= 5 { Color::Red } else { Color::White };

        let mut footer = format!(
            "Monsters Left: {}   Dungeon: {}",
            s.remaining_monsters(),
            s.dungeon().len()
        );
        if let Some(seed) = s.seed() {
            footer.push_str(&format!("   Seed: {seed}"));
        }

        let lines = vec![
            Line::from(format!("Health: {}/{}", s.health(), s.max_health())).fg(health_color),
            Line::from(self.weapon_line()),
            Line::from(self.flags_line()),
            Line::from(footer),
        ];

        Paragraph::new(lines)
            .block(Block::bordered().title("Status"))
            .render(area, buf);
    }
}

/// The last few log messages.
pub struct MessagesWidget<'a> {
    messages: &'a VecDeque<String>,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(messages: &'a VecDeque<String>) -> Self {
        Self { messages }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self.messages.iter().map(|m| Line::from(m.as_str())).collect();
        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title("Message Log")
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }
}
