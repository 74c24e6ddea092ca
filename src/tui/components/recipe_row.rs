//! # RecipeRow Component
//!
//! A horizontal strip of recipe cards under a section title. Cards that do
//! not fit are scrolled so the selected card stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::api::Recipe;
use crate::tui::component::Component;

/// Card width including the one-column gap.
pub const CARD_WIDTH: u16 = 26;

const ACCENT: Color = Color::Rgb(0x6D, 0x61, 0xF2);

pub struct RecipeRow<'a> {
    pub title: &'a str,
    pub recipes: &'a [Recipe],
    pub selected: usize,
    pub focused: bool,
    pub loading: bool,
}

impl RecipeRow<'_> {
    /// First card index to draw so that `selected` is on screen.
    fn first_visible(&self, visible: usize) -> usize {
        if visible == 0 || self.selected < visible {
            0
        } else {
            self.selected + 1 - visible
        }
    }

    fn card(recipe: &Recipe, highlighted: bool) -> Paragraph<'_> {
        let border_style = if highlighted {
            Style::default().fg(ACCENT)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        Paragraph::new(vec![
            Line::styled(
                recipe.display_title(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(recipe.picture_uri(), Style::default().fg(Color::DarkGray)),
        ])
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        )
    }
}

impl Component for RecipeRow<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let outer_style = if self.focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default()
        };
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(outer_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.recipes.is_empty() {
            let text = if self.loading { "Loading..." } else { "No recipes" };
            frame.render_widget(
                Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        }

        let visible = (inner.width / CARD_WIDTH).max(1) as usize;
        let start = self.first_visible(visible);
        let end = (start + visible).min(self.recipes.len());

        for (slot, index) in (start..end).enumerate() {
            let x = inner.x + slot as u16 * CARD_WIDTH;
            let width = CARD_WIDTH.saturating_sub(1).min(inner.right().saturating_sub(x));
            let rect = Rect::new(x, inner.y, width, inner.height);
            let highlighted = self.focused && index == self.selected;
            frame.render_widget(Self::card(&self.recipes[index], highlighted), rect);
        }
    }
}
