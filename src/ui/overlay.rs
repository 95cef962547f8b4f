// Centered message box drawn over the field

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A message to display as an overlay in the center of the field
#[derive(Debug, Clone)]
pub struct OverlayMessage {
    pub lines: Vec<String>,
    pub title: Option<String>,
    pub style: OverlayStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayStyle {
    /// Waiting on the player (cyan)
    Info,
    /// Match result (green)
    Success,
}

impl OverlayMessage {
    pub fn info(lines: Vec<String>) -> Self {
        Self {
            lines,
            title: None,
            style: OverlayStyle::Info,
        }
    }

    pub fn success(lines: Vec<String>) -> Self {
        Self {
            lines,
            title: None,
            style: OverlayStyle::Success,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn border_color(&self) -> Color {
        match self.style {
            OverlayStyle::Info => Color::Cyan,
            OverlayStyle::Success => Color::Green,
        }
    }

    fn text_color(&self) -> Color {
        match self.style {
            OverlayStyle::Info => Color::White,
            OverlayStyle::Success => Color::LightGreen,
        }
    }
}

/// Render an overlay message centered in `area`
pub fn render_overlay(frame: &mut Frame, message: &OverlayMessage, area: Rect) {
    let max_line_length = message
        .lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    // Borders plus one cell of padding on each side
    let overlay_width = (max_line_length as u16 + 6).min(area.width.saturating_sub(2));
    let overlay_height = (message.lines.len() as u16 + 2).min(area.height);
    if overlay_width < 3 || overlay_height < 3 {
        return;
    }

    let overlay_area = Rect {
        x: area.x + (area.width - overlay_width) / 2,
        y: area.y + (area.height - overlay_height) / 2,
        width: overlay_width,
        height: overlay_height,
    };

    frame.render_widget(Clear, overlay_area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(message.border_color()))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));

    if let Some(ref title) = message.title {
        block = block.title(format!(" {} ", title));
    }

    frame.render_widget(block, overlay_area);

    let inner_area = overlay_area.inner(Margin::new(2, 1));
    let text_lines: Vec<Line> = message
        .lines
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                line.clone(),
                Style::default().fg(message.text_color()),
            ))
        })
        .collect();

    frame.render_widget(
        Paragraph::new(text_lines).alignment(Alignment::Center),
        inner_area,
    );
}
