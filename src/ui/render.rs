use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};
use tracing::debug;

use super::braille::{BrailleCanvas, Glyph};
use super::overlay::{render_overlay, OverlayMessage};
use crate::config::DisplayConfig;
use crate::frame::Renderer;
use crate::game::{Snapshot, Zone};

// 3×5 digit bitmaps
const DIGIT_ROWS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Draws the table as Braille dots: paddles, ball, the dotted zone line
/// and both scores. The serve prompt and match result are overlays on top.
pub struct BrailleRenderer {
    surface: Rect,
    digits: Vec<Glyph>,
    paddle_color: Color,
    ball_color: Color,
    show_hint: bool,
}

impl BrailleRenderer {
    pub fn new(display: &DisplayConfig) -> Self {
        let [pr, pg, pb] = display.paddle_color;
        let [br, bg, bb] = display.ball_color;
        Self {
            surface: Rect::default(),
            digits: Vec::new(),
            paddle_color: Color::Rgb(pr, pg, pb),
            ball_color: Color::Rgb(br, bg, bb),
            show_hint: display.show_hint,
        }
    }

    pub fn surface(&self) -> Rect {
        self.surface
    }

    pub fn models_loaded(&self) -> bool {
        !self.digits.is_empty()
    }

    fn draw_scores(&self, canvas: &mut BrailleCanvas, snapshot: &Snapshot) {
        let top_y = 2;
        let bottom_y = canvas.pixel_height().saturating_sub(7);
        self.draw_number(canvas, snapshot.top_score, 2, top_y);
        self.draw_number(canvas, snapshot.bottom_score, 2, bottom_y);
    }

    fn draw_number(&self, canvas: &mut BrailleCanvas, value: u8, x: usize, y: usize) {
        if self.digits.is_empty() {
            return;
        }
        for (i, ch) in value.to_string().chars().enumerate() {
            if let Some(glyph) = ch.to_digit(10).and_then(|d| self.digits.get(d as usize)) {
                canvas.draw_glyph(glyph, x + i * 4, y);
            }
        }
    }

    fn overlay_for(&self, snapshot: &Snapshot) -> Option<OverlayMessage> {
        if let Some(winner) = snapshot.winner {
            let text = match winner {
                Zone::Top => "TOP WINS",
                Zone::Bottom => "BOTTOM WINS",
            };
            return Some(
                OverlayMessage::success(vec![
                    text.to_string(),
                    format!("{} - {}", snapshot.top_score, snapshot.bottom_score),
                    "R to Restart  |  Q to Quit".to_string(),
                ])
                .with_title("Game Over"),
            );
        }
        if self.show_hint && !snapshot.ball_in_play {
            return Some(
                OverlayMessage::info(vec![
                    "Click or Space to serve".to_string(),
                    "Drag to move  |  Q to Quit".to_string(),
                ])
                .with_title("Ready"),
            );
        }
        None
    }
}

/// Scale from simulation space (y up) into canvas pixels (y down)
struct Projection {
    sx: f32,
    sy: f32,
    field_height: f32,
}

impl Projection {
    fn new(canvas: &BrailleCanvas, snapshot: &Snapshot) -> Self {
        Self {
            sx: canvas.pixel_width() as f32 / snapshot.field_width,
            sy: canvas.pixel_height() as f32 / snapshot.field_height,
            field_height: snapshot.field_height,
        }
    }

    /// Pixel rectangle for a box centred at (x, y) in simulation space
    fn rect(&self, x: f32, y: f32, width: f32, height: f32) -> (usize, usize, usize, usize) {
        let left = ((x - width / 2.0) * self.sx).max(0.0) as usize;
        let top = ((self.field_height - y - height / 2.0) * self.sy).max(0.0) as usize;
        let w = ((width * self.sx).round() as usize).max(1);
        let h = ((height * self.sy).round() as usize).max(1);
        (left, top, w, h)
    }
}

impl Renderer for BrailleRenderer {
    fn setup(&mut self, surface: Rect) {
        debug!(width = surface.width, height = surface.height, "renderer setup");
        self.surface = surface;
    }

    fn load_models(&mut self) {
        self.digits = DIGIT_ROWS
            .iter()
            .map(|rows| Glyph { width: 3, rows: *rows })
            .collect();
    }

    fn draw(&mut self, frame: &mut Frame, region: Rect, snapshot: &Snapshot) {
        if region.width == 0 || region.height == 0 {
            return;
        }

        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0))),
            region,
        );

        // Paddles and the zone line share one layer, the ball gets its own
        // so it can be coloured separately
        let mut field = BrailleCanvas::new(region.width as usize, region.height as usize);
        let projection = Projection::new(&field, snapshot);

        field.dotted_hline(field.pixel_height() / 2, 4);
        for (x, y) in [
            (snapshot.top_paddle_x, snapshot.top_paddle_y),
            (snapshot.bottom_paddle_x, snapshot.bottom_paddle_y),
        ] {
            let (px, py, w, h) = projection.rect(x, y, snapshot.paddle_width, snapshot.paddle_height);
            field.fill_rect(px, py, w, h);
        }
        self.draw_scores(&mut field, snapshot);

        let mut ball = BrailleCanvas::new(region.width as usize, region.height as usize);
        let diameter = snapshot.ball_radius * 2.0;
        let (bx, by, bw, bh) = projection.rect(snapshot.ball_x, snapshot.ball_y, diameter, diameter);
        ball.fill_rect(bx, by, bw, bh);

        for row in 0..field.height() {
            let row_area = Rect {
                x: region.x,
                y: region.y + row as u16,
                width: region.width,
                height: 1,
            };
            let ball_row = ball.row_string(row);
            let line: String = field
                .row_string(row)
                .chars()
                .zip(ball_row.chars())
                .map(|(f, b)| if b != '⠀' { b } else { f })
                .collect();
            let color = if ball_row.chars().any(|c| c != '⠀') {
                self.ball_color
            } else {
                self.paddle_color
            };
            frame.render_widget(Paragraph::new(line).style(Style::default().fg(color)), row_area);
        }

        if let Some(message) = self.overlay_for(snapshot) {
            render_overlay(frame, &message, region);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;
    use crate::game::{Simulation, Table};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn render(snapshot: &Snapshot, width: u16, height: u16) -> Buffer {
        let mut renderer = BrailleRenderer::new(&DisplayConfig::default());
        renderer.setup(Rect::new(0, 0, width, height));
        renderer.load_models();

        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                renderer.draw(f, area, snapshot)
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn table() -> Table {
        Table::with_seed(&PhysicsConfig::default(), 60, 5)
    }

    #[test]
    fn test_setup_and_models() {
        let mut renderer = BrailleRenderer::new(&DisplayConfig::default());
        assert!(!renderer.models_loaded());
        renderer.setup(Rect::new(0, 0, 80, 24));
        renderer.load_models();
        assert!(renderer.models_loaded());
        assert_eq!(renderer.surface(), Rect::new(0, 0, 80, 24));
    }

    #[test]
    fn test_paddles_follow_positions() {
        let mut table = table();
        table.set_paddle_x(Zone::Top, 125.0);
        table.set_paddle_x(Zone::Bottom, 675.0);
        let buffer = render(&table.snapshot(), 80, 24);

        // 160×96 dots: the top paddle (y = 500) reaches row 4 starting at
        // column 5, the bottom one (y = 100) reaches row 20 starting at column 60
        let first_dot = |s: String| s.chars().position(|c| c != '⠀' && c != ' ');
        assert_eq!(first_dot(row_text(&buffer, 4)), Some(5));
        assert_eq!(first_dot(row_text(&buffer, 20)), Some(60));
    }

    fn all_text(buffer: &Buffer) -> String {
        (0..buffer.area.height).map(|y| row_text(buffer, y)).collect()
    }

    #[test]
    fn test_serve_prompt_only_while_parked() {
        let mut table = table();
        let parked = all_text(&render(&table.snapshot(), 80, 24));
        assert!(parked.contains("Click or Space to serve"));
        assert!(parked.contains("Ready"));

        table.launch_ball();
        table.advance();
        let moving = all_text(&render(&table.snapshot(), 80, 24));
        assert!(!moving.contains("to serve"));
    }

    #[test]
    fn test_serve_prompt_can_be_disabled() {
        let display = DisplayConfig {
            show_hint: false,
            ..DisplayConfig::default()
        };
        let renderer = BrailleRenderer::new(&display);
        assert!(renderer.overlay_for(&table().snapshot()).is_none());

        let renderer = BrailleRenderer::new(&DisplayConfig::default());
        let prompt = renderer.overlay_for(&table().snapshot()).unwrap();
        assert_eq!(prompt.style, crate::ui::OverlayStyle::Info);
    }

    #[test]
    fn test_winner_overlay() {
        let mut table = table();
        table.winning_score = 1;
        table.award_point(Zone::Bottom);
        let buffer = render(&table.snapshot(), 80, 24);

        let all = all_text(&buffer);
        assert!(all.contains("BOTTOM WINS"));
        assert!(all.contains("Game Over"));
    }

    #[test]
    fn test_tiny_region_does_not_panic() {
        let table = table();
        render(&table.snapshot(), 1, 1);
        render(&table.snapshot(), 3, 2);
    }
}
