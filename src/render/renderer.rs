use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{CellColor, GameView, SoundEvent};

pub const TITLE: &str = " Snake Pro ";
pub const GAME_OVER_TEXT: &str = "Game Over";

/// Status values shown around the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudInfo {
    pub cycle: u64,
    pub length: usize,
    pub score: u32,
    pub mode: &'static str,
    pub elapsed: String,
    pub last_sound: Option<SoundEvent>,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &dyn GameView, hud: &HudInfo) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(hud), chunks[0]);

        let board_area = chunks[1];
        frame.render_widget(self.render_board(view), board_area);

        if view.is_game_over() {
            let banner_area = centered(board_area, 30, 5);
            frame.render_widget(Clear, banner_area);
            frame.render_widget(self.render_game_over(hud), banner_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board(&self, view: &dyn GameView) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(view.num_rows());

        for row in 0..view.num_rows() {
            let spans: Vec<Span> = (0..view.num_columns())
                .map(|col| Span::styled("██", Style::default().fg(to_color(view.color_at(row, col)))))
                .collect();
            lines.push(Line::from(spans));
        }

        let (r, g, b) = CellColor::BACKGROUND;
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Rgb(r, g, b)))
                    .title(TITLE),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, hud: &HudInfo) -> Paragraph<'_> {
        let sound = hud.last_sound.map(|s| s.name()).unwrap_or("-");
        let text = vec![Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                hud.length.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Eaten: ", Style::default().fg(Color::Yellow)),
            Span::styled(hud.score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Mode: ", Style::default().fg(Color::Yellow)),
            Span::styled(hud.mode, Style::default().fg(Color::Cyan)),
            Span::raw("    "),
            Span::styled("Cycle: ", Style::default().fg(Color::Yellow)),
            Span::styled(hud.cycle.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(hud.elapsed.clone(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Sound: ", Style::default().fg(Color::Yellow)),
            Span::styled(sound, Style::default().fg(Color::Magenta)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, hud: &HudInfo) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![Span::styled(
                GAME_OVER_TEXT,
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![
                Span::styled("Final length: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    hud.length.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("N", Style::default().fg(Color::Green)),
                Span::styled(" new game | ", Style::default().fg(Color::Gray)),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::styled(" quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("IJKL", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("A", Style::default().fg(Color::Cyan)),
            Span::raw(" autopilot | "),
            Span::styled("R", Style::default().fg(Color::Cyan)),
            Span::raw(" reverse | "),
            Span::styled("S", Style::default().fg(Color::Cyan)),
            Span::raw(" sound | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(color: CellColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// A `width` x `height` rect centered in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
