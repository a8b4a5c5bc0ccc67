//! Stateless UI rendering for the puzzle.

use crate::tui::app::App;
use crate::tui::viewport::Viewport;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};
use strictly_hanoi::{DiscColor, Peg, Tower};

/// Highlight for the disc under the pointer or in the air.
const HIGHLIGHT: Color = Color::Rgb(0x55, 0xff, 0x88);

/// Splits the screen into title, play field and status line.
pub fn layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(8),    // Pegs
        Constraint::Length(3), // Status
    ])
    .areas(area)
}

/// Inner play field where the viewport maps pointer events.
pub fn field_area(area: Rect) -> Rect {
    let [_, field, _] = layout(area);
    Block::bordered().inner(field)
}

/// Terminal color for a disc color.
pub fn color_of(color: DiscColor) -> Color {
    match color {
        DiscColor::Purple => Color::Rgb(0x80, 0x00, 0x80),
        DiscColor::Yellow => Color::Yellow,
        DiscColor::Green => Color::Green,
        DiscColor::Blue => Color::Blue,
        DiscColor::Red => Color::Red,
        DiscColor::Cyan => Color::Cyan,
        DiscColor::Magenta => Color::Magenta,
        DiscColor::Orange => Color::Rgb(0xff, 0xa5, 0x00),
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title_area, field_outer, status_area] = layout(frame.area());

    let title = Paragraph::new("Strictly Hanoi")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    frame.render_widget(
        Block::bordered().title(" drag discs with the mouse, r resets, q quits "),
        field_outer,
    );
    let field = field_area(frame.area());
    let tower = app.puzzle().tower();
    let viewport = Viewport::new(field, tower);
    draw_pegs(frame, &viewport);
    draw_discs(frame, &viewport, tower, app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(status, status_area);
}

fn draw_pegs(frame: &mut Frame, viewport: &Viewport) {
    let area = viewport.area();
    if area.is_empty() {
        return;
    }
    let floor = area.bottom() - 1;
    let buffer = frame.buffer_mut();

    for column in area.left()..area.right() {
        if let Some(cell) = buffer.cell_mut((column, floor)) {
            cell.set_symbol("▀").set_fg(Color::Gray);
        }
    }

    for peg in Peg::ALL {
        let column = viewport.column_of(peg.center_x());
        for row in area.top()..floor {
            if let Some(cell) = buffer.cell_mut((column, row)) {
                cell.set_symbol("│").set_fg(Color::DarkGray);
            }
        }
        let label = peg.label();
        let start = column
            .saturating_sub(label.len() as u16 / 2)
            .max(area.left());
        buffer.set_string(start, floor, label, Style::default().fg(Color::White));
    }
}

fn draw_discs(frame: &mut Frame, viewport: &Viewport, tower: &Tower, app: &App) {
    if viewport.area().is_empty() {
        return;
    }
    let held = app.puzzle().held();
    for disc in tower.discs() {
        let span = viewport.disc_span(disc);
        let lit = held == Some(disc.id()) || app.hover() == Some(disc.id());
        let bg = if lit { HIGHLIGHT } else { color_of(disc.color()) };

        let label = Paragraph::new(disc.radius().to_string())
            .style(Style::default().bg(bg).fg(Color::Black))
            .alignment(Alignment::Center);
        frame.render_widget(label, span);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_hanoi::{DiscSpec, TowerConfig};

    #[test]
    fn test_field_sits_between_title_and_status() {
        let area = Rect::new(0, 0, 80, 24);
        let field = field_area(area);
        assert_eq!(field, Rect::new(1, 4, 78, 16));
    }

    #[test]
    fn test_draw_renders_status_and_discs() {
        let app = App::new(TowerConfig::of_size(3)).expect("valid config");
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Strictly Hanoi"));
        assert!(text.contains("Pick up a disc"));

        let viewport = Viewport::new(field_area(Rect::new(0, 0, 80, 24)), app.puzzle().tower());
        let bottom = &app.puzzle().tower().discs()[0];
        let span = viewport.disc_span(bottom);
        assert_eq!(buffer[(span.x, span.y)].bg, color_of(bottom.color()));
    }

    #[test]
    fn test_draw_huge_disc_and_tiny_terminal() {
        let config = TowerConfig::default().with_discs(vec![DiscSpec::new(100_000.0, DiscColor::Red)]);
        let app = App::new(config).expect("valid config");

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, 18)].bg, Color::Red);
        assert_eq!(buffer[(78, 18)].bg, Color::Red);

        let mut terminal = Terminal::new(TestBackend::new(20, 5)).expect("terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
    }
}
