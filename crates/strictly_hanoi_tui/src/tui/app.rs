//! Application state for the terminal puzzle.

use crate::tui::viewport::Viewport;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use strictly_hanoi::{AnyPuzzle, DiscId, DragOutcome, SetupError, TowerConfig};
use tracing::{debug, info, instrument, warn};

/// Puzzle plus what the screen needs to show about it.
#[derive(Debug, Clone)]
pub struct App {
    config: TowerConfig,
    puzzle: AnyPuzzle,
    status: String,
    hover: Option<DiscId>,
}

impl App {
    /// Builds the starting puzzle from `config`.
    pub fn new(config: TowerConfig) -> Result<Self, SetupError> {
        let puzzle = AnyPuzzle::new(&config)?;
        let status = puzzle.status_string();
        Ok(Self {
            config,
            puzzle,
            status,
            hover: None,
        })
    }

    /// Current puzzle.
    pub fn puzzle(&self) -> &AnyPuzzle {
        &self.puzzle
    }

    /// Text for the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Disc under the pointer.
    pub fn hover(&self) -> Option<DiscId> {
        self.hover
    }

    /// Restores the starting tower.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        match AnyPuzzle::new(&self.config) {
            Ok(puzzle) => {
                self.puzzle = puzzle;
                self.hover = None;
                self.status = "Reset".to_string();
                info!("Puzzle reset");
            }
            Err(e) => {
                warn!(error = %e, "Reset failed");
                self.status = format!("Reset failed: {}", e);
            }
        }
    }

    /// Handles a key press. Returns false when the user quits.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                false
            }
            KeyCode::Char('r') => {
                self.reset();
                true
            }
            _ => true,
        }
    }

    /// Turns a mouse event over `field` into a pointer gesture.
    #[instrument(level = "trace", skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent, field: Rect) {
        let viewport = Viewport::new(field, self.puzzle.tower());
        let (column, row) = (event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(id) = viewport.disc_at(self.puzzle.tower(), column, row) else {
                    return;
                };
                match self.puzzle.pick_up(id) {
                    Ok(()) => {
                        debug!(%id, "Picked up");
                        self.status = self.puzzle.status_string();
                    }
                    Err(e) => {
                        warn!(error = %e, "Pick-up rejected");
                        self.status = e.to_string();
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(id) = self.puzzle.held() else {
                    return;
                };
                if field.is_empty() {
                    return;
                }
                let target = viewport.world_at(column, row);
                if let Ok(DragOutcome::Pinned) = self.puzzle.drag(id, target) {
                    self.status = self.puzzle.status_string();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(outcome) = self.puzzle.release_held() {
                    self.status = outcome.to_string();
                }
            }
            MouseEventKind::Moved => {
                self.hover = viewport.disc_at(self.puzzle.tower(), column, row);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use strictly_hanoi::Peg;

    const FIELD: Rect = Rect {
        x: 0,
        y: 0,
        width: 61,
        height: 20,
    };

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app() -> App {
        App::new(TowerConfig::of_size(3)).expect("valid config")
    }

    fn top_cell(app: &App, peg: Peg) -> (u16, u16) {
        let tower = app.puzzle().tower();
        let viewport = Viewport::new(FIELD, tower);
        let id = tower.registry().top(peg).expect("disc on peg");
        let disc = tower.disc(id).expect("disc");
        (
            viewport.column_of(disc.position().x),
            viewport.row_of(disc.position().y),
        )
    }

    fn drag_top(app: &mut App, from: Peg, to: Peg) {
        let (column, row) = top_cell(app, from);
        let target = Viewport::new(FIELD, app.puzzle().tower()).column_of(to.center_x());
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row), FIELD);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), target, 2), FIELD);
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), target, 2), FIELD);
    }

    #[test]
    fn test_mouse_gesture_moves_disc() {
        let mut app = app();
        drag_top(&mut app, Peg::Left, Peg::Right);

        let tower = app.puzzle().tower();
        assert!(!app.puzzle().is_holding());
        assert_eq!(tower.registry().stack(Peg::Right).len(), 1);
        assert!(app.status().contains("moved"), "status: {}", app.status());
    }

    #[test]
    fn test_illegal_gesture_reports_rejection() {
        let mut app = app();
        drag_top(&mut app, Peg::Left, Peg::Right);
        drag_top(&mut app, Peg::Left, Peg::Right);

        assert_eq!(app.puzzle().tower().registry().stack(Peg::Left).len(), 2);
        assert!(app.status().contains("rejected"), "status: {}", app.status());
    }

    #[test]
    fn test_click_on_empty_space_holds_nothing() {
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 30, 2), FIELD);
        assert!(!app.puzzle().is_holding());
    }

    #[test]
    fn test_click_on_buried_disc_reports_rejection() {
        let mut app = app();
        let tower = app.puzzle().tower();
        let bottom = tower.disc(DiscId(0)).expect("bottom disc");
        let viewport = Viewport::new(FIELD, tower);
        let (column, row) = (
            viewport.column_of(bottom.position().x),
            viewport.row_of(bottom.position().y),
        );

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row), FIELD);
        assert!(!app.puzzle().is_holding());
        assert_eq!(app.status(), "disc #0 is buried and cannot move");
    }

    #[test]
    fn test_drag_over_collapsed_field_keeps_disc() {
        let mut app = app();
        let (column, row) = top_cell(&app, Peg::Left);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row), FIELD);
        let held = app.puzzle().held().expect("top disc held");
        let before = app.puzzle().tower().disc(held).expect("disc").position();

        let collapsed = Rect::new(1, 4, 78, 0);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 4), collapsed);

        assert_eq!(app.puzzle().tower().disc(held).expect("disc").position(), before);
        assert!(app.puzzle().is_holding());
    }

    #[test]
    fn test_hover_tracks_pointer() {
        let mut app = app();
        let (column, row) = top_cell(&app, Peg::Left);
        app.handle_mouse(mouse(MouseEventKind::Moved, column, row), FIELD);
        assert_eq!(app.hover(), app.puzzle().tower().registry().top(Peg::Left));

        app.handle_mouse(mouse(MouseEventKind::Moved, 30, 2), FIELD);
        assert_eq!(app.hover(), None);
    }

    #[test]
    fn test_reset_and_quit_keys() {
        let mut app = app();
        drag_top(&mut app, Peg::Left, Peg::Center);
        assert!(app.handle_key(KeyCode::Char('r')));
        assert_eq!(app.puzzle().tower().registry().stack(Peg::Left).len(), 3);

        assert!(!app.handle_key(KeyCode::Char('q')));
        assert!(!app.handle_key(KeyCode::Esc));
    }
}
