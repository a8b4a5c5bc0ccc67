//! Mapping between terminal cells and world coordinates.
//!
//! The play field is a front view of the `z = 0` plane: `+x` is drawn
//! on the left and `y = 0` is the bottom row.

use ratatui::layout::Rect;
use strictly_hanoi::{Disc, DiscId, PEG_SPACING, Point3, Tower, ZONE_HALF_WIDTH};

/// Half of the visible world width.
const X_EXTENT: f32 = PEG_SPACING + ZONE_HALF_WIDTH;

/// Cell ↔ world transform for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    area: Rect,
    row_height: f32,
}

impl Viewport {
    /// Creates a viewport over `area` where one row is one disc thick.
    pub fn new(area: Rect, tower: &Tower) -> Self {
        let row_height = tower.discs().first().map(Disc::height).unwrap_or(1.0);
        Self { area, row_height }
    }

    /// Returns the covered terminal area.
    pub fn area(&self) -> Rect {
        self.area
    }

    fn columns_per_unit(&self) -> f32 {
        f32::from(self.area.width.saturating_sub(1)) / (2.0 * X_EXTENT)
    }

    fn bottom(&self) -> u16 {
        self.area.bottom().saturating_sub(1)
    }

    /// True if the cell lies inside the play field.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }

    /// Column drawing world `x`, clamped to the field.
    pub fn column_of(&self, x: f32) -> u16 {
        let offset = ((X_EXTENT - x) * self.columns_per_unit()).round();
        let max = f32::from(self.area.width.saturating_sub(1));
        self.area.x + offset.clamp(0.0, max) as u16
    }

    /// Row drawing world `y`, clamped to the field.
    pub fn row_of(&self, y: f32) -> u16 {
        let rows_up = (y / self.row_height).round();
        let max = f32::from(self.area.height.saturating_sub(1));
        self.bottom() - rows_up.clamp(0.0, max) as u16
    }

    /// World point on the `z = 0` plane under a cell.
    ///
    /// Cells outside the field are clamped to its edge. An empty field
    /// maps every cell to the origin.
    pub fn world_at(&self, column: u16, row: u16) -> Point3<f32> {
        if self.area.is_empty() {
            return Point3::origin();
        }
        let column = column.clamp(self.area.x, self.area.right().saturating_sub(1));
        let row = row.clamp(self.area.y, self.bottom());

        let per_unit = self.columns_per_unit();
        let x = if per_unit > 0.0 {
            X_EXTENT - f32::from(column - self.area.x) / per_unit
        } else {
            0.0
        };
        let y = f32::from(self.bottom() - row) * self.row_height;
        Point3::new(x, y, 0.0)
    }

    /// One-row rectangle covered by a disc.
    pub fn disc_span(&self, disc: &Disc) -> Rect {
        let center = self.column_of(disc.position().x);
        let half = ((disc.radius() * self.columns_per_unit()).round() as u16).max(1);
        let left = center.saturating_sub(half).max(self.area.x);
        let right = center
            .saturating_add(half)
            .saturating_add(1)
            .min(self.area.right());
        Rect::new(left, self.row_of(disc.position().y), right.saturating_sub(left), 1)
    }

    /// Topmost-drawn disc covering a cell.
    pub fn disc_at(&self, tower: &Tower, column: u16, row: u16) -> Option<DiscId> {
        if !self.contains(column, row) {
            return None;
        }
        tower
            .discs()
            .iter()
            .rev()
            .find(|disc| {
                let span = self.disc_span(disc);
                row == span.y && column >= span.x && column < span.right()
            })
            .map(Disc::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_hanoi::{DiscColor, DiscSpec, Peg, TowerConfig};

    fn viewport() -> (Viewport, Tower) {
        let tower = Tower::new(&TowerConfig::default()).expect("valid config");
        (Viewport::new(Rect::new(1, 1, 61, 20), &tower), tower)
    }

    #[test]
    fn test_left_peg_draws_left_of_right_peg() {
        let (viewport, _) = viewport();
        assert!(viewport.column_of(Peg::Left.center_x()) < viewport.column_of(Peg::Right.center_x()));
        assert_eq!(viewport.column_of(0.0), 31);
    }

    #[test]
    fn test_world_round_trip_resolves_same_peg() {
        let (viewport, _) = viewport();
        for peg in Peg::ALL {
            let column = viewport.column_of(peg.center_x());
            let point = viewport.world_at(column, 10);
            assert_eq!(Peg::resolve(point.x), peg);
            assert!((point.x - peg.center_x()).abs() < 0.5);
        }
    }

    #[test]
    fn test_rows_count_up_from_floor() {
        let (viewport, _) = viewport();
        assert_eq!(viewport.row_of(0.0), 20);
        assert_eq!(viewport.row_of(0.8), 19);
        assert_eq!(viewport.world_at(5, 19).y, 0.8);
    }

    #[test]
    fn test_outside_cells_clamp() {
        let (viewport, _) = viewport();
        assert_eq!(viewport.world_at(0, 0), viewport.world_at(1, 1));
        assert!(!viewport.contains(0, 0));
    }

    #[test]
    fn test_empty_field_maps_to_origin() {
        let (_, tower) = viewport();
        let flat = Viewport::new(Rect::new(1, 4, 78, 0), &tower);
        assert_eq!(flat.world_at(10, 4), Point3::origin());

        let narrow = Viewport::new(Rect::new(1, 4, 0, 10), &tower);
        assert_eq!(narrow.world_at(0, 0), Point3::origin());
        assert!(!narrow.contains(1, 5));
    }

    #[test]
    fn test_huge_disc_span_clips_to_field() {
        let config = TowerConfig::default().with_discs(vec![DiscSpec::new(100_000.0, DiscColor::Red)]);
        let tower = Tower::new(&config).expect("valid config");
        let area = Rect::new(1, 4, 78, 16);
        let viewport = Viewport::new(area, &tower);

        let span = viewport.disc_span(&tower.discs()[0]);
        assert_eq!(span.x, area.x);
        assert_eq!(span.right(), area.right());
        assert_eq!(span.height, 1);
    }

    #[test]
    fn test_hit_top_disc() {
        let (viewport, tower) = viewport();
        let top = tower.registry().top(Peg::Left).expect("full left peg");
        let disc = tower.disc(top).expect("disc");
        let column = viewport.column_of(disc.position().x);
        let row = viewport.row_of(disc.position().y);

        assert_eq!(viewport.disc_at(&tower, column, row), Some(top));
        assert_eq!(viewport.disc_at(&tower, viewport.column_of(0.0), row), None);
    }
}
