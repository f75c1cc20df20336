//! Coverage grid - scanline fill of a path onto a square boolean grid
//!
//! The sampler never looks at curves directly. It asks "is this cell
//! filled?" on a low resolution grid, so the path is flattened, scaled
//! onto the grid and filled one row at a time.

use super::path::{FillRule, ShapePath};

/// Segments used per curve when flattening for coverage
pub const DEFAULT_CURVE_SAMPLES: usize = 16;

/// A polygon edge crossing a scanline
#[derive(Clone, Copy, Debug)]
struct Crossing {
    x: f32,
    /// +1 for downward edges, -1 for upward edges
    winding: i32,
}

/// Square grid of filled flags, row-major
#[derive(Clone, Debug)]
pub struct CoverageGrid {
    size: usize,
    cells: Vec<bool>,
}

impl CoverageGrid {
    /// An empty (nothing filled) grid
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Fill `path` onto a `size x size` grid
    ///
    /// The view box is scaled uniformly by `size / max(width, height)` and
    /// anchored at the top-left corner, the same way a canvas scale would
    /// place it. A cell is filled when its center is inside the path.
    pub fn fill(path: &ShapePath, size: usize) -> Self {
        Self::fill_with_samples(path, size, DEFAULT_CURVE_SAMPLES)
    }

    pub fn fill_with_samples(path: &ShapePath, size: usize, curve_samples: usize) -> Self {
        let mut grid = Self::empty(size);
        if size == 0 {
            return grid;
        }

        let (width, height) = path.view_box();
        let extent = width.max(height);
        if !(extent > 0.0) || !extent.is_finite() {
            log::warn!("Path view box {}x{} has no area", width, height);
            return grid;
        }
        let scale = size as f32 / extent;

        let polygons: Vec<Vec<(f32, f32)>> = path
            .flatten(curve_samples)
            .into_iter()
            .map(|polygon| {
                polygon
                    .into_iter()
                    .map(|(x, y)| (x * scale, y * scale))
                    .collect()
            })
            .collect();

        if polygons.is_empty() {
            return grid;
        }

        let mut crossings: Vec<Crossing> = Vec::new();
        for row in 0..size {
            let scan_y = row as f32 + 0.5;

            crossings.clear();
            for polygon in &polygons {
                collect_crossings(polygon, scan_y, &mut crossings);
            }
            if crossings.is_empty() {
                continue;
            }
            crossings.sort_by(|a, b| a.x.total_cmp(&b.x));

            grid.fill_row(row, &crossings, path.fill_rule());
        }

        grid
    }

    fn fill_row(&mut self, row: usize, crossings: &[Crossing], rule: FillRule) {
        let mut next = 0;
        let mut winding = 0;
        let mut parity = false;

        for col in 0..self.size {
            let center_x = col as f32 + 0.5;
            while next < crossings.len() && crossings[next].x < center_x {
                winding += crossings[next].winding;
                parity = !parity;
                next += 1;
            }

            let inside = match rule {
                FillRule::NonZero => winding != 0,
                FillRule::EvenOdd => parity,
            };
            if inside {
                self.cells[row * self.size + col] = true;
            }
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell is filled; out-of-bounds cells count as empty
    pub fn is_filled(&self, col: isize, row: isize) -> bool {
        if col < 0 || row < 0 {
            return false;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.size || row >= self.size {
            return false;
        }
        self.cells[row * self.size + col]
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Push every crossing of the closed polygon with the horizontal line `y`
///
/// Edges are half-open in y so a vertex shared by two edges is counted once.
fn collect_crossings(polygon: &[(f32, f32)], y: f32, crossings: &mut Vec<Crossing>) {
    let n = polygon.len();
    for i in 0..n {
        let (x0, y0) = polygon[i];
        let (x1, y1) = polygon[(i + 1) % n];

        if y0 == y1 {
            continue;
        }

        let (winding, lo, hi) = if y0 < y1 { (1, y0, y1) } else { (-1, y1, y0) };
        if y < lo || y >= hi {
            continue;
        }

        let t = (y - y0) / (y1 - y0);
        crossings.push(Crossing {
            x: x0 + t * (x1 - x0),
            winding,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::path::PathCommand;

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<PathCommand> {
        vec![
            PathCommand::MoveTo(x0, y0),
            PathCommand::LineTo(x1, y0),
            PathCommand::LineTo(x1, y1),
            PathCommand::LineTo(x0, y1),
            PathCommand::Close,
        ]
    }

    #[test]
    fn test_full_square() {
        let path = ShapePath::from_commands(rect(0.0, 0.0, 10.0, 10.0), (10.0, 10.0), FillRule::NonZero);
        let grid = CoverageGrid::fill(&path, 10);
        assert_eq!(grid.filled_count(), 100);
    }

    #[test]
    fn test_scaled_down() {
        // 200 unit square onto a 20 cell grid, left half only
        let path = ShapePath::from_commands(rect(0.0, 0.0, 100.0, 200.0), (200.0, 200.0), FillRule::NonZero);
        let grid = CoverageGrid::fill(&path, 20);
        assert_eq!(grid.filled_count(), 200);
        assert!(grid.is_filled(9, 0));
        assert!(!grid.is_filled(10, 0));
    }

    #[test]
    fn test_even_odd_hole() {
        let mut commands = rect(0.0, 0.0, 10.0, 10.0);
        commands.extend(rect(2.0, 2.0, 8.0, 8.0));
        let path = ShapePath::from_commands(commands, (10.0, 10.0), FillRule::EvenOdd);
        let grid = CoverageGrid::fill(&path, 10);
        assert_eq!(grid.filled_count(), 100 - 36);
        assert!(!grid.is_filled(5, 5));
    }

    #[test]
    fn test_nonzero_same_direction_has_no_hole() {
        let mut commands = rect(0.0, 0.0, 10.0, 10.0);
        commands.extend(rect(2.0, 2.0, 8.0, 8.0));
        let path = ShapePath::from_commands(commands, (10.0, 10.0), FillRule::NonZero);
        let grid = CoverageGrid::fill(&path, 10);
        assert_eq!(grid.filled_count(), 100);
    }

    #[test]
    fn test_nonzero_reversed_inner_is_hole() {
        let mut commands = rect(0.0, 0.0, 10.0, 10.0);
        // Counter-clockwise inner square
        commands.extend(vec![
            PathCommand::MoveTo(2.0, 2.0),
            PathCommand::LineTo(2.0, 8.0),
            PathCommand::LineTo(8.0, 8.0),
            PathCommand::LineTo(8.0, 2.0),
            PathCommand::Close,
        ]);
        let path = ShapePath::from_commands(commands, (10.0, 10.0), FillRule::NonZero);
        let grid = CoverageGrid::fill(&path, 10);
        assert!(!grid.is_filled(5, 5));
        assert_eq!(grid.filled_count(), 64);
    }

    #[test]
    fn test_zero_area_path() {
        let path = ShapePath::from_commands(
            vec![
                PathCommand::MoveTo(0.0, 5.0),
                PathCommand::LineTo(10.0, 5.0),
                PathCommand::LineTo(0.0, 5.0),
                PathCommand::Close,
            ],
            (10.0, 10.0),
            FillRule::NonZero,
        );
        let grid = CoverageGrid::fill(&path, 10);
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_is_empty() {
        let path = ShapePath::from_commands(rect(0.0, 0.0, 10.0, 10.0), (10.0, 10.0), FillRule::NonZero);
        let grid = CoverageGrid::fill(&path, 10);
        assert!(!grid.is_filled(-1, 0));
        assert!(!grid.is_filled(0, 10));
    }
}
