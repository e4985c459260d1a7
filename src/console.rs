//! Console rendering of grids, visit traces and paths.
//!
//! This is a reference consumer of the trace stream: [ConsoleTrace] redraws
//! the grid after every settled cell, which is enough to watch the frontier
//! sweep towards the goal in a terminal. [render_grid] is also used by the
//! fuzz tests to dump grids the engine disagrees about.

use crate::pathing_grid::PathingGrid;
use crate::trace::TraceSink;
use grid_util::grid::Grid;
use grid_util::point::Point;
use std::thread;
use std::time::Duration;

/// Renders the grid row by row: `S` start, `G` goal, `*` path cells, `+`
/// visited cells, `#` walls and `.` open cells.
pub fn render_grid(
    grid: &PathingGrid,
    start: &Point,
    goal: &Point,
    visited: &[Point],
    path: &[Point],
) -> String {
    let mut out = String::new();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            let glyph = if p == *start {
                'S'
            } else if p == *goal {
                'G'
            } else if path.contains(&p) {
                '*'
            } else if visited.contains(&p) {
                '+'
            } else if !grid.is_open(p) {
                '#'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// [TraceSink] that prints a fresh frame after every settled cell.
///
/// The frame delay is purely presentational: `None` draws as fast as the
/// terminal allows and changes nothing about the search itself.
pub struct ConsoleTrace<'a> {
    grid: &'a PathingGrid,
    start: Point,
    goal: Point,
    visited: Vec<Point>,
    frame_delay: Option<Duration>,
}

impl<'a> ConsoleTrace<'a> {
    pub fn new(
        grid: &'a PathingGrid,
        start: Point,
        goal: Point,
        frame_delay: Option<Duration>,
    ) -> ConsoleTrace<'a> {
        ConsoleTrace {
            grid,
            start,
            goal,
            visited: Vec::new(),
            frame_delay,
        }
    }

    /// The cells settled so far, in expansion order.
    pub fn visited(&self) -> &[Point] {
        &self.visited
    }
}

impl TraceSink for ConsoleTrace<'_> {
    fn visit(&mut self, cell: Point) {
        self.visited.push(cell);
        println!(
            "{}",
            render_grid(self.grid, &self.start, &self.goal, &self.visited, &[])
        );
        if let Some(delay) = self.frame_delay {
            thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_glyphs() {
        let mut grid = PathingGrid::new(3, 3, false);
        grid.set(1, 1, true);
        let start = Point::new(0, 0);
        let goal = Point::new(2, 2);
        let rendered = render_grid(
            &grid,
            &start,
            &goal,
            &[Point::new(0, 1)],
            &[Point::new(1, 0), Point::new(2, 0), Point::new(2, 1)],
        );
        assert_eq!(rendered, "S**\n+#*\n..G\n");
    }

    #[test]
    fn start_and_goal_win_over_path_glyphs() {
        let grid = PathingGrid::new(2, 1, false);
        let start = Point::new(0, 0);
        let goal = Point::new(1, 0);
        let rendered = render_grid(&grid, &start, &goal, &[start], &[start, goal]);
        assert_eq!(rendered, "SG\n");
    }
}
