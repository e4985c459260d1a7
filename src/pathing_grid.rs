use crate::{N_SMALLVEC_SIZE, STEP_COST};
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] maintains information about components using a [UnionFind]
/// structure in addition to the raw [bool] grid values in the [BoolGrid] that
/// determine whether a cell is blocked ([true]) or open ([false]). The
/// components allow cheap reachability queries; the search itself only reads
/// the occupancy values. Implements [Grid] by building on [BoolGrid].
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl PathingGrid {
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }

    /// Whether the cell is inside the grid and not blocked. Out-of-bounds
    /// cells are never open, so an empty grid has no open cells at all.
    pub fn is_open(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }

    /// The open orthogonal neighbours of a cell, enumerated up, right, down,
    /// left. The fixed order keeps frontier insertion, and with it the
    /// expansion trace, deterministic.
    pub fn neighbours(&self, pos: Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        [
            Point::new(pos.x, pos.y - 1),
            Point::new(pos.x + 1, pos.y),
            Point::new(pos.x, pos.y + 1),
            Point::new(pos.x - 1, pos.y),
        ]
        .into_iter()
        .filter(|p| self.is_open(*p))
        .collect()
    }

    /// Neighbours paired with the uniform step cost, in the shape the solver
    /// feeds to the search.
    pub fn neighbours_and_cost(&self, pos: &Point) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        self.neighbours(*pos)
            .into_iter()
            .map(|p| (p, STEP_COST))
            .collect()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.grid.get_ix_point(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.grid.get_ix_point(start);
            let goal_ix = self.grid.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to
    /// the same components.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if !self.grid.get(x, y) {
                    let point = Point::new(x as i32, y as i32);
                    let parent_ix = self.grid.get_ix(x, y);
                    // Linking right and down neighbours covers every open
                    // 4-connected pair exactly once.
                    for p in [
                        Point::new(point.x + 1, point.y),
                        Point::new(point.x, point.y + 1),
                    ] {
                        if self.is_open(p) {
                            let ix = self.grid.get_ix(p.x as usize, p.y as usize);
                            self.components.union(parent_ix, ix);
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height {
            let values = (0..self.grid.width)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl Grid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        PathingGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and
    /// flags the components as dirty if components are (potentially) broken
    /// apart into multiple.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        if blocked && !self.grid.get(x, y) {
            self.components_dirty = true;
        } else if !blocked {
            let p = Point::new(x as i32, y as i32);
            let p_ix = self.grid.get_ix(x, y);
            for n in self.neighbours(p) {
                self.components
                    .union(p_ix, self.grid.get_ix(n.x as usize, n.y as usize));
            }
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
