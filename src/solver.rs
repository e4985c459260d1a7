//! High-level search API over [PathingGrid].
//!
//! [GridSolver] supplies the heuristic and successor seams and layers the
//! search entry points on top of [astar_observed]: a headless search, a
//! traced search, and a fully parameterized one with cooperative
//! cancellation. [AstarSolver] is the stock implementation for unit-cost
//! 4-connected movement.

use crate::astar::astar_observed;
use crate::pathing_grid::PathingGrid;
use crate::trace::{NoopTrace, TraceSink};
use crate::{N_SMALLVEC_SIZE, STEP_COST};
use grid_util::grid::Grid;
use grid_util::point::Point;
use log::debug;
use smallvec::SmallVec;
use thiserror::Error;

/// Outcome of a completed search: the full start-to-goal path, or proof by
/// frontier exhaustion that no path exists. Partial paths are never produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
    /// Ordered cells from start to goal inclusive.
    Found(Vec<Point>),
    NotFound,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    /// The path, if one was found.
    pub fn path(self) -> Option<Vec<Point>> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }
}

/// Caller contract violations. Degenerate but well-formed inputs (empty
/// grids, blocked endpoints, unreachable goals) are ordinary
/// [PathResult::NotFound] outcomes, not errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("endpoint {0} lies outside a {1}x{2} grid")]
    OutOfBounds(Point, usize, usize),
}

/// Heuristic and successor seams plus the search entry points built on them.
pub trait GridSolver {
    type Successors: IntoIterator<Item = (Point, i32)>;

    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;
    fn successors(&self, grid: &PathingGrid, node: &Point) -> Self::Successors;

    /// Headless search: no trace, never cancelled.
    fn find_path(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
    ) -> Result<PathResult, SearchError> {
        self.find_path_traced(grid, start, goal, &mut NoopTrace)
    }

    /// Search that reports every settled cell to `sink` in expansion order.
    fn find_path_traced<S: TraceSink>(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
        sink: &mut S,
    ) -> Result<PathResult, SearchError> {
        self.find_path_with(grid, start, goal, sink, || false)
    }

    /// Fully parameterized search. `cancelled` is polled once per frontier
    /// pop; a cancelled search reports [PathResult::NotFound].
    ///
    /// Endpoint handling: an empty grid and blocked endpoints are
    /// [PathResult::NotFound]; an endpoint outside a non-empty grid is a
    /// [SearchError::OutOfBounds].
    fn find_path_with<S: TraceSink, F: FnMut() -> bool>(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
        sink: &mut S,
        cancelled: F,
    ) -> Result<PathResult, SearchError> {
        if grid.width() == 0 || grid.height() == 0 {
            debug!("Empty grid, nothing to search");
            return Ok(PathResult::NotFound);
        }
        for endpoint in [start, goal] {
            if !grid.in_bounds(endpoint.x, endpoint.y) {
                return Err(SearchError::OutOfBounds(
                    endpoint,
                    grid.width(),
                    grid.height(),
                ));
            }
            if !grid.is_open(endpoint) {
                debug!("Endpoint {} is blocked, no path can reach it", endpoint);
                return Ok(PathResult::NotFound);
            }
        }
        let result = astar_observed(
            &start,
            |node| self.successors(grid, node),
            |node| self.heuristic(node, &goal),
            |node| *node == goal,
            |node| sink.visit(*node),
            cancelled,
        );
        match result {
            Some((path, cost)) => {
                debug!("Found a path of cost {} from {} to {}", cost, start, goal);
                Ok(PathResult::Found(path))
            }
            None => {
                debug!("Frontier exhausted, {} is not reachable from {}", goal, start);
                Ok(PathResult::NotFound)
            }
        }
    }
}

/// Best-first solver using the Manhattan distance heuristic, which is
/// admissible and consistent for unit-cost 4-connected movement: the first
/// settled cost of every cell is already optimal and no settled cell ever
/// needs re-opening.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Multiplier applied to the heuristic. The default 1.0 keeps the
    /// heuristic admissible and the returned paths optimal; larger values
    /// trade optimality for fewer expansions.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Point, i32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &PathingGrid, node: &Point) -> Self::Successors {
        grid.neighbours_and_cost(node)
    }

    /// Manhattan distance times the step cost and the heuristic factor.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        let manhattan = (p1.x - p2.x).abs() + (p1.y - p2.y).abs();
        ((manhattan * STEP_COST) as f32 * self.heuristic_factor) as i32
    }
}
