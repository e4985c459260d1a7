//! # lightning_search
//!
//! A grid-based pathfinding system with an observable search trace.
//! Implements [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over
//! uniform-cost, [4-connected](https://en.wikipedia.org/wiki/Pixel_connectivity)
//! grids using the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry)
//! heuristic, and reports every settled cell to a [TraceSink] so animations
//! and debuggers can watch the frontier sweep the grid. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so callers can reject hopeless queries without flood-filling.

pub mod astar;
pub mod console;
pub mod pathing_grid;
pub mod solver;
pub mod trace;

pub use crate::astar::astar_observed;
pub use crate::pathing_grid::PathingGrid;
pub use crate::solver::{AstarSolver, GridSolver, PathResult, SearchError};
pub use crate::trace::{NoopTrace, TraceSink, VisitRecorder};

/// Cost of a single orthogonal step. Every move costs the same; there are no
/// diagonal moves and no terrain weights.
pub const STEP_COST: i32 = 1;

/// A cell has at most four orthogonal neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
