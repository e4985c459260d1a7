//! Fuzzes the pathfinding system by checking for many random grids that a
//! path is found exactly when the goal shares a connected component with the
//! start, that found paths are valid and as short as a brute-force BFS says
//! they can be, and that repeated runs are deterministic.

use grid_util::grid::Grid;
use grid_util::point::Point;
use lightning_search::console::render_grid;
use lightning_search::{AstarSolver, GridSolver, PathingGrid, VisitRecorder};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(n: usize, rng: &mut StdRng) -> PathingGrid {
    let mut pathing_grid: PathingGrid = PathingGrid::new(n, n, false);
    for x in 0..pathing_grid.width() {
        for y in 0..pathing_grid.height() {
            pathing_grid.set(x, y, rng.gen_bool(0.4));
        }
    }
    // Keep the corner endpoints open so reachability is the only variable.
    pathing_grid.set(0, 0, false);
    pathing_grid.set(n - 1, n - 1, false);
    pathing_grid.generate_components();
    pathing_grid
}

/// Brute-force shortest 4-connected distance in edges, or [None] if the goal
/// cannot be reached.
fn bfs_edge_count(grid: &PathingGrid, start: Point, goal: Point) -> Option<usize> {
    if !grid.is_open(start) || !grid.is_open(goal) {
        return None;
    }
    let mut dist = vec![usize::MAX; grid.width() * grid.height()];
    let mut queue = VecDeque::new();
    dist[grid.get_ix(start.x as usize, start.y as usize)] = 0;
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        let d = dist[grid.get_ix(current.x as usize, current.y as usize)];
        if current == goal {
            return Some(d);
        }
        for next in grid.neighbours(current) {
            let next_ix = grid.get_ix(next.x as usize, next.y as usize);
            if dist[next_ix] == usize::MAX {
                dist[next_ix] = d + 1;
                queue.push_back(next);
            }
        }
    }
    None
}

fn assert_is_valid_path(grid: &PathingGrid, path: &[Point], start: Point, goal: Point) {
    assert_eq!(*path.first().unwrap(), start);
    assert_eq!(*path.last().unwrap(), goal);
    for p in path {
        assert!(grid.is_open(*p), "path passes through a wall at {}", p);
    }
    for pair in path.windows(2) {
        let step = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
        assert_eq!(step, 1, "path jumps from {} to {}", pair[0], pair[1]);
    }
    let mut unique = path.to_vec();
    unique.sort_by_key(|p| (p.x, p.y));
    unique.dedup();
    assert_eq!(unique.len(), path.len(), "path revisits a cell");
}

#[test]
fn fuzz_existence_matches_components() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = AstarSolver::new();
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let random_grid = random_grid(N, &mut rng);
        let reachable = random_grid.reachable(&start, &end);
        let result = solver.find_path(&random_grid, start, end).unwrap();
        // Show the grid if the engine and the components disagree
        if result.is_found() != reachable {
            println!("{}", render_grid(&random_grid, &start, &end, &[], &[]));
        }
        assert!(result.is_found() == reachable);
    }
}

#[test]
fn fuzz_paths_are_optimal() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = AstarSolver::new();
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let random_grid = random_grid(N, &mut rng);
        let result = solver.find_path(&random_grid, start, end).unwrap();
        let shortest = bfs_edge_count(&random_grid, start, end);
        match (result.path(), shortest) {
            (Some(path), Some(edges)) => {
                assert_is_valid_path(&random_grid, &path, start, end);
                if path.len() - 1 != edges {
                    println!("{}", render_grid(&random_grid, &start, &end, &[], &path));
                }
                assert_eq!(path.len() - 1, edges);
            }
            (None, None) => {}
            (path, shortest) => {
                println!("{}", render_grid(&random_grid, &start, &end, &[], &[]));
                panic!("engine found {:?} but BFS found {:?}", path, shortest);
            }
        }
    }
}

#[test]
fn fuzz_traces_are_deterministic() {
    const N: usize = 10;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = AstarSolver::new();
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let random_grid = random_grid(N, &mut rng);
        let mut first = VisitRecorder::new();
        let mut second = VisitRecorder::new();
        let a = solver
            .find_path_traced(&random_grid, start, end, &mut first)
            .unwrap();
        let b = solver
            .find_path_traced(&random_grid, start, end, &mut second)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(first.visited, second.visited);
        // Exhaustion is bounded by the cell count even with no path.
        assert!(first.visited.len() <= N * N);
    }
}
