use grid_util::grid::Grid;
use grid_util::point::Point;
use grid_util::rect::Rect;
use lightning_search::console::{render_grid, ConsoleTrace};
use lightning_search::{AstarSolver, GridSolver, PathResult, PathingGrid};
use std::time::Duration;

// In this demo a path is found on a grid with shape
// #####
// #S  #
// # # #
// #  G#
// #####
// S marks the start
// G marks the goal
// Every settled cell is animated on the console while the search runs.
fn main() {
    env_logger::init();
    let mut grid: PathingGrid = PathingGrid::new(5, 5, true);
    grid.set_rectangle(&Rect::new(1, 1, 3, 3), false);
    grid.set(2, 2, true);
    grid.generate_components();
    let start = Point::new(1, 1);
    let goal = Point::new(3, 3);
    let solver = AstarSolver::new();
    let mut trace = ConsoleTrace::new(&grid, start, goal, Some(Duration::from_millis(200)));
    match solver.find_path_traced(&grid, start, goal, &mut trace) {
        Ok(PathResult::Found(path)) => {
            println!("A path has been found:");
            println!("{}", render_grid(&grid, &start, &goal, trace.visited(), &path));
            for p in &path {
                println!("{:?}", p);
            }
        }
        Ok(PathResult::NotFound) => println!("No path found!"),
        Err(e) => eprintln!("{}", e),
    }
}
