use grid_util::grid::Grid;
use grid_util::point::Point;
use grid_util::rect::Rect;
use lightning_search::console::render_grid;
use lightning_search::{AstarSolver, GridSolver, PathResult, PathingGrid, VisitRecorder};

// The bordered maze again, but with the middle column walled off so the two
// halves are disconnected. The component precheck already knows there is no
// path; the engine proves it by exhausting the frontier.
fn main() {
    env_logger::init();
    let mut grid: PathingGrid = PathingGrid::new(5, 5, true);
    grid.set_rectangle(&Rect::new(1, 1, 3, 3), false);
    for y in 1..4 {
        grid.set(2, y, true);
    }
    grid.generate_components();
    let start = Point::new(1, 1);
    let goal = Point::new(3, 3);
    if grid.unreachable(&start, &goal) {
        println!("Component check: {} and {} are in different components", start, goal);
    }
    let solver = AstarSolver::new();
    let mut recorder = VisitRecorder::new();
    match solver.find_path_traced(&grid, start, goal, &mut recorder) {
        Ok(PathResult::Found(_)) => unreachable!("the maze is sealed"),
        Ok(PathResult::NotFound) => {
            println!(
                "No path found after settling {} cells:",
                recorder.visited.len()
            );
            println!("{}", render_grid(&grid, &start, &goal, &recorder.visited, &[]));
        }
        Err(e) => eprintln!("{}", e),
    }
}
