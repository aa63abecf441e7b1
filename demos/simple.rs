use grid_bfs::{Grid, GridSolver, PathFinder};
use grid_util::point::Point;

// In this example a path is found on a 5x5 map with shape
// S..#.
// #.#.#
// .....
// #.#.#
// ....G
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have an 8-neighborhood

fn main() {
    let rows = ["...#.", "#.#.#", ".....", "#.#.#", "....."];
    let mut grid = match Grid::new(&rows, Point::new(0, 0), Point::new(4, 4)) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let solver = PathFinder::new();
    if let Some(path) = solver.find_path(&grid) {
        println!("A path has been found:");
        for p in path {
            println!("{:?}", p);
        }
    }
    println!("Returned: {}", solver.search(&mut grid));
    print!("{}", grid);
}
