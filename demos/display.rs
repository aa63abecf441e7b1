use grid_bfs::{Grid, GridError, GridSolver, PathFinder};
use grid_util::point::Point;
use std::io::{self, Write};

// Reads a map from a file given on the command line (or uses a built-in one), searches
// from the top-left to the bottom-right corner and redraws the terminal with the result.

const DEFAULT_MAP: &str = "\
....#...
.##.#.#.
.#..#.#.
.#.##.#.
.#....#.
.####.#.
......#.
.####...
";

fn clear_and_print(grid: &Grid) -> io::Result<()> {
    let mut out = io::stdout().lock();
    // ANSI: clear screen, move cursor home.
    write!(out, "\x1B[2J\x1B[1;1H")?;
    writeln!(out, "{}", grid)?;
    out.flush()
}

fn load(text: &str) -> Result<Grid, GridError> {
    let n = text.lines().count() as i32;
    Grid::parse(text, Point::new(0, 0), Point::new(n - 1, n - 1))
}

fn main() -> io::Result<()> {
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_MAP.to_owned(),
    };
    let mut grid = match load(&text) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Could not build map: {e}");
            std::process::exit(1);
        }
    };
    let found = PathFinder::new().search(&mut grid);
    clear_and_print(&grid)?;
    println!("Returned: {found}");
    Ok(())
}
