use grid_util::point::Point;
use log::{debug, info};
use smallvec::SmallVec;

use crate::{
    cell::CellState, map_grid::Grid, search_context::SearchContext, solver::GridSolver,
    N_SMALLVEC_SIZE,
};

/// Breadth-first search over the 8-connected grid. Every step costs 1, so the
/// path found has the fewest possible steps.
///
/// The goal is accepted as soon as it is a neighbour of an expanded cell, before
/// its bounds or state are looked at; only the cells in between have to be empty.
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    /// Skip the search when the connected components already show the goal is unreachable.
    pub precheck_components: bool,
}

impl PathFinder {
    pub fn new() -> PathFinder {
        PathFinder {
            precheck_components: false,
        }
    }

    pub fn with_precheck() -> PathFinder {
        PathFinder {
            precheck_components: true,
        }
    }
}

/// The 8 neighbours of `node`, x offset in the outer loop and y offset in the
/// inner one. This order decides which of several shortest paths is returned.
pub fn moore_neighbours(node: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
    let mut neighbours = SmallVec::new();
    for dx in -1..=1 {
        for dy in -1..=1 {
            if dx != 0 || dy != 0 {
                neighbours.push(Point::new(node.x + dx, node.y + dy));
            }
        }
    }
    neighbours
}

impl GridSolver for PathFinder {
    fn find_path(&self, grid: &Grid) -> Option<Vec<Point>> {
        let (start, goal) = (grid.start(), grid.goal());
        if start == goal {
            return Some(vec![start]);
        }
        if self.precheck_components && !grid.reachable() {
            info!("{} and {} are not on the same component", start, goal);
            return None;
        }
        let dimension = grid.dimension();
        let mut ct = SearchContext::with_capacity(dimension * dimension);
        ct.push_start(start);
        while let Some(node) = ct.pop() {
            for neighbour in moore_neighbours(&node) {
                if neighbour == goal {
                    debug!("Reached goal {} from {}", goal, node);
                    ct.record(goal, node);
                    return ct.reconstruct(start, goal);
                }
                if grid.cell_state(&neighbour) == Some(CellState::Empty)
                    && !ct.is_visited(&neighbour)
                {
                    ct.discover(neighbour, node);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str], start: (i32, i32), goal: (i32, i32)) -> Grid {
        Grid::new(
            rows,
            Point::new(start.0, start.1),
            Point::new(goal.0, goal.1),
        )
        .unwrap()
    }

    #[test]
    fn neighbour_order() {
        let neighbours = moore_neighbours(&Point::new(5, 5));
        let offsets = neighbours
            .iter()
            .map(|p| (p.x - 5, p.y - 5))
            .collect::<Vec<_>>();
        assert_eq!(
            offsets,
            vec![
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1)
            ]
        );
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let mut pathing_grid = grid(&["###", "#.#", "###"], (1, 1), (1, 1));
        let solver = PathFinder::new();
        assert_eq!(solver.find_path(&pathing_grid), Some(vec![Point::new(1, 1)]));
        assert!(solver.search(&mut pathing_grid));
        assert_eq!(pathing_grid.path_cells(), 1);
        assert_eq!(pathing_grid.to_text(), "###\n#@#\n###\n");
    }

    /// Asserts that the optimal 3 step solution around the obstacle is found.
    #[test]
    fn solve_simple_problem() {
        let mut pathing_grid = grid(&["...", ".#.", "..."], (0, 0), (2, 2));
        let solver = PathFinder::new();
        let path = solver.find_path(&pathing_grid).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 2),
                Point::new(2, 2)
            ]
        );
        assert!(solver.search(&mut pathing_grid));
        assert_eq!(pathing_grid.to_text(), "@..\n@#.\n.@@\n");
    }

    #[test]
    fn diagonal_moves() {
        let pathing_grid = grid(&["...", "...", "..."], (0, 0), (2, 2));
        let path = PathFinder::new().find_path(&pathing_grid).unwrap();
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
        );
    }

    #[test]
    fn test_complex() {
        let rows = [
            "..........",
            ".#...#....",
            "..........",
            "..........",
            "..........",
            "#.........",
            "..........",
            "..........",
            "........#.",
            "..........",
        ];
        let mut pathing_grid = grid(&rows, (0, 0), (7, 7));
        let solver = PathFinder::new();
        assert_eq!(solver.path_length(&pathing_grid), Some(8));
        assert!(solver.search(&mut pathing_grid));
        assert_eq!(pathing_grid.path_cells(), 9);
        assert_eq!(
            pathing_grid.cell_state(&Point::new(1, 2)),
            Some(CellState::Path)
        );
        assert_eq!(
            pathing_grid.cell_state(&Point::new(1, 1)),
            Some(CellState::Blocked)
        );
    }

    #[test]
    fn wall_blocks_path() {
        let mut pathing_grid = grid(&["...", "###", "..."], (0, 0), (2, 2));
        let before = pathing_grid.to_text();
        let solver = PathFinder::new();
        assert_eq!(solver.find_path(&pathing_grid), None);
        assert!(!solver.search(&mut pathing_grid));
        assert_eq!(pathing_grid.to_text(), before);
    }

    #[test]
    fn invalid_cells_are_not_entered() {
        let mut pathing_grid = grid(&["...", "?x?", "..."], (0, 0), (2, 2));
        assert!(!PathFinder::new().search(&mut pathing_grid));
        assert_eq!(pathing_grid.to_text(), "@..\n???\n..@\n");
    }

    #[test]
    fn adjacent_goal_found_directly() {
        let mut pathing_grid = grid(&["#.", ".#"], (1, 0), (0, 1));
        let solver = PathFinder::new();
        assert_eq!(solver.path_length(&pathing_grid), Some(1));
        assert!(solver.search(&mut pathing_grid));
        assert_eq!(pathing_grid.to_text(), "#@\n@#\n");
    }

    #[test]
    fn earlier_route_cells_are_not_reused() {
        let mut pathing_grid = grid(&["...", "...", "..."], (0, 0), (2, 2));
        let solver = PathFinder::new();
        assert!(solver.search(&mut pathing_grid));
        assert_eq!(pathing_grid.to_text(), "@..\n.@.\n..@\n");
        // The marked centre is no longer empty, so the second route goes around it.
        assert!(solver.search(&mut pathing_grid));
        assert_eq!(pathing_grid.to_text(), "@..\n@@.\n.@@\n");
        pathing_grid.clear_path();
        assert_eq!(pathing_grid.to_text(), "@..\n...\n..@\n");
    }

    #[test]
    fn precheck_agrees_with_search() {
        let enclosed = [".....", ".###.", ".#.#.", ".###.", "....."];
        let open = [".....", ".###.", ".....", ".###.", "....."];
        for rows in [enclosed, open] {
            let pathing_grid = grid(&rows, (0, 0), (2, 2));
            let plain = PathFinder::new().find_path(&pathing_grid);
            let checked = PathFinder::with_precheck().find_path(&pathing_grid);
            assert_eq!(plain, checked);
        }
    }
}
