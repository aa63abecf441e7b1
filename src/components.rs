use crate::map_grid::Grid;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// Connected components of the traversable cells of a [Grid] under 8-connectivity.
///
/// Two endpoints share a component exactly when a breadth-first search between
/// them succeeds, so this answers reachability without running a search.
/// Non-traversable cells each form their own singleton component.
#[derive(Clone, Debug)]
pub struct Components {
    components: UnionFind<usize>,
    dimension: usize,
}

impl Components {
    /// Links every traversable cell to its traversable neighbours. Only the four
    /// "forward" neighbours are visited per cell, which covers every adjacent pair once.
    pub fn generate(grid: &Grid) -> Components {
        info!("Generating connected components");
        let dimension = grid.dimension();
        let mut components = UnionFind::new(dimension * dimension);
        let ix = |p: &Point| p.y as usize * dimension + p.x as usize;
        for y in 0..dimension as i32 {
            for x in 0..dimension as i32 {
                let point = Point::new(x, y);
                if !grid.is_traversable(&point) {
                    continue;
                }
                let parent_ix = ix(&point);
                [
                    Point::new(x + 1, y - 1),
                    Point::new(x + 1, y),
                    Point::new(x + 1, y + 1),
                    Point::new(x, y + 1),
                ]
                .iter()
                .filter(|p| grid.is_traversable(p))
                .for_each(|p| {
                    components.union(parent_ix, ix(p));
                });
            }
        }
        Components {
            components,
            dimension,
        }
    }

    fn get_ix_point(&self, point: &Point) -> Option<usize> {
        let in_bounds = point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.dimension
            && (point.y as usize) < self.dimension;
        in_bounds.then(|| point.y as usize * self.dimension + point.x as usize)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.get_ix_point(point).map(|ix| self.components.find(ix))
    }

    /// Checks if both points are inside the grid and on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.get_ix_point(start), self.get_ix_point(goal)) {
            (Some(start_ix), Some(goal_ix)) => self.components.equiv(start_ix, goal_ix),
            _ => false,
        }
    }
}
