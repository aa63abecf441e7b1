//! Working set of a single breadth-first search: the frontier queue, the visited
//! set and the predecessor map used to walk back from the goal. A context is
//! created for each search and dropped afterwards, so searches never share state.
use fxhash::{FxBuildHasher, FxHashSet};
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::warn;
use std::collections::VecDeque;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

#[derive(Clone, Debug, Default)]
pub struct SearchContext {
    frontier: VecDeque<Point>,
    visited: FxHashSet<Point>,
    predecessors: FxIndexMap<Point, Point>,
}

impl SearchContext {
    /// Creates an empty context able to hold `capacity` cells without reallocating.
    pub fn with_capacity(capacity: usize) -> SearchContext {
        SearchContext {
            frontier: VecDeque::with_capacity(capacity),
            visited: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            predecessors: FxIndexMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Seeds the frontier with the start cell.
    pub fn push_start(&mut self, start: Point) {
        self.visited.insert(start);
        self.frontier.push_back(start);
    }

    pub fn pop(&mut self) -> Option<Point> {
        self.frontier.pop_front()
    }

    pub fn is_visited(&self, point: &Point) -> bool {
        self.visited.contains(point)
    }

    /// Records how `point` was reached. The first predecessor written for a cell
    /// is kept, later ones are ignored. Returns whether the entry was new.
    pub fn record(&mut self, point: Point, predecessor: Point) -> bool {
        match self.predecessors.entry(point) {
            Vacant(e) => {
                e.insert(predecessor);
                true
            }
            Occupied(_) => false,
        }
    }

    /// Marks a newly discovered cell and queues it for expansion.
    pub fn discover(&mut self, point: Point, predecessor: Point) {
        if self.visited.insert(point) {
            self.record(point, predecessor);
            self.frontier.push_back(point);
        }
    }

    pub fn predecessor(&self, point: &Point) -> Option<Point> {
        self.predecessors.get(point).copied()
    }

    /// Cells in the order they were first reached.
    pub fn discovered(&self) -> impl Iterator<Item = &Point> {
        self.predecessors.keys()
    }

    /// Walks the predecessor chain back from `goal` until `start` and returns the
    /// path ordered from start to goal, both included.
    pub fn reconstruct(&self, start: Point, goal: Point) -> Option<Vec<Point>> {
        let mut path = vec![goal];
        let mut current = goal;
        while current != start {
            match self.predecessor(&current) {
                // Every cell appears once on the chain, so it is never longer than the map.
                Some(previous) if path.len() <= self.predecessors.len() => {
                    current = previous;
                    path.push(current);
                }
                _ => {
                    warn!("Predecessor chain from {} does not lead back to {}", goal, start);
                    return None;
                }
            }
        }
        path.reverse();
        Some(path)
    }
}
