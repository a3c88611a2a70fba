// src/dungeon/src/pathfinding.rs
//! Best-first grid search used by every mover.
//!
//! Step cost is 1 in all eight directions while the remaining-cost estimate
//! is the Manhattan distance. On an 8-connected grid that estimate can
//! overshoot along diagonals, so a returned path is not guaranteed to be the
//! shortest one. The rectilinear room layout keeps the difference small.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};

use error::{GameError, Result};
use tracing::trace;

use crate::geometry::{Direction, Point};
use crate::level::Level;

#[derive(Clone, Debug)]
struct Node {
    point: Point,
    parent: Option<usize>,
    /// Move taken from the parent to reach `point`.
    step: Option<Direction>,
    cost: i32,
    remaining_cost: i32,
}

impl Node {
    fn final_cost(&self) -> i32 {
        self.cost + self.remaining_cost
    }
}

/// Finds a sequence of moves leading from `start` to `target`.
///
/// The path excludes `start` and ends on `target`. Tiles are admissible when
/// passable or when they hold a closed door; opening the door is left to the
/// mover. Entities standing on tiles are ignored. Among equally promising
/// candidates the one discovered first is expanded first.
pub fn find_path<E>(start: Point, target: Point, level: &Level<E>) -> Result<Vec<Direction>> {
    for p in [start, target] {
        if !level.in_bounds(p) {
            return Err(GameError::OutOfBounds { x: p.x, y: p.y });
        }
    }
    if start == target {
        return Ok(Vec::new());
    }

    let mut nodes = vec![Node {
        point: start,
        parent: None,
        step: None,
        cost: 0,
        remaining_cost: start.manhattan(target),
    }];
    // (final cost, discovery order, node index)
    let mut open = BinaryHeap::from([Reverse((nodes[0].final_cost(), 0_usize, 0_usize))]);
    let mut open_cost: HashMap<Point, (i32, usize)> = HashMap::from([(start, (0, 0))]);
    let mut closed: HashSet<Point> = HashSet::new();
    let mut discovered = 1_usize;

    while let Some(Reverse((_, _, index))) = open.pop() {
        let node = nodes[index].clone();
        // Entries superseded by a cheaper route are skipped.
        if closed.contains(&node.point) || open_cost.get(&node.point) != Some(&(node.cost, index)) {
            continue;
        }
        open_cost.remove(&node.point);
        closed.insert(node.point);

        if node.point == target {
            return Ok(reconstruct(&nodes, index));
        }

        for dir in Direction::ALL {
            let next = node.point.step(dir);
            if closed.contains(&next) || !level.tile_type(next).is_some_and(|t| t.is_pathable()) {
                continue;
            }

            let cost = node.cost + 1;
            let improves = match open_cost.entry(next) {
                Entry::Vacant(_) => true,
                Entry::Occupied(recorded) => recorded.get().0 > cost,
            };
            if !improves {
                continue;
            }

            let child = Node {
                point: next,
                parent: Some(index),
                step: Some(dir),
                cost,
                remaining_cost: next.manhattan(target),
            };
            let child_index = nodes.len();
            open.push(Reverse((child.final_cost(), discovered, child_index)));
            open_cost.insert(next, (cost, child_index));
            nodes.push(child);
            discovered += 1;
        }
    }

    trace!(?start, ?target, explored = closed.len(), "no path");
    Err(GameError::PathNotFound {
        from: start.as_tuple(),
        to: target.as_tuple(),
    })
}

fn reconstruct(nodes: &[Node], mut index: usize) -> Vec<Direction> {
    let mut steps = Vec::new();
    while let Some(dir) = nodes[index].step {
        steps.push(dir);
        match nodes[index].parent {
            Some(parent) => index = parent,
            None => break,
        }
    }
    steps.reverse();
    steps
}
