//! Breadth-first flood fills bounded by a mask.

use std::collections::{HashSet, VecDeque};

use crate::core::types::{IVec3, Result};
use crate::function::RegionFunction;
use crate::mask::Mask;
use crate::math::direction::{Direction, RECURSE_DIRECTIONS};
use crate::operation::Operation;
use crate::session::EditSession;
use crate::world::World;

/// Rule deciding which neighbours a search may step to.
pub trait Traversal {
    /// Offsets tried from each cell, in order.
    fn directions(&self) -> &[Direction];

    /// Whether the step `from -> to` is allowed, before the mask is asked.
    fn allows(&self, _from: IVec3, _to: IVec3) -> bool {
        true
    }
}

/// Spreads in all six directions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Recursive;

impl Traversal for Recursive {
    fn directions(&self) -> &[Direction] {
        &RECURSE_DIRECTIONS
    }
}

const NO_UP: [Direction; 5] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::Down,
];

/// Spreads sideways only on the starting layer, downwards everywhere.
#[derive(Clone, Copy, Debug)]
pub struct Downward {
    base_y: i32,
}

impl Traversal for Downward {
    fn directions(&self) -> &[Direction] {
        &NO_UP
    }

    fn allows(&self, from: IVec3, to: IVec3) -> bool {
        from.y == self.base_y || to.y < from.y
    }
}

/// Never steps upwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct NonRising;

impl Traversal for NonRising {
    fn directions(&self) -> &[Direction] {
        &NO_UP
    }
}

/// Flood fill over face neighbours.
///
/// Cells are processed in the order they were discovered. A cell enters the
/// visited set when it is queued and is never queued again. Seeds skip the
/// mask test; every other cell must pass it at discovery time.
pub struct BreadthFirstSearch<T, M, F> {
    traversal: T,
    mask: M,
    function: F,
    queue: VecDeque<(IVec3, usize)>,
    visited: HashSet<IVec3>,
    max_depth: Option<usize>,
    affected: usize,
}

pub type RecursiveVisitor<M, F> = BreadthFirstSearch<Recursive, M, F>;
pub type DownwardVisitor<M, F> = BreadthFirstSearch<Downward, M, F>;
pub type NonRisingVisitor<M, F> = BreadthFirstSearch<NonRising, M, F>;

impl<M: Mask, F: RegionFunction> BreadthFirstSearch<Recursive, M, F> {
    pub fn new(mask: M, function: F) -> Self {
        Self::with_traversal(Recursive, mask, function)
    }
}

impl<M: Mask, F: RegionFunction> BreadthFirstSearch<Downward, M, F> {
    /// Sideways spreading is limited to the layer at `base_y`.
    pub fn new(mask: M, function: F, base_y: i32) -> Self {
        Self::with_traversal(Downward { base_y }, mask, function)
    }
}

impl<M: Mask, F: RegionFunction> BreadthFirstSearch<NonRising, M, F> {
    pub fn new(mask: M, function: F) -> Self {
        Self::with_traversal(NonRising, mask, function)
    }
}

impl<T: Traversal, M: Mask, F: RegionFunction> BreadthFirstSearch<T, M, F> {
    pub fn with_traversal(traversal: T, mask: M, function: F) -> Self {
        Self {
            traversal,
            mask,
            function,
            queue: VecDeque::new(),
            visited: HashSet::new(),
            max_depth: None,
            affected: 0,
        }
    }

    /// Stop expanding past this many steps from a seed.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Add a seed. Cells already visited are ignored.
    pub fn visit(&mut self, pos: IVec3) {
        if self.visited.insert(pos) {
            self.queue.push_back((pos, 0));
        }
    }

    /// Cells where the function reported a change.
    pub fn affected(&self) -> usize {
        self.affected
    }

    /// Number of distinct cells discovered so far.
    pub fn visited(&self) -> usize {
        self.visited.len()
    }

    pub fn function(&self) -> &F {
        &self.function
    }

    fn is_visitable(&self, world: &dyn World, from: IVec3, to: IVec3) -> bool {
        self.traversal.allows(from, to) && self.mask.test(world, to)
    }
}

impl<T: Traversal, M: Mask, F: RegionFunction> Operation for BreadthFirstSearch<T, M, F> {
    fn resume(&mut self, session: &mut EditSession<'_>) -> Result<bool> {
        while let Some((pos, depth)) = self.queue.pop_front() {
            if self.function.apply(session, pos)? {
                self.affected += 1;
            }
            if self.max_depth.is_some_and(|max| depth >= max) {
                continue;
            }
            for direction in self.traversal.directions() {
                let next = pos + direction.offset();
                if !self.visited.contains(&next) && self.is_visitable(session.world(), pos, next) {
                    self.visited.insert(next);
                    self.queue.push_back((next, depth + 1));
                }
            }
        }
        Ok(false)
    }

    fn cancel(&mut self) {
        self.queue.clear();
    }
}
