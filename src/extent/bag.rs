//! Finite material pool charged for every placed block.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::block::Block;
use crate::core::types::{IVec3, Result};

use super::{Chain, Stage};

/// Inventory-like pool of block types.
pub trait BlockBag {
    /// Take one block of type `id`. Returns false when none is left.
    fn consume(&mut self, id: u16) -> bool;

    /// Give back a block removed from the world.
    fn store(&mut self, block: Block);
}

impl<B: BlockBag + ?Sized> BlockBag for Box<B> {
    fn consume(&mut self, id: u16) -> bool {
        (**self).consume(id)
    }

    fn store(&mut self, block: Block) {
        (**self).store(block)
    }
}

/// Lets several sessions draw from one pool.
impl<B: BlockBag + ?Sized> BlockBag for Rc<RefCell<B>> {
    fn consume(&mut self, id: u16) -> bool {
        self.borrow_mut().consume(id)
    }

    fn store(&mut self, block: Block) {
        self.borrow_mut().store(block)
    }
}

/// Counted stock per block type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryBlockBag {
    stock: HashMap<u16, usize>,
}

impl MemoryBlockBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(stock: impl IntoIterator<Item = (u16, usize)>) -> Self {
        Self {
            stock: stock.into_iter().collect(),
        }
    }

    pub fn add(&mut self, id: u16, amount: usize) {
        *self.stock.entry(id).or_insert(0) += amount;
    }

    pub fn amount(&self, id: u16) -> usize {
        self.stock.get(&id).copied().unwrap_or(0)
    }
}

impl BlockBag for MemoryBlockBag {
    fn consume(&mut self, id: u16) -> bool {
        match self.stock.get_mut(&id) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        }
    }

    fn store(&mut self, block: Block) {
        self.add(block.id, 1);
    }
}

/// Charges placements against an optional [`BlockBag`].
///
/// Without a bag every write passes through untouched. With one, placing a
/// non-air block must consume it first; when the bag is out the write is
/// dropped and tallied as missing. Whatever non-air block was replaced goes
/// back into the bag.
#[derive(Default)]
pub struct BlockBagStage {
    bag: Option<Box<dyn BlockBag>>,
    missing: HashMap<u16, usize>,
}

impl BlockBagStage {
    pub fn new(bag: Option<Box<dyn BlockBag>>) -> Self {
        Self {
            bag,
            missing: HashMap::new(),
        }
    }

    pub fn has_bag(&self) -> bool {
        self.bag.is_some()
    }

    pub fn set_bag(&mut self, bag: Option<Box<dyn BlockBag>>) {
        self.bag = bag;
    }

    /// Counts of block types that could not be placed, clearing the tally.
    pub fn pop_missing(&mut self) -> HashMap<u16, usize> {
        std::mem::take(&mut self.missing)
    }
}

impl Stage for BlockBagStage {
    fn name(&self) -> &'static str {
        "block-bag"
    }

    fn set_block(&mut self, pos: IVec3, block: Block, mut next: Chain<'_>) -> Result<bool> {
        if let Some(bag) = self.bag.as_mut() {
            let existing = next.block_at(pos);
            if !block.is_air() && !bag.consume(block.id) {
                *self.missing.entry(block.id).or_insert(0) += 1;
                return Ok(false);
            }
            if !existing.is_air() {
                bag.store(existing);
            }
        }
        next.set_block(pos, block)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
