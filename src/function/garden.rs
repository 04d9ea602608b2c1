//! Pumpkin patches: a leaf bush with trailing vines and scattered fruit.

use crate::block::{ids, Block};
use crate::core::types::{IVec3, Result};
use crate::session::EditSession;

use super::RegionFunction;

/// Vines stop growing this far from the patch centre.
const MAX_VINE_DISTANCE: f32 = 4.0;

/// Grows a patch on grass. Randomness comes from the session RNG, so a
/// session seed reproduces the same patches.
#[derive(Debug)]
pub struct GardenPatchGenerator {
    plant: u16,
    affected: usize,
}

impl Default for GardenPatchGenerator {
    fn default() -> Self {
        Self::new(ids::PUMPKIN)
    }
}

impl GardenPatchGenerator {
    /// `plant` is placed with a random facing (data 0..4).
    pub fn new(plant: u16) -> Self {
        Self { plant, affected: 0 }
    }

    /// Leaves and fruit placed so far.
    pub fn affected(&self) -> usize {
        self.affected
    }

    fn place_vine(&mut self, session: &mut EditSession<'_>, base: IVec3, pos: IVec3) -> Result<()> {
        if (pos - base).as_vec3().length() > MAX_VINE_DISTANCE {
            return Ok(());
        }
        if !session.block_at(pos).is_air() {
            return Ok(());
        }

        // Let the vine drop down a slope by up to two cells
        let mut pos = pos;
        for _ in 0..2 {
            let below = pos - IVec3::Y;
            if !session.block_at(below).is_air() {
                break;
            }
            pos = below;
        }

        session.set_block_if_air(pos, Block::new(ids::LEAVES))?;
        self.affected += 1;

        let turn = session.rng().u8(0..4);
        let h = session.rng().i32(-1..=1);
        let (grow, log, fruit) = match turn {
            0 => (IVec3::X, IVec3::new(1, h, -1), IVec3::new(0, 0, -1)),
            1 => (IVec3::Z, IVec3::new(1, h, 1), IVec3::X),
            2 => (IVec3::NEG_Z, IVec3::new(-1, h, 0), IVec3::Z),
            _ => (IVec3::NEG_X, IVec3::new(-1, h, -1), IVec3::new(-1, 0, -1)),
        };

        if session.rng().bool() {
            self.place_vine(session, base, pos + grow)?;
        }
        if session.rng().bool() {
            session.set_block_if_air(pos + log, Block::new(ids::LOG))?;
        }
        let facing = session.rng().u8(0..4);
        session.set_block_if_air(pos + fruit, Block::with_data(self.plant, facing))?;
        self.affected += 1;
        Ok(())
    }
}

impl RegionFunction for GardenPatchGenerator {
    fn apply(&mut self, session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
        let pos = if session.block_at(pos).is_air() { pos } else { pos + IVec3::Y };
        if session.block_at(pos - IVec3::Y).id != ids::GRASS {
            return Ok(false);
        }

        session.set_block_if_air(pos, Block::new(ids::LEAVES))?;
        for side in [IVec3::Z, IVec3::NEG_Z, IVec3::X, IVec3::NEG_X] {
            self.place_vine(session, pos, pos + side)?;
        }
        Ok(true)
    }
}
