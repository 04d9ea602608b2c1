//! Block-kind predicates driving placement order, passability and terrain tests.

use super::ids::*;

/// Blocks that need a supporting neighbour and go in the second placement pass.
pub fn should_place_last(id: u16) -> bool {
    matches!(
        id,
        SAPLING | BED | POWERED_RAIL | DETECTOR_RAIL | LONG_GRASS | DEAD_BUSH
            | PISTON_EXTENSION | YELLOW_FLOWER | RED_FLOWER | BROWN_MUSHROOM | RED_MUSHROOM
            | TORCH | FIRE | REDSTONE_WIRE | CROPS | LADDER | MINECART_TRACKS | LEVER
            | STONE_PRESSURE_PLATE | WOODEN_PRESSURE_PLATE | REDSTONE_TORCH_OFF
            | REDSTONE_TORCH_ON | STONE_BUTTON | SNOW | PORTAL | REDSTONE_REPEATER_OFF
            | REDSTONE_REPEATER_ON | TRAP_DOOR | VINE | LILY_PAD | NETHER_WART
            | PISTON_BASE | PISTON_STICKY_BASE | COCOA_PLANT | TRIPWIRE_HOOK | TRIPWIRE
            | FLOWER_POT | CARROTS | POTATOES | WOODEN_BUTTON | CARPET | DOUBLE_PLANT
    )
}

/// Multi-part blocks placed after every attachable is in.
pub fn should_place_final(id: u16) -> bool {
    matches!(
        id,
        SIGN_POST | WOODEN_DOOR | WALL_SIGN | IRON_DOOR | CACTUS | REED | CAKE_BLOCK
            | PISTON_MOVING_PIECE
    )
}

/// Whether entities and light pass through this block.
pub fn can_pass_through(id: u16) -> bool {
    matches!(
        id,
        AIR | WATER | STATIONARY_WATER | SAPLING | POWERED_RAIL | DETECTOR_RAIL | WEB
            | LONG_GRASS | DEAD_BUSH | YELLOW_FLOWER | RED_FLOWER | BROWN_MUSHROOM
            | RED_MUSHROOM | TORCH | FIRE | REDSTONE_WIRE | CROPS | SIGN_POST | LADDER
            | MINECART_TRACKS | WALL_SIGN | LEVER | STONE_PRESSURE_PLATE
            | WOODEN_PRESSURE_PLATE | REDSTONE_TORCH_OFF | REDSTONE_TORCH_ON | STONE_BUTTON
            | SNOW | REED | PORTAL | REDSTONE_REPEATER_OFF | REDSTONE_REPEATER_ON
            | PUMPKIN_STEM | MELON_STEM | VINE | TRIPWIRE_HOOK | TRIPWIRE | CARROTS
            | POTATOES | WOODEN_BUTTON | CARPET | DOUBLE_PLANT
    )
}

/// Blocks snow should not settle on.
pub fn is_translucent(id: u16) -> bool {
    can_pass_through(id)
        || matches!(
            id,
            LAVA | STATIONARY_LAVA | LEAVES | GLASS | BED | PISTON_EXTENSION
                | PISTON_MOVING_PIECE | STEP | MOB_SPAWNER | WOODEN_STAIRS
                | WOODEN_DOOR | COBBLESTONE_STAIRS | IRON_DOOR | ICE | CACTUS | FENCE
                | CAKE_BLOCK | TRAP_DOOR | IRON_BARS | GLASS_PANE | FENCE_GATE | LILY_PAD
                | BREWING_STAND | COCOA_PLANT | FLOWER_POT | HOPPER
        )
}

/// Blocks that hold an inventory the world must clear before replacement.
pub fn is_container(id: u16) -> bool {
    matches!(
        id,
        CHEST | FURNACE | BURNING_FURNACE | DISPENSER | BREWING_STAND | TRAPPED_CHEST
            | HOPPER | DROPPER | JUKEBOX
    )
}

/// Blocks that occur naturally as terrain.
pub fn is_natural_terrain(id: u16) -> bool {
    matches!(
        id,
        STONE | GRASS | DIRT | BEDROCK | SAND | GRAVEL | CLAY | MYCELIUM | SANDSTONE
            | COAL_ORE | IRON_ORE | GOLD_ORE | LAPIS_LAZULI_ORE | DIAMOND_ORE
            | REDSTONE_ORE | GLOWING_REDSTONE_ORE | EMERALD_ORE | NETHERRACK | SOUL_SAND
            | GLOWSTONE | END_STONE
    )
}

/// Moving or still water and lava.
pub fn is_liquid(id: u16) -> bool {
    matches!(id, WATER | STATIONARY_WATER | LAVA | STATIONARY_LAVA)
}
