//! Numeric block type ids.

pub const AIR: u16 = 0;
pub const STONE: u16 = 1;
pub const GRASS: u16 = 2;
pub const DIRT: u16 = 3;
pub const COBBLESTONE: u16 = 4;
pub const WOOD: u16 = 5;
pub const SAPLING: u16 = 6;
pub const BEDROCK: u16 = 7;
pub const WATER: u16 = 8;
pub const STATIONARY_WATER: u16 = 9;
pub const LAVA: u16 = 10;
pub const STATIONARY_LAVA: u16 = 11;
pub const SAND: u16 = 12;
pub const GRAVEL: u16 = 13;
pub const GOLD_ORE: u16 = 14;
pub const IRON_ORE: u16 = 15;
pub const COAL_ORE: u16 = 16;
pub const LOG: u16 = 17;
pub const LEAVES: u16 = 18;
pub const GLASS: u16 = 20;
pub const LAPIS_LAZULI_ORE: u16 = 21;
pub const DISPENSER: u16 = 23;
pub const SANDSTONE: u16 = 24;
pub const NOTE_BLOCK: u16 = 25;
pub const BED: u16 = 26;
pub const POWERED_RAIL: u16 = 27;
pub const DETECTOR_RAIL: u16 = 28;
pub const PISTON_STICKY_BASE: u16 = 29;
pub const WEB: u16 = 30;
pub const LONG_GRASS: u16 = 31;
pub const DEAD_BUSH: u16 = 32;
pub const PISTON_BASE: u16 = 33;
pub const PISTON_EXTENSION: u16 = 34;
pub const CLOTH: u16 = 35;
pub const PISTON_MOVING_PIECE: u16 = 36;
pub const YELLOW_FLOWER: u16 = 37;
pub const RED_FLOWER: u16 = 38;
pub const BROWN_MUSHROOM: u16 = 39;
pub const RED_MUSHROOM: u16 = 40;
pub const STEP: u16 = 44;
pub const BRICK: u16 = 45;
pub const TORCH: u16 = 50;
pub const FIRE: u16 = 51;
pub const MOB_SPAWNER: u16 = 52;
pub const WOODEN_STAIRS: u16 = 53;
pub const CHEST: u16 = 54;
pub const REDSTONE_WIRE: u16 = 55;
pub const DIAMOND_ORE: u16 = 56;
pub const CROPS: u16 = 59;
pub const SOIL: u16 = 60;
pub const FURNACE: u16 = 61;
pub const BURNING_FURNACE: u16 = 62;
pub const SIGN_POST: u16 = 63;
pub const WOODEN_DOOR: u16 = 64;
pub const LADDER: u16 = 65;
pub const MINECART_TRACKS: u16 = 66;
pub const COBBLESTONE_STAIRS: u16 = 67;
pub const WALL_SIGN: u16 = 68;
pub const LEVER: u16 = 69;
pub const STONE_PRESSURE_PLATE: u16 = 70;
pub const IRON_DOOR: u16 = 71;
pub const WOODEN_PRESSURE_PLATE: u16 = 72;
pub const REDSTONE_ORE: u16 = 73;
pub const GLOWING_REDSTONE_ORE: u16 = 74;
pub const REDSTONE_TORCH_OFF: u16 = 75;
pub const REDSTONE_TORCH_ON: u16 = 76;
pub const STONE_BUTTON: u16 = 77;
pub const SNOW: u16 = 78;
pub const ICE: u16 = 79;
pub const SNOW_BLOCK: u16 = 80;
pub const CACTUS: u16 = 81;
pub const CLAY: u16 = 82;
pub const REED: u16 = 83;
pub const JUKEBOX: u16 = 84;
pub const FENCE: u16 = 85;
pub const PUMPKIN: u16 = 86;
pub const NETHERRACK: u16 = 87;
pub const SOUL_SAND: u16 = 88;
pub const GLOWSTONE: u16 = 89;
pub const PORTAL: u16 = 90;
pub const CAKE_BLOCK: u16 = 92;
pub const REDSTONE_REPEATER_OFF: u16 = 93;
pub const REDSTONE_REPEATER_ON: u16 = 94;
pub const TRAP_DOOR: u16 = 96;
pub const IRON_BARS: u16 = 101;
pub const GLASS_PANE: u16 = 102;
pub const PUMPKIN_STEM: u16 = 104;
pub const MELON_STEM: u16 = 105;
pub const VINE: u16 = 106;
pub const FENCE_GATE: u16 = 107;
pub const MYCELIUM: u16 = 110;
pub const LILY_PAD: u16 = 111;
pub const NETHER_WART: u16 = 115;
pub const BREWING_STAND: u16 = 117;
pub const END_STONE: u16 = 121;
pub const COCOA_PLANT: u16 = 127;
pub const EMERALD_ORE: u16 = 129;
pub const TRIPWIRE_HOOK: u16 = 131;
pub const TRIPWIRE: u16 = 132;
pub const FLOWER_POT: u16 = 140;
pub const CARROTS: u16 = 141;
pub const POTATOES: u16 = 142;
pub const WOODEN_BUTTON: u16 = 143;
pub const TRAPPED_CHEST: u16 = 146;
pub const HOPPER: u16 = 154;
pub const DROPPER: u16 = 158;
pub const CARPET: u16 = 171;
pub const DOUBLE_PLANT: u16 = 175;
