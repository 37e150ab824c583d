//! Block ids used by the smithing structures.

use multiblock::BlockId;

pub const AIR: BlockId = BlockId("engine:air");

pub const COBBLESTONE: BlockId = BlockId("core:cobblestone");
pub const BRICK: BlockId = BlockId("core:brick");
pub const BRICK_HALF: BlockId = BlockId("core:brick:half");
pub const BRICK_SLOPE_FRONT: BlockId = BlockId("core:brick:half_slope_front");
pub const BRICK_SLOPE_BACK: BlockId = BlockId("core:brick:half_slope_back");
pub const BRICK_SLOPE_LEFT: BlockId = BlockId("core:brick:half_slope_left");
pub const BRICK_SLOPE_RIGHT: BlockId = BlockId("core:brick:half_slope_right");
pub const BRICK_SLOPE_CORNER_FRONT: BlockId = BlockId("core:brick:slope_corner_front");
pub const BRICK_SLOPE_CORNER_BACK: BlockId = BlockId("core:brick:slope_corner_back");
pub const BRICK_SLOPE_CORNER_LEFT: BlockId = BlockId("core:brick:slope_corner_left");
pub const BRICK_SLOPE_CORNER_RIGHT: BlockId = BlockId("core:brick:slope_corner_right");
pub const BRICK_PILLAR_BASE: BlockId = BlockId("core:brick:pillar_base");

pub const BASIC_SMITHING_STATION: BlockId = BlockId("smithing:basic_smithing_station");
pub const COPPER_STRUCTURE: BlockId = BlockId("smithing:copper_structure");
