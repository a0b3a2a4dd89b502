//! Voxel block states.
//!
//! `Block` is the closed set of voxel states the generators ever read or
//! write. The host world may know many more block kinds; everything this
//! crate does not recognise is simply never produced by it. `Air` is the
//! empty state and the `Default`.

use serde::{Deserialize, Serialize};

/// One voxel state.
///
/// Covers the 27 palette blocks (9 material palettes, three roles each) plus
/// the fixed feature blocks the generators place regardless of the chosen
/// palette: fences and farmland for farms, water sources, logs and leaves for
/// treehouses, and air for carved door gaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Block {
    #[default]
    Air,

    // Wood palette
    Planks,
    Log,
    Fence,

    // Stone palette
    Stone,
    Cobblestone,
    StoneBricks,

    // Brick palette
    Bricks,
    RedSandstone,
    BrickTiles,

    // Glass palette
    Glass,
    TintedGlass,
    GlassPane,

    // Sandstone palette
    Sandstone,
    SmoothSandstone,
    CutSandstone,

    // Dark wood palette
    DarkPlanks,
    DarkLog,
    DarkFence,

    // Quartz palette
    Quartz,
    QuartzPillar,
    CarvedQuartz,

    // Prismarine palette
    Prismarine,
    PrismarineBricks,
    DarkPrismarine,

    // Concrete palette
    WhiteConcrete,
    LightGrayConcrete,
    GrayConcrete,

    // Fixed feature blocks
    Farmland,
    Water,
    Leaves,
}

impl Block {
    pub fn is_air(self) -> bool {
        self == Block::Air
    }
}
