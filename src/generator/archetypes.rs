//! Per-archetype geometry routines.
//!
//! Each routine is a pure axis-aligned scan over extents computed from the
//! archetype's base dimensions and the configured size multiplier, truncated
//! toward zero per axis. Fixed features (door gaps, water sources, the
//! treehouse leaf cap radius) do not scale.

use crate::block::Block;
use crate::config::BuildConfig;
use crate::world::{VoxelCoord, VoxelGrid};

use super::{Stamp, scaled};

/// 5x5 footprint, 4 high: perimeter walls + floor in primary, one door gap
/// centered on the z=0 face, overhanging roof one voxel past each horizontal
/// side in secondary.
pub(super) fn house<G: VoxelGrid + ?Sized>(stamp: &mut Stamp<'_, G>, config: &BuildConfig) {
    let palette = config.material.palette();
    let scale = config.size.scale();
    let width = scaled(5, scale);
    let height = scaled(4, scale);
    let depth = scaled(5, scale);

    for x in 0..width {
        for z in 0..depth {
            for y in 0..height {
                let rel = VoxelCoord::new(x, y, z);
                let wall = x == 0 || x == width - 1 || z == 0 || z == depth - 1;
                if wall || y == 0 {
                    stamp.place(rel, palette.primary);
                } else {
                    stamp.touch(rel);
                }
            }
        }
    }

    stamp.clear(VoxelCoord::new(width / 2, 1, 0));

    for x in -1..=width {
        for z in -1..=depth {
            stamp.place(VoxelCoord::new(x, height, z), palette.secondary);
        }
    }
}

/// Single primary-material column, 10 high, directly above the origin.
pub(super) fn tower<G: VoxelGrid + ?Sized>(stamp: &mut Stamp<'_, G>, config: &BuildConfig) {
    let block = config.material.palette().primary;
    let height = scaled(10, config.size.scale());

    for y in 0..height {
        stamp.place(VoxelCoord::new(0, y, 0), block);
    }
}

/// 12x12 footprint, 8 high. Walls checkerboard primary/decorative keyed by
/// (x + y + z) parity, interior floors every 4th level in secondary, a
/// two-voxel door gap, and an expanded decorative roof.
pub(super) fn mansion<G: VoxelGrid + ?Sized>(stamp: &mut Stamp<'_, G>, config: &BuildConfig) {
    let palette = config.material.palette();
    let scale = config.size.scale();
    let width = scaled(12, scale);
    let height = scaled(8, scale);
    let depth = scaled(12, scale);

    for x in 0..width {
        for z in 0..depth {
            for y in 0..height {
                let rel = VoxelCoord::new(x, y, z);
                let wall = x == 0 || x == width - 1 || z == 0 || z == depth - 1;
                let floor = y % 4 == 0;

                if wall {
                    let block = if (x + z + y) % 2 == 0 {
                        palette.primary
                    } else {
                        palette.decorative
                    };
                    stamp.place(rel, block);
                } else if floor {
                    stamp.place(rel, palette.secondary);
                } else {
                    stamp.touch(rel);
                }
            }
        }
    }

    for i in 0..2 {
        stamp.clear(VoxelCoord::new(width / 2, i + 1, 0));
    }

    for x in -1..=width {
        for z in -1..=depth {
            stamp.place(VoxelCoord::new(x, height, z), palette.decorative);
        }
    }
}

/// Fenced 8x8 perimeter, tilled interior, one water source at the center.
/// Fence and farmland blocks are fixed, not palette-dependent.
pub(super) fn farm<G: VoxelGrid + ?Sized>(stamp: &mut Stamp<'_, G>, config: &BuildConfig) {
    let scale = config.size.scale();
    let width = scaled(8, scale);
    let depth = scaled(8, scale);

    for x in 0..width {
        for z in 0..depth {
            if x == 0 || x == width - 1 || z == 0 || z == depth - 1 {
                stamp.place(VoxelCoord::new(x, 0, z), Block::Fence);
            }
        }
    }

    for x in 1..width - 1 {
        for z in 1..depth - 1 {
            stamp.place(VoxelCoord::new(x, 0, z), Block::Farmland);
        }
    }

    stamp.place(VoxelCoord::new(width / 2, 0, depth / 2), Block::Water);
}

/// 20x20 keep, 12 high: outer walls + floor in primary, four corner towers
/// rising to 15 x scale in secondary, three-voxel door gap.
pub(super) fn castle<G: VoxelGrid + ?Sized>(stamp: &mut Stamp<'_, G>, config: &BuildConfig) {
    let palette = config.material.palette();
    let scale = config.size.scale();
    let width = scaled(20, scale);
    let height = scaled(12, scale);
    let depth = scaled(20, scale);

    for x in 0..width {
        for z in 0..depth {
            for y in 0..height {
                let rel = VoxelCoord::new(x, y, z);
                let outer_wall = x == 0 || x == width - 1 || z == 0 || z == depth - 1;
                if outer_wall || y == 0 {
                    stamp.place(rel, palette.primary);
                } else {
                    stamp.touch(rel);
                }
            }
        }
    }

    let tower_height = scaled(15, scale);
    let corners = [
        (0, 0),
        (width - 1, 0),
        (0, depth - 1),
        (width - 1, depth - 1),
    ];
    for (x, z) in corners {
        for y in 0..tower_height {
            stamp.place(VoxelCoord::new(x, y, z), palette.secondary);
        }
    }

    for i in 0..3 {
        stamp.clear(VoxelCoord::new(width / 2, i + 1, 0));
    }
}

/// 15-long, 3-wide single-layer deck in primary with decorative rails one
/// layer above the two edge rows.
pub(super) fn bridge<G: VoxelGrid + ?Sized>(stamp: &mut Stamp<'_, G>, config: &BuildConfig) {
    let palette = config.material.palette();
    let scale = config.size.scale();
    let length = scaled(15, scale);
    let width = scaled(3, scale);

    for x in 0..length {
        for z in 0..width {
            stamp.place(VoxelCoord::new(x, 0, z), palette.primary);
            if z == 0 || z == width - 1 {
                stamp.place(VoxelCoord::new(x, 1, z), palette.decorative);
            }
        }
    }
}

/// Circular base (dx^2 + dz^2 <= r^2) of radius 3 x scale in primary, a
/// central pillar 2 x scale high, topped with a water voxel.
pub(super) fn fountain<G: VoxelGrid + ?Sized>(stamp: &mut Stamp<'_, G>, config: &BuildConfig) {
    let block = config.material.palette().primary;
    let scale = config.size.scale();
    let radius = scaled(3, scale);
    let height = scaled(2, scale);

    for x in -radius..=radius {
        for z in -radius..=radius {
            if x * x + z * z <= radius * radius {
                stamp.place(VoxelCoord::new(x, 0, z), block);
            }
        }
    }

    // Pillar base re-writes the disc center; the capture keeps the state
    // observed before the disc write.
    for y in 0..=height {
        let rel = VoxelCoord::new(0, y, 0);
        if y == height {
            stamp.place(rel, Block::Water);
        } else {
            stamp.place(rel, block);
        }
    }
}

/// Log trunk 8 x scale high, a primary-material platform at the top, a
/// two-layer perimeter shell above it, and a fixed-radius leaf cap.
pub(super) fn treehouse<G: VoxelGrid + ?Sized>(stamp: &mut Stamp<'_, G>, config: &BuildConfig) {
    let plank = config.material.palette().primary;
    let scale = config.size.scale();
    let trunk_height = scaled(8, scale);
    let house_size = scaled(4, scale);
    let half = house_size / 2;

    for y in 0..trunk_height {
        stamp.place(VoxelCoord::new(0, y, 0), Block::Log);
    }

    for x in -half..=half {
        for z in -half..=half {
            stamp.place(VoxelCoord::new(x, trunk_height, z), plank);
        }
    }

    for x in -half..=half {
        for z in -half..=half {
            for y in 1..3 {
                let rel = VoxelCoord::new(x, trunk_height + y, z);
                let wall = x == -half || x == half || z == -half || z == half;
                if wall {
                    stamp.place(rel, plank);
                } else {
                    stamp.touch(rel);
                }
            }
        }
    }

    for x in -2..=2 {
        for z in -2..=2 {
            for y in 0..2 {
                if x * x + z * z <= 5 {
                    stamp.place(VoxelCoord::new(x, trunk_height + 3 + y, z), Block::Leaves);
                }
            }
        }
    }
}

pub(super) fn wall<G: VoxelGrid + ?Sized>(stamp: &mut Stamp<'_, G>, config: &BuildConfig) {
    let block = config.material.palette().primary;
    let scale = config.size.scale();
    let length = scaled(20, scale);
    let height = scaled(4, scale);

    for x in 0..length {
        for y in 0..height {
            stamp.place(VoxelCoord::new(x, y, 0), block);
        }
    }
}

pub(super) fn road<G: VoxelGrid + ?Sized>(stamp: &mut Stamp<'_, G>, config: &BuildConfig) {
    let block = config.material.palette().primary;
    let scale = config.size.scale();
    let length = scaled(20, scale);
    let width = scaled(3, scale);

    for x in 0..length {
        for z in 0..width {
            stamp.place(VoxelCoord::new(x, 0, z), block);
        }
    }
}
