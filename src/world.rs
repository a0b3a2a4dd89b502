//! The voxel grid the generators read and write.
//!
//! [`VoxelGrid`] is the minimal capability the generation and undo paths
//! need: read one voxel, write one voxel. No batching and no validation are
//! assumed. [`VoxelWorld`] is a chunked sparse in-memory implementation used
//! as the concrete world by [`crate::runtime::BuildRuntime`] and by tests;
//! an embedding host can instead adapt its own world to the trait.

use std::collections::HashMap;

use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::block::Block;

pub const CHUNK_EDGE_I32: i32 = 16;
const CHUNK_CELL_COUNT: usize = (CHUNK_EDGE_I32 as usize).pow(3);

/// Integer position of one voxel in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn as_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl From<IVec3> for VoxelCoord {
    fn from(value: IVec3) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl std::ops::Add for VoxelCoord {
    type Output = VoxelCoord;

    fn add(self, rhs: VoxelCoord) -> VoxelCoord {
        VoxelCoord::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Read/write access to a voxel world.
pub trait VoxelGrid {
    /// Current state at `coord`. Unpopulated space reads as [`Block::Air`].
    fn read_voxel(&self, coord: VoxelCoord) -> Block;

    /// Overwrite the state at `coord`. Writing `Block::Air` carves.
    fn write_voxel(&mut self, coord: VoxelCoord, block: Block);
}

#[derive(Clone)]
struct VoxelChunk {
    cells: Vec<Block>,
}

impl Default for VoxelChunk {
    fn default() -> Self {
        Self {
            cells: vec![Block::Air; CHUNK_CELL_COUNT],
        }
    }
}

impl VoxelChunk {
    fn local_index(local: IVec3) -> usize {
        debug_assert!(
            (0..CHUNK_EDGE_I32).contains(&local.x)
                && (0..CHUNK_EDGE_I32).contains(&local.y)
                && (0..CHUNK_EDGE_I32).contains(&local.z)
        );
        let x = local.x as usize;
        let y = local.y as usize;
        let z = local.z as usize;
        x + y * CHUNK_EDGE_I32 as usize + z * (CHUNK_EDGE_I32 as usize).pow(2)
    }

    fn get(&self, local: IVec3) -> Block {
        self.cells[Self::local_index(local)]
    }

    fn set(&mut self, local: IVec3, block: Block) {
        self.cells[Self::local_index(local)] = block;
    }
}

/// Chunked sparse voxel world. Chunks are 16^3 and allocated on first write;
/// a missing chunk reads as air everywhere.
#[derive(Clone, Default)]
pub struct VoxelWorld {
    chunks: HashMap<IVec3, VoxelChunk>,
}

impl VoxelWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn voxel_to_chunk_local(coord: VoxelCoord) -> (IVec3, IVec3) {
        let v = coord.as_ivec3();
        let chunk = IVec3::new(
            v.x.div_euclid(CHUNK_EDGE_I32),
            v.y.div_euclid(CHUNK_EDGE_I32),
            v.z.div_euclid(CHUNK_EDGE_I32),
        );
        let local = IVec3::new(
            v.x.rem_euclid(CHUNK_EDGE_I32),
            v.y.rem_euclid(CHUNK_EDGE_I32),
            v.z.rem_euclid(CHUNK_EDGE_I32),
        );
        (chunk, local)
    }

    /// Drop every chunk, returning the world to all-air.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    /// Number of non-air voxels across all chunks. Linear scan; intended for
    /// tests and diagnostics, not hot paths.
    pub fn occupied_count(&self) -> usize {
        self.chunks
            .values()
            .map(|chunk| chunk.cells.iter().filter(|b| !b.is_air()).count())
            .sum()
    }
}

impl VoxelGrid for VoxelWorld {
    fn read_voxel(&self, coord: VoxelCoord) -> Block {
        let (chunk_key, local) = Self::voxel_to_chunk_local(coord);
        match self.chunks.get(&chunk_key) {
            Some(chunk) => chunk.get(local),
            None => Block::Air,
        }
    }

    fn write_voxel(&mut self, coord: VoxelCoord, block: Block) {
        let (chunk_key, local) = Self::voxel_to_chunk_local(coord);
        if block.is_air() && !self.chunks.contains_key(&chunk_key) {
            // Carving empty space allocates nothing.
            return;
        }
        let chunk = self.chunks.entry(chunk_key).or_default();
        chunk.set(local, block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_roundtrip_across_chunk_borders() {
        let mut world = VoxelWorld::new();
        for coord in [
            VoxelCoord::new(0, 0, 0),
            VoxelCoord::new(15, 15, 15),
            VoxelCoord::new(16, 0, 0),
            VoxelCoord::new(-1, -1, -1),
            VoxelCoord::new(-17, 3, 40),
        ] {
            world.write_voxel(coord, Block::Stone);
            assert_eq!(world.read_voxel(coord), Block::Stone);
        }
        assert_eq!(world.occupied_count(), 5);
    }

    #[test]
    fn unpopulated_space_reads_as_air() {
        let world = VoxelWorld::new();
        assert_eq!(world.read_voxel(VoxelCoord::new(100, -40, 7)), Block::Air);
    }

    #[test]
    fn carving_air_into_empty_space_allocates_no_chunk() {
        let mut world = VoxelWorld::new();
        world.write_voxel(VoxelCoord::new(5, 5, 5), Block::Air);
        assert_eq!(world.occupied_count(), 0);
        assert!(world.chunks.is_empty());
    }

    #[test]
    fn negative_coords_map_to_distinct_cells() {
        let mut world = VoxelWorld::new();
        world.write_voxel(VoxelCoord::new(-1, 0, 0), Block::Planks);
        assert_eq!(world.read_voxel(VoxelCoord::new(-1, 0, 0)), Block::Planks);
        assert_eq!(world.read_voxel(VoxelCoord::new(15, 0, 0)), Block::Air);
    }
}
