//! The generator library.
//!
//! One deterministic geometric routine per structure archetype. Every
//! routine emits structure-relative voxel writes through a [`Stamp`], which
//! rotates them by the configured quarter turns about +Y, translates them to
//! the world-space origin, and records the prior state of every touched
//! position into a capture map for undo.
//!
//! Capture invariant: one entry per distinct touched position, holding the
//! state observed before the FIRST write to that position in this call, even
//! when a routine writes the same position more than once.

mod archetypes;

use std::collections::HashMap;

use glam::IVec3;

use crate::block::Block;
use crate::catalog::Archetype;
use crate::config::BuildConfig;
use crate::template::StructureTemplate;
use crate::world::{VoxelCoord, VoxelGrid};

/// Positions-to-prior-state mapping recorded during one generation call.
pub type CaptureMap = HashMap<VoxelCoord, Block>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The archetype has no parametric generator. Custom structures are
    /// stamped from saved templates instead; see [`stamp_template`].
    UnsupportedArchetype(Archetype),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::UnsupportedArchetype(archetype) => {
                write!(f, "no generator for archetype: {}", archetype.label())
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Rotate a structure-relative offset by whole quarter turns about +Y.
fn rotate_quarter(rel: IVec3, quarter_turns: i32) -> IVec3 {
    match quarter_turns.rem_euclid(4) {
        1 => IVec3::new(-rel.z, rel.y, rel.x),
        2 => IVec3::new(-rel.x, rel.y, -rel.z),
        3 => IVec3::new(rel.z, rel.y, -rel.x),
        _ => rel,
    }
}

/// Write cursor for one generation call: applies rotation + translation and
/// maintains the capture map.
pub(crate) struct Stamp<'a, G: VoxelGrid + ?Sized> {
    grid: &'a mut G,
    origin: VoxelCoord,
    quarter_turns: i32,
    captured: CaptureMap,
}

impl<'a, G: VoxelGrid + ?Sized> Stamp<'a, G> {
    fn new(grid: &'a mut G, origin: VoxelCoord, quarter_turns: i32) -> Self {
        Self {
            grid,
            origin,
            quarter_turns,
            captured: CaptureMap::new(),
        }
    }

    fn world_pos(&self, rel: VoxelCoord) -> VoxelCoord {
        let rotated = rotate_quarter(rel.as_ivec3(), self.quarter_turns);
        self.origin + VoxelCoord::from(rotated)
    }

    /// Record the pre-write state of `pos` unless already captured.
    fn capture(&mut self, pos: VoxelCoord) {
        if !self.captured.contains_key(&pos) {
            let prior = self.grid.read_voxel(pos);
            self.captured.insert(pos, prior);
        }
    }

    /// Write `block` at the relative position, capturing the prior state.
    pub(crate) fn place(&mut self, rel: VoxelCoord, block: Block) {
        let pos = self.world_pos(rel);
        self.capture(pos);
        self.grid.write_voxel(pos, block);
    }

    /// Carve the relative position to air (door gaps).
    pub(crate) fn clear(&mut self, rel: VoxelCoord) {
        self.place(rel, Block::Air);
    }

    /// Capture the relative position without writing. The box-scanning
    /// routines record their whole bounding volume, not only written cells,
    /// so undo snapshots the full footprint.
    pub(crate) fn touch(&mut self, rel: VoxelCoord) {
        let pos = self.world_pos(rel);
        self.capture(pos);
    }

    fn finish(self) -> CaptureMap {
        self.captured
    }
}

/// Truncate-toward-zero scaling of a base dimension, applied per axis.
pub(crate) fn scaled(base: i32, scale: f32) -> i32 {
    (base as f32 * scale) as i32
}

/// Run the archetype's generator against `grid` at `origin`.
///
/// Returns the capture map covering every position touched. The grid is
/// mutated in place; there is no staging buffer.
pub fn generate<G: VoxelGrid + ?Sized>(
    grid: &mut G,
    origin: VoxelCoord,
    config: &BuildConfig,
) -> Result<CaptureMap, GenerateError> {
    let mut stamp = Stamp::new(grid, origin, config.quarter_turns());
    match config.archetype() {
        Archetype::House => archetypes::house(&mut stamp, config),
        Archetype::Mansion => archetypes::mansion(&mut stamp, config),
        Archetype::Tower => archetypes::tower(&mut stamp, config),
        Archetype::Castle => archetypes::castle(&mut stamp, config),
        Archetype::Farm => archetypes::farm(&mut stamp, config),
        Archetype::Bridge => archetypes::bridge(&mut stamp, config),
        Archetype::Road => archetypes::road(&mut stamp, config),
        Archetype::Wall => archetypes::wall(&mut stamp, config),
        Archetype::Fountain => archetypes::fountain(&mut stamp, config),
        Archetype::Treehouse => archetypes::treehouse(&mut stamp, config),
        Archetype::Custom => {
            return Err(GenerateError::UnsupportedArchetype(Archetype::Custom));
        }
    }
    Ok(stamp.finish())
}

/// Stamp a saved custom structure template, voxel for voxel, through the
/// same rotation/translation/capture path as the parametric generators.
pub fn stamp_template<G: VoxelGrid + ?Sized>(
    grid: &mut G,
    origin: VoxelCoord,
    quarter_turns: i32,
    template: &StructureTemplate,
) -> CaptureMap {
    let mut stamp = Stamp::new(grid, origin, quarter_turns);
    for voxel in template.voxels() {
        stamp.place(VoxelCoord::from(voxel.pos), voxel.block);
    }
    stamp.finish()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::catalog::{Material, Size};
    use crate::world::VoxelWorld;

    fn config(archetype: Archetype) -> BuildConfig {
        BuildConfig::new(archetype)
    }

    #[test_case(Archetype::House)]
    #[test_case(Archetype::Mansion)]
    #[test_case(Archetype::Tower)]
    #[test_case(Archetype::Castle)]
    #[test_case(Archetype::Farm)]
    #[test_case(Archetype::Bridge)]
    #[test_case(Archetype::Road)]
    #[test_case(Archetype::Wall)]
    #[test_case(Archetype::Fountain)]
    #[test_case(Archetype::Treehouse)]
    fn generation_is_deterministic_on_a_fresh_grid(archetype: Archetype) {
        let origin = VoxelCoord::new(0, 0, 0);
        let cfg = config(archetype);

        let mut first_world = VoxelWorld::new();
        let first = generate(&mut first_world, origin, &cfg).unwrap();
        assert!(!first.is_empty());

        let mut second_world = VoxelWorld::new();
        let second = generate(&mut second_world, origin, &cfg).unwrap();
        assert_eq!(first, second);
        assert_eq!(first_world.occupied_count(), second_world.occupied_count());
    }

    #[test]
    fn custom_archetype_is_rejected_fast() {
        let mut world = VoxelWorld::new();
        let err = generate(&mut world, VoxelCoord::new(0, 0, 0), &config(Archetype::Custom))
            .unwrap_err();
        assert_eq!(err, GenerateError::UnsupportedArchetype(Archetype::Custom));
        assert_eq!(world.occupied_count(), 0);
    }

    #[test]
    fn capture_keeps_first_pre_write_state_on_double_writes() {
        // The castle corner is written twice: once by the outer-wall scan
        // (primary), then by the corner tower (secondary).
        let mut world = VoxelWorld::new();
        let corner = VoxelCoord::new(0, 0, 0);
        world.write_voxel(corner, Block::Water);

        let capture = generate(&mut world, corner, &config(Archetype::Castle)).unwrap();
        assert_eq!(capture.get(&corner), Some(&Block::Water));
        // Final state is the tower material (last write wins in the grid).
        assert_eq!(world.read_voxel(corner), Material::Wood.palette().secondary);
    }

    #[test]
    fn wall_rotated_one_quarter_runs_along_z() {
        let origin = VoxelCoord::new(0, 0, 0);

        let mut flat = VoxelWorld::new();
        generate(&mut flat, origin, &config(Archetype::Wall)).unwrap();
        assert_eq!(flat.read_voxel(VoxelCoord::new(5, 0, 0)), Block::Planks);
        assert_eq!(flat.read_voxel(VoxelCoord::new(0, 0, 5)), Block::Air);

        let mut rotated_cfg = config(Archetype::Wall);
        rotated_cfg.set_rotation(90);
        let mut turned = VoxelWorld::new();
        generate(&mut turned, origin, &rotated_cfg).unwrap();
        assert_eq!(turned.read_voxel(VoxelCoord::new(0, 0, 5)), Block::Planks);
        assert_eq!(turned.read_voxel(VoxelCoord::new(5, 0, 0)), Block::Air);
    }

    #[test]
    fn rotation_preserves_voxel_count() {
        let origin = VoxelCoord::new(0, 0, 0);
        let mut reference = VoxelWorld::new();
        let flat = generate(&mut reference, origin, &config(Archetype::House)).unwrap();

        for degrees in [90, 180, 270] {
            let mut cfg = config(Archetype::House);
            cfg.set_rotation(degrees);
            let mut world = VoxelWorld::new();
            let capture = generate(&mut world, origin, &cfg).unwrap();
            assert_eq!(capture.len(), flat.len(), "rotation {degrees}");
            assert_eq!(world.occupied_count(), reference.occupied_count());
        }
    }

    #[test]
    fn stamp_template_captures_and_writes_every_voxel() {
        let mut template = StructureTemplate::new("gazebo", 2, 1, 2);
        template.set_block(0, 0, 0, Block::Stone);
        template.set_block(1, 0, 1, Block::Planks);

        let mut world = VoxelWorld::new();
        world.write_voxel(VoxelCoord::new(10, 0, 10), Block::Water);

        let capture = stamp_template(&mut world, VoxelCoord::new(10, 0, 10), 0, &template);
        assert_eq!(capture.len(), 2);
        assert_eq!(capture.get(&VoxelCoord::new(10, 0, 10)), Some(&Block::Water));
        assert_eq!(world.read_voxel(VoxelCoord::new(10, 0, 10)), Block::Stone);
        assert_eq!(world.read_voxel(VoxelCoord::new(11, 0, 11)), Block::Planks);
    }

    #[test]
    fn size_scaling_truncates_per_axis() {
        // Large scale 1.5: house base 5x4x5 becomes 7x6x7, not 7.5x6x7.5.
        let origin = VoxelCoord::new(0, 0, 0);
        let mut cfg = config(Archetype::House);
        cfg.size = Size::Large;
        let mut world = VoxelWorld::new();
        generate(&mut world, origin, &cfg).unwrap();

        let primary = Material::Wood.palette().primary;
        let roof = Material::Wood.palette().secondary;
        // Wall column at x=0 tops out at y=5, roof sits at y=6.
        assert_eq!(world.read_voxel(VoxelCoord::new(0, 5, 0)), primary);
        assert_eq!(world.read_voxel(VoxelCoord::new(0, 6, 0)), roof);
        // Footprint is 7 wide: x=6 is the far wall, x=7 is only roof overhang.
        assert_eq!(world.read_voxel(VoxelCoord::new(6, 0, 0)), primary);
        assert_eq!(world.read_voxel(VoxelCoord::new(7, 0, 0)), Block::Air);
        assert_eq!(world.read_voxel(VoxelCoord::new(7, 6, 0)), roof);
    }
}
