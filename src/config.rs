//! Build configuration.
//!
//! [`BuildConfig`] is the parameter bundle the UI assembles before invoking
//! the generator library: which archetype, in which material palette, at
//! which size and style, rotated how, placed where relative to the invoking
//! actor. The archetype is fixed at construction; everything else is mutated
//! by the UI's cycling actions.

use crate::catalog::{Archetype, Material, Size, Style};
use crate::world::VoxelCoord;

/// Default placement offset from the invoking actor, in voxels.
pub const DEFAULT_OFFSET: VoxelCoord = VoxelCoord::new(2, 0, 2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    archetype: Archetype,
    pub material: Material,
    pub size: Size,
    pub style: Style,
    rotation_degrees: i32,
    pub offset: VoxelCoord,
}

impl BuildConfig {
    pub fn new(archetype: Archetype) -> Self {
        Self {
            archetype,
            material: Material::Wood,
            size: Size::Medium,
            style: Style::Standard,
            rotation_degrees: 0,
            offset: DEFAULT_OFFSET,
        }
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Rotation in degrees, always in `0..360`.
    pub fn rotation_degrees(&self) -> i32 {
        self.rotation_degrees
    }

    pub fn set_rotation(&mut self, degrees: i32) {
        self.rotation_degrees = degrees.rem_euclid(360);
    }

    /// UI "rotate" action: one quarter turn clockwise.
    pub fn rotate_cw(&mut self) {
        self.set_rotation(self.rotation_degrees + 90);
    }

    pub fn rotate_ccw(&mut self) {
        self.set_rotation(self.rotation_degrees - 90);
    }

    /// Whole quarter turns about +Y applied when stamping. Degrees that are
    /// not a multiple of 90 floor to the containing quarter turn.
    pub fn quarter_turns(&self) -> i32 {
        self.rotation_degrees / 90 % 4
    }

    pub fn cycle_material(&mut self) {
        self.material = self.material.next();
    }

    pub fn cycle_size(&mut self) {
        self.size = self.size.next();
    }

    pub fn cycle_style(&mut self) {
        self.style = self.style.next();
    }
}
