//! Build information catalog.
//!
//! Human-readable description, time estimate and material shopping list per
//! (archetype, size). The block counts are hand-maintained approximations
//! scaled like the generator geometry; they are deliberately NOT derived by
//! running the generators and can drift from the voxel counts actually
//! written. Tests pin that drift down rather than hiding it.

use std::collections::HashMap;

use crate::catalog::{Archetype, Size};

#[derive(Debug, Clone)]
pub struct BuildInfo {
    archetype: Archetype,
    description: &'static str,
    estimated_seconds: u32,
    blocks_needed: HashMap<&'static str, u32>,
}

impl BuildInfo {
    fn new(archetype: Archetype, description: &'static str, estimated_seconds: u32) -> Self {
        Self {
            archetype,
            description,
            estimated_seconds,
            blocks_needed: HashMap::new(),
        }
    }

    fn require(mut self, role: &'static str, count: u32) -> Self {
        self.blocks_needed.insert(role, count);
        self
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn estimated_seconds(&self) -> u32 {
        self.estimated_seconds
    }

    pub fn blocks_needed(&self) -> &HashMap<&'static str, u32> {
        &self.blocks_needed
    }

    pub fn total_blocks(&self) -> u32 {
        self.blocks_needed.values().sum()
    }

    /// `"S seconds"` under a minute, `"M min S sec"` from there on.
    pub fn formatted_time(&self) -> String {
        if self.estimated_seconds < 60 {
            format!("{} seconds", self.estimated_seconds)
        } else {
            format!(
                "{} min {} sec",
                self.estimated_seconds / 60,
                self.estimated_seconds % 60
            )
        }
    }
}

fn scaled_count(base: u32, scale: f32) -> u32 {
    (base as f32 * scale) as u32
}

/// Describe one build at one size. Pure function of its inputs.
pub fn build_info(archetype: Archetype, size: Size) -> BuildInfo {
    let scale = size.scale();
    match archetype {
        Archetype::House => {
            BuildInfo::new(archetype, "A cozy house with walls, floor, and roof", 5)
                .require("Primary Material", scaled_count(50, scale))
                .require("Roof Material", scaled_count(36, scale))
        }
        Archetype::Tower => BuildInfo::new(archetype, "A tall tower reaching to the sky", 3)
            .require("Primary Material", scaled_count(10, scale)),
        Archetype::Mansion => BuildInfo::new(archetype, "A large multi-floor mansion", 15)
            .require("Primary Material", scaled_count(400, scale))
            .require("Secondary Material", scaled_count(150, scale))
            .require("Decorative Material", scaled_count(100, scale)),
        Archetype::Farm => BuildInfo::new(archetype, "A fenced farm with farmland and water", 8)
            .require("Fence", scaled_count(32, scale))
            .require("Farmland", scaled_count(36, scale))
            .require("Water", 1),
        Archetype::Castle => BuildInfo::new(archetype, "A fortified castle with towers", 25)
            .require("Primary Material", scaled_count(600, scale))
            .require("Tower Material", scaled_count(200, scale)),
        Archetype::Bridge => BuildInfo::new(archetype, "A sturdy bridge with railings", 6)
            .require("Primary Material", scaled_count(45, scale))
            .require("Railing Material", scaled_count(30, scale)),
        Archetype::Fountain => BuildInfo::new(archetype, "A decorative fountain with water", 4)
            .require("Primary Material", scaled_count(30, scale))
            .require("Water", 1),
        Archetype::Treehouse => BuildInfo::new(archetype, "A house built in a tree", 10)
            .require("Wood Logs", scaled_count(8, scale))
            .require("Planks", scaled_count(40, scale))
            .require("Leaves", scaled_count(20, scale)),
        Archetype::Wall => BuildInfo::new(archetype, "A defensive wall", 5)
            .require("Primary Material", scaled_count(80, scale)),
        Archetype::Road => BuildInfo::new(archetype, "A paved road", 4)
            .require("Primary Material", scaled_count(60, scale)),
        Archetype::Custom => BuildInfo::new(archetype, "Custom structure", 10),
    }
}
