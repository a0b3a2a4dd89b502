//! Build orchestration.
//!
//! [`BuildRuntime`] owns the concrete world and the undo service and wires
//! the data flow end to end: resolve the origin from the invoking actor and
//! the config's placement offset, run the generator, hand the capture map to
//! the undo service. Calls are synchronous and run to completion; `&mut
//! self` on every mutating path gives a multi-threaded host a single obvious
//! place to put its lock.

use crate::config::BuildConfig;
use crate::generator::{GenerateError, generate, stamp_template};
use crate::template::StructureTemplate;
use crate::undo::{DEFAULT_UNDO_CAPACITY, PlayerId, UndoService};
use crate::world::{VoxelCoord, VoxelWorld};

/// The invoking actor: who is building, and from where.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub id: PlayerId,
    pub position: VoxelCoord,
}

/// What happened to a build request that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Built { voxels_affected: usize },
    /// The invoking actor is absent or not in a live world: silent no-op,
    /// nothing captured.
    ActorUnavailable,
}

pub struct BuildRuntime {
    world: VoxelWorld,
    undo: UndoService,
}

impl Default for BuildRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildRuntime {
    pub fn new() -> Self {
        Self::with_undo_capacity(DEFAULT_UNDO_CAPACITY)
    }

    pub fn with_undo_capacity(capacity: usize) -> Self {
        Self {
            world: VoxelWorld::new(),
            undo: UndoService::new(capacity),
        }
    }

    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut VoxelWorld {
        &mut self.world
    }

    /// Execute one parametric build: origin = actor position + config
    /// offset, stamp the archetype, record the capture for undo.
    pub fn build(
        &mut self,
        actor: Option<&Actor>,
        config: &BuildConfig,
    ) -> Result<BuildOutcome, GenerateError> {
        let Some(actor) = actor else {
            log::debug!("build request dropped: no actor");
            return Ok(BuildOutcome::ActorUnavailable);
        };

        let origin = actor.position + config.offset;
        let capture = generate(&mut self.world, origin, config)?;
        let voxels_affected = capture.len();
        self.undo.record_action(actor.id, capture);
        log::info!(
            "player {} built {} ({}, {}) at ({}, {}, {}): {} voxels affected",
            actor.id.0,
            config.archetype().label(),
            config.material.label(),
            config.size.label(),
            origin.x,
            origin.y,
            origin.z,
            voxels_affected
        );
        Ok(BuildOutcome::Built { voxels_affected })
    }

    /// Execute one custom build from a saved template. This is the build
    /// path for [`crate::catalog::Archetype::Custom`], which has no
    /// parametric generator.
    pub fn build_template(
        &mut self,
        actor: Option<&Actor>,
        config: &BuildConfig,
        template: &StructureTemplate,
    ) -> BuildOutcome {
        let Some(actor) = actor else {
            log::debug!("template build request dropped: no actor");
            return BuildOutcome::ActorUnavailable;
        };

        let origin = actor.position + config.offset;
        let capture = stamp_template(&mut self.world, origin, config.quarter_turns(), template);
        let voxels_affected = capture.len();
        self.undo.record_action(actor.id, capture);
        log::info!(
            "player {} stamped template {:?}: {} voxels affected",
            actor.id.0,
            template.name(),
            voxels_affected
        );
        BuildOutcome::Built { voxels_affected }
    }

    /// Reverse the player's most recent build. `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self, player: PlayerId) -> bool {
        let undone = self.undo.undo(player, &mut self.world);
        if undone {
            log::info!("player {} undid their last build", player.0);
        } else {
            log::debug!("player {} has nothing to undo", player.0);
        }
        undone
    }

    pub fn can_undo(&self, player: PlayerId) -> bool {
        self.undo.can_undo(player)
    }

    pub fn clear_history(&mut self, player: PlayerId) {
        self.undo.clear_history(player);
    }
}
