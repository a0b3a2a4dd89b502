//! Blockwright
//!
//! Parametric structure generation for voxel worlds, with a bounded
//! per-player undo log. A host UI assembles a [`config::BuildConfig`]
//! (archetype, material palette, size, style, rotation, placement offset),
//! the generator library stamps the structure into the world grid, and every
//! overwritten voxel is captured so the build can be reversed exactly.
//!
//! # Modules
//!
//! - [`catalog`] - archetypes, categories, material palettes, sizes, styles
//! - [`config`] - the mutable parameter bundle the UI edits
//! - [`generator`] - one deterministic geometry routine per archetype
//! - [`info`] - per-(archetype, size) description and cost estimates
//! - [`undo`] - per-player bounded undo histories
//! - [`template`] - saved custom structures and their JSON store
//! - [`runtime`] - world + undo orchestration for hosts
//!
//! # Example
//!
//! ```
//! use blockwright::catalog::Archetype;
//! use blockwright::config::BuildConfig;
//! use blockwright::runtime::{Actor, BuildRuntime};
//! use blockwright::undo::PlayerId;
//! use blockwright::world::VoxelCoord;
//!
//! let mut runtime = BuildRuntime::new();
//! let actor = Actor {
//!     id: PlayerId(1),
//!     position: VoxelCoord::new(0, 64, 0),
//! };
//!
//! let mut config = BuildConfig::new(Archetype::House);
//! config.cycle_material();
//! config.rotate_cw();
//!
//! runtime.build(Some(&actor), &config).unwrap();
//! assert!(runtime.can_undo(actor.id));
//! assert!(runtime.undo(actor.id));
//! ```

pub mod block;
pub mod catalog;
pub mod config;
pub mod generator;
pub mod info;
pub mod runtime;
pub mod template;
pub mod undo;
pub mod world;

pub use block::Block;
pub use catalog::{Archetype, Category, Material, Palette, Size, Style};
pub use config::BuildConfig;
pub use generator::{CaptureMap, GenerateError, generate, stamp_template};
pub use info::{BuildInfo, build_info};
pub use runtime::{Actor, BuildOutcome, BuildRuntime};
pub use template::{StructureTemplate, TemplateError, TemplateStore};
pub use undo::{PlayerId, UndoAction, UndoService};
pub use world::{VoxelCoord, VoxelGrid, VoxelWorld};
