//! Custom structure templates and their on-disk store.
//!
//! A [`StructureTemplate`] is a named bag of relative voxel placements with
//! nominal bounding dimensions. [`TemplateStore`] persists templates as one
//! pretty-printed JSON file per template under a directory, keyed by a
//! sanitized file name. Custom-archetype builds stamp a loaded template
//! through [`crate::generator::stamp_template`].

use std::fs;
use std::path::{Path, PathBuf};

use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::catalog::Material;

/// One voxel of a template, relative to the template origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVoxel {
    pub pos: IVec3,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureTemplate {
    name: String,
    width: i32,
    height: i32,
    depth: i32,
    voxels: Vec<TemplateVoxel>,
}

impl StructureTemplate {
    pub fn new(name: impl Into<String>, width: i32, height: i32, depth: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            depth,
            voxels: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn voxels(&self) -> &[TemplateVoxel] {
        &self.voxels
    }

    pub fn block_count(&self) -> usize {
        self.voxels.len()
    }

    /// Set the block at a relative position, replacing any earlier entry for
    /// the same position.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: Block) {
        let pos = IVec3::new(x, y, z);
        if let Some(existing) = self.voxels.iter_mut().find(|v| v.pos == pos) {
            existing.block = block;
        } else {
            self.voxels.push(TemplateVoxel { pos, block });
        }
    }

    /// Copy of this template with every voxel re-blocked to the palette's
    /// primary material.
    pub fn with_material(&self, material: Material) -> StructureTemplate {
        let primary = material.palette().primary;
        let mut copy = self.clone();
        for voxel in &mut copy.voxels {
            voxel.block = primary;
        }
        copy
    }

    /// Scaled copy: dimensions clamp to at least 1, positions scale with
    /// truncation toward zero. Distinct source voxels may collapse onto the
    /// same cell when shrinking; later entries win.
    pub fn with_scale(&self, scale: f32) -> StructureTemplate {
        let mut scaled = StructureTemplate::new(
            self.name.clone(),
            ((self.width as f32 * scale) as i32).max(1),
            ((self.height as f32 * scale) as i32).max(1),
            ((self.depth as f32 * scale) as i32).max(1),
        );
        for voxel in &self.voxels {
            scaled.set_block(
                (voxel.pos.x as f32 * scale) as i32,
                (voxel.pos.y as f32 * scale) as i32,
                (voxel.pos.z as f32 * scale) as i32,
                voxel.block,
            );
        }
        scaled
    }
}

#[derive(Debug)]
pub enum TemplateError {
    /// No template file under the requested name.
    NotFound(String),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::NotFound(name) => write!(f, "no template named {name:?}"),
            TemplateError::IoError(e) => write!(f, "IO error: {e}"),
            TemplateError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for TemplateError {}

impl From<std::io::Error> for TemplateError {
    fn from(e: std::io::Error) -> Self {
        TemplateError::IoError(e)
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(e: serde_json::Error) -> Self {
        TemplateError::JsonError(e)
    }
}

/// Directory-backed template persistence: one `<sanitized-name>.json` per
/// template.
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_name(name)))
    }

    pub fn save(&self, template: &StructureTemplate) -> Result<(), TemplateError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.file_path(template.name());
        let json = serde_json::to_string_pretty(template)?;
        fs::write(&path, json)?;
        log::info!(
            "saved template {:?} ({} voxels) to {}",
            template.name(),
            template.block_count(),
            path.display()
        );
        Ok(())
    }

    pub fn load(&self, name: &str) -> Result<StructureTemplate, TemplateError> {
        let path = self.file_path(name);
        if !path.exists() {
            return Err(TemplateError::NotFound(name.to_string()));
        }
        let json = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Names of all saved templates, from the file names on disk.
    pub fn list(&self) -> Result<Vec<String>, TemplateError> {
        let mut names = Vec::new();
        if !self.dir.exists() {
            return Ok(names);
        }
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn delete(&self, name: &str) -> Result<(), TemplateError> {
        let path = self.file_path(name);
        if path.exists() {
            fs::remove_file(&path)?;
            log::info!("deleted template {name:?}");
        }
        Ok(())
    }
}

/// File-name sanitization: anything outside `[A-Za-z0-9_-]` becomes `_`.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> TemplateStore {
        let dir = std::env::temp_dir().join(format!("blockwright_templates_{tag}"));
        let _ = fs::remove_dir_all(&dir);
        TemplateStore::new(dir)
    }

    fn sample_template() -> StructureTemplate {
        let mut template = StructureTemplate::new("gazebo", 3, 2, 3);
        template.set_block(0, 0, 0, Block::Stone);
        template.set_block(2, 0, 2, Block::Planks);
        template.set_block(1, 1, 1, Block::Glass);
        template
    }

    #[test]
    fn save_load_round_trip_preserves_geometry() {
        let store = temp_store("roundtrip");
        let template = sample_template();
        store.save(&template).unwrap();

        let loaded = store.load("gazebo").unwrap();
        assert_eq!(loaded, template);

        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn list_and_delete_track_files_on_disk() {
        let store = temp_store("listing");
        store.save(&StructureTemplate::new("alpha", 1, 1, 1)).unwrap();
        store.save(&StructureTemplate::new("beta", 1, 1, 1)).unwrap();
        assert_eq!(store.list().unwrap(), vec!["alpha", "beta"]);

        store.delete("alpha").unwrap();
        assert_eq!(store.list().unwrap(), vec!["beta"]);

        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn load_of_missing_template_is_not_found() {
        let store = temp_store("missing");
        match store.load("nope") {
            Err(TemplateError::NotFound(name)) => assert_eq!(name, "nope"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn names_are_sanitized_for_the_filesystem() {
        assert_eq!(sanitize_name("My Castle v2!"), "My_Castle_v2_");
        assert_eq!(sanitize_name("plain-name_ok"), "plain-name_ok");

        let store = temp_store("sanitize");
        let template = StructureTemplate::new("My Castle v2!", 1, 1, 1);
        store.save(&template).unwrap();
        // Loads back under the original (unsanitized) name.
        let loaded = store.load("My Castle v2!").unwrap();
        assert_eq!(loaded.name(), "My Castle v2!");

        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn with_material_reblocks_every_voxel() {
        let reblocked = sample_template().with_material(Material::Stone);
        assert!(reblocked.voxels().iter().all(|v| v.block == Block::Stone));
        assert_eq!(reblocked.block_count(), 3);
    }

    #[test]
    fn with_scale_truncates_and_clamps() {
        let template = sample_template();
        let shrunk = template.with_scale(0.5);
        assert_eq!(shrunk.width(), 1);
        assert_eq!(shrunk.height(), 1);
        assert_eq!(shrunk.depth(), 1);
        // (0,0,0) and (1,1,1)->(0,0,0) collapse; (2,0,2)->(1,0,1) survives.
        assert_eq!(shrunk.block_count(), 2);

        let grown = template.with_scale(2.0);
        assert_eq!(grown.width(), 6);
        assert_eq!(grown.block_count(), 3);
    }
}
