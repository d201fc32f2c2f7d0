//! Sprite manifest loading and asset management.
//!
//! Loads the sprite manifest JSON which defines the available frames.
//! Animation frames are keyed `"<base>_<n>"` counting from 1.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const SPRITE_MANIFEST_PATH: &str = "assets/sprites/manifest.json";

/// Resource containing all loaded sprite definitions.
#[derive(Resource, Default)]
pub struct SpriteManifest {
    /// Version of the manifest schema.
    pub version: u32,
    /// Map of asset keys to their definitions.
    pub assets: HashMap<String, SpriteAssetDef>,
    /// Loaded texture handles, keyed by asset key.
    pub textures: HashMap<String, Handle<Image>>,
}

/// Definition of a single sprite asset.
#[derive(Debug, Clone, Deserialize)]
pub struct SpriteAssetDef {
    /// Path to the sprite image file, relative to assets/.
    pub path: String,
}

/// Raw manifest JSON structure.
#[derive(Deserialize)]
struct ManifestJson {
    version: u32,
    assets: HashMap<String, SpriteAssetDef>,
}

impl SpriteManifest {
    /// Parse manifest JSON without loading any textures.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let manifest_json: ManifestJson = serde_json::from_str(contents)?;
        Ok(Self {
            version: manifest_json.version,
            assets: manifest_json.assets,
            textures: HashMap::new(),
        })
    }

    /// Load the manifest from a JSON file and preload its textures.
    ///
    /// A missing or unreadable manifest leaves the manifest empty.
    pub fn load_from_file(&mut self, path: &str, asset_server: &AssetServer) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!(
                "Sprite manifest not found at {:?}, using empty manifest",
                path
            );
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sprite manifest: {}", e);
                return;
            }
        };

        let parsed = match Self::from_json(&contents) {
            Ok(m) => m,
            Err(e) => {
                error!("Failed to parse sprite manifest: {}", e);
                return;
            }
        };

        self.version = parsed.version;
        self.assets = parsed.assets;

        // Preload all textures
        for (key, def) in &self.assets {
            let handle = asset_server.load(&def.path);
            self.textures.insert(key.clone(), handle);
        }

        info!(
            "Loaded sprite manifest v{} with {} assets",
            self.version,
            self.assets.len()
        );
    }

    /// Get a texture handle by key.
    pub fn get_texture(&self, key: &str) -> Option<Handle<Image>> {
        self.textures.get(key).cloned()
    }

    /// Check if a sprite key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.assets.contains_key(key)
    }

    /// Consecutive frame keys for `base`, stopping at the first gap.
    pub fn frame_keys(&self, base: &str) -> Vec<String> {
        (1..)
            .map(|n| animation_frame_key(base, n))
            .take_while(|key| self.contains(key))
            .collect()
    }

    /// Texture handles for the frames of `base`, in order.
    pub fn frame_sequence(&self, base: &str) -> Vec<Handle<Image>> {
        self.frame_keys(base)
            .iter()
            .filter_map(|key| self.get_texture(key))
            .collect()
    }
}

/// Helper for animation frame keys.
pub fn animation_frame_key(base: &str, frame: u32) -> String {
    format!("{}_{}", base, frame)
}

/// System to load the sprite manifest at startup.
pub fn load_sprite_manifest(
    mut manifest: ResMut<SpriteManifest>,
    asset_server: Res<AssetServer>,
) {
    manifest.load_from_file(SPRITE_MANIFEST_PATH, &asset_server);
}
