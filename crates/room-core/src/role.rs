//! Semantic roles encoded in object names.
//!
//! Artists encode what a mesh does in its name (`about-raycast`,
//! `github-link-raycast`, ...). Names are parsed once into a [`Role`] and the
//! click dispatcher only ever matches on the variant.

use fnv::FnvHashMap;

use crate::config::{CameraMode, ImageOverlay, InteractionConfig, ModalId};
use crate::scene::{ObjectId, SceneGraph};

#[derive(Clone, Debug, PartialEq)]
pub enum Role {
    Modal(ModalId),
    ImageOverlay(ImageOverlay),
    SocialLink { key: String, url: String },
    CameraMode(CameraMode),
    /// Acknowledged with the click sound, nothing else.
    ClickOnly,
    Plain,
}

impl Role {
    /// Parse a name against the routing tables.
    ///
    /// Variants are tried in dispatch priority order, so a name matching
    /// several tables resolves to the one the dispatcher would reach first.
    pub fn parse(name: &str, cfg: &InteractionConfig) -> Role {
        if let Some((_, modal)) = cfg.modal_patterns.iter().find(|(p, _)| name.contains(p.as_str())) {
            return Role::Modal(*modal);
        }
        if let Some(overlay) = cfg.image_overlays.get(name) {
            return Role::ImageOverlay(overlay.clone());
        }
        let lower = name.to_lowercase();
        if let Some((key, url)) = cfg
            .social_links
            .iter()
            .find(|(key, _)| lower.contains(&key.to_lowercase()))
        {
            return Role::SocialLink {
                key: key.clone(),
                url: url.clone(),
            };
        }
        if let Some((_, mode)) = cfg.camera_patterns.iter().find(|(p, _)| name.contains(p.as_str())) {
            return Role::CameraMode(*mode);
        }
        if cfg.click_only_patterns.iter().any(|p| name.contains(p.as_str())) {
            return Role::ClickOnly;
        }
        Role::Plain
    }
}

/// Lazily filled `ObjectId -> Role` table.
#[derive(Debug, Default)]
pub struct RoleCache {
    roles: FnvHashMap<ObjectId, Role>,
}

impl RoleCache {
    pub fn get(&mut self, scene: &SceneGraph, cfg: &InteractionConfig, id: ObjectId) -> &Role {
        self.roles
            .entry(id)
            .or_insert_with(|| Role::parse(scene.name(id), cfg))
    }

    pub fn clear(&mut self) {
        self.roles.clear();
    }
}
