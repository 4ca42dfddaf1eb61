//! One-time classification of a freshly loaded room by naming convention.

use crate::constants::{MAILBOX_HOVER_GROUP, MUG_HOVER_GROUP};
use crate::scene::{ObjectId, SceneGraph};

const MUG_PIECES: [&str; 2] = ["perry-mug-raycast-seven", "perry-hat-seven"];
const MAILBOX_PIECES: [&str; 2] = ["mailbox-four-raycast", "mailbox-cover-four"];
const MAILBOX_COVER: &str = "mailbox-cover-four";

/// What the scene processor found in the loaded room.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneCatalog {
    /// Objects the pointer ray is tested against.
    pub candidates: Vec<ObjectId>,
    pub scale_targets: Vec<ObjectId>,
    pub spin_targets: Vec<ObjectId>,
    pub mailbox_cover: Option<ObjectId>,
    /// The instrument that plays on hover.
    pub ambient_target: Option<ObjectId>,
}

impl SceneCatalog {
    /// Walk every node, tag the mug and mailbox hover groups, and collect the
    /// interaction sets.
    pub fn scan(scene: &mut SceneGraph) -> Self {
        let mut cat = SceneCatalog::default();
        let ids: Vec<ObjectId> = scene.ids().collect();
        let mut erhu_fallback = None;

        for id in ids {
            let name = scene.name(id).to_string();
            let group = if MUG_PIECES.contains(&name.as_str()) {
                Some(MUG_HOVER_GROUP)
            } else if MAILBOX_PIECES.contains(&name.as_str()) {
                Some(MAILBOX_HOVER_GROUP)
            } else {
                None
            };
            if let Some(g) = group {
                log::info!("[scene] {} joins hover group `{}`", name, g);
                let _ = scene.set_hover_group(id, Some(g.to_string()));
            }

            // grouped pieces are raycastable even without the marker
            if name.contains("raycast") || group.is_some() {
                cat.candidates.push(id);
            }
            if name.contains("animateScale") {
                cat.scale_targets.push(id);
            }
            if name.contains("animateSpin") {
                cat.spin_targets.push(id);
            }
            if name == MAILBOX_COVER {
                cat.mailbox_cover = Some(id);
            }
            if name.contains("erhu") {
                if name.contains("erhu-raycast") {
                    erhu_fallback.get_or_insert(id);
                } else if cat.ambient_target.is_none() {
                    cat.ambient_target = Some(id);
                }
            }
        }
        cat.ambient_target = cat.ambient_target.or(erhu_fallback);

        log::info!(
            "[scene] catalog: {} candidates, {} scale, {} spin",
            cat.candidates.len(),
            cat.scale_targets.len(),
            cat.spin_targets.len()
        );
        cat
    }
}
