use crate::config::AmbientParams;
use crate::host::InteractionHost;
use crate::particles::{NoteEmitter, NoteParticle};
use crate::scene::{Emissive, ObjectId, SceneGraph};

/// Hover feedback for the instrument: audio fade, glow, and music notes.
///
/// The frame loop reports hover every frame, so both transitions are
/// idempotent.
#[derive(Debug)]
pub struct AmbientReaction {
    target: ObjectId,
    params: AmbientParams,
    hovering: bool,
    original_emissive: Option<Emissive>,
    notes: NoteEmitter,
}

impl AmbientReaction {
    pub fn new(scene: &SceneGraph, target: ObjectId, params: AmbientParams, seed: u64) -> Self {
        let origin = scene.world_position(target);
        Self {
            target,
            params,
            hovering: false,
            original_emissive: scene.get(target).and_then(|n| n.emissive),
            notes: NoteEmitter::new(origin, params.spawn_interval, seed),
        }
    }

    pub fn target(&self) -> ObjectId {
        self.target
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// True if `hit` is the target or one of its descendants.
    pub fn is_target(&self, scene: &SceneGraph, hit: Option<ObjectId>) -> bool {
        hit.is_some_and(|h| scene.is_self_or_descendant_of(h, self.target))
    }

    pub fn hover_start(&mut self, scene: &mut SceneGraph, host: &mut dyn InteractionHost) {
        if self.hovering {
            return;
        }
        self.hovering = true;
        log::debug!("[hover] ambient start on `{}`", scene.name(self.target));

        host.fade_in_instrument(self.params.volume, self.params.fade);
        self.notes.set_origin(scene.world_position(self.target));
        self.notes.start();

        if self.original_emissive.is_some() {
            // theme swaps may have retinted it since construction
            self.original_emissive = scene.get(self.target).and_then(|n| n.emissive);
            let _ = scene.set_emissive(self.target, Some(self.params.glow));
        }
    }

    pub fn hover_end(&mut self, scene: &mut SceneGraph, host: &mut dyn InteractionHost) {
        if !self.hovering {
            return;
        }
        self.hovering = false;
        log::debug!("[hover] ambient end on `{}`", scene.name(self.target));

        host.fade_out_instrument(self.params.fade);
        self.notes.stop();

        if let Some(original) = self.original_emissive {
            let _ = scene.set_emissive(self.target, Some(original));
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.notes.update(dt);
    }

    pub fn notes(&self) -> &[NoteParticle] {
        self.notes.particles()
    }
}
