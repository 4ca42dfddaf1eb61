//! Collaborator interfaces the controller calls out to.
//!
//! The page (DOM, audio, camera rig) implements [`InteractionHost`] once and
//! hands it to the controller at construction; tests inject a recorder.

use crate::config::{CameraMode, ModalId};
use crate::scene::{ObjectId, SceneGraph};

pub trait InteractionHost {
    /// Short UI click. Must not fail or block routing.
    fn play_click_sound(&mut self);
    fn show_modal(&mut self, modal: ModalId);
    fn show_image_overlay(&mut self, src: &str, caption: &str);
    fn open_external_link(&mut self, url: &str);
    fn enter_camera_mode(&mut self, mode: CameraMode);
    /// Click on the registered toggle group (mug lid and its steam).
    fn toggle_hinged_sub_object(&mut self, group: &str);
    /// Objects the outline pass should emphasize this frame.
    fn set_highlight(&mut self, objects: &[ObjectId]);
    /// Fade the instrument loop in, ducking competing ambient tracks.
    fn fade_in_instrument(&mut self, volume: f32, fade_secs: f32);
    fn fade_out_instrument(&mut self, fade_secs: f32);
}

/// A collaborator that may claim a click on one of its own pieces.
pub trait ClickClaim {
    /// Return `true` if the click on `object` was handled.
    fn try_handle_click(
        &mut self,
        scene: &SceneGraph,
        object: ObjectId,
        host: &mut dyn InteractionHost,
    ) -> bool;
}

/// Postal box: any click on the body or cover opens the contact modal.
#[derive(Debug, Clone)]
pub struct PostalBox {
    piece_names: Vec<String>,
}

impl PostalBox {
    pub fn new(piece_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            piece_names: piece_names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for PostalBox {
    fn default() -> Self {
        Self::new(["mailbox-four-raycast", "mailbox-cover-four"])
    }
}

impl ClickClaim for PostalBox {
    fn try_handle_click(
        &mut self,
        scene: &SceneGraph,
        object: ObjectId,
        host: &mut dyn InteractionHost,
    ) -> bool {
        let name = scene.name(object);
        if self.piece_names.iter().any(|p| p == name) {
            host.show_modal(ModalId::Contact);
            return true;
        }
        false
    }
}
