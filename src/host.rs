use crate::audio::RoomAudio;
use crate::constants::*;
use crate::dom;
use crate::overlay;
use room_core::{CameraMode, InteractionHost, ModalId, ObjectId};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Browser side of the interaction core: DOM overlays, cursor, audio and
/// events for the JS scene host (camera rig, lid animation, outline pass).
pub struct WebHost {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    audio: Option<RoomAudio>,
    highlighted: Vec<ObjectId>,
    // dispatched after the controller borrow is released
    outbox: Vec<(&'static str, JsValue)>,
}

impl WebHost {
    pub fn new(document: web::Document, canvas: web::HtmlCanvasElement) -> Self {
        let audio = match RoomAudio::new() {
            Ok(a) => Some(a),
            Err(e) => {
                log::error!("[audio] disabled: {:?}", e);
                None
            }
        };
        Self {
            document,
            canvas,
            audio,
            highlighted: Vec::new(),
            outbox: Vec::new(),
        }
    }

    pub fn audio_mut(&mut self) -> Option<&mut RoomAudio> {
        self.audio.as_mut()
    }

    pub fn take_events(&mut self) -> Vec<(&'static str, JsValue)> {
        std::mem::take(&mut self.outbox)
    }

    pub fn close_ui(&mut self) {
        overlay::hide_modals(&self.document);
        overlay::hide_image(&self.document);
    }
}

impl InteractionHost for WebHost {
    fn play_click_sound(&mut self) {
        if let Some(audio) = self.audio.as_mut() {
            audio.unlock();
            audio.play_click();
        }
    }

    fn show_modal(&mut self, modal: ModalId) {
        log::info!("[modal] open {}", modal.as_str());
        overlay::show_modal(&self.document, modal);
    }

    fn show_image_overlay(&mut self, src: &str, caption: &str) {
        log::info!("[modal] image {}", src);
        overlay::show_image(&self.document, src, caption);
    }

    fn open_external_link(&mut self, url: &str) {
        let Some(window) = web::window() else {
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::error!("[click] window.open failed: {:?}", e);
        }
    }

    fn enter_camera_mode(&mut self, mode: CameraMode) {
        log::info!("[click] camera mode {}", mode.as_str());
        self.outbox
            .push((CAMERA_MODE_EVENT, JsValue::from_str(mode.as_str())));
    }

    fn toggle_hinged_sub_object(&mut self, group: &str) {
        self.outbox.push((TOGGLE_GROUP_EVENT, JsValue::from_str(group)));
    }

    fn set_highlight(&mut self, objects: &[ObjectId]) {
        if objects == self.highlighted.as_slice() {
            return;
        }
        self.highlighted = objects.to_vec();
        let cursor = if objects.is_empty() { CURSOR_DEFAULT } else { CURSOR_POINTER };
        dom::set_cursor(&self.canvas, cursor);

        let ids = js_sys::Array::new();
        for id in objects {
            ids.push(&JsValue::from(id.0));
        }
        self.outbox.push((HIGHLIGHT_EVENT, ids.into()));
    }

    fn fade_in_instrument(&mut self, volume: f32, fade_secs: f32) {
        if let Some(audio) = self.audio.as_mut() {
            audio.fade_in_instrument(volume, fade_secs);
        }
    }

    fn fade_out_instrument(&mut self, fade_secs: f32) {
        if let Some(audio) = self.audio.as_mut() {
            audio.fade_out_instrument(fade_secs);
        }
    }
}
