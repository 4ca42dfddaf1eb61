#![cfg(target_arch = "wasm32")]
use glam::Vec3;
use instant::Instant;
use room_core::{
    Aabb, Camera, Emissive, ObjectId, RaycasterController, SceneCatalog, SceneGraph, SceneNode,
    Transform,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod overlay;

use host::WebHost;

pub(crate) type Controller = RaycasterController<WebHost>;
pub(crate) type SharedController = Rc<RefCell<Controller>>;

/// Run `f` on the controller, then flush window events the host queued
/// while it was borrowed. JS listeners may call back into the bridge.
pub(crate) fn with_controller<R>(shared: &SharedController, f: impl FnOnce(&mut Controller) -> R) -> R {
    let (out, events) = {
        let mut c = shared.borrow_mut();
        let out = f(&mut c);
        (out, c.host_mut().take_events())
    };
    for (name, detail) in events {
        dom::dispatch_window_event(name, &detail);
    }
    out
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn vec3_at(v: &[f32], at: usize) -> Option<Vec3> {
    v.get(at..at + 3).map(Vec3::from_slice)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("room-web starting");
    Ok(())
}

/// Bridge handed to the JS scene host. The host mirrors every interactable
/// mesh into the core while loading, then calls `finish_loading`.
#[wasm_bindgen]
pub struct RoomInteraction {
    controller: SharedController,
}

#[wasm_bindgen]
impl RoomInteraction {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<RoomInteraction, JsValue> {
        static STARTED: AtomicBool = AtomicBool::new(false);
        if STARTED.swap(true, Ordering::SeqCst) {
            return Err(JsValue::from_str("RoomInteraction already created"));
        }
        let (document, canvas) = canvas_and_document().map_err(|e| js_err(format!("{:#}", e)))?;

        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let host = WebHost::new(document.clone(), canvas.clone());
        let controller = Rc::new(RefCell::new(RaycasterController::with_seed(
            Camera::default(),
            SceneGraph::new(),
            host,
            Default::default(),
            seed,
        )));

        let pointer = Rc::new(RefCell::new(input::PointerState::default()));
        events::wire_canvas_resize(&canvas, &controller);
        events::wire_input_handlers(events::InputWiring {
            document,
            canvas,
            controller: controller.clone(),
            pointer: pointer.clone(),
        });
        frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
            controller: controller.clone(),
            pointer,
            last_instant: Instant::now(),
        })));

        Ok(RoomInteraction { controller })
    }

    /// Mirror one mesh. `bounds` is `[min.xyz, max.xyz]` in local space;
    /// omit it for grouping nodes.
    pub fn add_object(
        &mut self,
        name: &str,
        parent: Option<u32>,
        position: &[f32],
        bounds: Option<Box<[f32]>>,
    ) -> Result<u32, JsValue> {
        let mut node = SceneNode::new(name).with_position(vec3_at(position, 0).unwrap_or(Vec3::ZERO));
        if let Some(b) = bounds {
            if let (Some(min), Some(max)) = (vec3_at(&b, 0), vec3_at(&b, 3)) {
                node = node.with_bounds(Aabb::new(min, max));
            }
        }
        with_controller(&self.controller, |c| {
            c.scene_mut().add(node, parent.map(ObjectId)).map(|id| id.0)
        })
        .map_err(js_err)
    }

    pub fn set_object_transform(
        &mut self,
        id: u32,
        position: &[f32],
        rotation: &[f32],
        scale: &[f32],
    ) -> Result<(), JsValue> {
        let transform = Transform {
            position: vec3_at(position, 0).unwrap_or(Vec3::ZERO),
            rotation: vec3_at(rotation, 0).unwrap_or(Vec3::ZERO),
            scale: vec3_at(scale, 0).unwrap_or(Vec3::ONE),
        };
        with_controller(&self.controller, |c| c.scene_mut().set_transform(ObjectId(id), transform))
            .map_err(js_err)
    }

    pub fn set_object_emissive(&mut self, id: u32, hex: u32, intensity: f32) -> Result<(), JsValue> {
        let emissive = Emissive::from_hex(hex, intensity);
        with_controller(&self.controller, |c| {
            c.scene_mut().set_emissive(ObjectId(id), Some(emissive))
        })
        .map_err(js_err)
    }

    /// Classify the mirrored scene by name and enable interaction.
    pub fn finish_loading(&mut self) {
        with_controller(&self.controller, |c| {
            let catalog = SceneCatalog::scan(c.scene_mut());
            c.install_catalog(&catalog);
        });
    }

    pub fn set_camera(&mut self, eye: &[f32], target: &[f32], fov_degrees: f32) {
        with_controller(&self.controller, |c| {
            let mut camera = c.camera().clone();
            camera.eye = vec3_at(eye, 0).unwrap_or(camera.eye);
            camera.target = vec3_at(target, 0).unwrap_or(camera.target);
            camera.fovy_radians = fov_degrees.to_radians();
            c.set_camera(camera);
        });
    }

    pub fn freeze_outline(&mut self, ids: &[u32]) {
        let ids: Vec<ObjectId> = ids.iter().copied().map(ObjectId).collect();
        with_controller(&self.controller, |c| c.freeze_outline(&ids));
    }

    pub fn thaw_outline(&mut self) {
        with_controller(&self.controller, |c| c.thaw_outline());
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        with_controller(&self.controller, |c| c.set_enabled(enabled));
    }

    /// Make an object that streamed in after loading interactive.
    pub fn add_candidate(&mut self, id: u32) {
        with_controller(&self.controller, |c| {
            if c.scene().contains(ObjectId(id)) {
                c.add_candidate_object(ObjectId(id));
            } else {
                log::warn!("[scene] candidate {} is not in the scene", id);
            }
        });
    }

    /// Nearest interactive object under an NDC point, without any hover
    /// side effects. Lets the page skip camera drags that start on one.
    pub fn pick(&self, ndc_x: f32, ndc_y: f32) -> Option<u32> {
        self.controller
            .borrow()
            .pick(ndc_x, ndc_y)
            .map(|hit| hit.object.0)
    }

    pub fn highlighted(&self) -> Vec<u32> {
        self.controller
            .borrow()
            .highlighted()
            .iter()
            .map(|id| id.0)
            .collect()
    }

    /// `[position.xyz, rotation.xyz, scale.xyz]`, as animated by the core.
    pub fn object_transform(&self, id: u32) -> Option<Vec<f32>> {
        let c = self.controller.borrow();
        let t = c.scene().get(ObjectId(id))?.transform;
        let mut out = Vec::with_capacity(9);
        out.extend_from_slice(&t.position.to_array());
        out.extend_from_slice(&t.rotation.to_array());
        out.extend_from_slice(&t.scale.to_array());
        Some(out)
    }

    /// Live notes packed as `[x, y, z, scale, rotation, opacity, glyph]`.
    pub fn note_particles(&self) -> Vec<f32> {
        let c = self.controller.borrow();
        let notes = c.note_particles();
        let mut out = Vec::with_capacity(notes.len() * 7);
        for n in notes {
            out.extend_from_slice(&n.position.to_array());
            out.extend_from_slice(&[n.scale, n.rotation, n.opacity, n.glyph as u32 as f32]);
        }
        out
    }

    /// Live sparkles packed as `[x, y, z, size, opacity]`.
    pub fn sparkle_particles(&self) -> Vec<f32> {
        let c = self.controller.borrow();
        let mut out = Vec::new();
        for burst in c.sparkle_bursts() {
            for s in &burst.sparkles {
                out.extend_from_slice(&s.position.to_array());
                out.extend_from_slice(&[s.size, s.opacity]);
            }
        }
        out
    }
}

fn canvas_and_document() -> anyhow::Result<(web::Document, web::HtmlCanvasElement)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok((document, canvas))
}
