// Shared fixtures for host-side integration tests: a recording host and a
// small room laid out on the z = 0 plane in front of the camera.

#![allow(dead_code)]

use glam::Vec3;
use room_core::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Click,
    Modal(ModalId),
    Image(String, String),
    Link(String),
    Camera(CameraMode),
    Toggle(String),
    Highlight(Vec<ObjectId>),
    FadeIn(f32, f32),
    FadeOut(f32),
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    /// Every call except highlight pushes.
    pub fn effects(&self) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|c| !matches!(c, Call::Highlight(_)))
            .cloned()
            .collect()
    }

    pub fn highlights(&self) -> Vec<Vec<ObjectId>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Highlight(set) => Some(set.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl InteractionHost for Recorder {
    fn play_click_sound(&mut self) {
        self.calls.push(Call::Click);
    }
    fn show_modal(&mut self, modal: ModalId) {
        self.calls.push(Call::Modal(modal));
    }
    fn show_image_overlay(&mut self, src: &str, caption: &str) {
        self.calls.push(Call::Image(src.to_string(), caption.to_string()));
    }
    fn open_external_link(&mut self, url: &str) {
        self.calls.push(Call::Link(url.to_string()));
    }
    fn enter_camera_mode(&mut self, mode: CameraMode) {
        self.calls.push(Call::Camera(mode));
    }
    fn toggle_hinged_sub_object(&mut self, group: &str) {
        self.calls.push(Call::Toggle(group.to_string()));
    }
    fn set_highlight(&mut self, objects: &[ObjectId]) {
        self.calls.push(Call::Highlight(objects.to_vec()));
    }
    fn fade_in_instrument(&mut self, volume: f32, fade_secs: f32) {
        self.calls.push(Call::FadeIn(volume, fade_secs));
    }
    fn fade_out_instrument(&mut self, fade_secs: f32) {
        self.calls.push(Call::FadeOut(fade_secs));
    }
}

pub const POSTER: &str = "poster-raycast";
pub const POSTER_SRC: &str = "images/poster.webp";
pub const POSTER_CAPTION: &str = "a poster";

/// Looking down -Z at the origin from z = 10 with a 90° square frustum.
pub fn test_camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 10.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: 90f32.to_radians(),
        znear: 0.1,
        zfar: 100.0,
    }
}

pub fn cube(name: &str, x: f32, y: f32) -> SceneNode {
    SceneNode::new(name)
        .with_position(Vec3::new(x, y, 0.0))
        .with_bounds(Aabb::cube(0.5))
}

/// Every interactable kind, spaced so no two boxes overlap on screen.
pub fn room_scene() -> SceneGraph {
    let mut scene = SceneGraph::new();
    scene.add(cube("whiteboard-raycast-one", -4.0, 2.0), None).unwrap();
    scene.add(cube("about-raycast", -2.0, 2.0), None).unwrap();
    scene.add(cube("perry-mug-raycast-seven", 0.0, 2.0), None).unwrap();
    scene.add(cube("perry-hat-seven", 1.2, 2.0), None).unwrap();
    let mailbox = scene.add(cube("mailbox-four-raycast", 3.5, 2.0), None).unwrap();
    scene
        .add(
            SceneNode::new("mailbox-cover-four")
                .with_position(Vec3::new(0.0, 1.2, 0.0))
                .with_bounds(Aabb::cube(0.5)),
            Some(mailbox),
        )
        .unwrap();
    scene.add(cube("github-link-raycast", -4.0, -2.0), None).unwrap();
    scene.add(cube("chair-animateSpin-raycast", -2.0, -2.0), None).unwrap();
    scene.add(cube("plant-animateScale-raycast", 0.0, -2.0), None).unwrap();
    scene
        .add(
            cube("erhu-raycast", 2.0, -2.0).with_emissive(Emissive::from_hex(0x000000, 0.0)),
            None,
        )
        .unwrap();
    scene.add(cube(POSTER, 4.0, -2.0), None).unwrap();
    scene.add(cube("perry-hat-two-raycast", -4.0, -5.0), None).unwrap();
    // not a candidate: never hit
    scene.add(cube("wall", 0.0, -5.0), None).unwrap();
    scene
}

pub fn room_config() -> InteractionConfig {
    InteractionConfig::default().with_image_overlay(POSTER, POSTER_SRC, POSTER_CAPTION)
}

/// The room, scanned and wired the way the front-end does after loading.
pub fn room() -> RaycasterController<Recorder> {
    let mut ctrl =
        RaycasterController::with_seed(test_camera(), room_scene(), Recorder::default(), room_config(), 7);
    let catalog = SceneCatalog::scan(ctrl.scene_mut());
    ctrl.install_catalog(&catalog);
    ctrl
}

pub fn id(ctrl: &RaycasterController<Recorder>, name: &str) -> ObjectId {
    ctrl.scene()
        .find_by_name(name)
        .unwrap_or_else(|| panic!("no object named {name}"))
}

/// NDC of a world point as seen by `camera`.
pub fn ndc_of(camera: &Camera, p: Vec3) -> (f32, f32) {
    let clip = camera.projection_matrix() * camera.view_matrix() * p.extend(1.0);
    (clip.x / clip.w, clip.y / clip.w)
}

/// Point at the centre of `name` and run one update.
pub fn aim(ctrl: &mut RaycasterController<Recorder>, name: &str) -> Vec<RayHit> {
    let target = id(ctrl, name);
    let (x, y) = ndc_of(ctrl.camera(), ctrl.scene().world_position(target));
    ctrl.update(x, y).to_vec()
}

/// Point at empty space (top-right corner, nothing placed there).
pub fn aim_away(ctrl: &mut RaycasterController<Recorder>) -> Vec<RayHit> {
    ctrl.update(0.95, 0.95).to_vec()
}

pub fn secs(s: f32) -> std::time::Duration {
    std::time::Duration::from_secs_f32(s)
}

/// Tick in 50 ms steps until `total` seconds have passed.
pub fn run_for(ctrl: &mut RaycasterController<Recorder>, total: f32) {
    let steps = (total / 0.05).round() as usize;
    for _ in 0..steps {
        ctrl.tick(secs(0.05));
    }
}
