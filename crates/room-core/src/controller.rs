//! The raycaster controller: the one object the page talks to.
//!
//! Per frame the host calls [`update`](RaycasterController::update) with the
//! pointer in NDC and then [`tick`](RaycasterController::tick) with the frame
//! delta. Clicks and window focus arrive through
//! [`on_click`](RaycasterController::on_click) and
//! [`on_focus`](RaycasterController::on_focus) and only ever read the hits of
//! the last completed update.

use std::time::Duration;

use glam::Vec2;
use rand::prelude::*;

use crate::ambient::AmbientReaction;
use crate::camera::Camera;
use crate::catalog::SceneCatalog;
use crate::config::{CameraMode, InteractionConfig, ModalId};
use crate::hinge::Hinge;
use crate::host::{ClickClaim, InteractionHost, PostalBox};
use crate::hover_group::{HoverGroup, HoverGroupIndex};
use crate::hover_scale::HoverScale;
use crate::outline::OutlineState;
use crate::particles::{NoteParticle, SparkleBurst, SparklePreset};
use crate::ray::{intersect_candidates, RayHit};
use crate::role::{Role, RoleCache};
use crate::scene::{ObjectId, SceneGraph};
use crate::spin::{SpinCooldowns, Spinner};
use crate::tween::Tweens;

/// Work scheduled on the controller clock.
#[derive(Clone, Debug, PartialEq)]
pub enum DeferredAction {
    OpenLink(String),
    Enable,
}

#[derive(Clone, Debug, PartialEq)]
struct Deferred {
    due: f64,
    action: DeferredAction,
}

/// Which route a click took.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Gate closed or nothing under the pointer.
    Ignored,
    ToggledGroup(String),
    Modal(ModalId),
    ImageOverlay { src: String, caption: String },
    ExternalLink(String),
    CameraMode(CameraMode),
    ClickOnly,
    Claimed,
    Spun(ObjectId),
    SpinRejected(ObjectId),
    /// A hit with no matching route.
    Unrouted,
}

impl ClickOutcome {
    /// Routes that put UI over the room. The front-end closes the gate
    /// until that UI is dismissed.
    pub fn takes_pointer(&self) -> bool {
        matches!(
            self,
            ClickOutcome::Modal(_) | ClickOutcome::ImageOverlay { .. } | ClickOutcome::CameraMode(_)
        )
    }
}

pub struct RaycasterController<H: InteractionHost> {
    camera: Camera,
    scene: SceneGraph,
    host: H,
    config: InteractionConfig,

    enabled: bool,
    candidates: Vec<ObjectId>,
    hits: Vec<RayHit>,
    groups: HoverGroupIndex,
    current_group: Option<HoverGroup>,
    roles: RoleCache,
    outline: OutlineState,

    hover_scale: HoverScale,
    hinges: Vec<Hinge>,
    ambient: Option<AmbientReaction>,
    postal_box: Option<PostalBox>,
    claims: Vec<Box<dyn ClickClaim>>,
    spinner: Spinner,

    tweens: Tweens,
    sparkles: Vec<SparkleBurst>,
    rng: StdRng,

    clock: f64,
    deferred: Vec<Deferred>,
    awaiting_focus: bool,
}

impl<H: InteractionHost> RaycasterController<H> {
    pub fn new(camera: Camera, scene: SceneGraph, host: H, config: InteractionConfig) -> Self {
        Self::with_seed(camera, scene, host, config, 0x600d_5eed)
    }

    /// Like [`new`](Self::new) with an explicit seed for decorative randomness.
    pub fn with_seed(
        camera: Camera,
        scene: SceneGraph,
        host: H,
        config: InteractionConfig,
        seed: u64,
    ) -> Self {
        Self {
            camera,
            scene,
            host,
            hover_scale: HoverScale::new(config.hover_scale),
            spinner: Spinner::new(config.spin),
            config,
            enabled: true,
            candidates: Vec::new(),
            hits: Vec::new(),
            groups: HoverGroupIndex::new(),
            current_group: None,
            roles: RoleCache::default(),
            outline: OutlineState::new(),
            hinges: Vec::new(),
            ambient: None,
            postal_box: None,
            claims: Vec::new(),
            tweens: Tweens::new(),
            sparkles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            clock: 0.0,
            deferred: Vec::new(),
            awaiting_focus: false,
        }
    }

    // ---------------- Wiring ----------------

    /// Wire everything the scene processor found: candidates, scale and spin
    /// sets, the mailbox hinge and postal box, and the instrument.
    pub fn install_catalog(&mut self, catalog: &SceneCatalog) {
        self.set_candidate_objects(catalog.candidates.clone());
        self.hover_scale.set_targets(catalog.scale_targets.iter().copied());
        self.spinner.set_targets(catalog.spin_targets.iter().copied());

        let mailbox_group = self.config.mailbox_group.clone();
        self.hinges.retain(|h| h.group() != mailbox_group);
        self.hinges
            .push(Hinge::new(mailbox_group, catalog.mailbox_cover, self.config.hinge));
        self.postal_box = Some(PostalBox::default());

        self.set_ambient_target(catalog.ambient_target);
    }

    /// Replace the set of objects the ray is tested against.
    pub fn set_candidate_objects(&mut self, objects: Vec<ObjectId>) {
        self.candidates = objects;
        self.groups.invalidate();
    }

    /// Extend the interaction surface as the scene streams in.
    pub fn add_candidate_object(&mut self, object: ObjectId) {
        if !self.candidates.contains(&object) {
            self.candidates.push(object);
            self.groups.invalidate();
        }
    }

    pub fn set_scale_targets(&mut self, targets: impl IntoIterator<Item = ObjectId>) {
        self.hover_scale.set_targets(targets);
    }

    pub fn set_spin_targets(&mut self, targets: impl IntoIterator<Item = ObjectId>) {
        self.spinner.set_targets(targets);
    }

    /// Open `child` while hover group `group` is hovered.
    pub fn add_hover_hinge(&mut self, group: &str, child: Option<ObjectId>) {
        self.hinges.push(Hinge::new(group, child, self.config.hinge));
    }

    pub fn set_ambient_target(&mut self, target: Option<ObjectId>) {
        if let Some(old) = self.ambient.as_mut() {
            old.hover_end(&mut self.scene, &mut self.host);
        }
        let seed = self.rng.gen();
        self.ambient = target
            .filter(|&t| self.scene.contains(t))
            .map(|t| AmbientReaction::new(&self.scene, t, self.config.ambient, seed));
    }

    pub fn set_postal_box(&mut self, postal_box: Option<PostalBox>) {
        self.postal_box = postal_box;
    }

    pub fn add_click_claim(&mut self, claim: Box<dyn ClickClaim>) {
        self.claims.push(claim);
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    // ---------------- Per-frame ----------------

    /// Cast the pointer ray and refresh highlight and hover reactions.
    ///
    /// Returns the hits nearest first; empty while the gate is closed.
    pub fn update(&mut self, ndc_x: f32, ndc_y: f32) -> &[RayHit] {
        if !self.enabled {
            return &[];
        }

        let ray = self.camera.ray_through_ndc(Vec2::new(ndc_x, ndc_y));
        self.hits = intersect_candidates(&self.scene, &self.candidates, &ray);
        let primary = self.hits.first().map(|h| h.object);
        let group = primary.and_then(|h| self.groups.resolve(&self.scene, &self.candidates, h));

        let highlight = self.outline.update(&mut self.scene, primary, group.as_ref());
        self.host.set_highlight(highlight);

        if let Some(ambient) = self.ambient.as_mut() {
            if ambient.is_target(&self.scene, primary) {
                ambient.hover_start(&mut self.scene, &mut self.host);
            } else {
                ambient.hover_end(&mut self.scene, &mut self.host);
            }
        }

        let group_id = group.as_ref().map(|g| &*g.id);
        for hinge in &mut self.hinges {
            let hovered = group_id == Some(hinge.group());
            hinge.set_hover_state(&mut self.tweens, hovered);
        }

        if self.hover_scale.has_targets() {
            self.hover_scale.update(&mut self.tweens, primary);
        }

        self.current_group = group;
        &self.hits
    }

    /// Nearest hit under `ndc` without touching any hover state.
    pub fn pick(&self, ndc_x: f32, ndc_y: f32) -> Option<RayHit> {
        if !self.enabled {
            return None;
        }
        let ray = self.camera.ray_through_ndc(Vec2::new(ndc_x, ndc_y));
        intersect_candidates(&self.scene, &self.candidates, &ray)
            .into_iter()
            .next()
    }

    /// Advance the clock, deferred actions, tweens and particles.
    pub fn tick(&mut self, dt: Duration) {
        self.clock += dt.as_secs_f64();
        let dt = dt.as_secs_f32();

        self.run_deferred();
        self.tweens.tick(&mut self.scene, dt);
        if let Some(ambient) = self.ambient.as_mut() {
            ambient.update(dt);
        }
        for burst in &mut self.sparkles {
            burst.update(dt);
        }
        self.sparkles.retain(|b| !b.is_finished());
    }

    fn defer(&mut self, delay: f32, action: DeferredAction) {
        self.deferred.push(Deferred {
            due: self.clock + delay as f64,
            action,
        });
    }

    fn run_deferred(&mut self) {
        let now = self.clock;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.deferred.drain(..).partition(|d| d.due <= now);
        self.deferred = pending;
        due.sort_by(|a, b| a.due.total_cmp(&b.due));

        for d in due {
            match d.action {
                DeferredAction::OpenLink(url) => {
                    log::info!("[click] opening {}", url);
                    self.host.open_external_link(&url);
                    self.awaiting_focus = true;
                }
                DeferredAction::Enable => self.set_enabled(true),
            }
        }
    }

    // ---------------- Input events ----------------

    /// Route a click on the nearest hit of the last update. At most one route
    /// runs per click.
    pub fn on_click(&mut self) -> ClickOutcome {
        if !self.enabled {
            return ClickOutcome::Ignored;
        }
        let Some(object) = self.hits.first().map(|h| h.object) else {
            return ClickOutcome::Ignored;
        };
        let outcome = self.route_click(object);
        log::debug!("[click] `{}` -> {:?}", self.scene.name(object), outcome);
        outcome
    }

    fn route_click(&mut self, object: ObjectId) -> ClickOutcome {
        if let Some(toggle) = self.config.toggle_group.as_deref() {
            let in_group = self
                .groups
                .resolve(&self.scene, &self.candidates, object)
                .is_some_and(|g| &*g.id == toggle);
            if in_group {
                self.host.play_click_sound();
                self.host.toggle_hinged_sub_object(toggle);
                return ClickOutcome::ToggledGroup(toggle.to_string());
            }
        }

        let role = self.roles.get(&self.scene, &self.config, object).clone();
        match role {
            Role::Modal(modal) => {
                self.host.play_click_sound();
                self.host.show_modal(modal);
                return ClickOutcome::Modal(modal);
            }
            Role::ImageOverlay(overlay) => {
                self.host.play_click_sound();
                self.host.show_image_overlay(&overlay.src, &overlay.caption);
                return ClickOutcome::ImageOverlay {
                    src: overlay.src,
                    caption: overlay.caption,
                };
            }
            Role::SocialLink { url, .. } => {
                self.open_external_link(url.clone());
                return ClickOutcome::ExternalLink(url);
            }
            Role::CameraMode(mode) => {
                self.host.play_click_sound();
                self.host.enter_camera_mode(mode);
                return ClickOutcome::CameraMode(mode);
            }
            Role::ClickOnly => {
                self.host.play_click_sound();
                return ClickOutcome::ClickOnly;
            }
            Role::Plain => {}
        }

        let mut claimed = self
            .postal_box
            .as_mut()
            .is_some_and(|p| p.try_handle_click(&self.scene, object, &mut self.host));
        if !claimed {
            for claim in &mut self.claims {
                if claim.try_handle_click(&self.scene, object, &mut self.host) {
                    claimed = true;
                    break;
                }
            }
        }
        if claimed {
            self.host.play_click_sound();
            return ClickOutcome::Claimed;
        }

        if self.spinner.is_target(object) {
            if self.spinner.trigger(&self.scene, &mut self.tweens, object, self.clock) {
                self.spawn_sparkles(object);
                self.host.play_click_sound();
                return ClickOutcome::Spun(object);
            }
            return ClickOutcome::SpinRejected(object);
        }

        ClickOutcome::Unrouted
    }

    /// Hand focus back to the page: arms the settle timer after an external
    /// link was opened.
    pub fn on_focus(&mut self) {
        if self.awaiting_focus {
            self.awaiting_focus = false;
            self.defer(self.config.links.focus_settle, DeferredAction::Enable);
        }
    }

    fn open_external_link(&mut self, url: String) {
        self.host.play_click_sound();
        self.set_enabled(false);
        self.defer(self.config.links.open_delay, DeferredAction::OpenLink(url));
    }

    fn spawn_sparkles(&mut self, object: ObjectId) {
        let Some(node) = self.scene.get(object) else {
            return;
        };
        let preset = SparklePreset::for_name(&node.name);
        let scale = node.transform.scale.x;
        let center = self.scene.world_position(object);
        self.sparkles
            .push(SparkleBurst::spawn(center, scale, preset, &mut self.rng));
    }

    // ---------------- Outline / gate ----------------

    /// Pin the outline to `objects` until [`thaw_outline`](Self::thaw_outline).
    pub fn freeze_outline(&mut self, objects: &[ObjectId]) {
        self.outline.freeze(&mut self.scene, objects);
        self.host.set_highlight(self.outline.current());
    }

    pub fn thaw_outline(&mut self) {
        self.outline.thaw();
    }

    /// Global gate. Closing it clears every transient hover visual at once.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        log::info!("[gate] raycast {}", if enabled { "enabled" } else { "disabled" });
        if !enabled {
            self.clear_hover();
        }
    }

    /// Reset highlight, scale pulse, hinges and the instrument to idle.
    pub fn clear_hover(&mut self) {
        self.hits.clear();
        self.current_group = None;
        self.outline.clear(&mut self.scene);
        self.host.set_highlight(&[]);
        self.hover_scale.reset(&mut self.scene, &mut self.tweens);
        for hinge in &mut self.hinges {
            hinge.reset(&mut self.scene, &mut self.tweens);
        }
        if let Some(ambient) = self.ambient.as_mut() {
            ambient.hover_end(&mut self.scene, &mut self.host);
        }
    }

    // ---------------- Accessors ----------------

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_outline_frozen(&self) -> bool {
        self.outline.is_frozen()
    }

    pub fn hits(&self) -> &[RayHit] {
        &self.hits
    }

    pub fn highlighted(&self) -> &[ObjectId] {
        self.outline.current()
    }

    pub fn hover_group(&self) -> Option<&HoverGroup> {
        self.current_group.as_ref()
    }

    /// Resolve the hover group of any object (cached per group id).
    pub fn resolve_hover_group(&mut self, object: ObjectId) -> Option<HoverGroup> {
        self.groups.resolve(&self.scene, &self.candidates, object)
    }

    /// Forget cached groups after retagging nodes through [`scene_mut`](Self::scene_mut).
    pub fn invalidate_hover_groups(&mut self) {
        self.groups.invalidate();
        self.roles.clear();
    }

    pub fn candidates(&self) -> &[ObjectId] {
        &self.candidates
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneGraph {
        &mut self.scene
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn tweens(&self) -> &Tweens {
        &self.tweens
    }

    pub fn cooldowns(&self) -> &SpinCooldowns {
        self.spinner.cooldowns()
    }

    pub fn hinges(&self) -> &[Hinge] {
        &self.hinges
    }

    pub fn ambient(&self) -> Option<&AmbientReaction> {
        self.ambient.as_ref()
    }

    pub fn note_particles(&self) -> &[NoteParticle] {
        self.ambient.as_ref().map(|a| a.notes()).unwrap_or(&[])
    }

    pub fn sparkle_bursts(&self) -> &[SparkleBurst] {
        &self.sparkles
    }

    pub fn pending_actions(&self) -> impl Iterator<Item = &DeferredAction> {
        self.deferred.iter().map(|d| &d.action)
    }

    /// Seconds of controller time elapsed through [`tick`](Self::tick).
    pub fn clock(&self) -> f64 {
        self.clock
    }
}
