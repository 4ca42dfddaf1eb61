// Host-side tests for hover reactions: scale pulse, hinged cover and the
// instrument's ambient feedback.

mod common;

use common::*;
use glam::Vec3;
use room_core::*;
use std::f32::consts::FRAC_PI_2;

const PLANT: &str = "plant-animateScale-raycast";

fn scale_of(ctrl: &RaycasterController<Recorder>, name: &str) -> f32 {
    ctrl.scene().get(id(ctrl, name)).unwrap().transform.scale.x
}

fn cover_angle(ctrl: &RaycasterController<Recorder>) -> f32 {
    ctrl.scene()
        .get(id(ctrl, "mailbox-cover-four"))
        .unwrap()
        .transform
        .rotation
        .x
}

// ---------------- Scale pulse ----------------

#[test]
fn scalable_object_pulses_up_and_back() {
    let mut ctrl = room();
    aim(&mut ctrl, PLANT);
    run_for(&mut ctrl, 0.5);
    assert!((scale_of(&ctrl, PLANT) - 1.1).abs() < 1e-4);

    aim(&mut ctrl, "about-raycast");
    run_for(&mut ctrl, 0.5);
    assert!((scale_of(&ctrl, PLANT) - 1.0).abs() < 1e-4);
    assert!((scale_of(&ctrl, "about-raycast") - 1.0).abs() < 1e-6);
}

#[test]
fn hovering_the_same_object_does_not_restart_the_pulse() {
    let mut ctrl = room();
    let plant = id(&ctrl, PLANT);
    aim(&mut ctrl, PLANT);
    run_for(&mut ctrl, 0.2);
    let mid = scale_of(&ctrl, PLANT);
    aim(&mut ctrl, PLANT);
    run_for(&mut ctrl, 0.15);
    assert!(scale_of(&ctrl, PLANT) > mid);
    assert!(!ctrl.tweens().is_animating(plant, Property::UniformScale));
}

#[test]
fn non_scalable_hit_clears_the_tracker() {
    let mut hs = HoverScale::new(HoverScaleParams::default());
    let mut tweens = Tweens::new();
    let plant = ObjectId(0);
    let book = ObjectId(1);
    hs.set_targets([plant]);

    hs.update(&mut tweens, Some(plant));
    assert_eq!(hs.last_hovered(), Some(plant));
    hs.update(&mut tweens, Some(book));
    assert_eq!(hs.last_hovered(), None);
    assert!(!tweens.is_animating(book, Property::UniformScale));
    assert!(tweens.is_animating(plant, Property::UniformScale));
}

#[test]
fn disabling_snaps_the_pulse_back() {
    let mut ctrl = room();
    let plant = id(&ctrl, PLANT);
    aim(&mut ctrl, PLANT);
    run_for(&mut ctrl, 0.1);
    assert!(scale_of(&ctrl, PLANT) > 1.0);

    ctrl.set_enabled(false);
    assert_eq!(scale_of(&ctrl, PLANT), 1.0);
    assert!(!ctrl.tweens().is_animating(plant, Property::UniformScale));
}

#[test]
fn disabling_mid_shrink_snaps_the_pulse_back() {
    let mut ctrl = room();
    let plant = id(&ctrl, PLANT);
    aim(&mut ctrl, PLANT);
    run_for(&mut ctrl, 0.3);
    aim_away(&mut ctrl);
    assert!(ctrl.tweens().is_animating(plant, Property::UniformScale));

    ctrl.set_enabled(false);
    assert_eq!(scale_of(&ctrl, PLANT), 1.0);
    assert!(!ctrl.tweens().is_animating(plant, Property::UniformScale));
}

// ---------------- Hinged cover ----------------

#[test]
fn hovering_the_mailbox_opens_the_cover() {
    let mut ctrl = room();
    aim(&mut ctrl, "mailbox-four-raycast");
    run_for(&mut ctrl, 1.0);
    assert!((cover_angle(&ctrl) - FRAC_PI_2).abs() < 1e-4);
    assert!(ctrl.hinges()[0].is_open());

    // still the same group
    aim(&mut ctrl, "mailbox-cover-four");
    assert!(ctrl.hinges()[0].is_open());

    aim_away(&mut ctrl);
    run_for(&mut ctrl, 1.0);
    assert!(cover_angle(&ctrl).abs() < 1e-4);
    assert!(!ctrl.hinges()[0].is_open());
}

#[test]
fn repeated_hover_state_does_not_restart_the_swing() {
    let mut scene = SceneGraph::new();
    let cover = scene.add(SceneNode::new("cover"), None).unwrap();
    let mut tweens = Tweens::new();
    let mut hinge = Hinge::new("box", Some(cover), HingeParams::default());

    hinge.set_hover_state(&mut tweens, true);
    tweens.tick(&mut scene, 0.4);
    hinge.set_hover_state(&mut tweens, true);
    tweens.tick(&mut scene, 0.5);

    let angle = scene.get(cover).unwrap().transform.rotation.x;
    assert!((angle - FRAC_PI_2).abs() < 1e-4);
    assert!(tweens.is_empty());
}

#[test]
fn hinge_without_a_child_is_skipped() {
    let mut tweens = Tweens::new();
    let mut hinge = Hinge::new("box", None, HingeParams::default());
    hinge.set_hover_state(&mut tweens, true);
    assert!(hinge.is_hovered());
    assert!(!hinge.is_open());
    assert!(tweens.is_empty());
}

#[test]
fn disabling_snaps_the_cover_shut() {
    let mut ctrl = room();
    aim(&mut ctrl, "mailbox-four-raycast");
    run_for(&mut ctrl, 0.3);
    assert!(cover_angle(&ctrl) > 0.0);

    ctrl.set_enabled(false);
    assert_eq!(cover_angle(&ctrl), 0.0);
    assert!(!ctrl.hinges()[0].is_open());
}

// ---------------- Ambient instrument ----------------

#[test]
fn instrument_hover_starts_once_and_ends_once() {
    let mut ctrl = room();
    let erhu = id(&ctrl, "erhu-raycast");
    let fade_in = Call::FadeIn(AMBIENT_VOLUME, AMBIENT_FADE);
    let fade_out = Call::FadeOut(AMBIENT_FADE);

    aim(&mut ctrl, "erhu-raycast");
    aim(&mut ctrl, "erhu-raycast");
    assert_eq!(ctrl.host().count(&fade_in), 1);
    assert_eq!(
        ctrl.scene().get(erhu).unwrap().emissive,
        Some(Emissive::from_hex(AMBIENT_GLOW_HEX, AMBIENT_GLOW_INTENSITY))
    );

    aim_away(&mut ctrl);
    aim_away(&mut ctrl);
    assert_eq!(ctrl.host().count(&fade_out), 1);
    assert_eq!(
        ctrl.scene().get(erhu).unwrap().emissive,
        Some(Emissive::from_hex(0x000000, 0.0))
    );
}

#[test]
fn notes_drift_while_hovered_and_fade_out_after() {
    let mut ctrl = room();
    aim(&mut ctrl, "erhu-raycast");
    run_for(&mut ctrl, 0.5);
    let notes = ctrl.note_particles().to_vec();
    assert!(!notes.is_empty());
    assert!(notes.iter().all(|n| NOTE_GLYPHS.contains(&n.glyph)));
    assert!(notes.iter().all(|n| n.velocity.y >= 0.5 && n.velocity.y <= 0.8));

    aim_away(&mut ctrl);
    let left = ctrl.note_particles().len();
    run_for(&mut ctrl, 0.1);
    assert!(ctrl.note_particles().len() <= left);

    run_for(&mut ctrl, 3.5);
    assert!(ctrl.note_particles().is_empty());
}

#[test]
fn hovering_a_descendant_counts_as_the_instrument() {
    let mut ctrl = room();
    let erhu = id(&ctrl, "erhu-raycast");
    ctrl.scene_mut()
        .add(
            SceneNode::new("erhu-bow")
                .with_position(Vec3::new(0.0, -1.2, 0.0))
                .with_bounds(Aabb::cube(0.5)),
            Some(erhu),
        )
        .unwrap();

    aim(&mut ctrl, "erhu-bow");
    assert!(ctrl.ambient().unwrap().is_hovering());
}

#[test]
fn disabling_ends_the_instrument() {
    let mut ctrl = room();
    aim(&mut ctrl, "erhu-raycast");
    ctrl.set_enabled(false);
    assert!(!ctrl.ambient().unwrap().is_hovering());
    assert_eq!(ctrl.host().count(&Call::FadeOut(AMBIENT_FADE)), 1);
}

#[test]
fn instrument_without_emissive_still_plays_and_emits() {
    let mut ctrl = room();
    let erhu = id(&ctrl, "erhu-raycast");
    ctrl.scene_mut().set_emissive(erhu, None).unwrap();
    ctrl.set_ambient_target(Some(erhu));
    let fade_in = Call::FadeIn(AMBIENT_VOLUME, AMBIENT_FADE);
    let fade_out = Call::FadeOut(AMBIENT_FADE);

    aim(&mut ctrl, "erhu-raycast");
    run_for(&mut ctrl, 0.5);
    assert_eq!(ctrl.host().count(&fade_in), 1);
    assert!(!ctrl.note_particles().is_empty());
    assert_eq!(ctrl.scene().get(erhu).unwrap().emissive, None);

    aim_away(&mut ctrl);
    assert_eq!(ctrl.host().count(&fade_out), 1);
    assert_eq!(ctrl.scene().get(erhu).unwrap().emissive, None);
}

#[test]
fn note_emitter_spawns_on_interval_and_drains_after_stop() {
    let mut notes = NoteEmitter::new(Vec3::ZERO, 0.15, 3);
    notes.update(0.15);
    assert!(notes.particles().is_empty());

    notes.start();
    notes.update(0.1);
    assert!(notes.particles().is_empty());
    notes.update(0.1);
    assert_eq!(notes.particles().len(), 1);
    let p = &notes.particles()[0];
    // spawn offset plus one step of drift
    assert!(p.position.x.abs() <= 0.2);
    assert!(p.position.y > -0.1 && p.position.y < 0.2);
    assert!(p.scale >= 0.2 && p.scale <= 0.35);

    notes.stop();
    for _ in 0..40 {
        notes.update(0.1);
    }
    assert!(notes.particles().is_empty());
}
