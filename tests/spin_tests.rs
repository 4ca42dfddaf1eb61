// Host-side tests for spin-on-click, its cooldown and sparkle bursts.

mod common;

use common::*;
use room_core::*;
use std::f32::consts::TAU;

const CHAIR: &str = "chair-animateSpin-raycast";

#[test]
fn second_click_inside_the_cooldown_is_rejected() {
    let mut ctrl = room();
    let chair = id(&ctrl, CHAIR);
    aim(&mut ctrl, CHAIR);

    assert_eq!(ctrl.on_click(), ClickOutcome::Spun(chair));
    assert_eq!(ctrl.on_click(), ClickOutcome::SpinRejected(chair));
    ctrl.tick(secs(2.1));
    assert_eq!(ctrl.on_click(), ClickOutcome::Spun(chair));
}

#[test]
fn rejected_spin_is_silent() {
    let mut ctrl = room();
    aim(&mut ctrl, CHAIR);
    ctrl.on_click();
    ctrl.host_mut().clear();

    ctrl.on_click();
    assert!(ctrl.host().calls.is_empty());
    assert_eq!(ctrl.sparkle_bursts().len(), 1);
}

#[test]
fn spin_squashes_then_turns_a_full_circle() {
    let mut ctrl = room();
    let chair = id(&ctrl, CHAIR);
    aim(&mut ctrl, CHAIR);
    ctrl.on_click();
    assert_eq!(ctrl.host().count(&Call::Click), 1);

    ctrl.tick(secs(0.25));
    let t = ctrl.scene().get(chair).unwrap().transform;
    assert!((t.scale.x - 1.0).abs() < 1e-5);
    assert!(ctrl.tweens().is_animating(chair, Property::RotationY));
    assert!(ctrl.tweens().is_animating(chair, Property::UniformScale));

    run_for(&mut ctrl, 2.5);
    let t = ctrl.scene().get(chair).unwrap().transform;
    assert!((t.rotation.y - TAU).abs() < 1e-4);
    // pop came back down
    assert!((t.scale.x - 1.0).abs() < 1e-4);
    assert!(ctrl.tweens().is_empty());
}

#[test]
fn cooldowns_are_per_object() {
    let mut cooldowns = SpinCooldowns::default();
    let a = ObjectId(1);
    let b = ObjectId(2);

    assert!(cooldowns.try_trigger(a, 0.0, 2.0));
    assert!(cooldowns.try_trigger(b, 0.5, 2.0));
    assert!(!cooldowns.try_trigger(a, 1.0, 2.0));
    assert!(cooldowns.is_locked(b, 2.0));
    assert!(cooldowns.try_trigger(a, 2.1, 2.0));
    assert!(!cooldowns.is_locked(b, 2.6));
}

#[test]
fn sparkles_burst_and_expire() {
    let mut ctrl = room();
    aim(&mut ctrl, CHAIR);
    ctrl.on_click();

    let burst = &ctrl.sparkle_bursts()[0];
    assert_eq!(burst.sparkles.len(), 12);
    assert!(burst.sparkles.iter().all(|s| s.base_size >= 0.4 && s.base_size <= 0.8));

    run_for(&mut ctrl, 1.0);
    assert!(ctrl.sparkle_bursts()[0].material_opacity() > 0.0);

    run_for(&mut ctrl, 2.5);
    assert!(ctrl.sparkle_bursts().is_empty());
}

#[test]
fn sparkle_presets_follow_the_name() {
    assert_eq!(SparklePreset::for_name("Globe-animateSpin").count, 20);
    let chair = SparklePreset::for_name("CHAIR-animateSpin");
    assert_eq!(chair.count, 12);
    assert_eq!(chair.spread, 2.0);
    assert_eq!(SparklePreset::for_name("lamp"), SparklePreset::default());
}
