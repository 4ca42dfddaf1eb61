// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use room_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn durations_are_positive() {
    for d in [
        HOVER_SCALE_DURATION,
        HINGE_DURATION,
        SPIN_DURATION,
        SPIN_SQUASH_DURATION,
        SPIN_POP_DURATION,
        AMBIENT_FADE,
        NOTE_SPAWN_INTERVAL,
        SPARKLE_BURST_DURATION,
    ] {
        assert!(d > 0.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn link_round_trip_is_short_then_settles() {
    assert!(LINK_OPEN_DELAY < LINK_FOCUS_SETTLE);
    assert!(LINK_FOCUS_SETTLE < SPIN_COOLDOWN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spin_cooldown_covers_the_animation() {
    assert!(SPIN_COOLDOWN >= SPIN_DURATION);
    assert!(SPIN_POP_SCALE > 1.0);
    assert!((SPIN_AMOUNT - std::f32::consts::TAU).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sparkle_fades_leave_a_plateau() {
    assert!(SPARKLE_FADE_IN > 0.0);
    assert!(SPARKLE_FADE_IN < SPARKLE_FADE_OUT_START);
    assert!(SPARKLE_FADE_OUT_START < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mix_levels_are_linear_gains() {
    for v in [CLICK_VOLUME, BGM_VOLUME, BGM_DUCKED_VOLUME, AMBIENT_VOLUME] {
        assert!((0.0..=1.0).contains(&v));
    }
    assert!(BGM_DUCKED_VOLUME < BGM_VOLUME);
}

#[test]
fn selectors_are_classes_and_ids_are_bare() {
    for s in [
        MODAL_OVERLAY_SELECTOR,
        MODAL_CLOSE_SELECTOR,
        MODAL_ABOUT_SELECTOR,
        MODAL_PROJECTS_SELECTOR,
        MODAL_ERHU_SELECTOR,
        MODAL_CONTACT_SELECTOR,
        IMAGE_OVERLAY_SELECTOR,
        IMAGE_OVERLAY_IMG_SELECTOR,
        IMAGE_OVERLAY_TEXT_SELECTOR,
        IMAGE_OVERLAY_CLOSE_SELECTOR,
    ] {
        assert!(s.starts_with('.'), "{s}");
    }
    assert!(!CANVAS_ID.starts_with('#'));
}

#[test]
fn default_config_tables_are_populated() {
    let cfg = InteractionConfig::default();
    assert_eq!(cfg.image_overlays.len(), 12);
    assert_eq!(cfg.social_links.len(), 2);
    assert_eq!(cfg.toggle_group.as_deref(), Some(MUG_HOVER_GROUP));
    assert_eq!(cfg.mailbox_group, MAILBOX_HOVER_GROUP);
    assert!(InteractionConfig::empty().modal_patterns.is_empty());
}
