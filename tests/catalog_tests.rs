// Host-side tests for load-time scene classification.

mod common;

use common::*;
use room_core::*;

fn names(scene: &SceneGraph, ids: &[ObjectId]) -> Vec<String> {
    ids.iter().map(|&i| scene.name(i).to_string()).collect()
}

#[test]
fn raycast_names_and_grouped_pieces_become_candidates() {
    let mut scene = room_scene();
    let cat = SceneCatalog::scan(&mut scene);
    let found = names(&scene, &cat.candidates);

    for expected in [
        "whiteboard-raycast-one",
        "perry-mug-raycast-seven",
        "perry-hat-seven",
        "mailbox-four-raycast",
        "mailbox-cover-four",
        "erhu-raycast",
        POSTER,
    ] {
        assert!(found.iter().any(|n| n == expected), "missing {expected}");
    }
    assert!(!found.iter().any(|n| n == "wall"));
}

#[test]
fn pieces_are_tagged_with_their_group() {
    let mut scene = room_scene();
    SceneCatalog::scan(&mut scene);
    let tag = |name: &str| {
        let id = scene.find_by_name(name).unwrap();
        scene.get(id).unwrap().hover_group.clone()
    };
    assert_eq!(tag("perry-mug-raycast-seven").as_deref(), Some(MUG_HOVER_GROUP));
    assert_eq!(tag("perry-hat-seven").as_deref(), Some(MUG_HOVER_GROUP));
    assert_eq!(tag("mailbox-cover-four").as_deref(), Some(MAILBOX_HOVER_GROUP));
    assert_eq!(tag("about-raycast"), None);
}

#[test]
fn markers_fill_the_scale_and_spin_sets() {
    let mut scene = room_scene();
    let cat = SceneCatalog::scan(&mut scene);
    assert_eq!(names(&scene, &cat.scale_targets), vec!["plant-animateScale-raycast"]);
    assert_eq!(names(&scene, &cat.spin_targets), vec!["chair-animateSpin-raycast"]);
    assert_eq!(cat.mailbox_cover, scene.find_by_name("mailbox-cover-four"));
}

#[test]
fn instrument_prefers_a_mesh_over_the_modal_trigger() {
    let mut scene = room_scene();
    let cat = SceneCatalog::scan(&mut scene);
    assert_eq!(cat.ambient_target, scene.find_by_name("erhu-raycast"));

    let body = scene.add(cube("erhu-body", 6.0, 0.0), None).unwrap();
    let cat = SceneCatalog::scan(&mut scene);
    assert_eq!(cat.ambient_target, Some(body));
}

#[test]
fn empty_scene_catalogs_nothing() {
    let mut scene = SceneGraph::new();
    let cat = SceneCatalog::scan(&mut scene);
    assert_eq!(cat, SceneCatalog::default());
}

#[test]
fn unknown_parent_is_an_error() {
    let mut scene = SceneGraph::new();
    let err = scene.add(SceneNode::new("orphan"), Some(ObjectId(9))).unwrap_err();
    assert_eq!(err, SceneError::UnknownParent(ObjectId(9), "orphan".to_string()));
    assert!(scene.is_empty());
}

#[test]
fn installing_twice_keeps_one_mailbox_hinge() {
    let mut ctrl = room();
    let cat = SceneCatalog::scan(ctrl.scene_mut());
    ctrl.install_catalog(&cat);
    assert_eq!(ctrl.hinges().len(), 1);
    assert_eq!(ctrl.candidates(), cat.candidates.as_slice());
}
