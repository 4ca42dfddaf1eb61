//! Outline selection: which objects the outline pass should emphasize.

use crate::hover_group::HoverGroup;
use crate::scene::{ObjectId, SceneGraph};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum OutlineMode {
    /// Highlight follows the pointer.
    #[default]
    Unfrozen,
    /// Highlight is pinned (guided tour step) regardless of the pointer.
    Frozen(Vec<ObjectId>),
}

#[derive(Debug, Default)]
pub struct OutlineState {
    mode: OutlineMode,
    current: Vec<ObjectId>,
}

impl OutlineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &OutlineMode {
        &self.mode
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self.mode, OutlineMode::Frozen(_))
    }

    /// Pin the highlight to a copy of `set`, replacing any earlier pin.
    pub fn freeze(&mut self, scene: &mut SceneGraph, set: &[ObjectId]) {
        self.mode = OutlineMode::Frozen(set.to_vec());
        self.apply(scene, set.to_vec());
    }

    /// Release the pin. The current highlight stays until the next update
    /// recomputes it from the pointer.
    pub fn thaw(&mut self) {
        self.mode = OutlineMode::Unfrozen;
    }

    /// Derive this frame's highlight from the nearest hit and its group.
    pub fn update(
        &mut self,
        scene: &mut SceneGraph,
        hit: Option<ObjectId>,
        group: Option<&HoverGroup>,
    ) -> &[ObjectId] {
        let next = match (&self.mode, hit, group) {
            (OutlineMode::Frozen(set), _, _) => set.clone(),
            (OutlineMode::Unfrozen, _, Some(g)) => g.members.to_vec(),
            (OutlineMode::Unfrozen, Some(h), None) => vec![h],
            (OutlineMode::Unfrozen, None, None) => Vec::new(),
        };
        self.apply(scene, next);
        &self.current
    }

    /// Drop the highlight without touching the mode.
    pub fn clear(&mut self, scene: &mut SceneGraph) {
        self.apply(scene, Vec::new());
    }

    pub fn current(&self) -> &[ObjectId] {
        &self.current
    }

    fn apply(&mut self, scene: &mut SceneGraph, next: Vec<ObjectId>) {
        if next == self.current {
            return;
        }
        for &id in &self.current {
            scene.set_highlighted(id, false);
        }
        for &id in &next {
            scene.set_highlighted(id, true);
        }
        self.current = next;
    }
}
