use crate::config::HingeParams;
use crate::scene::{ObjectId, SceneGraph};
use crate::tween::{Easing, Property, Tween, Tweens};

/// A hinged child (mailbox cover) that swings open while its hover group is
/// hovered and closes when the pointer leaves.
#[derive(Debug, Clone)]
pub struct Hinge {
    group: String,
    child: Option<ObjectId>,
    params: HingeParams,
    hovered: bool,
    open: bool,
}

impl Hinge {
    pub fn new(group: impl Into<String>, child: Option<ObjectId>, params: HingeParams) -> Self {
        Self {
            group: group.into(),
            child,
            params,
            hovered: false,
            open: false,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Feed this frame's hover state. Unchanged state is a no-op.
    pub fn set_hover_state(&mut self, tweens: &mut Tweens, hovered: bool) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        self.swing(tweens, hovered);
    }

    fn swing(&mut self, tweens: &mut Tweens, open: bool) {
        let Some(child) = self.child else {
            return;
        };
        if open == self.open {
            return;
        }
        self.open = open;
        let angle = if open { self.params.open_angle } else { 0.0 };
        log::debug!("[hover] hinge `{}` -> {}", self.group, if open { "open" } else { "closed" });
        tweens.start(
            Tween::to(child, Property::RotationX, angle, self.params.duration).ease(Easing::CubicOut),
        );
    }

    /// Close immediately without animating.
    pub fn reset(&mut self, scene: &mut SceneGraph, tweens: &mut Tweens) {
        self.hovered = false;
        self.open = false;
        if let Some(child) = self.child {
            tweens.snap(scene, child, Property::RotationX, 0.0);
        }
    }
}
