use fnv::FnvHashSet;

use crate::config::HoverScaleParams;
use crate::scene::{ObjectId, SceneGraph};
use crate::tween::{Easing, Property, Tween, Tweens};

/// Pulses designated objects up while they are the nearest hit.
#[derive(Debug, Default)]
pub struct HoverScale {
    targets: FnvHashSet<ObjectId>,
    last: Option<ObjectId>,
    // left behind, still tweening back down
    settling: Option<ObjectId>,
    params: HoverScaleParams,
}

impl HoverScale {
    pub fn new(params: HoverScaleParams) -> Self {
        Self {
            targets: FnvHashSet::default(),
            last: None,
            settling: None,
            params,
        }
    }

    pub fn set_targets(&mut self, targets: impl IntoIterator<Item = ObjectId>) {
        self.targets = targets.into_iter().collect();
    }

    pub fn is_target(&self, id: ObjectId) -> bool {
        self.targets.contains(&id)
    }

    pub fn has_targets(&self) -> bool {
        !self.targets.is_empty()
    }

    pub fn last_hovered(&self) -> Option<ObjectId> {
        self.last
    }

    pub fn update(&mut self, tweens: &mut Tweens, hovered: Option<ObjectId>) {
        if hovered == self.last {
            return;
        }
        let p = self.params;
        if let Some(prev) = self.last.take() {
            tweens.start(
                Tween::to(prev, Property::UniformScale, p.down, p.duration).ease(Easing::CubicOut),
            );
            self.settling = Some(prev);
        }
        if let Some(h) = hovered.filter(|h| self.targets.contains(h)) {
            if self.settling == Some(h) {
                self.settling = None;
            }
            tweens.start(
                Tween::to(h, Property::UniformScale, p.up, p.duration).ease(Easing::CubicOut),
            );
            self.last = Some(h);
        }
    }

    /// Put the pulsed object, and one still shrinking back, to baseline
    /// right away.
    pub fn reset(&mut self, scene: &mut SceneGraph, tweens: &mut Tweens) {
        for id in [self.last.take(), self.settling.take()].into_iter().flatten() {
            tweens.snap(scene, id, Property::UniformScale, self.params.down);
        }
    }
}
