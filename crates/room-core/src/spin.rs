use fnv::{FnvHashMap, FnvHashSet};

use crate::config::SpinParams;
use crate::scene::{ObjectId, SceneGraph};
use crate::tween::{Easing, Property, Tween, Tweens};

/// Objects locked out of re-triggering until their expiry time.
///
/// Expired entries are pruned on every trigger attempt, so no timers are
/// needed.
#[derive(Debug, Default)]
pub struct SpinCooldowns {
    until: FnvHashMap<ObjectId, f64>,
}

impl SpinCooldowns {
    /// Claim `object` at `now` for `cooldown` seconds. Returns `false` if it
    /// is still locked from an earlier claim.
    pub fn try_trigger(&mut self, object: ObjectId, now: f64, cooldown: f32) -> bool {
        self.until.retain(|_, expiry| *expiry > now);
        if self.until.contains_key(&object) {
            return false;
        }
        self.until.insert(object, now + cooldown as f64);
        true
    }

    pub fn is_locked(&self, object: ObjectId, now: f64) -> bool {
        self.until.get(&object).is_some_and(|&expiry| expiry > now)
    }

    pub fn len(&self) -> usize {
        self.until.len()
    }

    pub fn is_empty(&self) -> bool {
        self.until.is_empty()
    }
}

/// Spin set plus its cooldowns.
#[derive(Debug, Default)]
pub struct Spinner {
    targets: FnvHashSet<ObjectId>,
    cooldowns: SpinCooldowns,
    params: SpinParams,
}

impl Spinner {
    pub fn new(params: SpinParams) -> Self {
        Self {
            targets: FnvHashSet::default(),
            cooldowns: SpinCooldowns::default(),
            params,
        }
    }

    pub fn set_targets(&mut self, targets: impl IntoIterator<Item = ObjectId>) {
        self.targets = targets.into_iter().collect();
    }

    pub fn is_target(&self, id: ObjectId) -> bool {
        self.targets.contains(&id)
    }

    pub fn cooldowns(&self) -> &SpinCooldowns {
        &self.cooldowns
    }

    /// Start the squash → spin + pop sequence on `object`.
    ///
    /// Returns `false` without animating while the object is cooling down.
    pub fn trigger(&mut self, scene: &SceneGraph, tweens: &mut Tweens, object: ObjectId, now: f64) -> bool {
        let p = self.params;
        if !self.cooldowns.try_trigger(object, now, p.cooldown) {
            log::debug!("[click] spin on `{}` rejected by cooldown", scene.name(object));
            return false;
        }
        let current_y = scene.get(object).map(|n| n.transform.rotation.y).unwrap_or(0.0);

        let spin = Tween::to(object, Property::RotationY, current_y + p.amount, p.duration)
            .ease(Easing::CubicOut);
        let pop = Tween::to(object, Property::UniformScale, p.pop_scale, p.pop_duration).yoyo(1);
        let squash = Tween::to(object, Property::UniformScale, 1.0, p.squash_duration)
            .then(spin)
            .then(pop);

        // restart from wherever an earlier spin got to
        tweens.cancel(object, Property::RotationY);
        tweens.start(squash);
        true
    }
}
