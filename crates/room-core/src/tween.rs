//! Cooperative property tweens advanced by the frame tick.
//!
//! Starting a tween never blocks; the caller returns immediately and the
//! timeline progresses each time [`Tweens::tick`] runs.

use crate::scene::{ObjectId, SceneGraph};

/// Easing curves used by the room's animations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out (`power1.out`).
    #[default]
    QuadOut,
    /// Cubic ease-out (`power2.out`).
    CubicOut,
}

impl Easing {
    /// Evaluate at `t`, clamped to `[0, 1]`.
    #[inline]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Easing::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
        }
    }
}

/// Animatable transform channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Writes the same value to x, y and z scale; reads x.
    UniformScale,
    RotationX,
    RotationY,
}

impl Property {
    pub fn read(self, scene: &SceneGraph, id: ObjectId) -> Option<f32> {
        let t = &scene.get(id)?.transform;
        Some(match self {
            Property::UniformScale => t.scale.x,
            Property::RotationX => t.rotation.x,
            Property::RotationY => t.rotation.y,
        })
    }

    pub fn write(self, scene: &mut SceneGraph, id: ObjectId, value: f32) {
        let Some(node) = scene.get_mut(id) else {
            return;
        };
        let t = &mut node.transform;
        match self {
            Property::UniformScale => t.scale = glam::Vec3::splat(value),
            Property::RotationX => t.rotation.x = value,
            Property::RotationY => t.rotation.y = value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tween {
    pub object: ObjectId,
    pub property: Property,
    pub to: f32,
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
    /// Number of extra passes that play back towards the start value.
    pub yoyo_repeats: u32,
    /// Started when this tween completes.
    pub then: Vec<Tween>,
    from: Option<f32>,
    elapsed: f32,
    reversed: bool,
}

impl Tween {
    pub fn to(object: ObjectId, property: Property, to: f32, duration: f32) -> Self {
        Self {
            object,
            property,
            to,
            duration,
            delay: 0.0,
            easing: Easing::default(),
            yoyo_repeats: 0,
            then: Vec::new(),
            from: None,
            elapsed: 0.0,
            reversed: false,
        }
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    pub fn yoyo(mut self, repeats: u32) -> Self {
        self.yoyo_repeats = repeats;
        self
    }

    pub fn then(mut self, next: Tween) -> Self {
        self.then.push(next);
        self
    }

    /// Advance by `dt`. Returns `true` once the tween has finished.
    fn advance(&mut self, scene: &mut SceneGraph, mut dt: f32) -> bool {
        if self.delay > 0.0 {
            let used = dt.min(self.delay);
            self.delay -= used;
            dt -= used;
            if self.delay > 0.0 {
                return false;
            }
        }
        let from = match self.from {
            Some(v) => v,
            None => {
                let Some(v) = self.property.read(scene, self.object) else {
                    // object vanished: nothing to animate
                    return true;
                };
                self.from = Some(v);
                v
            }
        };

        self.elapsed += dt;
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        };
        let k = self.easing.evaluate(t);
        let (a, b) = if self.reversed { (self.to, from) } else { (from, self.to) };
        self.property.write(scene, self.object, a + (b - a) * k);

        if t < 1.0 {
            return false;
        }
        if self.yoyo_repeats > 0 {
            self.yoyo_repeats -= 1;
            self.reversed = !self.reversed;
            self.elapsed = 0.0;
            return false;
        }
        true
    }
}

/// Active timelines, keyed by `(object, property)`.
#[derive(Debug, Default)]
pub struct Tweens {
    active: Vec<Tween>,
}

impl Tweens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `tween`, replacing any tween already driving the same channel.
    pub fn start(&mut self, tween: Tween) {
        self.cancel(tween.object, tween.property);
        self.active.push(tween);
    }

    pub fn cancel(&mut self, object: ObjectId, property: Property) {
        self.active
            .retain(|t| !(t.object == object && t.property == property));
    }

    /// Cancel the channel and write `value` immediately.
    pub fn snap(&mut self, scene: &mut SceneGraph, object: ObjectId, property: Property, value: f32) {
        self.cancel(object, property);
        property.write(scene, object, value);
    }

    pub fn is_animating(&self, object: ObjectId, property: Property) -> bool {
        self.active
            .iter()
            .any(|t| t.object == object && t.property == property)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn tick(&mut self, scene: &mut SceneGraph, dt: f32) {
        let mut follow_ups = Vec::new();
        self.active.retain_mut(|t| {
            let done = t.advance(scene, dt);
            if done {
                follow_ups.append(&mut t.then);
            }
            !done
        });
        for next in follow_ups {
            self.start(next);
        }
    }
}
