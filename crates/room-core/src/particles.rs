//! Decorative particle state. The core only simulates; the renderer draws
//! whatever is alive each frame.

use glam::Vec3;
use rand::prelude::*;

use crate::constants::*;

/// Music-note sprite drifting up from the hovered instrument.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteParticle {
    pub glyph: char,
    pub position: Vec3,
    pub velocity: Vec3,
    pub scale: f32,
    pub rotation: f32,
    pub opacity: f32,
    pub life: f32,
    pub max_life: f32,
}

/// Spawns notes at a fixed interval while active. Notes already spawned keep
/// living after [`stop`](NoteEmitter::stop) until their own lifetime ends.
#[derive(Debug)]
pub struct NoteEmitter {
    origin: Vec3,
    spawn_interval: f32,
    spawn_timer: f32,
    active: bool,
    particles: Vec<NoteParticle>,
    rng: StdRng,
}

impl NoteEmitter {
    pub fn new(origin: Vec3, spawn_interval: f32, seed: u64) -> Self {
        Self {
            origin,
            spawn_interval,
            spawn_timer: 0.0,
            active: false,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particles(&self) -> &[NoteParticle] {
        &self.particles
    }

    pub fn update(&mut self, dt: f32) {
        if self.active {
            self.spawn_timer += dt;
            if self.spawn_timer >= self.spawn_interval {
                self.spawn();
                self.spawn_timer = 0.0;
            }
        }

        for p in &mut self.particles {
            p.position += p.velocity * dt;
            p.life += dt;
            p.opacity = (1.0 - p.life / p.max_life).max(0.0);
            p.rotation += dt * NOTE_SPIN_RATE;
        }
        self.particles.retain(|p| p.life < p.max_life);
    }

    fn spawn(&mut self) {
        let r = &mut self.rng;
        let glyph = *NOTE_GLYPHS.choose(r).unwrap_or(&NOTE_GLYPHS[0]);
        let offset = Vec3::new(
            (r.gen::<f32>() - 0.5) * 0.3,
            (r.gen::<f32>() - 0.5) * 0.2,
            (r.gen::<f32>() - 0.5) * 0.3,
        );
        let velocity = Vec3::new(
            (r.gen::<f32>() - 0.5) * 0.3,
            0.5 + r.gen::<f32>() * 0.3,
            (r.gen::<f32>() - 0.5) * 0.3,
        );
        let scale = 0.2 + r.gen::<f32>() * 0.15;
        let max_life = NOTE_LIFETIME_MIN + r.gen::<f32>() * NOTE_LIFETIME_SPAN;
        self.particles.push(NoteParticle {
            glyph,
            position: self.origin + offset,
            velocity,
            scale,
            rotation: 0.0,
            opacity: 1.0,
            life: 0.0,
            max_life,
        });
    }
}

/// Tuning for a sparkle burst, picked by object name.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparklePreset {
    pub count: usize,
    pub size_min: f32,
    pub size_max: f32,
    pub offset_y: f32,
    pub spread: f32,
}

impl Default for SparklePreset {
    fn default() -> Self {
        Self {
            count: 20,
            size_min: 0.2,
            size_max: 0.5,
            offset_y: 0.0,
            spread: 1.0,
        }
    }
}

impl SparklePreset {
    pub fn for_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("chair") {
            return Self {
                count: 12,
                size_min: 0.4,
                size_max: 0.8,
                offset_y: 0.4,
                spread: 2.0,
            };
        }
        // globes use the default look
        Self::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub base_size: f32,
    pub size: f32,
    pub opacity: f32,
    pub lifetime: f32,
}

/// One radial burst around a spun object.
#[derive(Clone, Debug)]
pub struct SparkleBurst {
    pub sparkles: Vec<Sparkle>,
    elapsed: f32,
    duration: f32,
}

impl SparkleBurst {
    /// `center` is the object's world position, `radius_scale` its scale.
    pub fn spawn(center: Vec3, radius_scale: f32, preset: SparklePreset, rng: &mut impl Rng) -> Self {
        let center = center + Vec3::Y * preset.offset_y;
        let radius = radius_scale * 0.5 * preset.spread;
        let sparkles = (0..preset.count)
            .map(|_| {
                let angle = rng.gen::<f32>() * std::f32::consts::TAU;
                let (s, c) = angle.sin_cos();
                let position = Vec3::new(
                    center.x + c * radius * (rng.gen::<f32>() * 0.5),
                    // slight upward bias
                    center.y + (rng.gen::<f32>() - 0.3) * radius * 0.5,
                    center.z + s * radius * (rng.gen::<f32>() * 0.5),
                );
                let velocity = Vec3::new(
                    c * (0.2 + rng.gen::<f32>() * 0.3),
                    rng.gen::<f32>() * 0.4,
                    s * (0.2 + rng.gen::<f32>() * 0.3),
                );
                let base_size = preset.size_min + rng.gen::<f32>() * (preset.size_max - preset.size_min);
                Sparkle {
                    position,
                    velocity,
                    base_size,
                    size: 0.0,
                    opacity: 0.0,
                    lifetime: 1.5 + rng.gen::<f32>() * 1.5,
                }
            })
            .collect();
        Self {
            sparkles,
            elapsed: 0.0,
            duration: SPARKLE_BURST_DURATION,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed > self.duration
    }

    /// Average opacity, doubled and clamped; drives the material opacity.
    pub fn material_opacity(&self) -> f32 {
        if self.sparkles.is_empty() {
            return 0.0;
        }
        let total: f32 = self.sparkles.iter().map(|s| s.opacity).sum();
        (total / self.sparkles.len() as f32 * 2.0).min(1.0)
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.is_finished() {
            return;
        }
        for s in &mut self.sparkles {
            s.position += s.velocity * dt;
            let life = (self.elapsed / s.lifetime).min(1.0);
            if life < SPARKLE_FADE_IN {
                s.size = s.base_size * (life / SPARKLE_FADE_IN);
                s.opacity = life / SPARKLE_FADE_IN;
            } else if life > SPARKLE_FADE_OUT_START {
                let fade = (life - SPARKLE_FADE_OUT_START) / (1.0 - SPARKLE_FADE_OUT_START);
                s.size = s.base_size * (1.0 - fade * 0.5);
                s.opacity = 1.0 - fade;
            } else {
                s.size = s.base_size;
                s.opacity = 1.0;
            }
            s.velocity.y -= SPARKLE_GRAVITY * dt;
        }
    }
}
