//! Camera description consumed for ray construction.
//!
//! The host's camera controls (orbit, fly-to tweens) live outside the core;
//! every frame the host copies its current pose into this struct.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::ray::Ray;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    /// The room's default overview pose.
    fn default() -> Self {
        Self {
            eye: Vec3::new(15.53, 11.14, 20.73),
            target: Vec3::new(-0.35, 3.0, 0.64),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: 75f32.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates (x right, y up, both in `[-1, 1]` on screen).
    ///
    /// Points outside the unit square are valid; they simply produce rays
    /// that leave the frustum.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        let dir = (far - self.eye).normalize_or_zero();
        Ray::new(self.eye, dir)
    }
}
