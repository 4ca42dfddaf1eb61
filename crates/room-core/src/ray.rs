//! Pointer ray resolution against the interactable scene.

use fnv::FnvHashSet;
use glam::{Mat4, Vec3};

use crate::scene::{Aabb, ObjectId, SceneGraph};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// One intersected object. `point` is the world-space surface point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub object: ObjectId,
    pub distance: f32,
    pub point: Vec3,
}

/// Slab test. Returns the entry distance (or exit distance when the origin is
/// inside the box) together with the hit point.
pub fn ray_aabb_intersection(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<(f32, Vec3)> {
    let mut t_min: f32 = 0.0;
    let mut t_max: f32 = f32::INFINITY;
    let o = origin.to_array();
    let d = dir.to_array();
    let lo = min.to_array();
    let hi = max.to_array();
    for i in 0..3 {
        if d[i].abs() < 1e-6 {
            if o[i] < lo[i] || o[i] > hi[i] {
                return None;
            }
        } else {
            let inv_d = 1.0 / d[i];
            let mut t1 = (lo[i] - o[i]) * inv_d;
            let mut t2 = (hi[i] - o[i]) * inv_d;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }
    }
    if t_max < 0.0 {
        return None;
    }
    let t_hit = if t_min >= 0.0 { t_min } else { t_max };
    Some((t_hit, origin + dir * t_hit))
}

fn matrix_is_finite(mat: &Mat4) -> bool {
    mat.to_cols_array().iter().all(|v| v.is_finite())
}

/// Ray against a local-space box placed by `world`. Distance is measured in
/// world units from the ray origin.
pub fn ray_hit_oriented_box(ray: &Ray, world: &Mat4, bounds: &Aabb) -> Option<(f32, Vec3)> {
    if world.determinant().abs() <= f32::EPSILON {
        return None;
    }
    let inv = world.inverse();
    if !matrix_is_finite(&inv) {
        return None;
    }
    let origin_local = inv.transform_point3(ray.origin);
    let dir_local = inv.transform_vector3(ray.dir);
    if dir_local.length_squared() <= f32::EPSILON {
        return None;
    }
    let (_, hit_local) =
        ray_aabb_intersection(origin_local, dir_local.normalize(), bounds.min, bounds.max)?;
    let hit_world = world.transform_point3(hit_local);
    Some(((hit_world - ray.origin).length(), hit_world))
}

/// Intersect `ray` with every bounded node in the candidate subtrees.
///
/// Each node is tested at most once even if it is reachable from several
/// candidates. Hits come back nearest first.
pub fn intersect_candidates(scene: &SceneGraph, candidates: &[ObjectId], ray: &Ray) -> Vec<RayHit> {
    let mut hits = Vec::new();
    if ray.dir.length_squared() <= f32::EPSILON {
        return hits;
    }
    let mut seen: FnvHashSet<ObjectId> = FnvHashSet::default();
    for &root in candidates {
        scene.walk(root, &mut |id| {
            if !seen.insert(id) {
                return;
            }
            let Some(bounds) = scene.get(id).and_then(|n| n.bounds) else {
                return;
            };
            let world = scene.world_matrix(id);
            if let Some((distance, point)) = ray_hit_oriented_box(ray, &world, &bounds) {
                hits.push(RayHit {
                    object: id,
                    distance,
                    point,
                });
            }
        });
    }
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
