//! Minimal scene graph for the interactable part of the room.
//!
//! The renderer owns the real meshes. This arena mirrors just what pointer
//! interaction needs: names, hover-group tags, hierarchy, local transforms,
//! local bounds for ray tests, and the presentation state the core writes
//! back (highlight flag, animated scale/rotation, emissive tint).

use crate::error::{SceneError, SceneResult};
use glam::{EulerRot, Mat4, Quat, Vec3};
use smallvec::SmallVec;

/// Stable handle to a node in the [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl ObjectId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Local transform. Rotation is Euler XYZ in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }
}

/// Axis-aligned box in the node's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Cube of the given half extent centred on the origin.
    pub fn cube(half_extent: f32) -> Self {
        Self::new(Vec3::splat(-half_extent), Vec3::splat(half_extent))
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Emissive material channel. Absent on most meshes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emissive {
    pub color: Vec3,
    pub intensity: f32,
}

impl Emissive {
    pub fn from_hex(hex: u32, intensity: f32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self {
            color: Vec3::new(r, g, b),
            intensity,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub hover_group: Option<String>,
    pub parent: Option<ObjectId>,
    pub children: SmallVec<[ObjectId; 4]>,
    pub transform: Transform,
    /// Grouping nodes have no bounds and are never hit directly.
    pub bounds: Option<Aabb>,
    pub emissive: Option<Emissive>,
    pub highlighted: bool,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hover_group: None,
            parent: None,
            children: SmallVec::new(),
            transform: Transform::default(),
            bounds: None,
            emissive: None,
            highlighted: false,
        }
    }

    pub fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_hover_group(mut self, group: impl Into<String>) -> Self {
        self.hover_group = Some(group.into());
        self
    }

    pub fn with_emissive(mut self, emissive: Emissive) -> Self {
        self.emissive = Some(emissive);
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, attaching it under `parent` when given.
    pub fn add(&mut self, mut node: SceneNode, parent: Option<ObjectId>) -> SceneResult<ObjectId> {
        let id = ObjectId(self.nodes.len() as u32);
        if let Some(p) = parent {
            let parent_node = self
                .nodes
                .get_mut(p.index())
                .ok_or_else(|| SceneError::UnknownParent(p, node.name.clone()))?;
            parent_node.children.push(id);
        }
        node.parent = parent;
        node.children.clear();
        self.nodes.push(node);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        (0..self.nodes.len()).map(|i| ObjectId(i as u32))
    }

    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    pub fn node(&self, id: ObjectId) -> SceneResult<&SceneNode> {
        self.get(id).ok_or(SceneError::UnknownObject(id))
    }

    pub fn node_mut(&mut self, id: ObjectId) -> SceneResult<&mut SceneNode> {
        self.get_mut(id).ok_or(SceneError::UnknownObject(id))
    }

    /// Name of the node, or the empty string for an unknown handle.
    pub fn name(&self, id: ObjectId) -> &str {
        self.get(id).map(|n| n.name.as_str()).unwrap_or("")
    }

    pub fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.ids().find(|&id| self.name(id) == name)
    }

    pub fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: ObjectId) -> &[ObjectId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// `id` followed by each of its ancestors up to the root.
    pub fn ancestors(&self, id: ObjectId) -> Ancestors<'_> {
        Ancestors {
            scene: self,
            next: self.contains(id).then_some(id),
        }
    }

    pub fn is_self_or_descendant_of(&self, id: ObjectId, ancestor: ObjectId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// Depth-first, pre-order walk over `root` and everything below it.
    pub fn walk(&self, root: ObjectId, visit: &mut impl FnMut(ObjectId)) {
        if !self.contains(root) {
            return;
        }
        let mut stack: SmallVec<[ObjectId; 16]> = SmallVec::new();
        stack.push(root);
        while let Some(id) = stack.pop() {
            visit(id);
            // reversed so children come out in insertion order
            for &c in self.children(id).iter().rev() {
                stack.push(c);
            }
        }
    }

    pub fn set_hover_group(&mut self, id: ObjectId, group: Option<String>) -> SceneResult<()> {
        self.node_mut(id)?.hover_group = group;
        Ok(())
    }

    pub fn set_transform(&mut self, id: ObjectId, transform: Transform) -> SceneResult<()> {
        self.node_mut(id)?.transform = transform;
        Ok(())
    }

    pub fn set_emissive(&mut self, id: ObjectId, emissive: Option<Emissive>) -> SceneResult<()> {
        self.node_mut(id)?.emissive = emissive;
        Ok(())
    }

    pub fn set_highlighted(&mut self, id: ObjectId, on: bool) {
        if let Some(n) = self.get_mut(id) {
            n.highlighted = on;
        }
    }

    pub fn world_matrix(&self, id: ObjectId) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        for a in self.ancestors(id) {
            if let Some(n) = self.get(a) {
                m = n.transform.matrix() * m;
            }
        }
        m
    }

    pub fn world_position(&self, id: ObjectId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }
}

pub struct Ancestors<'a> {
    scene: &'a SceneGraph,
    next: Option<ObjectId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ObjectId;

    fn next(&mut self) -> Option<ObjectId> {
        let cur = self.next?;
        self.next = self.scene.parent(cur);
        Some(cur)
    }
}
