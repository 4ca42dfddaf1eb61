//! Hover groups: disjoint meshes that highlight and react as one unit
//! (mug + lid, mailbox body + cover).

use std::rc::Rc;

use fnv::FnvHashMap;

use crate::scene::{ObjectId, SceneGraph};

/// A resolved group. Cloning is cheap; `members` is shared with the cache,
/// so two resolutions of the same group are pointer-equal.
#[derive(Clone, Debug)]
pub struct HoverGroup {
    pub id: Rc<str>,
    pub members: Rc<[ObjectId]>,
}

impl HoverGroup {
    pub fn contains(&self, id: ObjectId) -> bool {
        self.members.contains(&id)
    }

    pub fn same_as(&self, other: &HoverGroup) -> bool {
        Rc::ptr_eq(&self.members, &other.members)
    }
}

impl PartialEq for HoverGroup {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.members == other.members
    }
}

/// Cache of `group id -> members`, built on first resolution of each id.
///
/// Tags are assumed static for the lifetime of the scene. If a host retags
/// nodes or the scanned candidate set changes, call [`invalidate`].
///
/// [`invalidate`]: HoverGroupIndex::invalidate
#[derive(Debug, Default)]
pub struct HoverGroupIndex {
    groups: FnvHashMap<Rc<str>, Rc<[ObjectId]>>,
}

impl HoverGroupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nearest hover-group tag on `hit` or any of its ancestors.
    pub fn tag_of<'a>(scene: &'a SceneGraph, hit: ObjectId) -> Option<&'a str> {
        scene
            .ancestors(hit)
            .find_map(|a| scene.get(a).and_then(|n| n.hover_group.as_deref()))
    }

    pub fn resolve(
        &mut self,
        scene: &SceneGraph,
        candidates: &[ObjectId],
        hit: ObjectId,
    ) -> Option<HoverGroup> {
        let tag = Self::tag_of(scene, hit)?;
        if let Some((id, members)) = self.groups.get_key_value(tag) {
            return (!members.is_empty()).then(|| HoverGroup {
                id: id.clone(),
                members: members.clone(),
            });
        }

        let mut found: Vec<ObjectId> = Vec::new();
        for &root in candidates {
            scene.walk(root, &mut |id| {
                let tagged = scene
                    .get(id)
                    .and_then(|n| n.hover_group.as_deref())
                    .is_some_and(|g| g == tag);
                if tagged && !found.contains(&id) {
                    found.push(id);
                }
            });
        }
        log::debug!("[hover] built group `{}` with {} member(s)", tag, found.len());

        let id: Rc<str> = Rc::from(tag);
        let members: Rc<[ObjectId]> = Rc::from(found);
        self.groups.insert(id.clone(), members.clone());
        (!members.is_empty()).then_some(HoverGroup { id, members })
    }

    pub fn cached_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn invalidate(&mut self) {
        self.groups.clear();
    }
}
