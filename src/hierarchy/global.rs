use super::{Hierarchy, Node, NodeId};
use crate::error::Result;
use crate::math::Transform;

/// Single forward pass over the arena.
///
/// Relies on every parent index being smaller than its child's, so the
/// parent's world matrix is already in `global` when the child is reached.
pub(crate) fn propagate_transforms<T: Transform>(nodes: &[Node<T>], global: &mut Vec<T::World>) {
    log::trace!("Propagating transforms over {} nodes", nodes.len());

    global.clear();
    global.reserve(nodes.len());

    for node in nodes {
        let world = match node.relation.parent {
            None => node.local.to_world(),
            Some(parent) => T::compose(&global[parent.index()], &node.local),
        };
        global.push(world);
    }
}

impl<T: Transform> Hierarchy<T> {
    /// Recomputes every world matrix and marks the cache valid.
    pub fn refresh(&mut self) {
        propagate_transforms(&self.nodes, &mut self.global);
        self.cache_valid = true;
    }

    fn ensure_cached(&mut self) {
        if !self.cache_valid {
            self.refresh();
        }
    }

    /// World matrix of `id`, recomputing the whole hierarchy if stale.
    pub fn global(&mut self, id: NodeId) -> Result<T::World> {
        let index = self.check(id)?;
        self.ensure_cached();
        Ok(self.global[index])
    }

    /// Like [`Hierarchy::global`] but always runs the recompute pass.
    pub fn global_recalc(&mut self, id: NodeId) -> Result<T::World> {
        let index = self.check(id)?;
        self.refresh();
        Ok(self.global[index])
    }

    /// All world matrices in index order.
    pub fn globals(&mut self) -> &[T::World] {
        self.ensure_cached();
        &self.global
    }

    /// World pose of `id` split into position, rotation and scale.
    ///
    /// Shear picked up under a non-uniformly scaled ancestor is dropped;
    /// use [`Hierarchy::global`] when it matters.
    pub fn global_pose(&mut self, id: NodeId) -> Result<T> {
        Ok(T::from_world(&self.global(id)?))
    }

    pub fn global_position(&mut self, id: NodeId) -> Result<T::Position> {
        Ok(self.global_pose(id)?.position())
    }

    pub fn global_rotation(&mut self, id: NodeId) -> Result<T::Rotation> {
        Ok(self.global_pose(id)?.rotation())
    }

    pub fn global_scale(&mut self, id: NodeId) -> Result<T::Position> {
        Ok(self.global_pose(id)?.scale())
    }
}
