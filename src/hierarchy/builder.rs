// hierarchy/builder.rs
// Fluent node creation plus generators for common layouts

use super::{Hierarchy, NodeConstraint, NodeId};
use crate::error::Result;
use crate::math::{Dimensions, Transform};
use crate::settings::HierarchySettings;

/// Helper for pushing a node with a fluent API.
/// This is optional - `Hierarchy::push` does the same without the sugar.
pub struct NodeBuilder<'h, T: Transform> {
    hierarchy: &'h mut Hierarchy<T>,
    parent: Option<NodeId>,
    local: T,
    constraint: Option<NodeConstraint<T>>,
}

impl<'h, T: Transform> NodeBuilder<'h, T> {
    pub fn new(hierarchy: &'h mut Hierarchy<T>) -> Self {
        Self {
            hierarchy,
            parent: None,
            local: T::IDENTITY,
            constraint: None,
        }
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_transform(mut self, local: T) -> Self {
        self.local = local;
        self
    }

    pub fn with_position(mut self, position: T::Position) -> Self {
        self.local.set_position(position);
        self
    }

    pub fn with_rotation(mut self, rotation: T::Rotation) -> Self {
        self.local.set_rotation(rotation);
        self
    }

    pub fn with_scale(mut self, scale: T::Position) -> Self {
        self.local.set_scale(scale);
        self
    }

    pub fn with_constraint(mut self, constraint: NodeConstraint<T>) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Push the node into the hierarchy
    pub fn spawn(self) -> Result<NodeId> {
        let id = self.hierarchy.push(self.parent, self.local)?;
        if let Some(constraint) = self.constraint {
            self.hierarchy.set_constraint(id, constraint)?;
        }
        Ok(id)
    }
}

fn offset<T: Transform>(position: T::Position, rotation: T::Rotation) -> T {
    let mut local = T::IDENTITY;
    local.set_position(position);
    local.set_rotation(rotation);
    local
}

impl<T: Transform> Hierarchy<T> {
    /// `count` nodes, each the child of the previous one with the same local offset.
    pub fn chain(count: usize, position_step: T::Position, rotation_step: T::Rotation) -> Self {
        Self::chain_with_settings(&HierarchySettings::default(), count, position_step, rotation_step)
    }

    pub fn chain_with_settings(
        settings: &HierarchySettings,
        count: usize,
        position_step: T::Position,
        rotation_step: T::Rotation,
    ) -> Self {
        let mut hierarchy = Self::with_settings(settings);
        let local = offset::<T>(position_step, rotation_step);
        let mut parent = None;
        for _ in 0..count {
            let id = NodeId::new(hierarchy.nodes.len());
            hierarchy.attach(parent, local);
            parent = Some(id);
        }
        hierarchy
    }

    /// An identity root followed by `count - 1` children of it, child `i`
    /// offset by `i` steps.
    pub fn fan(count: usize, position_step: T::Position, rotation_step: T::Rotation) -> Self {
        Self::fan_with_settings(&HierarchySettings::default(), count, position_step, rotation_step)
    }

    pub fn fan_with_settings(
        settings: &HierarchySettings,
        count: usize,
        position_step: T::Position,
        rotation_step: T::Rotation,
    ) -> Self {
        let mut hierarchy = Self::with_settings(settings);
        if count == 0 {
            return hierarchy;
        }

        hierarchy.attach(None, T::IDENTITY);
        let root = NodeId::new(0);
        for i in 1..count {
            let factor = i as f32;
            let local = offset::<T>(position_step.scaled(factor), rotation_step.scaled(factor));
            hierarchy.attach(Some(root), local);
        }
        hierarchy
    }

    // Generators only link to nodes they already created.
    fn attach(&mut self, parent: Option<NodeId>, local: T) {
        if let Err(err) = self.push(parent, local) {
            log::error!("Failed to attach generated node: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Constraint3D;
    use crate::hierarchy::{Hierarchy2D, Hierarchy3D};
    use crate::math::Transform3D;
    use crate::settings::ParseMode;
    use glam::{Vec2, Vec3};

    #[test]
    fn builder_spawns_linked_node_with_constraint() {
        let mut h = Hierarchy3D::new();
        let root = h.node().with_position(Vec3::new(1.0, 0.0, 0.0)).spawn().unwrap();
        let limits = Constraint3D::default().with_position(Vec3::ZERO, Vec3::ONE);
        let child = h
            .node()
            .with_parent(root)
            .with_transform(Transform3D::from_translation(Vec3::Y))
            .with_scale(Vec3::splat(2.0))
            .with_constraint(limits)
            .spawn()
            .unwrap();

        assert_eq!(h.relation(child).unwrap().parent, Some(root));
        assert_eq!(h.local(child).unwrap().scale, Vec3::splat(2.0));
        assert_eq!(h.constraint(child).unwrap(), limits);
        assert_eq!(h.global_position(child).unwrap(), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn builder_rejects_missing_parent() {
        let mut h = Hierarchy3D::new();
        assert!(h.node().with_parent(NodeId::new(2)).spawn().is_err());
        assert!(h.is_empty());
    }

    #[test]
    fn chain_accumulates_offsets() {
        let mut h = Hierarchy3D::chain(4, Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO);
        assert_eq!(h.len(), 4);
        assert_eq!(h.relation(NodeId::new(3)).unwrap().parent, Some(NodeId::new(2)));
        assert!(h.relation(NodeId::new(0)).unwrap().is_root());
        assert!(h
            .global_position(NodeId::new(3))
            .unwrap()
            .abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), 1e-5));
    }

    #[test]
    fn fan_scales_offsets_by_index() {
        let mut h = Hierarchy2D::fan(4, Vec2::new(2.0, 0.0), 0.1);
        let root = NodeId::new(0);

        assert_eq!(h.len(), 4);
        assert_eq!(h.relation(root).unwrap().children.len(), 3);
        assert_eq!(h.local(root).unwrap(), &crate::math::Transform2D::default());

        let last = NodeId::new(3);
        assert_eq!(h.global_position(last).unwrap(), Vec2::new(6.0, 0.0));
        assert!((h.global_rotation(last).unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn empty_generators_are_empty() {
        assert!(Hierarchy3D::chain(0, Vec3::X, Vec3::ZERO).is_empty());
        assert!(Hierarchy3D::fan(0, Vec3::X, Vec3::ZERO).is_empty());
    }

    #[test]
    fn generators_carry_settings() {
        let settings = HierarchySettings {
            initial_capacity: 4,
            constraint_parsing: ParseMode::Lenient,
        };
        let chain = Hierarchy3D::chain_with_settings(&settings, 3, Vec3::X, Vec3::ZERO);
        let fan = Hierarchy2D::fan_with_settings(&settings, 3, Vec2::X, 0.0);

        assert_eq!(chain.parse_mode(), ParseMode::Lenient);
        assert_eq!(fan.parse_mode(), ParseMode::Lenient);
        assert_eq!(chain.len(), 3);
        assert_eq!(fan.len(), 3);
        assert_eq!(Hierarchy3D::chain(2, Vec3::X, Vec3::ZERO).parse_mode(), ParseMode::Strict);
    }
}
