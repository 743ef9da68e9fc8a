use glam::Vec3;

use super::{Hierarchy, NodeId};
use crate::error::Result;
use crate::math::{Axis, Dimensions, Transform, Transform3D};

impl<T: Transform> Hierarchy<T> {
    pub fn set_position(&mut self, id: NodeId, position: T::Position) -> Result<()> {
        self.local_mut(id)?.set_position(position);
        Ok(())
    }

    pub fn set_rotation(&mut self, id: NodeId, rotation: T::Rotation) -> Result<()> {
        self.local_mut(id)?.set_rotation(rotation);
        Ok(())
    }

    pub fn set_scale(&mut self, id: NodeId, scale: T::Position) -> Result<()> {
        self.local_mut(id)?.set_scale(scale);
        Ok(())
    }

    /// Offsets the local position, clamped into the node's position range.
    pub fn translate(&mut self, id: NodeId, delta: T::Position) -> Result<()> {
        let range = self.constraint(id)?.position;
        let local = self.local_mut(id)?;
        let end = range.clamp(local.position() + delta);
        local.set_position(end);
        Ok(())
    }

    /// Multiplies the local scale component-wise, clamped into the scale range.
    pub fn scale(&mut self, id: NodeId, factor: T::Position) -> Result<()> {
        let range = self.constraint(id)?.scale;
        let local = self.local_mut(id)?;
        let end = range.clamp(local.scale() * factor);
        local.set_scale(end);
        Ok(())
    }

    /// Spins the node in place about a principal axis (0 right, 1 forward, 2 up).
    ///
    /// Any other axis selector leaves the node untouched.
    pub fn rotate(&mut self, id: NodeId, axis: u32, radians: f32) -> Result<()> {
        let range = self.constraint(id)?.rotation;
        let Some(axis) = Axis::from_index(axis) else {
            log::trace!("Ignoring rotate on node {} with bad axis {}", id, axis);
            return Ok(());
        };

        let local = self.local_mut(id)?;
        let end = range.clamp(T::rotate_about(local.rotation(), axis, radians));
        local.set_rotation(end);
        Ok(())
    }

    /// Swings the node about its parent's origin.
    ///
    /// The step on `axis` is first limited by the rotation range and then
    /// applied as a rotation in front of the local transform, so position
    /// turns along with orientation. Turning can move other Euler angles too,
    /// so the stored orientation is clamped again afterwards.
    pub fn orbit(&mut self, id: NodeId, axis: u32, radians: f32) -> Result<()> {
        let range = self.constraint(id)?.rotation;
        let Some(axis) = Axis::from_index(axis) else {
            log::trace!("Ignoring orbit on node {} with bad axis {}", id, axis);
            return Ok(());
        };

        let local = self.local_mut(id)?;
        let current = local.rotation();
        let target = range.clamp(T::rotate_about(current, axis, radians));
        *local = local.pivot(target - current);
        local.set_rotation(range.clamp(local.rotation()));
        Ok(())
    }

    /// Re-clamps the local transform with zero deltas. Idempotent.
    pub fn constrain(&mut self, id: NodeId) -> Result<()> {
        self.translate(id, <T::Position as Dimensions>::ZERO)?;
        self.rotate(id, Axis::Right as u32, 0.0)?;
        self.scale(id, <T::Position as Dimensions>::ONE)
    }
}

impl Hierarchy<Transform3D> {
    /// Replaces the local orientation with an axis-angle rotation, keeping
    /// translation and scale.
    pub fn set_axis_angle(&mut self, id: NodeId, axis: Vec3, angle: f32) -> Result<()> {
        let rotation = Transform3D::from_axis_angle(axis, angle, Vec3::ZERO).rotation;
        self.set_rotation(id, rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{Constraint2D, Constraint3D};
    use crate::hierarchy::{Hierarchy2D, Hierarchy3D};
    use crate::math::Transform2D;
    use glam::Vec2;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn single(local: Transform3D) -> (Hierarchy3D, NodeId) {
        let mut h = Hierarchy3D::new();
        let id = h.push(None, local).unwrap();
        (h, id)
    }

    #[test]
    fn absolute_setters_preserve_other_components() {
        let start = Transform3D::from_trs(Vec3::X, Vec3::new(0.1, 0.2, 0.3), Vec3::splat(2.0));
        let (mut h, id) = single(start);

        h.set_position(id, Vec3::new(4.0, 5.0, 6.0)).unwrap();
        let local = *h.local(id).unwrap();
        assert_eq!(local.rotation, start.rotation);
        assert_eq!(local.scale, start.scale);

        h.set_rotation(id, Vec3::ZERO).unwrap();
        h.set_scale(id, Vec3::ONE).unwrap();
        let local = *h.local(id).unwrap();
        assert_eq!(local.translation, Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(local.rotation, Vec3::ZERO);
        assert_eq!(local.scale, Vec3::ONE);
    }

    #[test]
    fn translate_clamps_to_max() {
        let (mut h, id) = single(Transform3D::IDENTITY);
        h.set_constraint(
            id,
            Constraint3D::default().with_position(Vec3::MIN, Vec3::new(8.0, 0.0, 0.0)),
        )
        .unwrap();

        h.translate(id, Vec3::new(10.0, 0.0, 0.0)).unwrap();
        assert_eq!(h.local(id).unwrap().translation, Vec3::new(8.0, 0.0, 0.0));
    }

    #[test]
    fn unconstrained_translate_adds_delta() {
        let (mut h, id) = single(Transform3D::from_translation(Vec3::ONE));
        h.translate(id, Vec3::new(1.0, -2.0, 0.5)).unwrap();
        assert_eq!(h.local(id).unwrap().translation, Vec3::new(2.0, -1.0, 1.5));
    }

    #[test]
    fn scale_multiplies_then_clamps() {
        let (mut h, id) = single(Transform3D::IDENTITY);
        h.set_constraint(
            id,
            Constraint3D::default().with_scale(Vec3::splat(0.5), Vec3::splat(3.0)),
        )
        .unwrap();

        h.scale(id, Vec3::new(2.0, 4.0, 0.1)).unwrap();
        assert_eq!(h.local(id).unwrap().scale, Vec3::new(2.0, 3.0, 0.5));
    }

    #[test]
    fn rotate_adds_on_selected_axis_and_clamps() {
        let (mut h, id) = single(Transform3D::IDENTITY);
        h.set_constraint(
            id,
            Constraint3D::default().with_rotation(Vec3::splat(-1.0), Vec3::splat(1.0)),
        )
        .unwrap();

        h.rotate(id, 2, 0.5).unwrap();
        assert_eq!(h.local(id).unwrap().rotation, Vec3::new(0.0, 0.0, 0.5));

        h.rotate(id, 0, 5.0).unwrap();
        assert_eq!(h.local(id).unwrap().rotation, Vec3::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn rotate_with_bad_axis_is_noop() {
        let start = Transform3D::from_trs(Vec3::X, Vec3::new(0.1, 0.2, 0.3), Vec3::ONE);
        let (mut h, id) = single(start);
        h.global(id).unwrap();

        h.rotate(id, 5, 1.0).unwrap();
        h.orbit(id, 3, 1.0).unwrap();

        assert_eq!(*h.local(id).unwrap(), start);
        assert!(h.is_cached());
    }

    #[test]
    fn rotate_checks_index_before_axis() {
        let mut h = Hierarchy3D::new();
        assert!(h.rotate(NodeId::new(0), 9, 1.0).is_err());
    }

    #[test]
    fn orbit_swings_position_about_parent_origin() {
        let (mut h, id) = single(Transform3D::from_translation(Vec3::X));
        h.orbit(id, 2, FRAC_PI_2).unwrap();

        let local = *h.local(id).unwrap();
        assert!(local.translation.abs_diff_eq(Vec3::Y, 1e-5));
        assert!(local
            .rotation
            .abs_diff_eq(Vec3::new(0.0, 0.0, FRAC_PI_2), 1e-5));
    }

    #[test]
    fn orbit_respects_rotation_range() {
        let mut h = Hierarchy2D::new();
        let id = h.push(None, Transform2D::from_position(Vec2::X)).unwrap();
        h.set_constraint(id, Constraint2D::default().with_rotation(0.0, FRAC_PI_2))
            .unwrap();

        h.orbit(id, 2, PI).unwrap();

        let local = *h.local(id).unwrap();
        assert!((local.rotation - FRAC_PI_2).abs() < 1e-6);
        assert!(local.position.abs_diff_eq(Vec2::Y, 1e-5));
    }

    #[test]
    fn orbit_keeps_every_euler_angle_in_range() {
        let (mut h, id) = single(Transform3D::from_trs(
            Vec3::X,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::ONE,
        ));
        let limits = Constraint3D::default().with_rotation(
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 1.0),
        );
        h.set_constraint(id, limits).unwrap();

        h.orbit(id, 2, 0.5).unwrap();

        let orbited = *h.local(id).unwrap();
        assert_eq!(orbited.rotation.x, 1.0);
        assert_eq!(orbited.rotation.y, 0.0);
        assert!(orbited.rotation.z >= -1.0 && orbited.rotation.z <= 1.0);

        h.constrain(id).unwrap();
        assert_eq!(*h.local(id).unwrap(), orbited);
    }

    #[test]
    fn planar_rotate_ignores_axis_choice() {
        let mut h = Hierarchy2D::new();
        let id = h.push(None, Transform2D::default()).unwrap();
        h.rotate(id, 0, 0.25).unwrap();
        h.rotate(id, 1, 0.25).unwrap();
        h.rotate(id, 2, 0.25).unwrap();
        assert_eq!(h.local(id).unwrap().rotation, 0.75);
    }

    #[test]
    fn constrain_pulls_values_into_range() {
        let start = Transform3D::from_trs(
            Vec3::new(20.0, -20.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::splat(10.0),
        );
        let (mut h, id) = single(start);
        h.set_constraint(
            id,
            Constraint3D::default()
                .with_position(Vec3::splat(-5.0), Vec3::splat(5.0))
                .with_rotation(Vec3::splat(-1.0), Vec3::splat(1.0))
                .with_scale(Vec3::splat(0.5), Vec3::splat(2.0)),
        )
        .unwrap();

        h.constrain(id).unwrap();
        let once = *h.local(id).unwrap();
        assert_eq!(once.translation, Vec3::new(5.0, -5.0, 0.0));
        assert_eq!(once.rotation, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(once.scale, Vec3::splat(2.0));

        h.constrain(id).unwrap();
        assert_eq!(*h.local(id).unwrap(), once);
    }

    #[test]
    fn edits_invalidate_cache() {
        let (mut h, id) = single(Transform3D::IDENTITY);

        let edits: [fn(&mut Hierarchy3D, NodeId); 6] = [
            |h, id| h.translate(id, Vec3::X).unwrap(),
            |h, id| h.scale(id, Vec3::splat(2.0)).unwrap(),
            |h, id| h.rotate(id, 1, 0.1).unwrap(),
            |h, id| h.orbit(id, 1, 0.1).unwrap(),
            |h, id| h.set_position(id, Vec3::Z).unwrap(),
            |h, id| h.set_axis_angle(id, Vec3::Z, 0.3).unwrap(),
        ];

        for edit in edits {
            h.global(id).unwrap();
            assert!(h.is_cached());
            edit(&mut h, id);
            assert!(!h.is_cached());
        }
    }

    #[test]
    fn axis_angle_keeps_translation() {
        let (mut h, id) = single(Transform3D::from_translation(Vec3::new(1.0, 2.0, 3.0)));
        h.set_axis_angle(id, Vec3::Z, FRAC_PI_2).unwrap();

        let local = *h.local(id).unwrap();
        assert_eq!(local.translation, Vec3::new(1.0, 2.0, 3.0));
        assert!(local
            .rotation
            .abs_diff_eq(Vec3::new(0.0, 0.0, FRAC_PI_2), 1e-5));
    }
}
