use glam::{Affine3A, EulerRot, Mat4, Quat, Vec3};

use super::{Axis, Transform};

/// Euler order used for every rotation stored in a [`Transform3D`].
pub const EULER_ORDER: EulerRot = EulerRot::XYZ;

/// Rigid 3D pose with non-uniform scale.
///
/// Rotation is kept as Euler angles in radians (x = right, y = forward,
/// z = up) so per-axis constraints clamp the stored values directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3D {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform3D {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.translation)
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EULER_ORDER, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn from_trs(t: Vec3, r: Vec3, s: Vec3) -> Self {
        Self {
            translation: t,
            rotation: r,
            scale: s,
        }
    }

    pub fn from_translation(t: Vec3) -> Self {
        Self {
            translation: t,
            ..Self::IDENTITY
        }
    }

    pub fn from_quat(t: Vec3, q: Quat, s: Vec3) -> Self {
        let (x, y, z) = q.to_euler(EULER_ORDER);
        Self::from_trs(t, Vec3::new(x, y, z), s)
    }

    /// Unit scale pose from an axis-angle rotation; a zero axis gives no rotation.
    pub fn from_axis_angle(axis: Vec3, angle: f32, translation: Vec3) -> Self {
        let axis = axis.normalize_or_zero();
        let q = if axis == Vec3::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_axis_angle(axis, angle)
        };
        Self::from_quat(translation, q, Vec3::ONE)
    }

    pub fn affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.quat(), self.translation)
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.translation + self.quat() * (self.scale * point)
    }
}

impl Transform for Transform3D {
    type Position = Vec3;
    type Rotation = Vec3;
    type World = Affine3A;

    const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    fn to_world(&self) -> Affine3A {
        self.affine()
    }

    fn from_world(world: &Affine3A) -> Self {
        let (scale, rotation, translation) = world.to_scale_rotation_translation();
        Self::from_quat(translation, rotation, scale)
    }

    fn pivot(&self, rotation: Vec3) -> Self {
        let q = Quat::from_euler(EULER_ORDER, rotation.x, rotation.y, rotation.z);
        Self::from_quat(q * self.translation, q * self.quat(), self.scale)
    }

    fn position(&self) -> Vec3 {
        self.translation
    }

    fn set_position(&mut self, position: Vec3) {
        self.translation = position;
    }

    fn rotation(&self) -> Vec3 {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    fn rotate_about(rotation: Vec3, axis: Axis, radians: f32) -> Vec3 {
        let mut delta = Vec3::ZERO;
        delta[axis.index()] = radians;
        rotation + delta
    }
}
