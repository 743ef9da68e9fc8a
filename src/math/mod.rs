// math/mod.rs

pub mod dimensions;
pub mod transform;
pub mod transform2d;

pub use dimensions::Dimensions;
pub use transform::Transform3D;
pub use transform2d::Transform2D;

use std::fmt::Debug;
use std::ops::Mul;

/// Principal axis selector for incremental rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Right = 0,
    Forward = 1,
    Up = 2,
}

impl Axis {
    /// Maps a raw selector to an axis; anything outside `0..=2` is `None`.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Axis::Right),
            1 => Some(Axis::Forward),
            2 => Some(Axis::Up),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A pose that can live in a [`crate::Hierarchy`].
///
/// Local poses keep position, rotation and scale apart so edits can clamp
/// each one. World poses are affine matrices: a parent with non-uniform
/// scale shears a rotated child, which a split pose cannot hold.
///
/// Scale shares the dimension type of position.
pub trait Transform: Copy + Debug + PartialEq {
    type Position: Dimensions;
    type Rotation: Dimensions;
    type World: Copy + Debug + PartialEq + Mul<Output = Self::World>;

    const IDENTITY: Self;

    fn to_world(&self) -> Self::World;

    /// Splits a world matrix back into position, rotation and scale.
    /// Position is exact; any shear is dropped from rotation and scale.
    fn from_world(world: &Self::World) -> Self;

    /// Places `child` inside the world frame `parent` (parent first, not commutative).
    fn compose(parent: &Self::World, child: &Self) -> Self::World {
        *parent * child.to_world()
    }

    /// Turns the whole pose, position included, by `rotation` about the
    /// origin of its parent frame. Scale is untouched.
    fn pivot(&self, rotation: Self::Rotation) -> Self;

    fn position(&self) -> Self::Position;
    fn set_position(&mut self, position: Self::Position);

    fn rotation(&self) -> Self::Rotation;
    fn set_rotation(&mut self, rotation: Self::Rotation);

    fn scale(&self) -> Self::Position;
    fn set_scale(&mut self, scale: Self::Position);

    /// Adds `radians` to the component of `rotation` driven by `axis`.
    ///
    /// For Euler rotations this is a step in one stored angle, not a turn
    /// about a fixed axis: the right and up angles are applied first and
    /// last, so a change to the forward angle turns about an axis already
    /// tilted by the right angle.
    fn rotate_about(rotation: Self::Rotation, axis: Axis, radians: f32) -> Self::Rotation;
}
