use glam::{Affine2, Vec2};
use std::fmt;
use std::str::FromStr;

use super::{Axis, Transform};
use crate::error::{parse_scalars, ParseError};

/// Planar box: corner position, extent (acts as scale) and rotation in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub position: Vec2,
    pub extent: Vec2,
    pub rotation: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    pub fn new(position: Vec2, extent: Vec2, rotation: f32) -> Self {
        Self {
            position,
            extent,
            rotation,
        }
    }

    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        self.position + Vec2::from_angle(self.rotation).rotate(self.extent * point)
    }
}

impl Transform for Transform2D {
    type Position = Vec2;
    type Rotation = f32;
    type World = Affine2;

    const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        extent: Vec2::ONE,
        rotation: 0.0,
    };

    fn to_world(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(self.extent, self.rotation, self.position)
    }

    fn from_world(world: &Affine2) -> Self {
        let (extent, rotation, position) = world.to_scale_angle_translation();
        Self::new(position, extent, rotation)
    }

    fn pivot(&self, rotation: f32) -> Self {
        Self {
            position: Vec2::from_angle(rotation).rotate(self.position),
            rotation: self.rotation + rotation,
            ..*self
        }
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    fn scale(&self) -> Vec2 {
        self.extent
    }

    fn set_scale(&mut self, scale: Vec2) {
        self.extent = scale;
    }

    // A plane only has one rotational degree of freedom.
    fn rotate_about(rotation: f32, _axis: Axis, radians: f32) -> f32 {
        rotation + radians
    }
}

impl fmt::Display for Transform2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.position.x, self.position.y, self.extent.x, self.extent.y, self.rotation
        )
    }
}

impl FromStr for Transform2D {
    type Err = ParseError;

    /// Reads `"x y w h rot"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = parse_scalars(s)?;
        if values.len() != 5 {
            return Err(ParseError::FieldCount {
                expected: 5,
                found: values.len(),
            });
        }
        Ok(Self::new(
            Vec2::new(values[0], values[1]),
            Vec2::new(values[2], values[3]),
            values[4],
        ))
    }
}
