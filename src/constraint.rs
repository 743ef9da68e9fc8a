//! Per-node clamp ranges and their text form.
//!
//! The text form is a whitespace separated list of scalars in a fixed
//! order: position min, position max, rotation min, rotation max, scale
//! min, scale max. Each endpoint contributes as many fields as its
//! dimension has components, so a 3D constraint is 18 fields and a 2D one
//! is 10.

use glam::{Vec2, Vec3};
use std::fmt;
use std::str::FromStr;

use crate::error::{parse_scalars, ParseError};
use crate::math::Dimensions;

/// Inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<D> {
    pub min: D,
    pub max: D,
}

impl<D: Dimensions> Range<D> {
    pub fn new(min: D, max: D) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::new(D::MIN, D::MAX)
    }

    pub fn clamp(&self, value: D) -> D {
        value.clamp_to(self.min, self.max)
    }
}

impl<D: Dimensions> Default for Range<D> {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Clamp ranges applied after every incremental edit of a node.
///
/// `P` is the position and scale dimension, `R` the rotation dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint<P, R> {
    pub position: Range<P>,
    pub rotation: Range<R>,
    pub scale: Range<P>,
}

/// Planar constraint: xy position and scale, one rotation angle.
pub type Constraint2D = Constraint<Vec2, f32>;
/// Spatial constraint: xyz position and scale, Euler rotation.
pub type Constraint3D = Constraint<Vec3, Vec3>;

impl<P: Dimensions, R: Dimensions> Default for Constraint<P, R> {
    fn default() -> Self {
        Self {
            position: Range::unbounded(),
            rotation: Range::unbounded(),
            scale: Range::unbounded(),
        }
    }
}

impl<P: Dimensions, R: Dimensions> Constraint<P, R> {
    pub fn new(position: Range<P>, rotation: Range<R>, scale: Range<P>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn with_position(mut self, min: P, max: P) -> Self {
        self.position = Range::new(min, max);
        self
    }

    pub fn with_rotation(mut self, min: R, max: R) -> Self {
        self.rotation = Range::new(min, max);
        self
    }

    pub fn with_scale(mut self, min: P, max: P) -> Self {
        self.scale = Range::new(min, max);
        self
    }

    /// Number of scalar fields in the text form.
    pub const fn field_count() -> usize {
        4 * P::COMPONENTS + 2 * R::COMPONENTS
    }

    pub fn to_scalars(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(Self::field_count());
        self.position.min.write_scalars(&mut out);
        self.position.max.write_scalars(&mut out);
        self.rotation.min.write_scalars(&mut out);
        self.rotation.max.write_scalars(&mut out);
        self.scale.min.write_scalars(&mut out);
        self.scale.max.write_scalars(&mut out);
        out
    }

    /// Builds a constraint from exactly [`Self::field_count`] scalars.
    pub fn from_scalars(values: &[f32]) -> Result<Self, ParseError> {
        if values.len() != Self::field_count() {
            return Err(ParseError::FieldCount {
                expected: Self::field_count(),
                found: values.len(),
            });
        }

        let mut reader = ScalarReader { values, cursor: 0 };
        let position = Range::new(reader.take::<P>(), reader.take::<P>());
        let rotation = Range::new(reader.take::<R>(), reader.take::<R>());
        let scale = Range::new(reader.take::<P>(), reader.take::<P>());
        Ok(Self::new(position, rotation, scale))
    }

    /// Strict parse: the field count must match and every token must be a number.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let values = parse_scalars(text)?;
        Self::from_scalars(&values)
    }

    /// Engine-compatible parse that never fails.
    ///
    /// Missing trailing fields keep their unbounded defaults, surplus
    /// fields are dropped and unreadable tokens count as `0.0`.
    pub fn parse_lenient(text: &str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let expected = Self::field_count();

        if tokens.len() != expected {
            log::warn!(
                "Constraint text has {} fields, expected {}; missing fields stay unbounded",
                tokens.len(),
                expected
            );
        }

        let mut values = Self::default().to_scalars();
        for (slot, token) in values.iter_mut().zip(tokens.iter()) {
            *slot = match token.parse::<f32>() {
                Ok(value) => value,
                Err(_) => {
                    log::warn!("Constraint field {:?} is not a number; using 0", token);
                    0.0
                }
            };
        }

        Self::from_scalars(&values).unwrap_or_default()
    }
}

struct ScalarReader<'a> {
    values: &'a [f32],
    cursor: usize,
}

impl ScalarReader<'_> {
    fn take<D: Dimensions>(&mut self) -> D {
        let end = self.cursor + D::COMPONENTS;
        let value = D::from_scalars(&self.values[self.cursor..end]);
        self.cursor = end;
        value
    }
}

impl<P: Dimensions, R: Dimensions> fmt::Display for Constraint<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.to_scalars().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<P: Dimensions, R: Dimensions> FromStr for Constraint<P, R> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
