use glam::{Vec2, Vec3};
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Component-wise value used for positions, rotations and scales.
pub trait Dimensions:
    Copy + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Number of scalar fields in the text form
    const COMPONENTS: usize;
    const ZERO: Self;
    const ONE: Self;
    /// Lowest representable value, used as an open lower bound
    const MIN: Self;
    /// Highest representable value, used as an open upper bound
    const MAX: Self;

    /// Component-wise clamp into `[min, max]`.
    ///
    /// Never panics on an inverted range; `max` wins in that case.
    fn clamp_to(self, min: Self, max: Self) -> Self;

    fn scaled(self, factor: f32) -> Self;

    fn write_scalars(&self, out: &mut Vec<f32>);

    /// Reads [`Self::COMPONENTS`] values; callers guarantee the length.
    fn from_scalars(values: &[f32]) -> Self;
}

impl Dimensions for f32 {
    const COMPONENTS: usize = 1;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const MIN: Self = f32::MIN;
    const MAX: Self = f32::MAX;

    fn clamp_to(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    fn scaled(self, factor: f32) -> Self {
        self * factor
    }

    fn write_scalars(&self, out: &mut Vec<f32>) {
        out.push(*self);
    }

    fn from_scalars(values: &[f32]) -> Self {
        values[0]
    }
}

impl Dimensions for Vec2 {
    const COMPONENTS: usize = 2;
    const ZERO: Self = Vec2::ZERO;
    const ONE: Self = Vec2::ONE;
    const MIN: Self = Vec2::splat(f32::MIN);
    const MAX: Self = Vec2::splat(f32::MAX);

    fn clamp_to(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    fn scaled(self, factor: f32) -> Self {
        self * factor
    }

    fn write_scalars(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.to_array());
    }

    fn from_scalars(values: &[f32]) -> Self {
        Vec2::new(values[0], values[1])
    }
}

impl Dimensions for Vec3 {
    const COMPONENTS: usize = 3;
    const ZERO: Self = Vec3::ZERO;
    const ONE: Self = Vec3::ONE;
    const MIN: Self = Vec3::splat(f32::MIN);
    const MAX: Self = Vec3::splat(f32::MAX);

    fn clamp_to(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    fn scaled(self, factor: f32) -> Self {
        self * factor
    }

    fn write_scalars(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.to_array());
    }

    fn from_scalars(values: &[f32]) -> Self {
        Vec3::new(values[0], values[1], values[2])
    }
}
