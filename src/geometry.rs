// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Coordinate primitives.
//!
//! A [`Point`] is tagged with the space it lives in ([`Screen`] or [`World`]),
//! so a world position can never be handed to code expecting pixels. The only
//! way across is [`crate::camera::Camera`]. [`Vector`] is a displacement and
//! carries no space; [`Rect`] is always screen space.

use crate::ui::{UIError, UIResult};
use std::{
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Screen space: pixels (or cells) of the current view, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Screen;

/// World space: zoom and pan invariant domain coordinates, y grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct World;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn sq_length(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f32 {
        self.sq_length().sqrt()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f32) -> Vector {
        Vector::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        vector * self
    }
}

impl Div<f32> for Vector {
    type Output = Vector;

    fn div(self, scalar: f32) -> Vector {
        Vector::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// A position in coordinate space `S`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<S = Screen> {
    pub x: f32,
    pub y: f32,
    space: PhantomData<S>,
}

pub type ScreenPoint = Point<Screen>;
pub type WorldPoint = Point<World>;

impl<S> Point<S> {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// Displacement from the origin of the same space.
    pub fn vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

impl<S> Add<Vector> for Point<S> {
    type Output = Point<S>;

    fn add(self, v: Vector) -> Point<S> {
        Point::new(self.x + v.x, self.y + v.y)
    }
}

impl<S> Sub<Vector> for Point<S> {
    type Output = Point<S>;

    fn sub(self, v: Vector) -> Point<S> {
        Point::new(self.x - v.x, self.y - v.y)
    }
}

impl<S> AddAssign<Vector> for Point<S> {
    fn add_assign(&mut self, v: Vector) {
        self.x += v.x;
        self.y += v.y;
    }
}

impl<S> SubAssign<Vector> for Point<S> {
    fn sub_assign(&mut self, v: Vector) {
        self.x -= v.x;
        self.y -= v.y;
    }
}

impl<S> Sub for Point<S> {
    type Output = Vector;

    fn sub(self, rhs: Point<S>) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<S> fmt::Display for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub fn distance<S>(a: Point<S>, b: Point<S>) -> f32 {
    (b - a).length()
}

/// Axis-aligned screen rectangle: top-left corner plus size.
///
/// A non-negative size is expected. [`Rect::shrink`] clamps instead of
/// producing a negative size; [`Rect::checked_shrink`] reports the misuse.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    corner: ScreenPoint,
    size: Vector,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            corner: ScreenPoint::new(x, y),
            size: Vector::new(width, height),
        }
    }

    pub fn from_corner(corner: ScreenPoint, size: Vector) -> Self {
        Self { corner, size }
    }

    pub fn from_center(center: ScreenPoint, size: Vector) -> Self {
        Self {
            corner: center - size / 2.0,
            size,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.corner.x
    }

    pub fn max_x(&self) -> f32 {
        self.corner.x + self.size.x
    }

    pub fn min_y(&self) -> f32 {
        self.corner.y
    }

    pub fn max_y(&self) -> f32 {
        self.corner.y + self.size.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn corner(&self) -> ScreenPoint {
        self.corner
    }

    pub fn size(&self) -> Vector {
        self.size
    }

    pub fn center(&self) -> ScreenPoint {
        self.corner + self.size / 2.0
    }

    /// Same size, moved so that its center lands on `center`.
    pub fn with_center(self, center: ScreenPoint) -> Self {
        Self::from_center(center, self.size)
    }

    /// Same corner, new size.
    pub fn with_size(self, size: Vector) -> Self {
        Self {
            corner: self.corner,
            size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Inclusive on all four edges. A rect with a zero or negative side
    /// contains nothing, so collapsed and unsized widgets are never hit.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        !self.is_empty()
            && point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    /// Moves every edge inward by `amount`.
    ///
    /// A dimension smaller than `2 * amount` collapses to zero around its
    /// center line rather than going negative.
    pub fn shrink(&mut self, amount: f32) {
        let dx = amount.min(self.size.x / 2.0);
        let dy = amount.min(self.size.y / 2.0);
        self.corner += Vector::new(dx, dy);
        self.size = Vector::new(
            (self.size.x - 2.0 * amount).max(0.0),
            (self.size.y - 2.0 * amount).max(0.0),
        );
    }

    #[must_use]
    pub fn shrinked(&self, amount: f32) -> Self {
        let mut result = *self;
        result.shrink(amount);
        result
    }

    /// Like [`Rect::shrinked`], but refuses to produce a negative size.
    pub fn checked_shrink(&self, amount: f32) -> UIResult<Self> {
        if 2.0 * amount > self.size.x || 2.0 * amount > self.size.y {
            return Err(UIError::Geometry(format!(
                "cannot shrink {}x{} rect by {}",
                self.size.x, self.size.y, amount
            )));
        }
        Ok(self.shrinked(amount))
    }
}

impl Add<Vector> for Rect {
    type Output = Rect;

    fn add(self, v: Vector) -> Rect {
        Rect {
            corner: self.corner + v,
            size: self.size,
        }
    }
}

impl AddAssign<Vector> for Rect {
    fn add_assign(&mut self, v: Vector) {
        self.corner += v;
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.corner, self.size)
    }
}
