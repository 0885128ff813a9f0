use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point (or vector) in the 2D plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// RGB color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub [f64; 3]);

impl Rgb {
    /// Used wherever a primitive carries no color of its own
    pub const NEUTRAL: Rgb = Rgb([0.6, 0.6, 0.6]);

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb([r, g, b]).clamped()
    }

    pub fn clamped(self) -> Self {
        Rgb(self.0.map(|c| c.clamp(0.0, 1.0)))
    }

    pub fn channels(&self) -> [f64; 3] {
        self.0
    }

    fn zip_with(self, other: Rgb, f: impl Fn(f64, f64) -> f64) -> Rgb {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = other.0;
        Rgb([f(a0, b0), f(a1, b1), f(a2, b2)])
    }

    /// Screen blend: 1 - (1 - a)(1 - b)
    pub fn screen(self, other: Rgb) -> Rgb {
        self.zip_with(other, |a, b| 1.0 - (1.0 - a) * (1.0 - b))
    }

    /// Per-channel product
    pub fn multiply(self, other: Rgb) -> Rgb {
        self.zip_with(other, |a, b| a * b)
    }

    /// Per-channel a * (1 - b)
    pub fn subtract(self, other: Rgb) -> Rgb {
        self.zip_with(other, |a, b| a * (1.0 - b))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::NEUTRAL
    }
}

/// Primitive shape kind tag, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Disk,
    Square,
    Polygon,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Disk => "disk",
            ShapeKind::Square => "square",
            ShapeKind::Polygon => "polygon",
        }
    }
}

/// Boolean set operator of an internal genome node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoolOp {
    Union,
    Intersection,
    Difference,
}

impl BoolOp {
    pub const ALL: [BoolOp; 3] = [BoolOp::Union, BoolOp::Intersection, BoolOp::Difference];

    /// The two operators different from `self`
    pub fn others(self) -> [BoolOp; 2] {
        match self {
            BoolOp::Union => [BoolOp::Intersection, BoolOp::Difference],
            BoolOp::Intersection => [BoolOp::Union, BoolOp::Difference],
            BoolOp::Difference => [BoolOp::Union, BoolOp::Intersection],
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BoolOp::Union => "∪",
            BoolOp::Intersection => "∩",
            BoolOp::Difference => "−",
        }
    }
}
