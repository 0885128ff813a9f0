use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Scales below this magnitude make a transform degenerate
pub const SCALE_EPSILON: f64 = 1e-9;

/// Per-primitive placement: scale, then rotate, then translate.
///
/// The parameter form is what genes carry and what mutation perturbs. For
/// chaining transforms use [`AffineTransform::to_matrix`] and [`compose`],
/// since a non-uniform scale followed by a rotation is not expressible as
/// another parameter set in general.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub sx: f64,
    pub sy: f64,
    /// Rotation in radians
    pub theta: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        sx: 1.0,
        sy: 1.0,
        theta: 0.0,
        dx: 0.0,
        dy: 0.0,
    };

    pub fn new(sx: f64, sy: f64, theta: f64, dx: f64, dy: f64) -> Self {
        Self { sx, sy, theta, dx, dy }
    }

    /// Single scale factor applied to both axes
    pub fn uniform(scale: f64, theta: f64, dx: f64, dy: f64) -> Self {
        Self::new(scale, scale, theta, dx, dy)
    }

    pub fn is_degenerate(&self) -> bool {
        let bad = |s: f64| !s.is_finite() || s < SCALE_EPSILON;
        bad(self.sx) || bad(self.sy)
    }

    pub fn to_matrix(&self) -> Affine2 {
        let (sin, cos) = self.theta.sin_cos();
        Affine2 {
            a: cos * self.sx,
            b: -sin * self.sy,
            c: sin * self.sx,
            d: cos * self.sy,
            tx: self.dx,
            ty: self.dy,
        }
    }

    /// Local frame to world frame
    pub fn apply_forward(&self, p: Point) -> Point {
        let (sin, cos) = self.theta.sin_cos();
        let (x, y) = (p.x * self.sx, p.y * self.sy);
        Point::new(x * cos - y * sin + self.dx, x * sin + y * cos + self.dy)
    }

    /// World frame to local frame, `None` when the transform is degenerate
    pub fn apply_inverse(&self, p: Point) -> Option<Point> {
        if self.is_degenerate() {
            return None;
        }
        let (sin, cos) = self.theta.sin_cos();
        let (x, y) = (p.x - self.dx, p.y - self.dy);
        let (rx, ry) = (x * cos + y * sin, -x * sin + y * cos);
        Some(Point::new(rx / self.sx, ry / self.sy))
    }
}

/// Transform equivalent to applying `first`, then `second`
pub fn compose(first: &AffineTransform, second: &AffineTransform) -> Affine2 {
    first.to_matrix().then(&second.to_matrix())
}

/// 2x3 affine matrix: `x' = a*x + b*y + tx`, `y' = c*x + d*y + ty`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affine2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<AffineTransform> for Affine2 {
    fn from(t: AffineTransform) -> Self {
        t.to_matrix()
    }
}

impl Affine2 {
    pub const IDENTITY: Affine2 = Affine2 {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// `self` followed by `next`
    pub fn then(&self, next: &Affine2) -> Affine2 {
        Affine2 {
            a: next.a * self.a + next.b * self.c,
            b: next.a * self.b + next.b * self.d,
            c: next.c * self.a + next.d * self.c,
            d: next.c * self.b + next.d * self.d,
            tx: next.a * self.tx + next.b * self.ty + next.tx,
            ty: next.c * self.tx + next.d * self.ty + next.ty,
        }
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.b * p.y + self.tx,
            self.c * p.x + self.d * p.y + self.ty,
        )
    }

    pub fn inverse(&self) -> Option<Affine2> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SCALE_EPSILON * SCALE_EPSILON {
            return None;
        }
        let (a, b, c, d) = (self.d / det, -self.b / det, -self.c / det, self.a / det);
        Some(Affine2 {
            a,
            b,
            c,
            d,
            tx: -(a * self.tx + b * self.ty),
            ty: -(c * self.tx + d * self.ty),
        })
    }

    pub fn approx_eq(&self, other: &Affine2, tolerance: f64) -> bool {
        [
            self.a - other.a,
            self.b - other.b,
            self.c - other.c,
            self.d - other.d,
            self.tx - other.tx,
            self.ty - other.ty,
        ]
        .iter()
        .all(|delta| delta.abs() <= tolerance)
    }
}
