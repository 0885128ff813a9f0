use crate::config::SamplingConfig;
use crate::error::{Result, SdfEvoError};
use crate::geometry::{sdf, AffineTransform};
use crate::types::{Point, Rgb, ShapeKind};
use rand::Rng;
use std::f64::consts::TAU;
use std::sync::Arc;

/// Shape payload of a leaf; polygons own their local-frame vertices
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Disk,
    Square,
    Polygon { vertices: Arc<[Point]> },
}

impl Primitive {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Primitive::Disk => ShapeKind::Disk,
            Primitive::Square => ShapeKind::Square,
            Primitive::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    pub fn vertices(&self) -> Option<&[Point]> {
        match self {
            Primitive::Polygon { vertices } => Some(&**vertices),
            _ => None,
        }
    }

    /// Canonical signed distance in the local frame
    pub fn local_sdf(&self, p: Point) -> f64 {
        match self {
            Primitive::Disk => sdf::disk(p),
            Primitive::Square => sdf::square(p),
            Primitive::Polygon { vertices } => sdf::polygon(p, vertices),
        }
    }
}

/// Leaf of a genome: one placed, colored primitive
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveGene {
    primitive: Primitive,
    pub transform: AffineTransform,
    pub color: Option<Rgb>,
}

impl PrimitiveGene {
    pub fn disk(transform: AffineTransform, color: Option<Rgb>) -> Self {
        Self {
            primitive: Primitive::Disk,
            transform,
            color,
        }
    }

    pub fn square(transform: AffineTransform, color: Option<Rgb>) -> Self {
        Self {
            primitive: Primitive::Square,
            transform,
            color,
        }
    }

    /// Fails with `PolygonDefinition` when fewer than 3 vertices are given
    pub fn polygon(
        vertices: impl Into<Vec<Point>>,
        transform: AffineTransform,
        color: Option<Rgb>,
    ) -> Result<Self> {
        let vertices = vertices.into();
        if vertices.len() < 3 {
            return Err(SdfEvoError::PolygonDefinition {
                vertices: vertices.len(),
            });
        }
        Ok(Self {
            primitive: Primitive::Polygon {
                vertices: vertices.into(),
            },
            transform,
            color,
        })
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    pub fn kind(&self) -> ShapeKind {
        self.primitive.kind()
    }

    pub fn vertices(&self) -> Option<&[Point]> {
        self.primitive.vertices()
    }

    /// Own color, or the neutral default
    pub fn resolved_color(&self) -> Rgb {
        self.color.unwrap_or(Rgb::NEUTRAL)
    }

    /// Signed distance at a world point; `+inf` for a degenerate transform
    pub fn distance(&self, p: Point) -> f64 {
        match self.transform.apply_inverse(p) {
            Some(local) => self.primitive.local_sdf(local),
            None => f64::INFINITY,
        }
    }

    /// Copy with a different transform; vertex storage stays shared
    pub fn with_transform(&self, transform: AffineTransform) -> Self {
        Self {
            transform,
            ..self.clone()
        }
    }

    pub fn with_color(&self, color: Option<Rgb>) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }

    /// Draws a fresh primitive: uniform kind, placement within the sampling ranges
    pub fn random<R: Rng + ?Sized>(rng: &mut R, sampling: &SamplingConfig) -> Self {
        let (scale_lo, scale_hi) = sampling.scale_range;
        let (shift_lo, shift_hi) = sampling.translate_range;

        let kind = match rng.gen_range(0..3) {
            0 => ShapeKind::Disk,
            1 => ShapeKind::Square,
            _ => ShapeKind::Polygon,
        };

        let transform = AffineTransform::new(
            rng.gen_range(scale_lo..=scale_hi),
            rng.gen_range(scale_lo..=scale_hi),
            rng.gen_range(0.0..TAU),
            rng.gen_range(shift_lo..=shift_hi),
            rng.gen_range(shift_lo..=shift_hi),
        );
        let color = Some(Rgb([rng.gen(), rng.gen(), rng.gen()]));

        let primitive = match kind {
            ShapeKind::Disk => Primitive::Disk,
            ShapeKind::Square => Primitive::Square,
            ShapeKind::Polygon => {
                let (min_v, max_v) = sampling.polygon_vertices;
                let count = rng.gen_range(min_v.max(3)..=max_v.max(3));
                Primitive::Polygon {
                    vertices: random_star_polygon(rng, count).into(),
                }
            }
        };

        Self {
            primitive,
            transform,
            color,
        }
    }
}

/// Vertices at sorted angles around the origin, so the outline never self-intersects
fn random_star_polygon<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Point> {
    let mut angles: Vec<f64> = (0..count).map(|_| rng.gen_range(0.0..TAU)).collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    angles
        .into_iter()
        .map(|angle| {
            let radius = rng.gen_range(0.5..=1.0);
            let (sin, cos) = angle.sin_cos();
            Point::new(radius * cos, radius * sin)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_polygon_requires_three_vertices() {
        let result = PrimitiveGene::polygon(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            AffineTransform::IDENTITY,
            None,
        );
        assert!(matches!(
            result,
            Err(SdfEvoError::PolygonDefinition { vertices: 2 })
        ));
    }

    #[test]
    fn test_degenerate_transform_is_far_outside() {
        let gene = PrimitiveGene::disk(AffineTransform::uniform(0.0, 0.0, 0.0, 0.0), None);
        assert_eq!(gene.distance(Point::ORIGIN), f64::INFINITY);
    }

    #[test]
    fn test_scaled_disk_membership() {
        let gene = PrimitiveGene::disk(AffineTransform::new(2.0, 0.5, 0.0, 1.0, 0.0), None);
        assert!(gene.distance(Point::new(2.9, 0.0)) < 0.0);
        assert!(gene.distance(Point::new(1.0, 0.6)) > 0.0);
    }

    #[test]
    fn test_random_genes_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        let sampling = SamplingConfig::default();

        for _ in 0..200 {
            let gene = PrimitiveGene::random(&mut rng, &sampling);
            assert!(!gene.transform.is_degenerate());
            if let Some(vertices) = gene.vertices() {
                assert!(vertices.len() >= 3);
                assert!(vertices.len() <= sampling.polygon_vertices.1);
            }
            let [r, g, b] = gene.resolved_color().channels();
            assert!([r, g, b].iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_random_polygon_stays_within_unit_disk() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let vertices = random_star_polygon(&mut rng, 6);
            assert!(vertices.iter().all(|v| v.length() <= 1.0 + 1e-12));
            assert!(sdf::polygon(Point::new(10.0, 10.0), &vertices) > 0.0);
        }
    }
}
