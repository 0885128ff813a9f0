//! Plain-data mirror of a genome for persistence and inspection.
//!
//! Leaves read as `{"primitive": {...}}` and operators as
//! `{"op": "union", "children": [...]}`. The conversion is lossless in both
//! directions; choosing where and how the data is stored is left to callers.

use super::gene::PrimitiveGene;
use super::node::{Genome, GenomeNode};
use crate::error::{Result, SdfEvoError};
use crate::geometry::AffineTransform;
use crate::types::{BoolOp, Point, Rgb, ShapeKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveRecord {
    pub kind: ShapeKind,
    pub transform: AffineTransform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_rgb: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon_vertices: Option<Vec<[f64; 2]>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Composition {
    Primitive { primitive: PrimitiveRecord },
    Op { op: BoolOp, children: Vec<Composition> },
}

impl Composition {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl From<&PrimitiveGene> for PrimitiveRecord {
    fn from(gene: &PrimitiveGene) -> Self {
        Self {
            kind: gene.kind(),
            transform: gene.transform,
            color_rgb: gene.color,
            polygon_vertices: gene
                .vertices()
                .map(|vertices| vertices.iter().map(|v| [v.x, v.y]).collect()),
        }
    }
}

impl TryFrom<PrimitiveRecord> for PrimitiveGene {
    type Error = SdfEvoError;

    /// Stored colors are clamped back into [0, 1]
    fn try_from(record: PrimitiveRecord) -> Result<Self> {
        let color = record.color_rgb.map(Rgb::clamped);
        Ok(match record.kind {
            ShapeKind::Disk => PrimitiveGene::disk(record.transform, color),
            ShapeKind::Square => PrimitiveGene::square(record.transform, color),
            ShapeKind::Polygon => {
                let vertices: Vec<Point> = record
                    .polygon_vertices
                    .unwrap_or_default()
                    .into_iter()
                    .map(|[x, y]| Point::new(x, y))
                    .collect();
                PrimitiveGene::polygon(vertices, record.transform, color)?
            }
        })
    }
}

impl From<&GenomeNode> for Composition {
    fn from(node: &GenomeNode) -> Self {
        match node {
            GenomeNode::Leaf(gene) => Composition::Primitive {
                primitive: gene.into(),
            },
            GenomeNode::Op { op, left, right } => Composition::Op {
                op: *op,
                children: vec![left.as_ref().into(), right.as_ref().into()],
            },
        }
    }
}

impl From<&Genome> for Composition {
    fn from(genome: &Genome) -> Self {
        genome.root().as_ref().into()
    }
}

fn build_node(composition: Composition) -> Result<Arc<GenomeNode>> {
    match composition {
        Composition::Primitive { primitive } => {
            Ok(Arc::new(GenomeNode::Leaf(primitive.try_into()?)))
        }
        Composition::Op { op, children } => {
            let count = children.len();
            let [left, right]: [Composition; 2] = children.try_into().map_err(|_| {
                SdfEvoError::StructuralInvariant(format!(
                    "Operator {:?} needs exactly 2 children, got {}",
                    op, count
                ))
            })?;
            Ok(GenomeNode::op(op, build_node(left)?, build_node(right)?))
        }
    }
}

impl TryFrom<Composition> for Genome {
    type Error = SdfEvoError;

    fn try_from(composition: Composition) -> Result<Self> {
        Ok(Genome::from_root(build_node(composition)?))
    }
}

/// Stable text form of a genome, used to spot duplicates.
///
/// Floats are written with `{:?}`, which round-trips exactly and keeps
/// `NaN`, `inf` and `-0.0` apart.
pub fn canonical_string(genome: &Genome) -> String {
    let mut out = String::new();
    write_canonical(genome.root(), &mut out);
    out
}

fn write_canonical(node: &GenomeNode, out: &mut String) {
    match node {
        GenomeNode::Leaf(gene) => {
            let t = gene.transform;
            out.push_str(&format!(
                "{}[{:?},{:?},{:?},{:?},{:?}]",
                gene.kind().name(),
                t.sx,
                t.sy,
                t.theta,
                t.dx,
                t.dy
            ));
            for v in gene.vertices().unwrap_or_default() {
                out.push_str(&format!("({:?},{:?})", v.x, v.y));
            }
            match gene.color {
                Some(Rgb([r, g, b])) => out.push_str(&format!("#{:?},{:?},{:?}", r, g, b)),
                None => out.push_str("#none"),
            }
        }
        GenomeNode::Op { op, left, right } => {
            out.push_str(&format!("{:?}(", op));
            write_canonical(left, out);
            out.push(',');
            write_canonical(right, out);
            out.push(')');
        }
    }
}
