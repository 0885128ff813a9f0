use super::gene::PrimitiveGene;
use crate::error::{Result, SdfEvoError};
use crate::types::BoolOp;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Node of a genome tree. Operator nodes always have exactly two children;
/// children are immutable and may be shared between genomes.
#[derive(Debug, Clone, PartialEq)]
pub enum GenomeNode {
    Leaf(PrimitiveGene),
    Op {
        op: BoolOp,
        left: Arc<GenomeNode>,
        right: Arc<GenomeNode>,
    },
}

impl GenomeNode {
    pub fn op(op: BoolOp, left: Arc<GenomeNode>, right: Arc<GenomeNode>) -> Arc<GenomeNode> {
        Arc::new(GenomeNode::Op { op, left, right })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, GenomeNode::Leaf(_))
    }

    pub fn node_count(&self) -> usize {
        match self {
            GenomeNode::Leaf(_) => 1,
            GenomeNode::Op { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            GenomeNode::Leaf(_) => 1,
            GenomeNode::Op { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// A lone leaf has depth 1
    pub fn depth(&self) -> usize {
        match self {
            GenomeNode::Leaf(_) => 1,
            GenomeNode::Op { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl fmt::Display for GenomeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenomeNode::Leaf(gene) => match gene.vertices() {
                Some(vertices) => write!(f, "polygon({})", vertices.len()),
                None => f.write_str(gene.kind().name()),
            },
            GenomeNode::Op { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
        }
    }
}

/// Size summary of a genome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenomeStats {
    pub primitives: usize,
    pub operations: usize,
    pub depth: usize,
}

/// Rooted binary tree of primitives joined by boolean operators.
///
/// Cloning is cheap: only the root pointer is copied. Nodes are addressed by
/// pre-order index (root is 0, then the left subtree, then the right one).
#[derive(Debug, Clone, PartialEq)]
pub struct Genome {
    root: Arc<GenomeNode>,
}

impl From<PrimitiveGene> for Genome {
    fn from(gene: PrimitiveGene) -> Self {
        Genome::leaf(gene)
    }
}

impl Genome {
    pub fn leaf(gene: PrimitiveGene) -> Self {
        Self {
            root: Arc::new(GenomeNode::Leaf(gene)),
        }
    }

    pub fn combine(op: BoolOp, left: Genome, right: Genome) -> Self {
        Self {
            root: GenomeNode::op(op, left.root, right.root),
        }
    }

    pub fn from_root(root: Arc<GenomeNode>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Arc<GenomeNode> {
        &self.root
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn stats(&self) -> GenomeStats {
        let primitives = self.root.leaf_count();
        GenomeStats {
            primitives,
            operations: self.node_count() - primitives,
            depth: self.root.depth(),
        }
    }

    /// All nodes in pre-order
    pub fn nodes(&self) -> Vec<&Arc<GenomeNode>> {
        fn walk<'a>(node: &'a Arc<GenomeNode>, out: &mut Vec<&'a Arc<GenomeNode>>) {
            out.push(node);
            if let GenomeNode::Op { left, right, .. } = node.as_ref() {
                walk(left, out);
                walk(right, out);
            }
        }

        let mut out = Vec::with_capacity(self.node_count());
        walk(&self.root, &mut out);
        out
    }

    pub fn leaves(&self) -> impl Iterator<Item = &PrimitiveGene> {
        self.nodes().into_iter().filter_map(|node| match node.as_ref() {
            GenomeNode::Leaf(gene) => Some(gene),
            GenomeNode::Op { .. } => None,
        })
    }

    pub fn subtree(&self, index: usize) -> Option<Arc<GenomeNode>> {
        self.nodes().get(index).map(|node| Arc::clone(node))
    }

    /// New genome with the node at `index` replaced; everything off the
    /// root-to-index path stays shared with `self`.
    pub fn replace_subtree(&self, index: usize, replacement: Arc<GenomeNode>) -> Result<Genome> {
        let count = self.node_count();
        if index >= count {
            return Err(SdfEvoError::StructuralInvariant(format!(
                "Node index {} out of range for genome with {} nodes",
                index, count
            )));
        }
        Ok(Genome {
            root: replace_at(&self.root, index, replacement),
        })
    }

    /// Checks the invariants mutation and crossover must preserve
    pub fn validate(&self) -> Result<()> {
        for node in self.nodes() {
            if let GenomeNode::Leaf(gene) = node.as_ref() {
                if let Some(vertices) = gene.vertices() {
                    if vertices.len() < 3 {
                        return Err(SdfEvoError::StructuralInvariant(format!(
                            "Polygon leaf with {} vertices",
                            vertices.len()
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

fn replace_at(
    node: &Arc<GenomeNode>,
    index: usize,
    replacement: Arc<GenomeNode>,
) -> Arc<GenomeNode> {
    if index == 0 {
        return replacement;
    }
    match node.as_ref() {
        GenomeNode::Op { op, left, right } => {
            let left_size = left.node_count();
            if index <= left_size {
                GenomeNode::op(*op, replace_at(left, index - 1, replacement), Arc::clone(right))
            } else {
                GenomeNode::op(
                    *op,
                    Arc::clone(left),
                    replace_at(right, index - 1 - left_size, replacement),
                )
            }
        }
        // callers bounds-check against node_count, so a leaf is only reached at index 0
        GenomeNode::Leaf(_) => Arc::clone(node),
    }
}
