use crate::error::{Result, SdfEvoError};
use crate::genome::Genome;
use rand::Rng;

/// Grafts a uniformly chosen subtree of `parent_b` over a uniformly chosen
/// node of `parent_a`. Any node is a valid graft point, leaves included.
pub fn crossover<R: Rng + ?Sized>(
    parent_a: &Genome,
    parent_b: &Genome,
    rng: &mut R,
) -> Result<Genome> {
    let target = rng.gen_range(0..parent_a.node_count());
    let source = rng.gen_range(0..parent_b.node_count());
    crossover_at(parent_a, target, parent_b, source)
}

/// Deterministic graft: node `source` of `parent_b` replaces node `target` of `parent_a`
pub fn crossover_at(
    parent_a: &Genome,
    target: usize,
    parent_b: &Genome,
    source: usize,
) -> Result<Genome> {
    let donor = parent_b.subtree(source).ok_or_else(|| {
        SdfEvoError::StructuralInvariant(format!(
            "Donor index {} out of range for genome with {} nodes",
            source,
            parent_b.node_count()
        ))
    })?;
    parent_a.replace_subtree(target, donor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{GenomeNode, PrimitiveGene};
    use crate::geometry::AffineTransform;
    use crate::types::BoolOp;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn leaf_disk() -> Genome {
        PrimitiveGene::disk(AffineTransform::IDENTITY, None).into()
    }

    fn leaf_square() -> Genome {
        PrimitiveGene::square(AffineTransform::IDENTITY, None).into()
    }

    #[test]
    fn test_graft_into_right_branch() {
        let a = Genome::combine(BoolOp::Union, leaf_disk(), leaf_disk());
        let b = Genome::combine(BoolOp::Intersection, leaf_square(), leaf_square());

        let child = crossover_at(&a, 2, &b, 0).unwrap();
        assert_eq!(child.to_string(), "(disk ∪ (square ∩ square))");

        let GenomeNode::Op { left: a_left, .. } = a.root().as_ref() else {
            panic!("expected operator root");
        };
        let GenomeNode::Op {
            left: child_left,
            right: child_right,
            ..
        } = child.root().as_ref()
        else {
            panic!("expected operator root");
        };
        assert!(Arc::ptr_eq(a_left, child_left));
        assert!(Arc::ptr_eq(child_right, b.root()));
    }

    #[test]
    fn test_single_leaf_parents() {
        let child = crossover_at(&leaf_disk(), 0, &leaf_square(), 0).unwrap();
        assert_eq!(child, leaf_square());
    }

    #[test]
    fn test_out_of_range_donor() {
        assert!(matches!(
            crossover_at(&leaf_disk(), 0, &leaf_square(), 3),
            Err(SdfEvoError::StructuralInvariant(_))
        ));
    }

    #[test]
    fn test_random_crossover_preserves_invariants() {
        let a = Genome::combine(
            BoolOp::Difference,
            Genome::combine(BoolOp::Union, leaf_disk(), leaf_square()),
            leaf_disk(),
        );
        let b = Genome::combine(BoolOp::Intersection, leaf_square(), leaf_disk());
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..100 {
            let child = crossover(&a, &b, &mut rng).unwrap();
            assert!(child.validate().is_ok());
            let stats = child.stats();
            assert_eq!(stats.primitives, stats.operations + 1);
        }
    }
}
