use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sdfevo::config::SamplingConfig;
use sdfevo::engines::generation::random_genome;
use sdfevo::geometry::{compose, AffineTransform};
use sdfevo::{BoolOp, Genome, Point, PrimitiveGene, ShapeEvaluator};

fn random_points(rng: &mut StdRng, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| Point::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)))
        .collect()
}

#[test]
fn test_membership_follows_boolean_algebra() {
    let evaluator = ShapeEvaluator::new();
    let sampling = SamplingConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..40 {
        let a = random_genome(rng.gen_range(1..4), &mut rng, &sampling);
        let b = random_genome(rng.gen_range(1..4), &mut rng, &sampling);
        let union = Genome::combine(BoolOp::Union, a.clone(), b.clone());
        let inter = Genome::combine(BoolOp::Intersection, a.clone(), b.clone());
        let diff = Genome::combine(BoolOp::Difference, a.clone(), b.clone());

        for p in random_points(&mut rng, 50) {
            let in_a = evaluator.contains(&a, p);
            let in_b = evaluator.contains(&b, p);

            assert_eq!(evaluator.contains(&union, p), in_a || in_b);
            assert_eq!(evaluator.contains(&inter, p), in_a && in_b);
            assert_eq!(evaluator.contains(&diff, p), in_a && !in_b);
        }
    }
}

#[test]
fn test_disk_union_square_scenario() {
    let evaluator = ShapeEvaluator::new();
    let union = Genome::combine(
        BoolOp::Union,
        PrimitiveGene::disk(AffineTransform::IDENTITY, None).into(),
        PrimitiveGene::square(AffineTransform::IDENTITY, None).into(),
    );

    assert!(evaluator.eval(&union, Point::new(0.0, 0.0)).inside);
    assert!(!evaluator.eval(&union, Point::new(2.0, 2.0)).inside);
}

#[test]
fn test_triangle_scenario() {
    let evaluator = ShapeEvaluator::new();
    let triangle: Genome = PrimitiveGene::polygon(
        vec![Point::new(0.0, 1.0), Point::new(-1.0, -1.0), Point::new(1.0, -1.0)],
        AffineTransform::IDENTITY,
        None,
    )
    .unwrap()
    .into();

    assert!(evaluator.eval(&triangle, Point::new(0.0, -1.0 / 3.0)).inside);
    assert!(!evaluator.eval(&triangle, Point::new(10.0, 10.0)).inside);
}

#[test]
fn test_identity_composition_and_inverse_mapping() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..100 {
        let t = AffineTransform::new(
            rng.gen_range(0.05..3.0),
            rng.gen_range(0.05..3.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
        );
        assert_eq!(compose(&t, &AffineTransform::IDENTITY), t.to_matrix());

        for p in random_points(&mut rng, 5) {
            let back = t.apply_inverse(t.apply_forward(p)).unwrap();
            assert!(back.distance(p) < 1e-9, "{:?} came back as {:?}", p, back);
        }
    }
}

#[test]
fn test_inside_agrees_with_distance_sign_for_leaves() {
    let evaluator = ShapeEvaluator::new();
    let sampling = SamplingConfig::default();
    let mut rng = StdRng::seed_from_u64(77);

    for _ in 0..30 {
        let leaf: Genome = PrimitiveGene::random(&mut rng, &sampling).into();
        for p in random_points(&mut rng, 40) {
            let sample = evaluator.eval(&leaf, p);
            assert_eq!(sample.inside, sample.distance <= 0.0);
        }
    }
}
