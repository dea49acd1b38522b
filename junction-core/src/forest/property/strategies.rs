//! Strategy builders for forest property tests.
//!
//! Point sets are generated from a seeded [`SmallRng`] so rstest cases can
//! replay a specific layout deterministically.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Point;

use super::types::{ForestFixture, PointLayout};

/// Minimum point count for generated fixtures.
const MIN_POINTS: usize = 2;
/// Maximum point count; edge generation is quadratic.
const MAX_POINTS: usize = 40;

/// Generates forest fixtures across every [`PointLayout`].
pub(super) fn forest_fixture_strategy() -> impl Strategy<Value = ForestFixture> {
    (any::<PointLayout>(), any::<u64>()).prop_map(|(layout, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(layout, &mut rng)
    })
}

/// Generates a sequence of union operations over `0..len`.
pub(super) fn union_script_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1_usize..=48).prop_flat_map(|len| {
        let pair = (0..len, 0..len);
        (Just(len), prop::collection::vec(pair, 0..96))
    })
}

/// Generates a fixture for a specific layout.
pub(super) fn generate_fixture(layout: PointLayout, rng: &mut SmallRng) -> ForestFixture {
    let count = rng.gen_range(MIN_POINTS..=MAX_POINTS);
    let points = match layout {
        PointLayout::Scattered => scattered(rng, count, 1_000),
        PointLayout::Clustered => clustered(rng, count),
        PointLayout::Collinear => collinear(count),
        PointLayout::Duplicates => duplicates(rng, count),
    };
    let pairs = count * (count - 1) / 2;
    let connections = rng.gen_range(0..=pairs + 2);
    ForestFixture {
        points,
        connections,
        layout,
    }
}

fn random_point(rng: &mut SmallRng, bound: i32) -> Point {
    Point::new(
        rng.gen_range(-bound..=bound),
        rng.gen_range(-bound..=bound),
        rng.gen_range(-bound..=bound),
    )
}

fn scattered(rng: &mut SmallRng, count: usize, bound: i32) -> Vec<Point> {
    (0..count).map(|_| random_point(rng, bound)).collect()
}

fn clustered(rng: &mut SmallRng, count: usize) -> Vec<Point> {
    let centres: Vec<Point> = (0..rng.gen_range(1..=4))
        .map(|_| random_point(rng, 10_000))
        .collect();
    (0..count)
        .map(|index| {
            let centre = centres[index % centres.len()];
            let offset = random_point(rng, 5);
            Point::new(
                centre.x() + offset.x(),
                centre.y() + offset.y(),
                centre.z() + offset.z(),
            )
        })
        .collect()
}

fn collinear(count: usize) -> Vec<Point> {
    (0..count)
        .map(|x| Point::new(i32::try_from(x).unwrap_or(i32::MAX), 0, 0))
        .collect()
}

fn duplicates(rng: &mut SmallRng, count: usize) -> Vec<Point> {
    let mut points = scattered(rng, count, 20);
    for index in 1..count {
        if rng.gen_bool(0.4) {
            points[index] = points[rng.gen_range(0..index)];
        }
    }
    points
}
