//! Property runners shared by the proptest and rstest suites.

use proptest::prop_assert_eq;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{ClusterConfig, DisjointSet, ForestError, cluster_product, spanning_edge};

use super::oracle::{oracle_clusters, oracle_spanning_pair};
use super::types::ForestFixture;

/// Replays `script` and checks the disjoint-set invariants after each step.
///
/// - the component sizes always sum to `len`;
/// - `component_count` matches the number of reported sizes;
/// - a union leaves both endpoints connected;
/// - repeating a union returns `false`.
pub(super) fn run_disjoint_set_invariants(len: usize, script: &[(usize, usize)]) -> TestCaseResult {
    let mut set = DisjointSet::new(len);
    for &(left, right) in script {
        let before = set.component_count();
        let merged = set.union(left, right);
        prop_assert_eq!(set.component_count() + usize::from(merged), before);
        prop_assert_eq!(set.find(left), set.find(right));

        let after = set.component_count();
        prop_assert_eq!(set.union(left, right), false);
        prop_assert_eq!(set.union(right, left), false);
        prop_assert_eq!(set.component_count(), after);

        let sizes = set.component_sizes();
        prop_assert_eq!(sizes.iter().sum::<usize>(), len);
        prop_assert_eq!(sizes.len(), set.component_count());
    }
    Ok(())
}

/// Compares the cluster builder with the oracle for every feasible pick.
pub(super) fn run_cluster_equivalence(fixture: &ForestFixture) -> TestCaseResult {
    let sizes = oracle_clusters(&fixture.points, fixture.connections).sizes_descending();

    for pick in 0..=sizes.len() {
        let expected: u64 = sizes
            .iter()
            .take(pick)
            .map(|&size| u64::try_from(size).unwrap_or(u64::MAX))
            .product();
        let actual = cluster_product(
            &fixture.points,
            ClusterConfig::new(fixture.connections, pick),
        )
        .map_err(|err| fail(fixture, &err))?;
        prop_assert_eq!(actual, expected, "pick={}", pick);
    }

    let overshoot = sizes.len() + 1;
    let result = cluster_product(
        &fixture.points,
        ClusterConfig::new(fixture.connections, overshoot),
    );
    prop_assert_eq!(
        result,
        Err(ForestError::PickExceedsComponents {
            pick: overshoot,
            components: sizes.len(),
        })
    );
    Ok(())
}

/// Compares the spanning builder with the oracle's completing pair.
pub(super) fn run_spanning_equivalence(fixture: &ForestFixture) -> TestCaseResult {
    let spanning = spanning_edge(&fixture.points).map_err(|err| fail(fixture, &err))?;
    let expected = oracle_spanning_pair(&fixture.points)
        .ok_or_else(|| TestCaseError::fail("oracle found no spanning pair"))?;

    let edge = spanning.edge();
    prop_assert_eq!((edge.a(), edge.b()), expected);
    prop_assert_eq!(spanning.left(), fixture.points[expected.0]);
    prop_assert_eq!(spanning.right(), fixture.points[expected.1]);
    prop_assert_eq!(
        spanning.x_product(),
        i64::from(fixture.points[expected.0].x()) * i64::from(fixture.points[expected.1].x())
    );
    Ok(())
}

fn fail(fixture: &ForestFixture, err: &ForestError) -> TestCaseError {
    TestCaseError::fail(format!(
        "builder failed: {err} (layout={:?}, points={}, connections={})",
        fixture.layout,
        fixture.points.len(),
        fixture.connections,
    ))
}
