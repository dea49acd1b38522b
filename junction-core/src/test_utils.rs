//! Shared test utilities for `junction-core`.

use junction_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

use crate::point::Point;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `JUNCTION_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Points drawn from a small cube so distance ties and duplicates are common.
pub(crate) fn point_strategy() -> impl Strategy<Value = Point> {
    (-8_i32..=8, -8_i32..=8, -8_i32..=8).prop_map(|(x, y, z)| Point::new(x, y, z))
}
