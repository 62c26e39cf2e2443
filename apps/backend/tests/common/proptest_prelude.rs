// Proptest configuration shared by integration tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 16).

use proptest::prelude::ProptestConfig;

pub fn proptest_prelude_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(16)
        .max(1);

    ProptestConfig {
        // Integration tests have no source file to persist regressions next to
        failure_persistence: None,
        cases,
        ..ProptestConfig::default()
    }
}
