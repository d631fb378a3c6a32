//! Well-known identifiers of the Go testing convention.

/// Name prefix of a test function (`func TestXxx(t *testing.T)`).
pub const TEST_PREFIX: &str = "Test";

/// Name prefix of a benchmark function (`func BenchmarkXxx(b *testing.B)`).
pub const BENCHMARK_PREFIX: &str = "Benchmark";

/// Package-supplied override that takes control of the harness.
pub const CUSTOM_ENTRYPOINT_NAME: &str = "TestMain";

/// Referenced type name a test parameter must point to (`*<qualifier>.T`).
pub const TEST_STATE_TYPE: &str = "T";

/// Referenced type name a benchmark parameter must point to (`*<qualifier>.B`).
pub const BENCHMARK_STATE_TYPE: &str = "B";

/// Referenced type name the custom entry point conventionally receives (`*testing.M`).
pub const MAIN_STATE_TYPE: &str = "M";

/// Import path of the harness package.
pub const HARNESS_PACKAGE: &str = "testing";

/// Alias the generated driver uses for the package under test.
pub const UNDER_TEST_ALIAS: &str = "undertest";

/// Name of the generated match-everything predicate.
pub const MATCH_ALL_FN: &str = "everything";

/// Package clause of the generated driver.
pub const DRIVER_PACKAGE: &str = "main";
