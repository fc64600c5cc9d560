//! Shared test utilities for appsearch.

pub mod fixtures;
pub mod logging;

/// Table-driven test case.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

/// Run table-driven cases, stopping at the first mismatch.
///
/// Each case is logged so a failing table shows which row broke.
pub fn run_table_tests<I, E, F>(cases: Vec<TestCase<I, E>>, test_fn: F) -> Result<(), String>
where
    I: std::fmt::Debug,
    E: std::fmt::Debug + PartialEq,
    F: Fn(&I) -> E,
{
    for case in cases {
        let start = std::time::Instant::now();
        let actual = test_fn(&case.input);
        let elapsed = start.elapsed();

        println!("[TEST] {}: input={:?} ({elapsed:?})", case.name, case.input);
        if actual != case.expected {
            return Err(format!(
                "case '{}' failed: expected {:?}, got {:?}",
                case.name, case.expected, actual
            ));
        }
    }
    Ok(())
}
