//! Domain-specific assertion macros for repbench harnesses.
//!
//! These add context-rich failure messages naming the job key and the whole
//! table, so a failing harness shows what the scan actually produced.

// ---------------------------------------------------------------------------
// Outcome assertions
// ---------------------------------------------------------------------------

/// Assert that `key` resolved to a success with the given seconds.
///
/// Seconds are compared with a 1e-9 tolerance.
///
/// ```rust
/// assert_success!(table, "hg19/chr1.fa", real = 42.37, user = 41.2, sys = 0.93);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($table:expr, $key:expr, real = $real:expr, user = $user:expr, sys = $sys:expr) => {{
        let table: &repbench_core::ResultTable = &$table;
        let key: &str = $key;
        match table.get(key) {
            Some(repbench_core::Outcome::Success {
                real_seconds,
                user_seconds,
                sys_seconds,
            }) => {
                let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
                if !(close(*real_seconds, $real)
                    && close(*user_seconds, $user)
                    && close(*sys_seconds, $sys))
                {
                    panic!(
                        "assert_success! failed for {:?}:\n  expected: real={} user={} sys={}\n  actual:   real={} user={} sys={}",
                        key, $real, $user, $sys, real_seconds, user_seconds, sys_seconds
                    );
                }
            }
            Some(other) => panic!(
                "assert_success! failed: {:?} resolved to {}\n  table: {:?}",
                key, other, table
            ),
            None => panic!(
                "assert_success! failed: {:?} not in table.\n  table: {:?}",
                key, table
            ),
        }
    }};
}

/// Assert that `key` resolved to a failure.
#[macro_export]
macro_rules! assert_failure {
    ($table:expr, $key:expr) => {{
        let table: &repbench_core::ResultTable = &$table;
        let key: &str = $key;
        match table.get(key) {
            Some(repbench_core::Outcome::Failure) => {}
            Some(other) => panic!(
                "assert_failure! failed: {:?} resolved to {}\n  table: {:?}",
                key, other, table
            ),
            None => panic!(
                "assert_failure! failed: {:?} not in table.\n  table: {:?}",
                key, table
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Table shape assertions
// ---------------------------------------------------------------------------

/// Assert the table's keys, in row order.
///
/// ```rust
/// assert_keys!(table, ["hg19/chr1.fa", "hg19/chr2.fa"]);
/// ```
#[macro_export]
macro_rules! assert_keys {
    ($table:expr, [$($key:expr),* $(,)?]) => {{
        let table: &repbench_core::ResultTable = &$table;
        let actual: Vec<&str> = table.iter().map(|r| r.key.as_str()).collect();
        let expected: Vec<&str> = vec![$($key),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_keys! failed");
    }};
}

/// Assert that no key appears twice in the table.
#[macro_export]
macro_rules! assert_unique_keys {
    ($table:expr) => {{
        let table: &repbench_core::ResultTable = &$table;
        let mut seen = std::collections::HashSet::new();
        for record in table.iter() {
            if !seen.insert(record.key.as_str()) {
                panic!(
                    "assert_unique_keys! failed: {:?} appears more than once.\n  table: {:?}",
                    record.key, table
                );
            }
        }
    }};
}
