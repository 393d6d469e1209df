#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::sync::Mutex;

use spacex_dash::models::{LaunchRecord, OutcomeClass};
use tempfile::NamedTempFile;

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub const CSV_HEADER: &str =
    "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n";

/// The three-launch scenario: A succeeds at 500 kg, fails at 1500 kg; B succeeds at 3000 kg.
pub fn scenario_records() -> Vec<LaunchRecord> {
    vec![
        LaunchRecord::new("A", 500.0, OutcomeClass::Success, "v1"),
        LaunchRecord::new("A", 1500.0, OutcomeClass::Failure, "v1"),
        LaunchRecord::new("B", 3000.0, OutcomeClass::Success, "v2"),
    ]
}

/// Same scenario as CSV text, in the column layout of the real dataset.
pub fn scenario_csv() -> String {
    format!(
        "{}1,A,1,500,v1,v1\n2,A,0,1500,v1,v1\n3,B,1,3000,v2,v2\n",
        CSV_HEADER
    )
}

/// Write `content` to a temporary CSV file.
pub fn write_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    write!(file, "{}", content).expect("write temp csv");
    file
}

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
