#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Tracker export used across the integration tests.
///
/// Five bills: one with two authors, one undated ("TBD"), one without an
/// author. Normalized it gives five dated records and one undated record.
pub const SAMPLE_EXPORT: &str = r#"[
    {
        "Author(s)": "Sen. Smith, Rep. Jones",
        "Original Introduction Date:": "2020-01-15",
        "Main policy topic": "Voting Access",
        "Current Link (Inc. Amndt, if applicable)": "HB 101 https://legis.example/hb101",
        "Method of Enactment": "Signed",
        "hyperlink": "https://legis.example/hb101"
    },
    {
        "Author(s)": "Sen. Smith",
        "Original Introduction Date:": "03/02/2021",
        "Main policy topic": "Health",
        "Current Link (Inc. Amndt, if applicable)": "SB 7",
        "Method of Enactment": "Veto Override",
        "hyperlink": "https://legis.example/sb7"
    },
    {
        "Author(s)": "Rep. Lee",
        "Original Introduction Date:": "2021-07-04",
        "Main policy topic": "Voting Access",
        "Current Link (Inc. Amndt, if applicable)": "HB 202",
        "Method of Enactment": "Signed"
    },
    {
        "Author(s)": "Rep. Lee",
        "Original Introduction Date:": "TBD",
        "Main policy topic": "Education",
        "Current Link (Inc. Amndt, if applicable)": "HB 303",
        "Method of Enactment": "Signed"
    },
    {
        "Author(s)": null,
        "Original Introduction Date:": "2022-01-01",
        "Main policy topic": "Health",
        "Current Link (Inc. Amndt, if applicable)": "SR 9",
        "Method of Enactment": "Resolution"
    }
]"#;

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
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
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
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
