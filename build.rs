//! Stamps the git commit and build time into the binary for `--version`.
//!
//! Each stamp can be pinned through the environment variable of the same
//! name; otherwise it is probed, and "unknown" is used when probing fails.

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

type Probe = fn() -> Option<String>;

const STAMPS: [(&str, Probe); 2] = [
    ("THEMESYNC_BUILD_GIT_HASH", git_commit),
    ("THEMESYNC_BUILD_TIMESTAMP", utc_timestamp),
];

fn main() {
    watch_git_head();
    for (name, probe) in STAMPS {
        println!("cargo:rerun-if-env-changed={name}");
        let value = env::var(name)
            .ok()
            .or_else(probe)
            .unwrap_or_else(|| "unknown".to_string());
        println!("cargo:rustc-env={name}={value}");
    }
}

/// Rebuild when HEAD moves or the checked-out branch gains a commit.
fn watch_git_head() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    let Ok(head) = fs::read_to_string(".git/HEAD") else {
        return;
    };
    if let Some(branch_ref) = head.trim().strip_prefix("ref: ") {
        println!("cargo:rerun-if-changed=.git/{branch_ref}");
    }
}

fn git_commit() -> Option<String> {
    command_stdout("git", &["rev-parse", "--short=12", "HEAD"])
}

fn utc_timestamp() -> Option<String> {
    command_stdout("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).or_else(|| {
        let secs = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs();
        Some(format!("unix:{secs}"))
    })
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
