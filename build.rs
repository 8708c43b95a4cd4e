//! Stamps the commit the bundle was built from into `LOOKOUT_WEB_GIT_SHA`.
//! A value already present in the environment wins, so builds from a source
//! tarball can pass the commit in directly.

use std::{env, process::Command};

const SHA_VAR: &str = "LOOKOUT_WEB_GIT_SHA";

fn main() {
    for path in [".git/HEAD", ".git/refs", ".git/index"] {
        println!("cargo:rerun-if-changed={path}");
    }
    println!("cargo:rerun-if-env-changed={SHA_VAR}");

    let sha = env::var(SHA_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(head_sha)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env={SHA_VAR}={sha}");
}

/// Short hash of `HEAD`, suffixed with `-dirty` when the work tree has local edits.
fn head_sha() -> Option<String> {
    let sha = git(&["rev-parse", "--short", "HEAD"])?;
    if sha.is_empty() {
        return None;
    }
    let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
        .is_some_and(|status| !status.is_empty());
    Some(if dirty { format!("{sha}-dirty") } else { sha })
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|stdout| stdout.trim().to_string())
}
