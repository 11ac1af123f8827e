use std::process::Command;

/// Stamps `ACTIVITY_BROWSER_VERSION` and `ACTIVITY_BROWSER_COMMIT` into the
/// binaries. Either can be pinned from the environment by a packager.
fn main() {
    for var in ["ACTIVITY_BROWSER_VERSION", "ACTIVITY_BROWSER_COMMIT"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=.git/HEAD");

    let version = pinned("ACTIVITY_BROWSER_VERSION")
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    let commit = pinned("ACTIVITY_BROWSER_COMMIT")
        .or_else(git_short_head)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=ACTIVITY_BROWSER_VERSION={version}");
    println!("cargo:rustc-env=ACTIVITY_BROWSER_COMMIT={commit}");
}

fn pinned(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn git_short_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}
