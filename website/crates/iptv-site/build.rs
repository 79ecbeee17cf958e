//! Build script for iptv-site
//!
//! Stamps the binary with `BUILD_VERSION`, appended to the stylesheet URL so
//! browsers refetch it after each deploy.

use std::{env, process::Command};

fn main() {
    println!("cargo:rerun-if-env-changed=IPTV_BUILD_VERSION");
    println!("cargo:rerun-if-changed=../../public/css");
    println!("cargo:rerun-if-changed=../../../.git/HEAD");

    println!("cargo:rustc-env=BUILD_VERSION={}", build_version());
}

/// Explicit override, then the short commit hash, then the crate version.
fn build_version() -> String {
    if let Ok(version) = env::var("IPTV_BUILD_VERSION") {
        if !version.trim().is_empty() {
            return version.trim().to_string();
        }
    }

    Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "dev".to_string()))
}
