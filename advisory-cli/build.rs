//! Stamps the binary with the checkout it was built from.

use std::path::Path;
use std::process::Command;

fn git(repo: &Path, args: &[&str]) -> Option<String> {
    let out = Command::new("git").arg("-C").arg(repo).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8(out.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let repo = Path::new(&manifest_dir).join("..");

    // rerun on commits and staging, not on every source edit
    for marker in [".git/HEAD", ".git/index"] {
        let path = repo.join(marker);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }

    let build = git(&repo, &["describe", "--always", "--dirty", "--abbrev=8"]).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=CROP_ADVISORY_BUILD_SHA={build}");
}
