use std::process::Command;

/// Output of `git rev-parse <args> HEAD`, or "unknown" outside a checkout.
fn git_rev(args: &[&str]) -> String {
    Command::new("git")
        .arg("rev-parse")
        .args(args)
        .arg("HEAD")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |hash| hash.trim().to_string())
}

fn main() {
    // shown by `tetrad --version` and the bench header
    println!("cargo:rustc-env=GIT_HASH={}", git_rev(&["--short"]));

    println!("cargo:rerun-if-changed=.git/HEAD");
}
