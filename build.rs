use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=COURSE_CATALOG_PATH_HINT");
    println!("cargo:rerun-if-changed=build.rs");

    let hint = env::var("COURSE_CATALOG_PATH_HINT")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            env::var("CARGO_MANIFEST_DIR")
                .ok()
                .map(|dir| PathBuf::from(dir).join("data").join("courses.json"))
        });

    if let Some(candidate) = hint {
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!(
            "cargo:rustc-env=COURSE_CATALOG_PATH_HINT={}",
            canonical.display()
        );
    }
}
