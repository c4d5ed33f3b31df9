use std::path::PathBuf;

fn main() {
    let manifest_dir = std::env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .expect("CARGO_MANIFEST_DIR is not set for the tview-testkit build script");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CARGO_MANIFEST_DIR");
    println!(
        "cargo:rustc-env=TVIEW_TESTKIT_SRC_DIR={}",
        manifest_dir.display()
    );
}
