//! Locating test resources.
//!
//! Sample files live under `$repo_root/test/samples`; paths are resolved relative
//! to the testkit's source directory, recorded at build time.

use std::path::PathBuf;

/// The source directory path for the `tview-testkit`, set at compile time
/// (provided by the build script).
pub const TESTKIT_SRC_DIR_STR: &str = env!("TVIEW_TESTKIT_SRC_DIR");

/// Returns the path to the testkit source directory.
pub fn get_testkit_src_dir() -> anyhow::Result<PathBuf> {
    let res = PathBuf::from(TESTKIT_SRC_DIR_STR);
    if !res.is_dir() {
        anyhow::bail!("{} not found", res.display());
    }
    Ok(res)
}

/// Returns the path to the test samples directory (`$repo_root/test/samples`).
///
/// The testkit sits at `$repo_root/rust/tview-testkit`.
pub fn get_test_samples_dir() -> anyhow::Result<PathBuf> {
    let src_dir = get_testkit_src_dir()?;
    let repo_root = src_dir
        .ancestors()
        .nth(2)
        .ok_or_else(|| anyhow::anyhow!("no repository root above {}", src_dir.display()))?;
    let samples_dir = repo_root.join("test").join("samples");
    anyhow::ensure!(samples_dir.is_dir(), "{} not found", samples_dir.display());
    Ok(samples_dir)
}

/// Returns the path of a file under the samples directory.
pub fn get_sample_path(name: &str) -> anyhow::Result<PathBuf> {
    let path = get_test_samples_dir()?.join(name);
    anyhow::ensure!(path.is_file(), "sample {} not found", path.display());
    Ok(path)
}
