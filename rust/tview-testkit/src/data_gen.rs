//! Data generation utilities for testing.
//!
//! All generators are seeded, so a failing test reproduces.

use std::io::{Seek, SeekFrom, Write};

/// Generates `len` integers in `-1000..1000`.
pub fn random_i64s(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..len).map(|_| rng.i64(-1000..1000)).collect()
}

/// Generates a string of `len` ASCII capital letters.
pub fn random_upper_ascii(len: usize, seed: u64) -> String {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..len).map(|_| rng.uppercase()).collect()
}

/// Writes `values` to a temporary file, whitespace separated, a few per line.
///
/// The returned file is positioned at its start.
pub fn write_values_file(values: &[i64]) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    for line in values.chunks(7) {
        let line: Vec<String> = line.iter().map(i64::to_string).collect();
        writeln!(file, "{}", line.join(" "))?;
    }
    file.flush()?;
    file.seek(SeekFrom::Start(0))?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_are_seeded() {
        assert_eq!(random_i64s(50, 7), random_i64s(50, 7));
        let text = random_upper_ascii(64, 3);
        assert_eq!(text.len(), 64);
        assert!(text.bytes().all(|b| b.is_ascii_uppercase()));
    }

    #[test]
    fn test_write_values_file() -> anyhow::Result<()> {
        let values = random_i64s(20, 11);
        let file = write_values_file(&values)?;
        let text = std::fs::read_to_string(file.path())?;
        let parsed: Vec<i64> = text
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()?;
        assert_eq!(parsed, values);
        Ok(())
    }
}
