use anyhow::{Context, Result};
use std::{fs, path::Path};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Read a pasted-locations file for a draw simulation.
pub fn read_location_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading locations from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" alpha, ,beta,  gamma ");
        assert_eq!(parts, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn missing_location_file_names_the_path() {
        let path = std::env::temp_dir().join("streetview-missing-locations.txt");
        let err = read_location_file(&path).expect_err("file should be missing");
        assert!(format!("{err:#}").contains("streetview-missing-locations.txt"));
    }
}
