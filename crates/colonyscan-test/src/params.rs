//! Regression test parameters and operations

use colonyscan_core::Raster;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values and record failures (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the index of the
/// current comparison, the mode, and every recorded failure.
pub struct RegParams {
    /// Name of the test (e.g., "blobs")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        if !self.display() {
            self.failures.push(msg);
            self.success = false;
        }
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if the values match within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.record_failure(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality
    pub fn compare_rasters(&mut self, raster1: &Raster, raster2: &Raster) -> bool {
        self.index += 1;

        if !raster1.sizes_equal(raster2) {
            self.record_failure(format!(
                "Failure in {}_reg: raster comparison for index {} - size mismatch",
                self.test_name, self.index
            ));
            return false;
        }

        if raster1.data() != raster2.data() {
            let first_diff = raster1
                .data()
                .iter()
                .zip(raster2.data())
                .position(|(a, b)| a != b)
                .unwrap_or(0);
            self.record_failure(format!(
                "Failure in {}_reg: raster comparison for index {} - sample mismatch at byte {}",
                self.test_name, self.index, first_diff
            ));
            return false;
        }

        true
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colonyscan_core::SampleFormat;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_rasters() {
        let r1 = Raster::from_raw(2, 2, SampleFormat::Gray8, vec![1, 2, 3, 4]).unwrap();
        let r2 = r1.deep_clone();
        let r3 = Raster::from_raw(2, 2, SampleFormat::Gray8, vec![1, 2, 3, 5]).unwrap();
        let r4 = Raster::new(3, 3, SampleFormat::Gray8).unwrap();

        let mut rp = RegParams::new("test");
        assert!(rp.compare_rasters(&r1, &r2));
        assert!(!rp.compare_rasters(&r1, &r3));
        assert!(!rp.compare_rasters(&r1, &r4));
        assert!(!rp.is_success());
    }
}
