//! Otsu's global threshold selection
//!
//! Picks the intensity cut that maximizes the between-class variance of
//! the two pixel populations it induces. Works entirely on the histogram,
//! so it runs in constant time regardless of image size.

use colonyscan_core::Histogram;

/// Select a global threshold from an intensity histogram.
///
/// Bin counts are normalized to probabilities `p[i]`; with the global
/// mean `mu = sum(i * p[i])`, the scan accumulates the cumulative
/// probability `omega` and cumulative mean `mu_k` and evaluates
///
/// ```text
/// sigma_b^2 = (mu * omega - mu_k)^2 / (omega * (1 - omega))
/// ```
///
/// at every intensity where `0 < omega < 1`. The first intensity
/// achieving the maximum wins; later equal values do not replace it.
///
/// An empty histogram, or one with all mass in a single bin, admits no
/// split: no scanned index satisfies `0 < omega < 1` and the threshold
/// stays at 0. That is a defined result, not an error.
pub fn otsu_threshold(hist: &Histogram) -> u8 {
    let n = hist.total();
    if n == 0 {
        return 0;
    }

    let mut p = [0f64; 256];
    let mut global_mean = 0f64;
    for (i, &count) in hist.counts().iter().enumerate() {
        p[i] = count as f64 / n as f64;
        global_mean += i as f64 * p[i];
    }

    let mut threshold = 0u8;
    let mut best_variance = 0f64;
    let mut omega = 0f64;
    let mut mu_k = 0f64;

    for (i, &prob) in p.iter().enumerate() {
        mu_k += i as f64 * prob;
        omega += prob;

        if omega > 0.0 && omega < 1.0 {
            let variance = (global_mean * omega - mu_k).powi(2) / (omega * (1.0 - omega));
            if variance > best_variance {
                best_variance = variance;
                threshold = i as u8;
            }
        }
    }

    threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist_from_pairs(pairs: &[(u8, u32)]) -> Histogram {
        let mut hist = Histogram::new();
        for &(value, count) in pairs {
            for _ in 0..count {
                hist.add(value);
            }
        }
        hist
    }

    #[test]
    fn test_bimodal_split() {
        // Two well-separated modes; the cut must land between them.
        let hist = hist_from_pairs(&[(20, 500), (200, 500)]);
        let t = otsu_threshold(&hist);
        assert!((20..200).contains(&t), "threshold {} not between modes", t);
    }

    #[test]
    fn test_deterministic() {
        let hist = hist_from_pairs(&[(10, 300), (90, 100), (220, 400)]);
        let t1 = otsu_threshold(&hist);
        let t2 = otsu_threshold(&hist);
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_degenerate_single_intensity() {
        // All mass at one intensity: no split possible, threshold stays 0.
        let hist = hist_from_pairs(&[(100, 1000)]);
        assert_eq!(otsu_threshold(&hist), 0);
    }

    #[test]
    fn test_degenerate_empty() {
        let hist = Histogram::new();
        assert_eq!(otsu_threshold(&hist), 0);
    }

    #[test]
    fn test_first_maximum_wins() {
        // Two equal modes give a variance plateau over [100, 150); the
        // scan must keep the earliest maximizing intensity.
        let hist = hist_from_pairs(&[(100, 400), (150, 400)]);
        assert_eq!(otsu_threshold(&hist), 100);

        let mirrored = hist_from_pairs(&[(105, 400), (155, 400)]);
        assert_eq!(otsu_threshold(&mirrored), 105);
    }
}
