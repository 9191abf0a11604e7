//! Mann–Whitney U test wrapper for per-condition comparisons.
//!
//! Downstream analysis compares occupancy-derived measurements between
//! experimental conditions. This module reproduces the reporting that
//! workflow expects: the U statistic with a tie-corrected normal
//! approximation for the two-sided p-value, the rank-biserial-style effect
//! size `U / (n1·n2)`, a normal-approximation confidence interval on that
//! ratio, post-hoc power, and per-sample descriptive statistics.

use scilib::math::basic::erf;
use serde::Serialize;
use std::f64::consts::SQRT_2;
use std::fmt;

/// Reasons why the test cannot run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsError {
    EmptySample {
        /// Which argument was empty, `"first"` or `"second"`.
        which: &'static str,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::EmptySample { which } => {
                write!(f, "{which} sample is empty")
            }
        }
    }
}

impl std::error::Error for StatsError {}

/// Descriptive statistics for one sample.
#[derive(Clone, Debug, Serialize)]
pub struct SampleSummary {
    pub name: String,
    pub median: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub size: usize,
}

/// Full Mann–Whitney U test report.
#[derive(Clone, Debug, Serialize)]
pub struct MannWhitneyReport {
    /// U statistic for the first sample (average ranks on ties).
    pub u_statistic: f64,
    /// Two-sided p-value from the tie- and continuity-corrected normal
    /// approximation.
    pub p_value: f64,
    /// `U / (n1·n2)`.
    pub effect_size: f64,
    pub ci_low: f64,
    pub ci_high: f64,
    /// Post-hoc power at the requested significance level.
    pub power: f64,
    pub alpha: f64,
    /// True when `p_value <= alpha`.
    pub significant: bool,
    pub first: SampleSummary,
    pub second: SampleSummary,
}

/// Run the two-sided Mann–Whitney U test on two independent samples.
pub fn mann_whitney_u(
    first: &[f64],
    second: &[f64],
    alpha: f64,
    first_name: &str,
    second_name: &str,
) -> Result<MannWhitneyReport, StatsError> {
    if first.is_empty() {
        return Err(StatsError::EmptySample { which: "first" });
    }
    if second.is_empty() {
        return Err(StatsError::EmptySample { which: "second" });
    }
    let n1 = first.len() as f64;
    let n2 = second.len() as f64;
    let n = n1 + n2;

    let combined: Vec<f64> = first.iter().chain(second).copied().collect();
    let (ranks, tie_sum) = average_ranks(&combined);
    let rank_sum_first: f64 = ranks[..first.len()].iter().sum();
    let u_statistic = rank_sum_first - n1 * (n1 + 1.0) / 2.0;

    // Tie-corrected variance of U under H0.
    let mean_u = n1 * n2 / 2.0;
    let variance = n1 * n2 / 12.0 * ((n + 1.0) - tie_sum / (n * (n - 1.0)));
    let p_value = if variance <= 0.0 {
        1.0
    } else {
        let shift = u_statistic - mean_u;
        // Continuity correction shrinks |shift| by 0.5, never past zero.
        let corrected = shift.signum() * (shift.abs() - 0.5).max(0.0);
        let z = corrected / variance.sqrt();
        (2.0 * (1.0 - normal_cdf(z.abs()))).min(1.0)
    };

    let effect_size = u_statistic / (n1 * n2);
    let z_critical = normal_ppf(1.0 - alpha / 2.0);
    let se = (n1 * n2 * (n + 1.0) / 12.0).sqrt();
    let ci_low = (u_statistic - z_critical * se) / (n1 * n2);
    let ci_high = (u_statistic + z_critical * se) / (n1 * n2);

    let power = if p_value <= 0.0 {
        1.0
    } else {
        let z_score = normal_ppf(p_value / 2.0).abs();
        1.0 - normal_cdf(z_critical - z_score)
    };

    Ok(MannWhitneyReport {
        u_statistic,
        p_value,
        effect_size,
        ci_low,
        ci_high,
        power,
        alpha,
        significant: p_value <= alpha,
        first: summarize(first_name, first),
        second: summarize(second_name, second),
    })
}

/// Cumulative distribution function of the standard normal.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// Inverse CDF of the standard normal (Acklam's rational approximation,
/// relative error below 1.2e-9 over the open unit interval).
pub fn normal_ppf(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];
    const P_LOW: f64 = 0.02425;

    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    }
}

/// Average ranks of `values` (1-based) plus the tie correction `Σ(t³ − t)`.
fn average_ranks(values: &[f64]) -> (Vec<f64>, f64) {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; values.len()];
    let mut tie_sum = 0.0;
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let tied = (j - i + 1) as f64;
        let rank = (i + 1 + j + 1) as f64 / 2.0;
        for &idx in &order[i..=j] {
            ranks[idx] = rank;
        }
        tie_sum += tied * tied * tied - tied;
        i = j + 1;
    }
    (ranks, tie_sum)
}

fn summarize(name: &str, values: &[f64]) -> SampleSummary {
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    };

    SampleSummary {
        name: name.to_string(),
        median,
        mean,
        std_dev: variance.sqrt(),
        size: n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separated_samples_give_extreme_u_and_small_p() {
        let report = mann_whitney_u(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], 0.05, "low", "high")
            .unwrap();
        assert_eq!(report.u_statistic, 0.0);
        assert_eq!(report.effect_size, 0.0);
        // Hand-checked: z = (0 - 4.5 + 0.5) / sqrt(5.25), p = 2(1 - Φ(|z|)).
        assert!((report.p_value - 0.0809).abs() < 2e-3, "p = {}", report.p_value);
        assert!(!report.significant);
    }

    #[test]
    fn identical_samples_are_maximally_uninformative() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let report = mann_whitney_u(&data, &data, 0.05, "a", "b").unwrap();
        assert_eq!(report.effect_size, 0.5);
        assert_eq!(report.p_value, 1.0);
        assert!(!report.significant);
    }

    #[test]
    fn average_ranks_handle_ties() {
        let (ranks, tie_sum) = average_ranks(&[1.0, 2.0, 2.0, 3.0]);
        assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
        assert_eq!(tie_sum, 6.0);
    }

    #[test]
    fn ppf_and_cdf_are_inverse() {
        for &p in &[0.01, 0.025, 0.5, 0.8, 0.975, 0.99] {
            let z = normal_ppf(p);
            assert!((normal_cdf(z) - p).abs() < 1e-8, "p = {p}");
        }
        assert!((normal_ppf(0.975) - 1.959964).abs() < 1e-5);
    }

    #[test]
    fn summaries_report_median_mean_and_population_std() {
        let report = mann_whitney_u(
            &[1.0, 2.0, 3.0, 4.0],
            &[10.0],
            0.05,
            "quartet",
            "single",
        )
        .unwrap();
        assert_eq!(report.first.median, 2.5);
        assert_eq!(report.first.mean, 2.5);
        assert!((report.first.std_dev - 1.1180339887).abs() < 1e-9);
        assert_eq!(report.second.size, 1);
    }

    #[test]
    fn empty_sample_is_rejected() {
        let err = mann_whitney_u(&[], &[1.0], 0.05, "a", "b").unwrap_err();
        assert_eq!(err, StatsError::EmptySample { which: "first" });
    }
}
