//! Shared statistics utilities.

/// Tolerance below which a denominator is treated as zero.
pub(crate) const EPSILON: f64 = 1e-10;

/// Arithmetic mean, or 0 for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample (n - 1) standard deviation around `mean`, or 0 with fewer than two values.
pub(crate) fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_squared: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_squared / (values.len() - 1) as f64).sqrt()
}

/// Clamps a score into `[0, 1]`, mapping NaN to 0.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Least-squares line through `(i, values[i])`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LinearFit {
    pub(crate) slope: f64,
    pub(crate) intercept: f64,
    pub(crate) r_squared: f64,
}

impl LinearFit {
    /// Fits `y = intercept + slope * x` over indices `0..n`.
    ///
    /// Returns `None` when the index variance is effectively zero.
    pub(crate) fn fit(values: &[f64]) -> Option<Self> {
        let n = values.len() as f64;
        let (sum_x, sum_y, sum_xy, sum_x2) = values.iter().enumerate().fold(
            (0.0, 0.0, 0.0, 0.0),
            |(sx, sy, sxy, sx2), (i, &y)| {
                let x = i as f64;
                (sx + x, sy + y, sxy + x * y, sx2 + x * x)
            },
        );

        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator.abs() < EPSILON {
            return None;
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        let mean_y = sum_y / n;
        let total_ss: f64 = values.iter().map(|y| (y - mean_y).powi(2)).sum();
        let residual_ss: f64 = values
            .iter()
            .enumerate()
            .map(|(i, &y)| (y - (intercept + slope * i as f64)).powi(2))
            .sum();

        // No variance to explain, so the fit carries no confidence
        let r_squared = if total_ss < EPSILON {
            0.0
        } else {
            clamp_unit(1.0 - residual_ss / total_ss)
        };

        Some(Self {
            slope,
            intercept,
            r_squared,
        })
    }

    /// Value of the fitted line at `x`.
    pub(crate) fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}
