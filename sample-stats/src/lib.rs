/*! Descriptive statistics for a one-dimensional sample.

## Example

Load some measurements and put an interval around their mean:

```
# use sample_stats::*;
let sample: Sample = vec![1., 2., 3., 4.].into_iter().collect();

let ci = sample.confidence_interval_for_mean(0.95);
let msg = format!("μ = {:.2} ± {:.2} (p=95%)", ci.center, ci.radius);
assert_eq!(msg, "μ = 2.50 ± 1.79 (p=95%)");
```

Every derived quantity is a pure function of the sample's contents.
Degenerate samples (empty or a single element) resolve to 0 rather than
NaN or a panic; callers that need to tell "no data" apart from "zero
variance" should check [`Sample::count`].
*/

pub mod student_t;

use std::fmt;

/// An ordered sequence of real-valued measurements.
///
/// Insertion order matches input order, but only the values and their
/// cardinality matter statistically.  The sample is immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    pub fn new(values: Vec<f64>) -> Sample {
        Sample { values }
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The arithmetic mean, or 0 for the empty sample.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.;
        }
        let sum: f64 = self.values.iter().sum();
        sum / self.values.len() as f64
    }

    /// `xᵢ - ̄x` for each element, in input order.
    pub fn deviations_from_mean(&self) -> Vec<f64> {
        let mean = self.mean();
        self.values.iter().map(|x| x - mean).collect()
    }

    /// `(xᵢ - ̄x)²` for each element, in input order.
    pub fn squared_deviations_from_mean(&self) -> Vec<f64> {
        let mean = self.mean();
        self.values.iter().map(|x| (x - mean) * (x - mean)).collect()
    }

    /// Σ(xᵢ - ̄x).  Mathematically zero for a true mean; kept as a
    /// diagnostic for the floating-point residue.
    pub fn sum_of_deviations(&self) -> f64 {
        let mean = self.mean();
        self.values.iter().map(|x| x - mean).sum()
    }

    /// Σ(xᵢ - ̄x)².
    pub fn sum_of_squared_deviations(&self) -> f64 {
        let mean = self.mean();
        self.values.iter().map(|x| (x - mean) * (x - mean)).sum()
    }

    /// The population variance estimator Σ(xᵢ - ̄x)²/n, which is biased
    /// low for samples.  0 when the sample is empty.
    pub fn biased_variance(&self) -> f64 {
        if self.values.is_empty() {
            return 0.;
        }
        self.sum_of_squared_deviations() / self.values.len() as f64
    }

    /// Bessel-corrected variance Σ(xᵢ - ̄x)²/(n-1).  0 when n < 2.
    pub fn unbiased_variance(&self) -> f64 {
        if self.values.len() < 2 {
            return 0.;
        }
        self.sum_of_squared_deviations() / (self.values.len() - 1) as f64
    }

    pub fn std_dev(&self) -> f64 {
        self.unbiased_variance().sqrt()
    }

    /// When estimating μ with the sample mean ̄x, the variance of this
    /// estimate is σ²/n.  Since σ² is also unknown we estimate it by
    /// s²/n, and the standard error is its square root.  0 when n < 2.
    pub fn standard_error_of_mean(&self) -> f64 {
        if self.values.len() < 2 {
            return 0.;
        }
        let n = self.values.len();
        (self.sum_of_squared_deviations() / (n - 1) as f64 / n as f64).sqrt()
    }

    /// A two-sided confidence interval for the population mean: the
    /// critical value of Student's t at `confidence` scales the standard
    /// error into the half-width.
    ///
    /// The quantile is taken at `n` degrees of freedom, where `n` is the
    /// sample size.  When n < 2 the standard error is 0 and the interval
    /// collapses to its center; the lookup is not consulted.
    pub fn confidence_interval_for_mean(&self, confidence: f64) -> ConfidenceInterval {
        let center = self.mean();
        let std_err = self.standard_error_of_mean();
        let radius = if self.values.len() < 2 {
            0.
        } else {
            student_t::critical_value(self.values.len(), confidence) * std_err
        };
        ConfidenceInterval { center, radius }
    }
}

impl FromIterator<f64> for Sample {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Sample {
        Sample {
            values: iter.into_iter().collect(),
        }
    }
}

/// A two-sided interval `center ± radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceInterval {
    pub center: f64,
    pub radius: f64,
}

impl ConfidenceInterval {
    pub fn lower(self) -> f64 {
        self.center - self.radius
    }
    pub fn upper(self) -> f64 {
        self.center + self.radius
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ± {}", self.center, self.radius)
    }
}
