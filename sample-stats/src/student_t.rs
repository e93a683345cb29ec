use statrs::distribution::{ContinuousCDF, StudentsT};

/// The two-sided critical value of Student's t-distribution.
///
/// Returns the `t` such that the central probability mass between `-t`
/// and `+t` of the distribution with `dof` degrees of freedom equals
/// `confidence`; ie. the quantile at cumulative probability
/// `0.5 + confidence/2`.
///
/// ```text
///                  confidence
///  <----|--------------------------------|---->
///     -t                0                  +t
/// ```
///
/// Callers pass the sample size `n` directly as `dof`, not `n - 1`.
pub fn critical_value(dof: usize, confidence: f64) -> f64 {
    assert!(dof >= 1);
    assert!(confidence > 0. && confidence < 1.);
    let p = 0.5 + confidence / 2.;
    let dist = StudentsT::new(0., 1., dof as f64).unwrap();
    dist.inverse_cdf(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::*;

    #[test]
    fn t_table() {
        // Spot checks against the t-table from
        // https://en.wikipedia.org/wiki/Student's_t-distribution
        // (a two-sided confidence of 0.95 is the one-sided 0.975 column)

        macro_rules! assert_rel_eq {
            ($dof:expr, $confidence:expr, $exp:expr) => {
                assert_relative_eq!(
                    critical_value($dof, $confidence),
                    $exp,
                    max_relative = 0.001
                );
            };
        }

        assert_rel_eq!(1, 0.90, 6.314);
        assert_rel_eq!(1, 0.95, 12.71);
        assert_rel_eq!(2, 0.95, 4.303);
        assert_rel_eq!(3, 0.95, 3.182);
        assert_rel_eq!(3, 0.98, 4.541);
        assert_rel_eq!(5, 0.95, 2.571);
        assert_rel_eq!(5, 0.98, 3.365);
        assert_rel_eq!(10, 0.90, 1.812);
        assert_rel_eq!(10, 0.95, 2.228);
        assert_rel_eq!(10, 0.99, 3.169);
        assert_rel_eq!(30, 0.95, 2.042);
        assert_rel_eq!(30, 0.98, 2.457);
        assert_rel_eq!(100, 0.95, 1.984);
        assert_rel_eq!(120, 0.98, 2.358);
    }

    #[test]
    fn monotonic_in_confidence() {
        let mut last = 0.;
        for confidence in [0.5, 0.8, 0.9, 0.95, 0.98, 0.99, 0.999] {
            let t = critical_value(7, confidence);
            assert!(t > last);
            last = t;
        }
    }

    #[test]
    fn shrinks_towards_normal() {
        // More degrees of freedom pulls the critical value down towards
        // the normal quantile (1.96 at 95%)
        let mut last = f64::INFINITY;
        for dof in [1, 2, 5, 10, 50, 500] {
            let t = critical_value(dof, 0.95);
            assert!(t < last);
            last = t;
        }
        assert_relative_eq!(critical_value(100_000, 0.95), 1.96, max_relative = 0.001);
    }
}
