/// Error function approximation using Abramowitz and Stegun method
///
/// Accurate to about 1.5e-7, which is ample for goodness-of-fit p-values.
pub fn erf(x: f64) -> f64 {
    let a1 = 0.254_829_592_f64;
    let a2 = -0.284_496_736_f64;
    let a3 = 1.421_413_741_f64;
    let a4 = -1.453_152_027_f64;
    let a5 = 1.061_405_429_f64;
    let p = 0.327_591_1_f64;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / p.mul_add(x, 1.0);
    let y = (((((a5.mul_add(t, a4)).mul_add(t, a3)).mul_add(t, a2)).mul_add(t, a1)) * t)
        .mul_add(-(-x * x).exp(), 1.0);

    sign * y
}

/// Pearson's chi-square statistic of observed counts against a uniform expectation
///
/// Returns 0.0 for empty input or when no observations were made.
pub fn chi_square_uniform(observed: &[usize]) -> f64 {
    let total: usize = observed.iter().sum();
    if observed.is_empty() || total == 0 {
        return 0.0;
    }

    let expected = total as f64 / observed.len() as f64;
    observed
        .iter()
        .map(|&count| {
            let deviation = count as f64 - expected;
            deviation * deviation / expected
        })
        .sum()
}

/// Upper tail probability P(X >= statistic) for X ~ chi-square(`degrees_of_freedom`)
///
/// Exact for one and two degrees of freedom; the Wilson-Hilferty cube-root
/// normal approximation otherwise.
pub fn chi_square_survival(statistic: f64, degrees_of_freedom: usize) -> f64 {
    if statistic <= 0.0 || degrees_of_freedom == 0 {
        return 1.0;
    }

    match degrees_of_freedom {
        1 => 1.0 - erf((statistic / 2.0).sqrt()),
        2 => (-statistic / 2.0).exp(),
        k => {
            let k = k as f64;
            let spread = 2.0 / (9.0 * k);
            let z = ((statistic / k).cbrt() - (1.0 - spread)) / spread.sqrt();
            0.5 * (1.0 - erf(z / std::f64::consts::SQRT_2))
        }
    }
}

/// p-value of the hypothesis that `observed` counts come from a uniform distribution
pub fn uniformity_p_value(observed: &[usize]) -> f64 {
    let degrees_of_freedom = observed.len().saturating_sub(1);
    chi_square_survival(chi_square_uniform(observed), degrees_of_freedom)
}
