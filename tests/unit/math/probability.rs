//! Tests for the error function and chi-square helpers

#[cfg(test)]
mod tests {
    use aztec_shuffle::math::probability::{
        chi_square_survival, chi_square_uniform, erf, uniformity_p_value,
    };

    // Tests known values and odd symmetry of erf
    // Verified by dropping the sign restoration
    #[test]
    fn test_erf_values() {
        assert!(erf(0.0).abs() < 1e-6);
        assert!((erf(1.0) - 0.842_700_79).abs() < 1e-6);
        assert!((erf(-1.0) + 0.842_700_79).abs() < 1e-6);
        assert!((erf(3.0) - 0.999_977_91).abs() < 1e-6);
    }

    // Tests the statistic for balanced and skewed counts
    // Verified by dividing by observed instead of expected counts
    #[test]
    fn test_chi_square_statistic() {
        assert!(chi_square_uniform(&[10, 10, 10]).abs() < f64::EPSILON);
        assert!((chi_square_uniform(&[20, 0]) - 20.0).abs() < 1e-12);
        assert!((chi_square_uniform(&[30, 10]) - 10.0).abs() < 1e-12);
        assert!(chi_square_uniform(&[]).abs() < f64::EPSILON);
        assert!(chi_square_uniform(&[0, 0]).abs() < f64::EPSILON);
    }

    // Tests tabulated 5% critical values map back to 0.05
    // Verified by using the lower tail instead of the upper tail
    #[test]
    fn test_survival_at_critical_values() {
        for (statistic, dof) in [(3.841, 1), (5.991, 2), (11.070, 5), (14.067, 7), (31.410, 20)] {
            let p = chi_square_survival(statistic, dof);
            assert!((p - 0.05).abs() < 0.01, "dof {dof}: p = {p}");
        }
    }

    // Tests degenerate inputs yield certainty
    // Verified by removing the early return for non-positive statistics
    #[test]
    fn test_survival_edge_cases() {
        assert!((chi_square_survival(0.0, 3) - 1.0).abs() < f64::EPSILON);
        assert!((chi_square_survival(5.0, 0) - 1.0).abs() < f64::EPSILON);
        assert!(chi_square_survival(200.0, 3) < 1e-9);
    }

    // Tests p-values for balanced and hopeless counts
    // Verified by passing the category count as the degrees of freedom
    #[test]
    fn test_uniformity_p_value() {
        assert!((uniformity_p_value(&[50, 50, 50, 50]) - 1.0).abs() < f64::EPSILON);
        assert!(uniformity_p_value(&[52, 47, 55, 46]) > 0.5);
        assert!(uniformity_p_value(&[200, 0, 0, 0]) < 1e-9);
    }
}
