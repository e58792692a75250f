//! Recorded results of the worked examples

use approx::assert_abs_diff_eq;
use statsintro_demos::{anova, binomial, fit_line, one_sample, sample_size, two_sample};

#[test]
fn test_anova_variants_agree() {
    let direct = anova::anova_oneway().unwrap();
    let by_hand = anova::anova_by_hand().unwrap();
    assert_abs_diff_eq!(direct.statistic, 3.711335988266943, epsilon = 1e-9);
    assert_abs_diff_eq!(direct.p_value, 0.043589334959179327, epsilon = 1e-9);
    assert_abs_diff_eq!(by_hand.statistic, direct.statistic, epsilon = 1e-9);
    assert_abs_diff_eq!(by_hand.p_value, direct.p_value, epsilon = 1e-9);
}

#[test]
fn test_sample_sizes() {
    assert_eq!(sample_size::one_group_default(0.5).unwrap(), 31);
    assert_eq!(sample_size::two_groups_default(0.4, 0.6, 0.6).unwrap(), 35);
}

#[test]
fn test_binomial() {
    let r = binomial::binomial_test(51).unwrap();
    assert_abs_diff_eq!(r.one_sided, 0.0265442457117, epsilon = 1e-7);
    assert_abs_diff_eq!(r.two_sided, 0.0437479701824, epsilon = 1e-7);
}

#[test]
fn test_one_and_two_samples() {
    let one = one_sample::check_mean().unwrap();
    assert_abs_diff_eq!(one.p_value, 0.018137235176105802, epsilon = 1e-7);

    let paired = two_sample::paired_data().unwrap();
    assert_abs_diff_eq!(paired.p_value, 0.0033300139117459797, epsilon = 1e-7);

    let unpaired = two_sample::unpaired_data().unwrap();
    assert_abs_diff_eq!(unpaired.p_value, 0.0010608066929400244, epsilon = 1e-7);
}

#[test]
fn test_line_fit() {
    let fit = fit_line::demo().unwrap();
    assert_abs_diff_eq!(fit.intercept, 1.09781487777, epsilon = 1e-7);
    assert_abs_diff_eq!(fit.slope, 0.02196252226, epsilon = 1e-7);
}
