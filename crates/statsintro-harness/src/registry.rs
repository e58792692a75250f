//! The demos under regression test and their recorded results

use statsintro_core::Result;
use statsintro_demos::{anova, binomial, figures, fit_line, one_sample, sample_size, two_sample};
use statsintro_plot::OutputConfig;

use crate::case::Case;
use crate::expected::{ExpectedResult, Tolerance};

pub const ANOVA: &[ExpectedResult] = &[
    ExpectedResult::new("F", 3.711335988266943),
    ExpectedResult::new("p", 0.043589334959179327),
];

pub const SAMPLE_SIZE: &[ExpectedResult] = &[
    ExpectedResult::new("one group", 31.0).with_tolerance(Tolerance::Exact),
    ExpectedResult::new("two groups", 35.0).with_tolerance(Tolerance::Exact),
];

pub const BINOMIAL: &[ExpectedResult] = &[
    ExpectedResult::new("p one-sided", 0.0265442457117),
    ExpectedResult::new("p two-sided", 0.0437479701824),
];

pub const ONE_SAMPLE: &[ExpectedResult] = &[ExpectedResult::new("p", 0.018137235176105802)];

pub const PAIRED: &[ExpectedResult] = &[ExpectedResult::new("p", 0.0033300139117459797)];

pub const UNPAIRED: &[ExpectedResult] = &[ExpectedResult::new("p", 0.0010608066929400244)];

pub const FIT_LINE: &[ExpectedResult] = &[
    ExpectedResult::new("intercept", 1.09781487777),
    ExpectedResult::new("slope", 0.02196252226),
];

/// Sixes thrown in the recorded binomial example
const SIXES: u64 = 51;

fn anova_oneway() -> Result<Vec<f64>> {
    let r = anova::anova_oneway()?;
    Ok(vec![r.statistic, r.p_value])
}

fn anova_by_hand() -> Result<Vec<f64>> {
    let r = anova::anova_by_hand()?;
    Ok(vec![r.statistic, r.p_value])
}

fn sample_sizes() -> Result<Vec<f64>> {
    Ok(vec![
        sample_size::one_group_default(0.5)? as f64,
        sample_size::two_groups_default(0.4, 0.6, 0.6)? as f64,
    ])
}

fn binomial_test() -> Result<Vec<f64>> {
    let r = binomial::binomial_test(SIXES)?;
    Ok(vec![r.one_sided, r.two_sided])
}

fn one_sample_mean() -> Result<Vec<f64>> {
    Ok(vec![one_sample::check_mean()?.p_value])
}

fn paired() -> Result<Vec<f64>> {
    Ok(vec![two_sample::paired_data()?.p_value])
}

fn unpaired() -> Result<Vec<f64>> {
    Ok(vec![two_sample::unpaired_data()?.p_value])
}

fn line_fit() -> Result<Vec<f64>> {
    let fit = fit_line::demo()?;
    Ok(vec![fit.intercept, fit.slope])
}

fn smoke(name: &'static str, output: &OutputConfig, run: fn(&OutputConfig) -> Result<()>) -> Case {
    let output = output.clone();
    Case::smoke(name, move || run(&output))
}

/// Checked demos first, then the figure demos saving into `output`
pub fn cases(output: &OutputConfig) -> Vec<Case> {
    vec![
        Case::checked("anova_oneway", anova_oneway, ANOVA),
        Case::checked("anova_by_hand", anova_by_hand, ANOVA),
        Case::checked("sample_size", sample_sizes, SAMPLE_SIZE),
        Case::checked("binomial_test", binomial_test, BINOMIAL),
        Case::checked("one_sample", one_sample_mean, ONE_SAMPLE),
        Case::checked("two_sample_paired", paired, PAIRED),
        Case::checked("two_sample_unpaired", unpaired, UNPAIRED),
        Case::checked("fit_line", line_fit, FIT_LINE),
        smoke("scatter_plot", output, figures::scatter_plot),
        smoke("histograms", output, figures::histograms),
        smoke("kde_figure", output, figures::kde_figure),
        smoke("box_plot", output, figures::box_plot),
        smoke("bar_plot", output, figures::bar_plot),
        smoke("error_bars", output, figures::error_bars),
        smoke("central_limit_theorem", output, figures::central_limit_theorem),
        smoke("kde_plot", output, figures::kde_plot),
        smoke("residuals", output, figures::residuals),
        smoke("distributions", output, figures::distributions),
        smoke("lifetimes", output, figures::lifetimes),
        smoke("anova_annotated", output, figures::anova_annotated),
    ]
}
