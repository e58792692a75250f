//! The registered demos reproduce their recorded results

mod common;

use approx::assert_abs_diff_eq;
use common::temp_output;
use statsintro_harness::{registry, run_case, Outcome, Runner};
use statsintro_plot::OutputConfig;

#[test]
fn test_all_checked_cases_pass() {
    let cases = registry::cases(&OutputConfig::default());
    let report = Runner::new().checked_only(true).run(&cases);
    assert_eq!(report.cases.len(), 8);
    assert!(report.is_success(), "{report}");
}

#[test]
fn test_anova_matches_record() {
    let result = statsintro_demos::anova::anova_oneway().unwrap();
    assert_abs_diff_eq!(result.statistic, 3.711336, epsilon = 1e-6);
    assert_abs_diff_eq!(result.p_value, 0.0435893, epsilon = 1e-7);

    let cases = registry::cases(&OutputConfig::default());
    let report = Runner::new().with_filter("anova_").checked_only(true).run(&cases);
    let names: Vec<_> = report.cases.iter().map(|c| c.name).collect();
    assert_eq!(names, ["anova_oneway", "anova_by_hand"]);
    assert!(report.is_success(), "{report}");
}

#[test]
fn test_sample_size_is_exact() {
    let cases = registry::cases(&OutputConfig::default());
    let case = cases.iter().find(|c| c.name == "sample_size").unwrap();
    assert_eq!(run_case(case), Outcome::Passed);
    assert_eq!(statsintro_demos::sample_size::one_group_default(0.5).unwrap(), 31);
}

#[test]
fn test_smoke_case_writes_figure() {
    let output = temp_output("scatter");
    let cases = registry::cases(&output);
    let report = Runner::new().with_filter("scatter_plot").run(&cases);
    assert_eq!(report.cases.len(), 1);
    assert!(report.is_success(), "{report}");
    assert!(output.target("scatterPlot.png").is_file());
}

#[test]
fn test_smoke_case_reports_missing_directory() {
    let output = temp_output("missing");
    let output = output.clone().with_out_dir(output.out_dir.join("nope"));
    let cases = registry::cases(&output);
    let report = Runner::new().with_filter("error_bars").run(&cases);
    assert_eq!(report.failed(), 1);
    assert!(matches!(report.cases[0].outcome, Outcome::Errored(_)));
}
