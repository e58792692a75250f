//! One-way analysis of variance
//!
//! Red cell folate levels of three groups of cardiac bypass patients given
//! different ventilation, tested for a common mean.

use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use statsintro_core::utils::{mean, sum_of_squares};
use statsintro_core::{Error, Result};
use tracing::debug;

use crate::data::FOLATE_GROUPS;
use crate::two_sample::t_test_ind;
use crate::types::TestResult;

/// Sums of squares and degrees of freedom of a one-way ANOVA
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnovaTable {
    pub ss_total: f64,
    pub ss_treatment: f64,
    pub ss_error: f64,
    pub df_treatment: usize,
    pub df_error: usize,
}

impl AnovaTable {
    /// Decompose the total sum of squares of `groups`
    ///
    /// The treatment part is computed from the group means; the error part
    /// is what remains of the total.
    pub fn from_groups(groups: &[&[f64]]) -> Result<Self> {
        check_groups(groups)?;
        let all: Vec<f64> = groups.iter().flat_map(|g| g.iter().copied()).collect();
        let grand_mean = mean(&all);

        let ss_total: f64 = all.iter().map(|&x| (x - grand_mean).powi(2)).sum();
        let ss_treatment: f64 = groups
            .iter()
            .map(|g| g.len() as f64 * (mean(g) - grand_mean).powi(2))
            .sum();

        Ok(Self {
            ss_total,
            ss_treatment,
            ss_error: ss_total - ss_treatment,
            df_treatment: groups.len() - 1,
            df_error: all.len() - groups.len(),
        })
    }

    /// F statistic and its p-value
    pub fn f_test(&self) -> Result<TestResult> {
        f_test(
            self.ss_treatment,
            self.ss_error,
            self.df_treatment,
            self.df_error,
        )
    }
}

fn check_groups(groups: &[&[f64]]) -> Result<()> {
    if groups.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: groups.len(),
        });
    }
    if groups.iter().any(|g| g.is_empty()) {
        return Err(Error::InvalidInput("every group needs at least one value".to_string()));
    }
    if groups.iter().flat_map(|g| g.iter()).any(|x| !x.is_finite()) {
        return Err(Error::non_finite("group data"));
    }
    let total: usize = groups.iter().map(|g| g.len()).sum();
    if total <= groups.len() {
        return Err(Error::InsufficientData {
            expected: groups.len() + 1,
            actual: total,
        });
    }
    Ok(())
}

fn f_test(ss_treatment: f64, ss_error: f64, df_treatment: usize, df_error: usize) -> Result<TestResult> {
    if ss_error <= 0.0 {
        return Err(Error::Computation(
            "no variance within groups, F is undefined".to_string(),
        ));
    }
    let f = (ss_treatment / df_treatment as f64) / (ss_error / df_error as f64);
    let dist = FisherSnedecor::new(df_treatment as f64, df_error as f64)?;
    let p = dist.sf(f);
    debug!(f, p, df_treatment, df_error, "F test");
    Ok(TestResult::new(f, p))
}

/// One-way ANOVA F test for equal group means
pub fn f_oneway(groups: &[&[f64]]) -> Result<TestResult> {
    check_groups(groups)?;
    let all: Vec<f64> = groups.iter().flat_map(|g| g.iter().copied()).collect();
    let grand_mean = mean(&all);

    let ss_between: f64 = groups
        .iter()
        .map(|g| g.len() as f64 * (mean(g) - grand_mean).powi(2))
        .sum();
    let ss_within: f64 = groups.iter().map(|g| sum_of_squares(g)).sum();

    f_test(ss_between, ss_within, groups.len() - 1, all.len() - groups.len())
}

/// One-way ANOVA of the folate data
pub fn anova_oneway() -> Result<TestResult> {
    f_oneway(&FOLATE_GROUPS)
}

/// The folate ANOVA computed from an explicit sum-of-squares table
pub fn anova_by_hand() -> Result<TestResult> {
    let table = AnovaTable::from_groups(&FOLATE_GROUPS)?;
    debug!(?table, "folate sum of squares");
    table.f_test()
}

/// For two groups the ANOVA F equals the square of the pooled t statistic
///
/// Returns the ANOVA result and the t-test result; their p-values agree.
pub fn f_versus_t(a: &[f64], b: &[f64]) -> Result<(TestResult, TestResult)> {
    let f = f_oneway(&[a, b])?;
    let t = t_test_ind(a, b)?;
    Ok((f, t))
}
