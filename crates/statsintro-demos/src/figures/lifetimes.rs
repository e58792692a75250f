//! Censored lifetimes: subscriptions observed until the end of a study

use rand::Rng;
use rand_distr::{Distribution, Exp};
use statsintro_core::{Error, Result};
use statsintro_plot::{printout_plain, Color, Figure, LineStyle, OutputConfig};
use tracing::debug;

use super::{default_style, seeded_rng};

/// Number of subscribers
pub const SUBSCRIBERS: usize = 20;

/// Month at which the study stops observing
pub const STUDY_END: f64 = 12.0;

/// Mean subscription times of the two kinds of subscriber, in months
const MEAN_LIFETIMES: (f64, f64) = (18.0, 3.0);

/// One subscriber's lifetime as seen by the study
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifetime {
    /// Time the subscription really lasts
    pub actual: f64,
    /// Time observed before the study ended
    pub observed: f64,
    /// Whether the cancellation happened during the study
    pub event_observed: bool,
}

impl Lifetime {
    pub fn censored(actual: f64, study_end: f64) -> Self {
        Self {
            actual,
            observed: actual.min(study_end),
            event_observed: actual < study_end,
        }
    }
}

/// Draw `n` lifetimes, each long or short with equal probability,
/// censored at `study_end`
///
/// A constant dropout rate makes each lifetime exponential.
pub fn simulate_lifetimes<R: Rng>(rng: &mut R, n: usize, study_end: f64) -> Result<Vec<Lifetime>> {
    let exp = |mean: f64| Exp::new(1.0 / mean).map_err(|e| Error::InvalidParameter(e.to_string()));
    let long = exp(MEAN_LIFETIMES.0)?;
    let short = exp(MEAN_LIFETIMES.1)?;
    Ok((0..n)
        .map(|_| {
            let actual = if rng.gen::<f64>() < 0.5 {
                short.sample(&mut *rng)
            } else {
                long.sample(&mut *rng)
            };
            Lifetime::censored(actual, study_end)
        })
        .collect())
}

/// One horizontal line per subscriber, ending in a marker when the
/// cancellation was observed
pub fn lifetimes(output: &OutputConfig) -> Result<()> {
    let data = simulate_lifetimes(&mut seeded_rng(), SUBSCRIBERS, STUDY_END)?;
    debug!(
        observed = data.iter().filter(|l| l.event_observed).count(),
        censored = data.iter().filter(|l| !l.event_observed).count(),
        "subscription lifetimes"
    );

    let mut fig = Figure::new(&default_style());
    let ax = fig.gca();
    let (mut ends, mut rows) = (Vec::new(), Vec::new());
    for (i, life) in data.iter().enumerate() {
        let row = i as f64;
        let color = if life.event_observed {
            Color::RED
        } else {
            Color::BLUE
        };
        ax.hlines(row, 0.0, life.observed).color(color).width(2.0);
        if life.event_observed {
            ends.push(life.observed);
            rows.push(row);
        }
    }
    ax.scatter(&ends, &rows).color(Color::BLACK);
    ax.vlines(STUDY_END, -1.0, data.len() as f64)
        .line_style(LineStyle::Dashed)
        .width(2.0);
    ax.set_xlim(0.0, 2.0 * STUDY_END)
        .set_ylim(-1.0, data.len() as f64)
        .set_xlabel("time")
        .set_title(format!("Subscription Times, at t={STUDY_END} months"));

    printout_plain(fig, "lifetimes.png", output)
}
