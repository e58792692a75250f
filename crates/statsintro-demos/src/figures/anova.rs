//! Sketch of the sums of squares behind a one-way ANOVA

use rand::Rng;
use statsintro_core::utils::mean;
use statsintro_core::Result;
use statsintro_plot::{printout_plain, Color, Figure, OutputConfig};

use super::{default_style, normal_sample, seeded_rng};

const CENTERS: [f64; 3] = [5.0, 5.3, 4.7];
const GROUP_COLORS: [Color; 3] = [Color::BLUE, Color::RED, Color::GREEN];
const GROUP_SD: f64 = 0.1;
const GROUP_SIZE: usize = 100;

/// Three normal groups with their means
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedGroups {
    pub groups: Vec<Vec<f64>>,
    pub group_means: Vec<f64>,
    /// Mean of the group means
    pub grand_mean: f64,
}

impl AnnotatedGroups {
    /// `size` values around each center with standard deviation `sd`
    pub fn simulate<R: Rng>(rng: &mut R, centers: &[f64], sd: f64, size: usize) -> Result<Self> {
        let groups = centers
            .iter()
            .map(|&c| normal_sample(&mut *rng, c, sd, size))
            .collect::<Result<Vec<_>>>()?;
        let group_means: Vec<f64> = groups.iter().map(|g| mean(g)).collect();
        let grand_mean = mean(&group_means);
        Ok(Self {
            groups,
            group_means,
            grand_mean,
        })
    }
}

/// Groups side by side, the grand mean and the distances that make up
/// the treatment and error sums of squares
pub fn anova_annotated(output: &OutputConfig) -> Result<()> {
    let data = AnnotatedGroups::simulate(&mut seeded_rng(), &CENTERS, GROUP_SD, GROUP_SIZE)?;

    let mut fig = Figure::new(&default_style());
    let ax = fig.gca();
    for (i, (group, color)) in data.groups.iter().zip(GROUP_COLORS).enumerate() {
        let offset = (i * GROUP_SIZE) as f64;
        let x: Vec<f64> = (0..group.len()).map(|j| offset + j as f64).collect();
        ax.scatter(&x, group).color(color);
    }

    let grand = data.grand_mean;
    let middle = data.group_means[1];
    let width = (CENTERS.len() * GROUP_SIZE) as f64;
    ax.hlines(grand, 0.0, width).color(Color::BLUE);
    ax.line(&[80.0, 220.0], &[middle, middle]).color(Color::BLUE);
    ax.line(&[80.0, 120.0], &[middle + 0.2, middle + 0.2])
        .color(Color::BLUE);
    ax.vlines(210.0, grand, middle);
    ax.vlines(90.0, middle, middle + 0.2);
    ax.text(212.0, (grand + middle) / 2.0, "SS_Treatment");
    ax.text(20.0, middle + 0.1, "SS_Error");
    ax.set_xlim(0.0, width).set_title("Sum-Squares");

    printout_plain(fig, "anova_annotated.png", output)
}
