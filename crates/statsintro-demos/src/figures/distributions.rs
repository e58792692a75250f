//! Families of continuous distributions: t, chi-square, F and exponential

use statrs::distribution::{ChiSquared, Continuous, Exp, Normal, StudentsT};
use statrs::function::beta::ln_beta;
use statsintro_core::Result;
use statsintro_plot::{printout_plain, Figure, LineStyle, OutputConfig};

use super::{arange, default_style};

/// One labelled density curve
struct Curve {
    label: String,
    pdf: Vec<f64>,
    line_style: LineStyle,
}

impl Curve {
    fn new(label: impl Into<String>, t: &[f64], pdf: impl Fn(f64) -> f64) -> Self {
        Self {
            label: label.into(),
            pdf: t.iter().map(|&x| pdf(x)).collect(),
            line_style: LineStyle::Solid,
        }
    }

    fn dashed(mut self) -> Self {
        self.line_style = LineStyle::Dashed;
        self
    }
}

/// Density of the F distribution, evaluated in log space so that large
/// degrees of freedom do not overflow
pub fn f_pdf(x: f64, d1: f64, d2: f64) -> f64 {
    if x < 0.0 || x.is_infinite() {
        return 0.0;
    }
    if x == 0.0 {
        return match d1.partial_cmp(&2.0) {
            Some(std::cmp::Ordering::Less) => f64::INFINITY,
            Some(std::cmp::Ordering::Equal) => 1.0,
            _ => 0.0,
        };
    }
    let ln = 0.5 * (d1 * (d1 * x).ln() + d2 * d2.ln() - (d1 + d2) * (d1 * x + d2).ln())
        - x.ln()
        - ln_beta(d1 / 2.0, d2 / 2.0);
    ln.exp()
}

fn plot_family(t: &[f64], curves: Vec<Curve>, file_name: &str, output: &OutputConfig) -> Result<()> {
    let mut fig = Figure::new(&default_style());
    let ax = fig.gca();
    for curve in curves {
        ax.line(t, &curve.pdf)
            .line_style(curve.line_style)
            .label(curve.label);
    }
    if let (Some(&first), Some(&last)) = (t.first(), t.last()) {
        ax.set_xlim(first, last);
    }
    ax.set_xlabel("X").set_ylabel("pdf(X)").legend();
    printout_plain(fig, file_name, output)
}

/// Save `dist_t.png`, `dist_chi2.png`, `dist_f.png` and `dist_exp.png`
pub fn distributions(output: &OutputConfig) -> Result<()> {
    let t = arange(-5.0, 5.0, 0.05);
    let normal = Normal::new(0.0, 1.0)?;
    let mut curves = vec![Curve::new("normal", &t, |x| normal.pdf(x)).dashed()];
    for df in [1.0, 5.0] {
        let dist = StudentsT::new(0.0, 1.0, df)?;
        curves.push(Curve::new(format!("df={df}"), &t, |x| dist.pdf(x)));
    }
    plot_family(&t, curves, "dist_t.png", output)?;

    let t = arange(0.0, 8.0, 0.05);
    let mut curves = Vec::new();
    for k in [1.0, 2.0, 3.0, 5.0] {
        let dist = ChiSquared::new(k)?;
        curves.push(Curve::new(format!("k={k}"), &t, |x| dist.pdf(x)));
    }
    plot_family(&t, curves, "dist_chi2.png", output)?;

    let t = arange(0.0, 3.0, 0.01);
    let curves = [(1.0, 1.0), (2.0, 1.0), (5.0, 2.0), (100.0, 100.0)]
        .into_iter()
        .map(|(d1, d2)| Curve::new(format!("F({d1}/{d2})"), &t, |x| f_pdf(x, d1, d2)))
        .collect();
    plot_family(&t, curves, "dist_f.png", output)?;

    let mut curves = Vec::new();
    for scale in [0.5, 1.0, 1.5] {
        let dist = Exp::new(1.0 / scale)?;
        curves.push(Curve::new(format!("λ={scale:3.1}"), &t, |x| dist.pdf(x)));
    }
    plot_family(&t, curves, "dist_exp.png", output)
}
