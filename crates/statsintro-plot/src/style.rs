//! Default figure styling
//!
//! A [`Style`] is an immutable value. Figures copy the style they are created
//! with, so building a new style never changes figures that already exist.

/// Font family used for every text element of a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

impl FontFamily {
    /// Family name as understood by the font lookup of the renderer
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Serif => "serif",
            FontFamily::Monospace => "monospace",
        }
    }
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Direction in which tick marks point, relative to the plotting area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickDirection {
    In,
    #[default]
    Out,
}

/// Tick styling for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStyle {
    pub direction: TickDirection,
    /// Length of major tick marks, in points
    pub major_size: f64,
    /// Size of tick labels, in points
    pub label_size: f64,
}

/// Default rendering parameters of a figure
///
/// All sizes are in points; the renderer converts them to pixels using the
/// output resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub font_family: FontFamily,
    pub font_weight: FontWeight,
    pub font_size: f64,
    pub xtick: TickStyle,
    pub ytick: TickStyle,
    /// Size of the axis labels
    pub axes_label_size: f64,
    /// Size of the axes title
    pub title_size: f64,
    pub legend_font_size: f64,
    /// Size label areas and margins from the font sizes instead of fixed margins
    pub autolayout: bool,
}

/// Major tick length used by [`configure`]
pub const MAJOR_TICK_SIZE: f64 = 6.0;

/// Font size used by [`Style::default`]
pub const DEFAULT_FONT_SIZE: f64 = 18.0;

/// Build the preferred default style for a base font size
///
/// Tick labels are two points smaller than `font_size`; axis labels, titles
/// and legends use `font_size`. The value is not validated: a non-positive
/// size produces degenerate text in rendered figures.
///
/// ```rust
/// use statsintro_plot::style::configure;
///
/// let style = configure(14.0);
/// assert_eq!(style.xtick.label_size, 12.0);
/// assert_eq!(style.title_size, 14.0);
/// ```
pub fn configure(font_size: f64) -> Style {
    let tick = TickStyle {
        direction: TickDirection::Out,
        major_size: MAJOR_TICK_SIZE,
        label_size: font_size - 2.0,
    };
    Style {
        font_family: FontFamily::SansSerif,
        font_weight: FontWeight::Normal,
        font_size,
        xtick: tick,
        ytick: tick,
        axes_label_size: font_size,
        title_size: font_size,
        legend_font_size: font_size,
        autolayout: true,
    }
}

impl Default for Style {
    fn default() -> Self {
        configure(DEFAULT_FONT_SIZE)
    }
}

impl Style {
    /// Same style with a different base font size
    pub fn with_font_size(&self, font_size: f64) -> Self {
        Style {
            font_family: self.font_family,
            font_weight: self.font_weight,
            autolayout: self.autolayout,
            ..configure(font_size)
        }
    }

    /// Enable or disable automatic layout
    pub fn with_autolayout(mut self, autolayout: bool) -> Self {
        self.autolayout = autolayout;
        self
    }

    /// Use a different font family
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }
}

/// Convert a size in points to pixels at the given resolution
pub fn points_to_pixels(points: f64, dpi: u32) -> f64 {
    points * f64::from(dpi) / 72.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_derives_sizes_from_font_size() {
        for f in [6.0, 10.0, 14.0, 18.0, 24.5, 72.0] {
            let style = configure(f);
            assert_eq!(style.font_size, f);
            assert_eq!(style.xtick.label_size, f - 2.0);
            assert_eq!(style.ytick.label_size, f - 2.0);
            assert_eq!(style.axes_label_size, f);
            assert_eq!(style.title_size, f);
            assert_eq!(style.legend_font_size, f);
        }
    }

    #[test]
    fn test_configure_fixed_parameters() {
        let style = configure(18.0);
        assert_eq!(style.font_family, FontFamily::SansSerif);
        assert_eq!(style.font_weight, FontWeight::Normal);
        assert_eq!(style.xtick.direction, TickDirection::Out);
        assert_eq!(style.ytick.direction, TickDirection::Out);
        assert_eq!(style.xtick.major_size, 6.0);
        assert_eq!(style.ytick.major_size, 6.0);
        assert!(style.autolayout);
    }

    #[test]
    fn test_default_is_font_size_18() {
        assert_eq!(Style::default(), configure(18.0));
    }

    #[test]
    fn test_configure_is_idempotent() {
        assert_eq!(configure(12.0), configure(12.0));
    }

    #[test]
    fn test_non_positive_size_is_not_corrected() {
        let style = configure(0.0);
        assert_eq!(style.font_size, 0.0);
        assert_eq!(style.xtick.label_size, -2.0);
    }

    #[test]
    fn test_with_font_size_keeps_family_and_layout() {
        let base = configure(18.0)
            .with_font_family(FontFamily::Serif)
            .with_autolayout(false);
        let smaller = base.with_font_size(10.0);
        assert_eq!(smaller.font_family, FontFamily::Serif);
        assert!(!smaller.autolayout);
        assert_eq!(smaller.ytick.label_size, 8.0);
    }

    #[test]
    fn test_points_to_pixels() {
        assert_eq!(points_to_pixels(72.0, 200), 200.0);
        assert_eq!(points_to_pixels(18.0, 72), 18.0);
    }
}
