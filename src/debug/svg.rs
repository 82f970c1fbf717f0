use std::{fmt, io, path};

use crate::{idx::Idx, ring::Link};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    MajorSteps,
    AllSteps,
}

pub(crate) struct SvgOutput<'a, Style> {
    pub context: &'a SvgContext,
    pub style: Style,
    content: String,
}

impl<'a, Style> SvgOutput<'a, Style> {
    pub fn new(context: &'a SvgContext, style: Style) -> Self {
        Self {
            context,
            style,
            content: String::new(),
        }
    }

    pub fn append_element<State, E: SvgElement<Style, State>>(&mut self, element: &E, state: &State) -> fmt::Result {
        element.write_svg(self, state)
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);

        // Flip y so the polygon appears as it would on a y-up plot
        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, -self.context.view_y_max, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "<g transform=\"scale(1, -1)\">")?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</g>")?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a, Style> fmt::Write for SvgOutput<'a, Style> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SvgElementStyle {
    Standard,
    Ear,
    Highlight,
}

/// Chooses how each ring vertex is drawn in one dump
#[derive(Default)]
pub(crate) struct SvgClipStyle {
    highlight: Option<Idx<Link>>,
}

impl SvgClipStyle {
    pub fn highlight_vertex(v: Idx<Link>) -> Self {
        Self {
            highlight: Some(v),
        }
    }

    pub fn get_v_style(&self, v: Idx<Link>, is_ear: bool) -> SvgElementStyle {
        if self.highlight == Some(v) {
            SvgElementStyle::Highlight
        } else if is_ear {
            SvgElementStyle::Ear
        } else {
            SvgElementStyle::Standard
        }
    }
}

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
}

impl SvgContext {
    /// Builds a context from the environment, framing the given points with a 10% margin.
    ///
    /// Returns `None` when no output path is set or the output level is [SvgOutputLevel::None].
    pub fn from_env(points: impl Iterator<Item=[f32; 2]>) -> Option<Self> {
        let output_path = super::env::svg::output_path()?;
        let output_level = super::env::svg::output_level();
        let show_labels = super::env::svg::show_labels();

        if output_level == SvgOutputLevel::None {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for [x, y] in points {
            view_x_min = view_x_min.min(x);
            view_x_max = view_x_max.max(x);
            view_y_min = view_y_min.min(y);
            view_y_max = view_y_max.max(y);
        }

        let w = view_x_max - view_x_min;
        let h = view_y_max - view_y_min;
        let margin_scale = 0.1;
        view_x_min -= w * margin_scale;
        view_x_max += w * margin_scale;
        view_y_min -= h * margin_scale;
        view_y_max += h * margin_scale;

        Some(Self {
            output_path,
            output_level,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels,
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }
}

pub(crate) trait SvgElement<Style, State=()> {
    fn write_svg<'a>(&self, svg_output: &mut SvgOutput<'a, Style>, state: &State) -> fmt::Result;
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
    }
}
