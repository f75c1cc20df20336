//! Vector path input - the fixed command grammar fed to the sampler
//!
//! Paths come from three places:
//! - SVG path data strings (`d` attribute), parsed through usvg
//! - SVG documents on disk or in memory
//! - Structured `PathCommand` lists built in code
//!
//! Whatever the source, the result is a `ShapePath`: absolute commands in
//! view-box units plus the fill rule used to decide what is "inside".

use std::path::Path as FilePath;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building a path
#[derive(Error, Debug)]
pub enum PathError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse path: {0}")]
    ParseError(String),

    #[error("Document contains no filled paths")]
    NoPaths,
}

/// Fill rule deciding which regions of a self-overlapping path are filled
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl FillRule {
    fn svg_name(self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

impl From<usvg::FillRule> for FillRule {
    fn from(rule: usvg::FillRule) -> Self {
        match rule {
            usvg::FillRule::NonZero => FillRule::NonZero,
            usvg::FillRule::EvenOdd => FillRule::EvenOdd,
        }
    }
}

/// A single absolute path command
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PathCommand {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    /// Control point, end point
    QuadTo(f32, f32, f32, f32),
    /// First control, second control, end point
    CubicTo(f32, f32, f32, f32, f32, f32),
    Close,
}

/// A vector shape ready for sampling
#[derive(Clone, Debug)]
pub struct ShapePath {
    commands: Vec<PathCommand>,
    /// Width and height of the coordinate space the commands live in
    view_box: (f32, f32),
    fill_rule: FillRule,
}

impl ShapePath {
    /// Build a path from commands already in absolute view-box coordinates
    pub fn from_commands(
        commands: Vec<PathCommand>,
        view_box: (f32, f32),
        fill_rule: FillRule,
    ) -> Self {
        Self {
            commands,
            view_box,
            fill_rule,
        }
    }

    /// Parse SVG path data (the `d` attribute) living in a `view_box` sized space
    ///
    /// Relative commands, H/V shorthands, smooth curves and arcs are all
    /// resolved by usvg; what comes back is move/line/quad/cubic/close.
    pub fn parse(data: &str, view_box: (f32, f32), fill_rule: FillRule) -> Result<Self, PathError> {
        if data.contains(['"', '<', '>', '&']) {
            return Err(PathError::ParseError(
                "path data contains markup characters".to_string(),
            ));
        }

        let (width, height) = view_box;
        if !(width > 0.0 && height > 0.0) {
            return Err(PathError::ParseError(format!(
                "invalid view box {}x{}",
                width, height
            )));
        }

        let document = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><path fill-rule="{rule}" d="{d}"/></svg>"#,
            w = width,
            h = height,
            rule = fill_rule.svg_name(),
            d = data,
        );

        Self::from_svg_data(document.as_bytes(), Some(fill_rule))
    }

    /// Load every filled path of an SVG file as one shape
    pub fn from_svg_file(
        path: impl AsRef<FilePath>,
        fill_rule: Option<FillRule>,
    ) -> Result<Self, PathError> {
        let svg_data = std::fs::read(path.as_ref())?;
        Self::from_svg_data(&svg_data, fill_rule)
    }

    /// Parse an SVG document, merging its filled paths into one shape
    ///
    /// When `fill_rule` is `None` the rule of the first filled path is used.
    pub fn from_svg_data(data: &[u8], fill_rule: Option<FillRule>) -> Result<Self, PathError> {
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())
            .map_err(|e| PathError::ParseError(e.to_string()))?;

        let size = tree.size();
        let mut commands = Vec::new();
        let mut rule = fill_rule;

        collect_group(tree.root(), &mut commands, &mut rule);

        if commands.is_empty() {
            return Err(PathError::NoPaths);
        }

        Ok(Self::from_commands(
            commands,
            (size.width(), size.height()),
            rule.unwrap_or_default(),
        ))
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn view_box(&self) -> (f32, f32) {
        self.view_box
    }

    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    /// Flatten curves into closed polygons, one per subpath
    ///
    /// Every subpath is treated as closed since the result is used for
    /// filling. Subpaths with fewer than three vertices enclose no area and
    /// are dropped.
    pub fn flatten(&self, curve_samples: usize) -> Vec<Vec<(f32, f32)>> {
        let curve_samples = curve_samples.max(1);
        let mut polygons = Vec::new();
        let mut current: Vec<(f32, f32)> = Vec::new();

        let mut finish = |current: &mut Vec<(f32, f32)>| {
            if current.len() >= 3 {
                polygons.push(std::mem::take(current));
            } else {
                current.clear();
            }
        };

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(x, y) => {
                    finish(&mut current);
                    current.push((x, y));
                }
                PathCommand::LineTo(x, y) => {
                    current.push((x, y));
                }
                PathCommand::QuadTo(cx, cy, x, y) => {
                    if let Some(&start) = current.last() {
                        for i in 1..=curve_samples {
                            let t = i as f32 / curve_samples as f32;
                            current.push(quadratic_bezier(start, (cx, cy), (x, y), t));
                        }
                    } else {
                        current.push((x, y));
                    }
                }
                PathCommand::CubicTo(c1x, c1y, c2x, c2y, x, y) => {
                    if let Some(&start) = current.last() {
                        for i in 1..=curve_samples {
                            let t = i as f32 / curve_samples as f32;
                            current.push(cubic_bezier(start, (c1x, c1y), (c2x, c2y), (x, y), t));
                        }
                    } else {
                        current.push((x, y));
                    }
                }
                PathCommand::Close => {
                    // A close keeps the pen at the subpath start, so a following
                    // draw command continues from there as a new subpath
                    let start = current.first().copied();
                    finish(&mut current);
                    if let Some(start) = start {
                        current.push(start);
                    }
                }
            }
        }
        finish(&mut current);

        polygons
    }
}

fn collect_group(group: &usvg::Group, commands: &mut Vec<PathCommand>, rule: &mut Option<FillRule>) {
    for child in group.children() {
        match child {
            usvg::Node::Path(path) => collect_path(path, commands, rule),
            usvg::Node::Group(subgroup) => collect_group(subgroup, commands, rule),
            _ => {}
        }
    }
}

fn collect_path(path: &usvg::Path, commands: &mut Vec<PathCommand>, rule: &mut Option<FillRule>) {
    let Some(fill) = path.fill() else {
        return;
    };
    if rule.is_none() {
        *rule = Some(fill.rule().into());
    }

    let Some(data) = path.data().clone().transform(path.abs_transform()) else {
        log::debug!("Skipping path {:?}: transform produced no geometry", path.id());
        return;
    };

    use usvg::tiny_skia_path::PathSegment;
    for segment in data.segments() {
        commands.push(match segment {
            PathSegment::MoveTo(p) => PathCommand::MoveTo(p.x, p.y),
            PathSegment::LineTo(p) => PathCommand::LineTo(p.x, p.y),
            PathSegment::QuadTo(c, p) => PathCommand::QuadTo(c.x, c.y, p.x, p.y),
            PathSegment::CubicTo(c1, c2, p) => {
                PathCommand::CubicTo(c1.x, c1.y, c2.x, c2.y, p.x, p.y)
            }
            PathSegment::Close => PathCommand::Close,
        });
    }
}

/// Evaluate a quadratic Bézier curve at parameter t
fn quadratic_bezier(p0: (f32, f32), p1: (f32, f32), p2: (f32, f32), t: f32) -> (f32, f32) {
    let mt = 1.0 - t;

    let x = mt * mt * p0.0 + 2.0 * mt * t * p1.0 + t * t * p2.0;
    let y = mt * mt * p0.1 + 2.0 * mt * t * p1.1 + t * t * p2.1;

    (x, y)
}

/// Evaluate a cubic Bézier curve at parameter t
fn cubic_bezier(
    p0: (f32, f32),
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    t: f32,
) -> (f32, f32) {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    let x = mt3 * p0.0 + 3.0 * mt2 * t * p1.0 + 3.0 * mt * t2 * p2.0 + t3 * p3.0;
    let y = mt3 * p0.1 + 3.0 * mt2 * t * p1.1 + 3.0 * mt * t2 * p2.1 + t3 * p3.1;

    (x, y)
}
