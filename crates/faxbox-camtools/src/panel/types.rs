//! Type definitions for the panel renderer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingerJointSettings {
    /// Width of fingers in multiples of thickness
    pub finger: f64,
    /// Space between fingers in multiples of thickness
    pub space: f64,
    /// Space at start and end in multiples of normal spaces
    pub surrounding_spaces: f64,
    /// Extra space to allow fingers to move in/out (multiples of thickness)
    pub play: f64,
    /// Extra material for burn marks (multiples of thickness)
    pub extra_length: f64,
}

impl Default for FingerJointSettings {
    fn default() -> Self {
        Self {
            finger: 2.0,
            space: 2.0,
            surrounding_spaces: 2.0,
            play: 0.0,
            extra_length: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

pub fn push_unique_point(path: &mut Vec<Point>, point: Point) {
    if let Some(last) = path.last() {
        if (point.x - last.x).abs() < 0.001 && (point.y - last.y).abs() < 0.001 {
            return;
        }
    }
    path.push(point);
}

/// Width and height of a document or part in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned extent of drawn geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn of_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in iter {
            bounds.include(*p);
        }
        Some(bounds)
    }

    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn size(&self) -> BoundingBox {
        BoundingBox::new(self.width(), self.height())
    }
}

/// Joint type of one panel side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// `f`: fingers protrude past the edge
    FingersOut,
    /// `F`: notches receiving a mating `f` edge
    FingerNotches,
    /// `e`: straight edge
    Plain,
}

impl EdgeKind {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'f' => Some(EdgeKind::FingersOut),
            'F' => Some(EdgeKind::FingerNotches),
            'e' => Some(EdgeKind::Plain),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            EdgeKind::FingersOut => 'f',
            EdgeKind::FingerNotches => 'F',
            EdgeKind::Plain => 'e',
        }
    }
}

/// Edge kinds of a rectangular panel in the order bottom, right, top, left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeCodes([EdgeKind; 4]);

impl EdgeCodes {
    pub fn new(bottom: EdgeKind, right: EdgeKind, top: EdgeKind, left: EdgeKind) -> Self {
        Self([bottom, right, top, left])
    }

    pub fn plain() -> Self {
        Self([EdgeKind::Plain; 4])
    }

    pub fn bottom(&self) -> EdgeKind {
        self.0[0]
    }

    pub fn right(&self) -> EdgeKind {
        self.0[1]
    }

    pub fn top(&self) -> EdgeKind {
        self.0[2]
    }

    pub fn left(&self) -> EdgeKind {
        self.0[3]
    }
}

impl FromStr for EdgeCodes {
    type Err = ParameterError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = code.chars().collect();
        if chars.len() != 4 {
            return Err(ParameterError::InvalidEdgeCode {
                code: code.to_string(),
                reason: format!("expected 4 characters, got {}", chars.len()),
            });
        }

        let mut kinds = [EdgeKind::Plain; 4];
        for (slot, c) in kinds.iter_mut().zip(chars) {
            *slot = EdgeKind::from_char(c).ok_or_else(|| ParameterError::InvalidEdgeCode {
                code: code.to_string(),
                reason: format!("unknown edge type '{}'", c),
            })?;
        }
        Ok(Self(kinds))
    }
}

impl fmt::Display for EdgeCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in self.0 {
            write!(f, "{}", kind.as_char())?;
        }
        Ok(())
    }
}

/// Where the drawing cursor goes after a panel is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Draw at the cursor, then move right past the panel
    Right,
    /// Draw at the cursor, then move up past the panel
    Up,
    /// Move left by the panel width, then draw there
    Left,
    /// Move left by the panel width, draw, then move up past the panel
    LeftUp,
    /// Draw at the cursor and leave it in place
    #[default]
    Stay,
}

/// Stroke role of an outline; selects its color in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeRole {
    Cut,
    Engrave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Rectangular or rounded hole, or an engraved rectangle, in panel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutout {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub role: StrokeRole,
}

impl Cutout {
    pub fn rectangle(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            center: Point::new(cx, cy),
            width,
            height,
            corner_radius: 0.0,
            role: StrokeRole::Cut,
        }
    }

    pub fn rounded(cx: f64, cy: f64, width: f64, height: f64, radius: f64) -> Self {
        Self {
            corner_radius: radius,
            ..Self::rectangle(cx, cy, width, height)
        }
    }

    pub fn engraved(self) -> Self {
        Self {
            role: StrokeRole::Engrave,
            ..self
        }
    }
}

/// Line of holes receiving the fingers of a keyed panel edge.
///
/// The holes follow the finger pattern of an edge with the same `length`, so a
/// panel with an `f` edge of that length slots into them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerHoleRow {
    /// Start of the center line in panel coordinates
    pub start: Point,
    pub length: f64,
    pub orientation: Orientation,
}

impl FingerHoleRow {
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self {
            start: Point::new(x, y),
            length,
            orientation: Orientation::Horizontal,
        }
    }

    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self {
            start: Point::new(x, y),
            length,
            orientation: Orientation::Vertical,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    Cutout(Cutout),
    FingerHoles(FingerHoleRow),
}

impl From<Cutout> for Decoration {
    fn from(cutout: Cutout) -> Self {
        Decoration::Cutout(cutout)
    }
}

impl From<FingerHoleRow> for Decoration {
    fn from(row: FingerHoleRow) -> Self {
        Decoration::FingerHoles(row)
    }
}

/// One face of a part, as handed to [`SvgDocument::rectangular_wall`]
///
/// [`SvgDocument::rectangular_wall`]: crate::document::SvgDocument::rectangular_wall
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub label: String,
    pub width: f64,
    pub height: f64,
    pub edges: EdgeCodes,
    pub decorations: Vec<Decoration>,
    pub placement: Placement,
}

impl PanelSpec {
    pub fn new(
        label: impl Into<String>,
        width: f64,
        height: f64,
        edges: &str,
    ) -> Result<Self, ParameterError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ParameterError::InvalidDimensions(format!(
                "panel {}x{} must have positive size",
                width, height
            )));
        }

        Ok(Self {
            label: label.into(),
            width,
            height,
            edges: edges.parse()?,
            decorations: Vec::new(),
            placement: Placement::Stay,
        })
    }

    pub fn with_decorations<D: Into<Decoration>>(
        mut self,
        decorations: impl IntoIterator<Item = D>,
    ) -> Self {
        self.decorations
            .extend(decorations.into_iter().map(Into::into));
        self
    }

    pub fn placed(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}
