//! Finger-joint panel renderer
//!
//! Based on the finger algorithm of https://github.com/florianfesti/boxes:
//! finger and space widths are multiples of the material thickness and the
//! number of fingers on an edge follows from its length.
//!
//! All geometry is produced in panel coordinates: the panel's inner rectangle
//! spans `(0, 0)..(width, height)` with y pointing up. Outlines are offset by
//! the burn so the laser leaves the nominal size behind.

pub mod types;

pub use types::{
    push_unique_point, BoundingBox, Bounds, Cutout, Decoration, EdgeCodes, EdgeKind,
    FingerHoleRow, FingerJointSettings, Orientation, PanelSpec, Placement, Point, StrokeRole,
};

use faxbox_core::BoxConfig;

use crate::error::{ParameterError, ParameterResult};

/// Line segments used for each quarter circle of a rounded cutout
const ARC_SEGMENTS: usize = 8;

/// Material and laser settings shared by every panel of a document
#[derive(Debug, Clone)]
pub struct RendererSettings {
    pub thickness: f64,
    /// Per-side compensation: outlines grow and holes shrink by this amount
    pub burn: f64,
    pub finger_joint: FingerJointSettings,
    /// Gap left between panels when the cursor moves
    pub spacing: f64,
    pub line_width: f64,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            thickness: faxbox_core::DEFAULT_MATERIAL_THICKNESS,
            burn: 0.05,
            finger_joint: FingerJointSettings::default(),
            spacing: 5.0,
            line_width: 0.1,
        }
    }
}

impl From<&BoxConfig> for RendererSettings {
    fn from(config: &BoxConfig) -> Self {
        Self {
            thickness: config.material_thickness,
            burn: config.burn,
            spacing: config.part_spacing,
            ..Self::default()
        }
    }
}

/// A closed polyline with its stroke role
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub points: Vec<Point>,
    pub role: StrokeRole,
}

impl Outline {
    pub fn cut(points: Vec<Point>) -> Self {
        Self {
            points,
            role: StrokeRole::Cut,
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            *p = p.offset(dx, dy);
        }
    }
}

pub struct PanelRenderer {
    settings: RendererSettings,
}

impl PanelRenderer {
    pub fn new(settings: RendererSettings) -> ParameterResult<Self> {
        Self::validate_settings(&settings)?;
        Ok(Self { settings })
    }

    fn validate_settings(settings: &RendererSettings) -> ParameterResult<()> {
        if !(settings.thickness > 0.0 && settings.thickness <= 20.0) {
            return Err(ParameterError::OutOfRange {
                name: "thickness".to_string(),
                value: settings.thickness,
                min: 0.0,
                max: 20.0,
            });
        }

        if !(settings.burn >= 0.0 && settings.burn < settings.thickness / 2.0) {
            return Err(ParameterError::OutOfRange {
                name: "burn".to_string(),
                value: settings.burn,
                min: 0.0,
                max: settings.thickness / 2.0,
            });
        }

        let fj = &settings.finger_joint;
        if (fj.space + fj.finger).abs() < 0.1 {
            return Err(ParameterError::InvalidDimensions(
                "finger + space must not be close to zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    /// Calculate number of fingers and leftover space for a given length
    pub fn calc_fingers(&self, length: f64) -> (usize, f64) {
        let settings = &self.settings.finger_joint;
        let t = self.settings.thickness;

        let space = settings.space * t;
        let finger = settings.finger * t;

        let mut fingers = ((length - (settings.surrounding_spaces - 1.0) * space)
            / (space + finger))
            .floor()
            .max(0.0) as usize;

        // A short edge still gets one finger if it fits with some margin
        if fingers == 0 && length > finger + t {
            fingers = 1;
        }

        if finger == 0.0 {
            fingers = 0;
        }

        let leftover = if fingers > 0 {
            length - (fingers as f64) * (space + finger) + space
        } else {
            length
        };

        (fingers, leftover)
    }

    /// Draw a finger joint edge along +x, outside of the panel at -y
    fn draw_finger_edge(&self, length: f64, positive: bool) -> Vec<Point> {
        let settings = &self.settings.finger_joint;
        let t = self.settings.thickness;
        let burn = self.settings.burn;
        let kerf = 2.0 * burn;

        let mut space = settings.space * t;
        let mut finger = settings.finger * t;
        let play = settings.play * t;
        let extra = settings.extra_length * t;

        let (fingers, mut leftover) = self.calc_fingers(length);

        if !positive {
            finger += play;
            space -= play;
            leftover -= play;
        }

        // Fingers grow by the kerf, notches shrink by it
        let (finger_draw, space_draw, leftover_draw, tip_y) = if positive {
            (finger + kerf, space - kerf, leftover - kerf, -t - extra - burn)
        } else {
            (finger - kerf, space + kerf, leftover + kerf, t - burn)
        };
        let base_y = -burn;

        let mut path = Vec::with_capacity(4 * fingers + 2);
        let mut x = 0.0;
        path.push(Point::new(x, base_y));
        x += leftover_draw / 2.0;
        path.push(Point::new(x, base_y));

        for i in 0..fingers {
            path.push(Point::new(x, tip_y));
            x += finger_draw;
            path.push(Point::new(x, tip_y));
            path.push(Point::new(x, base_y));

            if i + 1 < fingers {
                x += space_draw;
                path.push(Point::new(x, base_y));
            }
        }

        x += leftover_draw / 2.0;
        path.push(Point::new(x, base_y));

        path
    }

    fn edge_path(&self, kind: EdgeKind, length: f64) -> Vec<Point> {
        match kind {
            EdgeKind::FingersOut => self.draw_finger_edge(length, true),
            EdgeKind::FingerNotches => self.draw_finger_edge(length, false),
            EdgeKind::Plain => {
                let burn = self.settings.burn;
                vec![Point::new(0.0, -burn), Point::new(length, -burn)]
            }
        }
    }

    /// Draw the outline of a rectangular wall with the given edge kinds.
    ///
    /// Edges run counter-clockwise: bottom left to right, right bottom to top,
    /// top right to left, left top to bottom.
    pub fn draw_rectangular_wall(&self, width: f64, height: f64, edges: &EdgeCodes) -> Vec<Point> {
        let burn = self.settings.burn;
        let mut path: Vec<Point> = Vec::new();

        for p in self.edge_path(edges.bottom(), width) {
            push_unique_point(&mut path, Point::new(p.x, p.y));
        }
        push_unique_point(&mut path, Point::new(width + burn, -burn));

        for p in self.edge_path(edges.right(), height) {
            push_unique_point(&mut path, Point::new(width - p.y, p.x));
        }
        push_unique_point(&mut path, Point::new(width + burn, height + burn));

        for p in self.edge_path(edges.top(), width) {
            push_unique_point(&mut path, Point::new(width - p.x, height - p.y));
        }
        push_unique_point(&mut path, Point::new(-burn, height + burn));

        for p in self.edge_path(edges.left(), height) {
            push_unique_point(&mut path, Point::new(p.y, height - p.x));
        }
        push_unique_point(&mut path, Point::new(-burn, -burn));

        if let Some(first) = path.first().copied() {
            push_unique_point(&mut path, first);
        }

        path
    }

    /// Holes for the fingers of an `f` edge of `row.length`, centered on the row
    pub fn draw_finger_holes(&self, row: &FingerHoleRow) -> Vec<Vec<Point>> {
        let settings = &self.settings.finger_joint;
        let t = self.settings.thickness;
        let burn = self.settings.burn;

        let (fingers, mut leftover) = self.calc_fingers(row.length);

        let mut space = settings.space * t;
        let mut finger = settings.finger * t;
        let play = settings.play * t;

        // Holes take the play the same way notches do
        finger += play;
        space -= play;
        leftover -= play;

        let across = (-t / 2.0 + burn, t / 2.0 - burn);
        let mut holes = Vec::with_capacity(fingers);
        let mut pos = leftover / 2.0;

        for _ in 0..fingers {
            let along = (pos + burn, pos + finger - burn);
            let (x0, y0, x1, y1) = match row.orientation {
                Orientation::Horizontal => (along.0, across.0, along.1, across.1),
                Orientation::Vertical => (across.0, along.0, across.1, along.1),
            };
            holes.push(rectangle_points(
                row.start.x + x0,
                row.start.y + y0,
                row.start.x + x1,
                row.start.y + y1,
            ));
            pos += finger + space;
        }

        holes
    }

    /// Outline of a cutout; cut holes shrink by the burn, engravings do not
    pub fn draw_cutout(&self, cutout: &Cutout) -> Vec<Point> {
        let shrink = match cutout.role {
            StrokeRole::Cut => self.settings.burn,
            StrokeRole::Engrave => 0.0,
        };

        let w = (cutout.width - 2.0 * shrink).max(0.0);
        let h = (cutout.height - 2.0 * shrink).max(0.0);
        let x0 = cutout.center.x - w / 2.0;
        let y0 = cutout.center.y - h / 2.0;
        let r = (cutout.corner_radius - shrink).clamp(0.0, w.min(h) / 2.0);

        if r <= 0.0 {
            return rectangle_points(x0, y0, x0 + w, y0 + h);
        }

        let x1 = x0 + w;
        let y1 = y0 + h;
        let corners = [
            (Point::new(x1 - r, y0 + r), -90.0_f64),
            (Point::new(x1 - r, y1 - r), 0.0),
            (Point::new(x0 + r, y1 - r), 90.0),
            (Point::new(x0 + r, y0 + r), 180.0),
        ];

        let mut path = Vec::with_capacity(4 * (ARC_SEGMENTS + 1) + 1);
        for (center, start_deg) in corners {
            for step in 0..=ARC_SEGMENTS {
                let angle = (start_deg + 90.0 * step as f64 / ARC_SEGMENTS as f64).to_radians();
                push_unique_point(
                    &mut path,
                    Point::new(center.x + r * angle.cos(), center.y + r * angle.sin()),
                );
            }
        }
        if let Some(first) = path.first().copied() {
            push_unique_point(&mut path, first);
        }
        path
    }

    /// Render a panel in its own coordinates: outline first, then decorations
    pub fn render_panel(&self, spec: &PanelSpec) -> Vec<Outline> {
        let mut outlines = vec![Outline::cut(self.draw_rectangular_wall(
            spec.width,
            spec.height,
            &spec.edges,
        ))];

        for decoration in &spec.decorations {
            match decoration {
                Decoration::Cutout(cutout) => outlines.push(Outline {
                    points: self.draw_cutout(cutout),
                    role: cutout.role,
                }),
                Decoration::FingerHoles(row) => outlines.extend(
                    self.draw_finger_holes(row)
                        .into_iter()
                        .map(Outline::cut),
                ),
            }
        }

        outlines
    }
}

fn rectangle_points(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
        Point::new(x0, y0),
    ]
}
