//! Part sheet document
//!
//! An [`SvgDocument`] collects rendered panels, places them with a cursor and
//! serializes the result as a flat SVG: one `<path>` per closed outline, no
//! groups, sized in millimeters. The `viewBox` is the union of all panels.

use tracing::debug;

use crate::color::Color;
use crate::panel::{BoundingBox, Bounds, Outline, PanelRenderer, PanelSpec, Placement, Point, StrokeRole};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Format a millimeter value with at most three decimals and no trailing zeros
pub fn fmt_mm(value: f64) -> String {
    let mut s = format!("{:.3}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Drawing cursor moved between panels according to their placement
#[derive(Debug, Clone, Copy)]
pub struct LayoutCursor {
    pub position: Point,
    pub spacing: f64,
}

impl LayoutCursor {
    pub fn new(spacing: f64) -> Self {
        Self {
            position: Point::ORIGIN,
            spacing,
        }
    }

    /// Returns where the footprint's lower left corner goes and advances the cursor
    pub fn place(&mut self, footprint: BoundingBox, placement: Placement) -> Point {
        match placement {
            Placement::Right => {
                let at = self.position;
                self.position.x += footprint.width + self.spacing;
                at
            }
            Placement::Up => {
                let at = self.position;
                self.position.y += footprint.height + self.spacing;
                at
            }
            Placement::Left => {
                self.position.x -= footprint.width + self.spacing;
                self.position
            }
            Placement::LeftUp => {
                self.position.x -= footprint.width + self.spacing;
                let at = self.position;
                self.position.y += footprint.height + self.spacing;
                at
            }
            Placement::Stay => self.position,
        }
    }
}

/// A panel after placement, in document coordinates
#[derive(Debug, Clone)]
pub struct RenderedPanel {
    pub label: String,
    pub outlines: Vec<Outline>,
}

impl RenderedPanel {
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of_points(self.outlines.iter().flat_map(|o| o.points.iter()))
    }
}

pub struct SvgDocument {
    title: String,
    renderer: PanelRenderer,
    cursor: LayoutCursor,
    cut_color: Color,
    engrave_color: Color,
    panels: Vec<RenderedPanel>,
}

impl SvgDocument {
    pub fn new(title: impl Into<String>, renderer: PanelRenderer) -> Self {
        let spacing = renderer.settings().spacing;
        Self {
            title: title.into(),
            renderer,
            cursor: LayoutCursor::new(spacing),
            cut_color: Color::BLACK,
            engrave_color: Color::ENGRAVE_RED,
            panels: Vec::new(),
        }
    }

    pub fn set_cut_color(&mut self, color: Color) {
        self.cut_color = color;
    }

    pub fn cut_color(&self) -> Color {
        self.cut_color
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn renderer(&self) -> &PanelRenderer {
        &self.renderer
    }

    /// Render one panel and place it at the cursor
    pub fn rectangular_wall(&mut self, spec: &PanelSpec) {
        let mut outlines = self.renderer.render_panel(spec);

        let Some(local) = Bounds::of_points(outlines.iter().flat_map(|o| o.points.iter())) else {
            return;
        };

        let origin = self.cursor.place(local.size(), spec.placement);
        let dx = origin.x - local.min_x;
        let dy = origin.y - local.min_y;
        for outline in &mut outlines {
            outline.translate(dx, dy);
        }

        debug!(
            "Placed {} ({}x{} mm, edges {}) at ({:.2}, {:.2})",
            spec.label,
            fmt_mm(spec.width),
            fmt_mm(spec.height),
            spec.edges,
            origin.x,
            origin.y
        );

        self.panels.push(RenderedPanel {
            label: spec.label.clone(),
            outlines,
        });
    }

    pub fn panels(&self) -> &[RenderedPanel] {
        &self.panels
    }

    fn bounds(&self) -> Option<Bounds> {
        self.panels
            .iter()
            .filter_map(RenderedPanel::bounds)
            .reduce(Bounds::union)
    }

    /// Size of the union of all panels
    pub fn extents(&self) -> BoundingBox {
        self.bounds().map(|b| b.size()).unwrap_or_default()
    }

    fn stroke_for(&self, role: StrokeRole) -> Color {
        match role {
            StrokeRole::Cut => self.cut_color,
            StrokeRole::Engrave => self.engrave_color,
        }
    }

    fn path_data(points: &[Point], min_x: f64, max_y: f64) -> String {
        let closed = points.len() > 2 && points.first() == points.last();
        let body = if closed {
            &points[..points.len() - 1]
        } else {
            points
        };

        let mut d = String::new();
        for (i, p) in body.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            d.push_str(&format!("{} {} {} ", cmd, fmt_mm(p.x - min_x), fmt_mm(max_y - p.y)));
        }
        d.push('Z');
        d
    }

    /// Serialize the document; y is flipped so that "up" points up on screen
    pub fn to_svg(&self) -> String {
        let bounds = self.bounds().unwrap_or(Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        });
        let width = fmt_mm(bounds.width());
        let height = fmt_mm(bounds.height());
        let line_width = fmt_mm(self.renderer.settings().line_width);

        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"{}\" width=\"{}mm\" height=\"{}mm\" viewBox=\"0 0 {} {}\">\n",
            SVG_NAMESPACE, width, height, width, height
        ));
        svg.push_str(&format!("<title>{}</title>\n", xml_escape(&self.title)));

        for panel in &self.panels {
            svg.push_str(&format!("<!-- {} -->\n", xml_escape(&panel.label)));
            for outline in &panel.outlines {
                if outline.points.len() < 2 {
                    continue;
                }
                svg.push_str(&format!(
                    "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                    Self::path_data(&outline.points, bounds.min_x, bounds.max_y),
                    self.stroke_for(outline.role),
                    line_width
                ));
            }
        }

        svg.push_str("</svg>\n");
        svg
    }
}
