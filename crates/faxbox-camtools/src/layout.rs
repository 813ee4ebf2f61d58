//! Final layout sheet
//!
//! Splices the three part sheets into one SVG as text: each source's inner
//! markup is wrapped in a translated `<g>`. Row one holds the shell, row two
//! two copies of the drawer sheet followed by the lids.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use faxbox_core::{format_length, get_unit_label, BoxConfig, MeasurementSystem};
use regex::Regex;
use tracing::{debug, info};

use crate::document::fmt_mm;
use crate::error::{CamToolError, CamToolResult, FileFormatError, FileFormatResult};
use crate::panel::BoundingBox;
use crate::parts::{DRAWER_FILE, LIDS_FILE, SHELL_FILE};

pub const LAYOUT_FILE: &str = "final_layout.svg";
pub const LAYOUT_TITLE: &str = "Fax Machine Box - Final Layout";

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("invalid regex pattern"))
}

fn parse_number(attribute: &str, value: &str) -> FileFormatResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| FileFormatError::InvalidNumber {
            attribute: attribute.to_string(),
            value: value.to_string(),
        })
}

fn attribute<'a>(tag: &'a str, re: &Regex) -> Option<&'a str> {
    re.captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Read the sheet size from the root element's `viewBox`, falling back to
/// its `width`/`height` attributes with any unit suffix removed
pub fn parse_svg_dimensions(content: &str) -> FileFormatResult<BoundingBox> {
    static ROOT: OnceLock<Regex> = OnceLock::new();
    static VIEWBOX: OnceLock<Regex> = OnceLock::new();
    static WIDTH: OnceLock<Regex> = OnceLock::new();
    static HEIGHT: OnceLock<Regex> = OnceLock::new();

    let root = regex(&ROOT, r"<svg\b[^>]*>")
        .find(content)
        .ok_or_else(|| FileFormatError::SvgParseError("missing <svg> root element".to_string()))?
        .as_str();

    if let Some(viewbox) = attribute(root, regex(&VIEWBOX, r#"viewBox\s*=\s*["']([^"']+)["']"#)) {
        let parts: Vec<&str> = viewbox
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .collect();
        if parts.len() == 4 {
            return Ok(BoundingBox::new(
                parse_number("viewBox", parts[2])?,
                parse_number("viewBox", parts[3])?,
            ));
        }
    }

    let width = attribute(root, regex(&WIDTH, r#"(?:^|\s)width\s*=\s*["']([^"']+)["']"#));
    let height = attribute(root, regex(&HEIGHT, r#"(?:^|\s)height\s*=\s*["']([^"']+)["']"#));
    match (width, height) {
        (Some(w), Some(h)) => Ok(BoundingBox::new(
            parse_number("width", strip_unit(w))?,
            parse_number("height", strip_unit(h))?,
        )),
        _ => Err(FileFormatError::MissingDimensions),
    }
}

fn strip_unit(value: &str) -> &str {
    value.trim().trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%')
}

/// Inner markup of an SVG document without declaration, metadata, title or comments
pub fn extract_svg_content(content: &str) -> String {
    static DECLARATION: OnceLock<Regex> = OnceLock::new();
    static BODY: OnceLock<Regex> = OnceLock::new();
    static METADATA: OnceLock<Regex> = OnceLock::new();
    static TITLE: OnceLock<Regex> = OnceLock::new();
    static COMMENT: OnceLock<Regex> = OnceLock::new();

    let without_decl = regex(&DECLARATION, r"<\?xml[^?]*\?>\s*").replace_all(content, "");
    let body = regex(&BODY, r"(?s)<svg[^>]*>(.*)</svg>")
        .captures(&without_decl)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| without_decl.to_string());

    let body = regex(&METADATA, r"(?s)<metadata\b[^>]*>.*?</metadata>").replace_all(&body, "");
    let body = regex(&TITLE, r"(?s)<title\b[^>]*>.*?</title>").replace_all(&body, "");
    let body = regex(&COMMENT, r"(?s)<!--.*?-->").replace_all(&body, "");
    body.trim().to_string()
}

/// Rewrite black strokes to the cut blue; red engrave strokes are left alone
pub fn normalize_stroke_colors(content: &str) -> String {
    content
        .replace(r#"stroke="rgb(0,0,0)""#, r#"stroke="rgb(0,0,255)""#)
        .replace(r##"stroke="#000000""##, r##"stroke="#0000FF""##)
        .replace(r##"stroke="black""##, r##"stroke="#0000FF""##)
}

/// One part sheet prepared for splicing
#[derive(Debug, Clone)]
pub struct LayoutSource {
    pub size: BoundingBox,
    pub content: String,
}

impl LayoutSource {
    pub fn from_svg(svg: &str) -> FileFormatResult<Self> {
        Ok(Self {
            size: parse_svg_dimensions(svg)?,
            content: normalize_stroke_colors(&extract_svg_content(svg)),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ComposedLayout {
    pub size: BoundingBox,
    pub shell: BoundingBox,
    pub drawer: BoundingBox,
    pub lids: BoundingBox,
    pub svg: String,
}

struct Group<'a> {
    id: &'static str,
    label: &'static str,
    x: f64,
    y: f64,
    content: &'a str,
}

/// Arrange the three sheets: shell on the first row, drawer, drawer and lids
/// side by side on the second
pub fn compose_layout(
    shell: &LayoutSource,
    drawer: &LayoutSource,
    lids: &LayoutSource,
    spacing: f64,
    material_thickness: f64,
) -> ComposedLayout {
    let row2_width = 2.0 * drawer.size.width + lids.size.width + 2.0 * spacing;
    let width = shell.size.width.max(row2_width);
    let height = shell.size.height + spacing + drawer.size.height.max(lids.size.height);
    let row2_y = shell.size.height + spacing;

    let groups = [
        Group {
            id: "outer-shell",
            label: "Outer Shell",
            x: 0.0,
            y: 0.0,
            content: &shell.content,
        },
        Group {
            id: "drawer-1",
            label: "Drawer 1",
            x: 0.0,
            y: row2_y,
            content: &drawer.content,
        },
        Group {
            id: "drawer-2",
            label: "Drawer 2",
            x: drawer.size.width + spacing,
            y: row2_y,
            content: &drawer.content,
        },
        Group {
            id: "lids",
            label: "Lids",
            x: 2.0 * drawer.size.width + 2.0 * spacing,
            y: row2_y,
            content: &lids.content,
        },
    ];

    let (w, h) = (fmt_mm(width), fmt_mm(height));
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         xmlns:inkscape=\"http://www.inkscape.org/namespaces/inkscape\" \
         width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\">\n"
    ));
    svg.push_str(&format!(
        "<!--\n\
         Fax Machine Box - all parts on one sheet\n\
         \n\
         Color coding:\n  Blue (#0000FF) = Cut lines\n  Red (#FF0000) = Engrave lines\n\
         \n\
         Parts included:\n  - Outer shell\n  - 2x Drawer\n  - Lids (sliding and flat)\n\
         \n\
         Material: {}mm\n\
         Total dimensions: {:.1}mm x {:.1}mm\n\
         -->\n",
        fmt_mm(material_thickness),
        width,
        height
    ));
    svg.push_str(&format!("<title>{}</title>\n", LAYOUT_TITLE));

    for group in &groups {
        debug!("Layout group {} at ({:.2}, {:.2})", group.id, group.x, group.y);
        svg.push_str(&format!(
            "<!-- {} -->\n<g id=\"{}\" transform=\"translate({}, {})\" inkscape:label=\"{}\">\n{}\n</g>\n",
            group.label,
            group.id,
            fmt_mm(group.x),
            fmt_mm(group.y),
            group.label,
            group.content
        ));
    }
    svg.push_str("</svg>\n");

    ComposedLayout {
        size: BoundingBox::new(width, height),
        shell: shell.size,
        drawer: drawer.size,
        lids: lids.size,
        svg,
    }
}

/// Sources the layout reads, with the command producing each
const SOURCES: [(&str, &str); 3] = [
    (SHELL_FILE, "faxbox shell"),
    (DRAWER_FILE, "faxbox drawer"),
    (LIDS_FILE, "faxbox lids"),
];

fn read_source(path: &Path) -> CamToolResult<LayoutSource> {
    let svg = fs::read_to_string(path)?;
    Ok(LayoutSource::from_svg(&svg)?)
}

/// Combine the part sheets in `output_dir` into `final_layout.svg`
pub fn generate_layout(config: &BoxConfig, output_dir: &Path) -> CamToolResult<LayoutReport> {
    let (missing, commands): (Vec<String>, Vec<String>) = SOURCES
        .iter()
        .filter(|(file, _)| !output_dir.join(file).exists())
        .map(|(file, command)| (file.to_string(), command.to_string()))
        .unzip();
    if !missing.is_empty() {
        return Err(CamToolError::MissingSources { missing, commands });
    }

    let shell = read_source(&output_dir.join(SHELL_FILE))?;
    let drawer = read_source(&output_dir.join(DRAWER_FILE))?;
    let lids = read_source(&output_dir.join(LIDS_FILE))?;

    let layout = compose_layout(
        &shell,
        &drawer,
        &lids,
        config.layout_spacing,
        config.material_thickness,
    );

    let path = output_dir.join(LAYOUT_FILE);
    fs::write(&path, &layout.svg)?;
    info!("Generated final layout: {}", path.display());

    Ok(LayoutReport { path, layout })
}

#[derive(Debug, Clone)]
pub struct LayoutReport {
    pub path: PathBuf,
    pub layout: ComposedLayout,
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metric = MeasurementSystem::Metric;
        let imperial = MeasurementSystem::Imperial;
        let size = |b: &BoundingBox, system| {
            format!(
                "{}{unit} x {}{unit}",
                format_length(b.width, system),
                format_length(b.height, system),
                unit = get_unit_label(system)
            )
        };
        let layout = &self.layout;

        writeln!(f, "Generated final layout: {}", self.path.display())?;
        writeln!(f, "Layout dimensions: {}", size(&layout.size, metric))?;
        writeln!(f, "  ({})", size(&layout.size, imperial))?;
        writeln!(f, "Parts included:")?;
        writeln!(f, "  - Outer shell: {}", size(&layout.shell, metric))?;
        writeln!(f, "  - 2x Drawers: {} each", size(&layout.drawer, metric))?;
        writeln!(f, "  - Lids: {}", size(&layout.lids, metric))?;
        writeln!(f, "Color coding:")?;
        writeln!(f, "  Blue (#0000FF) = Cut lines")?;
        writeln!(f, "  Red (#FF0000) = Engrave lines")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(width: f64, height: f64, body: &str) -> LayoutSource {
        LayoutSource::from_svg(&format!(
            r#"<?xml version="1.0"?><svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">{}</svg>"#,
            width, height, body
        ))
        .unwrap()
    }

    #[test]
    fn test_parse_viewbox() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10mm" height="20mm" viewBox="0 0 123.5 45"></svg>"#;
        assert_eq!(parse_svg_dimensions(svg).unwrap(), BoundingBox::new(123.5, 45.0));

        let svg = r#"<svg viewBox="0,0,10,20"/>"#;
        assert_eq!(parse_svg_dimensions(svg).unwrap(), BoundingBox::new(10.0, 20.0));
    }

    #[test]
    fn test_parse_width_height_fallback() {
        let svg = r#"<svg width="100mm" height="50.5mm"><path stroke-width="0.1"/></svg>"#;
        assert_eq!(parse_svg_dimensions(svg).unwrap(), BoundingBox::new(100.0, 50.5));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_svg_dimensions(r#"<svg xmlns="http://www.w3.org/2000/svg"></svg>"#),
            Err(FileFormatError::MissingDimensions)
        ));
        assert!(matches!(
            parse_svg_dimensions(r#"<svg width="wide" height="10"></svg>"#),
            Err(FileFormatError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_svg_dimensions("<html></html>"),
            Err(FileFormatError::SvgParseError(_))
        ));
    }

    #[test]
    fn test_extract_content() {
        let svg = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10">
<metadata><rdf:RDF>x</rdf:RDF></metadata>
<title>Part</title>
<!-- Front -->
<path d="M 0 0 L 1 1 Z"/>
</svg>"#;
        assert_eq!(extract_svg_content(svg), r#"<path d="M 0 0 L 1 1 Z"/>"#);
    }

    #[test]
    fn test_normalize_colors() {
        let input = r##"<path stroke="rgb(0,0,0)"/><path stroke="black"/><path stroke="#000000"/><path stroke="rgb(255,0,0)"/>"##;
        let out = normalize_stroke_colors(input);
        assert_eq!(
            out,
            r##"<path stroke="rgb(0,0,255)"/><path stroke="#0000FF"/><path stroke="#0000FF"/><path stroke="rgb(255,0,0)"/>"##
        );
    }

    #[test]
    fn test_compose_layout_positions() {
        let shell = source(500.0, 300.0, "<path/>");
        let drawer = source(100.0, 80.0, "<path/>");
        let lids = source(150.0, 90.0, "<path/>");
        let layout = compose_layout(&shell, &drawer, &lids, 5.0, 3.175);

        assert_eq!(layout.size, BoundingBox::new(500.0, 395.0));
        assert_eq!(layout.svg.matches("<g").count(), 4);
        assert!(layout.svg.contains(r#"viewBox="0 0 500 395""#));
        assert!(layout.svg.contains(r#"<g id="outer-shell" transform="translate(0, 0)""#));
        assert!(layout.svg.contains(r#"<g id="drawer-1" transform="translate(0, 305)""#));
        assert!(layout.svg.contains(r#"<g id="drawer-2" transform="translate(105, 305)""#));
        assert!(layout.svg.contains(r#"<g id="lids" transform="translate(210, 305)""#));
    }

    #[test]
    fn test_compose_layout_wide_second_row() {
        let shell = source(200.0, 100.0, "");
        let drawer = source(100.0, 80.0, "");
        let lids = source(150.0, 90.0, "");
        let layout = compose_layout(&shell, &drawer, &lids, 5.0, 3.0);
        assert_eq!(layout.size.width, 360.0);
        assert_eq!(layout.size.height, 195.0);
    }

    #[test]
    fn test_report_display() {
        let shell = source(254.0, 100.0, "");
        let drawer = source(100.0, 80.0, "");
        let lids = source(40.0, 90.0, "");
        let report = LayoutReport {
            path: PathBuf::from("output/final_layout.svg"),
            layout: compose_layout(&shell, &drawer, &lids, 5.0, 3.0),
        };
        let text = report.to_string();
        assert!(text.contains("Layout dimensions: 254.0mm x 195.0mm"));
        assert!(text.contains("(10.0in x 7.7in)"));
        assert!(text.contains("2x Drawers: 100.0mm x 80.0mm each"));
    }
}
