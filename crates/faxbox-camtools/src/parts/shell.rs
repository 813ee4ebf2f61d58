//! Outer shell: four walls, bottom, the divider between the drawer bay and
//! the paper compartment, and the shelf between the two drawers.
//!
//! Panel coordinates: on the side walls x runs from the front (0) to the back,
//! on the front wall and bottom x runs across the box.

use std::path::Path;

use faxbox_core::{BoxConfig, DerivedDimensions};
use tracing::info;

use crate::color::Color;
use crate::document::SvgDocument;
use crate::error::{CamToolResult, ParameterResult};
use crate::panel::{Cutout, Decoration, FingerHoleRow, PanelSpec, Placement};
use crate::pixel_font::PixelFont;

use super::{render_panels, write_document, PartReport, SHELL_FILE};

pub const SHELL_TITLE: &str = "Fax Machine Outer Shell";

/// Corner radius of the drawer openings
const OPENING_RADIUS: f64 = 2.0;

/// Groove the sliding lid runs in, over the paper compartment
pub fn lid_groove(config: &BoxConfig, derived: &DerivedDimensions) -> Cutout {
    let internal = derived.shell_internal;
    let center_x = internal.depth - config.paper_compartment_depth / 2.0;
    let center_y = internal.height - config.lid_groove_inset - config.lid_groove_width / 2.0;
    Cutout::rectangle(
        center_x,
        center_y,
        derived.lid_groove_length,
        config.lid_groove_width,
    )
}

/// Holes for the shelf, running along a wall at the shelf's center line
fn shelf_holes(config: &BoxConfig, derived: &DerivedDimensions, length: f64) -> FingerHoleRow {
    let y = derived.shelf_height + config.material_thickness / 2.0;
    FingerHoleRow::horizontal(0.0, y, length)
}

pub fn side_wall_decorations(config: &BoxConfig, derived: &DerivedDimensions) -> Vec<Decoration> {
    let internal = derived.shell_internal;
    vec![
        lid_groove(config, derived).into(),
        FingerHoleRow::vertical(derived.divider_offset, 0.0, internal.height).into(),
        shelf_holes(config, derived, derived.drawer_bay_depth).into(),
    ]
}

/// Drawer openings: one below the shelf, one above it. Each starts one
/// thickness above the joint it sits on.
pub fn drawer_openings(config: &BoxConfig, derived: &DerivedDimensions) -> [Cutout; 2] {
    let t = config.material_thickness;
    let width = derived.drawer_opening_width;
    let height = derived.drawer_opening_height;
    let center_x = derived.shell_internal.width / 2.0;
    let bottom_y = t + height / 2.0;
    let top_y = derived.shelf_height + t + height / 2.0;

    [
        Cutout::rounded(center_x, bottom_y, width, height, OPENING_RADIUS),
        Cutout::rounded(center_x, top_y, width, height, OPENING_RADIUS),
    ]
}

/// Engraved label, centered across the front wall below its top edge
pub fn front_engraving(config: &BoxConfig, derived: &DerivedDimensions) -> Vec<Cutout> {
    let engraving = &config.engraving;
    let font = PixelFont::from(engraving);
    let internal = derived.shell_internal;

    let text_x = (internal.width - font.text_width(&engraving.text)) / 2.0;
    let text_y = internal.height - engraving.top_margin - font.text_height();
    font.render(&engraving.text, text_x, text_y)
}

pub fn front_wall_decorations(config: &BoxConfig, derived: &DerivedDimensions) -> Vec<Decoration> {
    let mut decorations: Vec<Decoration> = drawer_openings(config, derived)
        .into_iter()
        .map(Decoration::from)
        .collect();
    decorations.push(shelf_holes(config, derived, derived.shell_internal.width).into());
    decorations.extend(front_engraving(config, derived).into_iter().map(Decoration::from));
    decorations
}

/// Panels of the shell in drawing order
pub fn shell_panels(config: &BoxConfig) -> ParameterResult<Vec<PanelSpec>> {
    let derived = config.derived();
    let t = config.material_thickness;
    let internal = derived.shell_internal;
    let (x, y, h) = (internal.width, internal.depth, internal.height);

    let side = side_wall_decorations(config, &derived);

    Ok(vec![
        PanelSpec::new("Left Wall", y, h, "Ffef")?
            .with_decorations(side.clone())
            .placed(Placement::Right),
        PanelSpec::new("Right Wall", y, h, "Ffef")?
            .with_decorations(side)
            .placed(Placement::Up),
        PanelSpec::new("Front Wall", x, h, "FFeF")?
            .with_decorations(front_wall_decorations(config, &derived)),
        PanelSpec::new("Back Wall", x, h, "FFeF")?.placed(Placement::LeftUp),
        PanelSpec::new("Bottom", x, y, "ffff")?
            .with_decorations([FingerHoleRow::horizontal(0.0, derived.drawer_bay_depth + t / 2.0, x)])
            .placed(Placement::Up),
        PanelSpec::new("Vertical Divider", x, h, "ffef")?
            .with_decorations([shelf_holes(config, &derived, x)])
            .placed(Placement::Right),
        PanelSpec::new("Horizontal Shelf", x, derived.drawer_bay_depth, "ffff")?
            .placed(Placement::Up),
    ])
}

pub fn build_shell_document(config: &BoxConfig) -> CamToolResult<SvgDocument> {
    render_panels(SHELL_TITLE, config, Color::BLACK, &shell_panels(config)?)
}

/// Generate `outer_shell.svg` in `output_dir`
pub fn generate_shell(config: &BoxConfig, output_dir: &Path) -> CamToolResult<PartReport> {
    let doc = build_shell_document(config)?;
    let path = write_document(&doc, output_dir, SHELL_FILE)?;
    info!("Generated outer shell SVG: {}", path.display());

    let derived = config.derived();
    Ok(PartReport {
        name: "outer shell",
        path,
        panel_count: doc.panels().len(),
        extents: doc.extents(),
        details: vec![
            format!(
                "External dimensions: {}mm x {}mm x {}mm",
                config.shell.width, config.shell.depth, config.shell.height
            ),
            format!(
                "Internal dimensions: {:.3}mm x {:.3}mm x {:.3}mm",
                derived.shell_internal.width,
                derived.shell_internal.depth,
                derived.shell_internal.height
            ),
            format!("Paper compartment depth: {}mm", config.paper_compartment_depth),
            format!("Drawer bay depth: {:.3}mm", derived.drawer_bay_depth),
            format!("Material thickness: {}mm", config.material_thickness),
        ],
    })
}
