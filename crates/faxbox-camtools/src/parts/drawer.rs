//! Open-top drawer with a finger-notch pull in the front.
//! Two identical drawers are cut from this sheet.

use std::path::Path;

use faxbox_core::BoxConfig;
use tracing::info;

use crate::color::Color;
use crate::document::SvgDocument;
use crate::error::{CamToolResult, ParameterResult};
use crate::panel::{Cutout, PanelSpec, Placement};

use super::{render_panels, write_document, PartReport, DRAWER_FILE};

pub const DRAWER_TITLE: &str = "Fax Machine Drawer";

/// Rounded pull hole centered at the top of the drawer front, one thickness below the edge
pub fn finger_notch(config: &BoxConfig) -> Cutout {
    let radius = config.finger_notch_radius;
    let drawer = &config.drawer;
    Cutout::rounded(
        drawer.width / 2.0,
        drawer.height - radius / 2.0 - config.material_thickness,
        2.0 * radius,
        radius,
        radius / 2.0,
    )
}

pub fn drawer_panels(config: &BoxConfig) -> ParameterResult<Vec<PanelSpec>> {
    let (x, y, h) = (config.drawer.width, config.drawer.depth, config.drawer.height);

    Ok(vec![
        PanelSpec::new("Front", x, h, "Ffef")?
            .with_decorations([finger_notch(config)])
            .placed(Placement::Right),
        PanelSpec::new("Back", x, h, "Ffef")?.placed(Placement::Up),
        PanelSpec::new("Left Side", y, h, "FFeF")?,
        PanelSpec::new("Right Side", y, h, "FFeF")?.placed(Placement::LeftUp),
        PanelSpec::new("Bottom", x, y, "ffff")?.placed(Placement::Up),
    ])
}

pub fn build_drawer_document(config: &BoxConfig) -> CamToolResult<SvgDocument> {
    render_panels(DRAWER_TITLE, config, Color::CUT_BLUE, &drawer_panels(config)?)
}

/// Generate `drawer.svg` in `output_dir`
pub fn generate_drawer(config: &BoxConfig, output_dir: &Path) -> CamToolResult<PartReport> {
    let doc = build_drawer_document(config)?;
    let path = write_document(&doc, output_dir, DRAWER_FILE)?;
    info!("Generated drawer SVG: {}", path.display());

    let drawer = &config.drawer;
    let external = config.derived().drawer_external;
    Ok(PartReport {
        name: "drawer",
        path,
        panel_count: doc.panels().len(),
        extents: doc.extents(),
        details: vec![
            format!(
                "Internal dimensions: {}mm x {}mm x {}mm",
                drawer.width, drawer.depth, drawer.height
            ),
            format!(
                "External dimensions: {:.3}mm x {:.3}mm x {:.3}mm",
                external.width, external.depth, external.height
            ),
            format!("Material thickness: {}mm", config.material_thickness),
            "Cut this sheet twice for two drawers".to_string(),
        ],
    })
}
