//! Lids: a sliding lid over the paper compartment, with two tab strips glued
//! under its edges to run in the side wall grooves, and a flat lid over the
//! drawer bay located by four alignment tabs.

use std::path::Path;

use faxbox_core::{BoxConfig, DerivedDimensions};
use tracing::info;

use crate::color::Color;
use crate::document::SvgDocument;
use crate::error::{CamToolResult, ParameterResult};
use crate::panel::{Cutout, PanelSpec, Placement};

use super::{render_panels, write_document, PartReport, LIDS_FILE};

pub const LIDS_TITLE: &str = "Fax Machine Lids";

const ALIGNMENT_TABS: usize = 4;

/// Holes marking where the alignment tabs are glued, inset from each corner
pub fn alignment_tab_holes(config: &BoxConfig, derived: &DerivedDimensions) -> [Cutout; 4] {
    let inset = config.flat_lid_tab_inset;
    let (w, l) = (derived.flat_lid_width, derived.flat_lid_length);
    let (tw, td) = (config.flat_lid_tab_width, config.flat_lid_tab_depth);

    [
        Cutout::rectangle(inset, inset, tw, td),
        Cutout::rectangle(w - inset, inset, tw, td),
        Cutout::rectangle(inset, l - inset, tw, td),
        Cutout::rectangle(w - inset, l - inset, tw, td),
    ]
}

pub fn lid_panels(config: &BoxConfig) -> ParameterResult<Vec<PanelSpec>> {
    let derived = config.derived();
    let tab_depth = config.sliding_lid_tab_depth;

    let mut panels = vec![
        PanelSpec::new(
            "Sliding Lid (Paper)",
            derived.sliding_lid_width,
            derived.sliding_lid_length,
            "eeee",
        )?
        .placed(Placement::Right),
        PanelSpec::new("Sliding Lid - Left Tab", tab_depth, derived.sliding_lid_tab_length, "eeee")?
            .placed(Placement::Right),
        PanelSpec::new("Sliding Lid - Right Tab", tab_depth, derived.sliding_lid_tab_length, "eeee")?
            .placed(Placement::Up),
        PanelSpec::new(
            "Flat Lid (Drawer Bay)",
            derived.flat_lid_width,
            derived.flat_lid_length,
            "eeee",
        )?
        .with_decorations(alignment_tab_holes(config, &derived))
        .placed(Placement::Right),
    ];

    for i in 0..ALIGNMENT_TABS {
        let placement = if i + 1 < ALIGNMENT_TABS {
            Placement::Right
        } else {
            Placement::Up
        };
        panels.push(
            PanelSpec::new(
                format!("Alignment Tab {}", i + 1),
                config.flat_lid_tab_width,
                config.flat_lid_tab_depth,
                "eeee",
            )?
            .placed(placement),
        );
    }

    Ok(panels)
}

pub fn build_lids_document(config: &BoxConfig) -> CamToolResult<SvgDocument> {
    render_panels(LIDS_TITLE, config, Color::CUT_BLUE, &lid_panels(config)?)
}

/// Generate `lids.svg` in `output_dir`
pub fn generate_lids(config: &BoxConfig, output_dir: &Path) -> CamToolResult<PartReport> {
    let doc = build_lids_document(config)?;
    let path = write_document(&doc, output_dir, LIDS_FILE)?;
    info!("Generated lids SVG: {}", path.display());

    let derived = config.derived();
    Ok(PartReport {
        name: "lids",
        path,
        panel_count: doc.panels().len(),
        extents: doc.extents(),
        details: vec![
            format!(
                "Sliding lid: {:.3}mm x {:.3}mm ({:.3}mm across the tabs)",
                derived.sliding_lid_width, derived.sliding_lid_length, derived.sliding_lid_span
            ),
            format!(
                "Flat lid: {:.3}mm x {:.3}mm",
                derived.flat_lid_width, derived.flat_lid_length
            ),
            format!(
                "Lid groove: {}mm wide, {}mm deep",
                config.lid_groove_width, config.lid_groove_depth
            ),
        ],
    })
}
