//! Part sheet generators
//!
//! Each generator turns the dimension set into a list of [`PanelSpec`]s, renders
//! them into one [`SvgDocument`] and writes it to the output directory.

pub mod drawer;
pub mod lids;
pub mod shell;

pub use drawer::{build_drawer_document, drawer_panels, generate_drawer};
pub use lids::{build_lids_document, generate_lids, lid_panels};
pub use shell::{build_shell_document, generate_shell, shell_panels};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use faxbox_core::BoxConfig;

use crate::color::Color;
use crate::document::SvgDocument;
use crate::error::CamToolResult;
use crate::panel::{BoundingBox, PanelRenderer, PanelSpec, RendererSettings};

pub const SHELL_FILE: &str = "outer_shell.svg";
pub const DRAWER_FILE: &str = "drawer.svg";
pub const LIDS_FILE: &str = "lids.svg";

/// Render `panels` in order into a fresh document
pub(crate) fn render_panels(
    title: &str,
    config: &BoxConfig,
    cut_color: Color,
    panels: &[PanelSpec],
) -> CamToolResult<SvgDocument> {
    config.validate()?;
    let renderer = PanelRenderer::new(RendererSettings::from(config))?;
    let mut doc = SvgDocument::new(title, renderer);
    doc.set_cut_color(cut_color);
    for panel in panels {
        doc.rectangular_wall(panel);
    }
    Ok(doc)
}

/// Write a document under `output_dir`, creating the directory if needed
pub fn write_document(doc: &SvgDocument, output_dir: &Path, file_name: &str) -> CamToolResult<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    fs::write(&path, doc.to_svg())?;
    Ok(path)
}

/// What a generator wrote, for the summary printed after each step
#[derive(Debug, Clone)]
pub struct PartReport {
    pub name: &'static str,
    pub path: PathBuf,
    pub panel_count: usize,
    pub extents: BoundingBox,
    pub details: Vec<String>,
}

impl fmt::Display for PartReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated {} SVG: {}", self.name, self.path.display())?;
        writeln!(
            f,
            "  Sheet: {:.1}mm x {:.1}mm, {} panels",
            self.extents.width, self.extents.height, self.panel_count
        )?;
        for line in &self.details {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CamToolError;

    #[test]
    fn test_invalid_dimensions_are_rejected() {
        let config = BoxConfig {
            kerf: 0.0,
            ..BoxConfig::default()
        };
        let err = match build_drawer_document(&config) {
            Err(err) => err,
            Ok(_) => panic!("zero kerf accepted"),
        };
        assert!(matches!(err, CamToolError::Dimension(_)));
    }

    #[test]
    fn test_part_report_display() {
        let report = PartReport {
            name: "drawer",
            path: PathBuf::from("output/drawer.svg"),
            panel_count: 5,
            extents: BoundingBox::new(320.0, 180.5),
            details: vec!["Material thickness: 3.175mm".to_string()],
        };
        let text = report.to_string();
        assert!(text.starts_with("Generated drawer SVG: output/drawer.svg\n"));
        assert!(text.contains("  Sheet: 320.0mm x 180.5mm, 5 panels\n"));
        assert!(text.ends_with("  Material thickness: 3.175mm\n"));
    }
}
