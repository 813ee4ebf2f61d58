//! # faxbox CAM tools
//!
//! Generates the laser cutting sheets of the fax machine organizer box.
//!
//! ## Modules
//!
//! - **Panel**: finger-joint rectangular walls, finger holes and cutouts with burn compensation
//! - **Document**: places panels with a cursor and writes a flat SVG sheet
//! - **Pixel Font**: 5×7 engraved lettering
//! - **Parts**: the outer shell, drawer and lid sheets
//! - **Layout**: splices the three sheets into `final_layout.svg`
//! - **Verification**: static consistency checks over the dimension set

pub mod color;
pub mod document;
pub mod error;
pub mod layout;
pub mod panel;
pub mod parts;
pub mod pixel_font;
pub mod verification;

// Re-export commonly used items
pub use color::Color;
pub use document::{fmt_mm, LayoutCursor, RenderedPanel, SvgDocument};
pub use error::{
    CamToolError, CamToolResult, FileFormatError, FileFormatResult, ParameterError,
    ParameterResult,
};
pub use layout::{
    compose_layout, extract_svg_content, generate_layout, normalize_stroke_colors,
    parse_svg_dimensions, ComposedLayout, LayoutReport, LayoutSource, LAYOUT_FILE,
};
pub use panel::{
    BoundingBox, Cutout, Decoration, EdgeCodes, EdgeKind, FingerHoleRow, FingerJointSettings,
    Outline, PanelRenderer, PanelSpec, Placement, Point, RendererSettings, StrokeRole,
};
pub use parts::{
    generate_drawer, generate_lids, generate_shell, PartReport, DRAWER_FILE, LIDS_FILE,
    SHELL_FILE,
};
pub use pixel_font::PixelFont;
pub use verification::{verify_dimensions, DimensionIssue};
