//! Dimension set for the fax machine organizer box
//!
//! All values are millimeters. The shell is specified by its external size,
//! the drawers by their internal size. The drawer bay sits at the front of the
//! shell, the paper compartment at the back, separated by a full-width divider;
//! a horizontal shelf splits the drawer bay into two drawer slots.

use serde::{Deserialize, Serialize};

use crate::error::DimensionError;

/// 1/8" plywood
pub const DEFAULT_MATERIAL_THICKNESS: f64 = 3.175;

/// Width/depth/height triple in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxExtent {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl BoxExtent {
    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Smallest of the three measurements
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.depth).min(self.height)
    }

    /// Enclosed volume in cubic millimeters
    pub fn volume(&self) -> f64 {
        self.width * self.depth * self.height
    }
}

/// Pixel-font engraving on the shell front wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngravingSettings {
    /// Text to engrave (upper-cased when rendered)
    pub text: String,
    /// Size of one font pixel
    pub pixel_size: f64,
    /// Gap between two glyphs
    pub char_spacing: f64,
    /// Distance from the top edge of the front wall to the top of the text
    pub top_margin: f64,
    /// Fraction of a pixel cell covered by its engraved square
    pub cell_fill: f64,
}

impl Default for EngravingSettings {
    fn default() -> Self {
        Self {
            text: "FAX MACHINE".to_string(),
            pixel_size: 3.0,
            char_spacing: 3.0,
            top_margin: 12.0,
            cell_fill: 0.85,
        }
    }
}

/// The complete dimension set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    /// Sheet material thickness
    pub material_thickness: f64,
    /// Laser beam width
    pub kerf: f64,
    /// Per-side burn compensation applied to finger joints and holes
    pub burn: f64,
    /// Shell external dimensions
    pub shell: BoxExtent,
    /// Drawer internal dimensions
    pub drawer: BoxExtent,
    /// Sliding clearance per drawer side
    pub drawer_clearance: f64,
    /// Depth of the paper compartment behind the divider
    pub paper_compartment_depth: f64,
    /// Height of the sliding-lid groove cut into the side walls
    pub lid_groove_width: f64,
    /// How far the groove reaches into the wall
    pub lid_groove_depth: f64,
    /// Distance from the top edge of the side walls to the groove
    pub lid_groove_inset: f64,
    /// Clearance between a lid tab and its groove
    pub lid_tab_clearance: f64,
    /// Clearance between a lid and the compartment it covers
    pub lid_clearance: f64,
    /// Width of the tab strips running in the grooves
    pub sliding_lid_tab_depth: f64,
    /// Alignment tab size under the flat lid
    pub flat_lid_tab_width: f64,
    pub flat_lid_tab_depth: f64,
    /// Alignment tab distance from the flat lid corners
    pub flat_lid_tab_inset: f64,
    /// Radius of the finger-notch pull on the drawer fronts
    pub finger_notch_radius: f64,
    pub engraving: EngravingSettings,
    /// Gap between panels within one part sheet
    pub part_spacing: f64,
    /// Gap between parts in the final layout
    pub layout_spacing: f64,
}

impl Default for BoxConfig {
    fn default() -> Self {
        let t = DEFAULT_MATERIAL_THICKNESS;
        Self {
            material_thickness: t,
            kerf: 0.1,
            burn: 0.05,
            shell: BoxExtent::new(240.0, 290.0, 200.0),
            drawer: BoxExtent::new(150.0, 210.0, 50.0),
            drawer_clearance: 1.0,
            paper_compartment_depth: 60.0,
            lid_groove_width: 3.5,
            lid_groove_depth: 3.0,
            lid_groove_inset: 6.0,
            lid_tab_clearance: 0.5,
            lid_clearance: 0.5,
            sliding_lid_tab_depth: 2.0,
            flat_lid_tab_width: 2.0 * t,
            flat_lid_tab_depth: 2.0 * t,
            flat_lid_tab_inset: 10.0,
            finger_notch_radius: 15.0,
            engraving: EngravingSettings::default(),
            part_spacing: 5.0,
            layout_spacing: 5.0,
        }
    }
}

impl BoxConfig {
    /// Every millimeter value of the set, keyed by its configuration path
    pub fn named_values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("material_thickness", self.material_thickness),
            ("kerf", self.kerf),
            ("burn", self.burn),
            ("shell.width", self.shell.width),
            ("shell.depth", self.shell.depth),
            ("shell.height", self.shell.height),
            ("drawer.width", self.drawer.width),
            ("drawer.depth", self.drawer.depth),
            ("drawer.height", self.drawer.height),
            ("drawer_clearance", self.drawer_clearance),
            ("paper_compartment_depth", self.paper_compartment_depth),
            ("lid_groove_width", self.lid_groove_width),
            ("lid_groove_depth", self.lid_groove_depth),
            ("lid_groove_inset", self.lid_groove_inset),
            ("lid_tab_clearance", self.lid_tab_clearance),
            ("lid_clearance", self.lid_clearance),
            ("sliding_lid_tab_depth", self.sliding_lid_tab_depth),
            ("flat_lid_tab_width", self.flat_lid_tab_width),
            ("flat_lid_tab_depth", self.flat_lid_tab_depth),
            ("flat_lid_tab_inset", self.flat_lid_tab_inset),
            ("finger_notch_radius", self.finger_notch_radius),
            ("engraving.pixel_size", self.engraving.pixel_size),
            ("engraving.char_spacing", self.engraving.char_spacing),
            ("engraving.top_margin", self.engraving.top_margin),
            ("engraving.cell_fill", self.engraving.cell_fill),
            ("part_spacing", self.part_spacing),
            ("layout_spacing", self.layout_spacing),
        ]
    }

    /// Check that every value is finite and positive.
    ///
    /// This does not check that the values describe a box that can be
    /// assembled; see the verification rules in `faxbox-camtools` for that.
    pub fn validate(&self) -> Result<(), DimensionError> {
        for (name, value) in self.named_values() {
            if !value.is_finite() {
                return Err(DimensionError::NotFinite {
                    name: name.to_string(),
                });
            }
            if value <= 0.0 {
                return Err(DimensionError::NonPositive {
                    name: name.to_string(),
                    value,
                });
            }
        }

        if self.engraving.cell_fill > 1.0 {
            return Err(DimensionError::OutOfRange {
                name: "engraving.cell_fill".to_string(),
                value: self.engraving.cell_fill,
                min: 0.0,
                max: 1.0,
            });
        }

        Ok(())
    }

    /// Secondary measurements computed from this set
    pub fn derived(&self) -> DerivedDimensions {
        DerivedDimensions::from(self)
    }
}

/// Measurements computed from a [`BoxConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedDimensions {
    /// Shell external size minus two walls on every axis
    pub shell_internal: BoxExtent,
    /// Drawer size including its walls and bottom (open top)
    pub drawer_external: BoxExtent,
    /// Opening cut into the front wall for one drawer
    pub drawer_opening_width: f64,
    pub drawer_opening_height: f64,
    /// Depth available to the drawers in front of the divider
    pub drawer_bay_depth: f64,
    /// Height of the shelf's lower face above the shell floor
    pub shelf_height: f64,
    /// Distance from the front wall to the divider's center line
    pub divider_offset: f64,
    pub sliding_lid_width: f64,
    pub sliding_lid_length: f64,
    /// Length of the tab strips glued under the sliding lid edges
    pub sliding_lid_tab_length: f64,
    /// Sliding lid width including the tabs engaged in both grooves
    pub sliding_lid_span: f64,
    pub flat_lid_width: f64,
    pub flat_lid_length: f64,
    /// Length of the lid grooves along the side walls
    pub lid_groove_length: f64,
}

impl From<&BoxConfig> for DerivedDimensions {
    fn from(config: &BoxConfig) -> Self {
        let t = config.material_thickness;
        let clearance = config.drawer_clearance;

        let shell_internal = BoxExtent::new(
            config.shell.width - 2.0 * t,
            config.shell.depth - 2.0 * t,
            config.shell.height - 2.0 * t,
        );
        let drawer_external = BoxExtent::new(
            config.drawer.width + 2.0 * t,
            config.drawer.depth + 2.0 * t,
            config.drawer.height + t,
        );

        let drawer_bay_depth = shell_internal.depth - config.paper_compartment_depth - t;
        let shelf_height = (shell_internal.height - t) / 2.0;
        let sliding_lid_length = config.paper_compartment_depth - config.lid_clearance;

        Self {
            shell_internal,
            drawer_external,
            drawer_opening_width: drawer_external.width + 2.0 * clearance,
            drawer_opening_height: drawer_external.height + 2.0 * clearance,
            drawer_bay_depth,
            shelf_height,
            divider_offset: drawer_bay_depth + t / 2.0,
            sliding_lid_width: shell_internal.width - config.lid_clearance,
            sliding_lid_length,
            sliding_lid_tab_length: sliding_lid_length - 4.0 * t,
            sliding_lid_span: shell_internal.width + 2.0 * config.sliding_lid_tab_depth,
            flat_lid_width: shell_internal.width - config.lid_clearance,
            flat_lid_length: drawer_bay_depth - config.lid_clearance,
            lid_groove_length: config.paper_compartment_depth - 2.0 * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(BoxConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_internal_is_external_minus_two_walls() {
        let config = BoxConfig::default();
        let derived = config.derived();
        let t = config.material_thickness;

        assert!((derived.shell_internal.width - (config.shell.width - 2.0 * t)).abs() < EPS);
        assert!((derived.shell_internal.depth - (config.shell.depth - 2.0 * t)).abs() < EPS);
        assert!((derived.shell_internal.height - (config.shell.height - 2.0 * t)).abs() < EPS);
        assert!(derived.shell_internal.width > 0.0);
    }

    #[test]
    fn test_drawer_external_has_open_top() {
        let config = BoxConfig::default();
        let derived = config.derived();
        let t = config.material_thickness;

        assert!((derived.drawer_external.width - (config.drawer.width + 2.0 * t)).abs() < EPS);
        assert!((derived.drawer_external.height - (config.drawer.height + t)).abs() < EPS);
    }

    #[test]
    fn test_bay_and_shelf_formulas() {
        let config = BoxConfig::default();
        let derived = config.derived();
        let t = config.material_thickness;

        let expected_bay = derived.shell_internal.depth - config.paper_compartment_depth - t;
        assert!((derived.drawer_bay_depth - expected_bay).abs() < EPS);
        assert!((derived.shelf_height - (derived.shell_internal.height - t) / 2.0).abs() < EPS);
        assert!((derived.divider_offset - (expected_bay + t / 2.0)).abs() < EPS);
    }

    #[test]
    fn test_lid_sizes_leave_clearance() {
        let config = BoxConfig::default();
        let derived = config.derived();

        assert!(derived.sliding_lid_width < derived.shell_internal.width);
        assert!(derived.sliding_lid_length < config.paper_compartment_depth);
        assert!(derived.flat_lid_length < derived.drawer_bay_depth);
        assert!(derived.sliding_lid_span > derived.shell_internal.width);
        assert!(derived.sliding_lid_tab_length < derived.lid_groove_length);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let mut config = BoxConfig::default();
        config.drawer.depth = 0.0;
        assert_eq!(
            config.validate(),
            Err(DimensionError::NonPositive {
                name: "drawer.depth".to_string(),
                value: 0.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan_and_cell_fill() {
        let mut config = BoxConfig::default();
        config.kerf = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(DimensionError::NotFinite { .. })
        ));

        let mut config = BoxConfig::default();
        config.engraving.cell_fill = 1.5;
        assert!(matches!(
            config.validate(),
            Err(DimensionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: BoxConfig =
            serde_json::from_str(r#"{ "drawer": { "width": 222.0, "depth": 158.0, "height": 50.0 } }"#)
                .unwrap();
        assert_eq!(config.drawer.width, 222.0);
        assert_eq!(config.material_thickness, DEFAULT_MATERIAL_THICKNESS);
        assert_eq!(config.engraving.text, "FAX MACHINE");
    }
}
