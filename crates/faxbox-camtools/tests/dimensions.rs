//! Dimension consistency of the shipped configuration.
//!
//! These checks must hold before a sheet is sent to the laser.

use faxbox_camtools::verification::{
    verify_dimensions, DRAWER_CLEARANCE_RANGE, MATERIAL_THICKNESS_RANGE, MIN_FINGER_EDGE,
    MIN_FINGER_JOINT_MATERIAL, MIN_USABLE_DEPTH,
};
use faxbox_core::BoxConfig;

fn config() -> BoxConfig {
    BoxConfig::default()
}

#[test]
fn test_shipped_configuration_passes_all_rules() {
    let issues = verify_dimensions(&config());
    assert!(issues.is_empty(), "{:#?}", issues);
}

// Drawers fit in the shell

#[test]
fn test_drawer_width_fits_in_shell() {
    let c = config();
    let d = c.derived();
    let needed = d.drawer_external.width + 2.0 * c.drawer_clearance;
    assert!(needed <= d.shell_internal.width);
}

#[test]
fn test_drawer_depth_reasonable_for_shell() {
    let c = config();
    let depth = c.derived().drawer_external.depth;
    assert!(depth <= 2.0 * c.shell.depth);
    assert!(depth >= MIN_USABLE_DEPTH);
}

#[test]
fn test_drawer_fits_bay_in_front_of_divider() {
    let d = config().derived();
    assert!(d.drawer_external.depth <= d.drawer_bay_depth);
}

#[test]
fn test_drawer_deeper_than_bay_is_reported() {
    let mut c = config();
    c.drawer.depth = 240.0;
    let issues = verify_dimensions(&c);
    assert!(
        issues.iter().any(|i| i.rule == "drawer-bay-fit"),
        "{:#?}",
        issues
    );
}

#[test]
fn test_drawer_height_fits_in_shell() {
    let c = config();
    let d = c.derived();
    assert!(d.drawer_external.height + 2.0 * c.drawer_clearance <= d.shell_internal.height);
}

#[test]
fn test_two_drawers_fit_vertically() {
    let c = config();
    let t = c.material_thickness;
    let stack = 2.0 * c.drawer.height + 2.0 * t + t + 4.0 * c.drawer_clearance;
    assert!(stack <= c.derived().shell_internal.height);
}

// Material thickness

#[test]
fn test_material_thickness_reasonable() {
    let t = config().material_thickness;
    let (min, max) = MATERIAL_THICKNESS_RANGE;
    assert!(t > 0.0);
    assert!((min..=max).contains(&t));
    assert!(t >= MIN_FINGER_JOINT_MATERIAL);
}

#[test]
fn test_shell_internal_is_external_minus_walls() {
    let c = config();
    let d = c.derived();
    let t = c.material_thickness;
    assert_eq!(d.shell_internal.width, c.shell.width - 2.0 * t);
    assert_eq!(d.shell_internal.depth, c.shell.depth - 2.0 * t);
    assert_eq!(d.shell_internal.height, c.shell.height - 2.0 * t);
    assert!(d.shell_internal.min_dimension() > 0.0);
    assert!(d.shell_internal.volume() < c.shell.volume());
}

// Divider and shelf

#[test]
fn test_paper_compartment_fits_shell() {
    let c = config();
    assert!(c.paper_compartment_depth > 0.0);
    assert!(c.paper_compartment_depth < c.derived().shell_internal.depth);
}

#[test]
fn test_divider_leaves_drawer_bay() {
    let d = config().derived();
    assert!(d.drawer_bay_depth >= MIN_USABLE_DEPTH);
    assert!(d.divider_offset > d.drawer_bay_depth);
}

// Lids

#[test]
fn test_lid_groove_and_tabs() {
    let c = config();
    assert!(c.lid_groove_width > c.material_thickness);
    assert!(c.sliding_lid_tab_depth < c.lid_groove_depth);
    assert!(c.lid_tab_clearance > 0.0);
    assert!(c.lid_tab_clearance < c.lid_groove_width);
    assert!(c.flat_lid_tab_width > 0.0 && c.flat_lid_tab_depth > 0.0);
}

#[test]
fn test_sliding_lid_spans_both_grooves() {
    let c = config();
    let d = c.derived();
    assert!(d.sliding_lid_span > d.shell_internal.width);
    assert!(d.sliding_lid_span < d.shell_internal.width + 2.0 * c.lid_groove_depth);
}

// Finger joints

#[test]
fn test_dimensions_allow_multiple_fingers() {
    let c = config();
    assert!(c.drawer.min_dimension() >= MIN_FINGER_EDGE);
    assert!(c.shell.min_dimension() >= MIN_FINGER_EDGE);
}

// Clearances

#[test]
fn test_drawer_clearance_reasonable() {
    let (min, max) = DRAWER_CLEARANCE_RANGE;
    assert!((min..=max).contains(&config().drawer_clearance));
}

// Rule reporting

#[test]
fn test_every_broken_rule_is_reported() {
    let mut c = config();
    c.lid_groove_width = 2.0;
    c.sliding_lid_tab_depth = 4.0;
    c.drawer_clearance = 5.0;

    let rules: Vec<&str> = verify_dimensions(&c).iter().map(|i| i.rule).collect();
    assert!(rules.contains(&"lid-groove-width"));
    assert!(rules.contains(&"sliding-lid-tab-depth"));
    assert!(rules.contains(&"drawer-clearance"));
}

#[test]
fn test_long_engraving_is_reported() {
    let mut c = config();
    c.engraving.text = "FAX MACHINE FAX MACHINE".to_string();
    let rules: Vec<&str> = verify_dimensions(&c).iter().map(|i| i.rule).collect();
    assert_eq!(rules, vec!["engraving-width"]);
}

#[test]
fn test_non_positive_value_is_reported() {
    let mut c = config();
    c.flat_lid_tab_width = 0.0;
    let issues = verify_dimensions(&c);
    assert!(issues.iter().any(|i| i.rule == "positive-values"));
    assert!(issues.iter().any(|i| i.rule == "flat-lid-tabs"));
}
