//! Static consistency checks over a dimension set.
//!
//! These rules catch configurations that cannot be assembled (drawers wider
//! than the shell, grooves thinner than the lid) before material is cut. The
//! part generators do not run them; `faxbox check` and the test suite do.

use std::fmt;

use faxbox_core::BoxConfig;

use crate::pixel_font::PixelFont;

/// Thinnest material that still holds finger joints
pub const MIN_FINGER_JOINT_MATERIAL: f64 = 2.0;
/// Typical laser cutting thickness range
pub const MATERIAL_THICKNESS_RANGE: (f64, f64) = (1.0, 6.0);
/// Three 5 mm fingers plus gaps
pub const MIN_FINGER_EDGE: f64 = 5.0 * 3.0 * 2.0;
/// Shallowest usable drawer or drawer bay
pub const MIN_USABLE_DEPTH: f64 = 50.0;
pub const DRAWER_CLEARANCE_RANGE: (f64, f64) = (0.5, 3.0);

const TOLERANCE: f64 = 1e-9;

/// A violated rule
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionIssue {
    pub rule: &'static str,
    pub message: String,
}

impl fmt::Display for DimensionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule, self.message)
    }
}

struct Checker {
    issues: Vec<DimensionIssue>,
}

impl Checker {
    fn check(&mut self, rule: &'static str, ok: bool, message: impl FnOnce() -> String) {
        if !ok {
            self.issues.push(DimensionIssue {
                rule,
                message: message(),
            });
        }
    }
}

/// Run every rule and return the violated ones; empty means the set is consistent
pub fn verify_dimensions(config: &BoxConfig) -> Vec<DimensionIssue> {
    let mut c = Checker { issues: Vec::new() };

    if let Err(e) = config.validate() {
        c.check("positive-values", false, || e.to_string());
    }

    let t = config.material_thickness;
    let clearance = config.drawer_clearance;
    let derived = config.derived();
    let internal = derived.shell_internal;

    // Material
    let (min_t, max_t) = MATERIAL_THICKNESS_RANGE;
    c.check("material-thickness", (min_t..=max_t).contains(&t), || {
        format!(
            "material thickness ({}mm) outside typical laser cutting range ({}-{}mm)",
            t, min_t, max_t
        )
    });
    c.check("finger-joint-material", t >= MIN_FINGER_JOINT_MATERIAL, || {
        format!(
            "material thickness ({}mm) too thin for finger joints (min {}mm)",
            t, MIN_FINGER_JOINT_MATERIAL
        )
    });
    c.check("burn-within-kerf", config.burn <= config.kerf / 2.0 + TOLERANCE, || {
        format!(
            "burn ({}mm) exceeds half the kerf ({}mm)",
            config.burn,
            config.kerf / 2.0
        )
    });

    // Shell
    c.check(
        "shell-internal-positive",
        internal.width > 0.0 && internal.depth > 0.0 && internal.height > 0.0,
        || {
            format!(
                "shell internal size {:.2} x {:.2} x {:.2}mm must be positive",
                internal.width, internal.depth, internal.height
            )
        },
    );
    c.check("shell-volume", internal.volume() < config.shell.volume(), || {
        "shell internal volume must be less than external volume".to_string()
    });

    // Drawers
    let drawer_width_needed = derived.drawer_external.width + 2.0 * clearance;
    c.check("drawer-width", drawer_width_needed <= internal.width, || {
        format!(
            "drawer external width ({:.3}mm) + clearance ({}mm) = {:.3}mm exceeds shell internal width ({:.3}mm)",
            derived.drawer_external.width,
            2.0 * clearance,
            drawer_width_needed,
            internal.width
        )
    });

    let drawer_depth = derived.drawer_external.depth;
    c.check("drawer-depth", drawer_depth <= 2.0 * config.shell.depth, || {
        format!(
            "drawer external depth ({:.3}mm) exceeds 2x shell external depth ({}mm)",
            drawer_depth,
            2.0 * config.shell.depth
        )
    });
    c.check("drawer-depth", drawer_depth >= MIN_USABLE_DEPTH, || {
        format!("drawer external depth ({:.3}mm) too shallow", drawer_depth)
    });

    let one_drawer = derived.drawer_external.height + 2.0 * clearance;
    c.check("drawer-height", one_drawer <= internal.height, || {
        format!(
            "drawer external height + clearance ({:.3}mm) exceeds shell internal height ({:.3}mm)",
            one_drawer, internal.height
        )
    });

    let stack = 2.0 * config.drawer.height + 2.0 * t + t + 4.0 * clearance;
    c.check("two-drawers-stack", stack <= internal.height, || {
        format!(
            "two drawers stacked ({:.3}mm) exceed shell internal height ({:.3}mm)",
            stack, internal.height
        )
    });

    // The lower opening starts one thickness up, above the bottom's finger joint
    let lower_opening_top = t + derived.drawer_opening_height;
    c.check("drawer-opening-slot", lower_opening_top <= derived.shelf_height, || {
        format!(
            "lower drawer opening top ({:.3}mm) above the shelf ({:.3}mm)",
            lower_opening_top, derived.shelf_height
        )
    });

    c.check("drawer-bay-fit", drawer_depth <= derived.drawer_bay_depth, || {
        format!(
            "drawer external depth ({:.3}mm) exceeds the drawer bay in front of the divider ({:.3}mm)",
            drawer_depth, derived.drawer_bay_depth
        )
    });

    // Divider and shelf
    c.check(
        "paper-compartment",
        config.paper_compartment_depth < internal.depth,
        || {
            format!(
                "paper compartment depth ({}mm) exceeds shell internal depth ({:.3}mm)",
                config.paper_compartment_depth, internal.depth
            )
        },
    );
    c.check("drawer-bay-depth", derived.drawer_bay_depth >= MIN_USABLE_DEPTH, || {
        format!(
            "drawer bay depth ({:.3}mm) too shallow for practical use",
            derived.drawer_bay_depth
        )
    });

    // Lids
    c.check("lid-groove-width", config.lid_groove_width > t, || {
        format!(
            "lid groove width ({}mm) must exceed material thickness ({}mm) for sliding fit",
            config.lid_groove_width, t
        )
    });
    c.check(
        "sliding-lid-tab-depth",
        config.sliding_lid_tab_depth < config.lid_groove_depth,
        || {
            format!(
                "sliding lid tab depth ({}mm) must be less than groove depth ({}mm)",
                config.sliding_lid_tab_depth, config.lid_groove_depth
            )
        },
    );
    c.check(
        "lid-tab-clearance",
        config.lid_tab_clearance > 0.0 && config.lid_tab_clearance < config.lid_groove_width,
        || {
            format!(
                "lid tab clearance ({}mm) must be positive and less than groove width ({}mm)",
                config.lid_tab_clearance, config.lid_groove_width
            )
        },
    );
    c.check(
        "flat-lid-tabs",
        config.flat_lid_tab_width > 0.0 && config.flat_lid_tab_depth > 0.0,
        || "flat lid tab dimensions must be positive".to_string(),
    );

    // Finger joints
    c.check(
        "drawer-finger-edges",
        config.drawer.min_dimension() >= MIN_FINGER_EDGE,
        || {
            format!(
                "smallest drawer dimension ({}mm) too small for finger joints (need at least {}mm)",
                config.drawer.min_dimension(),
                MIN_FINGER_EDGE
            )
        },
    );
    c.check(
        "shell-finger-edges",
        config.shell.min_dimension() >= MIN_FINGER_EDGE,
        || {
            format!(
                "smallest shell dimension ({}mm) too small for finger joints (need at least {}mm)",
                config.shell.min_dimension(),
                MIN_FINGER_EDGE
            )
        },
    );

    let (min_c, max_c) = DRAWER_CLEARANCE_RANGE;
    c.check("drawer-clearance", (min_c..=max_c).contains(&clearance), || {
        format!(
            "drawer clearance ({}mm) outside typical range ({}-{}mm)",
            clearance, min_c, max_c
        )
    });

    // Engraving
    let font = PixelFont::from(&config.engraving);
    let text_width = font.text_width(&config.engraving.text);
    c.check("engraving-width", text_width <= internal.width, || {
        format!(
            "engraving ({:.3}mm) wider than the front wall ({:.3}mm)",
            text_width, internal.width
        )
    });

    let text_bottom = internal.height - config.engraving.top_margin - font.text_height();
    let top_opening_top = derived.shelf_height + t + derived.drawer_opening_height;
    c.check("engraving-clearance", text_bottom > top_opening_top, || {
        format!(
            "engraving bottom ({:.3}mm) overlaps the top drawer opening ({:.3}mm)",
            text_bottom, top_opening_top
        )
    });

    c.issues
}
