//! # faxbox Core
//!
//! Core types shared by the faxbox generators:
//! - the dimension set describing the organizer box ([`BoxConfig`])
//! - measurements derived from it ([`DerivedDimensions`])
//! - length formatting helpers for metric/imperial output
//! - the dimension validation error

pub mod dimensions;
pub mod error;
pub mod units;

pub use dimensions::{
    BoxConfig, BoxExtent, DerivedDimensions, EngravingSettings, DEFAULT_MATERIAL_THICKNESS,
};
pub use error::DimensionError;
pub use units::{format_length, get_unit_label, mm_to_inches, MeasurementSystem};
