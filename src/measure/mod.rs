//! Measurement module
//!
//! Height and weight units, metric conversion, and lenient parsing of
//! numeric form input.

pub mod parse;
pub mod units;

pub use parse::{parse_decimal, parse_whole_number};
pub use units::{
    Height, HeightUnit, UnitError, Weight, WeightUnit, CM_PER_FT, CM_PER_M, KG_PER_LB, M_PER_FT,
};
