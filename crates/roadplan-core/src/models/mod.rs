//! Road-network models.
//!
//! - [`RoadKey`] - unordered pair of city indices, normalised low to high
//! - [`Road`] - record stored for each existing road
//! - [`Budget`] - validated non-negative planned spend

mod budget;
mod road;

pub use budget::Budget;
pub use road::{Road, RoadKey};
