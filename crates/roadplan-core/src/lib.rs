//! Roadplan core - road budget planning store
//!
//! Records a small road-planning dataset: named cities, the undirected roads
//! between them and a planned budget per road.
//!
//! # Architecture
//!
//! - **Models**: `RoadKey`, `Road`, `Budget`
//! - **Network**: the owned `RoadNetwork` store and its operations
//! - **Export**: full-state text snapshots (`cities.txt`, `roads.txt`)
//! - **Render**: console tables for cities, roads and budgets
//!
//! # Example
//!
//! ```
//! use roadplan_core::{roads_snapshot, RoadNetwork};
//!
//! let mut network = RoadNetwork::new();
//! network.add_cities(["A", "B", "C"]).unwrap();
//! network.add_road("A", "B").unwrap();
//! network.set_budget("A", "B", 12.5).unwrap();
//!
//! assert_eq!(roads_snapshot(&network), "Nbr Road Budget\n1. A-B 12.50\n");
//! ```

pub mod error;
pub mod export;
pub mod models;
pub mod network;
pub mod render;

pub use error::{Error, Result};
pub use export::{cities_snapshot, roads_snapshot, CitiesSnapshot, Exporter, RoadsSnapshot};
pub use models::{Budget, Road, RoadKey};
pub use network::RoadNetwork;
