//! Console tables for the recorded data.

use crate::network::RoadNetwork;
use std::fmt;

/// Width of the row-label column.
const LABEL_WIDTH: usize = 15;
/// Road matrix cell width; header names abbreviated to the same length.
const ROAD_CELL: usize = 3;
/// Budget matrix cell width.
const BUDGET_CELL: usize = 7;
/// Budget header abbreviation length.
const BUDGET_ABBREV: usize = 5;

/// Numbered list of cities.
pub struct CityList<'a>(pub &'a RoadNetwork);

impl fmt::Display for CityList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\nCities:\n---------------------\n")?;
        if self.0.is_empty() {
            return f.write_str("No cities recorded yet.\n");
        }
        for (i, name) in self.0.cities().iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, name)?;
        }
        Ok(())
    }
}

/// 0/1 road adjacency matrix, diagonal included.
pub struct RoadMatrix<'a>(pub &'a RoadNetwork);

impl fmt::Display for RoadMatrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let network = self.0;
        if network.is_empty() {
            return f.write_str("No cities to display roads for. Add cities first.\n");
        }

        f.write_str("\nRoads Adjacency Matrix\n----------------------\n")?;
        header(f, network, ROAD_CELL, ROAD_CELL)?;
        for (i, name) in network.cities().iter().enumerate() {
            write!(f, "{:<LABEL_WIDTH$}", name)?;
            for j in 0..network.len() {
                let flag = u8::from(network.has_road_at(i, j));
                write!(f, "{:<ROAD_CELL$}", flag)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Budget adjacency matrix, one decimal place.
pub struct BudgetMatrix<'a>(pub &'a RoadNetwork);

impl fmt::Display for BudgetMatrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let network = self.0;
        if network.is_empty() {
            return f.write_str("No cities to display budgets for.\n");
        }

        f.write_str("\nBudgets Adjacency Matrix\n------------------------\n")?;
        header(f, network, BUDGET_CELL, BUDGET_ABBREV)?;
        for (i, name) in network.cities().iter().enumerate() {
            write!(f, "{:<LABEL_WIDTH$}", name)?;
            for j in 0..network.len() {
                write!(f, "{:<BUDGET_CELL$.1}", network.budget_at(i, j))?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Numbered list of cities.
pub fn render_cities(network: &RoadNetwork) -> String {
    CityList(network).to_string()
}

/// 0/1 road adjacency matrix.
pub fn render_road_matrix(network: &RoadNetwork) -> String {
    RoadMatrix(network).to_string()
}

/// Budget adjacency matrix.
pub fn render_budget_matrix(network: &RoadNetwork) -> String {
    BudgetMatrix(network).to_string()
}

/// Cities, then roads, then budgets.
pub fn render_full_report(network: &RoadNetwork) -> String {
    format!("{}{}{}", CityList(network), RoadMatrix(network), BudgetMatrix(network))
}

fn header(
    f: &mut fmt::Formatter<'_>,
    network: &RoadNetwork,
    cell: usize,
    abbrev: usize,
) -> fmt::Result {
    write!(f, "{:LABEL_WIDTH$}", "")?;
    for name in network.cities() {
        let short: String = name.chars().take(abbrev).collect();
        write!(f, "{:<cell$}", short)?;
    }
    f.write_str("\n")
}
