//! Road-network store.

use crate::error::{Error, Result};
use crate::models::{Budget, Road, RoadKey};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Owned store of cities, the roads between them and road budgets.
///
/// Cities are append-only and identified by position (display id is the
/// 0-based index plus one). `index` always maps every current name to its
/// position and holds nothing else.
#[derive(Debug, Default, Clone)]
pub struct RoadNetwork {
    /// City names in insertion order.
    cities: Vec<String>,
    /// Name to 0-based position.
    index: HashMap<String, usize>,
    /// Existing roads, keyed row-major.
    roads: BTreeMap<RoadKey, Road>,
}

impl RoadNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Cities ---

    /// Number of recorded cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Check if no cities are recorded.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City names in display order.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// 0-based position of a city, if recorded.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Append a city. Returns its 1-based display id.
    pub fn add_city(&mut self, name: impl Into<String>) -> Result<usize> {
        let name = name.into();
        self.check_new_name(&name)?;

        let position = self.cities.len();
        self.index.insert(name.clone(), position);
        tracing::info!("Added city {} as {}", name, position + 1);
        self.cities.push(name);
        Ok(position + 1)
    }

    /// Append a batch of cities, all or nothing.
    ///
    /// The batch must be non-empty and every name must be new, both against
    /// the store and within the batch. Returns the 1-based ids in order.
    pub fn add_cities<I, S>(&mut self, names: I) -> Result<Vec<usize>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(Error::InvalidCount);
        }

        let mut seen = HashSet::new();
        for name in &names {
            self.check_new_name(name)?;
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateCity(name.clone()));
            }
        }

        names.into_iter().map(|name| self.add_city(name)).collect()
    }

    /// Name of the city with the given 1-based id.
    pub fn city_at(&self, index: usize) -> Result<&str> {
        let position = self.position(index)?;
        Ok(&self.cities[position])
    }

    /// Rename the city with the given 1-based id. Returns the old name.
    ///
    /// Every city keeps its id. The old name stops resolving and the new one
    /// resolves to the same position.
    pub fn rename_city(&mut self, index: usize, new_name: impl Into<String>) -> Result<String> {
        let position = self.position(index)?;
        let new_name = new_name.into();
        if new_name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        match self.index.get(&new_name) {
            Some(&existing) if existing != position => {
                return Err(Error::DuplicateCity(new_name));
            }
            _ => {}
        }

        let old_name = std::mem::replace(&mut self.cities[position], new_name.clone());
        self.index.remove(&old_name);
        self.index.insert(new_name, position);
        tracing::info!("Renamed city {} from {} to {}", index, old_name, self.cities[position]);
        Ok(old_name)
    }

    // --- Roads ---

    /// Record a road between two named cities. Re-adding keeps its budget.
    pub fn add_road(&mut self, from: &str, to: &str) -> Result<RoadKey> {
        let key = self.resolve_pair(from, to)?;
        self.roads.entry(key).or_default();
        tracing::info!("Added road {}-{}", from, to);
        Ok(key)
    }

    /// Resolve a pair of names to an existing road.
    pub fn road_between(&self, from: &str, to: &str) -> Result<RoadKey> {
        let key = self.resolve_pair(from, to)?;
        if self.roads.contains_key(&key) {
            Ok(key)
        } else {
            Err(Error::NoRoad {
                from: from.to_string(),
                to: to.to_string(),
            })
        }
    }

    /// Check whether a road joins two named cities.
    pub fn has_road(&self, from: &str, to: &str) -> Result<bool> {
        let key = self.resolve_pair(from, to)?;
        Ok(self.roads.contains_key(&key))
    }

    /// Check whether a road joins two cities by 0-based position.
    pub fn has_road_at(&self, a: usize, b: usize) -> bool {
        RoadKey::new(a, b).is_some_and(|key| self.roads.contains_key(&key))
    }

    /// Set the budget of an existing road, overwriting any earlier value.
    pub fn set_budget(&mut self, from: &str, to: &str, amount: f64) -> Result<Budget> {
        let budget = Budget::new(amount)?;
        let key = self.road_between(from, to)?;
        if let Some(road) = self.roads.get_mut(&key) {
            road.budget = Some(budget);
        }
        tracing::info!("Set budget {}-{} to {:.2}", from, to, amount);
        Ok(budget)
    }

    /// Budget recorded for the road between two named cities.
    ///
    /// `None` when no road exists or no budget has been set yet.
    pub fn budget(&self, from: &str, to: &str) -> Result<Option<Budget>> {
        let key = self.resolve_pair(from, to)?;
        Ok(self.roads.get(&key).and_then(|road| road.budget))
    }

    /// Budget amount by 0-based position, `0.0` where nothing is recorded.
    pub fn budget_at(&self, a: usize, b: usize) -> f64 {
        RoadKey::new(a, b)
            .and_then(|key| self.roads.get(&key))
            .map(Road::budget_amount)
            .unwrap_or(0.0)
    }

    /// Existing roads in row-major order.
    pub fn roads(&self) -> impl Iterator<Item = (&RoadKey, &Road)> {
        self.roads.iter()
    }

    /// Number of existing roads.
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    // --- Helpers ---

    fn check_new_name(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        if self.index.contains_key(name) {
            return Err(Error::DuplicateCity(name.to_string()));
        }
        Ok(())
    }

    fn position(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.cities.len() {
            return Err(Error::IndexOutOfRange {
                index,
                count: self.cities.len(),
            });
        }
        Ok(index - 1)
    }

    fn resolve(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| Error::UnknownCity(name.to_string()))
    }

    fn resolve_pair(&self, from: &str, to: &str) -> Result<RoadKey> {
        let a = self.resolve(from)?;
        let b = self.resolve(to)?;
        RoadKey::new(a, b).ok_or_else(|| Error::SameCity(from.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(names: &[&str]) -> RoadNetwork {
        let mut network = RoadNetwork::new();
        network.add_cities(names.iter().copied()).unwrap();
        network
    }

    #[test]
    fn ids_follow_submission_order() {
        let mut network = RoadNetwork::new();
        assert_eq!(network.add_city("Kigali").unwrap(), 1);
        assert_eq!(network.add_city("Huye").unwrap(), 2);
        assert_eq!(network.add_city("Musanze").unwrap(), 3);

        assert_eq!(network.len(), 3);
        assert_eq!(network.index_of("Huye"), Some(1));
        assert_eq!(network.city_at(3).unwrap(), "Musanze");
    }

    #[test]
    fn duplicate_city_leaves_state_unchanged() {
        let mut network = network(&["Kigali", "Huye"]);

        let err = network.add_city("Kigali").unwrap_err();
        assert!(matches!(err, Error::DuplicateCity(ref n) if n == "Kigali"));
        assert_eq!(network.len(), 2);
        assert_eq!(network.index_of("Kigali"), Some(0));
    }

    #[test]
    fn empty_name_rejected() {
        let mut network = RoadNetwork::new();
        assert!(matches!(network.add_city("  "), Err(Error::EmptyName)));
        assert!(network.is_empty());
    }

    #[test]
    fn batch_is_all_or_nothing() {
        let mut network = network(&["Kigali"]);

        assert!(matches!(
            network.add_cities(["Huye", "Kigali"]),
            Err(Error::DuplicateCity(_))
        ));
        assert!(matches!(
            network.add_cities(["Huye", "Huye"]),
            Err(Error::DuplicateCity(_))
        ));
        assert!(matches!(
            network.add_cities(Vec::<String>::new()),
            Err(Error::InvalidCount)
        ));
        assert_eq!(network.len(), 1);

        assert_eq!(network.add_cities(["Huye", "Rubavu"]).unwrap(), vec![2, 3]);
    }

    #[test]
    fn road_is_symmetric() {
        let mut network = network(&["A", "B", "C"]);
        network.add_road("A", "B").unwrap();

        assert!(network.has_road("A", "B").unwrap());
        assert!(network.has_road("B", "A").unwrap());
        assert!(network.has_road_at(1, 0));
        assert!(!network.has_road("A", "C").unwrap());
        assert!(!network.has_road_at(0, 0));
    }

    #[test]
    fn road_needs_two_known_cities() {
        let mut network = network(&["A", "B"]);

        assert!(matches!(network.add_road("A", "X"), Err(Error::UnknownCity(ref n)) if n == "X"));
        assert!(matches!(network.add_road("A", "A"), Err(Error::SameCity(_))));
        assert_eq!(network.road_count(), 0);
    }

    #[test]
    fn re_adding_road_keeps_budget() {
        let mut network = network(&["A", "B"]);
        network.add_road("A", "B").unwrap();
        network.set_budget("A", "B", 3.0).unwrap();
        network.add_road("B", "A").unwrap();

        assert_eq!(network.road_count(), 1);
        assert_eq!(network.budget_at(0, 1), 3.0);
    }

    #[test]
    fn budget_requires_road() {
        let mut network = network(&["A", "B"]);

        assert!(matches!(
            network.set_budget("A", "B", 5.0),
            Err(Error::NoRoad { .. })
        ));
        assert_eq!(network.budget("A", "B").unwrap(), None);

        network.add_road("A", "B").unwrap();
        network.set_budget("B", "A", 5.0).unwrap();
        assert_eq!(network.budget("A", "B").unwrap().unwrap().amount(), 5.0);
        assert_eq!(network.budget_at(1, 0), 5.0);
    }

    #[test]
    fn budget_overwrites_and_validates() {
        let mut network = network(&["A", "B"]);
        network.add_road("A", "B").unwrap();
        network.set_budget("A", "B", 5.0).unwrap();

        assert!(matches!(
            network.set_budget("A", "B", -1.0),
            Err(Error::InvalidBudget(_))
        ));
        assert_eq!(network.budget_at(0, 1), 5.0);

        network.set_budget("A", "B", 7.25).unwrap();
        assert_eq!(network.budget_at(0, 1), 7.25);
    }

    #[test]
    fn rename_moves_lookup() {
        let mut network = network(&["A", "B", "C"]);
        network.add_road("B", "C").unwrap();

        let old = network.rename_city(2, "Bee").unwrap();
        assert_eq!(old, "B");
        assert_eq!(network.index_of("B"), None);
        assert_eq!(network.index_of("Bee"), Some(1));
        assert_eq!(network.city_at(1).unwrap(), "A");
        assert_eq!(network.city_at(3).unwrap(), "C");
        assert!(network.has_road("Bee", "C").unwrap());
    }

    #[test]
    fn rename_to_other_city_rejected() {
        let mut network = network(&["A", "B"]);

        assert!(matches!(
            network.rename_city(1, "B"),
            Err(Error::DuplicateCity(_))
        ));
        assert_eq!(network.cities(), ["A", "B"]);

        // Same name on the same city is a no-op.
        assert_eq!(network.rename_city(1, "A").unwrap(), "A");
        assert_eq!(network.index_of("A"), Some(0));
    }

    #[test]
    fn index_bounds() {
        let mut empty = RoadNetwork::new();
        assert!(matches!(
            empty.city_at(1),
            Err(Error::IndexOutOfRange { index: 1, count: 0 })
        ));
        assert!(empty.rename_city(1, "X").is_err());

        let mut network = network(&["A", "B"]);
        assert!(network.city_at(0).is_err());
        assert!(network.city_at(3).is_err());
        assert!(network.rename_city(0, "X").is_err());
        assert!(network.rename_city(3, "X").is_err());
        assert_eq!(network.cities(), ["A", "B"]);
    }
}
