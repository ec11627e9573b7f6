//! Route queries over the co-affiliation graph
//!
//! Every query answers with an empty route when either endpoint is unknown, when
//! the endpoints coincide or when no route exists.

use super::{bfs, build_view, dfs, dijkstra, widest_path, PathResult};
use crate::graph::{AffiliationId, BibliographyStore, Connection, Distance, Path, PathWithDist};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Optimisation criterion of a route query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteCriterion {
    /// Any simple route; only existence is meaningful
    Any,
    /// Fewest intermediate affiliations
    FewestHops,
    /// Strongest weakest link: maximises the smallest co-authorship weight,
    /// ties broken by fewest hops
    LeastFriction,
    /// Smallest summed distance between consecutive affiliations
    ShortestDistance,
}

impl BibliographyStore {
    /// Stored keys for both endpoints, or `None` if the query is trivially empty
    fn route_endpoints(&self, source: &str, target: &str) -> Option<(&AffiliationId, &AffiliationId)> {
        if source == target {
            return None;
        }
        let source = &self.get_affiliation(source)?.id;
        let target = &self.get_affiliation(target)?.id;
        Some((source, target))
    }

    /// Turn a node sequence into `(from, to, weight)` hops
    fn connections_along(&self, result: Option<PathResult<AffiliationId>>) -> Path {
        let Some(result) = result else {
            return Path::new();
        };
        let graph = self.co_affiliation_graph();
        result
            .path
            .windows(2)
            .filter_map(|hop| {
                let weight = graph.weight(hop[0].as_str(), hop[1].as_str())?;
                Some(Connection::new(hop[0].clone(), hop[1].clone(), weight))
            })
            .collect()
    }

    fn distance_between(&self, from: &str, to: &str) -> Distance {
        self.get_affiliation_coord(from)
            .distance(&self.get_affiliation_coord(to))
    }

    /// Some simple route between two affiliations.
    ///
    /// Which of several routes comes back is unspecified; callers should only rely
    /// on whether the result is empty.
    pub fn get_any_path(&self, source: &str, target: &str) -> Path {
        let Some((source, target)) = self.route_endpoints(source, target) else {
            return Path::new();
        };
        let view = build_view(self.co_affiliation_graph(), |_, _, _| 1.0);
        let result = dfs(&view, source, target);
        trace!("any path {} -> {}: {:?}", source, target, result.as_ref().map(PathResult::hops));
        self.connections_along(result)
    }

    /// Route with the fewest hops
    pub fn get_path_with_least_affiliations(&self, source: &str, target: &str) -> Path {
        let Some((source, target)) = self.route_endpoints(source, target) else {
            return Path::new();
        };
        let view = build_view(self.co_affiliation_graph(), |_, _, _| 1.0);
        let result = bfs(&view, source, target);
        trace!("fewest hops {} -> {}: {:?}", source, target, result.as_ref().map(PathResult::hops));
        self.connections_along(result)
    }

    /// Route whose weakest co-authorship link is as strong as possible; among
    /// those, the one with the fewest hops
    pub fn get_path_of_least_friction(&self, source: &str, target: &str) -> Path {
        let Some((source, target)) = self.route_endpoints(source, target) else {
            return Path::new();
        };
        let view = build_view(self.co_affiliation_graph(), |_, _, weight| f64::from(weight));
        let result = widest_path(&view, source, target);
        trace!("least friction {} -> {}: bottleneck {:?}", source, target, result.as_ref().map(|r| r.cost));
        self.connections_along(result)
    }

    /// Route with the smallest total distance between consecutive affiliations.
    ///
    /// Each hop's length is rounded down before the lengths are summed, so the
    /// total compared is a sum of rounded-down hop lengths. Each hop is paired
    /// with its own length.
    pub fn get_shortest_path(&self, source: &str, target: &str) -> PathWithDist {
        let Some((source, target)) = self.route_endpoints(source, target) else {
            return PathWithDist::new();
        };
        let view = build_view(self.co_affiliation_graph(), |from, to, _| {
            f64::from(self.distance_between(from.as_str(), to.as_str()))
        });
        let result = dijkstra(&view, source, target);
        trace!("shortest {} -> {}: length {:?}", source, target, result.as_ref().map(|r| r.cost));
        self.with_distances(self.connections_along(result))
    }

    /// Route chosen by `criterion`, every hop annotated with its length
    pub fn find_route(&self, criterion: RouteCriterion, source: &str, target: &str) -> PathWithDist {
        let path = match criterion {
            RouteCriterion::Any => self.get_any_path(source, target),
            RouteCriterion::FewestHops => self.get_path_with_least_affiliations(source, target),
            RouteCriterion::LeastFriction => self.get_path_of_least_friction(source, target),
            RouteCriterion::ShortestDistance => return self.get_shortest_path(source, target),
        };
        self.with_distances(path)
    }

    fn with_distances(&self, path: Path) -> PathWithDist {
        path.into_iter()
            .map(|connection| {
                let distance = self.distance_between(connection.from.as_str(), connection.to.as_str());
                (connection, distance)
            })
            .collect()
    }
}
