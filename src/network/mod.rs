//! Rail-network service layer
//!
//! Assembles the weighted graph from station and track records and
//! exposes the query entry points by station code. Codes are matched
//! case-insensitively. Tracks referencing a code with no station record
//! are dropped with a warning during assembly; they never abort it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::Config;
use crate::error::{GraphError, RailError, RailResult};
use crate::graph::{
    AStar, Dijkstra, MstPrim, RectangleMst, SpanningTree, StationsWithinRectangle,
    WeightedMatrixGraph,
};
use crate::model::{loader, Station, Track};

/// A computed route between two stations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub stations: Vec<Station>,
    pub total_distance: f64,
}

/// The assembled rail network and its query surface
pub struct RailNetwork {
    stations: Vec<Station>,
    by_code: HashMap<String, usize>,
    graph: WeightedMatrixGraph<Station>,
}

impl RailNetwork {
    /// Assembles a network from validated records
    ///
    /// Duplicate station ids or codes are construction contract
    /// violations. Tracks whose endpoints are unknown are logged and
    /// skipped.
    pub fn from_records(
        stations: Vec<Station>,
        tracks: &[Track],
        directed: bool,
    ) -> RailResult<Self> {
        let mut graph = WeightedMatrixGraph::new(directed);
        let mut by_code = HashMap::new();

        for (index, station) in stations.iter().enumerate() {
            graph.add_vertex(station.clone())?;
            if by_code
                .insert(station.code().to_lowercase(), index)
                .is_some()
            {
                return Err(GraphError::DuplicateVertex.into());
            }
        }

        let mut dropped = 0usize;
        for track in tracks {
            let from = by_code.get(&track.code().to_lowercase());
            let to = by_code.get(&track.next_code().to_lowercase());
            match (from, to) {
                (Some(&from), Some(&to)) => {
                    graph.connect(
                        &stations[from],
                        &stations[to],
                        track.distance_to() as f64,
                    )?;
                }
                _ => {
                    dropped += 1;
                    log::warn!(
                        "dropping track {} -> {}: unknown station code",
                        track.code(),
                        track.next_code()
                    );
                }
            }
        }
        if dropped > 0 {
            log::info!("dropped {} tracks referencing unknown stations", dropped);
        }

        Ok(Self {
            stations,
            by_code,
            graph,
        })
    }

    /// Loads both record files named by the configuration and assembles
    pub fn from_config(config: &Config) -> RailResult<Self> {
        let stations = loader::read_stations_from_path(&config.stations_file, config.delimiter)?;
        let tracks = loader::read_tracks_from_path(&config.tracks_file, config.delimiter)?;
        Self::from_records(stations, &tracks, config.directed)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Case-insensitive station lookup by code
    pub fn station(&self, code: &str) -> Option<&Station> {
        self.by_code
            .get(&code.trim().to_lowercase())
            .map(|&index| &self.stations[index])
    }

    /// The assembled graph, for callers composing their own queries
    pub fn graph(&self) -> &WeightedMatrixGraph<Station> {
        &self.graph
    }

    /// Informed shortest path between two station codes, guided by the
    /// straight-line heuristic; `Ok(None)` when no path exists
    pub fn route(&self, from_code: &str, to_code: &str) -> RailResult<Option<Route>> {
        let from = self.resolve(from_code)?.clone();
        let to = self.resolve(to_code)?.clone();

        let found = AStar::shortest_path(&self.graph, &from, &to, |a, b| {
            a.straight_line_distance(b)
        })?;
        Ok(found.map(|(stations, total_distance)| Route {
            stations,
            total_distance,
        }))
    }

    /// Uninformed shortest path between two station codes; `Ok(None)`
    /// when no path exists
    pub fn route_uninformed(&self, from_code: &str, to_code: &str) -> RailResult<Option<Route>> {
        let from = self.resolve(from_code)?.clone();
        let to = self.resolve(to_code)?.clone();

        let stations = Dijkstra::shortest_path(&self.graph, &from, &to)?;
        if stations.is_empty() {
            return Ok(None);
        }

        // Hops of a produced path are always connected.
        let total_distance = self.graph.total_weight(&stations)?.unwrap_or(0.0);
        Ok(Some(Route {
            stations,
            total_distance,
        }))
    }

    /// Minimum spanning tree over the whole network, rooted at a station
    pub fn minimum_spanning_tree(&self, start_code: &str) -> RailResult<SpanningTree<Station>> {
        let start = self.resolve(start_code)?.clone();
        Ok(MstPrim::spanning_tree(&self.graph, &start)?)
    }

    /// Spanning tree over the reachable stations inside a latitude /
    /// longitude rectangle; `Ok(None)` when no station falls inside
    pub fn spanning_tree_within_rectangle(
        &self,
        corner_a: (f64, f64),
        corner_b: (f64, f64),
    ) -> RailResult<Option<RectangleMst<Station>>> {
        Ok(StationsWithinRectangle::spanning_tree(
            &self.graph,
            corner_a,
            corner_b,
            |station| (station.geo_lat(), station.geo_lng()),
        )?)
    }

    /// DOT serialization of the assembled graph
    pub fn to_web_graph(&self) -> String {
        self.graph.to_web_graph()
    }

    fn resolve(&self, code: &str) -> RailResult<&Station> {
        self.station(code)
            .ok_or_else(|| RailError::UnknownStation(code.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: u32, code: &str, lat: f64, lng: f64) -> Station {
        Station::new(id, code, code, "NL", "station", lat, lng)
            .expect("Station should be valid in test")
    }

    fn track(from: &str, to: &str, distance: u32) -> Track {
        Track::new(from, to, 0, distance, 1).expect("Track should be valid in test")
    }

    fn network() -> RailNetwork {
        let stations = vec![
            station(1, "aa", 52.0, 5.0),
            station(2, "bb", 52.1, 5.1),
            station(3, "cc", 52.2, 5.2),
            station(4, "dd", 53.5, 6.5),
        ];
        let tracks = vec![
            track("aa", "bb", 10),
            track("bb", "cc", 12),
            track("aa", "cc", 30),
            track("aa", "zz", 99), // dangling, dropped at assembly
        ];
        RailNetwork::from_records(stations, &tracks, false)
            .expect("Network should assemble in test")
    }

    #[test]
    fn test_dangling_tracks_are_dropped() {
        let net = network();
        assert_eq!(net.station_count(), 4);

        let aa = net.station("AA").expect("Station should resolve in test");
        let neighbours = net
            .graph()
            .connected_neighbours(aa)
            .expect("Neighbours should resolve in test");
        assert_eq!(neighbours.len(), 2);
    }

    #[test]
    fn test_station_lookup_is_case_insensitive() {
        let net = network();
        assert!(net.station("AA").is_some());
        assert!(net.station(" aa ").is_some());
        assert!(net.station("zz").is_none());
    }

    #[test]
    fn test_route_prefers_cheaper_detour() {
        let net = network();
        let route = net
            .route("aa", "cc")
            .expect("Query should run in test")
            .expect("Route should exist in test");

        let codes: Vec<&str> = route.stations.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec!["aa", "bb", "cc"]);
        assert_eq!(route.total_distance, 22.0);
    }

    #[test]
    fn test_informed_and_uninformed_routes_agree() {
        let net = network();
        let informed = net
            .route("aa", "cc")
            .expect("Query should run in test")
            .expect("Route should exist in test");
        let uninformed = net
            .route_uninformed("aa", "cc")
            .expect("Query should run in test")
            .expect("Route should exist in test");

        assert_eq!(informed.stations, uninformed.stations);
        assert_eq!(informed.total_distance, uninformed.total_distance);
    }

    #[test]
    fn test_unknown_code_is_reported() {
        let net = network();
        let result = net.route("aa", "nope");
        assert!(matches!(result, Err(RailError::UnknownStation(code)) if code == "nope"));
    }

    #[test]
    fn test_disconnected_station_has_no_route() {
        let net = network();
        // "dd" received no tracks at all.
        let route = net.route("aa", "dd").expect("Query should run in test");
        assert!(route.is_none());

        let route = net
            .route_uninformed("aa", "dd")
            .expect("Query should run in test");
        assert!(route.is_none());
    }

    #[test]
    fn test_route_to_self_is_trivial() {
        let net = network();
        let route = net
            .route("aa", "aa")
            .expect("Query should run in test")
            .expect("Route should exist in test");
        assert_eq!(route.stations.len(), 1);
        assert_eq!(route.total_distance, 0.0);
    }

    #[test]
    fn test_minimum_spanning_tree_total() {
        let net = network();
        let tree = net
            .minimum_spanning_tree("aa")
            .expect("Spanning tree should build in test");
        // aa-bb(10) + bb-cc(12); dd stays unreached.
        assert!((tree.total_length() - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_station_code_is_rejected() {
        let stations = vec![station(1, "aa", 52.0, 5.0), station(2, "AA", 52.1, 5.1)];
        let result = RailNetwork::from_records(stations, &[], false);
        assert!(result.is_err());
    }

    #[test]
    fn test_web_graph_lists_connections() {
        let net = network();
        let dot = net.to_web_graph();
        assert!(dot.contains("AA -> BB[label=\"10\"];"));
        assert!(dot.contains("BB -> AA[label=\"10\"];"));
    }
}
