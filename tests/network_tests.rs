//! End-to-end tests: load delimited record files through the
//! configuration, assemble the network, and run every query surface.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use railnet::{Config, RailError, RailNetwork};

const STATION_CSV: &str = "\
id,code,uic,name_short,name_medium,name_long,slug,country,type,geo_lat,geo_lng
1,\"AA\",8400001,\"Aalten\",\"Aalten\",\"Aalten\",\"aalten\",\"NL\",\"stoptreinstation\",52.10,6.10
2,\"BB\",8400002,\"Borne\",\"Borne\",\"Borne\",\"borne\",\"NL\",\"stoptreinstation\",52.20,6.20
3,\"CC\",8400003,\"Chevremont\",\"Chevremont\",\"Chevremont\",\"chevremont\",\"NL\",\"stoptreinstation\",52.30,6.10
4,\"DD\",8400004,\"Didam\",\"Didam\",\"Didam\",\"didam\",\"NL\",\"stoptreinstation\",52.30,6.30
5,\"EE\",8400005,\"Echt\",\"Echt\",\"Echt\",\"echt\",\"NL\",\"stoptreinstation\",52.40,6.40
6,\"FF\",8400006,\"Franeker\",\"Franeker\",\"Franeker\",\"franeker\",\"NL\",\"stoptreinstation\",52.50,6.50
7,\"GG\",8400007,\"Goor\",\"Goor\",\"Goor\",\"goor\",\"NL\",\"stoptreinstation\",52.40,6.30
";

const TRACK_CSV: &str = "\
aa,bb,0,1,1
aa,cc,0,4,1
bb,dd,0,3,1
bb,cc,0,2,1
bb,ee,0,10,1
ee,dd,0,5,1
ee,gg,0,2,1
ee,ff,0,7,1
ff,gg,0,5,1
gg,dd,0,1,1
gg,cc,0,3,1
cc,dd,0,6,1
";

fn write_file(path: &Path, contents: &str) {
    let mut file = File::create(path).expect("File should be created in test");
    file.write_all(contents.as_bytes())
        .expect("Write should succeed in test");
}

fn network() -> RailNetwork {
    let dir = tempfile::tempdir().expect("Temp dir should be created in test");
    let stations_path = dir.path().join("stations.csv");
    let tracks_path = dir.path().join("tracks.csv");
    write_file(&stations_path, STATION_CSV);
    write_file(&tracks_path, TRACK_CSV);

    let config = Config {
        stations_file: stations_path.to_string_lossy().into_owned(),
        tracks_file: tracks_path.to_string_lossy().into_owned(),
        delimiter: ',',
        directed: false,
    };

    RailNetwork::from_config(&config).expect("Network should assemble in test")
}

#[test]
fn test_loads_all_stations_from_files() {
    let net = network();
    assert_eq!(net.station_count(), 7);
    assert!(net.station("aa").is_some());
    assert!(net.station("GG").is_some());
}

#[test]
fn test_informed_route_across_the_network() {
    let net = network();
    let route = net
        .route("aa", "ff")
        .expect("Query should run in test")
        .expect("Route should exist in test");

    let codes: Vec<&str> = route.stations.iter().map(|s| s.code()).collect();
    assert_eq!(codes, vec!["AA", "BB", "DD", "GG", "FF"]);
    assert_eq!(route.total_distance, 10.0);
}

#[test]
fn test_uninformed_route_matches_informed() {
    let net = network();
    let informed = net
        .route("aa", "ff")
        .expect("Query should run in test")
        .expect("Route should exist in test");
    let uninformed = net
        .route_uninformed("aa", "ff")
        .expect("Query should run in test")
        .expect("Route should exist in test");

    assert_eq!(informed.stations, uninformed.stations);
    assert_eq!(informed.total_distance, uninformed.total_distance);
}

#[test]
fn test_route_is_symmetric_on_undirected_network() {
    let net = network();
    let forward = net
        .route("aa", "ff")
        .expect("Query should run in test")
        .expect("Route should exist in test");
    let backward = net
        .route("ff", "aa")
        .expect("Query should run in test")
        .expect("Route should exist in test");

    assert_eq!(forward.total_distance, backward.total_distance);
    let mut reversed = backward.stations.clone();
    reversed.reverse();
    assert_eq!(forward.stations, reversed);
}

#[test]
fn test_unknown_station_code_is_reported() {
    let net = network();
    let result = net.route("aa", "qq");
    assert!(matches!(result, Err(RailError::UnknownStation(code)) if code == "qq"));
}

#[test]
fn test_minimum_spanning_tree_over_the_network() {
    let net = network();
    let tree = net
        .minimum_spanning_tree("aa")
        .expect("Spanning tree should build in test");

    // aa-bb(1), bb-cc(2), bb-dd(3), dd-gg(1), gg-ee(2), gg-ff(5).
    assert!((tree.total_length() - 14.0).abs() < 1e-9);
    let root = net.station("aa").expect("Station should resolve in test");
    assert!(tree.parent_of(root).is_none());
}

#[test]
fn test_spanning_tree_within_rectangle() {
    let net = network();
    let result = net
        .spanning_tree_within_rectangle((52.05, 6.05), (52.35, 6.35))
        .expect("Query should run in test")
        .expect("Stations should fall inside in test");

    let codes: Vec<&str> = result.vertices.iter().map(|s| s.code()).collect();
    assert_eq!(codes.len(), 4);
    for code in ["AA", "BB", "CC", "DD"] {
        assert!(codes.contains(&code));
    }
    // Edges inside the rectangle: aa-bb(1), bb-cc(2), bb-dd(3).
    assert!((result.tree.total_length() - 6.0).abs() < 1e-9);
}

#[test]
fn test_empty_rectangle_reports_none() {
    let net = network();
    let result = net
        .spanning_tree_within_rectangle((0.0, 0.0), (1.0, 1.0))
        .expect("Query should run in test");
    assert!(result.is_none());
}

#[test]
fn test_web_graph_serializes_every_connection() {
    let net = network();
    let dot = net.to_web_graph();
    assert!(dot.starts_with("digraph G {"));
    assert!(dot.contains("AA -> BB[label=\"1\"];"));
    assert!(dot.contains("BB -> AA[label=\"1\"];"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn test_config_round_trip_drives_assembly() {
    let dir = tempfile::tempdir().expect("Temp dir should be created in test");
    let stations_path = dir.path().join("stations.csv");
    let tracks_path = dir.path().join("tracks.csv");
    let config_path = dir.path().join("railnet.toml");
    write_file(&stations_path, STATION_CSV);
    write_file(&tracks_path, TRACK_CSV);

    let config = Config {
        stations_file: stations_path.to_string_lossy().into_owned(),
        tracks_file: tracks_path.to_string_lossy().into_owned(),
        delimiter: ',',
        directed: false,
    };
    config
        .save(&config_path)
        .expect("Config should save in test");

    let loaded = Config::load(&config_path).expect("Config should load in test");
    let net = RailNetwork::from_config(&loaded).expect("Network should assemble in test");
    assert_eq!(net.station_count(), 7);
}
