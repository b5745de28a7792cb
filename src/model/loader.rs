//! Delimited-text record loading
//!
//! Parses station and track records from CSV-style input. Malformed
//! records are reported through the `log` facade and skipped; they never
//! abort a batch load. Only I/O failures propagate as errors.

use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use crate::error::RailResult;
use crate::model::{Station, Track};

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static pattern"));
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+(-\w+)?$").expect("static pattern"));
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z-]+$").expect("static pattern"));
static COUNTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,2}$").expect("static pattern"));
static FLOAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+\.\d+$").expect("static pattern"));
static TRACK_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("static pattern"));
static UINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("static pattern"));

/// Station CSV column positions (id, code, uic, name, ..., slug, country,
/// type, geo_lat, geo_lng)
const STATION_COLUMNS: usize = 11;
const TRACK_COLUMNS: usize = 5;

/// Reads station records, skipping the header line and any record that
/// fails shape or range validation
pub fn read_stations<R: BufRead>(reader: R, delimiter: char) -> RailResult<Vec<Station>> {
    let mut stations = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line_no == 0 || line.trim().is_empty() {
            continue; // header
        }

        let fields: Vec<String> = line
            .split(delimiter)
            .map(|f| f.replace('"', "").trim().to_string())
            .collect();

        match parse_station(&fields) {
            Some(station) => stations.push(station),
            None => log::warn!("skipping invalid station record: {}", line),
        }
    }

    log::info!("loaded {} station records", stations.len());
    Ok(stations)
}

fn parse_station(fields: &[String]) -> Option<Station> {
    if fields.len() < STATION_COLUMNS {
        return None;
    }

    let shape_ok = ID_RE.is_match(&fields[0])
        && CODE_RE.is_match(&fields[1])
        && ID_RE.is_match(&fields[2])
        && SLUG_RE.is_match(&fields[6])
        && COUNTRY_RE.is_match(&fields[7])
        && !fields[8].is_empty()
        && FLOAT_RE.is_match(&fields[9])
        && FLOAT_RE.is_match(&fields[10]);
    if !shape_ok {
        return None;
    }

    let id: u32 = fields[0].parse().ok()?;
    let geo_lat: f64 = fields[9].parse().ok()?;
    let geo_lng: f64 = fields[10].parse().ok()?;

    Station::new(id, &fields[1], &fields[3], &fields[7], &fields[8], geo_lat, geo_lng).ok()
}

/// Reads track records (no header line), skipping any record that fails
/// shape validation
pub fn read_tracks<R: BufRead>(reader: R, delimiter: char) -> RailResult<Vec<Track>> {
    let mut tracks = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<String> = line
            .split(delimiter)
            .map(|f| f.replace('"', "").trim().to_string())
            .collect();

        match parse_track(&fields) {
            Some(track) => tracks.push(track),
            None => log::warn!("skipping invalid track record: {}", line),
        }
    }

    log::info!("loaded {} track records", tracks.len());
    Ok(tracks)
}

fn parse_track(fields: &[String]) -> Option<Track> {
    if fields.len() < TRACK_COLUMNS {
        return None;
    }

    let shape_ok = TRACK_CODE_RE.is_match(&fields[0])
        && TRACK_CODE_RE.is_match(&fields[1])
        && UINT_RE.is_match(&fields[2])
        && UINT_RE.is_match(&fields[3])
        && UINT_RE.is_match(&fields[4]);
    if !shape_ok {
        return None;
    }

    let distance_from: u32 = fields[2].parse().ok()?;
    let distance_to: u32 = fields[3].parse().ok()?;
    let track_type: u32 = fields[4].parse().ok()?;

    Track::new(&fields[0], &fields[1], distance_from, distance_to, track_type).ok()
}

pub fn read_stations_from_path<P: AsRef<Path>>(path: P, delimiter: char) -> RailResult<Vec<Station>> {
    let file = File::open(path)?;
    read_stations(BufReader::new(file), delimiter)
}

pub fn read_tracks_from_path<P: AsRef<Path>>(path: P, delimiter: char) -> RailResult<Vec<Track>> {
    let file = File::open(path)?;
    read_tracks(BufReader::new(file), delimiter)
}
