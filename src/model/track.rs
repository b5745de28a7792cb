//! Track value object
//!
//! A track record connects two stations by code. The edge weight used by
//! the graph layer is `distance_to`.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A rail track record linking two station codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    code: String,
    next_code: String,
    distance_from: u32,
    distance_to: u32,
    track_type: u32,
}

impl Track {
    pub fn new(
        code: &str,
        next_code: &str,
        distance_from: u32,
        distance_to: u32,
        track_type: u32,
    ) -> Result<Self, ModelError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ModelError::BlankField { field: "code" });
        }
        let next_code = next_code.trim();
        if next_code.is_empty() {
            return Err(ModelError::BlankField { field: "next_code" });
        }

        Ok(Self {
            code: code.to_string(),
            next_code: next_code.to_string(),
            distance_from,
            distance_to,
            track_type,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn next_code(&self) -> &str {
        &self.next_code
    }

    pub fn distance_from(&self) -> u32 {
        self.distance_from
    }

    /// The distance used as the edge weight between the two stations
    pub fn distance_to(&self) -> u32 {
        self.distance_to
    }

    pub fn track_type(&self) -> u32 {
        self.track_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_codes() {
        let track = Track::new(" dv ", "hon", 0, 15, 1).expect("Track should be valid in test");
        assert_eq!(track.code(), "dv");
        assert_eq!(track.next_code(), "hon");
        assert_eq!(track.distance_to(), 15);
    }

    #[test]
    fn test_blank_code_rejected() {
        let result = Track::new("", "hon", 0, 15, 1);
        assert_eq!(result, Err(ModelError::BlankField { field: "code" }));
    }
}
