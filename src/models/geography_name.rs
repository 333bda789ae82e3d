use crate::types::{RegionCode, SubmarketName};
use crate::utils::normalize_hyphens;
use regex::Regex;
use std::sync::LazyLock;

static SEGMENT_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*").expect("valid geography separator"));

/// The `(city, region, submarket)` parts of a composite geography string such
/// as `Austin - TX USA - Cedar Park`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeographyName {
    /// Absent when the geography string only has two segments.
    pub city: Option<String>,
    /// Uppercased.
    pub region: RegionCode,
    pub submarket: SubmarketName,
}

impl GeographyName {
    /// Parses the last three dash-delimited segments; returns `None` when
    /// fewer than two segments are present.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_hyphens(raw);
        let segments: Vec<&str> = SEGMENT_SEPARATOR.split(normalized.trim()).collect();

        if segments.len() < 2 {
            return None;
        }

        let count = segments.len();
        let city = if count >= 3 {
            Some(segments[count - 3].to_string())
        } else {
            None
        };

        Some(Self {
            city,
            region: segments[count - 2].to_uppercase(),
            submarket: segments[count - 1].to_string(),
        })
    }
}
