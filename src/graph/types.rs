//! Core type definitions for the bibliography store
//!
//! Lookups of missing records return the sentinel values defined here
//! instead of failing.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// Publication year
pub type Year = u16;

/// Co-authorship count between two affiliations
pub type Weight = i32;

/// Rounded-down Euclidean distance between two coordinates
pub type Distance = i32;

/// Sentinel name returned for missing affiliations and publications
pub const NO_NAME: &str = "!NO_NAME!";

/// Sentinel affiliation identifier
pub const NO_AFFILIATION: &str = "---";

/// Sentinel publication identifier
pub const NO_PUBLICATION: PublicationId = PublicationId(u64::MAX);

/// Sentinel year
pub const NO_YEAR: Year = Year::MAX;

/// Sentinel weight
pub const NO_WEIGHT: Weight = -1;

/// Sentinel distance
pub const NO_DISTANCE: Distance = Distance::MIN;

/// Sentinel coordinate
pub const NO_COORD: Coord = Coord { x: i32::MIN, y: i32::MIN };

/// Unique identifier for an affiliation
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct AffiliationId(String);

impl AffiliationId {
    pub fn new(id: impl Into<String>) -> Self {
        AffiliationId(id.into())
    }

    /// The "no affiliation" sentinel
    pub fn none() -> Self {
        AffiliationId(NO_AFFILIATION.to_string())
    }

    pub fn is_none(&self) -> bool {
        self.0 == NO_AFFILIATION
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AffiliationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<String> for AffiliationId {
    fn from(s: String) -> Self {
        AffiliationId(s)
    }
}

impl From<&str> for AffiliationId {
    fn from(s: &str) -> Self {
        AffiliationId(s.to_string())
    }
}

// Lets maps keyed by `AffiliationId` be probed with a plain `&str`
impl Borrow<str> for AffiliationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for AffiliationId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AffiliationId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Unique identifier for a publication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct PublicationId(pub u64);

impl PublicationId {
    pub fn new(id: u64) -> Self {
        PublicationId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn is_none(&self) -> bool {
        *self == NO_PUBLICATION
    }
}

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicationId({})", self.0)
    }
}

impl From<u64> for PublicationId {
    fn from(id: u64) -> Self {
        PublicationId(id)
    }
}

/// Integer 2-D coordinate
///
/// Coordinates order by squared distance from the origin, then by `y`, then by `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    pub fn is_none(&self) -> bool {
        *self == NO_COORD
    }

    /// Squared Euclidean distance to another coordinate
    pub fn distance_sq(&self, other: &Coord) -> i128 {
        let dx = i128::from(self.x) - i128::from(other.x);
        let dy = i128::from(self.y) - i128::from(other.y);
        dx * dx + dy * dy
    }

    /// Euclidean distance to another coordinate, rounded down
    pub fn distance(&self, other: &Coord) -> Distance {
        (self.distance_sq(other) as f64).sqrt().floor() as Distance
    }

    fn origin_distance_sq(&self) -> i128 {
        self.distance_sq(&Coord::new(0, 0))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.origin_distance_sq()
            .cmp(&other.origin_distance_sq())
            .then(self.y.cmp(&other.y))
            .then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// An undirected co-affiliation edge as reported to callers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub from: AffiliationId,
    pub to: AffiliationId,
    pub weight: Weight,
}

impl Connection {
    pub fn new(from: impl Into<AffiliationId>, to: impl Into<AffiliationId>, weight: Weight) -> Self {
        Connection {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}

/// A route through the co-affiliation graph, one connection per hop
pub type Path = Vec<Connection>;

/// A route where every hop carries the distance it covers
pub type PathWithDist = Vec<(Connection, Distance)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publication_id() {
        let id = PublicationId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(format!("{}", id), "PublicationId(42)");

        let id2: PublicationId = 100.into();
        assert_eq!(id2.as_u64(), 100);
        assert!(!id2.is_none());
        assert!(NO_PUBLICATION.is_none());
    }

    #[test]
    fn test_affiliation_id() {
        let id = AffiliationId::new("TUNI");
        assert_eq!(id.as_str(), "TUNI");
        assert_eq!(format!("{}", id), "TUNI");
        assert_eq!(id, "TUNI");

        let id2: AffiliationId = "AALTO".into();
        assert!(id < id2 || id > id2);
        assert!(AffiliationId::none().is_none());
        assert!(!id2.is_none());
    }

    #[test]
    fn test_coord_ordering() {
        // Closer to the origin sorts first
        assert!(Coord::new(1, 0) < Coord::new(2, 0));
        assert!(Coord::new(3, 4) < Coord::new(0, 6));
        // Same distance: smaller y first, then smaller x
        assert!(Coord::new(5, 0) < Coord::new(0, 5));
        assert!(Coord::new(-3, 0) < Coord::new(3, 0));
        assert_eq!(Coord::new(2, 2).cmp(&Coord::new(2, 2)), Ordering::Equal);
    }

    #[test]
    fn test_coord_distance() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 4);
        assert_eq!(a.distance_sq(&b), 25);
        assert_eq!(a.distance(&b), 5);
        // Rounded down
        assert_eq!(a.distance(&Coord::new(1, 1)), 1);
        // No overflow at the extremes
        assert!(NO_COORD.distance_sq(&Coord::new(i32::MAX, i32::MAX)) > 0);
    }

    #[test]
    fn test_connection_display() {
        let conn = Connection::new("A1", "A2", 3);
        assert_eq!(format!("{}", conn), "A1 -> A2 (3)");
    }
}
