use serde::{Deserialize, Serialize};

/// A position in simulation space (simulation distance units, not scene units).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// An unordered pair of node indices, stored as `(min, max)`.
///
/// Serializes as a two element array; `[4, 1]` and `[1, 4]` deserialize to the
/// same pair.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct NodePair {
    low: usize,
    high: usize,
}

impl NodePair {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(self) -> usize {
        self.low
    }

    pub fn high(self) -> usize {
        self.high
    }
}

impl From<(usize, usize)> for NodePair {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

impl From<NodePair> for (usize, usize) {
    fn from(pair: NodePair) -> Self {
        (pair.low, pair.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_unordered() {
        assert_eq!(NodePair::new(3, 1), NodePair::new(1, 3));
        let pair = NodePair::new(7, 2);
        assert_eq!(pair.low(), 2);
        assert_eq!(pair.high(), 7);
    }

    #[test]
    fn test_pair_deserializes_from_either_order() {
        let pairs: Vec<NodePair> = serde_json::from_str("[[4, 1], [1, 4], [2, 2]]").unwrap();
        assert_eq!(pairs[0], pairs[1]);
        assert_eq!(pairs[2], NodePair::new(2, 2));
        assert_eq!(serde_json::to_string(&pairs[0]).unwrap(), "[1,4]");
    }

    #[test]
    fn test_point_scaling() {
        let p = Point3::new(1.0, -2.0, 4.0).scaled(0.5);
        assert_eq!(p, Point3::new(0.5, -1.0, 2.0));
    }
}
