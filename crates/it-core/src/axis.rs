//! Spatial axes of the volume

use std::fmt;
use serde::{Serialize, Deserialize};

/// One of the three spatial dimensions, indexed 0 (x), 1 (y), 2 (z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in index order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }

    /// The matching `ndarray` axis for indexing a volume
    pub fn as_array_axis(self) -> ndarray::Axis {
        ndarray::Axis(self.index())
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// A small set of axes, used for slice dependencies and change tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AxisSet(u8);

impl AxisSet {
    pub const EMPTY: AxisSet = AxisSet(0);
    pub const ALL: AxisSet = AxisSet(0b111);

    pub fn insert(&mut self, axis: Axis) {
        self.0 |= 1 << axis.index();
    }

    pub fn with(mut self, axis: Axis) -> Self {
        self.insert(axis);
        self
    }

    pub fn contains(self, axis: Axis) -> bool {
        self.0 & (1 << axis.index()) != 0
    }

    pub fn intersects(self, other: AxisSet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Axis> {
        Axis::ALL.into_iter().filter(move |axis| self.contains(*axis))
    }
}

impl From<Axis> for AxisSet {
    fn from(axis: Axis) -> Self {
        AxisSet::EMPTY.with(axis)
    }
}

impl FromIterator<Axis> for AxisSet {
    fn from_iter<I: IntoIterator<Item = Axis>>(iter: I) -> Self {
        iter.into_iter().fold(AxisSet::EMPTY, AxisSet::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_index_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_index(axis.index()), Some(axis));
        }
        assert_eq!(Axis::from_index(3), None);
    }

    #[test]
    fn test_axis_set_membership() {
        let set: AxisSet = [Axis::X, Axis::Z].into_iter().collect();
        assert!(set.contains(Axis::X));
        assert!(!set.contains(Axis::Y));
        assert!(set.contains(Axis::Z));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Axis::X, Axis::Z]);
    }

    #[test]
    fn test_axis_set_intersection() {
        let yz = AxisSet::from(Axis::Y).with(Axis::Z);
        assert!(yz.intersects(Axis::Z.into()));
        assert!(!yz.intersects(Axis::X.into()));
        assert!(!AxisSet::EMPTY.intersects(AxisSet::ALL));
    }
}
