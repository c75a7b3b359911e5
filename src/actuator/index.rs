//! Validated 1-based actuator index.

use super::ACTUATOR_COUNT;

/// Actuator number in `1..=6`, matching the mixing matrix row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorIndex(u8);

impl ActuatorIndex {
    /// Create an index, or `None` when `number` is outside `1..=6`.
    #[inline]
    pub fn new(number: i32) -> Option<Self> {
        if (1..=ACTUATOR_COUNT as i32).contains(&number) {
            Some(Self(number as u8))
        } else {
            None
        }
    }

    /// The 1-based actuator number.
    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based array position.
    #[inline]
    pub fn slot(self) -> usize {
        self.0 as usize - 1
    }

    /// All indices, actuator 1 first.
    pub fn all() -> impl Iterator<Item = ActuatorIndex> {
        (1..=ACTUATOR_COUNT as u8).map(ActuatorIndex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert!(ActuatorIndex::new(0).is_none());
        assert!(ActuatorIndex::new(7).is_none());
        assert!(ActuatorIndex::new(-1).is_none());
        assert_eq!(ActuatorIndex::new(1).map(|i| i.slot()), Some(0));
        assert_eq!(ActuatorIndex::new(6).map(|i| i.slot()), Some(5));
    }

    #[test]
    fn test_all_in_order() {
        let numbers: std::vec::Vec<u8> = ActuatorIndex::all().map(|i| i.number()).collect();
        assert_eq!(numbers, [1, 2, 3, 4, 5, 6]);
    }
}
