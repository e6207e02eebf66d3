//! Conway's B3/S23 transition rules

/// Game of Life rules
pub struct LifeRules;

impl LifeRules {
    /// Neighbor counts with which a living cell stays alive
    pub const SURVIVAL: [u8; 2] = [2, 3];

    /// Neighbor counts with which a dead cell comes alive
    pub const BIRTH: [u8; 1] = [3];

    /// Maximum neighbor count in the Moore neighborhood
    pub const MAX_NEIGHBORS: u8 = 8;

    /// A living cell survives with two or three living neighbors; fewer is
    /// underpopulation, more is overpopulation.
    pub fn survives(neighbor_count: u8) -> bool {
        Self::SURVIVAL.contains(&neighbor_count)
    }

    /// A dead cell with exactly three living neighbors is born
    pub fn is_born(neighbor_count: u8) -> bool {
        Self::BIRTH.contains(&neighbor_count)
    }

    /// Whether a cell is alive in the next generation given its current state
    /// and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        if current_state {
            Self::survives(neighbor_count)
        } else {
            Self::is_born(neighbor_count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_logic() {
        assert!(LifeRules::should_be_alive(true, 2));
        assert!(LifeRules::should_be_alive(true, 3));
        assert!(LifeRules::should_be_alive(false, 3));
        assert!(!LifeRules::should_be_alive(true, 1));
        assert!(!LifeRules::should_be_alive(true, 4));
        assert!(!LifeRules::should_be_alive(false, 2));
    }

    #[test]
    fn test_full_rule_table() {
        for count in 0..=LifeRules::MAX_NEIGHBORS {
            let survives = count == 2 || count == 3;
            assert_eq!(LifeRules::survives(count), survives, "survival at {}", count);
            assert_eq!(LifeRules::is_born(count), count == 3, "birth at {}", count);
        }
    }
}
