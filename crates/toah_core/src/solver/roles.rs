//! Stool roles for the recursive solvers.
//!
//! Each recursive call sees the stools under role names rather than
//! fixed indices. The permutations below are the only place roles are
//! reassigned, so they can be checked without touching a model.

/// Roles of four stools in a four-stool sub-tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PegRoles {
    /// Stool the pile starts on.
    pub source: usize,
    /// Spare that receives the parked upper part of the pile.
    pub spare_a: usize,
    /// Spare used only by the three-stool step.
    pub spare_b: usize,
    /// Stool the pile ends on.
    pub destination: usize,
}

impl PegRoles {
    /// Creates a role assignment.
    pub fn new(source: usize, spare_a: usize, spare_b: usize, destination: usize) -> Self {
        Self {
            source,
            spare_a,
            spare_b,
            destination,
        }
    }

    /// Roles for parking the upper part of the pile on `spare_a`.
    ///
    /// The real destination is free during this step and serves as a spare.
    pub fn park(self) -> Self {
        Self {
            source: self.source,
            spare_a: self.destination,
            spare_b: self.spare_b,
            destination: self.spare_a,
        }
    }

    /// Roles for moving the lower part straight to the destination.
    ///
    /// `spare_a` is occupied by the parked cheeses, so only `spare_b` helps.
    pub fn direct(self) -> ThreePegRoles {
        ThreePegRoles {
            source: self.source,
            via: self.spare_b,
            destination: self.destination,
        }
    }

    /// Roles for bringing the parked cheeses from `spare_a` to the destination.
    pub fn unpark(self) -> Self {
        Self {
            source: self.spare_a,
            spare_a: self.source,
            spare_b: self.spare_b,
            destination: self.destination,
        }
    }

    /// Returns the four stools in role order.
    pub fn as_array(self) -> [usize; 4] {
        [self.source, self.spare_a, self.spare_b, self.destination]
    }
}

/// Roles of three stools in a classic Hanoi sub-tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreePegRoles {
    /// Stool the pile starts on.
    pub source: usize,
    /// Intermediate stool.
    pub via: usize,
    /// Stool the pile ends on.
    pub destination: usize,
}

impl ThreePegRoles {
    /// Creates a role assignment.
    pub fn new(source: usize, via: usize, destination: usize) -> Self {
        Self {
            source,
            via,
            destination,
        }
    }

    /// Roles for moving all but the largest cheese onto `via`.
    pub fn to_via(self) -> Self {
        Self {
            source: self.source,
            via: self.destination,
            destination: self.via,
        }
    }

    /// Roles for moving those cheeses from `via` onto the destination.
    pub fn from_via(self) -> Self {
        Self {
            source: self.via,
            via: self.source,
            destination: self.destination,
        }
    }

    /// Returns the three stools in role order.
    pub fn as_array(self) -> [usize; 3] {
        [self.source, self.via, self.destination]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<const N: usize>(mut pegs: [usize; N]) -> [usize; N] {
        pegs.sort_unstable();
        pegs
    }

    #[test]
    fn test_park_swaps_spare_a_and_destination() {
        let roles = PegRoles::new(0, 1, 2, 3);
        assert_eq!(roles.park(), PegRoles::new(0, 3, 2, 1));
    }

    #[test]
    fn test_unpark_starts_from_spare_a() {
        let roles = PegRoles::new(0, 1, 2, 3);
        assert_eq!(roles.unpark(), PegRoles::new(1, 0, 2, 3));
    }

    #[test]
    fn test_direct_avoids_spare_a() {
        let roles = PegRoles::new(0, 1, 2, 3);
        assert_eq!(roles.direct(), ThreePegRoles::new(0, 2, 3));
    }

    #[test]
    fn test_permutations_keep_all_four_stools() {
        let roles = PegRoles::new(5, 2, 7, 1);
        let expected = sorted(roles.as_array());
        for derived in [roles.park(), roles.unpark(), roles.park().park(), roles.unpark().park()] {
            assert_eq!(sorted(derived.as_array()), expected);
        }
    }

    #[test]
    fn test_park_then_unpark_meet_on_spare_a() {
        let roles = PegRoles::new(0, 1, 2, 3);
        assert_eq!(roles.park().destination, roles.unpark().source);
    }

    #[test]
    fn test_three_stool_permutations() {
        let roles = ThreePegRoles::new(0, 1, 2);
        assert_eq!(roles.to_via(), ThreePegRoles::new(0, 2, 1));
        assert_eq!(roles.from_via(), ThreePegRoles::new(1, 0, 2));
        assert_eq!(sorted(roles.to_via().as_array()), [0, 1, 2]);
        assert_eq!(sorted(roles.from_via().as_array()), [0, 1, 2]);
    }
}
