use crate::models::Amenity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Multi-select set of amenities driven by checkbox toggles.
///
/// Membership is kept in declaration order of [`Amenity`] so tags and
/// queries built from it are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmenitySet {
    members: BTreeSet<Amenity>,
}

impl AmenitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the amenity when `included`, remove it otherwise. Both directions
    /// are idempotent.
    pub fn toggle(&mut self, amenity: Amenity, included: bool) {
        if included {
            self.members.insert(amenity);
        } else {
            self.members.remove(&amenity);
        }
    }

    pub fn members(&self) -> &BTreeSet<Amenity> {
        &self.members
    }

    pub fn contains(&self, amenity: Amenity) -> bool {
        self.members.contains(&amenity)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Amenity> + '_ {
        self.members.iter().copied()
    }
}

impl FromIterator<Amenity> for AmenitySet {
    fn from_iter<I: IntoIterator<Item = Amenity>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn amenity() -> impl Strategy<Value = Amenity> {
        prop::sample::select(Amenity::ALL.to_vec())
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut set = AmenitySet::new();
        set.toggle(Amenity::Wifi, true);
        set.toggle(Amenity::Gym, true);
        assert_eq!(set.len(), 2);

        set.toggle(Amenity::Wifi, false);
        assert!(!set.contains(Amenity::Wifi));
        assert!(set.contains(Amenity::Gym));
    }

    #[test]
    fn removing_absent_amenity_is_a_no_op() {
        let mut set: AmenitySet = [Amenity::Parking].into_iter().collect();
        set.toggle(Amenity::Food, false);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Amenity::Parking]);
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let set: AmenitySet = [Amenity::Gym, Amenity::Wifi, Amenity::Parking]
            .into_iter()
            .collect();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Amenity::Wifi, Amenity::Parking, Amenity::Gym]
        );
    }

    proptest! {
        #[test]
        fn add_then_remove_restores_original(
            initial in prop::collection::vec(amenity(), 0..8),
            a in amenity(),
        ) {
            let mut set: AmenitySet = initial.iter().copied().collect();
            prop_assume!(!set.contains(a));
            let before = set.clone();

            set.toggle(a, true);
            set.toggle(a, false);
            prop_assert_eq!(set, before);
        }

        #[test]
        fn repeated_add_is_idempotent(a in amenity(), times in 1usize..5) {
            let mut once = AmenitySet::new();
            once.toggle(a, true);

            let mut many = AmenitySet::new();
            for _ in 0..times {
                many.toggle(a, true);
            }
            prop_assert_eq!(once, many);
        }

        #[test]
        fn membership_reflects_last_toggle(
            ops in prop::collection::vec((amenity(), any::<bool>()), 0..40),
        ) {
            let mut set = AmenitySet::new();
            let mut expected = HashSet::new();
            for (a, included) in &ops {
                set.toggle(*a, *included);
                if *included {
                    expected.insert(*a);
                } else {
                    expected.remove(a);
                }
            }
            let actual: HashSet<_> = set.iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
