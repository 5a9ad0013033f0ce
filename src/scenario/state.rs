use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// The resource vector carried along a path through the scenario.
///
/// Holds at most one value per [`ResourceType`]. Values never drop below
/// zero through consumption. On the wire it is a plain list of
/// [`Resource`]s in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Resource>", into = "Vec<Resource>")]
pub struct DynamicState(BTreeMap<ResourceType, Amount>);

impl DynamicState {
    /// Current value of a resource; untracked resources read as zero.
    pub fn get(&self, kind: ResourceType) -> Amount {
        self.0.get(&kind).copied().unwrap_or_default()
    }
    pub fn contains(&self, kind: ResourceType) -> bool {
        self.0.contains_key(&kind)
    }
    pub fn player_health(&self) -> Amount {
        self.get(ResourceType::PlayerHealth)
    }
    pub fn opponent_health(&self) -> Amount {
        self.get(ResourceType::OpponentHealth)
    }
    /// Copy of this state with one resource overridden (or added).
    pub fn with(&self, kind: ResourceType, value: Amount) -> Self {
        let mut next = self.clone();
        next.0.insert(kind, value);
        next
    }
    /// Apply transition consumptions. Each tracked resource named by a
    /// consumption decreases by its amount, clamped at zero. Resources not
    /// named are carried over, and consumptions of untracked resources are
    /// ignored.
    pub fn consume(&self, consumptions: &[Resource]) -> Self {
        let mut next = self.clone();
        for consumption in consumptions {
            if let Some(value) = next.0.get_mut(&consumption.resource_type) {
                *value = value.saturating_sub(consumption.value).max(0);
            }
        }
        next
    }
    /// Whether every requirement `(type, value)` is met by `state[type] >= value`.
    pub fn satisfies(&self, requirements: &[Resource]) -> bool {
        requirements
            .iter()
            .all(|r| self.get(r.resource_type) >= r.value)
    }
    /// Canonical `type:value` listing sorted by resource type.
    /// Identical resource sets always produce identical hashes.
    pub fn state_hash(&self) -> String {
        self.0
            .iter()
            .map(|(kind, value)| format!("{}:{}", kind, value))
            .collect::<Vec<_>>()
            .join(",")
    }
    pub fn resources(&self) -> impl Iterator<Item = Resource> + '_ {
        self.0.iter().map(|(k, v)| Resource::from((*k, *v)))
    }
}

impl From<Vec<Resource>> for DynamicState {
    fn from(resources: Vec<Resource>) -> Self {
        Self(
            resources
                .into_iter()
                .map(|r| (r.resource_type, r.value))
                .collect(),
        )
    }
}

impl From<DynamicState> for Vec<Resource> {
    fn from(state: DynamicState) -> Self {
        state.resources().collect()
    }
}

impl std::fmt::Display for DynamicState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.state_hash())
    }
}

impl Arbitrary for DynamicState {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let mut resources = Vec::new();
        for kind in ResourceType::ALL {
            if rng.random_bool(0.75) {
                resources.push(Resource::from((kind, rng.random_range(0..10000))));
            }
        }
        Self::from(resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    fn state() -> DynamicState {
        DynamicState::from(vec![
            Resource::from((ResourceType::PlayerHealth, 10000)),
            Resource::from((ResourceType::OpponentHealth, 8000)),
            Resource::from((ResourceType::PlayerOdGauge, 6)),
        ])
    }

    #[test]
    fn commutativity() {
        let ref mut rng = rand::rng();
        for _ in 0..64 {
            let original = DynamicState::random();
            let mut resources = Vec::<Resource>::from(original.clone());
            resources.shuffle(rng);
            let shuffled = DynamicState::from(resources);
            assert_eq!(original.state_hash(), shuffled.state_hash());
        }
    }

    #[test]
    fn ordering() {
        let hash = state().state_hash();
        assert_eq!(hash, "playerHealth:10000,opponentHealth:8000,playerOdGauge:6");
    }

    #[test]
    fn clamping() {
        let next = state().consume(&[Resource::from((ResourceType::OpponentHealth, 9000))]);
        assert_eq!(next.opponent_health(), 0);
        assert_eq!(next.player_health(), 10000);
    }

    #[test]
    fn saturation() {
        let next = state().consume(&[
            Resource::from((ResourceType::PlayerOdGauge, Amount::MIN)),
            Resource::from((ResourceType::OpponentHealth, Amount::MAX)),
        ]);
        assert_eq!(next.get(ResourceType::PlayerOdGauge), Amount::MAX);
        assert_eq!(next.opponent_health(), 0);
    }

    #[test]
    fn carryover() {
        let next = state().consume(&[
            Resource::from((ResourceType::PlayerOdGauge, 2)),
            Resource::from((ResourceType::OpponentSaGauge, 1)),
        ]);
        assert_eq!(next.get(ResourceType::PlayerOdGauge), 4);
        assert_eq!(next.player_health(), 10000);
        assert_eq!(next.opponent_health(), 8000);
        assert!(!next.contains(ResourceType::OpponentSaGauge));
    }

    #[test]
    fn requirements() {
        let s = state();
        assert!(s.satisfies(&[Resource::from((ResourceType::PlayerOdGauge, 2))]));
        assert!(!s.satisfies(&[Resource::from((ResourceType::PlayerOdGauge, 7))]));
        assert!(!s.satisfies(&[Resource::from((ResourceType::PlayerSaGauge, 1))]));
        assert!(s.satisfies(&[]));
    }

    #[test]
    fn wire() {
        let json = serde_json::to_string(&state()).unwrap();
        let back = serde_json::from_str::<DynamicState>(&json).unwrap();
        assert_eq!(back, state());
    }
}
