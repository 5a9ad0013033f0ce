use crate::*;
use std::collections::BTreeMap;

/// Incremental scenario authoring.
///
/// Owns the id counters for situations and actions, so ids are unique
/// within one builder and never shared across sessions. The first
/// situation created becomes the root unless [`root`](Self::root) says
/// otherwise. Misuse is collected and reported by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ScenarioBuilder {
    name: String,
    next_situation: SituationId,
    next_action: ActionId,
    root: Option<SituationId>,
    situations: BTreeMap<SituationId, Situation>,
    terminals: BTreeMap<SituationId, TerminalSituation>,
    initial: DynamicState,
    reward: RewardConfig,
    errors: Vec<String>,
}

impl ScenarioBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn situation(&mut self, name: &str) -> SituationId {
        let id = self.next_situation();
        self.root.get_or_insert(id);
        self.situations.insert(
            id,
            Situation {
                situation_id: id,
                name: name.to_string(),
                description: String::new(),
                player_actions: Vec::new(),
                opponent_actions: Vec::new(),
                transitions: Vec::new(),
            },
        );
        id
    }

    pub fn terminal(&mut self, name: &str, corner_state: CornerState) -> SituationId {
        let id = self.next_situation();
        self.terminals.insert(
            id,
            TerminalSituation {
                situation_id: id,
                name: name.to_string(),
                description: String::new(),
                corner_state,
            },
        );
        id
    }

    pub fn player_action(&mut self, situation: SituationId, name: &str) -> ActionId {
        let id = self.next_action();
        match self.situations.get_mut(&situation) {
            Some(s) => s.player_actions.push(Action::new(id, name)),
            None => self.errors.push(format!("player action {} on unknown situation {}", name, situation)),
        }
        id
    }

    pub fn opponent_action(&mut self, situation: SituationId, name: &str) -> ActionId {
        let id = self.next_action();
        match self.situations.get_mut(&situation) {
            Some(s) => s.opponent_actions.push(Action::new(id, name)),
            None => self.errors.push(format!("opponent action {} on unknown situation {}", name, situation)),
        }
        id
    }

    pub fn transition(&mut self, situation: SituationId, transition: Transition) -> &mut Self {
        match self.situations.get_mut(&situation) {
            Some(s) => s.transitions.push(transition),
            None => self.errors.push(format!("transition on unknown situation {}", situation)),
        }
        self
    }

    /// Shorthand for an unconditional transition.
    pub fn outcome(
        &mut self,
        situation: SituationId,
        player: ActionId,
        opponent: ActionId,
        next: SituationId,
        consumptions: &[(ResourceType, Amount)],
    ) -> &mut Self {
        self.transition(
            situation,
            Transition {
                player_action_id: player,
                opponent_action_id: opponent,
                next_situation_id: next,
                resource_consumptions: consumptions.iter().copied().map(Resource::from).collect(),
                resource_requirements: Vec::new(),
            },
        )
    }

    pub fn root(&mut self, situation: SituationId) -> &mut Self {
        self.root = Some(situation);
        self
    }

    pub fn resource(&mut self, kind: ResourceType, value: Amount) -> &mut Self {
        self.initial = self.initial.with(kind, value);
        self
    }

    pub fn reward(&mut self, config: RewardConfig) -> &mut Self {
        self.reward = config;
        self
    }

    /// Validate and freeze. Every transition must name actions that exist
    /// on its own situation. Successor ids are left to the tree builder.
    pub fn build(self) -> anyhow::Result<Scenario> {
        if let Some(error) = self.errors.first() {
            anyhow::bail!("{}", error);
        }
        let root = self
            .root
            .ok_or_else(|| anyhow::anyhow!("scenario {} has no situations", self.name))?;
        for situation in self.situations.values() {
            for t in situation.transitions.iter() {
                let player = situation
                    .player_actions
                    .iter()
                    .any(|a| a.action_id == t.player_action_id);
                let opponent = situation
                    .opponent_actions
                    .iter()
                    .any(|a| a.action_id == t.opponent_action_id);
                if !player || !opponent {
                    anyhow::bail!(
                        "situation {} has a transition on foreign actions ({}, {})",
                        situation.situation_id,
                        t.player_action_id,
                        t.opponent_action_id
                    );
                }
            }
        }
        Ok(Scenario {
            name: self.name,
            root_situation_id: root,
            situations: self.situations.into_values().collect(),
            terminal_situations: self.terminals.into_values().collect(),
            initial_dynamic_state: self.initial,
            reward_config: self.reward,
        })
    }

    fn next_situation(&mut self) -> SituationId {
        self.next_situation += 1;
        self.next_situation
    }
    fn next_action(&mut self) -> ActionId {
        self.next_action += 1;
        self.next_action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters() {
        let mut a = ScenarioBuilder::new("a");
        let mut b = ScenarioBuilder::new("b");
        let s1 = a.situation("one");
        let s2 = a.situation("two");
        let t1 = b.situation("one");
        assert_ne!(s1, s2);
        assert_eq!(s1, t1);
        let x = a.player_action(s1, "jab");
        let y = a.opponent_action(s1, "block");
        assert_ne!(x, y);
    }

    #[test]
    fn rooting() {
        let mut builder = ScenarioBuilder::new("rooting");
        let first = builder.situation("first");
        let second = builder.situation("second");
        assert_eq!(builder.build().unwrap().root_situation_id, first);
        let mut builder = ScenarioBuilder::new("rerooted");
        builder.situation("first");
        let second_again = builder.situation("second");
        builder.root(second_again);
        assert_eq!(builder.build().unwrap().root_situation_id, second);
    }

    #[test]
    fn foreign() {
        let mut builder = ScenarioBuilder::new("foreign");
        let here = builder.situation("here");
        let there = builder.situation("there");
        let jab = builder.player_action(here, "jab");
        let block = builder.opponent_action(there, "block");
        builder.outcome(here, jab, block, there, &[]);
        assert!(builder.build().is_err());
    }

    #[test]
    fn unknown() {
        let mut builder = ScenarioBuilder::new("unknown");
        builder.situation("here");
        builder.player_action(99, "jab");
        assert!(builder.build().is_err());
    }
}
