use std::collections::BTreeMap;

use super::{Agent, AgentKind, EntityId, Position};

/// Arena of agents keyed by stable id.
///
/// Iteration follows id order, so drivers that walk the registry update
/// agents in a reproducible order.
#[derive(Clone, Debug, Default)]
pub struct Agents {
    agents: BTreeMap<EntityId, Agent>,
    next_id: u32,
}

impl Agents {
    pub fn new() -> Self {
        Self {
            agents: BTreeMap::new(),
            // 0 is reserved for the player.
            next_id: 1,
        }
    }

    /// Inserts the player under [`EntityId::PLAYER`], replacing any previous one.
    pub fn spawn_player(&mut self, position: Position) -> EntityId {
        let agent = Agent::new(EntityId::PLAYER, AgentKind::Player, position);
        self.agents.insert(EntityId::PLAYER, agent);
        EntityId::PLAYER
    }

    /// Inserts a new agent under a freshly allocated id.
    pub fn spawn(&mut self, kind: AgentKind, position: Position) -> EntityId {
        let id = EntityId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.agents.insert(id, Agent::new(id, kind, position));
        tracing::debug!("spawned {} {} at {}", kind, id, position);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Agent> {
        self.agents.remove(&id)
    }

    pub fn player(&self) -> Option<&Agent> {
        self.get(EntityId::PLAYER)
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.agents.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.values_mut()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_skip_player() {
        let mut agents = Agents::new();
        let player = agents.spawn_player(Position::ORIGIN);
        let a = agents.spawn(AgentKind::Enemy, Position::new(1, 1));
        let b = agents.spawn(AgentKind::Enemy, Position::new(2, 2));

        assert_eq!(player, EntityId::PLAYER);
        assert_eq!(a, EntityId(1));
        assert_eq!(b, EntityId(2));
        assert_eq!(agents.ids(), vec![player, a, b]);
    }

    #[test]
    fn default_registry_never_hands_out_the_player_id() {
        let mut agents = Agents::default();
        let id = agents.spawn(AgentKind::Enemy, Position::ORIGIN);
        assert_ne!(id, EntityId::PLAYER);
    }

    #[test]
    fn remove_forgets_agent() {
        let mut agents = Agents::new();
        let id = agents.spawn(AgentKind::Enemy, Position::ORIGIN);

        assert!(agents.remove(id).is_some());
        assert!(agents.get(id).is_none());
        assert!(agents.is_empty());
    }
}
