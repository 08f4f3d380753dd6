//! The population roster.

use std::ops::{Index, IndexMut};

use sp_core::{AgentId, GeoPoint};

use crate::{Agent, Home};

/// Every agent generated so far, indexed by `AgentId`.
///
/// Ids are handed out sequentially from 1 by [`spawn`](Self::spawn); agents
/// are never removed, so `roster[id]` is always valid for an id the roster
/// issued.
#[derive(Clone, Debug, Default)]
pub struct AgentRoster {
    agents: Vec<Agent>,
}

impl AgentRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap agents that already carry sequential ids (e.g. read back from a
    /// snapshot).  Returns `None` if the ids are not `1, 2, 3, …`.
    pub fn from_agents(agents: Vec<Agent>) -> Option<Self> {
        agents
            .iter()
            .enumerate()
            .all(|(i, a)| a.id == AgentId::from_index(i))
            .then_some(Self { agents })
    }

    /// Create an agent with the next free id and return that id.
    pub fn spawn(&mut self, age: u8, location: GeoPoint, home: Home) -> AgentId {
        let id = AgentId::from_index(self.agents.len());
        self.agents.push(Agent::new(id, age, location, home));
        id
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent> {
        self.agents.iter_mut()
    }

    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    pub fn into_vec(self) -> Vec<Agent> {
        self.agents
    }
}

impl Index<AgentId> for AgentRoster {
    type Output = Agent;

    #[inline]
    fn index(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }
}

impl IndexMut<AgentId> for AgentRoster {
    #[inline]
    fn index_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.agents[id.index()]
    }
}

impl<'a> IntoIterator for &'a AgentRoster {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}
