//! Dense population storage.

use ep_core::{AgentId, Point};

use crate::{HealthState, Human};

/// Every human of one run, indexed by `AgentId`.
///
/// The length is fixed at construction; death is a state, not a removal.
#[derive(Clone, Debug, Default)]
pub struct Population {
    humans: Vec<Human>,
}

impl Population {
    pub fn from_humans(humans: Vec<Human>) -> Self {
        Self { humans }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.humans.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.humans.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.humans.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Human> {
        self.humans.get(agent.index())
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Human> {
        self.humans.get_mut(agent.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Human> {
        self.humans.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Human> {
        self.humans.iter_mut()
    }

    pub fn as_slice(&self) -> &[Human] {
        &self.humans
    }

    /// Number of humans currently in `state`.
    pub fn count(&self, state: HealthState) -> usize {
        self.humans.iter().filter(|h| h.state == state).count()
    }

    /// Positions of every infected human, in `AgentId` order.
    pub fn infected_positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.humans
            .iter()
            .filter(|h| h.is_infected())
            .map(|h| h.position)
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Human;
    type IntoIter = std::slice::Iter<'a, Human>;

    fn into_iter(self) -> Self::IntoIter {
        self.humans.iter()
    }
}
