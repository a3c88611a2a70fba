// src/combat/src/combatant.rs

use serde::{Deserialize, Serialize};

/// Energy an entity must hold to act, and the amount one action consumes.
pub const ACTION_COST: i32 = 100;

/// The stat block shared by every actor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub name: String,
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub defence: i32,
    /// Energy gained per tick
    pub speed: i32,
    pub strength: i32,
    /// Accumulator spent in chunks of [`ACTION_COST`]
    pub energy: i32,
}

impl Stats {
    /// Creates a stat block at full health with no stored energy.
    pub fn new(
        name: impl Into<String>,
        hit_points: i32,
        defence: i32,
        speed: i32,
        strength: i32,
    ) -> Self {
        Self {
            name: name.into(),
            hit_points,
            max_hit_points: hit_points,
            defence,
            speed,
            strength,
            energy: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    pub fn is_wounded(&self) -> bool {
        self.hit_points < self.max_hit_points
    }

    /// Whether enough energy is stored for one action.
    pub fn can_act(&self) -> bool {
        self.energy >= ACTION_COST
    }

    /// Pays for one confirmed action.
    pub fn spend_action(&mut self) {
        self.energy -= ACTION_COST;
    }

    /// End-of-tick energy gain.
    pub fn accrue_energy(&mut self) {
        self.energy = self.energy.saturating_add(self.speed);
    }

    /// Hit points may drop below zero; death is checked by the turn logic.
    pub fn take_damage(&mut self, amount: i32) {
        self.hit_points -= amount;
    }

    pub fn heal(&mut self, amount: i32) {
        self.hit_points = (self.hit_points + amount).min(self.max_hit_points);
    }
}

/// Anything that can attack or be attacked.
pub trait Combatant {
    fn stats(&self) -> &Stats;

    fn stats_mut(&mut self) -> &mut Stats;

    fn name(&self) -> &str {
        &self.stats().name
    }

    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }

    fn take_damage(&mut self, amount: i32) {
        self.stats_mut().take_damage(amount);
    }
}

impl Combatant for Stats {
    fn stats(&self) -> &Stats {
        self
    }

    fn stats_mut(&mut self) -> &mut Stats {
        self
    }
}
