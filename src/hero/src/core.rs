// src/hero/src/core.rs

use std::collections::VecDeque;

use combat::{Combatant, Stats};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::HeroAction;
use crate::score::Score;

/// Experience needed for the next level.
pub const LEVEL_UP_EXPERIENCE: u32 = 6;
/// Ticks spent wounded per hit point regained.
pub const REGEN_TICKS: u32 = 10;
pub const KILL_EXPERIENCE: u32 = 1;
pub const KILL_SCORE: u32 = 10;
pub const LEVEL_UP_SCORE: u32 = 100;

/// The player character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub stats: Stats,
    pub level: u32,
    pub experience: u32,
    pub score: u32,
    regen_counter: u32,
    actions: VecDeque<HeroAction>,
    messages: Vec<String>,
}

/// Read-only snapshot of the hero for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStatus {
    pub name: String,
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub level: u32,
    pub experience: u32,
    pub score: u32,
    pub defence: i32,
    pub speed: i32,
    pub strength: i32,
}

impl Hero {
    pub fn new(name: impl Into<String>, hit_points: i32, defence: i32, speed: i32, strength: i32) -> Self {
        Self::from_stats(Stats::new(name, hit_points, defence, speed, strength))
    }

    pub fn from_stats(stats: Stats) -> Self {
        Self {
            stats,
            level: 1,
            experience: 0,
            score: 0,
            regen_counter: 0,
            actions: VecDeque::new(),
            messages: Vec::new(),
        }
    }

    /// Rolls a fresh hero with modest starting stats.
    pub fn random<R: Rng>(name: impl Into<String>, rng: &mut R) -> Self {
        Self::new(
            name,
            rng.random_range(7..=10),
            rng.random_range(0..=2),
            rng.random_range(50..=75),
            rng.random_range(1..=3),
        )
    }

    // Action queue

    pub fn enqueue(&mut self, action: HeroAction) {
        self.actions.push_back(action);
    }

    /// Puts `action` ahead of everything queued.
    pub fn push_front(&mut self, action: HeroAction) {
        self.actions.push_front(action);
    }

    pub fn enqueue_wait(&mut self) {
        self.enqueue(HeroAction::Wait);
    }

    pub fn replace_actions(&mut self, actions: Vec<HeroAction>) {
        self.actions = actions.into();
    }

    pub fn next_action(&mut self) -> Option<HeroAction> {
        self.actions.pop_front()
    }

    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn queued_actions(&self) -> impl Iterator<Item = &HeroAction> {
        self.actions.iter()
    }

    pub fn clear_actions(&mut self) {
        self.actions.clear();
    }

    // Messages

    pub fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Takes every pending message, oldest first.
    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    // Progression

    pub fn reward_kill(&mut self) {
        self.experience += KILL_EXPERIENCE;
        self.score += KILL_SCORE;
    }

    /// Levels up once if enough experience has been gathered.
    pub fn update_level(&mut self) -> bool {
        if self.experience < LEVEL_UP_EXPERIENCE {
            return false;
        }
        self.experience = 0;
        self.level += 1;
        self.score += LEVEL_UP_SCORE;

        let stats = &mut self.stats;
        stats.max_hit_points += 1;
        stats.defence += 1;
        stats.speed += 10;
        stats.strength += 1;

        debug!(name = %self.stats.name, level = self.level, "level up");
        self.push_message(format!("{} is now level {}!", self.stats.name, self.level));
        true
    }

    /// Restores one hit point every [`REGEN_TICKS`] wounded ticks.
    pub fn regenerate(&mut self) {
        if !self.stats.is_wounded() {
            self.regen_counter = 0;
            return;
        }
        self.regen_counter += 1;
        if self.regen_counter >= REGEN_TICKS {
            self.stats.heal(1);
            self.regen_counter = 0;
        }
    }

    pub fn status(&self) -> HeroStatus {
        HeroStatus {
            name: self.stats.name.clone(),
            hit_points: self.stats.hit_points,
            max_hit_points: self.stats.max_hit_points,
            level: self.level,
            experience: self.experience,
            score: self.score,
            defence: self.stats.defence,
            speed: self.stats.speed,
            strength: self.stats.strength,
        }
    }

    pub fn to_score(&self) -> Score {
        Score {
            name: self.stats.name.clone(),
            level: self.level,
            score: self.score,
        }
    }
}

impl Combatant for Hero {
    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }
}
