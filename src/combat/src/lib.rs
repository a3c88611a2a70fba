// src/combat/src/lib.rs

pub mod combatant;
pub mod monster;

pub use crate::combatant::{ACTION_COST, Combatant, Stats};
pub use crate::monster::{DEPTH_TIERS, Monster, MonsterKind, random_species, species_by_depth};

/// Damage one blow deals: strength minus defence, never below zero.
pub fn damage(attacker: &Stats, defender: &Stats) -> i32 {
    (attacker.strength - defender.defence).max(0)
}

/// Handles melee between entities.
pub struct Combat;

impl Combat {
    pub fn calculate_damage<T: Combatant, U: Combatant>(attacker: &T, defender: &U) -> i32 {
        damage(attacker.stats(), defender.stats())
    }

    /// Resolve a single blow with combat logs
    pub fn resolve_attack<T: Combatant, U: Combatant>(
        attacker: &T,
        defender: &mut U,
    ) -> CombatResult {
        let mut result = CombatResult::new();
        let damage = Self::calculate_damage(attacker, defender);
        defender.take_damage(damage);
        result.damage = damage;

        result.log(format!(
            "{} hits {} for {} damage.",
            attacker.name(),
            defender.name(),
            damage
        ));

        result.defeated = !defender.is_alive();

        result
    }
}

/// Outcome of one blow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombatResult {
    pub logs: Vec<String>, // Messages for the hero's log
    pub damage: i32,
    pub defeated: bool, // Whether the defender dropped to zero hit points or below
}

impl CombatResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, message: String) {
        self.logs.push(message);
    }
}
