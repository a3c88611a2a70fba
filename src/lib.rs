//! Turn-based roguelike core: a multi-level dungeon, a hero driven by queued
//! commands and monsters that hunt it.

pub mod config;
pub mod entity;
pub mod game_state;
pub mod logging;
pub mod systems;
pub mod turn_system;
pub mod world;

pub use crate::config::GameConfig;
pub use crate::entity::{Entity, EntityId, EntityKind};
pub use crate::game_state::GameSession;
pub use crate::turn_system::StepOutcome;
pub use crate::world::{Stairway, World, make_world};

pub use combat::{Monster, MonsterKind, species_by_depth};
pub use dungeon::{Direction, Level, Point, TileType};
pub use error::{GameError, Result};
pub use hero::{Hero, HeroAction, HeroStatus, HighScores, Score};
