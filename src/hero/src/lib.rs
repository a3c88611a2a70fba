// src/hero/src/lib.rs
//! The player character: stats, queued commands, progression and scoring.

mod action;
mod core;
mod score;

pub use self::{
    action::{HeroAction, plan_actions},
    core::{
        Hero, HeroStatus, KILL_EXPERIENCE, KILL_SCORE, LEVEL_UP_EXPERIENCE, LEVEL_UP_SCORE,
        REGEN_TICKS,
    },
    score::{DEFAULT_CAPACITY, HighScores, Score},
};
