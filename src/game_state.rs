// src/game_state.rs

use dungeon::Point;
use error::Result;
use hero::{Hero, Score};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::info;

use crate::config::GameConfig;
use crate::turn_system::StepOutcome;
use crate::world::World;

/// A game in progress, driven one frame at a time by the outer loop.
pub struct GameSession {
    world: World,
    rng: Pcg64,
    /// Set once the final score has been handed out
    finished: bool,
}

impl GameSession {
    /// Rolls a hero called `name` and builds the world, both from `seed`.
    pub fn new(config: &GameConfig, name: &str, seed: u64) -> Result<Self> {
        let mut rng = Pcg64::seed_from_u64(seed);
        let hero = Hero::random(name, &mut rng);
        let world = World::from_config(config, hero, &mut rng)?;
        info!(seed, name, "new game");
        Ok(Self {
            world,
            rng,
            finished: false,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Runs one frame.
    ///
    /// The world only ticks while the hero is still gathering energy or has
    /// commands queued, so an idle hero with a full tank waits for input.
    /// Returns the final score on the frame the hero is found dead.
    pub fn advance(&mut self) -> Result<Option<Score>> {
        if self.finished {
            return Ok(None);
        }
        if !self.world.is_hero_alive() {
            return self.finish();
        }

        let hero = self.world.hero()?;
        if hero.stats.can_act() && !hero.has_actions() {
            return Ok(None);
        }
        if self.world.step(&mut self.rng)? == StepOutcome::HeroDied {
            return self.finish();
        }
        Ok(None)
    }

    pub fn path_to(&mut self, target: Point) -> Result<()> {
        self.world.path_to(target)
    }

    pub fn wait(&mut self) -> Result<()> {
        self.world.enqueue_wait()
    }

    /// Leaves the game early, handing out the score if not done yet.
    pub fn exit(&mut self) -> Result<Option<Score>> {
        if self.finished {
            return Ok(None);
        }
        self.finish()
    }

    fn finish(&mut self) -> Result<Option<Score>> {
        let score = self.world.hero()?.to_score();
        self.finished = true;
        info!(name = %score.name, level = score.level, score = score.score, "game over");
        Ok(Some(score))
    }
}
