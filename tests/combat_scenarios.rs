/// Melee between the hero and monsters, driven through `World::step`.
mod common;

use combat::Stats;
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use renethack::{Direction, HeroAction, Monster, MonsterKind, Point, StepOutcome};

use common::{hero, room_world};

fn dummy(hit_points: i32, defence: i32) -> Monster {
    // Speed 0: never acts, so it only ever takes hits.
    Monster::with_stats(
        MonsterKind::Kobold,
        Stats::new("Kobold", hit_points, defence, 0, 1),
        true,
    )
}

#[test]
fn test_hero_kills_monster() {
    let mut rng = Pcg64::seed_from_u64(1);
    let mut world = room_world(hero(10, 0, 100, 5));
    let target = Point::new(6, 5);
    world.spawn_at(target, dummy(3, 2)).unwrap();
    world
        .hero_mut()
        .unwrap()
        .enqueue(HeroAction::Move(Direction::East));

    // First tick only fills the hero's energy.
    assert_eq!(world.step(&mut rng).unwrap(), StepOutcome::Continued);
    assert!(world.current_level().is_occupied(target));

    // Second tick: the blow lands, then the monster's own update removes it.
    assert_eq!(world.step(&mut rng).unwrap(), StepOutcome::Continued);
    assert!(!world.current_level().is_occupied(target));
    assert_eq!(world.current_level().live_entity_count(), 1);

    let status = world.hero_status().unwrap();
    assert_eq!(status.experience, 1);
    assert_eq!(status.score, 10);
    assert_eq!(
        world.drain_messages(),
        vec![
            "Ada hits Kobold for 3 damage.".to_string(),
            "The Kobold dies.".to_string()
        ]
    );
    assert!(world.drain_messages().is_empty());
}

#[test]
fn test_attack_on_move_interrupts_path() {
    let mut rng = Pcg64::seed_from_u64(2);
    let mut world = room_world(hero(10, 0, 100, 1));
    world.spawn_at(Point::new(6, 5), dummy(20, 0)).unwrap();
    world.path_to(Point::new(8, 5)).unwrap();
    assert_eq!(world.hero().unwrap().queued_actions().count(), 3);

    world.step(&mut rng).unwrap();
    world.step(&mut rng).unwrap();

    let hero = world.hero().unwrap();
    assert!(!hero.has_actions());
    assert_eq!(world.hero_position(), Point::new(5, 5));
    let monster = world.current_level().entity_at(Point::new(6, 5)).unwrap();
    assert_eq!(monster.as_monster().unwrap().stats.hit_points, 19);
}

#[test]
fn test_attack_on_use_keeps_queue() {
    let mut rng = Pcg64::seed_from_u64(3);
    let mut world = room_world(hero(10, 0, 100, 1));
    world.spawn_at(Point::new(5, 6), dummy(20, 0)).unwrap();
    {
        let hero = world.hero_mut().unwrap();
        hero.enqueue(HeroAction::Use(Direction::North));
        hero.enqueue_wait();
    }

    world.step(&mut rng).unwrap();
    world.step(&mut rng).unwrap();
    assert_eq!(
        world.hero().unwrap().queued_actions().copied().collect::<Vec<_>>(),
        vec![HeroAction::Wait]
    );
}

#[test]
fn test_monster_attacks_hero() {
    let mut rng = Pcg64::seed_from_u64(4);
    let mut world = room_world(hero(10, 1, 50, 1));
    let mut orc = Monster::new(MonsterKind::Orc); // strength 4
    orc.stats.energy = 100;
    world.spawn_at(Point::new(4, 4), orc).unwrap();

    assert_eq!(world.step(&mut rng).unwrap(), StepOutcome::Continued);
    assert_eq!(world.hero_status().unwrap().hit_points, 7);
    assert_eq!(world.drain_messages(), vec!["Orc hits Ada for 3 damage.".to_string()]);

    let orc = world.current_level().entity_at(Point::new(4, 4)).unwrap();
    assert_eq!(orc.as_monster().unwrap().stats.energy, 50);
}

#[test]
fn test_hero_death_ends_tick_and_game() {
    let mut rng = Pcg64::seed_from_u64(5);
    let mut world = room_world(hero(2, 0, 50, 1));
    let mut ogre = Monster::new(MonsterKind::Ogre);
    ogre.stats.energy = 100;
    world.spawn_at(Point::new(6, 6), ogre).unwrap();
    // Placed after the ogre in turn order; must not be processed.
    let mut rat = Monster::new(MonsterKind::Rat);
    rat.stats.energy = 100;
    world.spawn_at(Point::new(1, 1), rat).unwrap();

    assert_eq!(world.step(&mut rng).unwrap(), StepOutcome::HeroDied);
    assert!(!world.is_hero_alive());
    let rat = world.current_level().entity_at(Point::new(1, 1)).unwrap();
    assert_eq!(rat.as_monster().unwrap().stats.energy, 100);

    let messages = world.drain_messages();
    assert_eq!(messages.last().map(String::as_str), Some("You die..."));

    assert_eq!(world.step(&mut rng).unwrap(), StepOutcome::HeroDied);
    assert_eq!(world.current_level().entity_at(Point::new(1, 1)).unwrap().as_monster().unwrap().stats.energy, 100);
}
