use tanks_core::{
    update, ConfigError, EntityRef, GameConfig, GameEvent, GameOverPolicy, GameState, InputState,
    Overlap,
};

const FRAME_MS: u64 = 16;

fn idle() -> InputState {
    InputState::default()
}

fn fire() -> InputState {
    InputState {
        fire: true,
        ..InputState::default()
    }
}

fn spawned(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::BulletSpawned { .. }))
        .count()
}

fn retired(events: &[GameEvent], slot: usize) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::BulletRetired { slot: s, .. } if *s == slot))
        .count()
}

fn angle_delta(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[test]
fn starts_at_the_fixed_pose() {
    let state = GameState::initialize(GameConfig::default()).unwrap();

    assert_eq!(state.tank().position.x, 100.0);
    assert_eq!(state.tank().position.y, 375.0);
    assert_eq!(state.tank().angle, 0.0);
    assert!(state.tank().alive);
    assert!(!state.is_game_over());
    assert_eq!(state.bullets().capacity(), 20);
    assert_eq!(state.bullets().in_flight_count(), 0);
    assert_eq!(state.environment().walls.len(), 64);
    assert_eq!(state.environment().boxes.len(), 23);
}

#[test]
fn empty_pool_fails_to_initialize() {
    let config = GameConfig {
        bullet_pool_size: 0,
        ..GameConfig::default()
    };
    assert_eq!(
        GameState::initialize(config),
        Err(ConfigError::BulletPoolEmpty)
    );
}

#[test]
fn left_then_right_restores_heading() {
    for start in [0.0, 0.3, 45.0, 179.55, 359.9] {
        let mut state = GameState::initialize(GameConfig::default()).unwrap();
        let turn = InputState {
            right: true,
            ..idle()
        };
        // bring the tank to roughly `start` degrees first
        let steps = (start / 0.9_f64).round() as u64;
        for t in 0..steps {
            state.tick(&turn, &[], t * FRAME_MS);
        }
        let before = state.tank().angle;

        state.tick(&InputState { left: true, ..idle() }, &[], 0);
        state.tick(&InputState { right: true, ..idle() }, &[], 0);
        assert!(angle_delta(state.tank().angle, before) < 1e-9);

        state.tick(&InputState { right: true, ..idle() }, &[], 0);
        state.tick(&InputState { left: true, ..idle() }, &[], 0);
        assert!(angle_delta(state.tank().angle, before) < 1e-9);
    }
}

#[test]
fn left_wins_over_right() {
    let mut state = GameState::initialize(GameConfig::default()).unwrap();
    state.tick(
        &InputState {
            left: true,
            right: true,
            ..idle()
        },
        &[],
        0,
    );

    assert!(angle_delta(state.tank().angle, 359.1) < 1e-9);
}

#[test]
fn reversing_covers_half_the_distance() {
    let mut state = GameState::initialize(GameConfig::default()).unwrap();
    for _ in 0..50 {
        state.tick(&InputState { right: true, ..idle() }, &[], 0);
    }
    let origin = state.tank().position;

    state.tick(&InputState { forward: true, ..idle() }, &[], 0);
    state.tick(&InputState { back: true, ..idle() }, &[], 0);

    let moved = state.tank().position.distance(&origin);
    assert!((moved - 2.5 / 2.0).abs() < 1e-9);
}

#[test]
fn forward_wins_over_back() {
    let mut state = GameState::initialize(GameConfig::default()).unwrap();
    state.tick(
        &InputState {
            forward: true,
            back: true,
            ..idle()
        },
        &[],
        0,
    );

    assert_eq!(state.tank().position.x, 102.5);
}

#[test]
fn ten_ticks_forward_from_the_start() {
    let mut state = GameState::initialize(GameConfig::default()).unwrap();
    let forward = InputState {
        forward: true,
        ..idle()
    };

    for t in 0..10 {
        state.tick(&forward, &[], t * FRAME_MS);
    }

    assert_eq!(state.tank().position.x, 125.0);
    assert_eq!(state.tank().position.y, 375.0);
    assert_eq!(state.tank().angle, 0.0);
    assert_eq!(state.tank().sprite_angle, 0.0);
}

#[test]
fn single_shot_keeps_one_bullet_out() {
    let config = GameConfig {
        firing: tanks_core::FiringMode::SingleShot { ammo: None },
        ..GameConfig::single_shot()
    };
    let mut state = GameState::initialize(config).unwrap();

    // hammer fire, sometimes retiring the bullet against a wall
    for t in 0..200u64 {
        let input = if t % 3 == 0 { fire() } else { idle() };
        let overlaps = if t % 7 == 0 {
            vec![Overlap(EntityRef::Bullet(0), EntityRef::Wall(0))]
        } else {
            Vec::new()
        };

        state.tick(&input, &overlaps, t * FRAME_MS);
        assert!(state.bullets().in_flight_count() <= 1);
    }
}

#[test]
fn single_shot_spends_ammo() {
    let mut state = GameState::initialize(GameConfig::single_shot()).unwrap();
    assert_eq!(state.ammo(), Some(3));

    let mut shots = 0;
    for t in 0..12u64 {
        let events = state.tick(&fire(), &[], t * FRAME_MS);
        shots += spawned(&events);
        // clear the way for the next shot
        let out = state.bullets().in_flight().next().map(|(slot, _)| slot);
        if let Some(slot) = out {
            state.tick(&idle(), &[Overlap(EntityRef::Bullet(slot), EntityRef::Wall(0))], 0);
        }
    }

    assert_eq!(shots, 3);
    assert_eq!(state.ammo(), Some(0));
}

#[test]
fn cooldown_spaces_out_shots() {
    let mut state = GameState::initialize(GameConfig::default()).unwrap();

    assert_eq!(spawned(&state.tick(&fire(), &[], 5_000)), 1);
    assert_eq!(state.bullet_time(), 6_000);
    assert_eq!(spawned(&state.tick(&fire(), &[], 5_999)), 0);
    assert_eq!(spawned(&state.tick(&fire(), &[], 6_000)), 1);
}

#[test]
fn fire_edges_under_a_second_apart_spawn_once() {
    for gap in [1, 16, 500, 999] {
        let mut state = GameState::initialize(GameConfig::default()).unwrap();
        let mut total = spawned(&state.tick(&fire(), &[], 2_000));
        total += spawned(&state.tick(&fire(), &[], 2_000 + gap));
        assert_eq!(total, 1, "gap of {gap}ms");
    }

    for gap in [1_000, 1_001, 4_000] {
        let mut state = GameState::initialize(GameConfig::default()).unwrap();
        let mut total = spawned(&state.tick(&fire(), &[], 2_000));
        total += spawned(&state.tick(&fire(), &[], 2_000 + gap));
        assert_eq!(total, 2, "gap of {gap}ms");
    }
}

#[test]
fn spawned_bullet_moves_on_its_first_tick() {
    let mut state = GameState::initialize(GameConfig::default()).unwrap();
    let events = state.tick(&fire(), &[], 0);

    assert_eq!(
        events[0],
        GameEvent::BulletSpawned {
            slot: 0,
            position: state.tank().position,
            angle: 0.0
        }
    );
    let bullet = state.bullets().get(0).unwrap();
    assert!(bullet.in_flight);
    assert_eq!(bullet.position.x, 300.0);
    assert_eq!(bullet.position.y, 375.0);
}

#[test]
fn full_pool_spawns_nothing() {
    let config = GameConfig {
        bullet_pool_size: 2,
        ..GameConfig::default()
    };
    let mut state = GameState::initialize(config).unwrap();
    state.tick(&fire(), &[], 0);
    state.tick(&fire(), &[], 1_000);
    assert_eq!(state.bullets().in_flight_count(), 2);

    let before = state.bullets().clone();
    let events = state.tick(&fire(), &[], 2_000);

    assert_eq!(spawned(&events), 0);
    assert_eq!(state.bullets().in_flight_count(), 2);
    // the only change is the bullets drifting on
    for (slot, bullet) in state.bullets().in_flight() {
        let old = before.get(slot).unwrap();
        assert_eq!(bullet.angle, old.angle);
        assert_eq!(bullet.position, old.position.plus(&old.velocity));
    }
    // a refused shot does not restart the cooldown
    assert_eq!(state.bullet_time(), 2_000);
}

#[test]
fn double_wall_report_retires_once() {
    let mut state = GameState::initialize(GameConfig::default()).unwrap();
    state.tick(&fire(), &[], 0);

    let hit = Overlap(EntityRef::Bullet(0), EntityRef::Wall(10));
    let events = state.tick(&idle(), &[hit, hit], FRAME_MS);

    assert_eq!(retired(&events, 0), 1);
    assert!(!state.bullets().is_in_flight(0));
    assert_eq!(state.environment().walls.len(), 64);
}

#[test]
fn bullet_into_a_box_destroys_it() {
    let mut state = GameState::initialize(GameConfig::default()).unwrap();
    state.tick(&fire(), &[], 0);
    assert!(state.environment().is_box_active(3));

    let (next, events) = update(
        &state,
        &idle(),
        &[Overlap(EntityRef::Bullet(0), EntityRef::Box(3))],
        FRAME_MS,
    );

    assert!(!next.bullets().is_in_flight(0));
    assert!(!next.environment().is_box_active(3));
    assert_eq!(next.environment().active_boxes().count(), 22);
    assert!(events.contains(&GameEvent::BoxDestroyed { index: 3 }));
    // the previous state is untouched
    assert!(state.bullets().is_in_flight(0));
    assert!(state.environment().is_box_active(3));
}

#[test]
fn colliding_bullets_both_retire() {
    let mut state = GameState::initialize(GameConfig::default()).unwrap();
    state.tick(&fire(), &[], 0);
    state.tick(&fire(), &[], 1_000);

    let events = state.tick(
        &idle(),
        &[Overlap(EntityRef::Bullet(1), EntityRef::Bullet(0))],
        1_016,
    );

    assert_eq!(retired(&events, 0), 1);
    assert_eq!(retired(&events, 1), 1);
    assert_eq!(state.bullets().in_flight_count(), 0);
}

#[test]
fn tank_hits_are_ignored_by_default() {
    let mut state = GameState::initialize(GameConfig::default()).unwrap();
    state.tick(&fire(), &[], 0);

    let events = state.tick(
        &idle(),
        &[Overlap(EntityRef::Tank, EntityRef::Bullet(0))],
        FRAME_MS,
    );

    assert!(events.is_empty());
    assert!(!state.is_game_over());
    assert!(state.tank().alive);
}

fn finished_session() -> GameState {
    let config = GameConfig {
        game_over: GameOverPolicy::OnTankHit,
        ..GameConfig::default()
    };
    let mut state = GameState::initialize(config).unwrap();
    state.tick(&fire(), &[], 0);

    let events = state.tick(
        &idle(),
        &[Overlap(EntityRef::Bullet(0), EntityRef::Tank)],
        FRAME_MS,
    );
    assert_eq!(events.last(), Some(&GameEvent::GameOver));

    state
}

#[test]
fn tank_hit_ends_the_game_when_enabled() {
    let state = finished_session();

    assert!(state.is_game_over());
    assert!(!state.tank().alive);
    assert_eq!(state.bullets().in_flight_count(), 0);
}

#[test]
fn own_fresh_bullet_does_not_end_the_game() {
    let config = GameConfig {
        game_over: GameOverPolicy::OnTankHit,
        ..GameConfig::default()
    };
    let mut state = GameState::initialize(config).unwrap();
    state.tick(&fire(), &[Overlap(EntityRef::Tank, EntityRef::Bullet(0))], 0);

    assert!(!state.is_game_over());
}

#[test]
fn finished_game_never_changes() {
    let state = finished_session();
    let inputs = [
        fire(),
        InputState {
            forward: true,
            left: true,
            fire: true,
            ..idle()
        },
        InputState {
            back: true,
            right: true,
            ..idle()
        },
    ];
    let overlaps = [
        Overlap(EntityRef::Bullet(0), EntityRef::Box(0)),
        Overlap(EntityRef::Tank, EntityRef::Bullet(1)),
    ];

    for (i, input) in inputs.iter().enumerate() {
        let (next, events) = update(&state, input, &overlaps, 10_000 * i as u64);
        assert_eq!(next, state);
        assert!(events.is_empty());
    }
}
