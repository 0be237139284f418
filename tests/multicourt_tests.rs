//! Несколько кортов: изоляция состояний, рассадка, деградация.

use std::collections::HashSet;

use rotation_engine::domain::{EngineConfig, Side, Team};
use rotation_engine::engine::{EngineError, RandomSource, RotationEngine};

#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}

    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

fn roster(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("P{i}")).collect()
}

fn team(a: &str, b: &str) -> Team {
    Team::new(a.to_string(), b.to_string())
}

fn live_players(engine: &RotationEngine) -> HashSet<String> {
    let mut seen = HashSet::new();
    for court in &engine.courts {
        if let Some(m) = &court.current_match {
            for p in m.left.members.iter().chain(m.right.members.iter()) {
                assert!(seen.insert(p.clone()), "игрок {p} на двух кортах сразу");
            }
        }
    }
    seen
}

#[test]
fn eight_players_fill_two_courts_without_overlap() {
    let mut rng = DummyRng;
    let mut engine = RotationEngine::new(EngineConfig::with_courts(2));
    engine.initialize(roster(8)).unwrap();
    engine.start_round(&mut rng);

    assert_eq!(
        engine.courts[0].current_match.clone().unwrap().left,
        team("P1", "P2")
    );
    assert_eq!(
        engine.courts[1].current_match.clone().unwrap().left,
        team("P5", "P6")
    );
    assert!(engine.courts.iter().all(|c| c.queue.is_empty()));
    assert_eq!(live_players(&engine).len(), 8);
}

#[test]
fn leftover_teams_queue_round_robin() {
    let mut rng = DummyRng;
    let mut engine = RotationEngine::new(EngineConfig::with_courts(2));
    // 12 игроков: 4 команды сидят, 2 команды в очередях (по одной на корт).
    engine.initialize(roster(12)).unwrap();
    engine.start_round(&mut rng);

    assert_eq!(engine.courts[0].queue.len(), 1);
    assert_eq!(engine.courts[1].queue.len(), 1);
    assert_eq!(engine.courts[0].queue[0], team("P10", "P9"));
    assert_eq!(engine.courts[1].queue[0], team("P11", "P12"));
}

#[test]
fn result_on_one_court_leaves_other_untouched() {
    let mut rng = DummyRng;
    let mut engine = RotationEngine::new(EngineConfig::with_courts(2));
    engine.initialize(roster(8)).unwrap();
    engine.start_round(&mut rng);

    let court0_before = engine.courts[0].clone();
    engine.report_result(1, Side::Right, &mut rng).unwrap();

    assert_eq!(engine.courts[0], court0_before);
    // Статистика изменилась только у игроков корта 1.
    for i in 1..=4 {
        assert_eq!(engine.stats[&format!("P{i}")].played, 0);
    }
    for i in 5..=8 {
        assert_eq!(engine.stats[&format!("P{i}")].played, 1);
    }
    assert_eq!(engine.history.records[0].court, 1);
}

#[test]
fn court_refill_uses_only_its_own_pool() {
    let mut rng = DummyRng;
    let mut engine = RotationEngine::new(EngineConfig::with_courts(2));
    engine.initialize(roster(8)).unwrap();
    engine.start_round(&mut rng);

    // Корт 1 исчерпывает очередь (она и так пуста) — локальный раунд.
    engine.report_result(1, Side::Left, &mut rng).unwrap();

    let m = engine.courts[1].current_match.clone().unwrap();
    for p in m.left.members.iter().chain(m.right.members.iter()) {
        let idx: usize = p[1..].parse().unwrap();
        assert!(idx >= 5, "в локальный раунд корта 1 попал чужой игрок {p}");
    }
    assert_eq!(live_players(&engine).len(), 8);
}

#[test]
fn insufficient_players_degrade_to_fewer_courts() {
    let mut rng = DummyRng;
    let mut engine = RotationEngine::new(EngineConfig::with_courts(3));
    engine.initialize(roster(6)).unwrap();
    engine.start_round(&mut rng);

    // Шесть игроков заполняют один корт, остальные корты пустые.
    assert!(engine.courts[0].current_match.is_some());
    assert!(engine.courts[1].current_match.is_none());
    assert!(engine.courts[2].current_match.is_none());
    assert_eq!(engine.courts[0].queue.len(), 1);
}

#[test]
fn set_court_count_repartitions_live_session() {
    let mut rng = DummyRng;
    let mut engine = RotationEngine::new(EngineConfig::single_court());
    engine.initialize(roster(8)).unwrap();
    engine.start_round(&mut rng);
    assert_eq!(engine.courts.len(), 1);
    assert_eq!(engine.courts[0].queue.len(), 2);

    engine.set_court_count(2, &mut rng).unwrap();
    assert_eq!(engine.courts.len(), 2);
    assert!(engine.courts[0].current_match.is_some());
    assert!(engine.courts[1].current_match.is_some());
    assert!(engine.courts.iter().all(|c| c.queue.is_empty()));
}

#[test]
fn set_court_count_rejects_zero() {
    let mut rng = DummyRng;
    let mut engine = RotationEngine::new(EngineConfig::single_court());
    let err = engine.set_court_count(0, &mut rng);
    assert_eq!(err, Err(EngineError::InvalidCourtCount(0)));
}

#[test]
fn set_court_count_before_roster_just_resizes() {
    let mut rng = DummyRng;
    let mut engine = RotationEngine::new(EngineConfig::single_court());
    engine.set_court_count(4, &mut rng).unwrap();

    assert_eq!(engine.courts.len(), 4);
    assert!(!engine.has_live_match());
}

#[test]
fn return_resting_to_play_exempts_returnees() {
    let mut rng = DummyRng;
    let mut engine = RotationEngine::new(EngineConfig::single_court());
    engine.initialize(roster(5)).unwrap();
    engine.start_round(&mut rng);
    assert_eq!(engine.resting, vec!["P1".to_string()]);

    engine.return_resting_to_play(&mut rng);

    // Кто-то отдыхает (чётность того требует), но не вернувшийся P1.
    assert_eq!(engine.resting.len(), 1);
    assert_ne!(engine.resting[0], "P1");
    let m = engine.courts[0].current_match.clone().unwrap();
    assert!(m.left.contains("P1") || m.right.contains("P1"));

    // Без отдыхающих операция — no-op.
    let mut even = RotationEngine::new(EngineConfig::single_court());
    even.initialize(roster(4)).unwrap();
    even.start_round(&mut rng);
    let before = even.courts[0].clone();
    even.return_resting_to_play(&mut rng);
    assert_eq!(even.courts[0], before);
}
