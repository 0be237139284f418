// src/bin/rotation_dev_cli_multicourt.rs

use rotation_engine::api::build_state_view;
use rotation_engine::domain::{EngineConfig, Side};
use rotation_engine::engine::{RotationEngine, RotationOutcome};
use rotation_engine::infra::SystemRng;

fn main() {
    println!("rotation_dev_cli_multicourt: стартуем dev-CLI на два корта…");

    let mut rng = SystemRng::default();
    let mut engine = RotationEngine::new(EngineConfig::with_courts(2));

    // 10 игроков: 2 корта по 4 + одна команда в очереди.
    let players: Vec<String> = (1..=10).map(|i| format!("P{i}")).collect();
    engine.initialize(players).expect("ростер валидный");
    engine.start_round(&mut rng);

    println!();
    println!("================ MULTI-COURT SIMULATION =================");
    dump(&engine);

    // Чередуем корты и стороны; смотрим на исходы ротации.
    let script = [
        (0, Side::Left),
        (1, Side::Right),
        (0, Side::Left),
        (1, Side::Right),
        (0, Side::Right),
        (1, Side::Left),
        (0, Side::Left),
        (1, Side::Left),
    ];
    for (court, side) in script {
        println!();
        println!("------ Корт {court}: побеждает {side:?} ------");
        match engine.report_result(court, side, &mut rng) {
            Ok(RotationOutcome::WinnerStays) => println!("[CLI] Победитель остаётся"),
            Ok(RotationOutcome::WinnerRotatedOut) => {
                println!("[CLI] Лимит серии: победитель уходит")
            }
            Ok(RotationOutcome::NewRoundStarted) => println!("[CLI] Новый раунд на корте"),
            Err(e) => println!("[CLI] Ошибка: {e}"),
        }
        dump(&engine);
    }

    println!();
    println!("================ СОСТОЯНИЕ (JSON) =================");
    let view = build_state_view(&engine);
    println!(
        "{}",
        serde_json::to_string_pretty(&view).expect("DTO сериализуется")
    );

    println!("[CLI] Завершение работы dev-CLI (multicourt).");
}

fn dump(engine: &RotationEngine) {
    for (i, court) in engine.courts.iter().enumerate() {
        match &court.current_match {
            Some(m) => println!(
                "  корт {i}: {} 🆚 {} | очередь {} | серия {}",
                m.left,
                m.right,
                court.queue.len(),
                court.streak.count
            ),
            None => println!("  корт {i}: пусто"),
        }
    }
    if !engine.resting.is_empty() {
        println!("  отдыхают: {:?}", engine.resting);
    }
}
