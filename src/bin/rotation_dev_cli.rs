// src/bin/rotation_dev_cli.rs

use rotation_engine::api::{apply_command, answer_query, Command, InitializeCommand, Query, QueryResponse, ReportResultCommand};
use rotation_engine::domain::{EngineConfig, Side};
use rotation_engine::engine::RotationEngine;
use rotation_engine::infra::SystemRng;

fn main() {
    println!("rotation_dev_cli: стартуем dev-CLI на один корт…");

    let mut rng = SystemRng::default();
    let mut engine = RotationEngine::new(EngineConfig::single_court());

    let players: Vec<String> = ["Win", "Tod", "Tin", "Tor", "Mook", "Fern"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    println!();
    println!("================ SINGLE COURT SESSION =================");
    println!("[CLI] Ростер: {:?}", players);

    apply_command(
        &mut engine,
        &mut rng,
        Command::Initialize(InitializeCommand { players }),
    )
    .expect("ростер валидный");

    apply_command(&mut engine, &mut rng, Command::StartRound).expect("start round");
    print_court(&engine);

    // Скрипт: левые побеждают дважды (лимит серии), потом правая сторона.
    let script = [Side::Left, Side::Left, Side::Right, Side::Left, Side::Right];
    for (i, side) in script.iter().enumerate() {
        println!();
        println!("------ Результат #{}: побеждает {:?} ------", i + 1, side);
        let response = apply_command(
            &mut engine,
            &mut rng,
            Command::ReportResult(ReportResultCommand {
                court: 0,
                winning_side: *side,
            }),
        );
        match response {
            Ok(_) => print_court(&engine),
            Err(e) => println!("[CLI] Ошибка: {:?}", e),
        }
    }

    println!();
    println!("================ ИТОГИ =================");
    if let QueryResponse::Stats(rows) = answer_query(&engine, Query::GetStats) {
        for row in rows {
            println!(
                "  {:8} | сыграно {:2} | побед {:2} | {:5.1}%",
                row.name, row.played, row.win, row.win_rate_percent
            );
        }
    }
    if let QueryResponse::History(records) = answer_query(&engine, Query::GetHistory) {
        println!();
        println!("Журнал:");
        for r in records {
            println!("  {}. {} ✅ против {}", r.index + 1, r.winner.label, r.loser.label);
        }
    }

    println!();
    println!("[CLI] Завершение работы dev-CLI.");
}

fn print_court(engine: &RotationEngine) {
    let court = &engine.courts[0];
    match &court.current_match {
        Some(m) => println!("[CLI] Матч: {}  🆚  {}", m.left, m.right),
        None => println!("[CLI] Матча нет (ждём игроков)"),
    }
    if !court.queue.is_empty() {
        let queue: Vec<String> = court.queue.iter().map(|t| t.to_string()).collect();
        println!("[CLI] Очередь: {}", queue.join(" | "));
    }
    if let Some(team) = &court.streak.team {
        println!("[CLI] Серия: {} ({} побед)", team, court.streak.count);
    }
    if !engine.resting.is_empty() {
        println!("[CLI] Отдыхают: {:?}", engine.resting);
    }
}
