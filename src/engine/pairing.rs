//! Жеребьёвка: выбор отдыхающих и разбиение активных игроков на команды.

use std::collections::HashMap;

use crate::domain::{CourtMatch, PlayerName, PlayerStats, RestingPolicy, Team};
use crate::engine::RandomSource;

/// Выбрать `needed` отдыхающих из `pool` (с удалением из пула).
///
/// Кандидаты — игроки с экстремальным `played` по политике
/// (максимум для MostPlayedRests, минимум для LeastPlayedRests);
/// равные разыгрываются равновероятно. В первом раунде, когда у всех
/// по нулям, выбор получается равномерным по всему пулу.
///
/// `exempt` — игроки, которых нельзя сажать отдыхать (ручной возврат в игру).
/// Если кроме них кандидатов не осталось, ограничение снимается.
pub fn select_resting<R: RandomSource>(
    rng: &mut R,
    stats: &HashMap<PlayerName, PlayerStats>,
    pool: &mut Vec<PlayerName>,
    needed: usize,
    policy: RestingPolicy,
    exempt: &[PlayerName],
) -> Vec<PlayerName> {
    let mut resting = Vec::with_capacity(needed);

    for _ in 0..needed {
        let mut eligible: Vec<usize> = (0..pool.len())
            .filter(|&i| !exempt.contains(&pool[i]))
            .collect();
        if eligible.is_empty() {
            eligible = (0..pool.len()).collect();
        }
        if eligible.is_empty() {
            break;
        }

        let played_of = |i: usize| stats.get(&pool[i]).map(|s| s.played).unwrap_or(0);
        let extreme = match policy {
            RestingPolicy::MostPlayedRests => eligible.iter().map(|&i| played_of(i)).max(),
            RestingPolicy::LeastPlayedRests => eligible.iter().map(|&i| played_of(i)).min(),
        }
        .unwrap_or(0);

        let candidates: Vec<usize> = eligible
            .into_iter()
            .filter(|&i| played_of(i) == extreme)
            .collect();
        let chosen = candidates[rng.pick_index(candidates.len())];
        resting.push(pool.remove(chosen));
    }

    resting
}

/// Случайно перемешать активных игроков и разбить на команды по двое.
///
/// Нечётный хвост (не должен возникать после выбора отдыхающих,
/// но обрабатываем защитно) просто отбрасывается из раунда.
pub fn pair_teams<R: RandomSource>(rng: &mut R, active: &[PlayerName]) -> Vec<Team> {
    let mut shuffled = active.to_vec();
    rng.shuffle(&mut shuffled);
    if shuffled.len() % 2 == 1 {
        shuffled.pop();
    }

    shuffled
        .chunks_exact(2)
        .map(|pair| Team::new(pair[0].clone(), pair[1].clone()))
        .collect()
}

/// Совпадает ли пара команд с последним матчем корта
/// (с точностью до перестановки сторон).
pub fn repeats_last(first: &Team, second: &Team, last: Option<&CourtMatch>) -> bool {
    match last {
        Some(m) => {
            (first == &m.left && second == &m.right) || (first == &m.right && second == &m.left)
        }
        None => false,
    }
}
