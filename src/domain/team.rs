use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::PlayerName;

/// Команда — неупорядоченная пара из двух разных игроков.
///
/// Хранится в канонической форме (имена отсортированы), поэтому
/// {A,B} и {B,A} — это одна и та же команда при сравнении и в очереди.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Team {
    pub members: [PlayerName; 2],
}

impl Team {
    /// Создать команду; порядок аргументов не важен.
    pub fn new(a: PlayerName, b: PlayerName) -> Self {
        let members = if a <= b { [a, b] } else { [b, a] };
        Self { members }
    }

    pub fn contains(&self, player: &str) -> bool {
        self.members.iter().any(|m| m == player)
    }

    /// Пара из одного и того же игрока — повреждённое состояние.
    pub fn is_valid(&self) -> bool {
        self.members[0] != self.members[1]
    }

    /// Есть ли общие игроки с другой командой.
    pub fn overlaps(&self, other: &Team) -> bool {
        self.members.iter().any(|m| other.contains(m))
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.members[0], self.members[1])
    }
}
