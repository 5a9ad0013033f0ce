use serde::Deserialize;
use serde::Serialize;

/// One of the two participants. The player is the row chooser of every
/// outcome table, the opponent the column chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub const ALL: [Self; 2] = [Self::Player, Self::Opponent];
    pub fn other(&self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
    pub fn index(&self) -> usize {
        match self {
            Self::Player => 0,
            Self::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Opponent => write!(f, "opponent"),
        }
    }
}
