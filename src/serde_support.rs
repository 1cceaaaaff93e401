use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::api::GoGame;
use crate::game::Game;
use crate::player::PlayerId;
use crate::position::Position;
use crate::r#move::Move;

// Games serialize to a compact string:
//
//   "side;players;superko;turn;passes;cells"
//
// where cells is the row-major board, comma-separated, with 0 for an empty
// intersection. The repetition history is positional state and is not
// carried: deserializing restarts ko detection from the loaded board, the
// same trade-off load_game makes.

impl Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let cells: Vec<String> = self
            .grid()
            .iter()
            .flatten()
            .map(|cell| match cell {
                Some(owner) => owner.to_string(),
                None => "0".to_string(),
            })
            .collect();

        let full = format!(
            "{};{};{};{};{};{}",
            self.size(),
            self.num_players(),
            self.superko(),
            self.turn(),
            self.consecutive_passes(),
            cells.join(",")
        );
        serializer.serialize_str(&full)
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let parts: Vec<&str> = s.split(';').collect();
        if parts.len() != 6 {
            return Err(serde::de::Error::custom(format!(
                "expected 6 ';'-separated fields, got {}",
                parts.len()
            )));
        }

        let side: usize = parts[0]
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid side: {}", e)))?;
        let players: u8 = parts[1]
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid player count: {}", e)))?;
        let superko: bool = parts[2]
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid superko flag: {}", e)))?;
        let turn: u8 = parts[3]
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid turn: {}", e)))?;
        let passes: u8 = parts[4]
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid pass count: {}", e)))?;

        if side == 0 || players == 0 {
            return Err(serde::de::Error::custom(
                "side and player count must be at least 1",
            ));
        }

        let turn =
            PlayerId::from_int(turn).ok_or_else(|| serde::de::Error::custom("turn must be >= 1"))?;

        let cells: Vec<&str> = if parts[5].is_empty() {
            Vec::new()
        } else {
            parts[5].split(',').collect()
        };
        if cells.len() != side * side {
            return Err(serde::de::Error::custom(format!(
                "expected {} cells, got {}",
                side * side,
                cells.len()
            )));
        }

        let mut grid = vec![vec![None; side]; side];
        for (index, cell) in cells.iter().enumerate() {
            let owner: u8 = cell
                .trim()
                .parse()
                .map_err(|e| serde::de::Error::custom(format!("invalid cell {}: {}", index, e)))?;
            if owner != 0 {
                let pos = Position::from_index(index, side);
                grid[pos.row][pos.col] = PlayerId::from_int(owner);
            }
        }

        let mut game = Game::new(side, players, superko);
        game.load_game(turn, &grid)
            .map_err(|e| serde::de::Error::custom(e.to_string()))?;
        game.restore_consecutive_passes(passes);

        Ok(game)
    }
}

impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Move::Place(pos) => serializer.serialize_str(&format!("{},{}", pos.row, pos.col)),
            Move::Pass => serializer.serialize_str("pass"),
        }
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        if s == "pass" {
            return Ok(Move::pass());
        }

        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(serde::de::Error::custom(format!(
                "invalid move format: {}",
                s
            )));
        }

        let row: usize = parts[0]
            .trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid row: {}", e)))?;
        let col: usize = parts[1]
            .trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid column: {}", e)))?;

        Ok(Move::place(row, col))
    }
}
