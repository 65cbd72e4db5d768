use std::{cmp::Reverse, collections::BTreeMap};

use fifteen_core::BoardSize;
use fifteen_game::{PlayerStats, ScoreEntry, ScoreError, ScoreReporter};

/// In-memory score pads and player statistics.
///
/// Level scores are kept fastest first; equal times keep submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoreBoard {
    levels: BTreeMap<BoardSize, Vec<ScoreEntry>>,
    players: BTreeMap<String, PlayerStats>,
}

impl ScoreBoard {
    /// Returns the statistics of `player`, if they ever started a game.
    #[must_use]
    pub fn player(&self, player: &str) -> Option<&PlayerStats> {
        self.players.get(player)
    }

    /// Returns the levels that have at least one score.
    pub fn levels(&self) -> impl Iterator<Item = BoardSize> + '_ {
        self.levels.keys().copied()
    }

    fn stats_mut(&mut self, player: &str) -> Result<&mut PlayerStats, ScoreError> {
        if player.is_empty() {
            return Err(ScoreError::EmptyPlayerName);
        }
        Ok(self
            .players
            .entry(player.to_owned())
            .or_insert_with(|| PlayerStats::new(player)))
    }
}

impl ScoreReporter for ScoreBoard {
    fn record_game_started(&mut self, player: &str, level: BoardSize) -> Result<(), ScoreError> {
        let stats = self.stats_mut(player)?;
        stats.games_played = stats.games_played.saturating_add(1);
        log::debug!("{player} started game #{} ({level})", stats.games_played);
        Ok(())
    }

    fn submit_score(
        &mut self,
        player: &str,
        level: BoardSize,
        elapsed_ms: u64,
    ) -> Result<(), ScoreError> {
        let stats = self.stats_mut(player)?;
        stats.games_won = stats.games_won.saturating_add(1);
        stats.highest_level_beaten = stats.highest_level_beaten.max(Some(level));

        let pad = self.levels.entry(level).or_default();
        let at = pad.partition_point(|entry| entry.elapsed_ms <= elapsed_ms);
        pad.insert(
            at,
            ScoreEntry {
                player: player.to_owned(),
                elapsed_ms,
            },
        );
        log::debug!("{player} scored {elapsed_ms} ms on {level}, rank {}", at + 1);
        Ok(())
    }

    fn level_scores(&self, level: BoardSize, limit: usize) -> Result<Vec<ScoreEntry>, ScoreError> {
        Ok(self
            .levels
            .get(&level)
            .map(|pad| pad.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    fn leaderboard(&self, limit: usize) -> Result<Vec<PlayerStats>, ScoreError> {
        let mut players = self.players.values().collect::<Vec<_>>();
        // `players` is already sorted by name, and the sort is stable.
        players.sort_by_key(|stats| (Reverse(stats.highest_level_beaten), Reverse(stats.games_won)));
        Ok(players.into_iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    fn times(scores: &ScoreBoard, level: BoardSize) -> Vec<(String, u64)> {
        scores
            .level_scores(level, usize::MAX)
            .unwrap()
            .into_iter()
            .map(|entry| (entry.player, entry.elapsed_ms))
            .collect()
    }

    #[test]
    fn test_level_scores_fastest_first() {
        let mut scores = ScoreBoard::default();
        scores.submit_score("alice", size(3), 30_000).unwrap();
        scores.submit_score("bob", size(3), 10_000).unwrap();
        scores.submit_score("carol", size(3), 30_000).unwrap();
        scores.submit_score("dave", size(4), 5_000).unwrap();

        assert_eq!(
            times(&scores, size(3)),
            [
                ("bob".to_owned(), 10_000),
                ("alice".to_owned(), 30_000),
                ("carol".to_owned(), 30_000),
            ]
        );
        assert_eq!(scores.level_scores(size(3), 1).unwrap().len(), 1);
        assert!(scores.level_scores(size(5), 10).unwrap().is_empty());
        assert_eq!(scores.levels().collect::<Vec<_>>(), [size(3), size(4)]);
    }

    #[test]
    fn test_player_stats() {
        let mut scores = ScoreBoard::default();
        scores.record_game_started("alice", size(3)).unwrap();
        scores.record_game_started("alice", size(5)).unwrap();
        scores.submit_score("alice", size(5), 1).unwrap();
        scores.record_game_started("alice", size(3)).unwrap();
        scores.submit_score("alice", size(3), 1).unwrap();

        let stats = scores.player("alice").unwrap();
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.highest_level_beaten, Some(size(5)));
        assert!(scores.player("bob").is_none());
    }

    #[test]
    fn test_leaderboard_order() {
        let mut scores = ScoreBoard::default();
        scores.record_game_started("zed", size(4)).unwrap();
        scores.submit_score("carol", size(3), 1).unwrap();
        scores.submit_score("bob", size(4), 1).unwrap();
        scores.submit_score("alice", size(3), 1).unwrap();
        scores.submit_score("carol", size(3), 1).unwrap();
        scores.submit_score("dave", size(4), 1).unwrap();

        let names = |limit| {
            scores
                .leaderboard(limit)
                .unwrap()
                .into_iter()
                .map(|stats| stats.player)
                .collect::<Vec<_>>()
        };
        assert_eq!(names(10), ["bob", "dave", "carol", "alice", "zed"]);
        assert_eq!(names(2), ["bob", "dave"]);
    }

    #[test]
    fn test_empty_player_name_is_rejected() {
        let mut scores = ScoreBoard::default();
        assert_eq!(
            scores.record_game_started("", size(3)),
            Err(ScoreError::EmptyPlayerName)
        );
        assert_eq!(
            scores.submit_score("", size(3), 1),
            Err(ScoreError::EmptyPlayerName)
        );
        assert_eq!(scores, ScoreBoard::default());
    }
}
