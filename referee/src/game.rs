use codex::{Game, GameConfig, Outcome, Phase, Snapshot};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::agent::{DrawChoice, RandomAgent};
use crate::recording::Recorder;

/// Matches running longer than this are considered stuck.
pub const MAX_TURNS: u32 = 200;

pub struct MatchResult {
    pub winners: Vec<String>,
    /// Final scores, in seating order.
    pub scores: Vec<(String, u32)>,
    pub turns: u32,
}

/// Plays one match between random agents.
///
/// Every rejected command is an error here, since the agents only make legal
/// choices.
pub fn play_match(
    rng: &mut StdRng,
    nicknames: &[String],
    config: GameConfig,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MatchResult> {
    let names: Vec<&str> = nicknames.iter().map(String::as_str).collect();
    let mut game = Game::new(&names, config)?;
    let mut agents: Vec<RandomAgent> = names.iter().map(|_| RandomAgent::new(rng.gen())).collect();
    let mut record = |snapshot: Snapshot| {
        if let Some(recorder) = recorder.as_mut() {
            recorder.store_snapshot(snapshot);
        }
    };
    record(game.snapshot());

    for (agent, &nickname) in agents.iter_mut().zip(&names) {
        let starter = game.player(nickname)?.starter;
        let face = agent.choose_starter_face(starter);
        record(game.place_starter_card(nickname, starter, face)?);
    }
    for (agent, &nickname) in agents.iter_mut().zip(&names) {
        let objective = agent.choose_objective(game.player(nickname)?.offered_objectives);
        record(game.choose_objective(nickname, objective)?);
    }

    while game.phase() != Phase::End {
        if game.turn() >= MAX_TURNS {
            anyhow::bail!("Match still running after {} turns", MAX_TURNS);
        }
        let Some(nickname) = game.current_player().map(str::to_string) else {
            anyhow::bail!("No current player in phase {:?}", game.phase());
        };
        let idx = names
            .iter()
            .position(|&name| name == nickname)
            .ok_or_else(|| anyhow::anyhow!("Unknown player '{}'", nickname))?;
        let agent = &mut agents[idx];

        let Some((card, face, slot)) = agent.choose_placement(game.player(&nickname)?) else {
            anyhow::bail!("Player '{}' was given a turn without a move", nickname);
        };
        trace!(player = %nickname, %face, %slot, "Placing");
        record(game.place_card(&nickname, card, face, slot)?);

        if game.phase() == Phase::Drawing {
            let snapshot = match agent.choose_draw(&game) {
                Some(DrawChoice::Deck(deck)) => game.draw_from_deck(&nickname, deck)?,
                Some(DrawChoice::FaceUp { card, deck }) => {
                    game.take_face_up_card(&nickname, card, deck)?
                }
                None => anyhow::bail!("Nothing to draw for '{}'", nickname),
            };
            record(snapshot);
        }
    }

    if let Some(recorder) = recorder {
        let path = recorder.write_game_recording(game.config())?;
        debug!(path = %path.display(), "Recording written");
    }

    let winners = match game.outcome() {
        Some(Outcome::Finished { winners }) => winners.clone(),
        other => anyhow::bail!("Unexpected outcome {:?}", other),
    };
    let scores = game
        .players()
        .iter()
        .map(|player| (player.nickname.clone(), player.score.total()))
        .collect();
    Ok(MatchResult {
        winners,
        scores,
        turns: game.turn(),
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn nicknames(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("player_{}", i)).collect()
    }

    #[test]
    fn matches_finish_with_winners() {
        let mut rng = StdRng::seed_from_u64(11);
        for players in 2..=4 {
            for _ in 0..5 {
                let config = GameConfig {
                    seed: Some(rng.gen()),
                    ..GameConfig::default()
                };
                let result = play_match(&mut rng, &nicknames(players), config, &mut None).unwrap();
                assert!(!result.winners.is_empty());
                assert_eq!(result.scores.len(), players);
                assert!(result.turns > 0 && result.turns < MAX_TURNS);

                let best = result.scores.iter().map(|(_, score)| *score).max();
                for winner in &result.winners {
                    let score = result.scores.iter().find(|(name, _)| name == winner).map(|(_, s)| *s);
                    assert_eq!(score, best);
                }
            }
        }
    }

    #[test]
    fn recorder_writes_one_file_per_match() {
        let directory = std::env::temp_dir().join(format!("referee_recording_{}", std::process::id()));
        std::fs::create_dir_all(&directory).unwrap();
        let mut recorder = Some(Recorder::new(directory.clone()).unwrap());
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2 {
            let config = GameConfig {
                seed: Some(rng.gen()),
                ..GameConfig::default()
            };
            play_match(&mut rng, &nicknames(2), config, &mut recorder).unwrap();
        }

        let second = std::fs::read_to_string(directory.join("game_000002.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&second).unwrap();
        let snapshots = json["snapshots"].as_array().unwrap();
        assert_eq!(snapshots[0]["phase"], "init");
        assert_eq!(snapshots.last().unwrap()["phase"], "end");
        std::fs::remove_dir_all(&directory).unwrap();
    }

    #[test]
    fn recorder_needs_an_existing_directory() {
        assert!(Recorder::new(std::env::temp_dir().join("referee_no_such_dir/nested")).is_err());
    }
}
