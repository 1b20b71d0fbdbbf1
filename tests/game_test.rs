/*!
 * Full Game Integration Tests
 *
 * Three player threads through every round, checked against the resolver
 */

use pretty_assertions::assert_eq;
use rps_rendezvous::{
    resolve, Action, ActionSource, Game, GameOutcome, LineReporter, RecordingReporter, Rounds,
    ScriptedActions, PLAYER_COUNT,
};
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use Action::{Paper, Rock, Scissors};

fn constant_sources(actions: [Action; PLAYER_COUNT]) -> [Box<dyn ActionSource>; PLAYER_COUNT] {
    actions.map(|a| Box::new(ScriptedActions::constant(a)) as Box<dyn ActionSource>)
}

fn play(rounds: u32, sources: [Box<dyn ActionSource>; PLAYER_COUNT]) -> (GameOutcome, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::new());
    let outcome = Game::builder(Rounds::new(rounds).unwrap())
        .sources(sources)
        .reporter(reporter.clone())
        .build()
        .play()
        .unwrap();
    (outcome, reporter)
}

#[test]
fn test_triangle_every_round() {
    let (outcome, _) = play(10, constant_sources([Rock, Scissors, Paper]));
    assert_eq!(outcome.scores, [10, 10, 10]);
}

#[test]
fn test_pair_beats_singleton_every_round() {
    let (outcome, _) = play(7, constant_sources([Rock, Rock, Scissors]));
    assert_eq!(outcome.scores, [7, 7, 0]);
}

#[test]
fn test_sweep_every_round() {
    let (outcome, _) = play(4, constant_sources([Rock, Scissors, Scissors]));
    assert_eq!(outcome.scores, [8, 0, 0]);
}

#[test]
fn test_all_tie_never_scores() {
    let (outcome, reporter) = play(5, constant_sources([Paper, Paper, Paper]));
    assert_eq!(outcome.scores, [0, 0, 0]);
    assert_eq!(reporter.rounds().len(), 5);
}

#[test]
fn test_scripted_game_history() {
    let sources: [Box<dyn ActionSource>; PLAYER_COUNT] = [
        Box::new(ScriptedActions::new([Rock, Paper, Scissors])),
        Box::new(ScriptedActions::new([Rock, Rock, Rock])),
        Box::new(ScriptedActions::new([Scissors, Paper, Paper])),
    ];
    let (outcome, _) = play(3, sources);

    let actions: Vec<_> = outcome.history.iter().map(|r| r.actions).collect();
    assert_eq!(
        actions,
        vec![
            [Rock, Rock, Scissors],
            [Paper, Rock, Paper],
            [Scissors, Rock, Paper],
        ]
    );
    // [1,1,0] + [1,0,1] + [1,1,1]
    assert_eq!(outcome.scores, [3, 2, 2]);
}

#[test]
fn test_random_game_matches_resolver() {
    let reporter = Arc::new(RecordingReporter::new());
    let outcome = Game::builder(Rounds::MAX)
        .seed(Some(2024))
        .reporter(reporter.clone())
        .build()
        .play()
        .unwrap();

    assert_eq!(outcome.history.len(), 100);

    let mut expected = [0u32; PLAYER_COUNT];
    for (i, record) in outcome.history.iter().enumerate() {
        assert_eq!(record.round, i as u32);
        assert_eq!(record.deltas, resolve(&record.actions));
        assert!(matches!(record.deltas.iter().sum::<u32>(), 0 | 2 | 3));
        for (total, delta) in expected.iter_mut().zip(record.deltas) {
            *total += delta;
        }
    }
    assert_eq!(outcome.scores, expected);

    // Running scores are reported once per round, in order
    let reports = reporter.rounds();
    assert_eq!(reports.len(), 100);
    assert!(reports.windows(2).all(|w| w[0].round + 1 == w[1].round));
    assert_eq!(reports.last().unwrap().scores, outcome.scores);
    assert_eq!(reporter.finals(), vec![outcome.scores]);
}

#[test]
fn test_one_election_per_round_across_players() {
    let (outcome, _) = play(50, constant_sources([Rock, Paper, Paper]));

    assert_eq!(outcome.players.len(), PLAYER_COUNT);
    for (id, stats) in outcome.players.iter().enumerate() {
        assert_eq!(stats.player, id);
        assert_eq!(stats.rounds_played, 50);
    }
    let resolved: u32 = outcome.players.iter().map(|s| s.rounds_resolved).sum();
    let released: u32 = outcome.players.iter().map(|s| s.resets_released).sum();
    assert_eq!(resolved, 50);
    assert_eq!(released, 50);
}

#[test]
fn test_table_is_clear_after_game() {
    let (outcome, _) = play(3, constant_sources([Scissors, Paper, Rock]));
    assert_eq!(outcome.final_choices, [None, None, None]);
}

#[test]
fn test_same_seed_same_game() {
    let run = || {
        Game::builder(Rounds::new(30).unwrap())
            .seed(Some(99))
            .reporter(Arc::new(RecordingReporter::new()))
            .build()
            .play()
            .unwrap()
    };
    let (a, b) = (run(), run());
    assert_eq!(a.history, b.history);
    assert_eq!(a.scores, b.scores);
    assert_ne!(a.game_id, b.game_id);
}

#[test]
fn test_many_games_terminate() {
    for seed in 0..20 {
        let outcome = Game::builder(Rounds::MAX)
            .seed(Some(seed))
            .reporter(Arc::new(RecordingReporter::new()))
            .build()
            .play()
            .unwrap();
        assert_eq!(outcome.history.len(), 100);
    }
}

#[test]
fn test_outcome_serializes() {
    let (outcome, _) = play(1, constant_sources([Rock, Scissors, Paper]));
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["rounds"], 1);
    assert_eq!(json["scores"], serde_json::json!([1, 1, 1]));
    assert_eq!(json["history"][0]["actions"], serde_json::json!(["rock", "scissors", "paper"]));
    assert_eq!(json["final_choices"], serde_json::json!([null, null, null]));
}

/// Accepts a few writes, then fails like a closed pipe
struct ClosingPipe {
    writes_left: Arc<AtomicUsize>,
}

impl Write for ClosingPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let left = self.writes_left.load(Ordering::SeqCst);
        if left == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        }
        self.writes_left.store(left - 1, Ordering::SeqCst);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_failed_score_output_does_not_stall_game() {
    let reporter = Arc::new(LineReporter::new(ClosingPipe {
        writes_left: Arc::new(AtomicUsize::new(2)),
    }));

    let outcome = Game::builder(Rounds::MAX)
        .seed(Some(5))
        .reporter(reporter.clone())
        .build()
        .play()
        .unwrap();

    assert_eq!(outcome.history.len(), 100);
    assert!(reporter.has_failed());
}
