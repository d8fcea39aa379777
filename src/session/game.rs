//! The game session.

use log::{debug, info};

use super::achievement::{Achievement, Achievements};
use super::history::RoundHistory;
use super::matchplay::{MatchRules, MatchStatus};
use super::round::Round;
use super::score::Score;
use super::streak::Streaks;
use crate::core::{Choice, GameRng, GameRngState, Result, SessionConfig};
use crate::rules::{OpponentPolicy, UniformOpponent};

/// Everything a front-end needs to render one played round.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    /// The resolved round.
    pub round: Round,
    /// Score after the round.
    pub score: Score,
    /// Streaks after the round.
    pub streaks: Streaks,
    /// Badges unlocked by this round.
    pub unlocked: Vec<Achievement>,
    /// Match status after the round.
    pub match_status: MatchStatus,
    /// Whether the front-end should run its win celebration.
    pub celebrate: bool,
}

/// A single player's session against the computer.
///
/// Owns the score and the opponent's randomness. Created once per process
/// and driven by one UI thread; `reset` zeroes the score without recreating
/// the session.
///
/// ```
/// use rust_rps::core::{Choice, Outcome, SessionConfig};
/// use rust_rps::rules::ScriptedOpponent;
/// use rust_rps::session::GameSession;
///
/// let mut session = GameSession::with_opponent(
///     SessionConfig::default(),
///     ScriptedOpponent::always(Choice::Scissors),
/// )
/// .unwrap();
///
/// let round = session.play_round(Choice::Rock);
/// assert_eq!(round.outcome(), Outcome::PlayerWins);
/// assert_eq!(session.current_score().as_tuple(), (1, 0, 0));
/// ```
pub struct GameSession {
    rng: GameRng,
    opponent: Box<dyn OpponentPolicy>,
    score: Score,
    last_round: Option<Round>,
    streaks: Streaks,
    achievements: Achievements,
    rules: MatchRules,
    status: MatchStatus,
    history: RoundHistory,
    celebrate: bool,
}

impl GameSession {
    /// Create a session against a uniform random opponent.
    pub fn new(config: SessionConfig) -> Result<Self> {
        Self::with_opponent(config, UniformOpponent)
    }

    /// Create a session against a custom opponent policy.
    pub fn with_opponent(
        config: SessionConfig,
        opponent: impl OpponentPolicy + 'static,
    ) -> Result<Self> {
        let config = config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(
            "new session: seed={} opponent={} best_of={}",
            rng.seed(),
            opponent.name(),
            config.best_of
        );

        let history = match (config.record_history, config.history_limit) {
            (false, _) => RoundHistory::new(0),
            (true, Some(limit)) => RoundHistory::new(limit),
            (true, None) => RoundHistory::unbounded(),
        };

        Ok(Self {
            rng,
            opponent: Box::new(opponent),
            score: Score::new(),
            last_round: None,
            streaks: Streaks::new(),
            achievements: Achievements::new(),
            rules: MatchRules::new(config.best_of)?,
            status: MatchStatus::InProgress,
            history,
            celebrate: config.celebrate,
        })
    }

    // === Core operations ===

    /// Play one round: draw the computer's sign, resolve, update the score.
    pub fn play_round(&mut self, player: Choice) -> Round {
        self.play_turn(player).round
    }

    /// Play one round from an untyped choice ("rock", "P", ...).
    ///
    /// Out-of-domain values fail with `RpsError::InvalidChoice` before
    /// anything is drawn or counted.
    pub fn play_named(&mut self, player: &str) -> Result<Round> {
        let choice: Choice = player.parse()?;
        Ok(self.play_round(choice))
    }

    /// Play one round and report everything that changed.
    ///
    /// Once a match is decided its status is fixed until `reset` or
    /// `new_match`; rounds played after that still count toward the score.
    pub fn play_turn(&mut self, player: Choice) -> TurnReport {
        let computer = self.opponent.choose(&mut self.rng);
        let round = Round::new(player, computer);
        let outcome = round.outcome();

        self.score.record(outcome);
        self.streaks.record(outcome);
        self.last_round = Some(round);
        self.history.push(&round);
        let unlocked = self.achievements.evaluate(outcome, &self.streaks);

        debug!(
            "round {}: {} (score {:?})",
            self.history.rounds_seen(),
            round,
            self.score.as_tuple()
        );
        for achievement in &unlocked {
            info!("achievement unlocked: {}", achievement);
        }

        if !self.status.is_decided() {
            self.status = self.rules.status(&self.score);
            if self.status.is_decided() {
                info!(
                    "match decided: {:?} ({}-{}, best of {})",
                    self.status,
                    self.score.player_wins,
                    self.score.computer_wins,
                    self.rules.best_of()
                );
            }
        }

        TurnReport {
            round,
            score: self.score,
            streaks: self.streaks,
            unlocked,
            match_status: self.status,
            celebrate: self.celebrate && outcome.is_player_win(),
        }
    }

    /// Zero the score and the current streak, reopening the match.
    ///
    /// The last round, best streaks, badges and round log are kept.
    pub fn reset(&mut self) {
        self.score.reset();
        self.streaks.reset_current();
        self.status = MatchStatus::InProgress;
        info!("score reset");
    }

    /// Start a new match with the current rules.
    pub fn new_match(&mut self) {
        self.reset();
        info!(
            "new match: best of {} (first to {})",
            self.rules.best_of(),
            self.rules.target_wins()
        );
    }

    /// Change the match length. Even values round up to the next odd one.
    ///
    /// The new target is checked after the next round, not immediately.
    pub fn set_best_of(&mut self, best_of: u32) -> Result<()> {
        self.rules = MatchRules::new(best_of)?;
        Ok(())
    }

    // === Accessors ===

    /// Snapshot of the current score.
    #[must_use]
    pub fn current_score(&self) -> Score {
        self.score
    }

    /// The most recently played round.
    #[must_use]
    pub fn last_round(&self) -> Option<Round> {
        self.last_round
    }

    #[must_use]
    pub fn streaks(&self) -> Streaks {
        self.streaks
    }

    #[must_use]
    pub fn achievements(&self) -> &Achievements {
        &self.achievements
    }

    #[must_use]
    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    #[must_use]
    pub fn match_rules(&self) -> MatchRules {
        self.rules
    }

    /// Status of the current match, fixed from the round that decided it.
    #[must_use]
    pub fn match_status(&self) -> MatchStatus {
        self.status
    }

    /// Seed of the opponent's RNG, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn celebrates_wins(&self) -> bool {
        self.celebrate
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("opponent", &self.opponent.name())
            .field("seed", &self.rng.seed())
            .field("score", &self.score)
            .field("last_round", &self.last_round)
            .field("streaks", &self.streaks)
            .field("rules", &self.rules)
            .field("status", &self.status)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, RpsError};
    use crate::rules::ScriptedOpponent;

    fn scripted(script: &[Choice]) -> GameSession {
        GameSession::with_opponent(
            SessionConfig::new().with_history_limit(10),
            ScriptedOpponent::new(script.iter().copied()),
        )
        .unwrap()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = GameSession::new(SessionConfig::new().with_seed(1)).unwrap();
        assert_eq!(session.current_score(), Score::default());
        assert!(session.last_round().is_none());
        assert_eq!(session.match_status(), MatchStatus::InProgress);
        assert_eq!(session.seed(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = GameSession::new(SessionConfig::new().with_best_of(0));
        assert!(matches!(result, Err(RpsError::InvalidConfig { .. })));
    }

    #[test]
    fn test_play_turn_report() {
        let mut session = scripted(&[Choice::Scissors]);

        let report = session.play_turn(Choice::Rock);

        assert_eq!(report.round.outcome(), Outcome::PlayerWins);
        assert_eq!(report.score.as_tuple(), (1, 0, 0));
        assert_eq!(report.streaks.current, 1);
        assert_eq!(report.unlocked, vec![Achievement::FirstWin]);
        assert_eq!(report.match_status, MatchStatus::InProgress);
        assert!(report.celebrate);
    }

    #[test]
    fn test_no_celebration_when_disabled_or_not_a_win() {
        let mut session = GameSession::with_opponent(
            SessionConfig::new().with_celebrate(false),
            ScriptedOpponent::always(Choice::Scissors),
        )
        .unwrap();
        assert!(!session.play_turn(Choice::Rock).celebrate);

        let mut session = scripted(&[Choice::Rock]);
        assert!(!session.play_turn(Choice::Scissors).celebrate);
    }

    #[test]
    fn test_reset_keeps_last_round() {
        let mut session = scripted(&[Choice::Paper]);
        let round = session.play_round(Choice::Scissors);

        session.reset();

        assert_eq!(session.current_score().as_tuple(), (0, 0, 0));
        assert_eq!(session.last_round(), Some(round));
        assert_eq!(session.streaks().current, 0);
        assert_eq!(session.streaks().best_player, 1);
        assert!(session.achievements().contains(Achievement::FirstWin));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_match_decided_and_new_match() {
        let mut session = scripted(&[Choice::Scissors]);
        session.set_best_of(3).unwrap();

        assert_eq!(session.play_turn(Choice::Rock).match_status, MatchStatus::InProgress);
        assert_eq!(session.play_turn(Choice::Rock).match_status, MatchStatus::PlayerWon);

        // Still decided until the front-end starts a new match
        assert_eq!(session.match_status(), MatchStatus::PlayerWon);

        session.new_match();
        assert_eq!(session.match_status(), MatchStatus::InProgress);
    }

    #[test]
    fn test_decided_match_stays_decided() {
        let mut session = scripted(&[
            Choice::Rock,
            Choice::Rock,
            Choice::Scissors,
            Choice::Scissors,
        ]);
        session.set_best_of(3).unwrap();

        session.play_turn(Choice::Scissors);
        assert_eq!(
            session.play_turn(Choice::Scissors).match_status,
            MatchStatus::ComputerWon
        );

        // The player catches up without a new match being started
        session.play_turn(Choice::Rock);
        let report = session.play_turn(Choice::Rock);

        assert_eq!(report.score.as_tuple(), (2, 2, 0));
        assert_eq!(report.match_status, MatchStatus::ComputerWon);
        assert_eq!(session.match_status(), MatchStatus::ComputerWon);

        session.reset();
        assert_eq!(session.match_status(), MatchStatus::InProgress);
    }

    #[test]
    fn test_set_best_of_validates() {
        let mut session = scripted(&[Choice::Rock]);
        assert!(session.set_best_of(22).is_err());
        assert_eq!(session.match_rules().best_of(), 5);

        session.set_best_of(8).unwrap();
        assert_eq!(session.match_rules().best_of(), 9);
    }

    #[test]
    fn test_seeded_sessions_replay() {
        let config = SessionConfig::new().with_seed(2024);
        let mut a = GameSession::new(config.clone()).unwrap();
        let mut b = GameSession::new(config).unwrap();

        for choice in Choice::ALL.iter().cycle().take(30) {
            assert_eq!(a.play_round(*choice), b.play_round(*choice));
        }
        assert_eq!(a.rng_state(), b.rng_state());
    }
}
