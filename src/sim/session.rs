//! Session orchestration
//!
//! `GameSession` wires the components together. Each tick it advances the
//! falling enemies, resolves collisions against the player's current hands,
//! applies the outcome table, and drives timing-based spawning through the
//! difficulty curve. The step is fully synchronous and driven by the
//! caller-supplied delta time: a fixed dt sequence and a fixed seed replay
//! identically, which is what makes the whole core testable without a clock
//! or a renderer.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{CollisionHit, resolve_collisions};
use super::difficulty::DifficultyCurve;
use super::enemies::{Enemy, EnemyRegistry};
use super::janken::{HandPair, HandType, Outcome, Side};
use super::state::{GameEvent, GameEventKind, GameState, Phase};
use crate::highscores::HighScoreStore;
use crate::tuning::Tuning;

/// Source of the player's current hands, sampled once per tick
///
/// Implemented outside the core by whatever senses the player: a keyboard
/// debug mapping, a gesture-recognition adapter, a scripted bot. `None`
/// means no hand was detected on that side this tick; the resolver then
/// skips that side entirely.
pub trait PlayerHandSource {
    fn left_hand(&self) -> Option<HandType>;
    fn right_hand(&self) -> Option<HandType>;

    /// Both sides as a single per-tick snapshot
    fn sample(&self) -> HandPair {
        HandPair {
            left: self.left_hand(),
            right: self.right_hand(),
        }
    }
}

/// Read-only per-tick view for renderers and UIs
///
/// Positions are logical axis units; the judgements produced in a tick are
/// returned by [`GameSession::tick`] itself.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub phase: Phase,
    pub score: u32,
    pub lives: u8,
    pub defeated_count: u32,
    pub difficulty_level: u32,
    /// Active enemies, plus the preview marker if one is set
    pub enemies: Vec<Enemy>,
}

/// The session simulation loop
pub struct GameSession {
    tuning: Tuning,
    state: GameState,
    registry: EnemyRegistry,
    curve: DifficultyCurve,
    rng: Pcg32,
    seed: u64,
    spawn_accumulator: f32,
    high_scores: Box<dyn HighScoreStore>,
    new_record: bool,
}

impl GameSession {
    /// Build a session from tuning, a run seed and a high-score store
    pub fn new(tuning: Tuning, seed: u64, high_scores: Box<dyn HighScoreStore>) -> Self {
        let state = GameState::new(tuning.initial_lives);
        let registry = EnemyRegistry::new(
            tuning.spawn_position,
            tuning.preview_position,
            tuning.despawn_margin,
        );
        let curve = DifficultyCurve::new(tuning.difficulty_table.clone(), tuning.enemy_base_speed);

        Self {
            tuning,
            state,
            registry,
            curve,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            spawn_accumulator: 0.0,
            high_scores,
            new_record: false,
        }
    }

    /// Start (or restart) a run: fresh scalars, empty field, phase -> playing
    pub fn start(&mut self) {
        self.state.reset();
        self.registry.clear();
        self.spawn_accumulator = 0.0;
        self.new_record = false;
        self.state.set_phase(Phase::Playing);
        log::info!("session started (seed {})", self.seed);
    }

    /// Back to the title phase after a finished run
    pub fn return_to_title(&mut self) {
        self.state.set_phase(Phase::Title);
    }

    /// Advance the simulation by one step
    ///
    /// Outside the playing phase this is a no-op. Otherwise: descend and
    /// despawn enemies, judge everything inside the band against the given
    /// hands, apply the outcome table, drop the judged enemies by id, then
    /// accumulate toward the next spawn. Returns the judgements made this
    /// tick.
    pub fn tick(&mut self, dt: f32, hands: HandPair) -> Vec<CollisionHit> {
        if self.state.phase() != Phase::Playing {
            return Vec::new();
        }

        self.registry.advance(dt);

        let hits = resolve_collisions(&hands, self.registry.all(), self.tuning.collision_threshold);
        for hit in &hits {
            self.apply_outcome(hit);
        }
        for hit in &hits {
            self.registry.remove(hit.enemy_id);
        }

        if self.state.lives() == 0 {
            self.finish_run();
            return hits;
        }

        self.spawn_accumulator += dt;
        let config = self.curve.config_for(self.state.defeated_count());
        if self.spawn_accumulator >= config.spawn_interval {
            let next = self.curve.generate_next_hands(&config, &mut self.rng);
            let speed = self.curve.descent_speed(&config);

            // Any telegraphed preview is superseded by the real spawn.
            self.registry.clear_preview();
            if let Some(hand) = next.left {
                let _ = self.registry.spawn(hand, Side::Left, speed);
            }
            if let Some(hand) = next.right {
                let _ = self.registry.spawn(hand, Side::Right, speed);
            }
            self.spawn_accumulator = 0.0;
        }

        hits
    }

    fn apply_outcome(&mut self, hit: &CollisionHit) {
        match hit.outcome {
            Outcome::Win => {
                self.state.add_score(self.tuning.score_per_win);
                let level_before = self.state.difficulty_level();
                self.state.increment_defeated_count();
                let level_after = self.state.difficulty_level();
                if level_after > level_before {
                    log::info!("difficulty level up: {level_after}");
                }
            }
            Outcome::Lose => self.state.lose_life(self.tuning.life_loss_on_lose),
            Outcome::Draw => self.state.lose_life(self.tuning.life_loss_on_draw),
        }
    }

    /// Lives hit zero: close out the run and persist the score
    fn finish_run(&mut self) {
        let score = self.state.score();
        self.state.set_phase(Phase::GameOver);
        self.new_record = self.high_scores.save_high_score(score);
        if self.new_record {
            log::info!("new high score: {score}");
        }
    }

    /// Telegraph an upcoming spawn with a non-colliding marker
    pub fn set_preview(&mut self, hand: HandType, side: Side) {
        self.registry.set_preview(hand, side);
    }

    pub fn clear_preview(&mut self) {
        self.registry.clear_preview();
    }

    /// Subscribe to a game-state event type
    pub fn on(&mut self, kind: GameEventKind, listener: impl FnMut(&GameEvent) + 'static) {
        self.state.on(kind, listener);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn registry(&self) -> &EnemyRegistry {
        &self.registry
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether the last finished run set a new high score
    pub fn new_record(&self) -> bool {
        self.new_record
    }

    pub fn high_score(&self) -> u32 {
        self.high_scores.get_high_score()
    }

    /// Read-only view of the current frame for display layers
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut enemies = self.registry.all().to_vec();
        if let Some(preview) = self.registry.preview() {
            enemies.push(*preview);
        }

        FrameSnapshot {
            phase: self.state.phase(),
            score: self.state.score(),
            lives: self.state.lives(),
            defeated_count: self.state.defeated_count(),
            difficulty_level: self.state.difficulty_level(),
            enemies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryHighScores;

    fn session() -> GameSession {
        GameSession::new(Tuning::default(), 12345, Box::new(MemoryHighScores::new()))
    }

    /// Tuning that never auto-spawns, for tests that stage enemies by hand
    fn quiet_session() -> GameSession {
        let mut tuning = Tuning::default();
        for entry in &mut tuning.difficulty_table {
            entry.spawn_interval = 1e6;
        }
        GameSession::new(tuning, 12345, Box::new(MemoryHighScores::new()))
    }

    fn left(hand: HandType) -> HandPair {
        HandPair {
            left: Some(hand),
            right: None,
        }
    }

    /// Seconds for an enemy at base speed to fall from spawn into the band
    fn fall_time() -> f32 {
        use crate::consts::{COLLISION_THRESHOLD, ENEMY_BASE_SPEED, SPAWN_POSITION};
        (SPAWN_POSITION - COLLISION_THRESHOLD + 1.0) / ENEMY_BASE_SPEED
    }

    #[test]
    fn test_tick_outside_playing_is_inert() {
        let mut session = session();
        assert_eq!(session.state().phase(), Phase::Title);

        let hits = session.tick(100.0, HandPair::NONE);
        assert!(hits.is_empty());
        assert!(session.registry().is_empty());
        assert_eq!(session.state().score(), 0);
    }

    #[test]
    fn test_spawn_triggers_when_accumulator_reaches_interval() {
        let mut session = session();
        session.start();

        // Level 1 interval is 3.0s: nothing after two one-second ticks, a
        // spawn exactly when the accumulator reaches the interval.
        session.tick(1.0, HandPair::NONE);
        assert!(session.registry().is_empty());
        session.tick(1.0, HandPair::NONE);
        assert!(session.registry().is_empty());
        session.tick(1.0, HandPair::NONE);
        assert_eq!(session.registry().len(), 1);

        // Level 1 spawns on exactly one side.
        let enemy = &session.registry().all()[0];
        assert!(!enemy.is_preview);
        assert_eq!(enemy.speed, 100.0);
    }

    #[test]
    fn test_win_applies_score_defeat_and_removal() {
        let mut session = quiet_session();
        session.start();
        session.registry.spawn(HandType::Scissors, Side::Left, 100.0);

        let hits = session.tick(fall_time(), left(HandType::Rock));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].outcome, Outcome::Win);
        assert_eq!(session.state().score(), 10);
        assert_eq!(session.state().defeated_count(), 1);
        assert_eq!(session.state().lives(), 3);
        assert!(session.registry().is_empty(), "judged enemy is removed");
    }

    #[test]
    fn test_draw_costs_one_life() {
        let mut session = quiet_session();
        session.start();
        session.registry.spawn(HandType::Rock, Side::Left, 100.0);

        let hits = session.tick(fall_time(), left(HandType::Rock));
        assert_eq!(hits[0].outcome, Outcome::Draw);
        assert_eq!(session.state().lives(), 2);
        assert_eq!(session.state().score(), 0);
        assert_eq!(session.state().defeated_count(), 0);
    }

    #[test]
    fn test_level_up_shapes_the_next_spawn() {
        let mut session = session();
        session.start();
        for _ in 0..4 {
            session.state.increment_defeated_count();
        }
        session.registry.spawn(HandType::Scissors, Side::Left, 100.0);

        // The win takes defeated from 4 to 5 (level 2), and the spawn fired
        // in the same tick must already use the level-2 config: both sides,
        // same hand, 1.2x base speed.
        let hits = session.tick(fall_time(), left(HandType::Rock));
        assert_eq!(hits[0].outcome, Outcome::Win);
        assert_eq!(session.state().difficulty_level(), 2);

        let enemies = session.registry().all();
        assert_eq!(enemies.len(), 2);
        assert_eq!(enemies[0].hand, enemies[1].hand);
        assert!(enemies.iter().any(|e| e.side == Side::Left));
        assert!(enemies.iter().any(|e| e.side == Side::Right));
        for enemy in enemies {
            assert!((enemy.speed - 120.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_game_over_persists_high_score_once() {
        let mut session = quiet_session();
        session.start();

        // One win for a non-zero score.
        session.registry.spawn(HandType::Scissors, Side::Left, 100.0);
        session.tick(fall_time(), left(HandType::Rock));
        assert_eq!(session.state().score(), 10);

        // Then a loss worth all three lives.
        session.registry.spawn(HandType::Paper, Side::Left, 100.0);
        let hits = session.tick(fall_time(), left(HandType::Rock));
        assert_eq!(hits[0].outcome, Outcome::Lose);
        assert_eq!(session.state().lives(), 0);
        assert_eq!(session.state().phase(), Phase::GameOver);
        assert!(session.new_record());
        assert_eq!(session.high_score(), 10);

        // The finished session is inert.
        let hits = session.tick(10.0, left(HandType::Rock));
        assert!(hits.is_empty());
        assert_eq!(session.high_score(), 10);
    }

    #[test]
    fn test_restart_resets_the_field() {
        let mut session = quiet_session();
        session.start();
        session.registry.spawn(HandType::Paper, Side::Left, 100.0);
        session.tick(fall_time(), left(HandType::Rock));
        session.tick(fall_time(), left(HandType::Rock));
        session.set_preview(HandType::Rock, Side::Right);

        session.start();
        assert_eq!(session.state().phase(), Phase::Playing);
        assert_eq!(session.state().score(), 0);
        assert_eq!(session.state().lives(), 3);
        assert!(session.registry().is_empty());
        assert!(session.registry().preview().is_none());
    }

    #[test]
    fn test_snapshot_includes_preview() {
        let mut session = session();
        session.start();
        session.set_preview(HandType::Paper, Side::Right);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, Phase::Playing);
        assert_eq!(snapshot.lives, 3);
        assert_eq!(snapshot.difficulty_level, 1);
        assert_eq!(snapshot.enemies.len(), 1);
        assert!(snapshot.enemies[0].is_preview);
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let mut a = session();
        let mut b = session();
        a.start();
        b.start();

        let hands = HandPair {
            left: Some(HandType::Rock),
            right: Some(HandType::Paper),
        };
        for step in 0..120 {
            let dt = if step % 3 == 0 { 0.4 } else { 0.15 };
            let hits_a = a.tick(dt, hands);
            let hits_b = b.tick(dt, hands);
            assert_eq!(hits_a, hits_b);
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }
}
