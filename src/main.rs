//! Janken Rush entry point
//!
//! Headless demo: a scripted bot plays one session at a fixed timestep and
//! the run is summarized on exit. The seed comes from the first CLI argument
//! so runs are reproducible.

use janken_rush::consts::PLAYER_BAND_POSITION;
use janken_rush::{
    FileHighScores, FrameSnapshot, GameEventKind, GameSession, HandPair, HandType, Phase,
    PlayerHandSource, Side, Tuning,
};

/// Fixed demo timestep (60 Hz)
const DEMO_DT: f32 = 1.0 / 60.0;
/// Hard cap so a flawless bot still terminates
const MAX_DEMO_SECONDS: f32 = 180.0;
/// The bot only reacts to enemies this close to the band
const REACTION_DISTANCE: f32 = 150.0;

/// Scripted player: answers the nearest enemy on each side
///
/// Mostly plays the counter hand, but every few answers it mirrors the enemy
/// instead, bleeding lives through draws so the demo reaches game over.
#[derive(Default)]
struct ReflexBot {
    hands: HandPair,
    answers: u32,
}

impl ReflexBot {
    /// Decide this frame's hands from the current field
    fn observe(&mut self, snapshot: &FrameSnapshot) {
        self.hands = HandPair {
            left: self.answer_for(snapshot, Side::Left),
            right: self.answer_for(snapshot, Side::Right),
        };
    }

    fn answer_for(&mut self, snapshot: &FrameSnapshot, side: Side) -> Option<HandType> {
        let nearest = snapshot
            .enemies
            .iter()
            .filter(|e| !e.is_preview && e.side == side)
            .min_by(|a, b| a.position.total_cmp(&b.position))?;

        if (nearest.position - PLAYER_BAND_POSITION).abs() > REACTION_DISTANCE {
            return None;
        }

        self.answers += 1;
        if self.answers % 5 == 0 {
            // Fumble: mirror the enemy and draw.
            Some(nearest.hand)
        } else {
            Some(counter_of(nearest.hand))
        }
    }
}

impl PlayerHandSource for ReflexBot {
    fn left_hand(&self) -> Option<HandType> {
        self.hands.left
    }

    fn right_hand(&self) -> Option<HandType> {
        self.hands.right
    }
}

/// The hand that beats the given one
fn counter_of(hand: HandType) -> HandType {
    match hand {
        HandType::Rock => HandType::Paper,
        HandType::Scissors => HandType::Rock,
        HandType::Paper => HandType::Scissors,
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let tuning = Tuning::from_json_file("tuning.json");
    let store = FileHighScores::open("janken_rush_highscore.json");
    let mut session = GameSession::new(tuning, seed, Box::new(store));

    session.on(GameEventKind::ScoreChange, |event| {
        log::debug!("{event:?}");
    });
    session.on(GameEventKind::LivesChange, |event| {
        log::debug!("{event:?}");
    });
    session.on(GameEventKind::GameOver, |event| {
        log::info!("{event:?}");
    });

    let mut bot = ReflexBot::default();
    let mut elapsed = 0.0_f32;

    session.start();
    while session.state().phase() == Phase::Playing && elapsed < MAX_DEMO_SECONDS {
        let snapshot = session.snapshot();
        bot.observe(&snapshot);
        session.tick(DEMO_DT, bot.sample());
        elapsed += DEMO_DT;
    }

    let snapshot = session.snapshot();
    println!("seed:      {seed}");
    println!("played:    {elapsed:.1}s");
    println!("score:     {}", snapshot.score);
    println!("defeated:  {}", snapshot.defeated_count);
    println!("level:     {}", snapshot.difficulty_level);
    println!(
        "high:      {}{}",
        session.high_score(),
        if session.new_record() {
            "  (new record!)"
        } else {
            ""
        }
    );
}
