//! Per-human motion policy.

use ep_core::{AgentRng, HeadingSampling, Point, Rect};

use crate::Heading;

/// Lower bound (inclusive) of the per-step speed draw.
pub const MIN_SPEED: f64 = 1.0;

/// Upper bound (exclusive) of the per-step speed draw.
pub const MAX_SPEED: f64 = 4.0;

/// Steps below this fatigue level are always accepted.
pub const FATIGUE_GRACE: u32 = 20;

/// Acceptance percentage once the grace period is over, before fatigue is
/// subtracted.  A fatigue of 80 or more makes acceptance impossible.
pub const BASE_ACCEPT_PERCENT: i64 = 80;

/// A random walk confined to one quarantine cell.
///
/// The policy owns the human's [`AgentRng`], so motion draws never disturb
/// the engine's epidemiological stream.
#[derive(Clone, Debug)]
pub struct MotionPolicy {
    bounds:   Rect,
    heading:  Heading,
    fatigue:  u32,
    sampling: HeadingSampling,
    rng:      AgentRng,
}

impl MotionPolicy {
    /// Create a policy for `bounds` with a freshly sampled heading.
    pub fn new(bounds: Rect, sampling: HeadingSampling, mut rng: AgentRng) -> Self {
        let heading = Heading::sample(sampling, &mut rng);
        Self { bounds, heading, fatigue: 0, sampling, rng }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Consecutive accepted steps since the last turn.
    #[inline]
    pub fn fatigue(&self) -> u32 {
        self.fatigue
    }

    /// Propose the position after one tick.
    ///
    /// Returns the moved position when the step stays inside the cell and
    /// survives the fatigue draw.  Otherwise the policy turns (new heading,
    /// fatigue cleared) and `current` is returned unchanged.
    pub fn next_position(&mut self, current: Point) -> Point {
        let speed = self.rng.gen_range(MIN_SPEED..MAX_SPEED);
        let (dx, dy) = self.heading.vector();
        let candidate = current.translate(dx * speed, dy * speed);

        if self.bounds.contains(candidate) {
            self.fatigue = self.fatigue.saturating_add(1);
            if self.fatigue < FATIGUE_GRACE || self.accepts_despite_fatigue() {
                return candidate;
            }
        }

        self.turn();
        current
    }

    fn accepts_despite_fatigue(&mut self) -> bool {
        i64::from(self.rng.whole_percent()) < BASE_ACCEPT_PERCENT - i64::from(self.fatigue)
    }

    fn turn(&mut self) {
        self.fatigue = 0;
        self.heading = Heading::sample(self.sampling, &mut self.rng);
    }
}
