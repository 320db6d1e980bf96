//! Turn-by-turn replay of a found path.
//!
//! A [`PlaybackScript`] is built once from a problem and its path. It is a
//! strictly ordered list of events, one `HunterMove` then one `EvaderTick`
//! per turn. A [`Player`] dispatches the events to a [`PlaybackSink`] with a
//! fixed delay between turns and stops at a turn boundary once its
//! [`CancelToken`] fires. Neither touches the search result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pursuit_kernel::geometry::cell::Cell;
use pursuit_kernel::motion::evader::{EvaderId, EvaderSet};
use pursuit_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pursuit_kernel::proof::hash::{canonical_hash, ContentHash};
use pursuit_kernel::proof::hash_domain::HashDomain;
use pursuit_search::{PathResult, Problem};

/// One display instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The hunter lands on `to`; `captured` are the evaders caught there.
    HunterMove {
        turn: u32,
        to: Cell,
        captured: Vec<EvaderId>,
    },
    /// Evaders advance. `positions` lists every evader still on the board,
    /// `captured` is everyone caught so far and `escaped` is everyone gone
    /// for good so far.
    EvaderTick {
        turn: u32,
        positions: Vec<(EvaderId, Cell)>,
        captured: Vec<EvaderId>,
        escaped: Vec<EvaderId>,
    },
}

impl PlaybackEvent {
    #[must_use]
    pub fn turn(&self) -> u32 {
        match self {
            Self::HunterMove { turn, .. } | Self::EvaderTick { turn, .. } => *turn,
        }
    }

    fn to_json_value(&self) -> serde_json::Value {
        let ids = |v: &[EvaderId]| v.iter().map(|id| id.0).collect::<Vec<_>>();
        match self {
            Self::HunterMove { turn, to, captured } => serde_json::json!({
                "kind": "hunter_move",
                "turn": turn,
                "to": [to.x, to.y],
                "captured": ids(captured),
            }),
            Self::EvaderTick {
                turn,
                positions,
                captured,
                escaped,
            } => serde_json::json!({
                "kind": "evader_tick",
                "turn": turn,
                "positions": positions
                    .iter()
                    .map(|(id, c)| serde_json::json!([id.0, c.x, c.y]))
                    .collect::<Vec<_>>(),
                "captured": ids(captured),
                "escaped": ids(escaped),
            }),
        }
    }
}

/// Ordered replay events for one path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackScript {
    /// Evaders already caught on the hunter's start cell.
    pub caught_at_start: Vec<EvaderId>,
    pub events: Vec<PlaybackEvent>,
}

impl PlaybackScript {
    /// Simulate `path` against the motion model. `NotFound` (or a path with
    /// no moves) gives an empty script.
    #[must_use]
    pub fn from_path(problem: &Problem, path: &PathResult) -> Self {
        let cells = path.cells();
        let Some((&start, moves)) = cells.split_first() else {
            return Self::default();
        };
        let board = problem.board();
        let all = problem.all_evaders();

        let mut caught = problem.caught_at(start, all, 0);
        let caught_at_start: Vec<EvaderId> = caught.iter().collect();
        let mut escaped = EvaderSet::empty();
        let mut events = Vec::with_capacity(moves.len() * 2);

        for (turn, &to) in (1u32..).zip(moves) {
            let live = all.difference(caught).difference(escaped);
            let now = problem.caught_at(to, live, turn);
            for id in now.iter() {
                caught.insert(id);
            }
            events.push(PlaybackEvent::HunterMove {
                turn,
                to,
                captured: now.iter().collect(),
            });

            let live = live.difference(now);
            let mut positions = Vec::new();
            for e in problem.evaders() {
                if !live.contains(e.id) {
                    continue;
                }
                if let Some(at) = e.position_at(board, turn) {
                    positions.push((e.id, at));
                }
                if !e.is_catchable_at(board, turn + 1) {
                    escaped.insert(e.id);
                }
            }
            events.push(PlaybackEvent::EvaderTick {
                turn,
                positions,
                captured: caught.iter().collect(),
                escaped: escaped.iter().collect(),
            });
        }
        Self {
            caught_at_start,
            events,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        self.events.last().map_or(0, PlaybackEvent::turn)
    }

    /// Evaders caught by the end of the script.
    #[must_use]
    pub fn total_captured(&self) -> EvaderSet {
        self.caught_at_start
            .iter()
            .copied()
            .chain(self.events.iter().flat_map(|e| match e {
                PlaybackEvent::HunterMove { captured, .. } => captured.clone(),
                PlaybackEvent::EvaderTick { .. } => Vec::new(),
            }))
            .collect()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "caught_at_start": self.caught_at_start.iter().map(|id| id.0).collect::<Vec<_>>(),
            "events": self.events.iter().map(PlaybackEvent::to_json_value).collect::<Vec<_>>(),
        })
    }

    /// # Errors
    ///
    /// Propagates [`CanonError`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::PlaybackScript, &bytes))
    }
}

/// Receiver of playback events (a renderer, a log, a test recorder).
pub trait PlaybackSink {
    fn apply(&mut self, event: &PlaybackEvent);
}

impl<F: FnMut(&PlaybackEvent)> PlaybackSink for F {
    fn apply(&mut self, event: &PlaybackEvent) {
        self(event);
    }
}

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed { turns_played: u32 },
    Cancelled { turns_played: u32 },
}

/// Fixed-cadence dispatcher.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    delay: Duration,
}

impl Player {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Dispatch `script` turn by turn. Both events of a turn are always
    /// delivered together; cancellation is only observed between turns.
    pub fn play(
        &self,
        script: &PlaybackScript,
        sink: &mut dyn PlaybackSink,
        cancel: &CancelToken,
    ) -> PlaybackOutcome {
        let mut turns_played = 0;
        for pair in script.events.chunks(2) {
            if turns_played > 0 && !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
            if cancel.is_cancelled() {
                tracing::info!(turns_played, total = script.turns(), "playback cancelled");
                return PlaybackOutcome::Cancelled { turns_played };
            }
            for event in pair {
                sink.apply(event);
            }
            turns_played += 1;
        }
        tracing::info!(turns_played, "playback completed");
        PlaybackOutcome::Completed { turns_played }
    }
}
