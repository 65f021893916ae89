use super::config::{Algorithm, SimulationConfig};
use crate::core::components::run_stats::RunStats;
use crate::core::event::AccessEvent;
use crate::core::lookahead::LookaheadIndex;
use crate::core::memory::frame_table::FrameTable;
use crate::core::trace::Trace;
use crate::core::types::{FrameIndex, PageNumber};
use log::{debug, info, trace};

/// Observer trait for simulation events
pub trait SimulationObserver {
    /// Called once per processed trace position
    fn on_access(&mut self, event: &AccessEvent);

    /// Called when the trace is exhausted
    fn on_complete(&mut self, _stats: &RunStats) {}
}

/// Observer that keeps every event in memory
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<AccessEvent>,
}

impl SimulationObserver for EventLog {
    fn on_access(&mut self, event: &AccessEvent) {
        self.events.push(*event);
    }
}

/// Policy-specific bookkeeping
#[derive(Debug, Clone)]
enum PolicyState {
    /// Round-robin pointer advanced on every frame fill
    Fifo { next_victim: FrameIndex },
    /// Timestamps live in the frame table
    Lru,
    Optimal(LookaheadIndex),
}

/// Replays a trace against one replacement policy, one access per step
pub struct ReplacementEngine<'t> {
    algorithm: Algorithm,
    trace: &'t Trace,
    frames: FrameTable,
    policy: PolicyState,
    position: usize,
    clock: u64,
    stats: RunStats,
}

impl<'t> ReplacementEngine<'t> {
    /// Create an engine positioned before the first access of `trace`
    pub fn new(config: &SimulationConfig, trace: &'t Trace) -> Self {
        let policy = match config.algorithm {
            Algorithm::Fifo => PolicyState::Fifo { next_victim: 0 },
            Algorithm::Lru => PolicyState::Lru,
            Algorithm::Optimal => PolicyState::Optimal(LookaheadIndex::build(trace)),
        };
        Self {
            algorithm: config.algorithm,
            trace,
            frames: FrameTable::new(config.frame_count()),
            policy,
            position: 0,
            clock: 0,
            stats: RunStats::new(),
        }
    }

    /// Process the next trace position, returns `None` once the trace is exhausted
    pub fn step(&mut self) -> Option<AccessEvent> {
        let address = self.trace.get(self.position)?;
        let page = address.page();

        self.clock += 1;
        self.stats.record_access();

        let event = match self.frames.resident_frame(page) {
            Some(frame) => {
                self.stats.record_hit();
                if self.algorithm == Algorithm::Lru {
                    self.frames.touch(frame, self.clock);
                }
                AccessEvent::Hit {
                    address,
                    page,
                    frame,
                }
            }
            None => {
                self.stats.record_fault();
                match self.frames.find_free() {
                    Some(frame) => {
                        self.fill(frame, page);
                        AccessEvent::FaultLoaded {
                            address,
                            page,
                            frame,
                        }
                    }
                    None => {
                        let frame = self.select_victim();
                        let victim_page = self.frames.evict(frame);
                        self.fill(frame, page);
                        self.stats.record_replacement();
                        AccessEvent::FaultReplaced {
                            address,
                            page,
                            victim_page,
                            frame,
                        }
                    }
                }
            }
        };

        if let PolicyState::Optimal(lookahead) = &mut self.policy {
            lookahead.advance(page);
        }
        self.position += 1;

        debug!("[{}] #{} {:?}", self.algorithm, self.position, event);
        Some(event)
    }

    /// Run to the end of the trace, reporting every event to `observer`
    pub fn run(&mut self, observer: &mut dyn SimulationObserver) -> RunStats {
        while let Some(event) = self.step() {
            observer.on_access(&event);
        }
        info!(
            "[{}] finished: {} accesses, {} hits, {} faults, {} replacements",
            self.algorithm,
            self.stats.total_accesses,
            self.stats.hits,
            self.stats.faults,
            self.stats.replacements
        );
        observer.on_complete(&self.stats);
        self.stats
    }

    fn fill(&mut self, frame: FrameIndex, page: PageNumber) {
        self.frames.place(frame, page, self.clock);
        if let PolicyState::Fifo { next_victim } = &mut self.policy {
            *next_victim = (*next_victim + 1) % self.frames.frame_count();
        }
    }

    /// Pick the frame to evict. Only called when every frame is occupied.
    fn select_victim(&self) -> FrameIndex {
        let victim = match &self.policy {
            PolicyState::Fifo { next_victim } => *next_victim,
            PolicyState::Lru => self.least_recently_used(),
            PolicyState::Optimal(lookahead) => self.furthest_next_use(lookahead),
        };
        trace!("[{}] victim frame {}", self.algorithm, victim);
        victim
    }

    /// Smallest timestamp wins; `min_by_key` keeps the lowest frame on ties
    fn least_recently_used(&self) -> FrameIndex {
        self.frames
            .occupied()
            .min_by_key(|(_, resident)| resident.last_used)
            .map(|(frame, _)| frame)
            .unwrap_or(0)
    }

    /// First page never referenced again, else the one referenced furthest ahead.
    /// Ties go to the lowest frame.
    fn furthest_next_use(&self, lookahead: &LookaheadIndex) -> FrameIndex {
        let mut victim = 0;
        let mut furthest = None;
        for (frame, resident) in self.frames.occupied() {
            match lookahead.next_use(resident.page) {
                None => return frame,
                Some(next) => {
                    if furthest.map_or(true, |best| next > best) {
                        furthest = Some(next);
                        victim = frame;
                    }
                }
            }
        }
        victim
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Counters so far
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn frame_table(&self) -> &FrameTable {
        &self.frames
    }

    /// Number of trace positions already processed
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current logical time
    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.trace.len()
    }
}

impl Iterator for ReplacementEngine<'_> {
    type Item = AccessEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

/// Replay `trace` under `config` and collect every event plus the final counters
pub fn simulate(config: &SimulationConfig, trace: &Trace) -> (Vec<AccessEvent>, RunStats) {
    let mut engine = ReplacementEngine::new(config, trace);
    let mut log = EventLog::default();
    let stats = engine.run(&mut log);
    (log.events, stats)
}
