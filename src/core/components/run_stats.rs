use serde::Serialize;

/// Counters accumulated over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Number of trace positions processed
    pub total_accesses: u64,
    /// Accesses whose page was already resident
    pub hits: u64,
    /// Accesses whose page had to be loaded
    pub faults: u64,
    /// Faults that evicted a resident page instead of using a free frame
    pub replacements: u64,
}

impl RunStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_access(&mut self) {
        self.total_accesses += 1;
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_fault(&mut self) {
        self.faults += 1;
    }

    pub fn record_replacement(&mut self) {
        self.replacements += 1;
    }

    pub fn hit_ratio(&self) -> f64 {
        ratio(self.hits, self.total_accesses)
    }

    pub fn fault_ratio(&self) -> f64 {
        ratio(self.faults, self.total_accesses)
    }

    /// `hits + faults == total_accesses` and `replacements <= faults`
    pub fn is_balanced(&self) -> bool {
        self.hits + self.faults == self.total_accesses && self.replacements <= self.faults
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
