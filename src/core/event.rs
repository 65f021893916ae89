use super::types::{Address, FrameIndex, PageNumber};
use serde::Serialize;

/// Outcome of a single trace access, emitted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccessEvent {
    /// Page already resident
    Hit {
        address: Address,
        page: PageNumber,
        frame: FrameIndex,
    },
    /// Page loaded into a free frame
    FaultLoaded {
        address: Address,
        page: PageNumber,
        frame: FrameIndex,
    },
    /// Page loaded after evicting `victim_page` from `frame`
    FaultReplaced {
        address: Address,
        page: PageNumber,
        victim_page: PageNumber,
        frame: FrameIndex,
    },
}

impl AccessEvent {
    pub fn address(&self) -> Address {
        match *self {
            AccessEvent::Hit { address, .. }
            | AccessEvent::FaultLoaded { address, .. }
            | AccessEvent::FaultReplaced { address, .. } => address,
        }
    }

    /// Page referenced by the access
    pub fn page(&self) -> PageNumber {
        match *self {
            AccessEvent::Hit { page, .. }
            | AccessEvent::FaultLoaded { page, .. }
            | AccessEvent::FaultReplaced { page, .. } => page,
        }
    }

    /// Frame holding the page after the access
    pub fn frame(&self) -> FrameIndex {
        match *self {
            AccessEvent::Hit { frame, .. }
            | AccessEvent::FaultLoaded { frame, .. }
            | AccessEvent::FaultReplaced { frame, .. } => frame,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, AccessEvent::Hit { .. })
    }

    pub fn is_fault(&self) -> bool {
        !self.is_hit()
    }

    pub fn victim_page(&self) -> Option<PageNumber> {
        match *self {
            AccessEvent::FaultReplaced { victim_page, .. } => Some(victim_page),
            _ => None,
        }
    }
}
