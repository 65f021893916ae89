use crate::core::types::{FrameIndex, PageNumber, VIRTUAL_PAGES};

/// Occupant of a physical frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidentPage {
    pub page: PageNumber,
    /// Logical time of the last reference; only meaningful under LRU
    pub last_used: u64,
}

/// Physical frames and the inverse page-to-frame mapping.
///
/// Both directions are updated together by [`FrameTable::place`] and
/// [`FrameTable::evict`], so a page maps to a frame exactly when that frame
/// holds the page.
#[derive(Debug, Clone)]
pub struct FrameTable {
    frames: Vec<Option<ResidentPage>>,
    page_to_frame: Vec<Option<FrameIndex>>,
}

impl FrameTable {
    /// Create a table with `frame_count` empty frames
    pub fn new(frame_count: usize) -> Self {
        Self {
            frames: vec![None; frame_count],
            page_to_frame: vec![None; VIRTUAL_PAGES],
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame currently holding `page`, if resident
    pub fn resident_frame(&self, page: PageNumber) -> Option<FrameIndex> {
        self.page_to_frame[usize::from(page)]
    }

    /// Occupant of `frame`, or `None` when free
    pub fn occupant(&self, frame: FrameIndex) -> Option<ResidentPage> {
        self.frames[frame]
    }

    pub fn is_free(&self, frame: FrameIndex) -> bool {
        self.frames[frame].is_none()
    }

    /// Lowest-index free frame
    pub fn find_free(&self) -> Option<FrameIndex> {
        self.frames.iter().position(Option::is_none)
    }

    /// Occupied frames in ascending frame order
    pub fn occupied(&self) -> impl Iterator<Item = (FrameIndex, ResidentPage)> + '_ {
        self.frames
            .iter()
            .enumerate()
            .filter_map(|(frame, slot)| slot.map(|resident| (frame, resident)))
    }

    /// Load `page` into the free `frame`.
    ///
    /// # Panics
    /// If the frame is occupied or the page is already resident elsewhere.
    pub fn place(&mut self, frame: FrameIndex, page: PageNumber, stamp: u64) {
        assert!(
            self.frames[frame].is_none(),
            "frame {} already holds page {:?}",
            frame,
            self.frames[frame].map(|r| r.page)
        );
        assert!(
            self.page_to_frame[usize::from(page)].is_none(),
            "page {} already resident in frame {:?}",
            page,
            self.page_to_frame[usize::from(page)]
        );
        self.frames[frame] = Some(ResidentPage {
            page,
            last_used: stamp,
        });
        self.page_to_frame[usize::from(page)] = Some(frame);
    }

    /// Free `frame` and return the page it held.
    ///
    /// # Panics
    /// If the frame is already free.
    pub fn evict(&mut self, frame: FrameIndex) -> PageNumber {
        let resident = match self.frames[frame].take() {
            Some(resident) => resident,
            None => panic!("cannot evict from free frame {}", frame),
        };
        self.page_to_frame[usize::from(resident.page)] = None;
        resident.page
    }

    /// Record a reference to the page in `frame`
    pub fn touch(&mut self, frame: FrameIndex, stamp: u64) {
        if let Some(resident) = self.frames[frame].as_mut() {
            resident.last_used = stamp;
        }
    }

    /// Whether both mappings are exact inverses of each other
    pub fn is_consistent(&self) -> bool {
        let frames_ok = self
            .occupied()
            .all(|(frame, resident)| self.resident_frame(resident.page) == Some(frame));
        let pages_ok = self.page_to_frame.iter().enumerate().all(|(page, slot)| match slot {
            Some(frame) => self
                .frames
                .get(*frame)
                .copied()
                .flatten()
                .is_some_and(|resident| usize::from(resident.page) == page),
            None => true,
        });
        frames_ok && pages_ok
    }
}
