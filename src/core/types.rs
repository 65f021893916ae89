use serde::Serialize;

/// Bytes per page (and per physical frame)
pub const PAGE_SIZE: usize = 256;

/// Number of virtual pages in the 64 KiB address space
pub const VIRTUAL_PAGES: usize = 256;

/// Virtual page number, always in `0..VIRTUAL_PAGES`
pub type PageNumber = u8;

/// Physical frame index, valid in `0..frames`
pub type FrameIndex = usize;

/// A 16-bit virtual address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Address(u16);

impl Address {
    /// Create a new address
    pub fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw 16-bit value
    pub fn raw(&self) -> u16 {
        self.0
    }

    /// Upper 8 bits: the page this address falls in
    pub fn page(&self) -> PageNumber {
        (self.0 >> 8) as PageNumber
    }

    /// Lower 8 bits: the byte offset inside the page
    pub fn offset(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl From<u16> for Address {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_decomposition() {
        let addr = Address::new(0x12AB);
        assert_eq!(addr.page(), 0x12);
        assert_eq!(addr.offset(), 0xAB);
    }

    #[test]
    fn test_address_bounds() {
        assert_eq!(Address::new(0x0000).page(), 0);
        assert_eq!(Address::new(0xFFFF).page(), 255);
        assert_eq!(Address::new(0x00FF).page(), 0);
        assert_eq!(Address::new(0x0100).page(), 1);
    }

    #[test]
    fn test_address_display() {
        assert_eq!(Address::new(0x1FF).to_string(), "0x01FF");
        assert_eq!(Address::new(0xBEEF).to_string(), "0xBEEF");
    }
}
