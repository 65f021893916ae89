use super::memory::errors::TraceError;
use super::types::{Address, PageNumber};
use log::{info, trace};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Fully materialized, immutable sequence of addresses to replay.
///
/// Never empty: every constructor rejects inputs that yield no addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    addresses: Vec<Address>,
}

impl Trace {
    /// Build a trace from already-decoded addresses
    pub fn from_addresses<I>(addresses: I) -> Result<Self, TraceError>
    where
        I: IntoIterator<Item = Address>,
    {
        let addresses: Vec<Address> = addresses.into_iter().collect();
        if addresses.is_empty() {
            return Err(TraceError::Empty { path: None });
        }
        Ok(Self { addresses })
    }

    /// Parse trace text held in memory
    pub fn parse(text: &str) -> Result<Self, TraceError> {
        Self::from_addresses(text.lines().filter_map(parse_line))
    }

    /// Parse trace text from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, TraceError> {
        Self::read_lines(reader, None)
    }

    /// Read and parse a trace file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TraceError::Io {
            path: Some(path.to_path_buf()),
            source,
        })?;
        let trace = Self::read_lines(BufReader::new(file), Some(path))?;
        info!(
            "Loaded {} addresses from {}",
            trace.len(),
            path.display()
        );
        Ok(trace)
    }

    /// Lines are split on raw bytes; bytes that are not UTF-8 only make
    /// their own line unparseable.
    fn read_lines<R: BufRead>(reader: R, path: Option<&Path>) -> Result<Self, TraceError> {
        let mut addresses = Vec::new();
        for line in reader.split(b'\n') {
            let line = line.map_err(|source| TraceError::Io {
                path: path.map(Path::to_path_buf),
                source,
            })?;
            if let Some(address) = parse_line(&String::from_utf8_lossy(&line)) {
                addresses.push(address);
            }
        }
        Self::from_addresses(addresses).map_err(|_| TraceError::Empty {
            path: path.map(PathBuf::from),
        })
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Always false for a constructed trace
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<Address> {
        self.addresses.get(position).copied()
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Page number for every position, in trace order
    pub fn pages(&self) -> impl Iterator<Item = PageNumber> + '_ {
        self.addresses.iter().map(Address::page)
    }
}

/// Decode one trace line.
///
/// Only the first whitespace-separated token is considered. After an optional
/// `0x`/`0X` prefix it must consist entirely of hex digits; anything else
/// (comments, blanks, partially valid tokens like `12zz`) yields `None`.
pub fn parse_line(line: &str) -> Option<Address> {
    let token = line.split_whitespace().next()?;
    if token.starts_with('#') {
        return None;
    }
    let address = parse_hex_token(token);
    if address.is_none() {
        trace!("Skipping unparseable trace line: {:?}", line);
    }
    address
}

fn parse_hex_token(token: &str) -> Option<Address> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() {
        return None;
    }

    // Fold modulo 2^16 so oversized values wrap instead of overflowing
    let mut value: u16 = 0;
    for ch in digits.chars() {
        let digit = ch.to_digit(16)? as u16;
        value = (value << 4) | digit;
    }
    Some(Address::new(value))
}
