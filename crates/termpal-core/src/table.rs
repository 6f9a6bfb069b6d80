use std::ops::Index;
use std::sync::OnceLock;

use crate::colors::{decode, Rgb};

/// Number of entries in the xterm palette.
pub const PALETTE_SIZE: usize = 256;

/// All 256 palette colors, precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteTable {
    entries: [Rgb; PALETTE_SIZE],
}

static GLOBAL_TABLE: OnceLock<PaletteTable> = OnceLock::new();

impl PaletteTable {
    pub fn build() -> Self {
        let mut entries = [Rgb::default(); PALETTE_SIZE];
        for (c, entry) in (0..=u8::MAX).zip(entries.iter_mut()) {
            *entry = decode(c);
        }
        Self { entries }
    }

    /// The process-wide table, built on first access.
    pub fn global() -> &'static PaletteTable {
        GLOBAL_TABLE.get_or_init(|| {
            tracing::debug!("Building xterm256 palette table");
            Self::build()
        })
    }

    pub fn get(&self, index: u8) -> Rgb {
        self.entries[index as usize]
    }

    pub fn entries(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.entries
    }

    /// Iterate `(index, color)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Rgb)> + '_ {
        (0..=u8::MAX).zip(self.entries.iter().copied())
    }
}

impl Index<u8> for PaletteTable {
    type Output = Rgb;

    fn index(&self, index: u8) -> &Self::Output {
        &self.entries[index as usize]
    }
}

/// Force construction of the global table. Safe to call any number of times.
pub fn initialize() -> &'static PaletteTable {
    PaletteTable::global()
}
