//! Palette entries with chart symbols, legend labels and the reserved empty slot

use crate::color::{Color, color_label, squared_distance};
use crate::io::error::{Result, StitchError, corrupt_pattern, invalid_parameter};
use crate::quantize::median_cut::median_cut;
use serde::{Deserialize, Serialize};

/// Chart glyphs assigned to full entries in palette order, recycled past the end
pub const SYMBOLS: [char; 100] = [
    '✕', '●', '■', '▲', '◆', '★', '♥', '▼', '✦', '❋',
    '✿', '⊕', '⊗', '◈', '◉', '▸', '◂', '⬟', '⬢', '⊞',
    '⊠', '⊡', '⊟', '⋈', '⋆', '⌘', '☀', '✴', '❖', '◐',
    '◑', '◒', '◓', '⬤', '⬡', '⬠', '⬣', '⊹', '✶', '✸',
    '✹', '✺', '✻', '✼', '✽', '✾', '❀', '❁', '❂', '❃',
    '❄', '❅', '❆', '❇', '❈', '❉', '❊', '✠', '⁂', '※',
    '⊛', '⊜', '⊝', '▣', '▤', '▥', '▦', '⊢', '⊣', '⊤',
    '⊥', '⊦', '⊧', '⊨', '⊩', '⊪', '⊫', '⊬', '⊭', '⊮',
    '⊯', '⊰', '⊱', '⊲', '⊳', '⊴', '⊵', '⊶', '⊷', '⊸',
    '⊺', '⊻', '⊼', '⊽', '⊾', '⋀', '⋁', '⋂', '⋃', '⋄',
];

/// Symbol drawn for background cells
pub const EMPTY_SYMBOL: char = ' ';
/// Legend label of the background entry
pub const EMPTY_LABEL: &str = "Empty";
/// Fill color of background cells
pub const EMPTY_COLOR: Color = Color {
    r: 255,
    g: 255,
    b: 255,
};

/// Whether a palette slot is a thread color or the background
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A stitched thread color
    Full,
    /// Transparent source area, left unstitched
    Empty,
}

/// One palette slot as shown in the chart legend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Fill color
    pub color: Color,
    /// Glyph drawn on unstitched cells
    pub symbol: char,
    /// Legend text, e.g. `"Dark Blue 3"`
    pub label: String,
    /// Thread or background
    pub kind: EntryKind,
}

impl PaletteEntry {
    /// Thread entry for the representative color at `index`
    pub fn full(color: Color, index: usize) -> Self {
        Self {
            color,
            symbol: symbol_for(index),
            label: color_label(color, index),
            kind: EntryKind::Full,
        }
    }

    /// The reserved background entry
    pub fn empty() -> Self {
        Self {
            color: EMPTY_COLOR,
            symbol: EMPTY_SYMBOL,
            label: EMPTY_LABEL.to_string(),
            kind: EntryKind::Empty,
        }
    }

    /// Check whether this is the background entry
    pub fn is_empty(&self) -> bool {
        self.kind == EntryKind::Empty
    }
}

/// Symbol for the full entry at `index`
pub fn symbol_for(index: usize) -> char {
    SYMBOLS
        .get(index % SYMBOLS.len())
        .copied()
        .unwrap_or(EMPTY_SYMBOL)
}

/// Ordered palette: thread entries followed by exactly one empty entry
///
/// The empty entry always sits at index `len() - 1`, which makes that index the
/// sentinel for background cells in a pattern grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PaletteEntry>", into = "Vec<PaletteEntry>")]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Build thread entries for `colors` in order and append the empty entry
    pub fn from_colors(colors: &[Color]) -> Self {
        let mut entries: Vec<PaletteEntry> = colors
            .iter()
            .enumerate()
            .map(|(index, &color)| PaletteEntry::full(color, index))
            .collect();
        entries.push(PaletteEntry::empty());
        Self { entries }
    }

    /// All entries, empty entry last
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Number of entries including the empty one
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed palette
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the background entry
    pub fn empty_index(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// Thread entries only, in palette order
    pub fn legend(&self) -> &[PaletteEntry] {
        self.entries.get(..self.empty_index()).unwrap_or(&[])
    }

    /// Index of the thread entry closest to `color`
    ///
    /// Uses squared RGB distance; on equal distance the lowest index wins. The empty
    /// entry is never a candidate.
    pub fn nearest(&self, color: Color) -> usize {
        self.legend()
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| squared_distance(color, entry.color))
            .map_or(self.empty_index(), |(index, _)| index)
    }
}

impl TryFrom<Vec<PaletteEntry>> for Palette {
    type Error = StitchError;

    fn try_from(entries: Vec<PaletteEntry>) -> Result<Self> {
        let empty_count = entries.iter().filter(|entry| entry.is_empty()).count();
        if empty_count != 1 {
            return Err(corrupt_pattern(&format!(
                "palette has {empty_count} empty entries, expected exactly one"
            )));
        }
        if !entries.last().is_some_and(PaletteEntry::is_empty) {
            return Err(corrupt_pattern(&"empty entry is not the last palette entry"));
        }
        if entries.len() < 2 {
            return Err(corrupt_pattern(&"palette has no thread entries"));
        }
        Ok(Self { entries })
    }
}

impl From<Palette> for Vec<PaletteEntry> {
    fn from(palette: Palette) -> Self {
        palette.entries
    }
}

/// Quantize `samples` into at most `k` thread entries plus the empty entry
///
/// Total over any sample set: no samples yields a single neutral gray entry.
///
/// # Errors
///
/// Returns [`StitchError::InvalidParameter`] if `k` is zero
pub fn build_palette(samples: &[Color], k: usize) -> Result<Palette> {
    if k == 0 {
        return Err(invalid_parameter(
            "k",
            &k,
            &"palette size must be at least 1",
        ));
    }

    let colors = median_cut(samples, k);
    tracing::debug!(
        samples = samples.len(),
        requested = k,
        produced = colors.len(),
        "median cut finished"
    );
    Ok(Palette::from_colors(&colors))
}
