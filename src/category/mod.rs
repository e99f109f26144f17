//! Debug categories and the 64-bit level mask that gates them.
//!
//! The registry is an ordered list of names. The name at index `i` owns bit
//! `i + 1` of the mask; bit 0 is never assigned, so callers that compute a
//! category's bit from its index must apply the same offset.

use crate::Error;
use std::fmt;

/// Reserved pseudo-category that enables every bit of the mask.
pub const ALL: &str = "all";

/// One category per source area of the window manager, in bit order.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "click",
    "cfgparse",
    "client",
    "commands",
    "con",
    "config",
    "debug",
    "ewmh",
    "floating",
    "handlers",
    "ipc",
    "load_layout",
    "log",
    "main",
    "manage",
    "match",
    "move",
    "nc",
    "output",
    "randr",
    "render",
    "resize",
    "sighandler",
    "startup",
    "tree",
    "util",
    "window",
    "workspace",
    "xcb",
    "xcursor",
    "xinerama",
];

const _: () = assert!(DEFAULT_CATEGORIES.len() <= Categories::MAX);

/// Ordered, fixed registry of category names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categories {
    names: Vec<String>,
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Categories {
    /// Bits 1..=63 are assignable; bit 0 stays unused.
    pub const MAX: usize = 63;

    /// Builds a registry from a host-supplied list.
    ///
    /// # Errors
    /// Returns [`Error::TooManyCategories`] if the list has more than [`Self::MAX`] names.
    pub fn new<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() > Self::MAX {
            return Err(Error::TooManyCategories(names.len()));
        }
        Ok(Self { names })
    }

    /// Case-insensitive linear search; the first match wins.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
    }

    /// Precomputed bitmask for a category, suitable for passing to `debug`.
    #[must_use]
    pub fn bit(&self, name: &str) -> Option<u64> {
        self.index_of(name).map(bit_for_index)
    }

    /// Mask bits that enabling `name` sets: every bit for `"all"`, one bit otherwise.
    ///
    /// # Errors
    /// Returns [`Error::UnknownCategory`] if `name` is neither `"all"` nor registered.
    pub fn resolve(&self, name: &str) -> Result<u64, Error> {
        if name.eq_ignore_ascii_case(ALL) {
            return Ok(LevelMask::ALL.bits());
        }
        self.bit(name)
            .ok_or_else(|| Error::UnknownCategory(name.to_string()))
    }

    /// Names in bit order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Bit owned by the category at `index`.
///
/// # Panics
/// Panics in debug builds if `index` is not below [`Categories::MAX`].
#[must_use]
pub const fn bit_for_index(index: usize) -> u64 {
    debug_assert!(index < Categories::MAX);
    1 << (index + 1)
}

/// Set of enabled debug categories. Bits are only ever added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LevelMask(u64);

impl LevelMask {
    /// Nothing enabled; the startup state.
    pub const NONE: Self = Self(0);
    /// Every present and future category enabled.
    pub const ALL: Self = Self(u64::MAX);

    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn enable(&mut self, bits: u64) {
        self.0 |= bits;
    }

    /// A debug message tagged with `bits` passes when any of its bits is enabled.
    #[must_use]
    pub const fn admits(self, bits: u64) -> bool {
        self.0 & bits != 0
    }
}

impl fmt::Display for LevelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
