//! Text shaping helpers for feed rows (address shortening)

use serde::{Deserialize, Serialize};

/// Fixed prefix kept in front of the leading slice ("0x")
const PREFIX_LEN: usize = 2;

/// Preset character budgets for address labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Base,
    Lg,
    Full,
}

impl Size {
    /// Characters kept on each end for this preset
    pub fn budget(&self) -> usize {
        match self {
            Size::Xs => 4,
            Size::Sm => 10,
            Size::Lg => 20,
            // Full has no preset of its own and shares the base budget
            Size::Base | Size::Full => 15,
        }
    }
}

impl std::str::FromStr for Size {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "xs" => Ok(Size::Xs),
            "sm" => Ok(Size::Sm),
            "base" => Ok(Size::Base),
            "lg" => Ok(Size::Lg),
            "full" => Ok(Size::Full),
            _ => Err(anyhow::anyhow!(
                "Invalid size '{s}'. Valid options: xs, sm, base, lg, full"
            )),
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Size::Xs => write!(f, "xs"),
            Size::Sm => write!(f, "sm"),
            Size::Base => write!(f, "base"),
            Size::Lg => write!(f, "lg"),
            Size::Full => write!(f, "full"),
        }
    }
}

/// Address label options. `first`/`last` win over `size` for both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressOptions {
    pub first: Option<usize>,
    pub last: Option<usize>,
    pub size: Option<Size>,
    /// Accepted for compatibility; has no effect on the output
    pub padding: Option<usize>,
}

impl AddressOptions {
    pub fn size(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn counts(first: usize, last: usize) -> Self {
        Self {
            first: Some(first),
            last: Some(last),
            ..Default::default()
        }
    }

    /// Resolve to (leading, trailing) character counts
    pub fn resolve(&self) -> (usize, usize) {
        if self.first.is_some() || self.last.is_some() {
            (self.first.unwrap_or(0), self.last.unwrap_or(0))
        } else {
            let n = self.size.unwrap_or_default().budget();
            (n, n)
        }
    }
}

fn head(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn tail(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// Shorten an address for display: "0x1234...cdef"
///
/// The input is opaque (no hex or checksum validation). Short inputs yield
/// shorter slices rather than an error.
///
/// NOTE: the trailing slice uses the *leading* count; `last` only matters for
/// deciding whether to truncate at all.
pub fn format_address(raw: &str, opts: &AddressOptions) -> String {
    let (leading, trailing) = opts.resolve();
    if leading.saturating_add(trailing) == 0 {
        return raw.to_string();
    }
    format!(
        "{}...{}",
        head(raw, leading.saturating_add(PREFIX_LEN)),
        tail(raw, leading)
    )
}
