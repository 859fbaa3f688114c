//! Arcadex - arcade activity feed core
//!
//! Data shaping shared by every arcade front-end:
//!
//! - [`feed`]: merges per-player token, collectible, action and achievement
//!   streams into one feed, newest first
//! - [`util_text`]: shortened address labels
//! - [`avatar`]: stable avatar variant per display name
//!
//! All three are pure functions with no global state, so they can be called
//! from any rendering context and memoized freely.
//!
//! ## Usage
//!
//! ```rust
//! use arcadex::{aggregate, format_address, select_variant, AddressOptions, FetchStatus, Size};
//! use arcadex::types::ActivitySource;
//!
//! let feed = aggregate(
//!     &ActivitySource::new(),
//!     &ActivitySource::new(),
//!     &ActivitySource::new(),
//!     &ActivitySource::new(),
//!     FetchStatus::Success,
//! );
//! assert!(feed.is_empty());
//!
//! let label = format_address("0x1234567890abcdef", &AddressOptions::size(Size::Xs));
//! assert_eq!(label, "0x1234...cdef");
//!
//! let _variant = select_variant("shinobi");
//! ```

// Core modules
pub mod avatar;
pub mod feed;
pub mod types;
pub mod util_text;

// Presentation helpers
pub mod discover;
pub mod when;

// Data source boundary + configuration for the reference binary
pub mod config;
pub mod snapshot;

// Re-export commonly used types
pub use avatar::{select_variant, Variant};
pub use config::Config;
pub use feed::{aggregate, ActivityFeed, FeedInputs, FeedMemo};
pub use types::{Activity, ActivityKind, FetchStatus};
pub use util_text::{format_address, AddressOptions, Size};
