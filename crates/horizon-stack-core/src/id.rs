//! Process-wide identity handles.
//!
//! Content units and host containers are identified by opaque ids minted from
//! global atomic counters. Ids are never reused within a process.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a content unit hosted by a row.
///
/// Two content values carrying the same `ContentId` are considered the same
/// content unit, so inserting one while the other is already hosted moves it
/// instead of duplicating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(u64);

impl ContentId {
    /// Mint a fresh id.
    pub fn next() -> Self {
        ContentId(NEXT_CONTENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Build an id from a caller-owned key, such as a model primary key.
    ///
    /// Keys share a namespace with ids from [`ContentId::next`]; callers
    /// mixing both should keep their keys outside the minted range.
    pub const fn from_raw(raw: u64) -> Self {
        ContentId(raw)
    }

    /// Get the raw u64 value of this id.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique content ids.
static NEXT_CONTENT_ID: AtomicU64 = AtomicU64::new(1 << 32);

/// Identity of a host container, used as the parent of hosted controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(u64);

impl HostId {
    /// Mint a fresh id.
    pub fn next() -> Self {
        HostId(NEXT_HOST_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw u64 value of this id.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

static NEXT_HOST_ID: AtomicU64 = AtomicU64::new(1);
