// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;

pub const DEFAULT_SORT_KEY: &str = "-createdAt";

/// Where a collection's rows come from. The API crate implements this; tests
/// substitute scripted sources.
pub trait CollectionSource<T> {
    fn fetch_all(&self, sort_key: &str) -> Result<Vec<T>>;
}

/// Receipt for one in-flight refresh. Completions are applied in arrival
/// order; the ticket identifies the request only, it does not impose one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Collection-changed notifications. Each `raise` is one edge; edges are
/// counted, never coalesced, so two mutations before a sync schedule two
/// refetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSignal {
    raised: u64,
    seen: u64,
}

impl ChangeSignal {
    pub fn raise(&mut self) {
        self.raised += 1;
    }

    pub const fn has_pending(&self) -> bool {
        self.raised > self.seen
    }

    /// Consume and return the number of unseen edges.
    pub fn drain(&mut self) -> u64 {
        let pending = self.raised - self.seen;
        self.seen = self.raised;
        pending
    }
}

/// Client-side mirror of one server collection.
///
/// Refreshes replace `items` wholesale. Overlapping refreshes are legal and
/// resolve last-write-wins: whichever completion arrives later determines the
/// final rows. `loading` tracks outstanding refreshes and clears on failure
/// as well as success. A retired controller (its screen was torn down)
/// discards late completions instead of applying them.
#[derive(Debug, Clone)]
pub struct FetchController<T> {
    items: Vec<T>,
    sort_key: String,
    next_ticket: u64,
    pending: usize,
    retired: bool,
}

impl<T> FetchController<T> {
    pub fn new() -> Self {
        Self::with_sort_key(DEFAULT_SORT_KEY)
    }

    pub fn with_sort_key(sort_key: &str) -> Self {
        Self {
            items: Vec::new(),
            sort_key: sort_key.to_owned(),
            next_ticket: 0,
            pending: 0,
            retired: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    pub fn set_sort_key(&mut self, sort_key: &str) {
        self.sort_key = sort_key.to_owned();
    }

    pub const fn loading(&self) -> bool {
        self.pending > 0
    }

    pub const fn is_retired(&self) -> bool {
        self.retired
    }

    /// Stop applying results; the owning screen is gone.
    pub fn retire(&mut self) {
        self.retired = true;
    }

    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.next_ticket += 1;
        self.pending += 1;
        FetchTicket(self.next_ticket)
    }

    /// Account for a finished refresh. `loading` drops regardless of the
    /// outcome; the fetch error, if any, is handed back to the caller.
    pub fn complete(&mut self, _ticket: FetchTicket, result: Result<Vec<T>>) -> Result<()> {
        self.pending = self.pending.saturating_sub(1);
        if self.retired {
            return Ok(());
        }
        self.items = result?;
        Ok(())
    }

    /// Blocking refresh: begin, fetch, complete.
    pub fn refresh<S: CollectionSource<T>>(&mut self, source: &S) -> Result<()> {
        let ticket = self.begin_refresh();
        let result = source.fetch_all(&self.sort_key);
        self.complete(ticket, result)
    }

    /// Optimistic local removal after a successful DELETE, ahead of the
    /// authoritative refetch.
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) {
        self.items.retain(|row| !predicate(row));
    }
}

impl<T> Default for FetchController<T> {
    fn default() -> Self {
        Self::new()
    }
}
