// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;

use crate::fetch::{ChangeSignal, CollectionSource, FetchController};
use crate::filter::{SearchFields, matches_query};
use crate::page::{PageState, row_ordinal, window};

/// A visible row paired with its global ordinal. Ordinals come from the
/// row's position in the page window, before the text filter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedRow<'a, T> {
    pub ordinal: usize,
    pub row: &'a T,
}

/// Everything one table screen tracks: the fetched collection, the
/// pagination cursor, the search query, and pending collection-changed
/// edges. One instance per screen; nothing is shared.
#[derive(Debug, Clone)]
pub struct TableScreen<T> {
    fetch: FetchController<T>,
    page: PageState,
    query: String,
    changes: ChangeSignal,
}

impl<T> TableScreen<T> {
    pub fn new(items_per_page: usize, sort_key: &str) -> Self {
        let mut changes = ChangeSignal::default();
        // Mount counts as the first collection-changed edge.
        changes.raise();
        Self {
            fetch: FetchController::with_sort_key(sort_key),
            page: PageState::new(items_per_page),
            query: String::new(),
            changes,
        }
    }

    pub fn items(&self) -> &[T] {
        self.fetch.items()
    }

    pub const fn loading(&self) -> bool {
        self.fetch.loading()
    }

    pub fn sort_key(&self) -> &str {
        self.fetch.sort_key()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub const fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn set_page(&mut self, page: usize) {
        self.page.set_page(page);
    }

    /// A new query lands on page one; a repeated identical query changes
    /// nothing.
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_owned();
            self.page.reset();
        }
    }

    /// Changing the sort order is a refetch trigger.
    pub fn set_sort(&mut self, sort_key: &str) {
        if self.fetch.sort_key() != sort_key {
            self.fetch.set_sort_key(sort_key);
            self.changes.raise();
        }
    }

    pub fn note_created(&mut self) {
        self.changes.raise();
    }

    pub fn note_updated(&mut self) {
        self.changes.raise();
    }

    /// A confirmed DELETE: drop the row locally right away, then refetch.
    pub fn note_deleted(&mut self, deleted: impl Fn(&T) -> bool) {
        self.fetch.remove_where(deleted);
        self.changes.raise();
    }

    pub const fn has_pending_changes(&self) -> bool {
        self.changes.has_pending()
    }

    /// Run one fetch per pending edge. Later fetches overwrite earlier ones;
    /// the last failure, if any, is reported after all edges ran.
    pub fn sync<S: CollectionSource<T>>(&mut self, source: &S) -> Result<()> {
        let mut outcome = Ok(());
        for _ in 0..self.changes.drain() {
            if let Err(error) = self.fetch.refresh(source) {
                outcome = Err(error);
            }
        }
        outcome
    }

    pub fn retire(&mut self) {
        self.fetch.retire();
    }

    /// Page the screen actually shows after the stale-page clamp.
    pub fn effective_page(&self) -> usize {
        window(
            self.fetch.items(),
            self.page.items_per_page(),
            self.page.current_page(),
        )
        .effective_page
    }
}

impl<T: SearchFields> TableScreen<T> {
    /// Window the collection, number the rows, then apply the text filter on
    /// top of the page.
    pub fn visible_rows(&self) -> Vec<NumberedRow<'_, T>> {
        let window = window(
            self.fetch.items(),
            self.page.items_per_page(),
            self.page.current_page(),
        );
        window
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| NumberedRow {
                ordinal: row_ordinal(window.effective_page, self.page.items_per_page(), index),
                row,
            })
            .filter(|numbered| matches_query(numbered.row, &self.query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::TableScreen;
    use crate::fetch::{CollectionSource, DEFAULT_SORT_KEY};
    use crate::filter::SearchFields;
    use anyhow::Result;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: String,
        name: String,
    }

    fn row(id: usize) -> Row {
        Row {
            id: format!("id-{id}"),
            name: format!("Row {id}"),
        }
    }

    impl SearchFields for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.name]
        }
    }

    struct CountingSource {
        rows: RefCell<Vec<Row>>,
        fetches: RefCell<usize>,
    }

    impl CountingSource {
        fn new(count: usize) -> Self {
            Self {
                rows: RefCell::new((1..=count).map(row).collect()),
                fetches: RefCell::new(0),
            }
        }

        fn fetch_count(&self) -> usize {
            *self.fetches.borrow()
        }
    }

    impl CollectionSource<Row> for CountingSource {
        fn fetch_all(&self, _sort_key: &str) -> Result<Vec<Row>> {
            *self.fetches.borrow_mut() += 1;
            Ok(self.rows.borrow().clone())
        }
    }

    #[test]
    fn mount_schedules_the_initial_fetch() -> Result<()> {
        let source = CountingSource::new(3);
        let mut screen = TableScreen::new(5, DEFAULT_SORT_KEY);
        assert!(screen.has_pending_changes());

        screen.sync(&source)?;
        assert_eq!(source.fetch_count(), 1);
        assert_eq!(screen.items().len(), 3);

        // No pending edges -> no fetch.
        screen.sync(&source)?;
        assert_eq!(source.fetch_count(), 1);
        Ok(())
    }

    #[test]
    fn each_mutation_edge_schedules_its_own_fetch() -> Result<()> {
        let source = CountingSource::new(2);
        let mut screen = TableScreen::new(5, DEFAULT_SORT_KEY);
        screen.sync(&source)?;

        screen.note_created();
        screen.note_updated();
        screen.sync(&source)?;
        assert_eq!(source.fetch_count(), 3);
        Ok(())
    }

    #[test]
    fn sort_change_triggers_a_refetch_only_when_it_changes() -> Result<()> {
        let source = CountingSource::new(2);
        let mut screen = TableScreen::new(5, DEFAULT_SORT_KEY);
        screen.sync(&source)?;

        screen.set_sort(DEFAULT_SORT_KEY);
        assert!(!screen.has_pending_changes());

        screen.set_sort("-dueDate");
        assert!(screen.has_pending_changes());
        screen.sync(&source)?;
        assert_eq!(screen.sort_key(), "-dueDate");
        assert_eq!(source.fetch_count(), 2);
        Ok(())
    }

    #[test]
    fn delete_removes_locally_before_the_refetch_lands() -> Result<()> {
        let source = CountingSource::new(4);
        let mut screen = TableScreen::new(5, DEFAULT_SORT_KEY);
        screen.sync(&source)?;

        screen.note_deleted(|candidate| candidate.id == "id-2");
        let names: Vec<&str> = screen.items().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Row 1", "Row 3", "Row 4"]);
        assert!(screen.has_pending_changes());
        Ok(())
    }

    #[test]
    fn stale_page_is_clamped_through_the_screen() -> Result<()> {
        let source = CountingSource::new(10);
        let mut screen = TableScreen::new(5, DEFAULT_SORT_KEY);
        screen.sync(&source)?;
        screen.set_page(3);

        assert_eq!(screen.effective_page(), 2);
        let ordinals: Vec<usize> = screen.visible_rows().iter().map(|n| n.ordinal).collect();
        assert_eq!(ordinals, vec![6, 7, 8, 9, 10]);
        Ok(())
    }

    #[test]
    fn filter_applies_after_pagination_and_keeps_window_ordinals() -> Result<()> {
        let source = CountingSource::new(12);
        let mut screen = TableScreen::new(5, DEFAULT_SORT_KEY);
        screen.sync(&source)?;
        screen.set_page(2);
        // Match one row of page two only; "Row 1" itself sits on page one.
        screen.set_query("Row 10");

        // A query change rewinds to page one, so put the cursor back.
        assert_eq!(screen.current_page(), 1);
        screen.set_page(2);

        let visible = screen.visible_rows();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].row.name, "Row 10");
        assert_eq!(visible[0].ordinal, 10);
        Ok(())
    }

    #[test]
    fn new_query_rewinds_to_page_one() -> Result<()> {
        let source = CountingSource::new(12);
        let mut screen = TableScreen::new(5, DEFAULT_SORT_KEY);
        screen.sync(&source)?;
        screen.set_page(3);

        screen.set_query("row");
        assert_eq!(screen.current_page(), 1);

        // Repeating the same query keeps the cursor where it is.
        screen.set_page(2);
        screen.set_query("row");
        assert_eq!(screen.current_page(), 2);
        Ok(())
    }

    #[test]
    fn retired_screen_ignores_a_late_sync() -> Result<()> {
        let source = CountingSource::new(3);
        let mut screen = TableScreen::new(5, DEFAULT_SORT_KEY);
        screen.retire();
        screen.sync(&source)?;
        assert!(screen.items().is_empty());
        Ok(())
    }
}
