// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// The fields of a row a free-text search looks at. Each entity declares its
/// own; the fields must exist on the entity being displayed.
pub trait SearchFields {
    fn search_fields(&self) -> Vec<&str>;
}

/// Case-insensitive substring match. A blank query passes every row.
pub fn matches_query<T: SearchFields>(row: &T, query: &str) -> bool {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return true;
    }
    let needle = trimmed.to_lowercase();
    row.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keep the rows matching `query`, preserving order. Applied to rows already
/// selected for the current page, never to the whole collection.
pub fn filter_rows<'a, T: SearchFields>(rows: &'a [T], query: &str) -> Vec<&'a T> {
    rows.iter().filter(|row| matches_query(*row, query)).collect()
}
