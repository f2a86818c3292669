//! Adjacent grouping

use super::date::extract_date;
use crate::error::Result;
use crate::types::{Group, Record};
use tracing::debug;

/// Split `items` into maximal runs of consecutive items with equal keys
///
/// Keeps a current key and buffer and flushes the buffer whenever the key
/// changes or the input ends. Every group is fully materialized before the
/// next one starts. The first key error aborts grouping.
pub fn group_adjacent<T, K, F>(
    items: impl IntoIterator<Item = T>,
    mut key_fn: F,
) -> Result<Vec<(K, Vec<T>)>>
where
    K: PartialEq,
    F: FnMut(&T) -> Result<K>,
{
    let mut groups = Vec::new();
    let mut current: Option<(K, Vec<T>)> = None;

    for item in items {
        let key = key_fn(&item)?;

        match current.as_mut() {
            Some((current_key, buffer)) if *current_key == key => buffer.push(item),
            _ => {
                if let Some(done) = current.take() {
                    groups.push(done);
                }
                current = Some((key, vec![item]));
            }
        }
    }

    if let Some(done) = current {
        groups.push(done);
    }

    Ok(groups)
}

/// Group records into runs sharing the same derived date
pub fn group_by_date(records: impl IntoIterator<Item = Record>) -> Result<Vec<Group>> {
    let groups: Vec<Group> = group_adjacent(records, extract_date)?
        .into_iter()
        .map(|(date, items)| Group::new(date, items))
        .collect();

    debug!(groups = groups.len(), "Grouped records by date");
    Ok(groups)
}
