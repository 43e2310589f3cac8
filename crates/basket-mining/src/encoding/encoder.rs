//! Raw records to incidence matrix.

use std::collections::BTreeMap;
use std::sync::Arc;

use basket_core::errors::EncodeError;
use basket_core::types::{FxHashMap, ItemId, ItemInterner, TransactionId};

use super::matrix::IncidenceMatrix;

/// Encode `(transaction_id, item)` records.
///
/// Records are grouped per transaction and counted per item; any count of at
/// least one sets the cell, so repeated purchases in one basket carry no
/// extra weight. The vocabulary is every distinct label sorted by byte order,
/// and rows are sorted by transaction id.
pub fn encode<I, T, S>(records: I) -> Result<IncidenceMatrix, EncodeError>
where
    I: IntoIterator<Item = (T, S)>,
    T: Into<TransactionId>,
    S: AsRef<str>,
{
    let mut raw: Vec<(TransactionId, String)> = Vec::new();
    for (tid, item) in records {
        let tid = tid.into();
        let label = item.as_ref();
        if label.is_empty() {
            return Err(EncodeError::EmptyItemLabel {
                transaction: tid.to_string(),
            });
        }
        raw.push((tid, label.to_string()));
    }
    if raw.is_empty() {
        return Err(EncodeError::EmptyDataset);
    }

    let vocabulary = Arc::new(ItemInterner::from_labels(raw.iter().map(|(_, l)| l)));

    let mut grouped: BTreeMap<TransactionId, FxHashMap<ItemId, u32>> = BTreeMap::new();
    for (tid, label) in &raw {
        // Every label was interned above.
        let Some(item) = vocabulary.get(label) else {
            continue;
        };
        *grouped.entry(tid.clone()).or_default().entry(item).or_insert(0) += 1;
    }

    let mut collapsed = 0usize;
    let rows: Vec<(TransactionId, Vec<ItemId>)> = grouped
        .into_iter()
        .map(|(tid, counts)| {
            let items = counts
                .into_iter()
                .filter_map(|(item, count)| {
                    collapsed += count.saturating_sub(1) as usize;
                    (count >= 1).then_some(item)
                })
                .collect();
            (tid, items)
        })
        .collect();

    let matrix = IncidenceMatrix::from_rows(vocabulary, rows);
    tracing::info!(
        records = raw.len(),
        transactions = matrix.transaction_count(),
        vocabulary = matrix.item_count(),
        collapsed_duplicates = collapsed,
        "encoded transactions"
    );
    Ok(matrix)
}

/// Encode baskets given as `(transaction_id, items)`.
///
/// A basket with no items contributes no records and therefore no row.
pub fn encode_baskets<I, T, B, S>(baskets: I) -> Result<IncidenceMatrix, EncodeError>
where
    I: IntoIterator<Item = (T, B)>,
    T: Into<TransactionId>,
    B: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records: Vec<(TransactionId, S)> = Vec::new();
    for (tid, items) in baskets {
        let tid: TransactionId = tid.into();
        records.extend(items.into_iter().map(|item| (tid.clone(), item)));
    }
    encode(records)
}
