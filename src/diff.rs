use crate::models::ProductRecord;

/// Records in `current` that appear nowhere in `previous`.
///
/// Membership is whole-record equality, so a price change surfaces as a
/// brand-new record. Order follows `current`. Records that dropped out of
/// the listing upstream simply stop appearing and are never reported.
/// The linear scan is fine at listing scale.
pub fn new_records(current: &[ProductRecord], previous: &[ProductRecord]) -> Vec<ProductRecord> {
    current
        .iter()
        .filter(|record| !previous.contains(record))
        .cloned()
        .collect()
}
