// Stable event identity across re-scrapes.
//
// Each source id is read as zero-padded decimal (widths 10, 10, 5) and only its
// trailing 6, 6 and 5 digits are kept. Higher digits are dropped, so distinct
// triples can collide; stored ids depend on this exact layout.

const ITEM_ID_KEEP: u64 = 1_000_000;
const ITEM_ID2_KEEP: u64 = 1_000_000;
const SUBJECT_KEEP: u64 = 100_000;

pub fn generate_event_id(item_id: u64, item_id2: u64, subject_item_id: u64) -> i64 {
    let item_part = (item_id % ITEM_ID_KEEP) as i64;
    let item2_part = (item_id2 % ITEM_ID2_KEEP) as i64;
    let subject_part = (subject_item_id % SUBJECT_KEEP) as i64;
    item_part * 1_000_000_000 + item2_part * 10_000 + subject_part
}
