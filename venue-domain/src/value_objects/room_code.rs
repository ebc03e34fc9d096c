// Room code value object
// Source labels look like "KGH1110 (70)"; the canonical form is "GH 1110".

use std::sync::OnceLock;

use regex::Regex;

/// Rooms that are booked separately but host one session when opened up.
/// Each entry is (first room, second room, merged label).
pub const ADJACENT_ROOM_PAIRS: [(&str, &str, &str); 4] = [
    ("GH 1420", "GH 1430", "GH 1420&30"),
    ("GH 2410A", "GH 2410B", "GH 2410A&B"),
    ("GH 2420A", "GH 2420B", "GH 2420A&B"),
    ("GH 2430A", "GH 2430B", "GH 2430A&B"),
];

fn room_code_re() -> &'static Regex {
    static ROOM_CODE_RE: OnceLock<Regex> = OnceLock::new();
    ROOM_CODE_RE.get_or_init(|| {
        Regex::new(r"KGH(L\d+|\d+[AB]?)").expect("valid room code regex")
    })
}

pub fn parse_room_name(subject_item_name: &str) -> Option<String> {
    room_code_re()
        .captures(subject_item_name)
        .and_then(|caps| caps.get(1))
        .map(|code| format!("GH {}", code.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_room_name_inserts_space_after_building() {
        assert_eq!(parse_room_name("KGH1110 (70)").as_deref(), Some("GH 1110"));
        assert_eq!(parse_room_name("KGHL110").as_deref(), Some("GH L110"));
        assert_eq!(parse_room_name("KGH2410A (40)").as_deref(), Some("GH 2410A"));
        assert_eq!(parse_room_name("KGH2430B").as_deref(), Some("GH 2430B"));
    }

    #[test]
    fn room_code_pattern_compiles() {
        assert!(room_code_re().is_match("KGH1110"));
        assert!(!room_code_re().is_match("GH 1110"));
    }

    #[test]
    fn parse_room_name_rejects_unknown_codes() {
        assert_eq!(parse_room_name("random"), None);
        assert_eq!(parse_room_name("KGH"), None);
        assert_eq!(parse_room_name("ALC 110"), None);
    }

    #[test]
    fn merged_labels_are_not_pair_members() {
        for (_, _, merged) in ADJACENT_ROOM_PAIRS {
            assert!(ADJACENT_ROOM_PAIRS
                .iter()
                .all(|(first, second, _)| *first != merged && *second != merged));
        }
    }
}
