use rand::Rng;

use crate::notification::NotificationId;

/// Stable id of the collapsed summary for `key`.
///
/// 32-bit polynomial hash (`h = 31 * h + unit`) over the UTF-16 code units of
/// the key, wrapping on overflow.
pub fn derive_group_id(key: &str) -> NotificationId {
    let hash = key
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    NotificationId(hash as u32)
}

/// Fresh id for notifications that are not collapsed summaries. Never zero.
pub fn random_id() -> NotificationId {
    NotificationId(rand::thread_rng().gen_range(1..=u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("K", 75)]
    #[case("ab", 3105)]
    #[case("hello", 99_162_322)]
    #[case("\u{1F600}", 1_772_899)]
    fn known_hashes(#[case] key: &str, #[case] expected: u32) {
        assert_eq!(derive_group_id(key), NotificationId(expected));
    }

    #[test]
    fn negative_hashes_wrap_into_u32() {
        assert_eq!(derive_group_id("message_stack"), NotificationId((-1_214_397_360i32) as u32));
        assert_eq!(derive_group_id("polygenelubricants"), NotificationId(0x8000_0000));
    }

    #[test]
    fn same_key_same_id() {
        assert_eq!(derive_group_id("chat:42"), derive_group_id("chat:42"));
        assert_ne!(derive_group_id("chat:42"), derive_group_id("chat:43"));
    }

    #[test]
    fn random_ids_are_nonzero() {
        for _ in 0..1000 {
            assert_ne!(random_id(), NotificationId(0));
        }
    }
}
