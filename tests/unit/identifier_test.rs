// Dual-mode identifier classification: 24 hex characters means surrogate
// key, anything else is a name query.

use proptest::prelude::*;

use menucraft::core::{new_entity_id, Identifier};

proptest! {
    #[test]
    fn generated_ids_always_classify_as_keys(_seed in any::<u8>()) {
        let id = new_entity_id();
        prop_assert_eq!(Identifier::classify(&id), Identifier::Key(&id));
    }

    #[test]
    fn hex_of_wrong_length_is_a_name(len in 1usize..64usize) {
        prop_assume!(len != 24);
        let raw = "a".repeat(len);
        prop_assert_eq!(Identifier::classify(&raw), Identifier::Name(&raw));
    }

    #[test]
    fn names_with_non_hex_chars_are_names(name in "[a-zA-Z ]{1,40}") {
        prop_assume!(!(name.len() == 24 && name.bytes().all(|b| b.is_ascii_hexdigit())));
        prop_assert_eq!(Identifier::classify(&name), Identifier::Name(&name));
    }
}

#[test]
fn generated_ids_are_unique_and_lowercase_hex() {
    let a = new_entity_id();
    let b = new_entity_id();

    assert_ne!(a, b);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn mixed_case_hex_key_is_accepted() {
    let raw = "5F9d88b2C3a14e0012AbCdEf";
    assert_eq!(Identifier::classify(raw), Identifier::Key(raw));
}
