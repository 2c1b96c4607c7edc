//! Property tests for the record codec.

use proptest::prelude::*;

use stockfile::common::config::{CATEGORY_CAPACITY, NAME_CAPACITY, SUPPLIER_CAPACITY};
use stockfile::storage::record::codec::{decode, encode, normalize, truncate_text};
use stockfile::{Product, ProductId, RECORD_SIZE};

fn text(max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<char>().prop_filter("no NUL", |c| *c != '\0'), 0..max)
        .prop_map(|chars| chars.into_iter().collect())
}

prop_compose! {
    fn product()(
        id in any::<i32>(),
        name in text(70),
        category in text(40),
        quantity in any::<i32>(),
        price in -1.0e6f32..1.0e6f32,
        supplier in text(70),
    ) -> Product {
        Product { name, id: ProductId(id), category, quantity, supplier, price }
    }
}

proptest! {
    #[test]
    fn decode_inverts_encode_up_to_truncation(p in product()) {
        let decoded = decode(&encode(&p));
        prop_assert_eq!(decoded, normalize(&p));
    }

    #[test]
    fn encoding_is_deterministic(p in product()) {
        prop_assert_eq!(encode(&p), encode(&p));
        prop_assert_eq!(encode(&p).len(), RECORD_SIZE);
    }

    #[test]
    fn truncated_text_fits_with_terminator(s in text(120)) {
        for capacity in [NAME_CAPACITY, CATEGORY_CAPACITY, SUPPLIER_CAPACITY] {
            let kept = truncate_text(&s, capacity);
            prop_assert!(kept.len() < capacity);
            prop_assert!(s.starts_with(kept));
        }
    }

    #[test]
    fn short_ascii_text_is_untouched(s in "[ -~]{0,29}") {
        prop_assert_eq!(truncate_text(&s, CATEGORY_CAPACITY), s.as_str());
    }
}
