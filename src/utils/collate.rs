//! Locale-style string ordering for display sorting.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root tailoring:
//! accents and case are secondary and tertiary differences, so "Électricité"
//! sorts among the E's and "alpha" comes before "Alpha".

use feruca::{Collator, Locale, Tailoring};
use std::cell::RefCell;
use std::cmp::Ordering;

thread_local! {
    // Punctuation and spaces keep their primary weight (non-ignorable).
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|c| c.borrow_mut().collate(a, b))
}
