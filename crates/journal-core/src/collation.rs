//! Name ordering for genre siblings.
//!
//! Ordering is an injected strategy so derived views do not depend on the
//! host locale and stay reproducible in tests.

use std::cmp::Ordering;
use std::fmt::Debug;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares display names.
pub trait Collator: Send + Sync + Debug {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Language-neutral ordering close to a user's expectation.
///
/// Names are compared on a primary key that ignores case, accents and
/// compatibility forms (`"Ébauche"` sorts with `"ebauche"`, full-width
/// letters with their ASCII counterparts). Names equal on that key fall
/// back to plain code point order.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeCollator;

impl UnicodeCollator {
    fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
        s.nfkd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
    }
}

impl Collator for UnicodeCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        Self::primary_key(a)
            .cmp(Self::primary_key(b))
            .then_with(|| a.cmp(b))
    }
}

/// Plain code point order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCollator;

impl Collator for BinaryCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}
