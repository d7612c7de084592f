// Compatibility decomposition (NFKD), the normalization step on both sides
// of confusable substitution.

use unicode_normalization::{is_nfkd_quick, IsNormalized, UnicodeNormalization};

/// Apply NFKD to `input`.
pub fn nfkd(input: &str) -> String {
    if is_nfkd_quick(input.chars()) == IsNormalized::Yes {
        return input.to_string();
    }
    input.nfkd().collect()
}
