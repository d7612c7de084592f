//! TR39 confusable detection.
//!
//! [`skeleton`] maps visually confusable strings to a common form so that
//! spoofing can be detected with plain equality:
//!
//! ```
//! use confusables_core::skeleton;
//!
//! assert_eq!(skeleton("ρ⍺у𝓅𝒂ן"), "paypal");
//! assert_eq!(skeleton("𝔭𝒶ỿ𝕡𝕒ℓ"), "paypal");
//! ```

pub mod confusables;
pub mod normalize;
pub mod skeleton;

pub use skeleton::{are_confusable, skeleton, skeleton_with, EmbeddedTable, Replacements};
