// Corrections layered on top of the Unicode data:
// - do not confuse "m" with "rn"
// - confuse "π" (pi) with "n"
// - confuse "μ" (mu) with "u"
// - confuse "χ" (chi) with "x"
// - confuse "ʀ" (Latin small capital R) with "R"
// - confuse "ኮ" (Ethiopic syllable Ko) with "r"
// - a fixed list of extra single codepoint mappings

use crate::entry::ConfusableEntry;

/// What to do with a dataset entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Emit(String),
    Drop,
}

/// A substitution applied to entry targets that contain `needle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideRule {
    pub name: &'static str,
    pub needle: &'static str,
    pub replacement: &'static str,
    /// Source codepoint whose entry is dropped rather than rewritten.
    pub drop_source: Option<char>,
}

impl OverrideRule {
    pub fn matches(&self, target: &str) -> bool {
        target.contains(self.needle)
    }

    pub fn apply(&self, source: char, target: &str) -> Resolution {
        if self.drop_source == Some(source) {
            return Resolution::Drop;
        }
        Resolution::Emit(target.replace(self.needle, self.replacement))
    }
}

/// Evaluated in order; the first rule whose needle occurs in the target
/// decides the outcome.
pub const OVERRIDE_RULES: &[OverrideRule] = &[
    OverrideRule {
        name: "rn_to_m",
        needle: "rn",
        replacement: "m",
        drop_source: Some('m'),
    },
    OverrideRule {
        name: "pi_to_n",
        needle: "\u{03C0}",
        replacement: "n",
        drop_source: None,
    },
    OverrideRule {
        name: "mu_to_u",
        needle: "\u{03BC}",
        replacement: "u",
        drop_source: None,
    },
    OverrideRule {
        name: "chi_to_x",
        needle: "\u{03C7}",
        replacement: "x",
        drop_source: None,
    },
    OverrideRule {
        name: "small_capital_r_to_r",
        needle: "\u{0280}",
        replacement: "R",
        drop_source: None,
    },
    OverrideRule {
        name: "ethiopic_ko_to_r",
        needle: "\u{12AE}",
        replacement: "r",
        drop_source: None,
    },
];

/// Mappings the dataset does not resolve on its own. Applied after every
/// dataset entry and win over them.
pub const SUPPLEMENTARY_OVERRIDES: &[(char, &str)] = &[
    ('\u{16D2}', "B"), // ᛒ RUNIC LETTER BERKANAN BEORC BJARKAN B
    ('\u{FF42}', "b"), // ｂ
    ('\u{FF24}', "D"), // Ｄ
    ('\u{1E0D}', "d"), // ḍ
    ('\u{FF44}', "d"), // ｄ
    ('\u{FF26}', "F"), // Ｆ
    ('\u{FF46}', "f"), // ｆ
    ('\u{FF27}', "G"), // Ｇ
    ('\u{FF4B}', "k"), // ｋ
    ('\u{FF2C}', "L"), // Ｌ
    ('\u{FF4D}', "m"), // ｍ
    ('\u{0274}', "N"), // ɴ
    ('\u{FF4E}', "n"), // ｎ
    ('\u{10AD}', "Q"), // Ⴍ
    ('\u{10B3}', "Q"), // Ⴓ
    ('\u{FF31}', "Q"), // Ｑ
    ('\u{FF51}', "q"), // ｑ
    ('\u{FF32}', "R"), // Ｒ
    ('\u{0280}', "R"), // ʀ
    ('\u{16B1}', "R"), // ᚱ
    ('\u{FF52}', "r"), // ｒ
    ('\u{10BD}', "S"), // Ⴝ
    ('\u{FF54}', "t"), // ｔ
    ('\u{0531}', "U"), // Ա
    ('\u{FF35}', "U"), // Ｕ
    ('\u{FF55}', "u"), // ｕ
    ('\u{FF36}', "V"), // Ｖ
    ('\u{FF37}', "W"), // Ｗ
    ('\u{FF57}', "w"), // ｗ
    ('\u{FF5A}', "z"), // ｚ
    ('\u{03C0}', "n"), // π
];

/// The rule that decides `target`, if any.
pub fn matching_rule(target: &str) -> Option<&'static OverrideRule> {
    OVERRIDE_RULES.iter().find(|rule| rule.matches(target))
}

/// Decide the replacement string for one entry.
pub fn resolve(entry: &ConfusableEntry) -> Resolution {
    let target = entry.target_string();
    match matching_rule(&target) {
        Some(rule) => rule.apply(entry.source, &target),
        None => Resolution::Emit(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(s: &str) -> Resolution {
        Resolution::Emit(s.to_string())
    }

    #[test]
    fn test_rn_becomes_m() {
        let entry = ConfusableEntry::new('\u{0271}', vec!['r', 'n', 'r', 'n']);
        assert_eq!(resolve(&entry), emit("mm"));
    }

    #[test]
    fn test_m_to_rn_is_dropped() {
        let entry = ConfusableEntry::new('m', vec!['r', 'n']);
        assert_eq!(resolve(&entry), Resolution::Drop);
    }

    #[test]
    fn test_greek_substitutions() {
        let pi = ConfusableEntry::new('\u{213C}', vec!['\u{03C0}']);
        let mu = ConfusableEntry::new('\u{00B5}', vec!['\u{03BC}']);
        let chi = ConfusableEntry::new('\u{1D6D8}', vec!['\u{03C7}']);
        assert_eq!(resolve(&pi), emit("n"));
        assert_eq!(resolve(&mu), emit("u"));
        assert_eq!(resolve(&chi), emit("x"));
    }

    #[test]
    fn test_small_capital_r_and_ethiopic_ko() {
        let small_r = ConfusableEntry::new('\u{1D19}', vec!['\u{0280}', '\u{0335}']);
        let ko = ConfusableEntry::new('\u{12A8}', vec!['\u{12AE}']);
        assert_eq!(resolve(&small_r), emit("R\u{0335}"));
        assert_eq!(resolve(&ko), emit("r"));
    }

    #[test]
    fn test_first_match_wins() {
        // Both "rn" and "π" occur; only the rn rule applies.
        let entry = ConfusableEntry::new('\u{2000}', vec!['r', 'n', '\u{03C0}']);
        assert_eq!(matching_rule("rn\u{03C0}").map(|r| r.name), Some("rn_to_m"));
        assert_eq!(resolve(&entry), emit("m\u{03C0}"));

        // π precedes μ
        let entry = ConfusableEntry::new('\u{2001}', vec!['\u{03BC}', '\u{03C0}']);
        assert_eq!(resolve(&entry), emit("\u{03BC}n"));
    }

    #[test]
    fn test_m_source_only_dropped_by_rn_rule() {
        let entry = ConfusableEntry::new('m', vec!['\u{03C0}']);
        assert_eq!(resolve(&entry), emit("n"));
    }

    #[test]
    fn test_untouched_target() {
        let entry = ConfusableEntry::new('\u{0430}', vec!['a']);
        assert_eq!(matching_rule("a"), None);
        assert_eq!(resolve(&entry), emit("a"));
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = OVERRIDE_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "rn_to_m",
                "pi_to_n",
                "mu_to_u",
                "chi_to_x",
                "small_capital_r_to_r",
                "ethiopic_ko_to_r"
            ]
        );
    }

    #[test]
    fn test_supplementary_list() {
        assert_eq!(SUPPLEMENTARY_OVERRIDES.len(), 31);
        assert!(SUPPLEMENTARY_OVERRIDES.contains(&('Ｄ', "D")));
        assert!(SUPPLEMENTARY_OVERRIDES.contains(&('ᚱ', "R")));
        assert!(SUPPLEMENTARY_OVERRIDES.contains(&('π', "n")));
    }
}
