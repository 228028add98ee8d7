// tailoring.rs - Conditional case rules (SpecialCasing.txt).
//
// A small ordered list of (language, modes, codepoint, condition,
// replacement) entries consulted before the root tables. The first entry
// whose language, mode, codepoint and condition all match wins.

use bitflags::bitflags;

use crate::casemap::CaseMode;
use crate::locale::{Language, Locale};

bitflags! {
    /// Mapping modes a rule applies to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modes: u8 {
        const LOWER = 1 << 0;
        const UPPER = 1 << 1;
        const TITLE = 1 << 2;
        const FOLD = 1 << 3;
    }
}

impl From<CaseMode> for Modes {
    fn from(mode: CaseMode) -> Self {
        match mode {
            CaseMode::Lowercase => Modes::LOWER,
            CaseMode::Uppercase => Modes::UPPER,
            CaseMode::Titlecase => Modes::TITLE,
            CaseMode::Casefold => Modes::FOLD,
        }
    }
}

/// Context condition of a rule, evaluated around the current codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// Preceded by a cased letter and not followed by one, case-ignorables
    /// skipped on both sides.
    FinalSigma,
    /// Last preceding base or above-mark is `I`.
    AfterI,
    /// Not followed by U+0307 before the next base or above-mark.
    NotBeforeDot,
    /// Followed by an above-mark (ccc 230) before the next base.
    MoreAbove,
    /// Last preceding base or above-mark is Soft_Dotted.
    AfterSoftDotted,
}

/// Evaluates conditions at the current position of a mapping pass.
pub trait Context {
    fn holds(&self, condition: Condition) -> bool;
}

#[derive(Debug)]
pub struct Rule {
    /// Languages the rule belongs to; empty for every language.
    pub languages: &'static [Language],
    pub modes: Modes,
    pub code: char,
    pub condition: Condition,
    pub replacement: &'static [char],
}

const TURKIC: &[Language] = &[Language::Turkish, Language::Azerbaijani];
const LITHUANIAN: &[Language] = &[Language::Lithuanian];
const ALL: &[Language] = &[];

static RULES: &[Rule] = &[
    Rule {
        languages: ALL,
        modes: Modes::LOWER,
        code: '\u{03a3}',
        condition: Condition::FinalSigma,
        replacement: &['\u{03c2}'],
    },
    // Lithuanian keeps the dot of i when another accent sits above it.
    // Titlecasing only maps cased letters, so U+0307 is lowercased there.
    Rule {
        languages: LITHUANIAN,
        modes: Modes::UPPER,
        code: '\u{0307}',
        condition: Condition::AfterSoftDotted,
        replacement: &[],
    },
    Rule {
        languages: LITHUANIAN,
        modes: Modes::LOWER,
        code: 'I',
        condition: Condition::MoreAbove,
        replacement: &['i', '\u{0307}'],
    },
    Rule {
        languages: LITHUANIAN,
        modes: Modes::LOWER,
        code: 'J',
        condition: Condition::MoreAbove,
        replacement: &['j', '\u{0307}'],
    },
    Rule {
        languages: LITHUANIAN,
        modes: Modes::LOWER,
        code: '\u{012e}',
        condition: Condition::MoreAbove,
        replacement: &['\u{012f}', '\u{0307}'],
    },
    Rule {
        languages: LITHUANIAN,
        modes: Modes::LOWER,
        code: '\u{00cc}',
        condition: Condition::Always,
        replacement: &['i', '\u{0307}', '\u{0300}'],
    },
    Rule {
        languages: LITHUANIAN,
        modes: Modes::LOWER,
        code: '\u{00cd}',
        condition: Condition::Always,
        replacement: &['i', '\u{0307}', '\u{0301}'],
    },
    Rule {
        languages: LITHUANIAN,
        modes: Modes::LOWER,
        code: '\u{0128}',
        condition: Condition::Always,
        replacement: &['i', '\u{0307}', '\u{0303}'],
    },
    // Turkish and Azerbaijani dotted and dotless i.
    Rule {
        languages: TURKIC,
        modes: Modes::LOWER,
        code: '\u{0130}',
        condition: Condition::Always,
        replacement: &['i'],
    },
    Rule {
        languages: TURKIC,
        modes: Modes::LOWER,
        code: '\u{0307}',
        condition: Condition::AfterI,
        replacement: &[],
    },
    Rule {
        languages: TURKIC,
        modes: Modes::LOWER,
        code: 'I',
        condition: Condition::NotBeforeDot,
        replacement: &['\u{0131}'],
    },
    Rule {
        languages: TURKIC,
        modes: Modes::UPPER.union(Modes::TITLE),
        code: 'i',
        condition: Condition::Always,
        replacement: &['\u{0130}'],
    },
    Rule {
        languages: TURKIC,
        modes: Modes::FOLD,
        code: 'I',
        condition: Condition::Always,
        replacement: &['\u{0131}'],
    },
    Rule {
        languages: TURKIC,
        modes: Modes::FOLD,
        code: '\u{0130}',
        condition: Condition::Always,
        replacement: &['i'],
    },
];

pub fn rules() -> &'static [Rule] {
    RULES
}

/// True if some rule is keyed on `c`. Cheap pre-check for the hot loop.
#[inline]
pub fn is_tailored(c: char) -> bool {
    matches!(
        c,
        'I' | 'J' | 'i' | '\u{00cc}' | '\u{00cd}' | '\u{0128}' | '\u{012e}' | '\u{0130}'
            | '\u{0307}' | '\u{03a3}'
    )
}

impl Rule {
    fn applies(&self, c: char, modes: Modes, language: Language) -> bool {
        self.code == c
            && self.modes.intersects(modes)
            && (self.languages.is_empty() || self.languages.contains(&language))
    }
}

/// Replacement for `c` under `mode` and `locale`, if a rule matches.
pub fn lookup<C: Context + ?Sized>(
    c: char,
    mode: CaseMode,
    locale: Locale,
    ctx: &C,
) -> Option<&'static [char]> {
    if !is_tailored(c) {
        return None;
    }
    let modes = Modes::from(mode);
    let language = locale.language();
    RULES
        .iter()
        .filter(|rule| rule.applies(c, modes, language))
        .find(|rule| rule.condition == Condition::Always || ctx.holds(rule.condition))
        .map(|rule| rule.replacement)
}
