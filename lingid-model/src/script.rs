//! Writing-system classification used by the alphabet/script prefilter
//! (spec component C).
//!
//! Grounded on heliport's `utils::is_cjk_block`/`CJK_BLOCKS`: a fixed table
//! mapping `unicode_blocks::UnicodeBlock` values onto a small enum, looked
//! up per character. Here the single CJK/non-CJK boolean heliport computes
//! is generalized into the full set of scripts the supported languages use.

use strum::{Display, EnumCount, EnumIter};
use unicode_blocks::{self, UnicodeBlock};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, EnumIter, EnumCount)]
pub enum Script {
    Latin,
    Cyrillic,
    Arabic,
    Devanagari,
    Han,
    Hangul,
    Hiragana,
    Katakana,
    Greek,
    Hebrew,
    Georgian,
    Armenian,
    Bengali,
    Gujarati,
    Gurmukhi,
    Tamil,
    Telugu,
    Thai,
}

const LATIN_BLOCKS: &[UnicodeBlock] = &[
    unicode_blocks::BASIC_LATIN,
    unicode_blocks::LATIN_1_SUPPLEMENT,
    unicode_blocks::LATIN_EXTENDED_A,
    unicode_blocks::LATIN_EXTENDED_B,
    unicode_blocks::LATIN_EXTENDED_ADDITIONAL,
    unicode_blocks::LATIN_EXTENDED_C,
    unicode_blocks::LATIN_EXTENDED_D,
    unicode_blocks::LATIN_EXTENDED_E,
];

const CYRILLIC_BLOCKS: &[UnicodeBlock] = &[
    unicode_blocks::CYRILLIC,
    unicode_blocks::CYRILLIC_SUPPLEMENT,
    unicode_blocks::CYRILLIC_EXTENDED_A,
    unicode_blocks::CYRILLIC_EXTENDED_B,
    unicode_blocks::CYRILLIC_EXTENDED_C,
];

const ARABIC_BLOCKS: &[UnicodeBlock] = &[
    unicode_blocks::ARABIC,
    unicode_blocks::ARABIC_SUPPLEMENT,
    unicode_blocks::ARABIC_EXTENDED_A,
    unicode_blocks::ARABIC_PRESENTATION_FORMS_A,
    unicode_blocks::ARABIC_PRESENTATION_FORMS_B,
];

const DEVANAGARI_BLOCKS: &[UnicodeBlock] =
    &[unicode_blocks::DEVANAGARI, unicode_blocks::DEVANAGARI_EXTENDED];

const HAN_BLOCKS: &[UnicodeBlock] = &[
    unicode_blocks::CJK_UNIFIED_IDEOGRAPHS,
    unicode_blocks::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A,
    unicode_blocks::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_B,
    unicode_blocks::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_C,
    unicode_blocks::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_D,
    unicode_blocks::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_E,
    unicode_blocks::CJK_UNIFIED_IDEOGRAPHS_EXTENSION_F,
    unicode_blocks::CJK_COMPATIBILITY_IDEOGRAPHS,
    unicode_blocks::CJK_COMPATIBILITY_IDEOGRAPHS_SUPPLEMENT,
    unicode_blocks::CJK_RADICALS_SUPPLEMENT,
    unicode_blocks::CJK_SYMBOLS_AND_PUNCTUATION,
];

const HANGUL_BLOCKS: &[UnicodeBlock] = &[
    unicode_blocks::HANGUL_JAMO,
    unicode_blocks::HANGUL_SYLLABLES,
    unicode_blocks::HANGUL_COMPATIBILITY_JAMO,
    unicode_blocks::HANGUL_JAMO_EXTENDED_A,
    unicode_blocks::HANGUL_JAMO_EXTENDED_B,
];

const HIRAGANA_BLOCKS: &[UnicodeBlock] = &[unicode_blocks::HIRAGANA];
const KATAKANA_BLOCKS: &[UnicodeBlock] =
    &[unicode_blocks::KATAKANA, unicode_blocks::KATAKANA_PHONETIC_EXTENSIONS];
const GREEK_BLOCKS: &[UnicodeBlock] =
    &[unicode_blocks::GREEK_AND_COPTIC, unicode_blocks::GREEK_EXTENDED];
const HEBREW_BLOCKS: &[UnicodeBlock] = &[unicode_blocks::HEBREW];
const GEORGIAN_BLOCKS: &[UnicodeBlock] =
    &[unicode_blocks::GEORGIAN, unicode_blocks::GEORGIAN_SUPPLEMENT];
const ARMENIAN_BLOCKS: &[UnicodeBlock] = &[unicode_blocks::ARMENIAN];
const BENGALI_BLOCKS: &[UnicodeBlock] = &[unicode_blocks::BENGALI];
const GUJARATI_BLOCKS: &[UnicodeBlock] = &[unicode_blocks::GUJARATI];
const GURMUKHI_BLOCKS: &[UnicodeBlock] = &[unicode_blocks::GURMUKHI];
const TAMIL_BLOCKS: &[UnicodeBlock] = &[unicode_blocks::TAMIL];
const TELUGU_BLOCKS: &[UnicodeBlock] = &[unicode_blocks::TELUGU];
const THAI_BLOCKS: &[UnicodeBlock] = &[unicode_blocks::THAI];

/// Return the script a character's Unicode block belongs to, if any of the
/// supported scripts claims that block. Punctuation, digits and whitespace
/// fall outside every table and yield `None`, matching spec §4.C's "ignoring
/// punctuation/whitespace/digits" policy.
pub fn script_of(c: char) -> Option<Script> {
    let block = unicode_blocks::find_unicode_block(c)?;
    let tables: &[(&[UnicodeBlock], Script)] = &[
        (LATIN_BLOCKS, Script::Latin),
        (CYRILLIC_BLOCKS, Script::Cyrillic),
        (ARABIC_BLOCKS, Script::Arabic),
        (DEVANAGARI_BLOCKS, Script::Devanagari),
        (HAN_BLOCKS, Script::Han),
        (HANGUL_BLOCKS, Script::Hangul),
        (HIRAGANA_BLOCKS, Script::Hiragana),
        (KATAKANA_BLOCKS, Script::Katakana),
        (GREEK_BLOCKS, Script::Greek),
        (HEBREW_BLOCKS, Script::Hebrew),
        (GEORGIAN_BLOCKS, Script::Georgian),
        (ARMENIAN_BLOCKS, Script::Armenian),
        (BENGALI_BLOCKS, Script::Bengali),
        (GUJARATI_BLOCKS, Script::Gujarati),
        (GURMUKHI_BLOCKS, Script::Gurmukhi),
        (TAMIL_BLOCKS, Script::Tamil),
        (TELUGU_BLOCKS, Script::Telugu),
        (THAI_BLOCKS, Script::Thai),
    ];
    for (blocks, script) in tables {
        if blocks.contains(&block) {
            return Some(*script);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_ascii() {
        assert_eq!(script_of('a'), Some(Script::Latin));
    }

    #[test]
    fn cyrillic() {
        assert_eq!(script_of('п'), Some(Script::Cyrillic));
    }

    #[test]
    fn han() {
        assert_eq!(script_of('大'), Some(Script::Han));
    }

    #[test]
    fn digits_and_punctuation_have_no_script() {
        assert_eq!(script_of('5'), None);
        assert_eq!(script_of('!'), None);
        assert_eq!(script_of(' '), None);
    }
}
