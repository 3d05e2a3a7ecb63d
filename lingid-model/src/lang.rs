//! Supported languages and their ISO codes (spec component/data model §3).
//!
//! Grounded on heliport's `lang.rs`: a flat, `#[repr(u8)]`, `strum`-derived
//! enum iterated with `Lang::iter()` everywhere a per-language table is
//! built. Ordering is lexicographic by variant name (declared alphabetically
//! below) so the derived `Ord` satisfies spec §3's "total, lexicographic by
//! name" requirement directly, without a custom comparator.

use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::script::Script;

#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy,
    Display, EnumIter, EnumCount, EnumString,
)]
pub enum Language {
    Afrikaans,
    Albanian,
    Arabic,
    Armenian,
    Azerbaijani,
    Basque,
    Belarusian,
    Bengali,
    Bokmal,
    Bosnian,
    Bulgarian,
    Catalan,
    Chinese,
    Croatian,
    Czech,
    Danish,
    Dutch,
    English,
    Esperanto,
    Estonian,
    Finnish,
    French,
    Ganda,
    Georgian,
    German,
    Greek,
    Gujarati,
    Hebrew,
    Hindi,
    Hungarian,
    Icelandic,
    Indonesian,
    Irish,
    Italian,
    Japanese,
    Kazakh,
    Korean,
    Latin,
    Latvian,
    Lithuanian,
    Macedonian,
    Malay,
    Maori,
    Marathi,
    Mongolian,
    Nynorsk,
    Oromo,
    Persian,
    Polish,
    Portuguese,
    Punjabi,
    Romanian,
    Russian,
    Serbian,
    Shona,
    Slovak,
    Slovene,
    Somali,
    Sotho,
    Spanish,
    Swahili,
    Swedish,
    Tagalog,
    Tamil,
    Telugu,
    Thai,
    Tsonga,
    Tswana,
    Turkish,
    Ukrainian,
    Urdu,
    Vietnamese,
    Welsh,
    Xhosa,
    Yoruba,
    Zulu,
}

impl Language {
    pub fn iso_code_639_1(&self) -> IsoCode639_1 {
        use IsoCode639_1::*;
        match self {
            Self::Afrikaans => Af,
            Self::Albanian => Sq,
            Self::Arabic => Ar,
            Self::Armenian => Hy,
            Self::Azerbaijani => Az,
            Self::Basque => Eu,
            Self::Belarusian => Be,
            Self::Bengali => Bn,
            Self::Bokmal => Nb,
            Self::Bosnian => Bs,
            Self::Bulgarian => Bg,
            Self::Catalan => Ca,
            Self::Chinese => Zh,
            Self::Croatian => Hr,
            Self::Czech => Cs,
            Self::Danish => Da,
            Self::Dutch => Nl,
            Self::English => En,
            Self::Esperanto => Eo,
            Self::Estonian => Et,
            Self::Finnish => Fi,
            Self::French => Fr,
            Self::Ganda => Lg,
            Self::Georgian => Ka,
            Self::German => De,
            Self::Greek => El,
            Self::Gujarati => Gu,
            Self::Hebrew => He,
            Self::Hindi => Hi,
            Self::Hungarian => Hu,
            Self::Icelandic => Is,
            Self::Indonesian => Id,
            Self::Irish => Ga,
            Self::Italian => It,
            Self::Japanese => Ja,
            Self::Kazakh => Kk,
            Self::Korean => Ko,
            Self::Latin => La,
            Self::Latvian => Lv,
            Self::Lithuanian => Lt,
            Self::Macedonian => Mk,
            Self::Malay => Ms,
            Self::Maori => Mi,
            Self::Marathi => Mr,
            Self::Mongolian => Mn,
            Self::Nynorsk => Nn,
            Self::Oromo => Om,
            Self::Persian => Fa,
            Self::Polish => Pl,
            Self::Portuguese => Pt,
            Self::Punjabi => Pa,
            Self::Romanian => Ro,
            Self::Russian => Ru,
            Self::Serbian => Sr,
            Self::Shona => Sn,
            Self::Slovak => Sk,
            Self::Slovene => Sl,
            Self::Somali => So,
            Self::Sotho => St,
            Self::Spanish => Es,
            Self::Swahili => Sw,
            Self::Swedish => Sv,
            Self::Tagalog => Tl,
            Self::Tamil => Ta,
            Self::Telugu => Te,
            Self::Thai => Th,
            Self::Tsonga => Ts,
            Self::Tswana => Tn,
            Self::Turkish => Tr,
            Self::Ukrainian => Uk,
            Self::Urdu => Ur,
            Self::Vietnamese => Vi,
            Self::Welsh => Cy,
            Self::Xhosa => Xh,
            Self::Yoruba => Yo,
            Self::Zulu => Zu,
        }
    }

    pub fn iso_code_639_3(&self) -> IsoCode639_3 {
        use IsoCode639_3::*;
        match self {
            Self::Afrikaans => Afr,
            Self::Albanian => Sqi,
            Self::Arabic => Ara,
            Self::Armenian => Hye,
            Self::Azerbaijani => Aze,
            Self::Basque => Eus,
            Self::Belarusian => Bel,
            Self::Bengali => Ben,
            Self::Bokmal => Nob,
            Self::Bosnian => Bos,
            Self::Bulgarian => Bul,
            Self::Catalan => Cat,
            Self::Chinese => Zho,
            Self::Croatian => Hrv,
            Self::Czech => Ces,
            Self::Danish => Dan,
            Self::Dutch => Nld,
            Self::English => Eng,
            Self::Esperanto => Epo,
            Self::Estonian => Est,
            Self::Finnish => Fin,
            Self::French => Fra,
            Self::Ganda => Lug,
            Self::Georgian => Kat,
            Self::German => Deu,
            Self::Greek => Ell,
            Self::Gujarati => Guj,
            Self::Hebrew => Heb,
            Self::Hindi => Hin,
            Self::Hungarian => Hun,
            Self::Icelandic => Isl,
            Self::Indonesian => Ind,
            Self::Irish => Gle,
            Self::Italian => Ita,
            Self::Japanese => Jpn,
            Self::Kazakh => Kaz,
            Self::Korean => Kor,
            Self::Latin => Lat,
            Self::Latvian => Lav,
            Self::Lithuanian => Lit,
            Self::Macedonian => Mkd,
            Self::Malay => Msa,
            Self::Maori => Mri,
            Self::Marathi => Mar,
            Self::Mongolian => Mon,
            Self::Nynorsk => Nno,
            Self::Oromo => Orm,
            Self::Persian => Fas,
            Self::Polish => Pol,
            Self::Portuguese => Por,
            Self::Punjabi => Pan,
            Self::Romanian => Ron,
            Self::Russian => Rus,
            Self::Serbian => Srp,
            Self::Shona => Sna,
            Self::Slovak => Slk,
            Self::Slovene => Slv,
            Self::Somali => Som,
            Self::Sotho => Sot,
            Self::Spanish => Spa,
            Self::Swahili => Swa,
            Self::Swedish => Swe,
            Self::Tagalog => Tgl,
            Self::Tamil => Tam,
            Self::Telugu => Tel,
            Self::Thai => Tha,
            Self::Tsonga => Tso,
            Self::Tswana => Tsn,
            Self::Turkish => Tur,
            Self::Ukrainian => Ukr,
            Self::Urdu => Urd,
            Self::Vietnamese => Vie,
            Self::Welsh => Cym,
            Self::Xhosa => Xho,
            Self::Yoruba => Yor,
            Self::Zulu => Zul,
        }
    }

    /// Scripts this language is written in. Most languages use exactly one;
    /// Japanese mixes Han with both kana syllabaries, and Serbian is
    /// routinely written in both Cyrillic and Latin.
    pub fn scripts(&self) -> &'static [Script] {
        use Script::*;
        match self {
            Self::Arabic | Self::Persian | Self::Urdu => &[Arabic],
            Self::Armenian => &[Script::Armenian],
            Self::Belarusian
            | Self::Bulgarian
            | Self::Kazakh
            | Self::Macedonian
            | Self::Mongolian
            | Self::Russian
            | Self::Ukrainian => &[Cyrillic],
            Self::Serbian => &[Cyrillic, Latin],
            Self::Bengali => &[Script::Bengali],
            Self::Chinese => &[Han],
            Self::Georgian => &[Script::Georgian],
            Self::Greek => &[Script::Greek],
            Self::Gujarati => &[Script::Gujarati],
            Self::Hebrew => &[Script::Hebrew],
            Self::Hindi | Self::Marathi => &[Devanagari],
            Self::Japanese => &[Han, Hiragana, Katakana],
            Self::Korean => &[Hangul],
            Self::Punjabi => &[Script::Gurmukhi],
            Self::Tamil => &[Script::Tamil],
            Self::Telugu => &[Script::Telugu],
            Self::Thai => &[Script::Thai],
            _ => &[Latin],
        }
    }

    /// Small a-priori boost table for characters that belong to exactly one
    /// supported language's alphabet (spec §4.C), e.g. Azerbaijani 'ə'.
    pub fn unique_characters(&self) -> &'static [char] {
        match self {
            Self::Azerbaijani => &['ə'],
            Self::Polish => &['ł'],
            Self::Vietnamese => &['ơ', 'ư', 'đ'],
            Self::Turkish => &['ı'],
            Self::Icelandic => &['þ', 'ð'],
            _ => &[],
        }
    }
}

macro_rules! iso_enum {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, EnumIter, EnumCount)]
        pub enum $name {
            $($variant),+
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let s = match self {
                    $(Self::$variant => stringify!($variant)),+
                };
                write!(f, "{}", s.to_uppercase())
            }
        }

        impl FromStr for $name {
            type Err = crate::error::ModelError;

            /// Case-insensitive lookup by code, per spec §6.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lowered = s.to_lowercase();
                $(
                    if lowered == stringify!($variant).to_lowercase() {
                        return Ok(Self::$variant);
                    }
                )+
                Err(crate::error::ModelError::UnknownIsoCode)
            }
        }
    };
}

iso_enum!(IsoCode639_1 {
    Af, Sq, Ar, Hy, Az, Eu, Be, Bn, Nb, Bs, Bg, Ca, Zh, Hr, Cs, Da, Nl, En, Eo,
    Et, Fi, Fr, Lg, Ka, De, El, Gu, He, Hi, Hu, Is, Id, Ga, It, Ja, Kk, Ko,
    La, Lv, Lt, Mk, Ms, Mi, Mr, Mn, Nn, Om, Fa, Pl, Pt, Pa, Ro, Ru, Sr, Sn,
    Sk, Sl, So, St, Es, Sw, Sv, Tl, Ta, Te, Th, Ts, Tn, Tr, Uk, Ur, Vi, Cy,
    Xh, Yo, Zu,
});

iso_enum!(IsoCode639_3 {
    Afr, Sqi, Ara, Hye, Aze, Eus, Bel, Ben, Nob, Bos, Bul, Cat, Zho, Hrv,
    Ces, Dan, Nld, Eng, Epo, Est, Fin, Fra, Lug, Kat, Deu, Ell, Guj, Heb,
    Hin, Hun, Isl, Ind, Gle, Ita, Jpn, Kaz, Kor, Lat, Lav, Lit, Mkd, Msa,
    Mri, Mar, Mon, Nno, Orm, Fas, Pol, Por, Pan, Ron, Rus, Srp, Sna, Slk,
    Slv, Som, Sot, Spa, Swa, Swe, Tgl, Tam, Tel, Tha, Tso, Tsn, Tur, Ukr,
    Urd, Vie, Cym, Xho, Yor, Zul,
});

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ordering_is_total_and_alphabetical() {
        let mut prev: Option<Language> = None;
        for lang in Language::iter() {
            if let Some(p) = prev {
                assert!(p < lang, "{:?} should sort before {:?}", p, lang);
                assert!(p.to_string() < lang.to_string());
            }
            prev = Some(lang);
        }
    }

    #[test]
    fn iso_codes_round_trip() {
        assert_eq!(Language::German.iso_code_639_1(), IsoCode639_1::De);
        assert_eq!(Language::German.iso_code_639_3(), IsoCode639_3::Deu);
    }

    #[test]
    fn iso_code_lookup_is_case_insensitive() {
        assert_eq!(IsoCode639_1::from_str("EN").unwrap(), IsoCode639_1::En);
        assert_eq!(IsoCode639_1::from_str("en").unwrap(), IsoCode639_1::En);
        assert_eq!(IsoCode639_1::from_str("eN").unwrap(), IsoCode639_1::En);
        assert!(IsoCode639_1::from_str("12").is_err());
    }

    #[test]
    fn every_language_has_at_least_one_script() {
        for lang in Language::iter() {
            assert!(!lang.scripts().is_empty());
        }
    }
}
