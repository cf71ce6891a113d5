/// The 14 standard PDF Type 1 fonts. Guaranteed available in all
/// viewers without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Symbol,
    ZapfDingbats,
}

impl Font {
    /// Resource name used in page dictionaries and content streams
    /// ("F1".."F14"). Fixed mapping by variant order.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::HelveticaOblique => "F3",
            Font::HelveticaBoldOblique => "F4",
            Font::TimesRoman => "F5",
            Font::TimesBold => "F6",
            Font::TimesItalic => "F7",
            Font::TimesBoldItalic => "F8",
            Font::Courier => "F9",
            Font::CourierBold => "F10",
            Font::CourierOblique => "F11",
            Font::CourierBoldOblique => "F12",
            Font::Symbol => "F13",
            Font::ZapfDingbats => "F14",
        }
    }

    /// PDF BaseFont name (e.g. "Helvetica-Bold", "Times-Roman").
    pub fn base_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
            Font::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Font::TimesRoman => "Times-Roman",
            Font::TimesBold => "Times-Bold",
            Font::TimesItalic => "Times-Italic",
            Font::TimesBoldItalic => "Times-BoldItalic",
            Font::Courier => "Courier",
            Font::CourierBold => "Courier-Bold",
            Font::CourierOblique => "Courier-Oblique",
            Font::CourierBoldOblique => "Courier-BoldOblique",
            Font::Symbol => "Symbol",
            Font::ZapfDingbats => "ZapfDingbats",
        }
    }
}

/// WinAnsiEncoding (cp1252), the encoding declared for every font
/// object this crate writes. Latin-1 maps through unchanged; the
/// 0x80..0x9F window holds Windows-specific characters such as the
/// euro sign and curly quotes.
pub mod winansi {
    /// Encode text, failing on the first character with no WinAnsi code.
    pub fn encode(text: &str) -> Result<Vec<u8>, char> {
        text.chars().map(|ch| encode_char(ch).ok_or(ch)).collect()
    }

    /// Encode text, substituting `?` for unmapped characters.
    pub fn encode_lossy(text: &str) -> Vec<u8> {
        text.chars()
            .map(|ch| encode_char(ch).unwrap_or(b'?'))
            .collect()
    }

    fn encode_char(ch: char) -> Option<u8> {
        match ch {
            '\u{20}'..='\u{7e}' => Some(ch as u8),
            '\u{a0}'..='\u{ff}' => Some(ch as u8),
            '\u{20ac}' => Some(0x80), // €
            '\u{201a}' => Some(0x82),
            '\u{192}' => Some(0x83),
            '\u{201e}' => Some(0x84),
            '\u{2026}' => Some(0x85),
            '\u{2020}' => Some(0x86),
            '\u{2021}' => Some(0x87),
            '\u{2c6}' => Some(0x88),
            '\u{2030}' => Some(0x89),
            '\u{160}' => Some(0x8a),
            '\u{2039}' => Some(0x8b),
            '\u{152}' => Some(0x8c),
            '\u{17d}' => Some(0x8e),
            '\u{2018}' => Some(0x91),
            '\u{2019}' => Some(0x92),
            '\u{201c}' => Some(0x93),
            '\u{201d}' => Some(0x94),
            '\u{2022}' => Some(0x95),
            '\u{2013}' => Some(0x96),
            '\u{2014}' => Some(0x97),
            '\u{2dc}' => Some(0x98),
            '\u{2122}' => Some(0x99),
            '\u{161}' => Some(0x9a),
            '\u{203a}' => Some(0x9b),
            '\u{153}' => Some(0x9c),
            '\u{17e}' => Some(0x9e),
            '\u{178}' => Some(0x9f),
            _ => None,
        }
    }
}
