//! Sans-serif bold and italic look-alikes from the Mathematical
//! Alphanumeric Symbols block.
//!
//! Umlauts map to base glyph + U+0308 COMBINING DIAERESIS: Signal and a few
//! other clients do not render a precomposed styled umlaut.

/// Emphasis style a span is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
}

impl Style {
    fn table(self) -> &'static [(char, &'static str)] {
        match self {
            Style::Bold => BOLD,
            Style::Italic => ITALIC,
        }
    }

    /// Styled replacement for `c`, if the style has one.
    pub fn glyph(self, c: char) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(normal, _)| *normal == c)
            .map(|(_, styled)| *styled)
    }

    /// Substitutes every character that has a styled glyph and keeps the rest.
    pub fn apply(self, text: &str, out: &mut String) {
        for c in text.chars() {
            match self.glyph(c) {
                Some(styled) => out.push_str(styled),
                None => out.push(c),
            }
        }
    }
}

#[rustfmt::skip]
static BOLD: &[(char, &str)] = &[
    ('a', "𝗮"),
    ('b', "𝗯"),
    ('c', "𝗰"),
    ('d', "𝗱"),
    ('e', "𝗲"),
    ('f', "𝗳"),
    ('g', "𝗴"),
    ('h', "𝗵"),
    ('i', "𝗶"),
    ('j', "𝗷"),
    ('k', "𝗸"),
    ('l', "𝗹"),
    ('m', "𝗺"),
    ('n', "𝗻"),
    ('o', "𝗼"),
    ('p', "𝗽"),
    ('q', "𝗾"),
    ('r', "𝗿"),
    ('s', "𝘀"),
    ('t', "𝘁"),
    ('u', "𝘂"),
    ('v', "𝘃"),
    ('w', "𝘄"),
    ('x', "𝘅"),
    ('y', "𝘆"),
    ('z', "𝘇"),
    ('A', "𝗔"),
    ('B', "𝗕"),
    ('C', "𝗖"),
    ('D', "𝗗"),
    ('E', "𝗘"),
    ('F', "𝗙"),
    ('G', "𝗚"),
    ('H', "𝗛"),
    ('I', "𝗜"),
    ('J', "𝗝"),
    ('K', "𝗞"),
    ('L', "𝗟"),
    ('M', "𝗠"),
    ('N', "𝗡"),
    ('O', "𝗢"),
    ('P', "𝗣"),
    ('Q', "𝗤"),
    ('R', "𝗥"),
    ('S', "𝗦"),
    ('T', "𝗧"),
    ('U', "𝗨"),
    ('V', "𝗩"),
    ('W', "𝗪"),
    ('X', "𝗫"),
    ('Y', "𝗬"),
    ('Z', "𝗭"),
    ('0', "𝟬"),
    ('1', "𝟭"),
    ('2', "𝟮"),
    ('3', "𝟯"),
    ('4', "𝟰"),
    ('5', "𝟱"),
    ('6', "𝟲"),
    ('7', "𝟳"),
    ('8', "𝟴"),
    ('9', "𝟵"),
    ('ö', "𝗼\u{308}"),
    ('ü', "𝘂\u{308}"),
    ('ä', "𝗮\u{308}"),
    ('Ö', "𝗢\u{308}"),
    ('Ü', "𝗨\u{308}"),
    ('Ä', "𝗔\u{308}"),
];

#[rustfmt::skip]
static ITALIC: &[(char, &str)] = &[
    ('a', "𝘢"),
    ('b', "𝘣"),
    ('c', "𝘤"),
    ('d', "𝘥"),
    ('e', "𝘦"),
    ('f', "𝘧"),
    ('g', "𝘨"),
    ('h', "𝘩"),
    ('i', "𝘪"),
    ('j', "𝘫"),
    ('k', "𝘬"),
    ('l', "𝘭"),
    ('m', "𝘮"),
    ('n', "𝘯"),
    ('o', "𝘰"),
    ('p', "𝘱"),
    ('q', "𝘲"),
    ('r', "𝘳"),
    ('s', "𝘴"),
    ('t', "𝘵"),
    ('u', "𝘶"),
    ('v', "𝘷"),
    ('w', "𝘸"),
    ('x', "𝘹"),
    ('y', "𝘺"),
    ('z', "𝘻"),
    ('A', "𝘈"),
    ('B', "𝘉"),
    ('C', "𝘊"),
    ('D', "𝘋"),
    ('E', "𝘌"),
    ('F', "𝘍"),
    ('G', "𝘎"),
    ('H', "𝘏"),
    ('I', "𝘐"),
    ('J', "𝘑"),
    ('K', "𝘒"),
    ('L', "𝘓"),
    ('M', "𝘔"),
    ('N', "𝘕"),
    ('O', "𝘖"),
    ('P', "𝘗"),
    ('Q', "𝘘"),
    ('R', "𝘙"),
    ('S', "𝘚"),
    ('T', "𝘛"),
    ('U', "𝘜"),
    ('V', "𝘝"),
    ('W', "𝘞"),
    ('X', "𝘟"),
    ('Y', "𝘠"),
    ('Z', "𝘡"),
    ('ö', "𝘰\u{308}"),
    ('ü', "𝘶\u{308}"),
    ('ä', "𝘢\u{308}"),
    ('Ö', "𝘖\u{308}"),
    ('Ü', "𝘜\u{308}"),
    ('Ä', "𝘈\u{308}"),
];
