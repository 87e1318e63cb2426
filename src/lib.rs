//! Message text adaptation for messenger bots.
//!
//! Bot messages are written with a handful of HTML tags (`<b>`, `<i>`,
//! `<a href>`, `<p>`). [`adapt_text`] turns them into Unicode look-alike
//! glyphs or into Threema-style `*bold*` / `_italic_` markup, and the
//! [`locale`] helpers format numbers and nouns for German report texts.

pub mod adapt;
pub mod error;
pub mod glyphs;
pub mod locale;
pub mod platform;
pub mod split;
pub mod trend;

pub use adapt::{
    adapt_text, render_bold, render_bold_markdown, render_italic, render_italic_markdown,
    strip_tags,
};
pub use error::{FormatError, FormatResult};
pub use locale::{
    FormattableNoun, NO_DATA, format_data_trend, format_float, format_int, format_noun,
};
pub use platform::{AdaptOptions, Platform};
pub use split::{MessageLimit, split_message, str_bytelen};
pub use trend::{TrendValue, get_trend};
