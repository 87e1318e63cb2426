//! German number and noun formatting for report texts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};
use crate::trend::TrendValue;

/// Rendered in place of a missing number.
pub const NO_DATA: &str = "Keine Daten";

/// Nouns that appear next to a count in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormattableNoun {
    Infections,
    Deaths,
    District,
    Days,
    Beds,
}

impl FormattableNoun {
    pub fn singular(self) -> &'static str {
        match self {
            FormattableNoun::Infections => "Neuinfektion",
            FormattableNoun::Deaths => "Todesfall",
            FormattableNoun::District => "Ort",
            FormattableNoun::Days => "Tag",
            FormattableNoun::Beds => "Bett",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            FormattableNoun::Infections => "Neuinfektionen",
            FormattableNoun::Deaths => "Todesfälle",
            FormattableNoun::District => "Orte",
            FormattableNoun::Days => "Tagen",
            FormattableNoun::Beds => "Betten",
        }
    }
}

impl fmt::Display for FormattableNoun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormattableNoun::Infections => "INFECTIONS",
            FormattableNoun::Deaths => "DEATHS",
            FormattableNoun::District => "DISTRICT",
            FormattableNoun::Days => "DAYS",
            FormattableNoun::Beds => "BEDS",
        };
        f.write_str(name)
    }
}

impl FromStr for FormattableNoun {
    type Err = FormatError;

    fn from_str(s: &str) -> FormatResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFECTIONS" | "NEW_INFECTIONS" => Ok(FormattableNoun::Infections),
            "DEATHS" => Ok(FormattableNoun::Deaths),
            "DISTRICT" => Ok(FormattableNoun::District),
            "DAYS" => Ok(FormattableNoun::Days),
            "BEDS" => Ok(FormattableNoun::Beds),
            _ => Err(FormatError::UnknownNoun(s.to_string())),
        }
    }
}

/// `1121` → `1.121`, missing → [`NO_DATA`].
pub fn format_int(number: Option<i64>) -> String {
    let Some(number) = number else {
        return NO_DATA.to_string();
    };

    let digits = number.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if number < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Two decimals with a decimal comma: `1.21` → `1,21`, missing → [`NO_DATA`].
pub fn format_float(number: Option<f64>) -> String {
    match number {
        Some(number) => format!("{number:.2}").replace('.', ","),
        None => NO_DATA.to_string(),
    }
}

/// Arrow for a trend; no trend renders nothing.
pub fn format_data_trend(value: Option<TrendValue>) -> &'static str {
    match value {
        Some(TrendValue::Up) => "↗",
        Some(TrendValue::Same) => "➡",
        Some(TrendValue::Down) => "↘",
        None => "",
    }
}

/// `count` followed by the singular or plural noun. Zero days reads "heute".
pub fn format_noun(count: i64, noun: FormattableNoun) -> String {
    match (count, noun) {
        (0, FormattableNoun::Days) => "heute".to_string(),
        (1, _) => format!("{} {}", format_int(Some(count)), noun.singular()),
        _ => format!("{} {}", format_int(Some(count)), noun.plural()),
    }
}
