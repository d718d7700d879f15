use serde::{Deserialize, Serialize};

use crate::storage::encryption::KdfParams;

/// User-configurable settings, stored inside the encrypted ledger file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol prefixed to formatted amounts (e.g., "₹", "$", "€").
    pub currency_symbol: String,

    /// Number of decimals shown when formatting amounts for display.
    pub decimal_places: u8,

    /// Argon2id parameters used when hashing newly registered passwords.
    /// Existing credentials keep the parameters they were hashed with.
    pub credential_kdf: KdfParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            decimal_places: 2,
            credential_kdf: KdfParams::default(),
        }
    }
}

impl Settings {
    /// Render an amount for display: symbol, thousands separators, fixed decimals.
    ///
    /// `format_amount(-1234.5)` with defaults gives `"-₹1,234.50"`.
    pub fn format_amount(&self, value: f64) -> String {
        let decimals = usize::from(self.decimal_places);
        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        // "-0.00" is not a useful display value
        let is_negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
        let sign = if is_negative { "-" } else { "" };

        match frac_part {
            Some(frac) => format!("{sign}{}{grouped}.{frac}", self.currency_symbol),
            None => format!("{sign}{}{grouped}", self.currency_symbol),
        }
    }
}
