//! AFIP VAT rate (alícuota) identifiers used in electronic invoice requests.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// AFIP `AlicIva.Id` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IvaRateCode {
    /// 3: 0%.
    Zero,
    /// 4: 10.5%.
    Reduced,
    /// 5: 21%.
    General,
    /// 6: 27%.
    Increased,
    /// 8: 5%.
    Five,
    /// 9: 2.5%.
    TwoPointFive,
}

impl IvaRateCode {
    /// AFIP numeric identifier.
    pub fn code(&self) -> u8 {
        match self {
            Self::Zero => 3,
            Self::Reduced => 4,
            Self::General => 5,
            Self::Increased => 6,
            Self::Five => 8,
            Self::TwoPointFive => 9,
        }
    }

    /// Rate percentage.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Zero => dec!(0),
            Self::Reduced => dec!(10.5),
            Self::General => dec!(21),
            Self::Increased => dec!(27),
            Self::Five => dec!(5),
            Self::TwoPointFive => dec!(2.5),
        }
    }

    /// Parse from AFIP numeric identifier.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            3 => Some(Self::Zero),
            4 => Some(Self::Reduced),
            5 => Some(Self::General),
            6 => Some(Self::Increased),
            8 => Some(Self::Five),
            9 => Some(Self::TwoPointFive),
            _ => None,
        }
    }
}

/// Map a VAT rate to its AFIP identifier. `None` for rates AFIP does not list.
pub fn iva_rate_code(rate: Decimal) -> Option<IvaRateCode> {
    [
        IvaRateCode::Zero,
        IvaRateCode::Reduced,
        IvaRateCode::General,
        IvaRateCode::Increased,
        IvaRateCode::Five,
        IvaRateCode::TwoPointFive,
    ]
    .into_iter()
    .find(|c| c.rate() == rate)
}
