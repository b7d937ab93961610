use serde::{Deserialize, Serialize};

/// Letter class of a voucher. Determines whether VAT is discriminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoucherClass {
    /// A: RI issuer to RI/MT customer, VAT discriminated.
    A,
    /// B: RI issuer to end consumers and exempt customers.
    B,
    /// C: issued by monotributo and exempt issuers.
    C,
}

/// Kind of fiscal document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Factura.
    Invoice,
    /// Nota de débito.
    DebitNote,
    /// Nota de crédito.
    CreditNote,
}

/// Legal voucher type (tipo de comprobante).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoucherType {
    /// 1: Factura A.
    #[serde(rename = "FC_A")]
    FcA,
    /// 2: Nota de Débito A.
    #[serde(rename = "ND_A")]
    NdA,
    /// 3: Nota de Crédito A.
    #[serde(rename = "NC_A")]
    NcA,
    /// 6: Factura B.
    #[serde(rename = "FC_B")]
    FcB,
    /// 7: Nota de Débito B.
    #[serde(rename = "ND_B")]
    NdB,
    /// 8: Nota de Crédito B.
    #[serde(rename = "NC_B")]
    NcB,
    /// 11: Factura C.
    #[serde(rename = "FC_C")]
    FcC,
    /// 12: Nota de Débito C.
    #[serde(rename = "ND_C")]
    NdC,
    /// 13: Nota de Crédito C.
    #[serde(rename = "NC_C")]
    NcC,
}

impl VoucherType {
    pub const ALL: [VoucherType; 9] = [
        Self::FcA,
        Self::NdA,
        Self::NcA,
        Self::FcB,
        Self::NdB,
        Self::NcB,
        Self::FcC,
        Self::NdC,
        Self::NcC,
    ];

    /// Compose a voucher type from its kind and class.
    pub fn new(kind: DocumentKind, class: VoucherClass) -> Self {
        match (kind, class) {
            (DocumentKind::Invoice, VoucherClass::A) => Self::FcA,
            (DocumentKind::DebitNote, VoucherClass::A) => Self::NdA,
            (DocumentKind::CreditNote, VoucherClass::A) => Self::NcA,
            (DocumentKind::Invoice, VoucherClass::B) => Self::FcB,
            (DocumentKind::DebitNote, VoucherClass::B) => Self::NdB,
            (DocumentKind::CreditNote, VoucherClass::B) => Self::NcB,
            (DocumentKind::Invoice, VoucherClass::C) => Self::FcC,
            (DocumentKind::DebitNote, VoucherClass::C) => Self::NdC,
            (DocumentKind::CreditNote, VoucherClass::C) => Self::NcC,
        }
    }

    pub fn class(&self) -> VoucherClass {
        match self {
            Self::FcA | Self::NdA | Self::NcA => VoucherClass::A,
            Self::FcB | Self::NdB | Self::NcB => VoucherClass::B,
            Self::FcC | Self::NdC | Self::NcC => VoucherClass::C,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::FcA | Self::FcB | Self::FcC => DocumentKind::Invoice,
            Self::NdA | Self::NdB | Self::NdC => DocumentKind::DebitNote,
            Self::NcA | Self::NcB | Self::NcC => DocumentKind::CreditNote,
        }
    }

    /// Persisted short code (e.g. "FC_B").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FcA => "FC_A",
            Self::NdA => "ND_A",
            Self::NcA => "NC_A",
            Self::FcB => "FC_B",
            Self::NdB => "ND_B",
            Self::NcB => "NC_B",
            Self::FcC => "FC_C",
            Self::NdC => "ND_C",
            Self::NcC => "NC_C",
        }
    }

    /// AFIP numeric code (`CbteTipo`), also the `tipoCmp` of the fiscal QR.
    pub fn code(&self) -> u16 {
        match self {
            Self::FcA => 1,
            Self::NdA => 2,
            Self::NcA => 3,
            Self::FcB => 6,
            Self::NdB => 7,
            Self::NcB => 8,
            Self::FcC => 11,
            Self::NdC => 12,
            Self::NcC => 13,
        }
    }

    /// Parse from AFIP numeric code.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Parse from persisted short code.
    pub fn from_str_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(code))
    }

    /// Whether VAT is shown as its own amount on this voucher.
    pub fn discriminates_vat(&self) -> bool {
        self.class() == VoucherClass::A
    }
}

impl std::fmt::Display for VoucherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
