use serde::{Deserialize, Serialize};

/// AFIP receiver document types (`DocTipo`, `tipoDocRec` in the QR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceiverDocType {
    /// 80.
    Cuit,
    /// 86.
    Cuil,
    /// 87.
    Cdi,
    /// 94.
    Pasaporte,
    /// 96.
    Dni,
    /// 99: unidentified end consumer.
    SinIdentificar,
}

impl ReceiverDocType {
    pub fn code(&self) -> u16 {
        match self {
            Self::Cuit => 80,
            Self::Cuil => 86,
            Self::Cdi => 87,
            Self::Pasaporte => 94,
            Self::Dni => 96,
            Self::SinIdentificar => 99,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            80 => Some(Self::Cuit),
            86 => Some(Self::Cuil),
            87 => Some(Self::Cdi),
            94 => Some(Self::Pasaporte),
            96 => Some(Self::Dni),
            99 => Some(Self::SinIdentificar),
            _ => None,
        }
    }
}
