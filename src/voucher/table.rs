//! Static voucher-type determination table.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::{DocumentKind, VoucherType};
use crate::core::VatCondition;
use crate::core::VatCondition::{
    ConsumidorFinal as CF, Exento as EX, Monotributo as MT, ResponsableInscripto as RI,
};

/// One row of the determination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherRule {
    pub issuer: VatCondition,
    /// `None`: no identified customer.
    pub customer: Option<VatCondition>,
    pub voucher_type: VoucherType,
    pub discriminate_vat: bool,
}

/// Outcome of a voucher-type lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherDetermination {
    pub voucher_type: VoucherType,
    pub discriminate_vat: bool,
    /// True when the pair was not in the table and [`DEFAULT_DETERMINATION`] was used.
    pub from_default: bool,
}

/// Used for any (issuer, customer) pair outside the table: Factura B, VAT bundled.
pub const DEFAULT_DETERMINATION: VoucherDetermination = VoucherDetermination {
    voucher_type: VoucherType::FcB,
    discriminate_vat: false,
    from_default: true,
};

const fn rule(
    issuer: VatCondition,
    customer: Option<VatCondition>,
    voucher_type: VoucherType,
    discriminate_vat: bool,
) -> VoucherRule {
    VoucherRule {
        issuer,
        customer,
        voucher_type,
        discriminate_vat,
    }
}

/// Every issuer × customer combination AFIP allows.
///
/// Only an RI issuer selling to an RI or MT customer discriminates VAT.
/// `ConsumidorFinal` never issues, so it has no rows as issuer.
pub const VOUCHER_RULES: &[VoucherRule] = &[
    rule(RI, Some(RI), VoucherType::FcA, true),
    rule(RI, Some(MT), VoucherType::FcA, true),
    rule(RI, Some(CF), VoucherType::FcB, false),
    rule(RI, Some(EX), VoucherType::FcB, false),
    rule(RI, None, VoucherType::FcB, false),
    rule(MT, Some(RI), VoucherType::FcC, false),
    rule(MT, Some(MT), VoucherType::FcC, false),
    rule(MT, Some(CF), VoucherType::FcC, false),
    rule(MT, Some(EX), VoucherType::FcC, false),
    rule(MT, None, VoucherType::FcC, false),
    rule(EX, Some(RI), VoucherType::FcC, false),
    rule(EX, Some(MT), VoucherType::FcC, false),
    rule(EX, Some(CF), VoucherType::FcC, false),
    rule(EX, Some(EX), VoucherType::FcC, false),
    rule(EX, None, VoucherType::FcC, false),
];

type RuleKey = (VatCondition, Option<VatCondition>);

static RULE_INDEX: LazyLock<HashMap<RuleKey, VoucherRule>> = LazyLock::new(|| {
    VOUCHER_RULES
        .iter()
        .map(|r| ((r.issuer, r.customer), *r))
        .collect()
});

/// All table rows, for audit and reporting.
pub fn voucher_rules() -> impl Iterator<Item = &'static VoucherRule> {
    VOUCHER_RULES.iter()
}

/// Select the invoice type for an issuer/customer pair.
///
/// Never fails: pairs outside the table resolve to [`DEFAULT_DETERMINATION`]
/// and are logged at `warn`.
pub fn determine_voucher_type(
    issuer: VatCondition,
    customer: Option<VatCondition>,
) -> VoucherDetermination {
    match RULE_INDEX.get(&(issuer, customer)) {
        Some(rule) => VoucherDetermination {
            voucher_type: rule.voucher_type,
            discriminate_vat: rule.discriminate_vat,
            from_default: false,
        },
        None => {
            warn!(
                issuer = %issuer,
                customer = customer.map_or("NONE", |c| c.as_str()),
                fallback = %DEFAULT_DETERMINATION.voucher_type,
                "no voucher rule for condition pair; using default"
            );
            DEFAULT_DETERMINATION
        }
    }
}

/// Same as [`determine_voucher_type`] but for any document kind: a credit or
/// debit note takes the class of the invoice it would accompany.
pub fn determine_voucher_type_for(
    kind: DocumentKind,
    issuer: VatCondition,
    customer: Option<VatCondition>,
) -> VoucherDetermination {
    let determination = determine_voucher_type(issuer, customer);
    VoucherDetermination {
        voucher_type: VoucherType::new(kind, determination.voucher_type.class()),
        ..determination
    }
}

/// Determine the voucher type from persisted condition codes.
///
/// Accepts short (`"RI"`) or long (`"RESPONSABLE_INSCRIPTO"`) codes. A blank
/// customer code means no customer. Unknown codes resolve to
/// [`DEFAULT_DETERMINATION`] with a `warn` log.
pub fn determine_voucher_type_from_codes(
    issuer: &str,
    customer: Option<&str>,
) -> VoucherDetermination {
    let Some(issuer_condition) = VatCondition::from_code(issuer) else {
        warn!(issuer, "unknown issuer VAT condition; using default voucher type");
        return DEFAULT_DETERMINATION;
    };

    let customer_condition = match customer.map(str::trim).filter(|c| !c.is_empty()) {
        None => None,
        Some(code) => match VatCondition::from_code(code) {
            Some(condition) => Some(condition),
            None => {
                warn!(
                    customer = code,
                    "unknown customer VAT condition; using default voucher type"
                );
                return DEFAULT_DETERMINATION;
            }
        },
    };

    determine_voucher_type(issuer_condition, customer_condition)
}
