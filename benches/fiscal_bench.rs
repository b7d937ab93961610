use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use factura::core::*;
use factura::qr::*;
use factura::tax::resolve_applicable_taxes;
use factura::voucher::*;

fn catalog() -> Vec<TaxDefinition> {
    vec![
        TaxDefinitionBuilder::new("iva21", "IVA21", TaxType::Iva, dec!(21))
            .applies_to(&[VatCondition::ResponsableInscripto])
            .build(),
        TaxDefinitionBuilder::new("iibb", "PERC_IIBB", TaxType::Perception, dec!(3.5))
            .applies_to(&[VatCondition::ResponsableInscripto])
            .build(),
        TaxDefinitionBuilder::new("int", "INT", TaxType::Internal, dec!(8)).build(),
    ]
}

fn build_document(lines: usize) -> SaleDocument {
    let issuer = IssuerProfileBuilder::new(
        "30-71234567-1",
        "Benchmark SA",
        VatCondition::ResponsableInscripto,
    )
    .sales_point(3)
    .build()
    .unwrap();
    let taxes = catalog();

    let mut builder = SaleDocumentBuilder::new(issuer, DocumentKind::Invoice)
        .customer(VatCondition::ResponsableInscripto);
    for i in 1..=lines {
        builder = builder.add_line(
            SaleLine::new(Decimal::from(i % 7 + 1), dec!(1234.56), taxes.clone())
                .discount(dec!(5)),
        );
    }
    builder.build().unwrap()
}

fn bench_line_item(c: &mut Criterion) {
    let input = LineItemBuilder::new(dec!(3), dec!(999.99))
        .discount(dec!(12.5))
        .tax_rate(dec!(21))
        .discriminate_vat(true)
        .build()
        .unwrap();
    c.bench_function("calculate_line_item", |b| {
        b.iter(|| black_box(calculate_line_item(black_box(&input))));
    });
}

fn bench_resolve_taxes(c: &mut Criterion) {
    let product = catalog();
    let entity = catalog();
    c.bench_function("resolve_applicable_taxes", |b| {
        b.iter(|| {
            black_box(resolve_applicable_taxes(
                black_box(&product),
                Some(black_box(entity.as_slice())),
                VatCondition::ResponsableInscripto,
                black_box(dec!(1020.30)),
            ))
        });
    });
}

fn bench_voucher_type(c: &mut Criterion) {
    c.bench_function("determine_voucher_type", |b| {
        b.iter(|| {
            for issuer in VatCondition::ALL {
                for customer in VatCondition::ALL {
                    black_box(determine_voucher_type(black_box(issuer), Some(customer)));
                }
            }
        });
    });
}

fn bench_document_10_lines(c: &mut Criterion) {
    c.bench_function("sale_document_10_lines", |b| {
        b.iter(|| black_box(build_document(10)));
    });
}

fn bench_document_1000_lines(c: &mut Criterion) {
    c.bench_function("sale_document_1000_lines", |b| {
        b.iter(|| black_box(build_document(1000)));
    });
}

fn bench_qr_url(c: &mut Criterion) {
    let doc = build_document(10);
    let input = FiscalQrInput {
        cuit: "30-71234567-1".into(),
        voucher_type_code: doc.voucher_type.code(),
        sales_point: 3,
        voucher_number: 1542,
        amount: doc.totals.total_amount,
        document_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        customer_doc_type: ReceiverDocType::Cuit.code(),
        customer_doc_number: Some("20-12345678-6".into()),
        cae: "71234567890123".into(),
    };
    c.bench_function("build_fiscal_qr_url", |b| {
        b.iter(|| black_box(build_fiscal_qr_url(black_box(&input))));
    });

    let url = build_fiscal_qr_url(&input).unwrap();
    c.bench_function("decode_fiscal_qr_url", |b| {
        b.iter(|| black_box(decode_fiscal_qr_url(black_box(&url))));
    });
}

criterion_group!(
    benches,
    bench_line_item,
    bench_resolve_taxes,
    bench_voucher_type,
    bench_document_10_lines,
    bench_document_1000_lines,
    bench_qr_url,
);
criterion_main!(benches);
