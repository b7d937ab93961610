#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; errors are fine.
        let _ = factura::qr::decode_fiscal_qr_url(s);
        let _ = factura::voucher::determine_voucher_type_from_codes(s, Some(s));
    }
});
