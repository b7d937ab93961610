#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; a formatted CUIT must validate again.
        if let Ok(formatted) = factura::qr::format_cuit(s) {
            assert!(factura::qr::validate_cuit(&formatted).is_ok());
        }
    }
});
