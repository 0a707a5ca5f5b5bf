#![no_main]
use libfuzzer_sys::fuzz_target;

use bookstay::config::types::Config;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = serde_yml::from_str::<Config>(input) {
        let _ = config.fees.service_fee_policy();
    }
});
