#![no_main]
use libfuzzer_sys::fuzz_target;

use bookstay::domain::dates::StayDates;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (check_in, check_out) = input.split_once('\n').unwrap_or((input, input));
    if let Ok(dates) = StayDates::parse(check_in, check_out) {
        let _ = dates.nights();
        let _ = dates.validate();
    }
});
