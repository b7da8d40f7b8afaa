#![no_main]

use chrono::{DateTime, Utc};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Any file name is dated, undated, or an invalid date; never a panic
        if let Ok(Some(dated)) = postsweep::DatedFile::parse(name) {
            assert!(dated.name().ends_with(".md"));
            let _ = postsweep::domain::value_objects::age_days(DateTime::<Utc>::UNIX_EPOCH, dated.date());
        }
    }
});
