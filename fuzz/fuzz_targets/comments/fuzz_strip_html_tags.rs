// Run with: cargo fuzz run fuzz_strip_html_tags
// Purpose: stripping must be idempotent and never grow the input.
#![no_main]

use forum::domain::strip_html_tags;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let once = strip_html_tags(content);
        assert!(once.len() <= content.len());
        assert_eq!(strip_html_tags(&once), once);
    }
});
