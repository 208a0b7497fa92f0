// Run with: cargo fuzz run fuzz_comment_json
// Purpose: fuzz CommentPayload JSON -> CommentDraft -> sanitize -> validate
// Identifier parsing and tag stripping both run on attacker-controlled text here.
#![no_main]

use forum::domain::{CommentDraft, CommentPayload};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = serde_json::from_slice::<CommentPayload>(data) {
        if let Ok(draft) = CommentDraft::try_from(payload) {
            if let Ok(comment) = draft.sanitize().validate() {
                assert!(!comment.content().trim().is_empty());
                assert!(forum::domain::strip_html_tags(comment.content()) == comment.content());
            }
        }
    }
});
