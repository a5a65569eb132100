#![no_main]
use issuelink_core::IssueMatcher;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Split input at a valid char boundary: first half = project prefix,
        // second half = commit message
        let mut split_pos = s.len() / 2;
        while !s.is_char_boundary(split_pos) {
            split_pos += 1;
        }
        let (project, message) = s.split_at(split_pos);
        if let Ok(matcher) = IssueMatcher::new(project) {
            let _ = matcher.extract(message);
        }
    }
});
