#![no_main]
use issuelink_core::extract_instance_name;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must never panic or error, whatever the input shape
        let name = extract_instance_name(s);
        // The first label never contains a dot
        assert!(!name.contains('.'));
    }
});
