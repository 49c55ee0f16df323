#![no_main]
use elflog::ElfParser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Both entry points must survive arbitrary bytes.
    let parser = ElfParser::new();
    let _ = parser.parse_stream(data);
    let text = String::from_utf8_lossy(data);
    let _ = parser.parse(&text);
});
