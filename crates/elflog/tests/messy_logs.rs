use elflog::{ElfParser, Section};

#[test]
fn test_truncated_report() {
    // Attachment cut off in the middle of the call stack.
    let input = "EurekaLog 7.7\n\
                 Exception:\n\
                 \x20 2.5 Type : EOutOfMemory\n\
                 Call Stack Information:\n\
                 ----------------------------------------\n\
                 |Methods |Details|Stack   |\n\
                 ----------------------------------------\n\
                 |*Exception Thread: ID=1";

    let log = ElfParser::new().parse(input);
    let stack = log.call_stack().unwrap();
    assert_eq!(stack.summary, "*Exception Thread: ID=1\n");
    assert!(stack.frames.is_empty());
    assert_eq!(
        log.exception().unwrap().get("type_"),
        Some("EOutOfMemory")
    );
}

#[test]
fn test_free_text_inside_key_value_section() {
    let input = "Computer:\n\
                 this line is a comment left by support\n\
                 \x20 5.1 Name : WS-0042\n\
                 5.2 Total Memory 16303 Mb\n\
                 \x20 5.3 Free Memory : 9114 Mb\n";

    let log = ElfParser::new().parse(input);
    let computer = log.record(Section::Computer).unwrap();
    assert_eq!(computer.get("name"), Some("WS-0042"));
    assert_eq!(computer.get("total_memory"), None);
    assert_eq!(computer.get("free_memory"), Some("9114 Mb"));
}

#[test]
fn test_unknown_sections_kept_raw_only() {
    let input = "Thread Pool:\n  worker 1 idle\nUser:\n  3.1 ID : 5\n";
    let log = ElfParser::new().parse(input);

    assert_eq!(log.section_names(true), vec!["Thread Pool", "User"]);
    assert_eq!(log.section_names(false), vec!["user"]);
    assert_eq!(
        log.raw_section("thread_pool").unwrap().lines,
        vec!["  worker 1 idle"]
    );
}

#[test]
fn test_binary_noise_does_not_panic() {
    let noise: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let mut buffer = noise.clone();
    buffer.extend_from_slice(b"Eureka\\r\\nNetwork:\\r\\n\xff\xfe 7.1 IP Address : -");
    buffer.extend_from_slice(&noise);

    let log = ElfParser::new().parse_stream(&buffer).unwrap();
    assert!(log.table(Section::Network).unwrap().is_empty());
}
