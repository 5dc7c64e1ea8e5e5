#![no_main]
use libfuzzer_sys::fuzz_target;

// Small lengths only: the point is the write loop's edge cases, not disk
// throughput.
fuzz_target!(|input: (u16, u8)| {
    let (length, byte) = input;
    let path = std::env::temp_dir().join(format!("fuzz-fill-{}.bin", std::process::id()));

    if fillfile::generate(&path, u64::from(length), byte).is_ok() {
        let data = std::fs::read(&path).expect("written file must be readable");
        assert_eq!(data.len(), usize::from(length));
        assert!(data.iter().all(|&b| b == byte));
    }

    std::fs::remove_file(&path).ok();
});
