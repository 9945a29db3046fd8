#![no_main]
use libfuzzer_sys::fuzz_target;
use yj1_decode::parsing::{BlockHeaderParser, ContainerHeaderParser};

fuzz_target!(|data: &[u8]| {
    let _ = ContainerHeaderParser::parse(data);
    let _ = BlockHeaderParser::parse(data);
    let _ = BlockHeaderParser::parse_lengths(data);
});
