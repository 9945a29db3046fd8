#![no_main]
use libfuzzer_sys::fuzz_target;
use yj1_decode::decompress_into;

fuzz_target!(|data: &[u8]| {
    // Fixed destination cap: containers declaring more than 1MB are
    // rejected by the capacity check, which is itself a code path
    // worth exercising.
    let mut destination = vec![0u8; 1024 * 1024];
    let _ = decompress_into(data, &mut destination);
});
