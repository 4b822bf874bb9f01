#![no_main]

use libfuzzer_sys::fuzz_target;

use fibmp_core::capacity::capacity_for;
use fibmp_core::DefaultFactory;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // First 4 bytes as n, capped at 20000 so linear stays cheap.
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 20_000;
    let bound = capacity_for(n).unwrap();

    let mut reference = None;
    for strategy in DefaultFactory::new().all() {
        let run = strategy.compute_detailed(n).unwrap();
        assert!(run.peak_len <= bound, "{} outgrew capacity at n={n}", strategy.name());
        match &reference {
            None => reference = Some(run.number),
            Some(expected) => assert_eq!(&run.number, expected, "{} at n={n}", strategy.name()),
        }
    }
});
