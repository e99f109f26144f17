#![no_main]
use libfuzzer_sys::fuzz_target;
use tilelog::{Logger, Unresolvable};

fuzz_target!(|data: &str| {
    let mut logger = Logger::builder()
        .console(std::io::sink())
        .resolver(Unresolvable)
        .build();
    let before = logger.level_mask();

    // Enabling never clears bits, and a rejected name changes nothing
    match logger.add_loglevel(data) {
        Ok(()) => assert_eq!(logger.level_mask().bits() & before.bits(), before.bits()),
        Err(_) => assert_eq!(logger.level_mask(), before),
    }
});
