#![no_main]
use libfuzzer_sys::fuzz_target;
use tilelog::TimePrefix;

fuzz_target!(|data: &str| {
    // Must not panic on any strftime pattern
    let prefix = TimePrefix::new(data);
    let _ = prefix.render();
});
