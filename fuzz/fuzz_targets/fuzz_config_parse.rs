#![no_main]
use libfuzzer_sys::fuzz_target;
use tilelog::{Config, Logger};

fuzz_target!(|data: &str| {
    // Must not panic on any config content, and any parsed config must build
    if let Ok(config) = Config::parse(data) {
        let mut logger = Logger::builder()
            .console(std::io::sink())
            .config(&config)
            .build();
        logger.info(format_args!("fuzz\n"));
    }
});
