use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tilelog::{Categories, Logger, TimePrefix, Unresolvable};

fn make_logger() -> Logger {
    Logger::builder()
        .categories(Categories::new(["event", "ipc", "tree"]).expect("valid categories"))
        .console(std::io::sink())
        .resolver(Unresolvable)
        .level("ipc")
        .build()
}

fn bench_debug_rejected(c: &mut Criterion) {
    let mut logger = make_logger();

    c.bench_function("Logger::debug (rejected)", |b| {
        b.iter(|| {
            logger.debug(black_box(0b10), format_args!("event {}\n", black_box(42)));
        });
    });
}

fn bench_debug_admitted(c: &mut Criterion) {
    let mut logger = make_logger();

    c.bench_function("Logger::debug (admitted)", |b| {
        b.iter(|| {
            logger.debug(black_box(0b100), format_args!("ipc {}\n", black_box(42)));
        });
    });
}

fn bench_info(c: &mut Criterion) {
    let mut logger = make_logger();

    c.bench_function("Logger::info", |b| {
        b.iter(|| {
            logger.info(format_args!("workspace {} focused\n", black_box(3)));
        });
    });
}

fn bench_time_prefix(c: &mut Criterion) {
    let prefix = TimePrefix::default();

    c.bench_function("TimePrefix::render", |b| {
        b.iter(|| black_box(prefix.render()));
    });
}

criterion_group!(
    benches,
    bench_debug_rejected,
    bench_debug_admitted,
    bench_info,
    bench_time_prefix,
);
criterion_main!(benches);
