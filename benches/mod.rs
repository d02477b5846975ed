use core::fmt;
use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use laureline_cmdline::config::Config;
use laureline_cmdline::storage::PersistError;
use laureline_cmdline::system::{Cmdline, Platform, Uptime};

/// Board that discards output.
struct NullPlatform;

impl fmt::Write for NullPlatform {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        black_box(s);
        Ok(())
    }
}

impl Platform for NullPlatform {
    fn persist_config(&mut self, _config: &Config) -> Result<(), PersistError> {
        Ok(())
    }

    fn reset(&mut self) {}

    fn delay_ms(&mut self, _ms: u32) {}

    fn uptime(&self) -> Uptime {
        Uptime::from_secs(86_400 + 42)
    }

    fn system_frequency(&self) -> u32 {
        72_000_000
    }

    fn board_revision(&self) -> &'static str {
        "bench"
    }
}

fn enabled() -> Cmdline<NullPlatform> {
    let mut cli = Cmdline::new(NullPlatform, Config::factory());
    cli.feed(b'\n');
    cli
}

fn bench_set_ip(c: &mut Criterion) {
    let line = b"set ip_addr=192.168.100.200\r";
    let mut group = c.benchmark_group("cmdline");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("set_ip_addr", |b| {
        let mut cli = enabled();
        b.iter(|| cli.feed_bytes(black_box(line)))
    });
    group.finish();
}

fn bench_list(c: &mut Criterion) {
    c.bench_function("set_list", |b| {
        let mut cli = enabled();
        b.iter(|| cli.feed_bytes(black_box(b"set *\n")))
    });
}

fn bench_edit_line(c: &mut Criterion) {
    // type, erase and discard a full line
    let mut input = vec![b'x'; 64];
    input.extend(std::iter::repeat_n(0x08, 64));
    input.push(0x0C);

    let mut group = c.benchmark_group("cmdline");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("edit_line", |b| {
        let mut cli = enabled();
        b.iter(|| cli.feed_bytes(black_box(&input)))
    });
    group.finish();
}

criterion_group!(benches, bench_set_ip, bench_list, bench_edit_line);
criterion_main!(benches);
