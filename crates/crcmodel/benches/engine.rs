//! CRC engine throughput benchmarks.
//!
//! Run: `cargo bench -p crcmodel -- engine`
//!
//! Compares sequential and fanned-out processing across register classes.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use crcmodel::{EngineConfig, FanOut, factory, reference};

const CASES: &[(&str, usize)] = &[("s", 256), ("m", 4 * 1024), ("l", 64 * 1024), ("xl", 1024 * 1024)];

const ALGORITHMS: &[&str] = &["CRC-16/XMODEM", "CRC-32/ISO-HDLC", "CRC-64/XZ", "CRC-82/DARC"];

fn bench_data(len: usize) -> Vec<u8> {
  (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
}

fn bench_engine(c: &mut Criterion) {
  for &name in ALGORITHMS {
    let mut group = c.benchmark_group(format!("engine/{name}"));
    for &(label, len) in CASES {
      let data = bench_data(len);
      group.throughput(Throughput::Bytes(len as u64));

      for mode in [FanOut::Sequential, FanOut::Parallel] {
        let config = EngineConfig::default().with_fan_out(mode);
        let Ok(descriptor) = factory::Descriptor::named(name) else {
          continue;
        };
        let Ok(crc) = factory::create_with_config(&descriptor, config) else {
          continue;
        };
        group.bench_with_input(BenchmarkId::new(mode.as_str(), label), &data, |b, data| {
          b.iter(|| core::hint::black_box(crc.checksum(data)));
        });
      }
    }
    group.finish();
  }
}

fn bench_reference(c: &mut Criterion) {
  let mut group = c.benchmark_group("reference/CRC-32/ISO-HDLC");
  let params = crcmodel::catalog::CRC_32_ISO_HDLC.params();
  let data = bench_data(4 * 1024);
  group.throughput(Throughput::Bytes(data.len() as u64));
  group.bench_function("bitwise", |b| {
    b.iter(|| core::hint::black_box(reference::bitwise(&params, &data)));
  });
  group.bench_function("bytewise", |b| {
    b.iter(|| core::hint::black_box(reference::bytewise(&params, &data)));
  });
  group.finish();
}

criterion_group!(benches, bench_engine, bench_reference);
criterion_main!(benches);
