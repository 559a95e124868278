use std::hint::black_box;

use bytes::Bytes;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use factom_entry_core::{decode_entry_bytes, derive_chain_id, encode_entry, Entry, EntryBuilder};

fn entry_with(ext_ids: usize, content_len: usize) -> Entry {
    EntryBuilder::new(factom_entry_core::Hash::from_bytes([0x42; 32]))
        .ext_ids((0..ext_ids).map(|i| format!("ext-id-{i}").into_bytes()))
        .content(vec![0xabu8; content_len])
        .build()
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for content_len in [0usize, 1024, 10 * 1024] {
        let entry = entry_with(8, content_len);
        let encoded = Bytes::from(encode_entry(&entry).expect("encodable"));
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", content_len), &entry, |b, e| {
            b.iter(|| encode_entry(black_box(e)).expect("encodable"))
        });

        group.bench_with_input(BenchmarkId::new("decode", content_len), &encoded, |b, buf| {
            b.iter(|| decode_entry_bytes(black_box(buf.clone())).expect("decodable"))
        });
    }

    group.finish();
}

fn bench_chain_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_id");

    for count in [0usize, 4, 64] {
        let entry = entry_with(count, 0);
        group.bench_with_input(BenchmarkId::from_parameter(count), &entry.ext_ids, |b, ids| {
            b.iter(|| derive_chain_id(black_box(ids)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec, bench_chain_id);
criterion_main!(benches);
