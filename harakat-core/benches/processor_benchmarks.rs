//! Performance benchmarks for TextProcessor
//!
//! Run with: cargo bench --bench processor_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use harakat_core::TextProcessor;
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base_sentence = "الطالب ذهب الى المدرسه ودرس الرياضيات والعلوم. ";
    let repeat_count = size / base_sentence.len() + 1;

    let mut text = base_sentence.repeat(repeat_count);
    // Truncate on a char boundary
    let cut = (0..=size.min(text.len()))
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    text.truncate(cut);
    text
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");

    let processor = TextProcessor::new().unwrap();

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("process", size), &text, |b, text| {
            b.iter(|| processor.process_text(black_box(text)));
        });
    }

    group.finish();
}

fn bench_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("passes");

    let processor = TextProcessor::new().unwrap();
    let text = generate_text(102_400);
    let corrected = processor.corrector().correct(&text).text;

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("correct", |b| {
        b.iter(|| processor.corrector().correct(black_box(&text)))
    });
    group.bench_function("mark", |b| {
        b.iter(|| processor.marker().mark(black_box(&corrected)))
    });

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_passes);
criterion_main!(benches);
