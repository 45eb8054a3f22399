//! Benchmarks for HTML parsing and generation.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quire::Codec;

/// Generate HTML with the given number of paragraphs and list items.
fn generate_html(paragraphs: usize, items: usize) -> String {
    let mut html = String::with_capacity(paragraphs * 120 + items * 40);
    html.push_str("<h1>Document Title</h1>");
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<p>Paragraph {i} with <strong>bold <em>italic</em></strong> and <a href=\"https://example.com/{i}\">a link</a></p>"
        ));
    }
    html.push_str("<ul>");
    for i in 0..items {
        html.push_str(&format!("<li>item <code>{i}</code></li>"));
    }
    html.push_str("</ul><pre>fn main() {}\n</pre>");
    html
}

fn bench_parse(c: &mut Criterion) {
    let codec = Codec::default();
    let mut group = c.benchmark_group("html_to_document");

    for (paragraphs, items) in [(10, 5), (100, 20), (1000, 100)] {
        let html = generate_html(paragraphs, items);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("html", format!("{paragraphs}p_{items}li")),
            &html,
            |b, html| b.iter(|| codec.html_to_document(html)),
        );
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let codec = Codec::default();
    let document = codec
        .html_to_document(&generate_html(100, 20))
        .expect("benchmark input parses");

    c.bench_function("document_to_html_100p", |b| {
        b.iter(|| codec.document_to_html(&document));
    });
}

criterion_group!(benches, bench_parse, bench_generate);
criterion_main!(benches);
