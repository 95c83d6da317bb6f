use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use papr::{from_str, parse, serialize, to_string};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Clone)]
struct Catalog {
    title: String,
    products: Vec<Product>,
}

fn catalog(size: u32) -> Catalog {
    Catalog {
        title: "Spring: clearance".to_string(),
        products: (0..size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect(),
    }
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 100, 500].iter() {
        let text = to_string(&catalog(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [10, 100, 500].iter() {
        let root = parse(&to_string(&catalog(*size)).unwrap()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &root, |b, root| {
            b.iter(|| serialize(black_box(root)))
        });
    }
    group.finish();
}

fn benchmark_typed(c: &mut Criterion) {
    let data = catalog(100);
    let text = to_string(&data).unwrap();

    c.bench_function("to_string_catalog", |b| b.iter(|| to_string(black_box(&data))));
    c.bench_function("from_str_catalog", |b| {
        b.iter(|| from_str::<Catalog>(black_box(&text)))
    });
}

fn benchmark_paragraphs(c: &mut Criterion) {
    let text: String = std::iter::once("desc: start\n".to_string())
        .chain((0..200).map(|i| format!("      line {} of a long paragraph\n", i)))
        .collect();

    c.bench_function("parse_long_paragraph", |b| b.iter(|| parse(black_box(&text))));
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_serialize,
    benchmark_typed,
    benchmark_paragraphs
);
criterion_main!(benches);
