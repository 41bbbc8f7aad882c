use betasdk_json::{create_from_bytes, create_from_bytes_as, serialize_to_bytes};
use betasdk_models::{create_entity_from_discriminator_value, SitePage};
use betasdk_test_utils::fixtures::populated_site_page;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_serialize(c: &mut Criterion) {
    let page = populated_site_page();

    c.bench_function("site_page/serialize", |b| {
        b.iter(|| {
            let bytes = serialize_to_bytes(black_box(&page)).expect("serialize page");
            black_box(bytes.len());
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    let bytes = serialize_to_bytes(&populated_site_page()).expect("serialize page");

    c.bench_function("site_page/parse_typed", |b| {
        b.iter(|| {
            let page = create_from_bytes_as::<SitePage>(black_box(&bytes)).expect("parse page");
            black_box(page);
        });
    });

    c.bench_function("site_page/parse_via_registry", |b| {
        b.iter(|| {
            let model = create_from_bytes(black_box(&bytes), create_entity_from_discriminator_value)
                .expect("parse page");
            black_box(model);
        });
    });
}

criterion_group!(benches, bench_serialize, bench_parse);
criterion_main!(benches);
