//! Classification + normalization benchmark
//!
//! Both paths sit on the render loop (each dashboard cell classifies at
//! draw time), so they should stay comfortably sub-microsecond.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use soil_report_rust::{classify_ph, classify_phosphorus, normalize_record};

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_ph_sweep", |b| {
        b.iter(|| {
            let mut ph = 3.0;
            while ph < 11.0 {
                black_box(classify_ph(black_box(ph)));
                ph += 0.1;
            }
        })
    });

    c.bench_function("classify_phosphorus_both_methods", |b| {
        b.iter(|| {
            black_box(classify_phosphorus(black_box(12.0), black_box(8.0)));
            black_box(classify_phosphorus(black_box(12.0), black_box(6.0)));
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    let row = json!({
        "id": "row-1",
        "pot_name": "Field A",
        "prediction": "Loamy",
        "recommended_crop": "maize",
        "n": 24.0,
        "p": 16.0,
        "k": 52.0,
        "ph_level": 6.9,
        "companions": ["beans", "squash"],
        "avoids": ["tomato"],
        "image_url": "https://storage.example/soil/042.jpg",
        "created_at": "2024-03-01T10:30:00Z"
    });

    c.bench_function("normalize_backend_row", |b| {
        b.iter(|| black_box(normalize_record(black_box(&row))))
    });
}

criterion_group!(benches, bench_classify, bench_normalize);
criterion_main!(benches);
