//! Sanitization Performance Benchmarks
//!
//! Measures the cost of reducing Okta list pages to primitive fields, which
//! runs on every record of every list tool call.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use okta_mcp_server::sanitize::{sanitize, sanitize_owned};
use serde_json::{Value, json};

fn okta_user(index: usize) -> Value {
    json!({
        "id": format!("00u{:06}", index),
        "status": "ACTIVE",
        "created": "2024-01-10T18:21:07.000Z",
        "activated": null,
        "statusChanged": "2024-01-10T18:21:07.000Z",
        "lastLogin": null,
        "lastUpdated": "2024-02-01T09:00:00.000Z",
        "passwordChanged": null,
        "type": {"id": "oty1"},
        "profile": {
            "firstName": "Isaac",
            "lastName": "Brock",
            "email": format!("user{}@example.com", index),
            "login": format!("user{}@example.com", index),
            "mobilePhone": null
        },
        "credentials": {
            "password": {},
            "provider": {"type": "OKTA", "name": "OKTA"}
        },
        "_links": {
            "self": {"href": format!("https://dev-123456.okta.com/api/v1/users/00u{:06}", index)},
            "deactivate": {
                "href": format!("https://dev-123456.okta.com/api/v1/users/00u{:06}/lifecycle/deactivate", index),
                "method": "POST"
            }
        }
    })
}

fn okta_app(index: usize) -> Value {
    json!({
        "id": format!("0oa{:06}", index),
        "name": "bookmark",
        "label": format!("Intranet {}", index),
        "status": "ACTIVE",
        "signOnMode": "BOOKMARK",
        "features": [],
        "accessibility": {"selfService": false, "errorRedirectUrl": null},
        "visibility": {"autoSubmitToolbar": false, "hide": {"iOS": false, "web": false}},
        "settings": {"app": {"requestIntegration": false, "url": "https://intranet.example.com"}},
        "_embedded": {"user": okta_user(index)}
    })
}

fn bench_page_sanitization(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_sanitization");

    for size in [1, 20, 200].iter() {
        let users: Vec<Value> = (0..*size).map(okta_user).collect();
        let apps: Vec<Value> = (0..*size).map(okta_app).collect();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("users_borrowed", size), &users, |b, users| {
            b.iter(|| {
                let data: Vec<Value> = users.iter().filter_map(sanitize).collect();
                black_box(data)
            })
        });

        group.bench_with_input(BenchmarkId::new("users_owned", size), &users, |b, users| {
            b.iter_batched(
                || users.clone(),
                |users| {
                    let data: Vec<Value> = users.into_iter().filter_map(sanitize_owned).collect();
                    black_box(data)
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("applications", size), &apps, |b, apps| {
            b.iter(|| {
                let data: Vec<Value> = apps.iter().filter_map(sanitize).collect();
                black_box(data)
            })
        });
    }

    group.finish();
}

fn bench_nested_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_sequences");

    let wide = Value::Array((0..500).map(|i| json!([i, {"id": i, "tags": ["a", "b"]}])).collect());

    group.bench_function("sequence_of_sequences", |b| {
        b.iter(|| black_box(sanitize(black_box(&wide))))
    });

    group.finish();
}

criterion_group!(benches, bench_page_sanitization, bench_nested_sequences);
criterion_main!(benches);
