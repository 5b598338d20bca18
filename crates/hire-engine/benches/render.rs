use std::hint::black_box;

use chrono::{Days, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};

use hire_engine::{
    count_for_date_and_filter, render_view, Asset, Booking, HireStatus, Snapshot, StatusFilter,
    ViewConfig, ViewType,
};

fn fleet(assets: usize, bookings_per_asset: usize) -> Snapshot {
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let mut snapshot = Snapshot::default();
    for i in 0..assets {
        let on_hire = i % 3 == 0;
        let on = base + Days::new((i % 20) as u64);
        snapshot.assets.push(Asset {
            id: format!("AS-{i:04}"),
            product_type: format!("Product {}", i % 12),
            category: if i % 2 == 0 { "Plant" } else { "Power" }.to_string(),
            status: if on_hire {
                HireStatus::OnHire
            } else {
                HireStatus::Available
            },
            on_hire_date: on_hire.then_some(on),
            off_hire_date: on_hire.then(|| on + Days::new(7)),
            rental_details: None,
            parent_header: format!("hdr-{}", i % 12),
            location: "Depot".to_string(),
        });
        for j in 0..bookings_per_asset {
            let start = base + Days::new((j * 6 + i % 5) as u64);
            snapshot.bookings.push(Booking {
                id: format!("BK-{i:04}-{j}"),
                asset_id: format!("AS-{i:04}"),
                start,
                end: start + Days::new(4),
                title: String::new(),
                booking_type: "hire".to_string(),
                customer: "Acme".to_string(),
                location: String::new(),
            });
        }
    }
    snapshot
}

fn bench_render_month(c: &mut Criterion) {
    let snapshot = fleet(300, 5);
    let config = ViewConfig::new(ViewType::Month, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    c.bench_function("render_view month 300 assets", |b| {
        b.iter(|| render_view(black_box(&config), black_box(&snapshot), today).unwrap())
    });
}

fn bench_count(c: &mut Criterion) {
    let snapshot = fleet(300, 0);
    let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    c.bench_function("count_for_date_and_filter 300 assets", |b| {
        b.iter(|| count_for_date_and_filter(black_box(&snapshot.assets), date, StatusFilter::OnHire))
    });
}

criterion_group!(benches, bench_render_month, bench_count);
criterion_main!(benches);
