use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use dispatch_shipping::{Batch, Consignment, CounterCourier, Courier, Order, OrderDetails};

const COURIERS: [&str; 4] = ["Alpha", "Bravo", "Charlie", "Delta"];

fn consignments(count: usize) -> Vec<Consignment> {
    let couriers: Vec<Arc<dyn Courier>> = COURIERS
        .iter()
        .map(|name| Arc::new(CounterCourier::new(*name)) as Arc<dyn Courier>)
        .collect();
    let details = OrderDetails::from([("sku".to_string(), "X1".into())]);

    (0..count)
        .map(|n| {
            let order = Order::new(format!("ORD-{n}"), details.clone()).unwrap();
            Consignment::new(order, Arc::clone(&couriers[n % couriers.len()])).unwrap()
        })
        .collect()
}

fn bench_add_consignments(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_add_consignments");

    for size in [10usize, 100, 1000, 10000].iter() {
        let input = consignments(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut batch = Batch::new();
                for consignment in input {
                    batch.add_consignment(consignment.clone()).unwrap();
                }
                black_box(batch.len())
            });
        });
    }

    group.finish();
}

fn bench_query_by_courier(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_query_by_courier");

    for size in [100usize, 1000, 10000].iter() {
        let mut batch = Batch::new();
        for consignment in consignments(*size) {
            batch.add_consignment(consignment).unwrap();
        }
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| black_box(batch.consignments_by_courier_name("Charlie").unwrap().len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_consignments, bench_query_by_courier);
criterion_main!(benches);
