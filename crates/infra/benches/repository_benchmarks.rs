use std::collections::BTreeMap;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stockroom_core::ProductId;
use stockroom_infra::{FileProductRepository, InMemoryProductStore};
use stockroom_products::{Expiration, Product, ProductRepository, ProductService};

fn catalog(size: u64) -> Vec<Product> {
    let expiration = Expiration::parse("31/12/2099").expect("valid date");
    (1..=size)
        .map(|n| Product {
            id: ProductId::new(n).expect("positive id"),
            name: format!("Product {n}"),
            quantity: 1_000,
            code_value: format!("CODE{n}"),
            is_published: true,
            expiration,
            price: (n % 500) as f64 + 0.99,
        })
        .collect()
}

fn service(size: u64) -> ProductService<FileProductRepository<Arc<InMemoryProductStore>>> {
    let store = Arc::new(InMemoryProductStore::with_products(catalog(size)));
    ProductService::new(FileProductRepository::open(store).expect("in-memory load"))
}

fn bench_price_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_greater_than");
    for size in [100u64, 1_000, 10_000] {
        let svc = service(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| svc.price_greater_than(black_box(250.0)).expect("search"))
        });
    }
    group.finish();
}

fn bench_consumer_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("consumer_price");
    let svc = service(10_000);
    for lines in [1u64, 10, 100] {
        let order: BTreeMap<ProductId, u32> = (1..=lines)
            .map(|n| (ProductId::new(n * 7).expect("positive id"), 2))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(lines), &order, |b, order| {
            b.iter(|| svc.consumer_price(black_box(order)).expect("priced"))
        });
    }
    group.finish();
}

fn bench_create(c: &mut Criterion) {
    c.bench_function("create_into_1000", |b| {
        b.iter_batched(
            || {
                let store = Arc::new(InMemoryProductStore::with_products(catalog(1_000)));
                FileProductRepository::open(store).expect("in-memory load")
            },
            |repo| {
                let data = stockroom_products::ProductData {
                    name: "Bench".to_string(),
                    quantity: 1,
                    code_value: "BENCHNEW".to_string(),
                    is_published: true,
                    expiration: Expiration::parse("01/01/2099").expect("valid date"),
                    price: 1.0,
                };
                repo.create(data).expect("created")
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_price_search, bench_consumer_price, bench_create);
criterion_main!(benches);
