use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use storefront_core::{
  Cart, CatalogSnapshot, CatalogStore, Category, ContextData, Decimal, Flow, FlowControl, FlowError, Product,
  ProductFilter,
};
use tokio::runtime::Runtime;

// --- Fixtures ---

fn catalog_of(size: i64) -> CatalogStore {
  let products = (1..=size)
    .map(|id| Product {
      id,
      name: format!("Product {} {}", id, if id % 3 == 0 { "Kettle" } else { "Mug" }),
      price: Decimal::new(100 + (id * 37) % 10_000, 2),
      category_id: id % 5,
      description: None,
      image: None,
    })
    .collect();
  let categories = (0..5)
    .map(|id| Category {
      id,
      name: format!("Category {}", id),
    })
    .collect();
  CatalogStore::from_snapshot(CatalogSnapshot { products, categories })
}

#[derive(Clone, Debug, Default)]
struct BenchContext {
  counter: u64,
}

// --- Benchmark Functions ---

fn bench_catalog_filtering(c: &mut Criterion) {
  let mut group = c.benchmark_group("CatalogFilter");

  for size in [100_i64, 1_000, 10_000] {
    let store = catalog_of(size);
    let filter = ProductFilter::new()
      .category(2)
      .keyword("kettle")
      .min_price(Decimal::new(500, 2))
      .max_price(Decimal::new(8_000, 2));

    group.throughput(Throughput::Elements(size as u64));
    group.bench_with_input(BenchmarkId::new("combined", size), &store, |b, store| {
      b.iter(|| black_box(store.list(Some(&filter))).len())
    });
    group.bench_with_input(BenchmarkId::new("unfiltered", size), &store, |b, store| {
      b.iter(|| black_box(store.list(None)).len())
    });
  }
  group.finish();
}

fn bench_cart_totals(c: &mut Criterion) {
  let mut group = c.benchmark_group("CartTotal");
  let store = catalog_of(1_000);

  for lines in [1_i64, 10, 100] {
    let mut cart = Cart::new();
    for id in 1..=lines {
      cart.add(&store, id, (id % 4 + 1) as u32).expect("product exists");
    }

    group.throughput(Throughput::Elements(lines as u64));
    group.bench_with_input(BenchmarkId::from_parameter(lines), &cart, |b, cart| {
      b.iter(|| black_box(cart.total(&store)))
    });
  }
  group.finish();
}

fn bench_flow_run(c: &mut Criterion) {
  let mut group = c.benchmark_group("FlowRun");
  let rt = Runtime::new().expect("tokio runtime");

  for num_steps in [1_usize, 5, 10] {
    let names: Vec<String> = (0..num_steps).map(|i| format!("step_{}", i)).collect();
    let defs: Vec<(&str, bool)> = names.iter().map(|n| (n.as_str(), false)).collect();
    let mut flow = Flow::<BenchContext, FlowError>::new("bench", &defs);
    for name in &names {
      flow
        .on(name, |ctx: ContextData<BenchContext>| async move {
          ctx.write().counter += 1;
          Ok::<_, FlowError>(FlowControl::Continue)
        })
        .expect("step declared");
    }

    group.throughput(Throughput::Elements(num_steps as u64));
    group.bench_with_input(BenchmarkId::from_parameter(num_steps), &flow, |b, flow| {
      b.to_async(&rt)
        .iter(|| async { flow.run(ContextData::new(BenchContext::default())).await })
    });
  }
  group.finish();
}

criterion_group!(benches, bench_catalog_filtering, bench_cart_totals, bench_flow_run);
criterion_main!(benches);
