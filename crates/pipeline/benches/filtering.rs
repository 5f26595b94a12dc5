//! Benchmark for the filtering pipeline over a synthetic catalog.

use catalog::Dish;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::recommend_dishes;
use prefs::PreferenceRequest;

const INGREDIENT_POOL: &[&str] = &[
    "pollo", "res", "cerdo", "pescado", "mariscos", "lentejas", "garbanzos", "arroz", "fideos",
    "pan", "queso", "leche", "tomate", "cebolla", "papa", "quinua",
];

fn synthetic_catalog(size: usize) -> Vec<Dish> {
    (0..size)
        .map(|i| Dish {
            name: format!("Platillo {i}"),
            ingredients: vec![
                INGREDIENT_POOL[i % INGREDIENT_POOL.len()].to_string(),
                INGREDIENT_POOL[(i * 7 + 3) % INGREDIENT_POOL.len()].to_string(),
            ],
            description: if i % 5 == 0 {
                "frito al momento".to_string()
            } else {
                "a la plancha".to_string()
            },
            calories: (i as u32 * 37) % 900,
            price: (i as f64 * 13.0) % 150.0,
            ..Dish::default()
        })
        .collect()
}

fn bench_filtering(c: &mut Criterion) {
    let catalog = synthetic_catalog(2000);
    let request = PreferenceRequest {
        cultural: vec!["vegetariano".to_string(), "sin_mariscos".to_string()],
        nutritional: vec!["bajo_grasa".to_string(), "sin_gluten".to_string()],
        budget: Some(60.0),
    };

    c.bench_function("recommend_dishes 2000", |b| {
        b.iter(|| recommend_dishes(black_box(&catalog), black_box(&request)).unwrap())
    });

    let empty = PreferenceRequest::default();
    c.bench_function("recommend_dishes 2000 unrestricted", |b| {
        b.iter(|| recommend_dishes(black_box(&catalog), black_box(&empty)).unwrap())
    });
}

criterion_group!(benches, bench_filtering);
criterion_main!(benches);
