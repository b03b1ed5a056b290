use cipherforge::alphabet::clean_indices;
use cipherforge::codec::encrypt;
use cipherforge::config::SearchParams;
use cipherforge::key::EncryptKey;
use cipherforge::optimizer::{HillClimber, Solver};
use cipherforge::scorer::{QuadgramScorer, QuadgramTable};
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

const TEXT: &str = "\
When the evening came the fishermen pulled their boats up onto the sand and \
carried the baskets of fish to the market, where the merchants were waiting \
with their scales and their silver coins.";

fn setup_scorer() -> QuadgramScorer {
    let table = QuadgramTable::from_text(&TEXT.repeat(4));
    QuadgramScorer::new(&table).expect("Failed to build scorer")
}

fn criterion_benchmark(c: &mut Criterion) {
    let scorer = setup_scorer();
    let key = EncryptKey::random(&mut fastrand::Rng::with_seed(42));
    let ciphertext = encrypt(&key, TEXT);
    let cipher = clean_indices(&ciphertext);

    c.bench_function("score (text)", |b| {
        b.iter(|| scorer.score(black_box(&ciphertext)))
    });

    c.bench_function("evaluate (indices)", |b| {
        let mut climber = HillClimber::new(&scorer, &cipher, 1000);
        let dec = key.inverse();
        b.iter(|| climber.evaluate(black_box(&dec)))
    });

    let solver = Solver::new(SearchParams {
        restarts: 1,
        ..SearchParams::default()
    })
    .expect("valid params");
    c.bench_function("single restart", |b| {
        b.iter(|| {
            let mut rng = fastrand::Rng::with_seed(7);
            solver.solve(&scorer, black_box(&ciphertext), &mut rng)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
