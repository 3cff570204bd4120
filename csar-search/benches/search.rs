use criterion::*;

use csar_othello::Board;
use csar_search::{Evaluator, SearchConfig, Searcher};

fn criterion_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20);

    for depth in 2..7 {
        for evaluator in [Evaluator::DiscDifference, Evaluator::Positional].iter() {
            let config = SearchConfig::default()
                .with_depth(depth)
                .with_evaluator(*evaluator);
            group.bench_with_input(
                BenchmarkId::new(evaluator.to_string(), depth),
                &config,
                |b, &config| {
                    b.iter(|| {
                        // A fresh table each time, so nothing is answered from earlier runs.
                        let mut searcher = Searcher::new(config).unwrap();
                        searcher.choose_move(black_box(&Board::new()))
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search, criterion_search);
criterion_main!(search);
