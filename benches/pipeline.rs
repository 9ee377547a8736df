// benches/pipeline.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use psl_table::core::parse::parse_line;
use psl_table::league::League;
use psl_table::ranking::rank_teams;

/// A synthetic season: every pairing of 16 teams plays once, scores cycle
/// through a small fixed set so results are deterministic.
fn synth_season() -> String {
    let teams: Vec<String> = (0..16).map(|i| format!("Team {:02}", i)).collect();
    let mut text = String::new();
    let mut k = 0usize;
    for (i, home) in teams.iter().enumerate() {
        for away in teams.iter().skip(i + 1) {
            let (gf, ga) = [(3, 1), (0, 0), (2, 2), (1, 0), (0, 4)][k % 5];
            text.push_str(&format!("{} {}, {} {}\n", home, gf, away, ga));
            k += 1;
        }
    }
    text
}

fn bench_pipeline(c: &mut Criterion) {
    let season = synth_season();

    c.bench_function("parse_lines", |b| {
        b.iter(|| {
            let n = black_box(&season)
                .lines()
                .filter_map(parse_line)
                .count();
            black_box(n)
        })
    });

    c.bench_function("aggregate_season", |b| {
        b.iter(|| {
            let mut league = League::new();
            for line in black_box(&season).lines() {
                league.process_line(line);
            }
            black_box(league.len())
        })
    });

    c.bench_function("rank_table", |b| {
        let mut league = League::new();
        for line in season.lines() {
            league.process_line(line);
        }
        let teams = league.teams();
        b.iter(|| {
            let rows = rank_teams(black_box(teams.clone()));
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
