use criterion::{Criterion, criterion_group, criterion_main};
use reflection_journal_engine::{
    CommentView, Facet, ScriptureLookup, find_references, parse_entry, parse_stance,
    render::blocks_to_html,
};
use std::hint::black_box;
mod common;

fn bench_entry_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry");
    group.sample_size(20);

    let lookup = ScriptureLookup::default();
    let body = common::generate_entry_body(50);

    group.bench_function("find_references", |b| {
        b.iter(|| black_box(find_references(black_box(&body)).count()));
    });

    group.bench_function("parse_entry", |b| {
        b.iter(|| black_box(parse_entry(black_box(&body), &lookup)));
    });

    group.bench_function("parse_and_render", |b| {
        b.iter(|| {
            let blocks = parse_entry(black_box(&body), &lookup);
            black_box(blocks_to_html(&blocks))
        });
    });

    group.finish();
}

fn bench_comment_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("comments");
    group.sample_size(20);

    let comments = common::generate_comments(500);

    group.bench_function("parse_stance", |b| {
        b.iter(|| {
            for comment in &comments {
                black_box(parse_stance(black_box(&comment.body)));
            }
        });
    });

    group.bench_function("view_and_glance", |b| {
        b.iter(|| {
            let view = CommentView::new(black_box(&comments), Facet::from_query("stance=question"));
            black_box(view.visible().len());
            black_box(view.glance().is_empty())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_entry_pipeline, bench_comment_view);
criterion_main!(benches);
