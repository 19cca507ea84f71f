use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scraper::Html;

use wikitable_scrape::{
    config::{options::ExtractOptions, schema::EntitySchema},
    core::extract_table,
    reshape::reshape,
};

const ENTITIES: [&str; 4] = [
    "Dave Hester",
    "Jarrod Schulz/Brandi Passante",
    "Darrell Sheets/Brandon Sheets",
    "Barry Weiss",
];

// One season-sized table: 26 episodes, every entity present.
fn sample_page() -> String {
    let mut html = String::from(r#"<html><body><table class="wikitable"><tr><th>#</th><th>Title</th><th>Air date</th>"#);
    for e in ENTITIES {
        html.push_str(&format!("<th>{e}<br>Spent</th><th>{e}<br>Net profit/loss</th>"));
    }
    html.push_str("</tr>");
    for ep in 1..=26 {
        html.push_str(&format!("<tr><td>{ep}</td><td>Episode {ep}</td><td>May {ep}, 2011</td>"));
        for (i, _) in ENTITIES.iter().enumerate() {
            let spent = ep * 100 + i;
            html.push_str(&format!("<td>${spent},000</td><td>-${}</td>", spent / 3));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_pipeline(c: &mut Criterion) {
    let page = sample_page();
    let opts = ExtractOptions::default();
    let schema = EntitySchema::default();

    c.bench_function("parse_document", |b| {
        b.iter(|| Html::parse_document(black_box(&page)))
    });

    let doc = Html::parse_document(&page);
    c.bench_function("extract_table", |b| {
        b.iter(|| {
            let t = extract_table(black_box(&doc), 0, &opts).unwrap();
            black_box(t.row_count())
        })
    });

    let table = extract_table(&doc, 0, &opts).unwrap();
    c.bench_function("reshape", |b| {
        b.iter(|| {
            let records = reshape(black_box(&table), Some(2), &schema);
            black_box(records.len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
