//! Integration tests for pulse-core functionality

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use pulse_core::{
    Config, Error, LiveCounter, Record, RecordFilter, Selection, SortDirection, Status,
    TableView, fixtures, format_count, percentage_bar_width, sort_records,
    sort::sort_by_state,
    vocabulary::{CONTENT, FieldKind, FieldSpec, GOALS, LOCATIONS, Vocabulary},
};
use std::io::Write;
use std::time::Duration;

const ARTICLES: Vocabulary = Vocabulary::new(
    "articles",
    "views",
    &[
        FieldSpec::new("title", "Title", FieldKind::Text),
        FieldSpec::new("views", "Views", FieldKind::Count),
    ],
);

fn ids(records: &[Record]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

/// Sort the two-article collection every way the dashboard can
#[test]
fn test_end_to_end_two_articles() {
    let records = vec![
        Record::new(1).with("title", "B").with("views", 500_u64),
        Record::new(2).with("title", "A").with("views", 1_500_u64),
    ];

    let asc = sort_records(&records, &ARTICLES, "views", SortDirection::Ascending).unwrap();
    assert_eq!(ids(&asc), vec![1, 2]);

    let desc = sort_records(&records, &ARTICLES, "views", "desc".parse().unwrap()).unwrap();
    assert_eq!(ids(&desc), vec![2, 1]);

    let by_title = sort_records(&records, &ARTICLES, "title", "asc".parse().unwrap()).unwrap();
    assert_eq!(ids(&by_title), vec![2, 1]);

    assert_eq!(ids(&records), vec![1, 2]);
}

/// Selection state drives the sort exactly like header clicks would
#[test]
fn test_selection_drives_sort() {
    let records: Vec<Record> = fixtures::content_items().iter().map(Record::from).collect();
    let mut selection = Selection::new(CONTENT);

    let first = sort_by_state(&records, &CONTENT, selection.state()).unwrap();
    selection.toggle("views").unwrap();
    let mut flipped = sort_by_state(&records, &CONTENT, selection.state()).unwrap();
    flipped.reverse();

    assert_eq!(ids(&first), ids(&flipped));

    selection.toggle("views").unwrap();
    assert_eq!(selection.state().direction, SortDirection::Descending);

    assert!(matches!(
        selection.toggle("bounce_rate").unwrap_err(),
        Error::InvalidField { .. }
    ));
}

/// Every widget's fixtures satisfy their vocabulary
#[test]
fn test_fixtures_fit_their_vocabularies() {
    let content = TableView::from_items(CONTENT, &fixtures::content_items());
    let goals = TableView::from_items(GOALS, &fixtures::goals());
    let locations = TableView::from_items(LOCATIONS, &fixtures::visitor_locations());

    for view in [&content, &goals, &locations] {
        for field in view.vocabulary().names() {
            let mut probe = view.clone();
            probe.toggle(field).unwrap();
            assert!(probe.rows().is_ok(), "{} by {field}", view.vocabulary().view);
        }
    }
}

/// Filter panel plus sort on the content table
#[test]
fn test_filtered_content_table() {
    let mut view = TableView::from_items(CONTENT, &fixtures::content_items());
    view.set_filter(
        RecordFilter::new()
            .matching("status", Status::Published)
            .matching("category", "Marketing"),
    )
    .unwrap();
    view.toggle("title").unwrap();
    view.toggle("title").unwrap();

    let rows = view.rows().unwrap();
    let titles: Vec<&str> = rows
        .iter()
        .map(|row| row.cell("title").unwrap().text.as_str())
        .collect();

    assert_eq!(
        titles,
        vec![
            "10 Tips for Better Content Strategy",
            "The Future of Digital Marketing",
        ]
    );
}

/// Location list shows abbreviated counts and clamped share bars
#[test]
fn test_location_rows_are_formatted() {
    let view = TableView::from_items(LOCATIONS, &fixtures::visitor_locations()).with_limit(Some(2));
    let rows = view.rows().unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cell("country").unwrap().text, "United States");
    assert_eq!(rows[0].cell("visitors").unwrap().text, "487");
    assert_eq!(rows[0].cell("percentage").unwrap().text, "39.1%");
    assert_eq!(rows[0].cell("percentage").unwrap().bar, Some(39.1));
}

#[test]
fn test_documented_format_examples() {
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1_500), "1.5K");
    assert_eq!(format_count(2_500_000), "2.5M");
    assert_eq!(format_count(1_000_000), "1.0M");

    assert_eq!(percentage_bar_width(120.0), 100.0);
    assert_eq!(percentage_bar_width(-5.0), 0.0);
    assert_eq!(percentage_bar_width(42.0), 42.0);
}

#[test]
fn test_config_file_round_trip() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[dashboard]\nrow_limit = 3\n\n[live]\ninitial_visitors = 10\nmax_step = 2\n\n[logging]\nformat = \"json\""
    )
    .unwrap();

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.dashboard.row_limit, 3);
    assert_eq!(config.live.initial_visitors, 10);
    assert_eq!(config.live.max_step, 2);
    assert_eq!(config.live.interval_seconds, 5);
    assert_eq!(config.logging.format, "json");
}

/// A view that owns a live counter stops it when torn down
#[tokio::test(start_paused = true)]
async fn test_live_counter_stops_with_its_view() {
    struct VisitorsView {
        counter: LiveCounter,
        _ticker: pulse_core::TickerHandle,
    }

    let counter = LiveCounter::new(1_000);
    let view = VisitorsView {
        counter: counter.clone(),
        _ticker: counter.start(Duration::from_secs(5), || 2_i64),
    };

    tokio::time::sleep(Duration::from_secs(16)).await;
    assert_eq!(view.counter.value(), 1_006);

    drop(view);
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(counter.value(), 1_006);
}

proptest! {
    #[test]
    fn prop_distinct_titles_reverse_cleanly(titles in prop::collection::hash_set("[a-z]{1,8}", 1..30)) {
        let records: Vec<Record> = titles
            .into_iter()
            .zip(0_u32..)
            .map(|(title, id)| Record::new(id).with("title", title).with("views", 0_u64))
            .collect();

        let asc = sort_records(&records, &ARTICLES, "title", SortDirection::Ascending).unwrap();
        let mut desc = sort_records(&records, &ARTICLES, "title", SortDirection::Descending).unwrap();
        desc.reverse();
        prop_assert_eq!(ids(&asc), ids(&desc));
    }

    #[test]
    fn prop_toggle_twice_is_identity(field_index in 0_usize..7) {
        let field = CONTENT.fields[field_index].name;
        let mut selection = Selection::new(CONTENT);
        selection.toggle(field).unwrap();
        let after_first = selection.state().clone();
        selection.toggle(field).unwrap();
        selection.toggle(field).unwrap();
        prop_assert_eq!(selection.state(), &after_first);
    }
}
