mod common;

use common::{FakeProvider, all, approx_eq, closes, day};

use chrono::NaiveDate;
use stock_compare::errors::BuildError;
use stock_compare::models::bar::Bar;
use stock_compare::models::date_range::{DateRange, HistoryWindow};
use stock_compare::models::field::{Field, PriceField};
use stock_compare::models::request_params::SeriesRequest;
use stock_compare::series::SeriesBuilder;

fn request(symbols: &[&str]) -> SeriesRequest {
    SeriesRequest::new(symbols.iter().map(|s| s.to_string()).collect())
}

#[tokio::test]
async fn prices_are_indexed_to_one_hundred() {
    let provider = FakeProvider::default()
        .with_series("A", closes(&all(&[10.0, 20.0, 30.0, 40.0, 50.0])))
        .with_series("B", closes(&all(&[100.0, 90.0, 80.0, 70.0, 60.0])));

    let table = SeriesBuilder::new(&provider)
        .build(&request(&["A", "B"]))
        .await
        .unwrap();

    assert!(table.is_indexed());
    assert_eq!(table.field(), Field::Price(PriceField::Close));
    assert_eq!(table.len(), 5);
    assert!(approx_eq(table.column("A").unwrap(), &[100.0, 200.0, 300.0, 400.0, 500.0]));
    assert!(approx_eq(table.column("B").unwrap(), &[100.0, 90.0, 80.0, 70.0, 60.0]));
}

#[tokio::test]
async fn a_gap_in_one_symbol_drops_the_whole_row() {
    let provider = FakeProvider::default()
        .with_series("C", closes(&[Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)]))
        .with_series("D", closes(&all(&[2.0, 2.0, 2.0, 2.0, 2.0])));

    let table = SeriesBuilder::new(&provider)
        .build(&request(&["C", "D"]))
        .await
        .unwrap();

    assert_eq!(table.dates(), &[day(0), day(1), day(3), day(4)]);
    assert!(approx_eq(table.column("C").unwrap(), &[100.0, 200.0, 400.0, 500.0]));
    assert!(approx_eq(table.column("D").unwrap(), &[100.0, 100.0, 100.0, 100.0]));
}

#[tokio::test]
async fn a_date_one_symbol_lacks_entirely_is_dropped() {
    let mut short = closes(&all(&[1.0, 2.0, 3.0]));
    short.remove(1);
    let provider = FakeProvider::default()
        .with_series("X", short)
        .with_series("Y", closes(&all(&[5.0, 6.0, 7.0])));

    let table = SeriesBuilder::new(&provider)
        .build(&request(&["X", "Y"]))
        .await
        .unwrap();

    assert_eq!(table.dates(), &[day(0), day(2)]);
}

#[tokio::test]
async fn volume_passes_through_unscaled() {
    let provider = FakeProvider::default()
        .with_series("A", closes(&all(&[1.0, 2.0, 3.0])))
        .with_series("B", closes(&[Some(4.0), None, Some(6.0)]));

    let table = SeriesBuilder::new(&provider)
        .build(&request(&["A", "B"]).with_price_type("Adjusted").with_volume(true))
        .await
        .unwrap();

    assert_eq!(table.field(), Field::Volume);
    assert!(!table.is_indexed());
    assert_eq!(table.column("A").unwrap(), &[1_000.0, 3_000.0]);
    assert_eq!(table.column("B").unwrap(), &[4_000.0, 6_000.0]);
}

#[tokio::test]
async fn columns_and_calls_follow_input_order() {
    let provider = FakeProvider::default()
        .with_series("MSFT", closes(&all(&[1.0, 2.0])))
        .with_series("AAPL", closes(&all(&[3.0, 4.0])))
        .with_series("GOOG", closes(&all(&[5.0, 6.0])));

    let table = SeriesBuilder::new(&provider)
        .build(&request(&["MSFT", "AAPL", "GOOG"]))
        .await
        .unwrap();

    assert_eq!(table.symbols().collect::<Vec<_>>(), vec!["MSFT", "AAPL", "GOOG"]);
    assert_eq!(provider.called_symbols(), vec!["MSFT", "AAPL", "GOOG"]);
}

#[tokio::test]
async fn price_type_is_case_insensitive() {
    let provider = FakeProvider::default().with_series(
        "A",
        vec![Bar {
            date: day(0),
            open: Some(1.0),
            high: Some(9.0),
            low: Some(0.5),
            close: Some(2.0),
            volume: Some(10.0),
        }],
    );

    let table = SeriesBuilder::new(&provider)
        .build(&request(&["A"]).with_price_type("high"))
        .await
        .unwrap();

    assert_eq!(table.field(), Field::Price(PriceField::High));
}

#[tokio::test]
async fn unknown_field_fails_before_fetching() {
    let provider = FakeProvider::default().with_series("A", closes(&all(&[1.0])));

    let err = SeriesBuilder::new(&provider)
        .build(&request(&["A"]).with_price_type("Adjusted"))
        .await
        .unwrap_err();

    assert!(matches!(err, BuildError::UnknownField { .. }));
    assert!(err.to_string().contains("Adjusted"));
    assert!(provider.called_symbols().is_empty());
}

#[tokio::test]
async fn first_retrieval_failure_aborts() {
    let provider = FakeProvider::default()
        .with_series("A", closes(&all(&[1.0])))
        .failing("BAD", "Not Found: No data found, symbol may be delisted")
        .with_series("C", closes(&all(&[1.0])));

    let err = SeriesBuilder::new(&provider)
        .build(&request(&["A", "BAD", "C"]))
        .await
        .unwrap_err();

    match err {
        BuildError::RetrievalFailed { ref symbol, .. } => assert_eq!(symbol, "BAD"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(provider.called_symbols(), vec!["A", "BAD"]);
}

#[tokio::test]
async fn no_overlap_is_an_error() {
    let mut late = closes(&all(&[1.0, 2.0, 3.0]));
    late.drain(..2);
    let provider = FakeProvider::default()
        .with_series("A", closes(&all(&[1.0, 2.0])))
        .with_series("B", late);

    let err = SeriesBuilder::new(&provider)
        .build(&request(&["A", "B"]))
        .await
        .unwrap_err();

    assert!(matches!(err, BuildError::EmptyAfterAlignment { symbols: 2, .. }));
}

#[tokio::test]
async fn zero_first_price_cannot_be_indexed() {
    let provider = FakeProvider::default().with_series("Z", closes(&all(&[0.0, 1.0])));

    let err = SeriesBuilder::new(&provider)
        .build(&request(&["Z"]))
        .await
        .unwrap_err();

    assert!(matches!(err, BuildError::ZeroBase { .. }));
}

#[tokio::test]
async fn window_is_passed_to_the_provider() {
    let provider = FakeProvider::default().with_series("A", closes(&all(&[1.0])));
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    )
    .unwrap();

    let builder = SeriesBuilder::new(&provider);
    builder.build(&request(&["A"])).await.unwrap();
    builder.build(&request(&["A"]).with_range(range)).await.unwrap();

    let calls = provider.calls.lock().unwrap();
    assert_eq!(calls[0].1, HistoryWindow::TrailingYear);
    assert_eq!(calls[1].1, HistoryWindow::Range(range));
}
