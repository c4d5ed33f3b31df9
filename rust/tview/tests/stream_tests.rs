use itertools::Itertools;
use tview::{Traversal, transform};
use tview_common::ErrorKind;
use tview_testkit::data_gen::{random_i64s, write_values_file};
use tview_testkit::dirs::get_sample_path;
use tview_testkit::{CallCounter, Counted, StreamSequence};

#[test]
fn test_stream_from_temp_file() -> anyhow::Result<()> {
    let values = random_i64s(40, 9);
    let file = write_values_file(&values)?;
    let counter = CallCounter::new();
    let stream = StreamSequence::<_, i64>::open(file.path())?;
    let mut view = stream | transform(Counted::new(|x: i64| x.abs(), &counter));

    let collected = view.iter_mut().collect_vec();
    assert_eq!(collected, values.iter().map(|x| x.abs()).collect_vec());
    assert_eq!(counter.get(), 40);
    assert!(view.base_ref().error().is_none());
    assert_eq!(view.base_ref().values_read(), 40);
    Ok(())
}

#[test]
fn test_stream_is_single_pass() -> anyhow::Result<()> {
    let path = get_sample_path("numbers.txt")?;
    let mut view = StreamSequence::<_, i64>::open(path)? | transform(|x: i64| x * 10);
    let first = view.iter_mut().collect_vec();
    assert_eq!(first, [30, 10, 40, 10, 50, 90, 20, 60, 50, 30, 50]);
    assert_eq!(view.iter_mut().count(), 0);
    Ok(())
}

#[test]
fn test_stream_stops_at_malformed_value() -> anyhow::Result<()> {
    let path = get_sample_path("malformed_numbers.txt")?;
    let mut view = StreamSequence::<_, i64>::open(path)? | transform(|x: i64| x + 1);
    assert_eq!(view.iter_mut().collect_vec(), [13, 8]);
    match view.base_ref().error().map(|e| e.kind()) {
        Some(ErrorKind::InvalidFormat { element, .. }) => assert_eq!(element, "oops"),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_stacked_over_stream() {
    let mut view = StreamSequence::<_, i64>::from_text("1 2\n3")
        | transform(|x: i64| x + 1)
        | transform(|x: i64| x * 2);
    {
        let (position, _end) = view.bounds_mut();
        assert_eq!(position.concept(), Traversal::Input);
        assert_eq!(position.category(), None);
    }
    // The first traversal consumed the leading value.
    assert_eq!(view.iter_mut().collect_vec(), [6, 8]);
}

#[test]
fn test_missing_stream_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = StreamSequence::<_, i64>::open(dir.path().join("absent.txt"));
    assert!(result.is_err());
}
