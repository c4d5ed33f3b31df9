use itertools::Itertools;
use tview::std_impls::SliceCursor;
use tview::{BoundaryMarker, Position, SizedSentinel, transform};
use tview_testkit::data_gen::random_i64s;
use tview_testkit::{Prefix, PrefixEnd};

#[test]
fn test_marker_distance_in_both_directions() {
    let values = random_i64s(12, 3);
    let view = Prefix::new(&values, 8) | transform(|x: &i64| x / 2);
    let end: BoundaryMarker<PrefixEnd> = view.end();
    let begin = view.begin();
    assert_eq!(end - begin, 8);
    assert_eq!(begin - end, -8);

    let mut position = begin + 5;
    assert_eq!(end - position, 3);
    assert_eq!(position - end, -3);
    position += 3;
    assert!(position == end);
    assert_eq!(end - position, 0);
    assert_eq!(end.distance_from(&position), 0);
}

#[test]
fn test_marker_sized_iteration() {
    let values = random_i64s(20, 4);
    let view = Prefix::new(&values, 6) | transform(|x: &i64| x + 1);
    let mut iter = view.iter();
    assert_eq!(iter.len(), 6);
    iter.next();
    assert_eq!(iter.size_hint(), (5, Some(5)));
    itertools::assert_equal(iter, values[1..6].iter().map(|x| x + 1));
    assert_eq!(view.iter().collect_vec().len(), view.len());
}

#[test]
fn test_marker_distance_through_exclusive_access() {
    let data = [3u32, 1, 4, 1, 5];
    let mut total = 0;
    let mut view = Prefix::new(&data, 4) | transform(|x: &u32| {
        total += x;
        total
    });
    let (mut position, end) = view.bounds_mut();
    assert_eq!(end - &position, 4);
    assert_eq!(&position - end, -4);
    position.step();
    position.step();
    assert_eq!(end - &position, 2);
    assert_eq!(&position - end, -2);
    assert_eq!(position.get(), 4);
}

#[test]
fn test_mutable_bounds_convert_to_shared() {
    let data = ['a', 'b', 'c'];
    let mut view = Prefix::new(&data, 2) | transform(|c: &char| c.to_ascii_uppercase());
    let (mut position, end) = view.bounds_mut();
    position.step();
    let end: BoundaryMarker<PrefixEnd> = end.into_const();
    let position: Position<'_, SliceCursor<'_, char>, _> = position.into_const();
    assert_eq!(end - position, 1);
    assert_eq!(position.get(), 'B');
    assert!(position + 1 == end);
}

#[test]
fn test_empty_prefix() {
    let data = [1, 2];
    let view = Prefix::new(&data, 0) | transform(|x: &i32| x * 2);
    assert!(view.begin() == view.end());
    assert_eq!(view.end() - view.begin(), 0);
    assert_eq!(view.iter().len(), 0);
}
