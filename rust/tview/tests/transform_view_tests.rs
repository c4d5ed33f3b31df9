use std::borrow::Cow;
use std::time::Duration;

use itertools::Itertools;
use tview::std_impls::{Empty, SliceCursor};
use tview::{Identity, Position, TransformView, transform, transform_view};
use tview_common::ErrorKind;
use tview_testkit::data_gen::{random_i64s, random_upper_ascii};
use tview_testkit::{CallCounter, Counted, Shift};

#[test]
fn test_function_runs_only_on_read() {
    let counter = CallCounter::new();
    let data = [1, 2, 3];
    let view = transform_view(&data[..], Counted::new(|x: &i32| x * 10, &counter));

    let mut position = view.begin();
    position.advance();
    position += 1;
    let end = view.end();
    assert_eq!(counter.get(), 0);

    assert_eq!(position.get(), 30);
    assert_eq!(counter.get(), 1);
    assert_eq!(position.get(), 30);
    assert_eq!(counter.get(), 2);

    assert_eq!(end - position, 1);
    assert!(position < end);
    assert_eq!(counter.get(), 2);
}

#[test]
fn test_iteration_calls_once_per_element() {
    let counter = CallCounter::new();
    let values = random_i64s(25, 1);
    let view = &values | transform(Counted::new(|x: &i64| x + 1, &counter));
    assert_eq!(view.iter().count(), 25);
    assert_eq!(counter.get(), 25);
}

#[test]
fn test_lowering() {
    let lowered = "LOWER" | transform(|b: &u8| char::from(b + 0x20));
    assert_eq!(lowered.iter().collect::<String>(), "lower");

    let text = random_upper_ascii(48, 5);
    let lower: String = transform_view(text.as_str(), Shift::up(0x20)).iter().collect();
    assert_eq!(lower, text.to_ascii_lowercase());
    let upper: String = transform_view(lower.as_str(), Shift::down(0x20)).iter().collect();
    assert_eq!(upper, text);
}

#[test]
fn test_stacked_views() {
    let view = "UPPER"
        | transform(Shift::up(0x20))
        | transform(|c: char| c.to_ascii_uppercase());
    assert_eq!(view.len(), 5);
    assert_eq!(view.iter().collect::<String>(), "UPPER");
    assert_eq!(view.base_ref().iter().collect::<String>(), "upper");
}

#[test]
fn test_empty_sequence() {
    let data: Vec<i32> = Vec::new();
    let view = &data | transform(|x: &i32| x + 1);
    assert!(view.is_empty());
    assert!(view.begin() == view.end());
    assert_eq!(view.end() - view.begin(), 0);
    assert_eq!(view.iter().len(), 0);
    assert_eq!(view.iter().next(), None);
    assert!(view.try_get(0).is_err());
}

#[derive(Debug, PartialEq)]
struct Tagged(u64);

#[test]
fn test_any_output_type_is_traversable() {
    let secs = [1u64, 2, 3];
    let durations = transform_view(&secs[..], |x: &u64| Duration::from_secs(*x));
    assert_eq!(durations.iter().sum::<Duration>(), Duration::from_secs(6));
    assert_eq!(durations.try_get(2).unwrap(), Duration::from_secs(3));

    let words = ["a", "bc"];
    let borrowed = transform_view(&words[..], |w: &&'static str| {
        Cow::<'static, str>::Borrowed(*w)
    });
    assert_eq!(borrowed.iter().collect::<String>(), "abc");

    let tagged = transform_view(&secs[..], |x: &u64| Tagged(*x));
    assert_eq!(tagged.begin().at(1), Tagged(2));
    assert_eq!(tagged.iter().last(), Some(Tagged(3)));

    let mut seen = Vec::new();
    let mut unit = transform_view(&secs[..2], |x: &u64| seen.push(*x));
    assert_eq!(unit.iter_mut().count(), 2);
    drop(unit);
    assert_eq!(seen, [1, 2]);
}

#[test]
fn test_offsets_agree_with_underlying() {
    let values = random_i64s(64, 42);
    let view = transform_view(&values, |x: &i64| x * 3 - 1);
    let begin = view.begin();
    let end = view.end();
    let n = values.len() as isize;

    for (i, value) in values.iter().enumerate() {
        let k = i as isize;
        assert_eq!(begin.at(k), value * 3 - 1);
        assert!(begin + k == end - (n - k));
        assert_eq!((begin + k) - begin, k);
    }

    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..32 {
        let i = rng.usize(..values.len());
        let j = rng.usize(..values.len());
        let (a, b) = (begin + i as isize, begin + j as isize);
        assert_eq!(b - a, j as isize - i as isize);
        assert_eq!(a < b, i < j);
        assert_eq!(view.try_get(i).unwrap(), values[i] * 3 - 1);
    }
}

#[test]
fn test_iter_matches_mapped_values() {
    let values = random_i64s(100, 3);
    let view = &values | transform(|x: &i64| x.rem_euclid(10));
    itertools::assert_equal(view.iter(), values.iter().map(|x| x.rem_euclid(10)));
    assert_eq!(
        view.iter().rev().collect_vec(),
        values.iter().rev().map(|x| x.rem_euclid(10)).collect_vec()
    );
}

fn shouting(text: &'static str) -> TransformView<&'static str, fn(&u8) -> char> {
    let fun: fn(&u8) -> char = |b| char::from(b.to_ascii_uppercase());
    transform_view(text, fun)
}

#[test]
fn test_view_over_static_data_outlives_builder() {
    let view = shouting("quiet");
    let copy = view.clone();
    drop(view);
    assert_eq!(copy.iter().collect::<String>(), "QUIET");
}

#[test]
fn test_assignment_reconstructs_function() {
    let mut target = transform_view("abc", Shift::up(1));
    let source = transform_view("xyz", Shift::up(2));
    target.clone_from(&source);
    assert_eq!(target.iter().collect::<String>(), "z{|");
    assert_eq!(source.iter().collect::<String>(), "z{|");
}

#[test]
fn test_assignment_with_capturing_closure() {
    let data = [1, 2, 3];
    let make = |k: i32| transform_view(&data[..], move |x: &i32| x + k);
    let mut a = make(10);
    let b = make(100);
    assert_eq!(a.iter().collect_vec(), [11, 12, 13]);
    a.clone_from(&b);
    assert_eq!(a.iter().collect_vec(), [101, 102, 103]);
}

#[test]
fn test_default_view() {
    let view: TransformView<Empty<i32>, Identity> = TransformView::default();
    assert_eq!(view.len(), 0);
    assert!(view.begin() == view.end());

    let detached: Position<'_, SliceCursor<'_, i32>, Identity> = Position::default();
    assert!(!detached.is_attached());
    assert!(detached.parent().is_none());
}

#[test]
fn test_base_identity() {
    let values = vec![1, 2, 3];
    let borrowed = &values | transform(|x: &i32| x + 1);
    assert!(borrowed.base_ref().is_borrowed());
    assert!(std::ptr::eq(borrowed.base_ref().get(), &values));

    let moved = values.clone();
    let ptr = moved.as_ptr();
    let owned = moved | transform(|x: &i32| x + 1);
    assert!(owned.base_ref().is_owned());
    assert_eq!(owned.base_ref().get(), &values);
    assert_eq!(owned.iter().collect_vec(), [2, 3, 4]);
    assert_eq!(owned.into_base().into_owned().as_ptr(), ptr);
}

#[test]
fn test_out_of_bounds_subscript() {
    let data = [4, 5, 6];
    let view = transform_view(&data[..], |x: &i32| x * 2);
    assert_eq!(view.try_get(2).unwrap(), 12);
    let err = view.try_get(3).unwrap_err();
    match err.kind() {
        ErrorKind::OutOfBounds { index, len } => {
            assert_eq!(*index, 3);
            assert_eq!(*len, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_stateful_function_through_exclusive_access() {
    let words = vec!["a", "bb", "ccc"];
    let mut total = 0;
    let mut view = transform_view(&words, |w: &&str| {
        total += w.len();
        total
    });
    let running = view.iter_mut().collect_vec();
    drop(view);
    assert_eq!(running, [1, 3, 6]);
    assert_eq!(total, 6);
}

#[test]
fn test_mutable_position_converts_to_shared() {
    let data = [9, 8, 7];
    let mut view = transform_view(&data[..], |x: &i32| x - 7);
    let (mut position, end) = view.bounds_mut();
    position.advance();
    assert_eq!(position.get(), 1);
    assert!(position != end);
    let shared: Position<'_, SliceCursor<'_, i32>, _> = position.into_const();
    assert!(shared.is_attached());
    assert_eq!(shared.base().index(), 1);
    assert_eq!(shared.get(), 1);
}
