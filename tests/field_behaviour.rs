use std::cell::RefCell;
use std::rc::Rc;

use number_field::{Bounds, FieldEvent, FieldProps, Notifier, NumberField, Unit, clamp};

fn field(props: FieldProps) -> NumberField {
    NumberField::new(&props).unwrap()
}

fn type_and_blur(f: &mut NumberField, raw: &str) -> Vec<FieldEvent> {
    f.focus();
    f.input(raw);
    f.blur()
}

#[test]
fn clamp_bounds_hold_for_both_units() {
    let grid = [(0.0, 999.0), (-50.0, 60.0), (20.0, 20.0), (0.0, 0.5)];
    let values = [-1e6, -50.0, -0.1, 0.0, 0.25, 20.0, 60.0, 99.99, 100.0, 150.0, 1e9];
    for (min, max) in grid {
        let bounds = Bounds::new(min, max, 1.0).unwrap();
        for v in values {
            let pct = clamp(v, Unit::Percent, &bounds);
            assert!(pct >= min && pct <= max.min(100.0), "{v} in [{min}, {max}] -> {pct}");
            assert_eq!(clamp(pct, Unit::Percent, &bounds), pct);

            let px = clamp(v, Unit::Pixel, &bounds);
            assert!(px >= min && px <= max, "{v} in [{min}, {max}] -> {px}");
            assert_eq!(clamp(px, Unit::Pixel, &bounds), px);
        }
    }
}

#[test]
fn typing_with_junk_commits_digits() {
    let mut f = field(FieldProps::default());
    f.set_unit(Unit::Pixel);
    assert_eq!(type_and_blur(&mut f, "12a3"), vec![FieldEvent::ValueChanged(123.0)]);
    assert_eq!(f.value(), 123.0);

    let mut f = field(FieldProps::default().max(50.0));
    assert_eq!(type_and_blur(&mut f, "12a3"), vec![FieldEvent::ValueChanged(50.0)]);
}

#[test]
fn empty_text_reverts_silently() {
    let mut f = field(FieldProps::default().default_value(42.0));
    assert!(type_and_blur(&mut f, "").is_empty());
    assert_eq!(f.value(), 42.0);
    assert_eq!(f.display_text(), "42");
}

#[test]
fn unit_round_trip_reclamps() {
    let mut f = field(FieldProps::default().max(200.0).default_value(80.0));
    assert_eq!(f.unit(), Unit::Percent);

    f.set_unit(Unit::Pixel);
    assert_eq!(f.value(), 80.0);

    while f.value() < 150.0 {
        f.increment();
    }
    assert_eq!(f.value(), 150.0);

    let events = f.set_unit(Unit::Percent);
    assert!(events.contains(&FieldEvent::ValueChanged(100.0)));
    assert_eq!(events.last(), Some(&FieldEvent::UnitChanged(Unit::Percent)));
    assert_eq!(f.value(), 100.0);
}

#[test]
fn steppers_at_the_edges_are_noops() {
    let mut f = field(FieldProps::default().min(10.0).default_value(10.0));
    assert!(f.decrement().is_empty());
    assert_eq!(f.value(), 10.0);

    f.sync_controlled(100.0);
    assert!(f.increment().is_empty());
    assert_eq!(f.value(), 100.0);
}

#[test]
fn controlled_value_does_not_notify() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let mut notifier = Notifier::default().on_change(move |_| *counter.borrow_mut() += 1);

    let mut f = field(FieldProps::default().value(Some(5.0)));
    f.sync_controlled(64.0);
    assert_eq!(f.value(), 64.0);
    assert_eq!(f.display_text(), "64");

    let events = f.increment();
    notifier.dispatch(&events);
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn decimal_comma_is_accepted_while_typing() {
    let mut f = field(FieldProps::default());
    f.focus();
    assert_eq!(f.input("3,5"), Some("3.5"));
    assert_eq!(f.display_text(), "3.5");
    assert_eq!(f.value(), 0.0);
    assert_eq!(f.blur(), vec![FieldEvent::ValueChanged(3.5)]);
}
