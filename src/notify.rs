use crate::field::{FieldEvent, Unit};

type ChangeFn = Box<dyn FnMut(f64)>;
type UnitFn = Box<dyn FnMut(Unit)>;

/// Owner side callbacks. Events returned by the field are forwarded here in
/// the order they were emitted.
#[derive(Default)]
pub struct Notifier {
    on_change: Option<ChangeFn>,
    on_unit_change: Option<UnitFn>,
}

impl Notifier {
    pub fn on_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_unit_change(mut self, f: impl FnMut(Unit) + 'static) -> Self {
        self.on_unit_change = Some(Box::new(f));
        self
    }

    pub fn dispatch(&mut self, events: &[FieldEvent]) {
        for event in events {
            match *event {
                FieldEvent::ValueChanged(value) => {
                    if let Some(f) = self.on_change.as_mut() {
                        f(value);
                    }
                }
                FieldEvent::UnitChanged(unit) => {
                    if let Some(f) = self.on_unit_change.as_mut() {
                        f(unit);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn dispatches_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let values = Rc::clone(&log);
        let units = Rc::clone(&log);
        let mut notifier = Notifier::default()
            .on_change(move |v| values.borrow_mut().push(format!("value {v}")))
            .on_unit_change(move |u| units.borrow_mut().push(format!("unit {u}")));

        notifier.dispatch(&[
            FieldEvent::ValueChanged(100.0),
            FieldEvent::UnitChanged(Unit::Percent),
        ]);
        assert_eq!(*log.borrow(), vec!["value 100", "unit %"]);
    }

    #[test]
    fn missing_callbacks_are_skipped() {
        let mut notifier = Notifier::default();
        notifier.dispatch(&[FieldEvent::ValueChanged(1.0)]);
    }
}
