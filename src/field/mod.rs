use log::{debug, trace};

use crate::config::FieldProps;
use crate::error::Result;

pub mod bounds;
pub mod text;

pub use bounds::{Bounds, Unit, clamp, effective_max};
use text::{Normalized, canonical, normalize, parse_display};

/// Notification for the owner of a field. Only user driven changes emit one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldEvent {
    ValueChanged(f64),
    UnitChanged(Unit),
}

/// Focus state of the text field. While idle the display is always the
/// canonical form of the committed value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Idle,
    Editing { text: String },
}

/// Headless state of a two-unit numeric input with steppers.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberField {
    value: f64,
    unit: Unit,
    bounds: Bounds,
    disabled: bool,
    state: FieldState,
}

impl NumberField {
    pub fn new(props: &FieldProps) -> Result<Self> {
        let bounds = props.bounds()?;
        let unit = Unit::default();
        let initial = props.value.unwrap_or(props.default_value);
        Ok(Self {
            value: clamp(initial, unit, &bounds),
            unit,
            bounds,
            disabled: props.disabled,
            state: FieldState::Idle,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, FieldState::Editing { .. })
    }

    pub fn effective_max(&self) -> f64 {
        effective_max(self.unit, &self.bounds)
    }

    /// What the text field shows right now.
    pub fn display_text(&self) -> String {
        match &self.state {
            FieldState::Idle => canonical(self.value),
            FieldState::Editing { text } => text.clone(),
        }
    }

    pub fn can_decrement(&self) -> bool {
        !self.disabled && self.value > self.bounds.min()
    }

    pub fn can_increment(&self) -> bool {
        !self.disabled && self.value < self.effective_max()
    }

    /// Gain focus; any leftover text from an aborted edit is replaced.
    pub fn focus(&mut self) {
        if self.disabled {
            return;
        }
        self.state = FieldState::Editing {
            text: canonical(self.value),
        };
    }

    /// Feed the whole raw text of the field after a keystroke.
    ///
    /// Returns the display text when the keystroke was accepted. The committed
    /// value is left alone until blur or a stepper action.
    pub fn input(&mut self, raw: &str) -> Option<&str> {
        if self.disabled {
            return None;
        }
        let FieldState::Editing { text } = &mut self.state else {
            return None;
        };
        match normalize(raw) {
            Normalized::Pending(cleaned) | Normalized::Number(cleaned, _) => {
                *text = cleaned;
                Some(text.as_str())
            }
            Normalized::Rejected => {
                trace!("dropping unusable input {raw:?}");
                None
            }
        }
    }

    /// Lose focus and commit the display text.
    pub fn blur(&mut self) -> Vec<FieldEvent> {
        let FieldState::Editing { text } = std::mem::take(&mut self.state) else {
            return Vec::new();
        };
        let previous = self.value;
        let parsed = parse_display(&text).unwrap_or(previous);
        self.value = clamp(parsed, self.unit, &self.bounds);
        if self.value != previous {
            debug!("committed {text:?} as {}", self.value);
            vec![FieldEvent::ValueChanged(self.value)]
        } else {
            Vec::new()
        }
    }

    /// Abort an edit without committing anything.
    pub fn cancel_edit(&mut self) {
        self.state = FieldState::Idle;
    }

    pub fn increment(&mut self) -> Vec<FieldEvent> {
        if !self.can_increment() {
            return Vec::new();
        }
        self.step_to(self.value + self.bounds.step())
    }

    pub fn decrement(&mut self) -> Vec<FieldEvent> {
        if !self.can_decrement() {
            return Vec::new();
        }
        self.step_to(self.value - self.bounds.step())
    }

    fn step_to(&mut self, target: f64) -> Vec<FieldEvent> {
        self.write_value(clamp(target, self.unit, &self.bounds));
        debug!("stepped to {}", self.value);
        vec![FieldEvent::ValueChanged(self.value)]
    }

    pub fn set_unit(&mut self, unit: Unit) -> Vec<FieldEvent> {
        if self.disabled {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        self.unit = unit;
        if unit == Unit::Percent {
            let previous = self.value;
            self.write_value(previous.min(bounds::PERCENT_CAP));
            if self.value != previous {
                debug!("switching to % capped {previous} to {}", self.value);
                events.push(FieldEvent::ValueChanged(self.value));
            }
        }
        events.push(FieldEvent::UnitChanged(unit));
        events
    }

    /// Adopt an owner supplied value. Never notifies the owner back.
    pub fn sync_controlled(&mut self, value: f64) {
        let clamped = clamp(value, self.unit, &self.bounds);
        debug!("controlled value {value} synced as {clamped}");
        self.write_value(clamped);
    }

    /// Replace the bounds. The committed value is re-clamped silently.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.write_value(clamp(self.value, self.unit, &self.bounds));
    }

    /// Disabling drops an in-progress edit without committing it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.state = FieldState::Idle;
        }
    }

    fn write_value(&mut self, value: f64) {
        self.value = value;
        if let FieldState::Editing { text } = &mut self.state {
            *text = canonical(value);
        }
    }
}
