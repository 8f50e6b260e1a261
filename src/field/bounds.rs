use std::fmt;

use crate::error::{FieldError, Result};

/// Upper bound applied to any value while the unit is [`Unit::Percent`].
pub const PERCENT_CAP: f64 = 100.0;

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 999.0;
pub const DEFAULT_STEP: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Percent,
    Pixel,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Pixel => "px",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Unit::Percent => Unit::Pixel,
            Unit::Pixel => Unit::Percent,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Owner supplied limits of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
    step: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(FieldError::InvalidBounds { min, max });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(FieldError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
        }
    }
}

/// The maximum actually enforced for `unit`.
pub fn effective_max(unit: Unit, bounds: &Bounds) -> f64 {
    match unit {
        Unit::Percent => bounds.max.min(PERCENT_CAP),
        Unit::Pixel => bounds.max,
    }
}

/// Force `value` into `[min, effective_max]`. NaN maps to `min`.
///
/// When `min` lies above the percent cap the effective maximum wins, so the
/// result never exceeds 100 under [`Unit::Percent`].
pub fn clamp(value: f64, unit: Unit, bounds: &Bounds) -> f64 {
    if value.is_nan() {
        return bounds.min;
    }
    value.max(bounds.min).min(effective_max(unit, bounds))
}
