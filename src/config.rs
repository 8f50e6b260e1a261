//! Owner supplied configuration of a [`NumberField`](crate::field::NumberField).
//!
//! Everything is optional. Unset fields fall back to the defaults of the
//! control: min 0, max 999, step 1, default value 0, enabled.

use std::str::FromStr;

use crate::error::{FieldError, Result};
use crate::field::bounds::{Bounds, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP};

pub const ENV_MIN: &str = "NUMBER_FIELD_MIN";
pub const ENV_MAX: &str = "NUMBER_FIELD_MAX";
pub const ENV_STEP: &str = "NUMBER_FIELD_STEP";
pub const ENV_DEFAULT: &str = "NUMBER_FIELD_DEFAULT";
pub const ENV_VALUE: &str = "NUMBER_FIELD_VALUE";
pub const ENV_DISABLED: &str = "NUMBER_FIELD_DISABLED";

#[derive(Debug, Clone, PartialEq)]
pub struct FieldProps {
    /// Controlled value. Takes precedence over `default_value` when set.
    pub value: Option<f64>,
    pub default_value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub disabled: bool,
}

impl Default for FieldProps {
    fn default() -> Self {
        Self {
            value: None,
            default_value: 0.0,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            disabled: false,
        }
    }
}

impl FieldProps {
    pub fn value(mut self, value: Option<f64>) -> Self {
        self.value = value;
        self
    }

    pub fn default_value(mut self, default_value: f64) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn bounds(&self) -> Result<Bounds> {
        Bounds::new(self.min, self.max, self.step)
    }

    /// Defaults overridden by the `NUMBER_FIELD_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut props = Self::default();
        if let Some(min) = parse_var(&lookup, ENV_MIN)? {
            props.min = min;
        }
        if let Some(max) = parse_var(&lookup, ENV_MAX)? {
            props.max = max;
        }
        if let Some(step) = parse_var(&lookup, ENV_STEP)? {
            props.step = step;
        }
        if let Some(default_value) = parse_var(&lookup, ENV_DEFAULT)? {
            props.default_value = default_value;
        }
        props.value = parse_var(&lookup, ENV_VALUE)?;
        if let Some(disabled) = parse_var(&lookup, ENV_DISABLED)? {
            props.disabled = disabled;
        }
        props.bounds()?;
        Ok(props)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| FieldError::InvalidEnv { var, value: raw })
}
