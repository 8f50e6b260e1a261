use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::config::FieldProps;
use crate::error::Result;
use crate::field::{FieldEvent, NumberField, Unit};
use crate::input::InputBuffer;
use crate::widget::{VALUE_ROW_Y, VALUE_TEXT_X};

/// Terminal key bindings on top of a [`NumberField`].
#[derive(Debug, Clone)]
pub struct FieldEditor {
    field: NumberField,
    buffer: InputBuffer,
}

impl FieldEditor {
    pub fn new(props: &FieldProps) -> Result<Self> {
        Ok(Self {
            field: NumberField::new(props)?,
            buffer: InputBuffer::default(),
        })
    }

    pub fn field(&self) -> &NumberField {
        &self.field
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// Cursor position relative to the widget area while editing.
    pub fn cursor_offsets(&self) -> Option<(u16, u16)> {
        self.field
            .is_editing()
            .then(|| {
                let cursor = u16::try_from(self.buffer.cursor).unwrap_or(u16::MAX);
                (VALUE_TEXT_X.saturating_add(cursor), VALUE_ROW_Y)
            })
    }

    pub fn handle_key(&mut self, k: KeyEvent) -> Vec<FieldEvent> {
        if k.kind == KeyEventKind::Release || self.field.is_disabled() {
            return Vec::new();
        }
        if self.field.is_editing() {
            self.edit(k)
        } else {
            self.idle(k)
        }
    }

    fn idle(&mut self, k: KeyEvent) -> Vec<FieldEvent> {
        match k.code {
            KeyCode::Enter | KeyCode::Char('e') => {
                self.focus();
                Vec::new()
            }
            KeyCode::Char('+') | KeyCode::Up | KeyCode::Right => self.field.increment(),
            KeyCode::Char('-') | KeyCode::Down | KeyCode::Left => self.field.decrement(),
            KeyCode::Char('%') => self.field.set_unit(Unit::Percent),
            KeyCode::Char('p') => self.field.set_unit(Unit::Pixel),
            KeyCode::Char('u') => self.field.set_unit(self.field.unit().toggled()),
            _ => Vec::new(),
        }
    }

    fn edit(&mut self, k: KeyEvent) -> Vec<FieldEvent> {
        match k.code {
            KeyCode::Esc => {
                self.field.cancel_edit();
                self.buffer = InputBuffer::default();
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Tab => self.blur(),
            KeyCode::Up => {
                let mut events = self.blur();
                events.extend(self.field.increment());
                events
            }
            KeyCode::Down => {
                let mut events = self.blur();
                events.extend(self.field.decrement());
                events
            }
            KeyCode::Char(c) => {
                let raw = self.buffer.with_inserted(c);
                let tail = self.buffer.tail_len();
                self.apply(&raw, tail);
                Vec::new()
            }
            KeyCode::Backspace => {
                let tail = self.buffer.tail_len();
                if let Some(raw) = self.buffer.with_backspace() {
                    self.apply(&raw, tail);
                }
                Vec::new()
            }
            KeyCode::Delete => {
                let tail = self.buffer.tail_len().saturating_sub(1);
                if let Some(raw) = self.buffer.with_delete() {
                    self.apply(&raw, tail);
                }
                Vec::new()
            }
            KeyCode::Left => {
                self.buffer.left();
                Vec::new()
            }
            KeyCode::Right => {
                self.buffer.right();
                Vec::new()
            }
            KeyCode::Home => {
                self.buffer.home();
                Vec::new()
            }
            KeyCode::End => {
                self.buffer.end();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn apply(&mut self, raw: &str, cursor_from_end: usize) {
        if let Some(text) = self.field.input(raw) {
            self.buffer.accept(text, cursor_from_end);
        }
    }

    fn focus(&mut self) {
        self.field.focus();
        if self.field.is_editing() {
            self.buffer = InputBuffer::from(self.field.display_text());
        }
    }

    fn blur(&mut self) -> Vec<FieldEvent> {
        self.buffer = InputBuffer::default();
        self.field.blur()
    }

    /// Owner driven value, see [`NumberField::sync_controlled`].
    pub fn sync_controlled(&mut self, value: f64) {
        self.field.sync_controlled(value);
        if self.field.is_editing() {
            self.buffer = InputBuffer::from(self.field.display_text());
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.field.set_disabled(disabled);
        if !self.field.is_editing() {
            self.buffer = InputBuffer::default();
        }
    }
}
