use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, StatefulWidgetRef, Widget};

use crate::editor::FieldEditor;
use crate::field::{NumberField, Unit};

const UNIT_LABEL: &str = " Unit   ";
const VALUE_LABEL: &str = " Value  ";
const DECREMENT: &str = "[-]";
const INCREMENT: &str = "[+]";

/// Column of the first character of the value text, border included.
pub const VALUE_TEXT_X: u16 = 1 + VALUE_LABEL.len() as u16 + DECREMENT.len() as u16 + 1;
/// Row of the value line, border included.
pub const VALUE_ROW_Y: u16 = 3;

fn unit_span(field: &NumberField, unit: Unit) -> Span<'static> {
    let label = format!("[ {} ]", unit.symbol());
    if field.unit() == unit {
        Span::styled(label, Style::default().black().on_gray().add_modifier(Modifier::BOLD))
    } else {
        Span::raw(label)
    }
}

fn stepper_span(label: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled(label, Style::default().white().add_modifier(Modifier::BOLD))
    } else {
        Span::styled(label, Style::default().fg(Color::DarkGray))
    }
}

/// The state is whether the control has the application's focus.
impl StatefulWidgetRef for &FieldEditor {
    type State = bool;
    fn render_ref(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let field = self.field();
        let value = if field.is_editing() {
            Span::styled(self.buffer().value.clone(), Style::default().cyan())
        } else {
            Span::raw(field.display_text())
        };
        let lines = vec![
            Line::from(vec![
                Span::raw(UNIT_LABEL),
                unit_span(field, Unit::Percent),
                " ".into(),
                unit_span(field, Unit::Pixel),
            ]),
            Line::default(),
            Line::from(vec![
                Span::raw(VALUE_LABEL),
                stepper_span(DECREMENT, field.can_decrement()),
                " ".into(),
                value.add_modifier(Modifier::BOLD),
                " ".into(),
                stepper_span(INCREMENT, field.can_increment()),
            ]),
        ];

        let mut block = Block::bordered().title_top(Line::from(vec![
            " Number field ".into(),
            "<e> ".blue().bold(),
        ]));
        if *state {
            block = block.border_style(Style::default().cyan());
        }
        let mut paragraph = Paragraph::new(lines).block(block);
        if field.is_disabled() {
            paragraph = paragraph.add_modifier(Modifier::DIM);
        }
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::config::FieldProps;

    fn render(editor: &FieldEditor) -> Buffer {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        (&editor).render_ref(area, &mut buf, &mut true);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn renders_unit_and_value_rows() {
        let editor = FieldEditor::new(&FieldProps::default().default_value(42.0)).unwrap();
        let buf = render(&editor);
        assert!(row(&buf, 0).contains("Number field"));
        assert!(row(&buf, 1).contains("Unit   [ % ] [ px ]"));
        assert!(row(&buf, VALUE_ROW_Y).contains("Value  [-] 42 [+]"));
        assert_eq!(buf[(VALUE_TEXT_X, VALUE_ROW_Y)].symbol(), "4");
    }

    #[test]
    fn active_unit_is_highlighted() {
        let editor = FieldEditor::new(&FieldProps::default()).unwrap();
        let buf = render(&editor);
        let percent_x = 1 + UNIT_LABEL.len() as u16;
        assert_eq!(buf[(percent_x, 1)].bg, Color::Gray);
        assert_ne!(buf[(percent_x + 6, 1)].bg, Color::Gray);
    }

    #[test]
    fn steppers_at_bounds_are_grayed_out() {
        let editor = FieldEditor::new(&FieldProps::default()).unwrap();
        let buf = render(&editor);
        let minus_x = 1 + VALUE_LABEL.len() as u16;
        assert_eq!(buf[(minus_x, VALUE_ROW_Y)].fg, Color::DarkGray);
        assert_eq!(buf[(minus_x + 6, VALUE_ROW_Y)].fg, Color::White);
    }

    #[test]
    fn editing_shows_buffer_text() {
        let mut editor = FieldEditor::new(&FieldProps::default().default_value(7.0)).unwrap();
        editor.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        editor.handle_key(KeyEvent::new(KeyCode::Char('.'), KeyModifiers::NONE));
        let buf = render(&editor);
        assert!(row(&buf, VALUE_ROW_Y).contains("[-] 7. [+]"));
        assert_eq!(buf[(VALUE_TEXT_X, VALUE_ROW_Y)].fg, Color::Cyan);
    }
}
