use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use color_eyre::Result;
use crossterm::event::{self, KeyCode};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, FrameExt, List, ListItem, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use number_field::{FieldEditor, FieldProps, Notifier};

const LOG_ENV: &str = "NUMBER_FIELD_LOG";
const EVENT_LOG_LEN: usize = 64;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging()?;
    let props = FieldProps::from_env()?;
    let app = App::new(props)?;
    ratatui::run(|terminal| app.run(terminal))
}

/// stderr belongs to the terminal, so records only go to a file when asked for.
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let file = std::fs::File::create(&path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!("logging to {path}");
    Ok(())
}

/// What the owner of the control has been told so far.
#[derive(Default)]
struct Owner {
    last_value: Option<f64>,
    events: VecDeque<String>,
}

impl Owner {
    fn record(&mut self, entry: String) {
        if self.events.len() >= EVENT_LOG_LEN {
            self.events.pop_front();
        }
        self.events.push_back(entry);
    }
}

struct App {
    props: FieldProps,
    editor: FieldEditor,
    notifier: Notifier,
    owner: Rc<RefCell<Owner>>,
}

impl App {
    fn new(props: FieldProps) -> Result<Self> {
        let editor = FieldEditor::new(&props)?;
        let owner = Rc::new(RefCell::new(Owner::default()));
        let on_value = Rc::clone(&owner);
        let on_unit = Rc::clone(&owner);
        let notifier = Notifier::default()
            .on_change(move |value| {
                let mut owner = on_value.borrow_mut();
                owner.last_value = Some(value);
                owner.record(format!("value-changed({value})"));
            })
            .on_unit_change(move |unit| {
                on_unit.borrow_mut().record(format!("unit-changed({unit})"));
            });
        Ok(Self {
            props,
            editor,
            notifier,
            owner,
        })
    }

    fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;
            // Terminate the program if the user presses 'q' or 'Q' and true is returned
            if self.event_handler()? {
                return Ok(());
            }
        }
    }

    /// Handles user input events.
    ///
    /// @returns Ok(true) if the user wants to quit the program.
    fn event_handler(&mut self) -> Result<bool> {
        let Some(k) = event::read()?.as_key_press_event() else {
            return Ok(false);
        };
        if !self.editor.field().is_editing() {
            match k.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
                KeyCode::Char('d') => {
                    let disabled = !self.editor.field().is_disabled();
                    self.editor.set_disabled(disabled);
                    self.owner
                        .borrow_mut()
                        .record(format!("disabled = {disabled}"));
                    return Ok(false);
                }
                KeyCode::Char('r') => {
                    let controlled = self
                        .owner
                        .borrow()
                        .last_value
                        .or(self.props.value)
                        .unwrap_or(self.props.default_value);
                    self.editor.sync_controlled(controlled);
                    self.owner
                        .borrow_mut()
                        .record(format!("controlled sync({controlled})"));
                    return Ok(false);
                }
                _ => {}
            }
        }
        let events = self.editor.handle_key(k);
        self.notifier.dispatch(&events);
        Ok(false)
    }

    fn render(&mut self, frame: &mut Frame) {
        let horizontal = Layout::horizontal([Constraint::Length(32), Constraint::Fill(1)]);
        let [left, events] = frame.area().layout(&horizontal);
        let vertical = Layout::vertical([Constraint::Length(5), Constraint::Fill(1)]);
        let [control, help] = left.layout(&vertical);

        frame.render_stateful_widget_ref(&self.editor, control, &mut true);
        if let Some((x_offset, y_offset)) = self.editor.cursor_offsets() {
            frame.set_cursor_position((control.x + x_offset, control.y + y_offset));
        }
        self.render_help(frame, help);
        self.render_events(frame, events);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let key = |k: &'static str| Span::raw(k).blue().bold();
        let lines = if self.editor.field().is_editing() {
            vec![
                Line::from(vec![key("Enter/Tab"), " commit".into()]),
                Line::from(vec![key("Esc"), " cancel".into()]),
                Line::from(vec![key("Up/Down"), " commit and step".into()]),
            ]
        } else {
            vec![
                Line::from(vec![key("e/Enter"), " edit".into()]),
                Line::from(vec![key("+/-"), " step".into()]),
                Line::from(vec![key("%/p/u"), " unit".into()]),
                Line::from(vec![key("d"), " toggle disabled".into()]),
                Line::from(vec![key("r"), " owner sync".into()]),
                Line::from(vec![key("q"), " quit".into()]),
            ]
        };
        frame.render_widget(Paragraph::new(lines).block(Block::bordered().title(" Keys ")), area);
    }

    fn render_events(&self, frame: &mut Frame, area: Rect) {
        let owner = self.owner.borrow();
        let visible = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = owner
            .events
            .iter()
            .rev()
            .take(visible)
            .map(|entry| ListItem::new(Span::raw(entry.clone())))
            .collect();
        let title = match owner.last_value {
            Some(value) => format!(" Owner (last value {value}) "),
            None => " Owner ".to_string(),
        };
        let list = List::new(items).block(
            Block::bordered()
                .title(title)
                .title_style(Style::default().add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(list, area);
    }
}
