use bloco::{
    config::Cli,
    models::Background,
    notepad::Notepad,
    store::{FallbackStore, KeyValueStore},
    theme::{Palette, toggle_label},
};
use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Stylize,
    symbols::border,
    text::{Line, Span, ToSpan},
    widgets::{Block, Clear, List, ListItem, Paragraph},
};
use tracing::info;
use tui_input::{Input, InputRequest, backend::crossterm::EventHandler};
use unicode_width::UnicodeWidthStr;

/// Entries of the background picker, the empty choice first.
const CHOICES: [Option<Background>; 4] = [
    None,
    Some(Background::Blue),
    Some(Background::Yellow),
    Some(Background::Pink),
];

enum Screen {
    Editor,
    Picker,
}

struct App<S: KeyValueStore> {
    notepad: Notepad<S>,
    input: Input,
    current_screen: Screen,
    picker_index: usize,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    bloco::logging::init(&cli.log_file)?;

    let store: FallbackStore = cli.open_store();
    info!(durable = store.is_durable(), db = %cli.db.display(), "starting");

    let mut app = App::new(Notepad::open(store));
    ratatui::run(|t| app.run(t))?;

    Ok(())
}

impl<S: KeyValueStore> App<S> {
    fn new(notepad: Notepad<S>) -> Self {
        let input = Input::default().with_value(notepad.text().to_string());
        App {
            notepad,
            input,
            current_screen: Screen::Editor,
            picker_index: 0,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> std::io::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;
            let event = crossterm::event::read()?;

            if self.handle_key(&event) {
                return Ok(());
            }
        }
    }

    /// Applies one terminal event. Returns `true` when the app should exit.
    fn handle_key(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };

        match self.current_screen {
            Screen::Editor => match (key.modifiers, key.code) {
                (_, KeyCode::Esc) | (KeyModifiers::CONTROL, KeyCode::Char('q')) => {
                    return true;
                }
                (KeyModifiers::CONTROL, KeyCode::Char('l')) => {
                    self.notepad.clear();
                    self.input.reset();
                }
                (KeyModifiers::CONTROL, KeyCode::Char('d')) => {
                    self.notepad.toggle_dark();
                }
                (KeyModifiers::CONTROL, KeyCode::Char('b')) => {
                    self.open_picker();
                }
                (_, KeyCode::Enter) => {
                    let changed = self.input.handle(InputRequest::InsertChar('\n'));
                    self.sync(changed.is_some_and(|c| c.value));
                }
                _ => {
                    let changed = self.input.handle_event(event);
                    self.sync(changed.is_some_and(|c| c.value));
                }
            },
            Screen::Picker => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    self.current_screen = Screen::Editor;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    if self.picker_index == CHOICES.len() - 1 {
                        self.picker_index = 0;
                    } else {
                        self.picker_index += 1;
                    }
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    if self.picker_index == 0 {
                        self.picker_index = CHOICES.len() - 1;
                    } else {
                        self.picker_index -= 1;
                    }
                }
                KeyCode::Enter => {
                    self.notepad.select_background(CHOICES[self.picker_index]);
                    self.current_screen = Screen::Editor;
                }
                _ => {}
            },
        }

        false
    }

    /// Writes the field through to the store whenever its value changed.
    fn sync(&mut self, value_changed: bool) {
        if value_changed {
            self.notepad.edit(self.input.value());
        }
    }

    fn open_picker(&mut self) {
        let current = self.notepad.background();
        self.picker_index = CHOICES.iter().position(|c| *c == current).unwrap_or(0);
        self.current_screen = Screen::Picker;
    }

    fn draw(&self, frame: &mut Frame) {
        self.render_editor(frame);
        if let Screen::Picker = self.current_screen {
            self.render_picker(frame);
        }
    }

    fn render_editor(&self, frame: &mut Frame) {
        let palette = Palette::for_state(self.notepad.is_dark(), self.notepad.background());

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let block = Block::bordered()
            .title("Bloco de notas")
            .border_set(border::THICK)
            .border_style(palette.border())
            .style(palette.surface());

        let inner = block.inner(layout[0]);
        let (row, col) = cursor_row_col(self.input.value(), self.input.cursor());
        let scroll_y = row.saturating_sub(inner.height.max(1) as usize - 1);
        let scroll_x = col.saturating_sub(inner.width.max(1) as usize - 1);

        let note = Paragraph::new(self.input.value())
            .style(palette.surface())
            .scroll((clamp_u16(scroll_y), clamp_u16(scroll_x)))
            .block(block);

        if let Screen::Editor = self.current_screen {
            frame.set_cursor_position((
                inner.x.saturating_add(clamp_u16(col - scroll_x)),
                inner.y.saturating_add(clamp_u16(row - scroll_y)),
            ));
        }

        let background = match self.notepad.background() {
            Some(choice) => choice.as_str(),
            None => "none",
        };
        let status = Line::from_iter([
            self.storage_status(),
            "  background: ".to_span(),
            background.bold(),
        ]);

        let help_message = Line::from_iter([
            "Esc".bold().yellow(),
            " exit, ".to_span(),
            "Ctrl+L".bold().red(),
            " clear, ".to_span(),
            "Ctrl+D".bold().yellow(),
            " ".to_span(),
            Span::raw(toggle_label(self.notepad.is_dark())),
            ", ".to_span(),
            "Ctrl+B".bold().yellow(),
            " background".to_span(),
        ])
        .centered();

        frame.render_widget(note, layout[0]);
        frame.render_widget(status, layout[1]);
        frame.render_widget(help_message, layout[2]);
    }

    /// Read from the store on every frame, it can fall back to memory mid-session.
    fn storage_status(&self) -> Span<'static> {
        if self.notepad.store().is_durable() {
            "saved on every keystroke".green()
        } else {
            "memory only, changes are lost on exit".red()
        }
    }

    fn render_picker(&self, frame: &mut Frame) {
        let area = centered(frame.area(), 24, CHOICES.len() as u16 + 2);

        let items = CHOICES.iter().enumerate().map(|(i, choice)| {
            let label = match choice {
                Some(b) => b.as_str(),
                None => "(none)",
            };
            let item = ListItem::new(Line::from(label)).bold();

            if i == self.picker_index {
                item.black().on_white()
            } else {
                item
            }
        });

        let block = Block::bordered()
            .title("Background")
            .border_set(border::THICK);

        frame.render_widget(Clear, area);
        frame.render_widget(List::new(items).block(block), area);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Line and display column of a char-indexed cursor inside multi-line text.
fn cursor_row_col(value: &str, cursor: usize) -> (usize, usize) {
    let before: String = value.chars().take(cursor).collect();
    let row = before.matches('\n').count();
    let col = before.rsplit('\n').next().map_or(0, |line| line.width());
    (row, col)
}
