use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use std::collections::HashMap;

use setlog::input::MAX_REPS;
use setlog::{Phase, WorkoutSession};

const SETUP_HELP: &str = "a: add exercise | d: delete | j/k: navigate | s: start | q: quit";
const WORKOUT_HELP: &str = "Enter: log reps | j/k: navigate | f: finish | q: quit";
const SUMMARY_HELP: &str = "n: new workout | q: quit";
const EDITOR_HELP: &str = "Tab/Down: next set | Up: previous | Enter: save | Esc: cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    EnteringName,
    EnteringSets,
    EditingReps,
}

/// Screen state around one [`WorkoutSession`]. Every change to the workout
/// goes through the session; this only keeps cursor and text field state.
pub(crate) struct WorkoutApp {
    session: WorkoutSession,
    selected: usize,
    status_message: String,
    input_mode: InputMode,
    name_buffer: String,
    input_buffer: String,
    rep_fields: Vec<String>,
    rep_cursor: usize,
}

impl WorkoutApp {
    pub(crate) fn new() -> Self {
        Self {
            session: WorkoutSession::new(),
            selected: 0,
            status_message: SETUP_HELP.to_string(),
            input_mode: InputMode::Normal,
            name_buffer: String::new(),
            input_buffer: String::new(),
            rep_fields: Vec::new(),
            rep_cursor: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &WorkoutSession {
        &self.session
    }

    fn scroll_down(&mut self) {
        let len = self.session.exercises().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    fn scroll_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Returns true when the user asked to quit.
    pub(crate) fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.input_mode {
            InputMode::Normal => return self.handle_normal_key(code),
            InputMode::EnteringName => match code {
                KeyCode::Enter => {
                    self.name_buffer = std::mem::take(&mut self.input_buffer);
                    self.input_mode = InputMode::EnteringSets;
                    self.status_message = format!("How many sets of {}? (1-10)", self.name_buffer);
                }
                KeyCode::Esc => self.leave_input(SETUP_HELP),
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                _ => {}
            },
            InputMode::EnteringSets => match code {
                KeyCode::Enter => self.add_exercise(),
                KeyCode::Esc => self.leave_input(SETUP_HELP),
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                _ => {}
            },
            InputMode::EditingReps => self.handle_editor_key(code),
        }
        false
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(),
            _ => match self.session.phase() {
                Phase::Setup => match code {
                    KeyCode::Char('a') | KeyCode::Char('A') => {
                        self.input_mode = InputMode::EnteringName;
                        self.input_buffer.clear();
                        self.status_message = "Enter exercise name:".to_string();
                    }
                    KeyCode::Char('d') | KeyCode::Char('D') => self.delete_selected(),
                    KeyCode::Char('s') | KeyCode::Char('S') => self.start_workout(),
                    _ => {}
                },
                Phase::InProgress => match code {
                    KeyCode::Enter => self.open_editor(),
                    KeyCode::Char('f') | KeyCode::Char('F') => self.finish_workout(),
                    _ => {}
                },
                Phase::Summary => {
                    if let KeyCode::Char('n') | KeyCode::Char('N') = code {
                        self.session.reset();
                        self.selected = 0;
                        self.status_message = format!("New workout ready | {}", SETUP_HELP);
                    }
                }
            },
        }
        false
    }

    fn handle_editor_key(&mut self, code: KeyCode) {
        let fields = self.rep_fields.len();
        match code {
            KeyCode::Enter => self.save_reps(),
            KeyCode::Esc => {
                self.session.cancel_editing();
                self.leave_input(WORKOUT_HELP);
            }
            KeyCode::Tab | KeyCode::Down if fields > 0 => {
                self.rep_cursor = (self.rep_cursor + 1) % fields;
            }
            KeyCode::BackTab | KeyCode::Up if fields > 0 => {
                self.rep_cursor = (self.rep_cursor + fields - 1) % fields;
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(field) = self.rep_fields.get_mut(self.rep_cursor) {
                    if field.len() < MAX_REPS.to_string().len() {
                        field.push(c);
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.rep_fields.get_mut(self.rep_cursor) {
                    field.pop();
                }
            }
            _ => {}
        }
    }

    fn leave_input(&mut self, help: &str) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.name_buffer.clear();
        self.rep_fields.clear();
        self.rep_cursor = 0;
        self.status_message = help.to_string();
    }

    fn add_exercise(&mut self) {
        match self
            .session
            .add_exercise_raw(&self.name_buffer, &self.input_buffer)
        {
            Ok(exercise) => {
                self.leave_input(SETUP_HELP);
                self.selected = self.session.exercises().len() - 1;
                self.status_message = format!("Added {} ({} sets)", exercise.name, exercise.set_count);
            }
            Err(e) => {
                self.leave_input(SETUP_HELP);
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    fn delete_selected(&mut self) {
        match self.session.remove_exercise(self.selected) {
            Ok(removed) => {
                let len = self.session.exercises().len();
                if self.selected >= len && len > 0 {
                    self.selected = len - 1;
                }
                self.status_message = format!("Deleted {}", removed.name);
            }
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }

    fn start_workout(&mut self) {
        match self.session.start_workout() {
            Ok(()) => {
                self.selected = 0;
                self.status_message = WORKOUT_HELP.to_string();
            }
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }

    fn open_editor(&mut self) {
        match self.session.select_exercise_for_editing(self.selected) {
            Ok(exercise) => {
                self.rep_fields = exercise
                    .reps
                    .iter()
                    .map(|&r| if r == 0 { String::new() } else { r.to_string() })
                    .collect();
                self.rep_cursor = 0;
                self.input_mode = InputMode::EditingReps;
                self.status_message = EDITOR_HELP.to_string();
            }
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }

    fn save_reps(&mut self) {
        let raw: HashMap<usize, String> = self.rep_fields.iter().cloned().enumerate().collect();
        match self.session.record_reps_raw(&raw) {
            Ok(exercise) => {
                self.leave_input(WORKOUT_HELP);
                self.status_message = format!("Saved {}", exercise);
            }
            Err(e) => {
                self.session.cancel_editing();
                self.leave_input(WORKOUT_HELP);
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    fn finish_workout(&mut self) {
        match self.session.finish_workout() {
            Ok(()) => self.status_message = SUMMARY_HELP.to_string(),
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }
}

fn highlight() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}

fn draw(frame: &mut Frame, app: &WorkoutApp) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .split(frame.area());

    // Header
    let title = match app.session.phase() {
        Phase::Setup => "Setlog - Plan your workout",
        Phase::InProgress => "Setlog - Workout in progress",
        Phase::Summary => "Setlog - Summary",
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    match (app.session.phase(), app.input_mode) {
        (Phase::Setup, InputMode::EnteringName) | (Phase::Setup, InputMode::EnteringSets) => {
            let title = if app.input_mode == InputMode::EnteringName {
                "Exercise Name".to_string()
            } else {
                format!("Sets for {}", app.name_buffer)
            };
            let input_widget = Paragraph::new(app.input_buffer.as_str())
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(input_widget, chunks[1]);
        }
        (Phase::Setup, _) => draw_exercise_list(frame, app, chunks[1], |e| {
            format!("{} - {} sets", e.name(), e.set_count())
        }),
        (Phase::InProgress, _) => {
            draw_exercise_list(frame, app, chunks[1], |e| e.snapshot().to_string());
            if app.input_mode == InputMode::EditingReps {
                draw_rep_editor(frame, app);
            }
        }
        (Phase::Summary, _) => {
            let report = app.session.compute_summary();
            let summary = Paragraph::new(report.to_string())
                .block(Block::default().borders(Borders::ALL).title("Summary"));
            frame.render_widget(summary, chunks[1]);
        }
    }

    // Footer with status
    let footer = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(footer, chunks[2]);
}

fn draw_exercise_list(
    frame: &mut Frame,
    app: &WorkoutApp,
    area: Rect,
    describe: impl Fn(&setlog::Exercise) -> String,
) {
    let exercises = app.session.exercises();
    if exercises.is_empty() {
        let empty_msg = Paragraph::new("No exercises yet.\nPress 'a' to add your first one!")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title("Exercises"));
        frame.render_widget(empty_msg, area);
        return;
    }

    let items: Vec<ListItem> = exercises
        .iter()
        .enumerate()
        .map(|(idx, exercise)| {
            let style = if idx == app.selected {
                highlight()
            } else if exercise.is_completed() {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(describe(exercise)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Exercises ({} total)", exercises.len())),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_rep_editor(frame: &mut Frame, app: &WorkoutApp) {
    let name = app
        .session
        .selected_exercise_index()
        .and_then(|i| app.session.exercise(i))
        .map(|e| e.name().to_string())
        .unwrap_or_default();

    let lines: Vec<Line> = app
        .rep_fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let value = if field.is_empty() { "_" } else { field.as_str() };
            let text = format!("Set {:>2}: {}", idx + 1, value);
            if idx == app.rep_cursor {
                Line::styled(text, highlight())
            } else {
                Line::from(text)
            }
        })
        .collect();

    let area = centered_rect(32, app.rep_fields.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, area);
    let editor = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Reps - {}", name)),
    );
    frame.render_widget(editor, area);
}

pub(crate) fn run(mut terminal: DefaultTerminal) -> Result<()> {
    let mut app = WorkoutApp::new();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(app: &mut WorkoutApp, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    fn add(app: &mut WorkoutApp, name: &str, sets: &str) {
        app.handle_key(KeyCode::Char('a'));
        type_text(app, name);
        app.handle_key(KeyCode::Enter);
        type_text(app, sets);
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn setup_adds_and_deletes() {
        let mut app = WorkoutApp::new();
        add(&mut app, "Squat", "3");
        add(&mut app, "Curl", "2");
        assert_eq!(app.session().exercises().len(), 2);
        assert_eq!(app.selected, 1);
        assert_eq!(app.status_message, "Added Curl (2 sets)");

        add(&mut app, "Curl", "4");
        assert!(app.status_message.starts_with("Error:"));
        assert_eq!(app.input_mode, InputMode::Normal);

        app.handle_key(KeyCode::Char('d'));
        assert_eq!(app.session().exercises().len(), 1);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn start_requires_exercises() {
        let mut app = WorkoutApp::new();
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.session().phase(), Phase::Setup);
        assert!(app.status_message.starts_with("Error:"));
    }

    #[test]
    fn full_workout() {
        let mut app = WorkoutApp::new();
        add(&mut app, "Press", "2");
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.session().phase(), Phase::InProgress);

        app.handle_key(KeyCode::Char('f'));
        assert_eq!(app.session().phase(), Phase::InProgress);

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::EditingReps);
        assert_eq!(app.rep_fields, ["", ""]);
        type_text(&mut app, "3");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "4x");
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session().exercise(0).unwrap().reps(), &[3, 4]);

        app.handle_key(KeyCode::Char('f'));
        assert_eq!(app.session().phase(), Phase::Summary);
        assert_eq!(app.session().compute_summary().total_reps, 7);

        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.session(), &WorkoutSession::new());
        assert!(app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn editor_cancel_keeps_reps() {
        let mut app = WorkoutApp::new();
        add(&mut app, "Row", "2");
        app.handle_key(KeyCode::Char('s'));

        app.handle_key(KeyCode::Enter);
        type_text(&mut app, "5");
        app.handle_key(KeyCode::Enter);

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.rep_fields, ["5", ""]);
        app.handle_key(KeyCode::Backspace);
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.session().selected_exercise_index(), None);
        assert_eq!(app.session().exercise(0).unwrap().reps(), &[5, 0]);
    }

    #[test]
    fn rep_fields_cap_at_three_digits() {
        let mut app = WorkoutApp::new();
        add(&mut app, "Jumps", "1");
        app.handle_key(KeyCode::Char('s'));
        app.handle_key(KeyCode::Enter);
        type_text(&mut app, "12345");
        assert_eq!(app.rep_fields, ["123"]);
        // q is text while the editor is open
        assert!(!app.handle_key(KeyCode::Char('q')));
    }
}
