use crate::model::{classify, Item, ItemId, Pantry, Urgency, DATE_FORMAT};
use crate::storage::{save_items, StoreLocation};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Alignment, Color, Modifier, Rect, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Terminal;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

pub fn run(pantry: Pantry, location: StoreLocation) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let mut app = App::new(pantry, location);
    let result = app.event_loop(&mut terminal);
    teardown_terminal(&mut terminal)?;
    result
}

struct App {
    pantry: Pantry,
    location: StoreLocation,
    selected: usize,
    offset: usize,
    last_save: Instant,
    status: String,
    mode: Mode,
    today: NaiveDate,
}

/// Single-slot edit session: at most one item can be in edit (or pending
/// delete) at a time, keyed by item id with drafts held in the form.
enum Mode {
    Normal,
    Creating(ItemForm),
    Editing { item_id: ItemId, form: ItemForm },
    ConfirmDelete { item_id: ItemId },
}

struct ItemForm {
    name: FieldValue,
    date: FieldValue,
    field: FormField,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum FormField {
    Name,
    Date,
}

enum FormAction {
    Create,
    Edit(ItemId),
}

#[derive(Clone)]
struct FieldValue {
    value: String,
    cursor: usize,
}

impl FieldValue {
    fn new(value: &str) -> Self {
        FieldValue {
            value: value.to_string(),
            cursor: value.len(),
        }
    }

    fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor = prev_grapheme(self.cursor, &self.value);
    }

    fn move_right(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        self.cursor = next_grapheme(self.cursor, &self.value);
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = prev_grapheme(self.cursor, &self.value);
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
    }

    fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    fn with_caret(&self) -> String {
        let mut text = self.value.clone();
        text.insert_str(self.cursor, "▌");
        text
    }
}

impl App {
    fn new(pantry: Pantry, location: StoreLocation) -> Self {
        let status = format!("Loaded {} item(s) from {}", pantry.len(), location.path.display());
        App {
            pantry,
            location,
            selected: 0,
            offset: 0,
            last_save: Instant::now(),
            status,
            mode: Mode::Normal,
            today: Local::now().date_naive(),
        }
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            // Refreshing today on every pass keeps urgency markers honest
            // across a midnight rollover without any persistence.
            self.today = Local::now().date_naive();
            terminal.draw(|f| self.draw(f))?;
            if event::poll(Duration::from_millis(500))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Creating(_) | Mode::Editing { .. } => self.handle_form_key(key),
            Mode::ConfirmDelete { .. } => self.handle_confirm_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.pantry.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('n') => {
                self.mode = Mode::Creating(ItemForm::new());
                self.status = "New item (Tab moves, Enter saves, Esc cancels)".into();
            }
            KeyCode::Char('e') => {
                if let Some(item) = self.current_item() {
                    let item_id = item.id.clone();
                    let name = item.name.clone();
                    let form = ItemForm::from_item(item);
                    self.mode = Mode::Editing { item_id, form };
                    self.status = format!("Editing {}", name);
                } else {
                    self.status = "No item selected to edit".into();
                }
            }
            KeyCode::Char('d') => {
                if let Some(item) = self.current_item() {
                    let item_id = item.id.clone();
                    let name = item.name.clone();
                    self.mode = Mode::ConfirmDelete { item_id };
                    self.status = format!("Delete {}? (y to confirm, n/Esc to cancel)", name);
                } else {
                    self.status = "No item selected to delete".into();
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<bool> {
        let mut close_form = false;
        let mut mode = std::mem::replace(&mut self.mode, Mode::Normal);
        match &mut mode {
            Mode::Creating(form) => {
                close_form = self.process_form_key(FormAction::Create, form, key)?;
            }
            Mode::Editing { item_id, form } => {
                let id = item_id.clone();
                close_form = self.process_form_key(FormAction::Edit(id), form, key)?;
            }
            Mode::ConfirmDelete { .. } | Mode::Normal => {}
        }
        self.mode = if close_form { Mode::Normal } else { mode };
        Ok(false)
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Result<bool> {
        let item_id = match &self.mode {
            Mode::ConfirmDelete { item_id } => item_id.clone(),
            _ => return Ok(false),
        };
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if self.pantry.remove(&item_id) {
                    self.persist(format!("Deleted {}", item_id))?;
                } else {
                    self.status = format!("No item {}", item_id);
                }
                self.mode = Mode::Normal;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.status = "Delete canceled".into();
                self.mode = Mode::Normal;
            }
            _ => {}
        }
        Ok(false)
    }

    fn process_form_key(
        &mut self,
        action: FormAction,
        form: &mut ItemForm,
        key: KeyEvent,
    ) -> Result<bool> {
        let mut close_form = false;
        match key.code {
            KeyCode::Esc => {
                close_form = true;
                self.status = "Canceled".into();
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Left => form.active_field_mut().move_left(),
            KeyCode::Right => form.active_field_mut().move_right(),
            KeyCode::Enter => {
                close_form = self.try_submit(action, form)?;
            }
            KeyCode::Backspace => form.active_field_mut().backspace(),
            KeyCode::Char(c) => {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    form.active_field_mut().insert_char(c);
                }
            }
            _ => {}
        }
        Ok(close_form)
    }

    /// Commit path of the edit session. Invalid drafts leave the store and
    /// the session untouched; the form stays open with the reason in the
    /// status line.
    fn try_submit(&mut self, action: FormAction, form: &mut ItemForm) -> Result<bool> {
        match action {
            FormAction::Create => match self.pantry.add(&form.name.value, &form.date.value) {
                Ok(item) => {
                    self.select_item(&item.id);
                    self.persist(format!("Added {}", item.name))?;
                    Ok(true)
                }
                Err(err) => {
                    self.status = format!("Could not add: {}", err);
                    Ok(false)
                }
            },
            FormAction::Edit(item_id) => {
                match self
                    .pantry
                    .update(&item_id, &form.name.value, &form.date.value)
                {
                    Ok(()) => {
                        self.persist(format!("Updated {}", item_id))?;
                        Ok(true)
                    }
                    Err(err) => {
                        self.status = format!("Could not save: {}", err);
                        Ok(false)
                    }
                }
            }
        }
    }

    fn current_item(&self) -> Option<&Item> {
        self.pantry.sorted().get(self.selected).copied()
    }

    fn select_item(&mut self, id: &str) {
        if let Some(idx) = self.pantry.sorted().iter().position(|item| item.id == id) {
            self.selected = idx;
        }
    }

    fn persist(&mut self, message: impl Into<String>) -> Result<()> {
        save_items(&self.location, self.pantry.items())?;
        self.last_save = Instant::now();
        self.status = message.into();
        self.selected = self.selected.min(self.pantry.len().saturating_sub(1));
        Ok(())
    }

    fn draw(&mut self, f: &mut ratatui::Frame<'_>) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(4),
                Constraint::Length(4),
            ])
            .split(f.size());

        self.draw_header(f, layout[0]);
        self.draw_list(f, layout[1]);
        self.draw_footer(f, layout[2]);

        match &self.mode {
            Mode::Creating(form) => self.draw_form(f, "New Item", form),
            Mode::Editing { form, .. } => self.draw_form(f, "Edit Item", form),
            Mode::ConfirmDelete { item_id } => self.draw_confirm(f, item_id),
            Mode::Normal => {}
        }
    }

    fn draw_header(&self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let scope = match self.location.scope {
            crate::storage::StoreScope::Project => "project",
            crate::storage::StoreScope::Global => "global",
        };
        let title = Line::from(vec![
            Span::styled(
                "shelflife ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(scope, Style::default().fg(Color::Green)),
            Span::raw("  •  "),
            Span::styled(
                format!("{}", self.location.path.display()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  •  "),
            Span::styled(
                format!("saved {}", format_elapsed(self.last_save)),
                Style::default().fg(Color::Gray),
            ),
        ]);
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(title)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
    }

    fn draw_list(&mut self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(Span::styled(
                format!("Items ({})", self.pantry.len()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        if self.pantry.is_empty() {
            let msg = Paragraph::new("Nothing tracked yet — press n to add an item")
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(msg, area);
            return;
        }

        let items: Vec<ListItem<'static>> = self
            .pantry
            .sorted()
            .into_iter()
            .map(|item| item_row(item, classify(item.date, self.today)))
            .collect();

        let viewport = area.height.saturating_sub(2) as usize;
        self.selected = self.selected.min(items.len().saturating_sub(1));
        self.offset = adjust_offset(self.selected, self.offset, viewport, 1, items.len());
        let mut state = ListState::default();
        state.select(Some(self.selected));
        *state.offset_mut() = self.offset;

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::LightCyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );
        f.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(2)])
            .split(area);

        let help = Line::from(vec![
            Span::styled("↑↓ / j k", Style::default().fg(Color::LightCyan)),
            Span::raw(" move  "),
            Span::styled("n", Style::default().fg(Color::LightMagenta)),
            Span::raw(" new  "),
            Span::styled("e", Style::default().fg(Color::LightYellow)),
            Span::raw(" edit  "),
            Span::styled("d", Style::default().fg(Color::LightRed)),
            Span::raw(" delete  "),
            Span::styled("q", Style::default().fg(Color::LightRed)),
            Span::raw(" quit"),
        ]);
        let help_bar = Paragraph::new(help).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(help_bar, rows[0]);

        let status = Paragraph::new(self.status.clone())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(status, rows[1]);
    }

    fn draw_form(&self, f: &mut ratatui::Frame<'_>, title: &str, form: &ItemForm) {
        let area = centered_rect(60, 40, f.size());
        let mut fields = vec![
            field_line("Name", &form.name, form.field == FormField::Name),
            field_line("Date (YYYY-MM-DD)", &form.date, form.field == FormField::Date),
            Line::from(""),
        ];
        let ready = !form.name.value.trim().is_empty() && !form.date.value.trim().is_empty();
        fields.push(Line::from(Span::styled(
            if ready {
                "Enter to save • Esc to cancel • Tab switches field"
            } else {
                "Fill in both fields to save • Esc to cancel"
            },
            Style::default().fg(Color::Gray),
        )));
        let dialog = Paragraph::new(fields)
            .block(
                Block::default()
                    .title(Span::styled(
                        title,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(Clear, area);
        f.render_widget(dialog, area);
    }

    fn draw_confirm(&self, f: &mut ratatui::Frame<'_>, item_id: &str) {
        let area = centered_rect(50, 30, f.size());
        let name = self
            .pantry
            .get(item_id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| item_id.to_string());
        let body = vec![
            Line::from(Span::styled(
                format!("Delete \"{}\"?", name),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press y to confirm, n or Esc to cancel"),
        ];
        let dialog = Paragraph::new(body).alignment(Alignment::Center).block(
            Block::default()
                .title(Span::styled(
                    "Confirm Delete",
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightRed)),
        );
        f.render_widget(Clear, area);
        f.render_widget(dialog, area);
    }
}

impl ItemForm {
    fn new() -> Self {
        ItemForm {
            name: FieldValue::new(""),
            date: FieldValue::new(""),
            field: FormField::Name,
        }
    }

    fn from_item(item: &Item) -> Self {
        ItemForm {
            name: FieldValue::new(&item.name),
            date: FieldValue::new(&item.date.format(DATE_FORMAT).to_string()),
            field: FormField::Name,
        }
    }

    fn toggle_field(&mut self) {
        self.field = match self.field {
            FormField::Name => FormField::Date,
            FormField::Date => FormField::Name,
        };
    }

    fn active_field_mut(&mut self) -> &mut FieldValue {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Date => &mut self.date,
        }
    }
}

fn item_row(item: &Item, urgency: Urgency) -> ListItem<'static> {
    let date_color = match urgency {
        Urgency::Expired => Color::LightRed,
        Urgency::Soon => Color::LightYellow,
        Urgency::Normal => Color::Gray,
    };
    let mut spans = vec![
        Span::styled(format!("[{}]", item.id), Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled(
            format!("{:<32}", truncate_text(&item.name, 32)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            item.date.format(DATE_FORMAT).to_string(),
            Style::default().fg(date_color),
        ),
    ];
    if let Some(label) = urgency.label() {
        spans.push(Span::raw("  "));
        let style = match urgency {
            Urgency::Expired => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(Color::LightYellow),
        };
        spans.push(Span::styled(label, style));
    }
    ListItem::new(Line::from(spans)).style(Style::default().fg(Color::Gray))
}

fn field_line(label: &str, field: &FieldValue, active: bool) -> Line<'static> {
    let label_style = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD | Modifier::DIM);
    let value_style = Style::default().fg(if active { Color::Cyan } else { Color::White });
    let text = if active {
        field.with_caret()
    } else {
        field.value.clone()
    };
    Line::from(vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(text, value_style),
    ])
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}

fn adjust_offset(
    selected: usize,
    current_offset: usize,
    viewport: usize,
    scrolloff: usize,
    len: usize,
) -> usize {
    if viewport == 0 || len == 0 {
        return 0;
    }
    let max_offset = len.saturating_sub(viewport);
    let margin = scrolloff.min(viewport.saturating_sub(1));
    let mut offset = current_offset.min(max_offset);
    if selected < offset.saturating_add(margin) {
        offset = selected.saturating_sub(margin);
    } else {
        let upper = offset
            .saturating_add(viewport.saturating_sub(1))
            .saturating_sub(margin);
        if selected > upper {
            offset = selected.saturating_add(margin + 1).saturating_sub(viewport);
        }
    }
    offset.min(max_offset)
}

fn truncate_text(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.chars().count() >= max.saturating_sub(3) {
            out.push_str("...");
            break;
        }
        out.push(ch);
    }
    if out.chars().count() > max {
        out.truncate(max);
    }
    out
}

fn format_elapsed(last: Instant) -> String {
    let secs = last.elapsed().as_secs();
    if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}

fn prev_grapheme(cursor: usize, text: &str) -> usize {
    if cursor == 0 {
        return 0;
    }
    let mut prev = 0;
    for (idx, _) in text.char_indices() {
        if idx >= cursor {
            break;
        }
        prev = idx;
    }
    prev
}

fn next_grapheme(cursor: usize, text: &str) -> usize {
    for (idx, ch) in text.char_indices() {
        if idx > cursor {
            return idx;
        }
        if idx == cursor {
            return cursor + ch.len_utf8();
        }
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{load_items, StoreScope};

    fn test_app(dir: &tempfile::TempDir) -> App {
        let location = StoreLocation {
            path: dir.path().join("items.json"),
            scope: StoreScope::Project,
        };
        App::new(Pantry::default(), location)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn create_flow_adds_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        press(&mut app, KeyCode::Char('n'));
        assert!(matches!(app.mode, Mode::Creating(_)));
        type_text(&mut app, "Jam");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2024-06-01");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.pantry.len(), 1);
        let on_disk = load_items(&app.location);
        assert_eq!(on_disk.len(), 1);
        assert_eq!(on_disk[0].name, "Jam");
    }

    #[test]
    fn cancel_discards_draft_edits() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let item = app.pantry.add("Milk", "2024-01-05").unwrap();
        app.persist("seeded").unwrap();

        press(&mut app, KeyCode::Char('e'));
        assert!(matches!(app.mode, Mode::Editing { .. }));
        type_text(&mut app, "xxx");
        press(&mut app, KeyCode::Esc);

        assert!(matches!(app.mode, Mode::Normal));
        let stored = app.pantry.get(&item.id).unwrap();
        assert_eq!(stored.name, "Milk");
        assert_eq!(stored.date.to_string(), "2024-01-05");
    }

    #[test]
    fn save_with_empty_name_keeps_editing() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let item = app.pantry.add("Milk", "2024-01-05").unwrap();
        app.persist("seeded").unwrap();

        press(&mut app, KeyCode::Char('e'));
        for _ in 0.."Milk".len() {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Editing { .. }));
        assert_eq!(app.pantry.get(&item.id).unwrap().name, "Milk");
    }

    #[test]
    fn edit_commit_updates_store_and_closes_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let item = app.pantry.add("Milk", "2024-01-05").unwrap();
        app.persist("seeded").unwrap();

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, " 2%");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.pantry.get(&item.id).unwrap().name, "Milk 2%");
        assert_eq!(load_items(&app.location)[0].name, "Milk 2%");
    }

    #[test]
    fn delete_requires_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        let item = app.pantry.add("Milk", "2024-01-05").unwrap();
        app.persist("seeded").unwrap();

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Esc);
        assert!(app.pantry.get(&item.id).is_some());

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.pantry.get(&item.id).is_none());
        assert!(load_items(&app.location).is_empty());
    }
}
