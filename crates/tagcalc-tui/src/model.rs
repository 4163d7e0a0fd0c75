//! TUI application model (Elm architecture).

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tagcalc_core::{FormulaEditor, SubscriptionId, Suggestion};
use tagcalc_suggest::SuggestionCache;

use crate::bridge::{spawn_fetch, TuiStoreObserver};
use crate::chips::render_chips;
use crate::dropdown::render_dropdown;
use crate::error::TuiError;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::hit::{Hit, HitRegions};
use crate::input::render_input;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::result::render_result;
use crate::table::render_table;

const TICK_RATE: Duration = Duration::from_millis(100);

/// TUI application state (Elm Model).
pub struct TuiApp {
    pub should_quit: bool,
    pub editor: FormulaEditor,
    /// `None` until the first fetch completes.
    pub suggestions: Option<Arc<[Suggestion]>>,
    /// Regions drawn in the last frame.
    pub regions: HitRegions,
    /// Number of store changes seen.
    pub store_revision: u64,
    pub terminal_width: u16,
    pub terminal_height: u16,
    rx: Receiver<TuiMessage>,
    tx: Sender<TuiMessage>,
    cache: Option<Arc<SuggestionCache>>,
    fetch_pending: bool,
    subscription: SubscriptionId,
}

impl TuiApp {
    /// Create the app around an editor. Without a cache the widget runs with
    /// an empty suggestion list.
    #[must_use]
    pub fn new(mut editor: FormulaEditor, cache: Option<Arc<SuggestionCache>>) -> Self {
        let (tx, rx) = unbounded();
        let subscription = editor
            .store_mut()
            .subscribe(Arc::new(TuiStoreObserver::new(tx.clone())));
        let suggestions = if cache.is_none() {
            Some(Arc::from(Vec::new()))
        } else {
            None
        };
        Self {
            should_quit: false,
            editor,
            suggestions,
            regions: HitRegions::default(),
            store_revision: 0,
            terminal_width: 80,
            terminal_height: 24,
            rx,
            tx,
            cache,
            fetch_pending: false,
            subscription,
        }
    }

    /// Sender for posting messages into the update loop.
    #[must_use]
    pub fn sender(&self) -> Sender<TuiMessage> {
        self.tx.clone()
    }

    #[must_use]
    pub fn is_fetch_pending(&self) -> bool {
        self.fetch_pending
    }

    /// Unsubscribe from the store and hand the editor back.
    #[must_use]
    pub fn finish(mut self) -> FormulaEditor {
        self.editor.store_mut().unsubscribe(self.subscription);
        std::mem::take(&mut self.editor)
    }

    /// Start a background fetch unless one is already running.
    pub fn start_fetch(&mut self) {
        if self.fetch_pending {
            return;
        }
        if let Some(cache) = &self.cache {
            self.fetch_pending = true;
            spawn_fetch(Arc::clone(cache), self.tx.clone());
        }
    }

    /// Refetch when the cached list has outlived its freshness window.
    fn refresh_if_stale(&mut self) {
        let stale = self
            .cache
            .as_ref()
            .is_some_and(|c| c.peek().is_some() && !c.is_fresh_at(Instant::now()));
        if stale {
            tracing::info!("suggestions stale, refetching");
            self.start_fetch();
        }
    }

    /// Drain pending messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::SuggestionsLoaded(list) => {
                tracing::debug!(count = list.len(), "suggestions loaded");
                self.suggestions = Some(list);
                self.fetch_pending = false;
            }
            TuiMessage::StoreChanged(event) => {
                tracing::trace!(?event, "store changed");
                self.store_revision += 1;
            }
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::PointerDown { column, row } => self.handle_pointer(column, row),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Tick => {}
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    fn open_option_count(&self, suggestions: &[Suggestion]) -> usize {
        self.editor
            .view(Some(suggestions))
            .open_chip()
            .map_or(0, |chip| chip.options.len())
    }

    /// Apply a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        let list = self.suggestions.clone();
        let suggestions: &[Suggestion] = list.as_deref().unwrap_or(&[]);
        let dropdown_open = self.editor.open_dropdown().is_some();

        match action {
            KeyAction::Insert(c) => {
                self.editor.insert_char(c);
                self.refresh_if_stale();
            }
            KeyAction::Backspace => self.editor.backspace(),
            KeyAction::Delete => self.editor.delete_forward(),
            KeyAction::Left => self.editor.caret_left(),
            KeyAction::Right => self.editor.caret_right(),
            KeyAction::Home => self.editor.caret_home(),
            KeyAction::End => self.editor.caret_end(),
            KeyAction::Escape => self.editor.escape(),
            KeyAction::Up if dropdown_open => self.editor.highlight_prev_option(),
            KeyAction::Up => self.editor.highlight_prev_row(),
            KeyAction::Down if dropdown_open => {
                let count = self.open_option_count(suggestions);
                self.editor.highlight_next_option(count);
            }
            KeyAction::Down => self.editor.highlight_next_row(suggestions.len()),
            KeyAction::Enter if dropdown_open => self.editor.select_highlighted_option(suggestions),
            KeyAction::Enter => self.editor.enter(suggestions),
            KeyAction::NextDropdown => self.editor.cycle_dropdown(true),
            KeyAction::PrevDropdown => self.editor.cycle_dropdown(false),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Hit-test a pointer-down against the last frame, close what it landed
    /// outside of, then activate the target.
    pub fn handle_pointer(&mut self, column: u16, row: u16) {
        let hit = self.regions.hit(column, row);
        tracing::debug!(?hit, column, row, "pointer down");
        self.editor.pointer_down(&hit.target());

        let list = self.suggestions.clone();
        let suggestions: &[Suggestion] = list.as_deref().unwrap_or(&[]);
        match hit {
            Hit::Input { column } => self.editor.set_caret_column(column),
            Hit::TableRow(index) => {
                if let Some(suggestion) = suggestions.get(index) {
                    self.editor.select_suggestion(suggestion);
                }
            }
            Hit::DropdownOption { dropdown_id, index } => {
                let view = self.editor.view(Some(suggestions));
                let picked = view
                    .chip(&dropdown_id)
                    .and_then(|chip| chip.options.get(index).map(|o| (chip.name.clone(), o.value.clone())));
                if let Some((tag, value)) = picked {
                    self.editor.select_tag_value(&tag, &value);
                }
            }
            Hit::Toggle(id) => self.editor.toggle_dropdown(&id),
            Hit::Table | Hit::Dropdown(_) | Hit::Elsewhere => {}
        }
    }

    /// Vertical layout: header, input, chips, result, table, footer.
    #[must_use]
    pub fn compute_layout(area: Rect) -> [Rect; 6] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(2),
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4], chunks[5]]
    }

    /// Render the full view and record its hit regions.
    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        let bounds = frame.area();
        let [header, input, chips, result, table, footer] = Self::compute_layout(bounds);
        let list = self.suggestions.clone();
        let suggestions = list.as_deref();

        render_header(frame, header, suggestions.map(<[Suggestion]>::len));
        let input_layout = render_input(
            frame,
            input,
            self.editor.input(),
            self.editor.caret_column(),
        );
        let view = self.editor.view(suggestions);
        let toggles = render_chips(frame, chips, &view);
        render_result(frame, result, self.editor.result().as_deref());

        let mut regions = HitRegions {
            input: Some(input),
            input_text: Some(input_layout.text),
            input_scroll: input_layout.scroll,
            toggles,
            ..HitRegions::default()
        };

        if self.editor.is_table_open() {
            let layout = render_table(frame, table, suggestions, self.editor.table_highlight());
            regions.table = Some(layout.area);
            regions.table_rows = layout.rows;
        }
        render_footer(frame, footer);

        if let Some(chip) = view.open_chip() {
            let anchor = regions
                .toggles
                .iter()
                .find(|(_, id)| *id == chip.dropdown_id)
                .map(|(rect, _)| *rect);
            if let Some(anchor) = anchor {
                let layout = render_dropdown(
                    frame,
                    anchor,
                    bounds,
                    chip,
                    self.editor.dropdown_highlight(),
                    suggestions.is_none(),
                );
                regions.dropdown = Some((layout.area, chip.dropdown_id.clone()));
                regions.options = layout.options;
            }
        }

        self.regions = regions;
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Translate a terminal event into a message.
    #[must_use]
    pub fn translate_event(event: Event) -> Option<TuiMessage> {
        match event {
            Event::Key(key) => match map_key(key) {
                KeyAction::None => None,
                action => Some(TuiMessage::KeyPress(action)),
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(TuiMessage::PointerDown { column, row }),
            Event::Resize(width, height) => Some(TuiMessage::Resize { width, height }),
            _ => None,
        }
    }

    /// Run the event loop until quit. The terminal is restored even when
    /// the loop fails.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut terminal = Self::setup_terminal()?;
        self.start_fetch();
        let outcome = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        outcome
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), TuiError> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(TICK_RATE)? {
                if let Some(msg) = Self::translate_event(event::read()?) {
                    self.handle_message(msg);
                }
            } else {
                self.handle_message(TuiMessage::Tick);
            }

            self.update();
        }
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        self.editor.store_mut().unsubscribe(self.subscription);
    }
}
