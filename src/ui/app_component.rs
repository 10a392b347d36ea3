//! Widget composition and application state

use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::constants::{NOTICE_TTL_MILLIS, SUCCESS_COPIED};
use crate::ui::components::{
    ClockComponent, DateComponent, DurationComponent, HelpPanel, PeriodComponent, StatusBar, TimestampComponent,
};
use crate::ui::core::{
    actions::{Action, Notice},
    clock::ClockHandle,
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Which widget keyboard input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Clock,
    Timestamp,
    Date,
    Period,
    Duration,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Clock => Focus::Timestamp,
            Focus::Timestamp => Focus::Date,
            Focus::Date => Focus::Period,
            Focus::Period => Focus::Duration,
            Focus::Duration => Focus::Clock,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Clock => Focus::Duration,
            Focus::Timestamp => Focus::Clock,
            Focus::Date => Focus::Timestamp,
            Focus::Period => Focus::Date,
            Focus::Duration => Focus::Period,
        }
    }
}

/// A notice plus when it appeared, so it can expire.
struct ActiveNotice {
    notice: Notice,
    shown_at: Instant,
}

pub struct AppComponent {
    // Component composition
    clock: ClockComponent,
    timestamp: TimestampComponent,
    date: DateComponent,
    period: PeriodComponent,
    duration: DurationComponent,
    help: HelpPanel,

    // UI state
    focus: Focus,
    show_help: bool,
    notice: Option<ActiveNotice>,
    should_quit: bool,

    // Services
    clipboard: ClipboardSink,
    clock_task: Option<ClockHandle>,
    action_sender: mpsc::UnboundedSender<Action>,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
}

impl AppComponent {
    pub fn new(config: &Config) -> Self {
        let reference = config.default_reference();
        let date_format = config.display.date_format.clone();
        let (action_sender, background_action_rx) = mpsc::unbounded_channel();

        let clock_task = if config.ui.clock_autostart {
            Some(ClockHandle::spawn(action_sender.clone()))
        } else {
            None
        };

        let mut clock = ClockComponent::new(clock_task.is_some());
        clock.on_focus();

        Self {
            clock,
            timestamp: TimestampComponent::new(reference, date_format.clone()),
            date: DateComponent::new(reference),
            period: PeriodComponent::new(reference, date_format),
            duration: DurationComponent::new(),
            help: HelpPanel::new(),
            focus: Focus::default(),
            show_help: false,
            notice: None,
            should_quit: false,
            clipboard: ClipboardSink::new(),
            clock_task,
            action_sender,
            background_action_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: EventType) {
        match event {
            EventType::Key(key) => {
                let action = self.handle_key(key);
                self.dispatch(action);
            }
            EventType::Tick => self.on_tick(),
            EventType::Resize(_, _) | EventType::Other => {}
        }
    }

    /// Drain background actions and expire the notice.
    fn on_tick(&mut self) {
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.dispatch(action);
        }
        if let Some(active) = &self.notice {
            if active.shown_at.elapsed() >= Duration::from_millis(NOTICE_TTL_MILLIS) {
                self.notice = None;
            }
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific.
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        // The help panel swallows everything else while it is open.
        if self.show_help {
            return match key.code {
                KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q') => Action::ShowHelp(false),
                KeyCode::Up => Action::HelpScrollUp,
                KeyCode::Down => Action::HelpScrollDown,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::F(1) => Action::ShowHelp(true),
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            _ => self.focused_component_mut().handle_key_events(key),
        }
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrevious => self.set_focus(self.focus.previous()),
            Action::Copy(text) => {
                // A failed clipboard write only skips the confirmation.
                if self.clipboard.copy(&text) {
                    self.show_notice(Notice::success(SUCCESS_COPIED));
                }
            }
            Action::Notify(notice) => self.show_notice(notice),
            Action::ClockTick(timestamp) => self.clock.set_current(timestamp),
            Action::ToggleClock => self.toggle_clock(),
            Action::ShowHelp(show) => {
                self.show_help = show;
                self.help.scroll_offset = 0;
            }
            Action::HelpScrollUp => self.help.scroll_up(),
            Action::HelpScrollDown => self.help.scroll_down(),
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focused_component_mut().on_blur();
        self.focus = focus;
        self.focused_component_mut().on_focus();
    }

    fn focused_component_mut(&mut self) -> &mut dyn Component {
        match self.focus {
            Focus::Clock => &mut self.clock,
            Focus::Timestamp => &mut self.timestamp,
            Focus::Date => &mut self.date,
            Focus::Period => &mut self.period,
            Focus::Duration => &mut self.duration,
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        log::info!("notice: {}", notice.text);
        self.notice = Some(ActiveNotice {
            notice,
            shown_at: Instant::now(),
        });
    }

    fn toggle_clock(&mut self) {
        match self.clock_task.take() {
            Some(task) => {
                task.stop();
                self.clock.running = false;
            }
            None => {
                self.clock_task = Some(ClockHandle::spawn(self.action_sender.clone()));
                self.clock.running = true;
            }
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let main = LayoutManager::main_layout(area);
        self.clock.render(f, main[0]);

        let grid = LayoutManager::grid_layout(main[1]);
        self.timestamp.render(f, grid[0]);
        self.date.render(f, grid[1]);
        self.period.render(f, grid[2]);
        self.duration.render(f, grid[3]);

        StatusBar::render(
            f,
            main[2],
            self.notice.as_ref().map(|active| &active.notice),
            self.focus == Focus::Clock,
        );

        if self.show_help {
            self.help.render(f);
        }
    }
}
