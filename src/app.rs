use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::config::Config;
use crate::event::AppEvent;
use crate::navigation::{Navigator, Route, RouteStack};
use crate::schedule::talk::ScheduleData;
use crate::screen::lifecycle::{AppState, ListenerTable};
use crate::screen::schedule::ScheduleScreen;
use crate::screen::scroll::{BarStyle, StatusBar};
use crate::ui::components::schedule_view::ScheduleAreas;
use crate::ui::theme::Theme;

const WHEEL_STEP: f32 = 3.0;

pub struct App {
    pub routes: RouteStack,
    pub chrome: StatusBar,
    pub schedule: ScheduleScreen,
    pub theme: Theme,
    pub mouse_enabled: bool,
    pub should_quit: bool,
    listeners: ListenerTable,
    area: Rect,
}

impl App {
    pub fn new(data: ScheduleData, clock: Box<dyn Clock>, config: &Config, theme: Theme) -> Self {
        let listeners = ListenerTable::default();
        let schedule = ScheduleScreen::new(Rc::new(data), clock, config.screen_options())
            .with_listeners(listeners.clone());
        Self {
            routes: RouteStack::default(),
            chrome: StatusBar::default(),
            schedule,
            theme,
            mouse_enabled: config.mouse,
            should_quit: false,
            listeners,
            area: Rect::default(),
        }
    }

    pub fn start(&mut self) {
        self.schedule.mount();
    }

    pub fn shutdown(&mut self) {
        self.schedule.unmount();
        if self.listeners.live() > 0 {
            warn!(live = self.listeners.live(), "listeners left after shutdown");
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        let list = ScheduleAreas::new(self.area, &self.schedule).list;
        self.schedule
            .set_viewport(u32::from(list.height), &mut self.chrome);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
            AppEvent::Foreground => self.schedule.handle_app_state(AppState::Active),
            AppEvent::Background => self.schedule.handle_app_state(AppState::Background),
            AppEvent::Tick => self.schedule.tick(&mut self.chrome),
            AppEvent::Resize(w, h) => self.resize(w, h),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.routes.current() {
            Route::Schedule => self.handle_schedule_key(key),
            Route::Talk { talk_index } => self.handle_talk_key(key, talk_index),
            Route::Info => self.handle_info_key(key),
        }
    }

    fn handle_schedule_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let screen = &mut self.schedule;
        let chrome = &mut self.chrome;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => screen.select_next(chrome),
            KeyCode::Char('k') | KeyCode::Up => screen.select_previous(chrome),
            KeyCode::Char('J') => screen.scroll_by(1.0, chrome),
            KeyCode::Char('K') => screen.scroll_by(-1.0, chrome),
            KeyCode::Char('d') if ctrl => screen.page_down(chrome),
            KeyCode::Char('u') if ctrl => screen.page_up(chrome),
            KeyCode::PageDown | KeyCode::Char(' ') => screen.page_down(chrome),
            KeyCode::PageUp => screen.page_up(chrome),
            KeyCode::Char('g') | KeyCode::Home => screen.scroll_to(0.0, chrome),
            KeyCode::Char('G') | KeyCode::End => screen.scroll_to(f32::MAX, chrome),
            KeyCode::Enter => {
                screen.press_selected(chrome, &mut self.routes);
            }
            KeyCode::Char('n') => screen.press_now_button(),
            KeyCode::Char('i') => screen.open_event_info(chrome, &mut self.routes),
            _ => {}
        }
    }

    fn handle_talk_key(&mut self, key: KeyEvent, talk_index: usize) {
        let data = Rc::clone(self.schedule.data());
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => self.go_back(),
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(prev) = data.previous_talk(talk_index) {
                    self.routes.replace(Route::Talk { talk_index: prev });
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(next) = data.next_talk(talk_index) {
                    self.routes.replace(Route::Talk { talk_index: next });
                }
            }
            KeyCode::Char('i') => {
                self.chrome.set_style(BarStyle::Default);
                self.routes.navigate(Route::Info);
            }
            _ => {}
        }
    }

    fn handle_info_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace) {
            self.go_back();
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.mouse_enabled || self.routes.current() != Route::Schedule {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => self.schedule.scroll_by(WHEEL_STEP, &mut self.chrome),
            MouseEventKind::ScrollUp => self.schedule.scroll_by(-WHEEL_STEP, &mut self.chrome),
            MouseEventKind::Down(MouseButton::Left) => {
                let at = Position::new(mouse.column, mouse.row);
                let areas = ScheduleAreas::new(self.area, &self.schedule);
                if areas.now_button.is_some_and(|r| r.contains(at)) {
                    self.schedule.press_now_button();
                } else if areas.navbar.is_some_and(|r| r.contains(at)) {
                    self.schedule.open_event_info(&mut self.chrome, &mut self.routes);
                } else if areas.list.contains(at) {
                    self.schedule
                        .press_at(at.y - areas.list.y, &mut self.chrome, &mut self.routes);
                }
            }
            _ => {}
        }
    }

    fn go_back(&mut self) {
        let Some(route) = self.routes.back() else {
            return;
        };
        debug!(screen = route.name(), "back");
        if route == Route::Schedule {
            self.schedule.focus_regained(&mut self.chrome);
        }
    }
}
