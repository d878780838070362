mod forms;

use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event};

use crate::{
    client::Client,
    config::AppConfig,
    error::{AppError, Result},
    local_state::Preferences,
    ui::{
        self, Theme,
        keymap::{AppAction, map_key},
    },
    view_model::{ActionError, DateRange, Gate, Panel, ValidationError, ViewModel},
};

pub use forms::{FieldKind, FieldSpec, FormDraft, RECORD_ACCOUNT_FIELD};

/// Which modal form currently takes the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveModal {
    Account,
    Category,
    Record,
    Password,
    Range,
}

pub struct AppState {
    pub vm: ViewModel<Client>,
    pub prefs: Preferences,
    /// Password typed on the gate screen.
    pub password: String,
    /// Cursor inside the visible list.
    pub selected: usize,
    /// Focused field of the open modal.
    pub focus: usize,
}

impl AppState {
    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.prefs.lightmode)
    }

    pub fn active_modal(&self) -> Option<ActiveModal> {
        let vm = &self.vm;
        if vm.password_modal.is_some() {
            Some(ActiveModal::Password)
        } else if vm.range_modal.is_some() {
            Some(ActiveModal::Range)
        } else if vm.record_modal.is_some() {
            Some(ActiveModal::Record)
        } else if vm.account_modal.is_some() {
            Some(ActiveModal::Account)
        } else if vm.category_modal.is_some() {
            Some(ActiveModal::Category)
        } else {
            None
        }
    }

    /// The open form with the problem found on its last submit.
    pub fn active_form(&self) -> Option<(&dyn FormDraft, Option<&ValidationError>)> {
        let vm = &self.vm;
        match self.active_modal()? {
            ActiveModal::Account => vm
                .account_modal
                .as_ref()
                .map(|m| (&m.draft as &dyn FormDraft, m.invalid.as_ref())),
            ActiveModal::Category => vm
                .category_modal
                .as_ref()
                .map(|m| (&m.draft as &dyn FormDraft, m.invalid.as_ref())),
            ActiveModal::Record => vm
                .record_modal
                .as_ref()
                .map(|m| (&m.draft as &dyn FormDraft, m.invalid.as_ref())),
            ActiveModal::Password => vm
                .password_modal
                .as_ref()
                .map(|m| (&m.draft as &dyn FormDraft, m.invalid.as_ref())),
            ActiveModal::Range => vm
                .range_modal
                .as_ref()
                .map(|m| (&m.draft as &dyn FormDraft, m.invalid.as_ref())),
        }
    }

    fn active_form_mut(&mut self) -> Option<&mut dyn FormDraft> {
        let modal = self.active_modal()?;
        let vm = &mut self.vm;
        match modal {
            ActiveModal::Account => vm
                .account_modal
                .as_mut()
                .map(|m| &mut m.draft as &mut dyn FormDraft),
            ActiveModal::Category => vm
                .category_modal
                .as_mut()
                .map(|m| &mut m.draft as &mut dyn FormDraft),
            ActiveModal::Record => vm
                .record_modal
                .as_mut()
                .map(|m| &mut m.draft as &mut dyn FormDraft),
            ActiveModal::Password => vm
                .password_modal
                .as_mut()
                .map(|m| &mut m.draft as &mut dyn FormDraft),
            ActiveModal::Range => vm
                .range_modal
                .as_mut()
                .map(|m| &mut m.draft as &mut dyn FormDraft),
        }
    }

    /// Number of rows of the visible list.
    pub fn list_len(&self) -> usize {
        match self.vm.panel() {
            Panel::Accounts => self.vm.accounts().len(),
            Panel::Categories => self.vm.categories().len(),
            Panel::Records => self.vm.records().records.len(),
            Panel::Home | Panel::None => 0,
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.list_len();
        if len == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(len - 1);
        }
    }
}

pub struct App {
    config: AppConfig,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let prefs = Preferences::load(&config.state_path)?;
        let range = DateRange::ending(Local::now().date_naive(), prefs.summary_date_interval);

        let state = AppState {
            vm: ViewModel::new(client, range),
            prefs,
            password: String::new(),
            selected: 0,
            focus: 0,
        };

        Ok(Self {
            config,
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        tracing::info!(base_url = %self.config.base_url, "starting ledger tui");
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn draw(&self, terminal: &mut ui::Terminal) -> Result<()> {
        terminal
            .draw(|frame| ui::render(frame, &self.state))
            .map_err(|err| AppError::Terminal(err.to_string()))?;
        Ok(())
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.draw(terminal)?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    let action = map_key(key);
                    if action != AppAction::None {
                        self.handle_action(action, terminal).await?;
                    }
                }
            }
        }

        Ok(())
    }

    async fn handle_action(&mut self, action: AppAction, terminal: &mut ui::Terminal) -> Result<()> {
        if action == AppAction::Quit {
            self.should_quit = true;
            return Ok(());
        }
        // Alerts stay until the next key press.
        let had_toast = self.state.vm.toast().is_some();
        self.state.vm.dismiss_toast();

        if self.state.vm.gate() != Gate::Unlocked {
            return self.handle_gate_action(action, terminal).await;
        }
        if self.state.active_modal().is_some() {
            self.handle_modal_action(action).await;
            return Ok(());
        }
        if action == AppAction::Cancel && had_toast {
            return Ok(());
        }
        self.handle_panel_action(action).await;
        Ok(())
    }

    async fn handle_gate_action(
        &mut self,
        action: AppAction,
        terminal: &mut ui::Terminal,
    ) -> Result<()> {
        match action {
            AppAction::Input(ch) => self.state.password.push(ch),
            AppAction::Backspace => {
                self.state.password.pop();
            }
            AppAction::Cancel => self.state.password.clear(),
            AppAction::Submit => {
                self.state.vm.begin_unlock();
                self.draw(terminal)?;

                let password = std::mem::take(&mut self.state.password);
                if let Err(err) = self.state.vm.unlock(&password).await {
                    tracing::warn!("unlock failed: {err}");
                }
                self.state.selected = 0;
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_modal_action(&mut self, action: AppAction) {
        let focus = self.state.focus;
        match action {
            AppAction::Cancel => {
                self.state.vm.close_modals();
                self.state.focus = 0;
            }
            AppAction::NextField | AppAction::Down => self.move_focus(1),
            AppAction::PrevField | AppAction::Up => self.move_focus(-1),
            AppAction::Left | AppAction::Right | AppAction::Input(' ')
                if self.focused_kind() == Some(FieldKind::Choice) =>
            {
                if let Some(form) = self.state.active_form_mut() {
                    form.cycle(focus);
                }
            }
            AppAction::Input(ch) => {
                if let Some(field) = self
                    .state
                    .active_form_mut()
                    .and_then(|form| form.text_mut(focus))
                {
                    field.push(ch);
                }
                self.after_edit();
            }
            AppAction::Backspace => {
                if let Some(field) = self
                    .state
                    .active_form_mut()
                    .and_then(|form| form.text_mut(focus))
                {
                    field.pop();
                }
                self.after_edit();
            }
            AppAction::Submit => self.submit_modal().await,
            _ => {}
        }
    }

    fn focused_kind(&self) -> Option<FieldKind> {
        let (form, _) = self.state.active_form()?;
        form.fields().get(self.state.focus).map(|field| field.kind)
    }

    fn move_focus(&mut self, delta: isize) {
        let Some(len) = self
            .state
            .active_form()
            .map(|(form, _)| form.fields().len())
        else {
            return;
        };
        if len == 0 {
            return;
        }
        let next = (self.state.focus as isize + delta).rem_euclid(len as isize);
        self.state.focus = next as usize;
    }

    /// Keeps the record pay type in step with the typed account.
    fn after_edit(&mut self) {
        if self.state.active_modal() == Some(ActiveModal::Record)
            && self.state.focus == RECORD_ACCOUNT_FIELD
        {
            self.state.vm.set_record_pay_type();
        }
    }

    async fn submit_modal(&mut self) {
        let Some(modal) = self.state.active_modal() else {
            return;
        };
        let vm = &mut self.state.vm;
        let outcome = match modal {
            ActiveModal::Account => vm.set_account().await,
            ActiveModal::Category => vm.set_category().await,
            ActiveModal::Record => vm.set_record().await,
            ActiveModal::Password => vm.change_password().await,
            ActiveModal::Range => vm.apply_range().await,
        };
        if let Err(err) = outcome {
            tracing::debug!(?modal, "submit failed: {err}");
        }

        if self.state.active_modal().is_none() {
            self.state.focus = 0;
        }
        self.state.clamp_selection();
    }

    async fn handle_panel_action(&mut self, action: AppAction) {
        let outcome = match action {
            AppAction::Down => {
                self.select(1);
                Ok(())
            }
            AppAction::Up => {
                self.select(-1);
                Ok(())
            }
            AppAction::Submit => self.open_selected(),
            AppAction::Input(ch) => self.handle_panel_key(ch).await,
            _ => Ok(()),
        };
        if let Err(err) = outcome {
            tracing::debug!("action failed: {err}");
        }
        self.state.clamp_selection();
    }

    async fn handle_panel_key(&mut self, ch: char) -> std::result::Result<(), ActionError> {
        let vm = &mut self.state.vm;
        match ch {
            'q' => self.should_quit = true,
            'h' => {
                vm.show_home();
                self.state.selected = 0;
            }
            'a' => {
                if vm.show_accounts().await {
                    self.state.selected = 0;
                }
            }
            'c' => {
                if vm.show_categories().await {
                    self.state.selected = 0;
                }
            }
            'r' => {
                if vm.show_records().await {
                    self.state.selected = 0;
                }
            }
            'j' => self.select(1),
            'k' => self.select(-1),
            'n' => {
                self.state.focus = 0;
                match vm.panel() {
                    Panel::Accounts => vm.open_input_account(None)?,
                    Panel::Categories => vm.open_input_category(None)?,
                    Panel::Records | Panel::Home | Panel::None => vm.open_input_record(None)?,
                }
            }
            'e' => self.open_selected()?,
            'x' => {
                let index = self.state.selected;
                match vm.panel() {
                    Panel::Accounts => vm.delete_account(index).await?,
                    Panel::Categories => vm.delete_category(index).await?,
                    Panel::Records => vm.delete_record(index).await?,
                    Panel::Home | Panel::None => {}
                }
            }
            '[' => {
                let days = self.state.prefs.summary_date_interval as i64;
                vm.shift_range(-days).await?;
            }
            ']' => {
                let days = self.state.prefs.summary_date_interval as i64;
                vm.shift_range(days).await?;
            }
            '+' | '-' => {
                let delta = if ch == '+' { 1 } else { -1 };
                self.state.prefs.adjust_interval(delta);
                self.save_prefs();
                let days = self.state.prefs.summary_date_interval;
                self.state
                    .vm
                    .reset_range(Local::now().date_naive(), days)
                    .await?;
            }
            'd' => {
                self.state.focus = 0;
                vm.open_range();
            }
            'p' => {
                self.state.focus = 0;
                vm.open_preferences();
            }
            'm' => {
                self.state.prefs.toggle_lightmode();
                self.save_prefs();
            }
            _ => {}
        }
        Ok(())
    }

    fn open_selected(&mut self) -> std::result::Result<(), ActionError> {
        let index = Some(self.state.selected);
        self.state.focus = 0;
        let vm = &mut self.state.vm;
        match vm.panel() {
            Panel::Accounts => vm.open_input_account(index),
            Panel::Categories => vm.open_input_category(index),
            Panel::Records => vm.open_input_record(index),
            Panel::Home | Panel::None => Ok(()),
        }
    }

    fn select(&mut self, delta: isize) {
        let len = self.state.list_len();
        if len == 0 {
            self.state.selected = 0;
            return;
        }
        let next = (self.state.selected as isize + delta).clamp(0, len as isize - 1);
        self.state.selected = next as usize;
    }

    fn save_prefs(&mut self) {
        if let Err(err) = self.state.prefs.save(&self.config.state_path) {
            tracing::warn!("failed to save preferences: {err}");
        }
    }
}
