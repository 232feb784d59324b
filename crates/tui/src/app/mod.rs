mod form;
mod state;

use std::{collections::VecDeque, time::Duration};

use crossterm::event::{self, Event as TermEvent, KeyEventKind};

use crate::{
    client::Client,
    config::AppConfig,
    error::{AppError, Result},
    ui,
};

pub use form::{ExpenseForm, Field};
pub use state::{AppState, Command, Dialog, Event};

const TICK_RATE: Duration = Duration::from_millis(200);

/// Runtime around [`AppState`]: draws it, turns keys into events and runs
/// the network [`Command`]s that transitions ask for.
pub struct App {
    client: Client,
    state: AppState,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: Client::new(&config.backend_url)?,
            state: AppState::default(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        self.run_commands(VecDeque::from([Command::Reload(None)]))
            .await;

        while !self.state.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(TICK_RATE)? {
                if let TermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.dispatch(Event::Key(ui::keymap::map_key(key))).await;
                    }
                }
            }
        }

        Ok(())
    }

    /// Applies `event`, then drains every command it (transitively) causes.
    async fn dispatch(&mut self, event: Event) {
        let mut commands = VecDeque::new();
        if let Some(command) = self.apply(event) {
            commands.push_back(command);
        }
        self.run_commands(commands).await;
    }

    fn apply(&mut self, event: Event) -> Option<Command> {
        let (state, command) = std::mem::take(&mut self.state).update(event);
        self.state = state;
        command
    }

    async fn run_commands(&mut self, mut commands: VecDeque<Command>) {
        while let Some(command) = commands.pop_front() {
            for event in self.execute(command).await {
                if let Some(next) = self.apply(event) {
                    commands.push_back(next);
                }
            }
        }
    }

    /// Failures are logged and yield no event, leaving the state as it was.
    async fn execute(&self, command: Command) -> Vec<Event> {
        match command {
            Command::Reload(filter) => {
                let mut events = Vec::with_capacity(2);
                let list = match filter {
                    Some(category) => self.client.by_category(category).await,
                    None => self.client.list().await,
                };
                match list {
                    Ok(expenses) => events.push(Event::ExpensesLoaded(expenses)),
                    Err(err) => tracing::error!("error loading expenses: {err}"),
                }
                match self.client.totals().await {
                    Ok(totals) => events.push(Event::TotalsLoaded(totals)),
                    Err(err) => tracing::error!("error loading stats: {err}"),
                }
                events
            }
            Command::Fetch(id) => match self.client.get(id).await {
                Ok(expense) => vec![Event::EditLoaded(expense)],
                Err(err) => {
                    tracing::error!("error loading expense {id}: {err}");
                    Vec::new()
                }
            },
            Command::Create(payload) => match self.client.create(&payload).await {
                Ok(created) => {
                    tracing::info!("created expense {}", created.id);
                    vec![Event::Saved]
                }
                Err(err) => {
                    tracing::error!("error saving expense: {err}");
                    Vec::new()
                }
            },
            Command::Update(id, payload) => match self.client.update(id, &payload).await {
                Ok(_) => {
                    tracing::info!("updated expense {id}");
                    vec![Event::Saved]
                }
                Err(err) => {
                    tracing::error!("error saving expense {id}: {err}");
                    Vec::new()
                }
            },
            Command::Delete(id) => match self.client.delete(id).await {
                Ok(res) => {
                    tracing::info!("{}: {id}", res.message);
                    vec![Event::Deleted]
                }
                Err(err) => {
                    tracing::error!("error deleting expense {id}: {err}");
                    Vec::new()
                }
            },
        }
    }
}
