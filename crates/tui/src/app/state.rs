//! UI state as a value. [`AppState::update`] is the only way it changes.

use api_types::{
    expense::{Category, ExpenseNew, ExpenseUpdate, ExpenseView},
    stats::Totals,
};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    app::form::{ExpenseForm, Field},
    ui::keymap::AppAction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Closed,
    Add,
    Edit(Uuid),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Key(AppAction),
    ExpensesLoaded(Vec<ExpenseView>),
    TotalsLoaded(Totals),
    EditLoaded(ExpenseView),
    Saved,
    Deleted,
}

/// Side effects requested by a transition. The runtime performs them and
/// feeds the outcome back as [`Event`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch the list (respecting the filter), then the totals.
    Reload(Option<Category>),
    Fetch(Uuid),
    Create(ExpenseNew),
    Update(Uuid, ExpenseUpdate),
    Delete(Uuid),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub expenses: Vec<ExpenseView>,
    pub totals: Totals,
    pub form: ExpenseForm,
    pub dialog: Dialog,
    pub confirm_delete: Option<Uuid>,
    pub selected: usize,
    pub filter: Option<Category>,
    pub today: NaiveDate,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(chrono::Utc::now().date_naive())
    }
}

type Transition = (AppState, Option<Command>);

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            expenses: Vec::new(),
            totals: Totals::default(),
            form: ExpenseForm::empty(today),
            dialog: Dialog::Closed,
            confirm_delete: None,
            selected: 0,
            filter: None,
            today,
            should_quit: false,
        }
    }

    pub fn selected_expense(&self) -> Option<&ExpenseView> {
        self.expenses.get(self.selected)
    }

    /// Mean amount per expense, `0.0` for an empty store.
    pub fn average(&self) -> f64 {
        if self.totals.count == 0 {
            0.0
        } else {
            self.totals.total / self.totals.count as f64
        }
    }

    pub fn update(self, event: Event) -> Transition {
        match event {
            Event::Key(action) => self.on_key(action),
            Event::ExpensesLoaded(expenses) => {
                let selected = self.selected.min(expenses.len().saturating_sub(1));
                (
                    Self {
                        expenses,
                        selected,
                        ..self
                    },
                    None,
                )
            }
            Event::TotalsLoaded(totals) => (Self { totals, ..self }, None),
            Event::EditLoaded(expense) => (
                Self {
                    form: ExpenseForm::from_expense(&expense),
                    dialog: Dialog::Edit(expense.id),
                    ..self
                },
                None,
            ),
            Event::Saved => {
                let reload = Command::Reload(self.filter);
                (self.close_dialog(), Some(reload))
            }
            Event::Deleted => {
                let reload = Command::Reload(self.filter);
                (self, Some(reload))
            }
        }
    }

    fn close_dialog(self) -> Self {
        Self {
            form: ExpenseForm::empty(self.today),
            dialog: Dialog::Closed,
            ..self
        }
    }

    fn quit(self) -> Transition {
        (
            Self {
                should_quit: true,
                ..self
            },
            None,
        )
    }

    fn on_key(self, action: AppAction) -> Transition {
        if action == AppAction::Quit {
            return self.quit();
        }
        if self.dialog != Dialog::Closed {
            return self.on_dialog_key(action);
        }
        if self.confirm_delete.is_some() {
            return self.on_confirm_key(action);
        }
        self.on_list_key(action)
    }

    fn on_list_key(mut self, action: AppAction) -> Transition {
        match action {
            AppAction::Input('q') => return self.quit(),
            AppAction::Input('a') => {
                self.form = ExpenseForm::empty(self.today);
                self.dialog = Dialog::Add;
            }
            AppAction::Input('e') | AppAction::Submit => {
                if let Some(expense) = self.selected_expense() {
                    let id = expense.id;
                    return (self, Some(Command::Fetch(id)));
                }
            }
            AppAction::Input('d') | AppAction::Delete => {
                self.confirm_delete = self.selected_expense().map(|e| e.id);
            }
            AppAction::Input('r') => {
                let reload = Command::Reload(self.filter);
                return (self, Some(reload));
            }
            AppAction::Input('f') => {
                self.filter = next_filter(self.filter);
                self.selected = 0;
                let reload = Command::Reload(self.filter);
                return (self, Some(reload));
            }
            AppAction::Cancel if self.filter.is_some() => {
                self.filter = None;
                self.selected = 0;
                return (self, Some(Command::Reload(None)));
            }
            AppAction::Down | AppAction::Input('j') => {
                if !self.expenses.is_empty() {
                    self.selected = (self.selected + 1).min(self.expenses.len() - 1);
                }
            }
            AppAction::Up | AppAction::Input('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            _ => {}
        }
        (self, None)
    }

    fn on_confirm_key(mut self, action: AppAction) -> Transition {
        match action {
            AppAction::Input('y' | 'Y') | AppAction::Submit => {
                let command = self.confirm_delete.take().map(Command::Delete);
                (self, command)
            }
            AppAction::Input('n' | 'N') | AppAction::Cancel => {
                self.confirm_delete = None;
                (self, None)
            }
            _ => (self, None),
        }
    }

    fn on_dialog_key(mut self, action: AppAction) -> Transition {
        let on_category = self.form.focus == Field::Category;
        match action {
            AppAction::Cancel => return (self.close_dialog(), None),
            AppAction::Submit => return self.submit(),
            AppAction::NextField | AppAction::Down => self.form.focus = self.form.focus.next(),
            AppAction::PrevField | AppAction::Up => self.form.focus = self.form.focus.prev(),
            AppAction::Right | AppAction::Input(' ') if on_category => {
                self.form.cycle_category(true);
            }
            AppAction::Left if on_category => self.form.cycle_category(false),
            AppAction::Input(ch) => self.form.push(ch),
            AppAction::Backspace => self.form.pop(),
            _ => {}
        }
        (self, None)
    }

    /// Valid forms produce a request and stay open until [`Event::Saved`].
    fn submit(mut self) -> Transition {
        match self.form.validate() {
            Ok(valid) => {
                self.form.error = None;
                let command = match self.dialog {
                    Dialog::Edit(id) => Command::Update(id, valid.into_update()),
                    Dialog::Add | Dialog::Closed => Command::Create(valid.into_new()),
                };
                (self, Some(command))
            }
            Err((field, hint)) => {
                self.form.focus = field;
                self.form.error = Some((field, hint));
                (self, None)
            }
        }
    }
}

/// All, then each category in order, then back to all.
fn next_filter(current: Option<Category>) -> Option<Category> {
    match current {
        None => Category::ALL.first().copied(),
        Some(category) => {
            let idx = Category::ALL.iter().position(|c| *c == category)?;
            Category::ALL.get(idx + 1).copied()
        }
    }
}
