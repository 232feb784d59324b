//! Expenses API endpoints.

use api_types::{
    expense::{Category, ExpenseDeleted, ExpenseNew, ExpenseUpdate, ExpenseView},
    stats::Totals,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::{ExpenseCategory, ExpensePatch, Money, NewExpense};

use crate::{ServerError, server::ServerState};

const DELETED_MESSAGE: &str = "Expense deleted successfully";

fn map_category_in(category: Category) -> ExpenseCategory {
    match category {
        Category::Food => ExpenseCategory::Food,
        Category::Transportation => ExpenseCategory::Transportation,
        Category::Entertainment => ExpenseCategory::Entertainment,
        Category::Shopping => ExpenseCategory::Shopping,
        Category::Bills => ExpenseCategory::Bills,
        Category::Healthcare => ExpenseCategory::Healthcare,
        Category::Education => ExpenseCategory::Education,
        Category::Other => ExpenseCategory::Other,
    }
}

fn map_category_out(category: ExpenseCategory) -> Category {
    match category {
        ExpenseCategory::Food => Category::Food,
        ExpenseCategory::Transportation => Category::Transportation,
        ExpenseCategory::Entertainment => Category::Entertainment,
        ExpenseCategory::Shopping => Category::Shopping,
        ExpenseCategory::Bills => Category::Bills,
        ExpenseCategory::Healthcare => Category::Healthcare,
        ExpenseCategory::Education => Category::Education,
        ExpenseCategory::Other => Category::Other,
    }
}

fn map_expense(expense: engine::Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        title: expense.title,
        amount: expense.amount.to_major(),
        category: map_category_out(expense.category),
        description: expense.description,
        date: expense.date,
        created_at: expense.created_at,
        updated_at: expense.updated_at,
    }
}

fn map_expenses(expenses: Vec<engine::Expense>) -> Json<Vec<ExpenseView>> {
    Json(expenses.into_iter().map(map_expense).collect())
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let Json(payload) = payload?;

    let mut cmd = NewExpense::new(
        payload.title,
        Money::from_major(payload.amount)?,
        map_category_in(payload.category),
    );
    if let Some(description) = payload.description {
        cmd = cmd.description(description);
    }
    if let Some(date) = payload.date {
        cmd = cmd.date(date);
    }

    let expense = state.engine.create_expense(cmd).await?;
    Ok((StatusCode::CREATED, Json(map_expense(expense))))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let expenses = state.engine.list_expenses().await?;
    Ok(map_expenses(expenses))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ExpenseView>, ServerError> {
    let expense = state.engine.expense(&id).await?;
    Ok(Json(map_expense(expense)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ExpenseUpdate>, JsonRejection>,
) -> Result<Json<ExpenseView>, ServerError> {
    let Json(payload) = payload?;

    let patch = ExpensePatch {
        title: payload.title,
        amount: payload.amount.map(Money::from_major).transpose()?,
        category: payload.category.map(map_category_in),
        description: payload.description,
        date: payload.date,
    };

    let expense = state.engine.update_expense(&id, patch).await?;
    Ok(Json(map_expense(expense)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ExpenseDeleted>, ServerError> {
    state.engine.delete_expense(&id).await?;
    Ok(Json(ExpenseDeleted {
        message: DELETED_MESSAGE.to_string(),
    }))
}

/// Unknown categories are rejected with 400 instead of yielding an empty list.
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let category: ExpenseCategory = category.parse()?;
    let expenses = state.engine.list_expenses_by_category(category).await?;
    Ok(map_expenses(expenses))
}

pub async fn totals(State(state): State<ServerState>) -> Result<Json<Totals>, ServerError> {
    let totals = state.engine.totals().await?;
    Ok(Json(Totals {
        total: totals.total.to_major(),
        count: totals.count,
    }))
}
