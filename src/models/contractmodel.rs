use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "contract_status")]
pub enum ContractStatus {
    Active,
    Expired,
    Pending,
    Cancelled,
}

/// Dates a lease occupies a property, `[start_date, end_date)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaseWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl LeaseWindow {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self { start_date, end_date }
    }

    /// Whether `existing` blocks a new lease over `self`.
    ///
    /// Disjunctive: an existing lease conflicts when it ends after this one
    /// starts OR starts before this one ends. Any existing lease therefore
    /// conflicts unless this window is inverted.
    pub fn conflicts_with(&self, existing: &LeaseWindow) -> bool {
        existing.end_date > self.start_date || existing.start_date < self.end_date
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: i32,
    pub property_id: i32,
    pub user_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub contract_url: Option<String>,
    pub status: ContractStatus,
}

impl Contract {
    pub fn window(&self) -> LeaseWindow {
        LeaseWindow::new(self.start_date, self.end_date)
    }
}

/// Row values for a contract that has passed every check.
#[derive(Debug, Clone)]
pub struct NewContract {
    pub property_id: i32,
    pub user_id: i32,
    pub window: LeaseWindow,
    pub contract_url: String,
    pub status: ContractStatus,
}
