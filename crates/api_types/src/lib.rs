use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use uuid::Uuid;

/// Body of every non-2xx JSON response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Lenient date input: `YYYY-MM-DD` or a full RFC3339 timestamp.
///
/// Timestamps keep their UTC calendar date. Output is always `YYYY-MM-DD`.
pub mod date {
    use super::*;

    pub fn parse(value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Some(date);
        }
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    }

    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {raw}"))),
        }
    }
}

/// Amount input accepts a JSON number or a numeric string (`"4.50"`), the way
/// HTML forms tend to submit it.
pub mod amount {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    fn resolve<E: serde::de::Error>(raw: RawAmount) -> Result<f64, E> {
        match raw {
            RawAmount::Number(value) => Ok(value),
            RawAmount::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid amount: {text}"))),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        resolve(RawAmount::deserialize(deserializer)?)
    }

    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<RawAmount>::deserialize(deserializer)?
            .map(resolve)
            .transpose()
    }
}

pub mod expense {
    use super::*;

    /// The fixed set of expense categories.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum Category {
        Food,
        Transportation,
        Entertainment,
        Shopping,
        Bills,
        Healthcare,
        Education,
        Other,
    }

    impl Category {
        pub const ALL: [Category; 8] = [
            Self::Food,
            Self::Transportation,
            Self::Entertainment,
            Self::Shopping,
            Self::Bills,
            Self::Healthcare,
            Self::Education,
            Self::Other,
        ];

        pub fn as_str(self) -> &'static str {
            match self {
                Self::Food => "Food",
                Self::Transportation => "Transportation",
                Self::Entertainment => "Entertainment",
                Self::Shopping => "Shopping",
                Self::Bills => "Bills",
                Self::Healthcare => "Healthcare",
                Self::Education => "Education",
                Self::Other => "Other",
            }
        }
    }

    impl std::fmt::Display for Category {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }

    /// Request body for `POST /api/expenses`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseNew {
        pub title: String,
        /// Major units (e.g. `4.5`), at most two decimals.
        #[serde(deserialize_with = "amount::deserialize")]
        pub amount: f64,
        pub category: Category,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        /// Defaults to today (UTC) when absent.
        #[serde(
            default,
            deserialize_with = "date::deserialize_opt",
            skip_serializing_if = "Option::is_none"
        )]
        pub date: Option<NaiveDate>,
    }

    /// Request body for `PUT /api/expenses/{id}`.
    ///
    /// Absent fields keep their stored value. An empty `description` clears it.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct ExpenseUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(
            deserialize_with = "amount::deserialize_opt",
            skip_serializing_if = "Option::is_none"
        )]
        pub amount: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub category: Option<Category>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(
            deserialize_with = "date::deserialize_opt",
            skip_serializing_if = "Option::is_none"
        )]
        pub date: Option<NaiveDate>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseView {
        pub id: Uuid,
        pub title: String,
        pub amount: f64,
        pub category: Category,
        pub description: Option<String>,
        pub date: NaiveDate,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseDeleted {
        pub message: String,
    }
}

pub mod stats {
    use super::*;

    /// Response of `GET /api/expenses/stats/total`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct Totals {
        pub total: f64,
        pub count: u64,
    }
}

#[cfg(test)]
mod tests {
    use super::expense::{Category, ExpenseNew, ExpenseUpdate};

    #[test]
    fn new_expense_accepts_plain_date_and_numeric_string() {
        let body = r#"{"title":"Coffee","amount":"4.50","category":"Food","date":"2024-01-01"}"#;
        let parsed: ExpenseNew = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.amount, 4.5);
        assert_eq!(parsed.category, Category::Food);
        assert_eq!(parsed.date.unwrap().to_string(), "2024-01-01");
        assert!(parsed.description.is_none());
    }

    #[test]
    fn new_expense_accepts_rfc3339_date() {
        let body = r#"{"title":"Taxi","amount":12,"category":"Transportation","date":"2024-03-05T23:30:00-02:00"}"#;
        let parsed: ExpenseNew = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.date.unwrap().to_string(), "2024-03-06");
    }

    #[test]
    fn new_expense_rejects_unknown_category() {
        let body = r#"{"title":"Boat","amount":1,"category":"Yachts"}"#;
        assert!(serde_json::from_str::<ExpenseNew>(body).is_err());
    }

    #[test]
    fn new_expense_requires_title() {
        let body = r#"{"amount":1,"category":"Food"}"#;
        assert!(serde_json::from_str::<ExpenseNew>(body).is_err());
    }

    #[test]
    fn update_fields_are_all_optional() {
        let parsed: ExpenseUpdate = serde_json::from_str(r#"{"amount":3}"#).unwrap();
        assert_eq!(parsed.amount, Some(3.0));
        assert!(parsed.title.is_none());
        assert!(parsed.date.is_none());

        let empty: ExpenseUpdate = serde_json::from_str("{}").unwrap();
        assert!(empty.category.is_none());
    }
}
