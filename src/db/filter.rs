//! Builders for the statements whose shape depends on which fields are supplied.

use sqlx::{Postgres, QueryBuilder};

use crate::error::{Result, StoreError};

const SELECT_CLIENT_ROWS: &str = "SELECT clients.id, clients.first_name, clients.last_name, \
     clients.email, phones.phone \
     FROM clients LEFT JOIN phones ON clients.id = phones.client_id";

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Search criteria for [`Database::find_clients`](crate::db::Database::find_clients).
///
/// Every supplied criterion must match. Empty strings count as not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl ClientFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = supplied(Some(first_name.into()));
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = supplied(Some(last_name.into()));
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = supplied(Some(email.into()));
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = supplied(Some(phone.into()));
        self
    }

    /// Builds a filter from optional values, as they arrive from the command line.
    pub fn from_options(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            first_name: supplied(first_name),
            last_name: supplied(last_name),
            email: supplied(email),
            phone: supplied(phone),
        }
    }

    fn predicates(&self) -> Vec<(&'static str, &str)> {
        [
            ("clients.first_name", &self.first_name),
            ("clients.last_name", &self.last_name),
            ("clients.email", &self.email),
            ("phones.phone", &self.phone),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|v| (column, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }

    /// Renders the joined search as a parameterized conjunction.
    ///
    /// Fails with [`StoreError::MalformedQuery`] when no criterion is supplied.
    pub fn to_query(&self) -> Result<QueryBuilder<'_, Postgres>> {
        let predicates = self.predicates();
        if predicates.is_empty() {
            return Err(StoreError::MalformedQuery("no search criteria supplied"));
        }

        let mut builder = QueryBuilder::new(SELECT_CLIENT_ROWS);
        builder.push(" WHERE ");
        let mut conditions = builder.separated(" AND ");
        for (column, value) in predicates {
            conditions.push(column);
            conditions.push_unseparated(" = ");
            conditions.push_bind_unseparated(value);
        }
        builder.push(" ORDER BY clients.id, phones.phone");

        Ok(builder)
    }
}

/// Column updates for [`Database::change_client`](crate::db::Database::change_client).
///
/// Fields left unset (or set to an empty string) keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientChanges {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
}

impl ClientChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = supplied(Some(first_name.into()));
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = supplied(Some(last_name.into()));
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = supplied(Some(email.into()));
        self
    }

    pub fn from_options(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            first_name: supplied(first_name),
            last_name: supplied(last_name),
            email: supplied(email),
        }
    }

    fn assignments(&self) -> Vec<(&'static str, &str)> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|v| (column, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }

    /// Names of the columns this change touches, in statement order.
    pub fn columns(&self) -> Vec<&'static str> {
        self.assignments().into_iter().map(|(column, _)| column).collect()
    }

    /// Renders a single `UPDATE` for `client_id`, or `None` when nothing changes.
    pub fn to_query(&self, client_id: i32) -> Option<QueryBuilder<'_, Postgres>> {
        let assignments = self.assignments();
        if assignments.is_empty() {
            return None;
        }

        let mut builder = QueryBuilder::new("UPDATE clients SET ");
        let mut columns = builder.separated(", ");
        for (column, value) in assignments {
            columns.push(column);
            columns.push_unseparated(" = ");
            columns.push_bind_unseparated(value);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(client_id);

        Some(builder)
    }
}
