use std::fmt;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Values for a client that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClient {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl NewClient {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
        }
    }
}

pub(crate) fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("NULL")
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.id,
            field(&self.first_name),
            field(&self.last_name),
            field(&self.email)
        )
    }
}
