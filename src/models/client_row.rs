use std::fmt;

use super::client::field;

/// A client joined with one of its phones.
///
/// A client with several phones yields one row per phone; a client without
/// phones yields a single row with `phone` set to `None`.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct ClientRow {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl fmt::Display for ClientRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.id,
            field(&self.first_name),
            field(&self.last_name),
            field(&self.email),
            field(&self.phone)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_missing_phone_as_null() {
        let row = ClientRow {
            id: 1,
            first_name: Some("Bob".into()),
            last_name: Some("Smith".into()),
            email: Some("bs@mail.com".into()),
            phone: None,
        };
        assert_eq!(row.to_string(), "(1, Bob, Smith, bs@mail.com, NULL)");
    }
}
