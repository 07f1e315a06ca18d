use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::db::{ClientChanges, ClientFilter, Database};
use crate::demo;
use crate::models::{ClientRow, NewClient};

/// Manage a directory of clients and their phone numbers
#[derive(Parser, Debug)]
#[command(name = "contacts", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create the clients and phones tables if they are missing
    Init,
    /// Add a new client
    AddClient {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Add a phone number to an existing client
    AddPhone { client_id: i32, phone: String },
    /// Change the given fields of a client
    ChangeClient {
        client_id: i32,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Remove one phone number from a client
    DeletePhone { client_id: i32, phone: String },
    /// Remove all phone numbers of a client
    DeleteAllPhones { client_id: i32 },
    /// Delete a client and its phone numbers
    DeleteClient { client_id: i32 },
    /// Find clients by name, email or phone
    Find {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Replay the demonstration scenario against the database
    Demo,
}

pub fn print_rows(rows: &[ClientRow]) {
    if rows.is_empty() {
        println!("Client not found.");
        return;
    }
    for row in rows {
        println!("{}", row);
    }
}

/// Execute a single command against the store
pub async fn run(db: &Database, command: Command) -> Result<()> {
    match command {
        Command::Init => {
            db.initialize().await?;
            println!("Tables created.");
        }
        Command::AddClient {
            first_name,
            last_name,
            email,
        } => {
            let client = db
                .add_client(&NewClient {
                    first_name,
                    last_name,
                    email,
                })
                .await?;
            println!("Client added: {}", client);
        }
        Command::AddPhone { client_id, phone } => {
            let phone = db.add_phone(client_id, &phone).await?;
            println!("Phone added: {}", phone);
        }
        Command::ChangeClient {
            client_id,
            first_name,
            last_name,
            email,
        } => {
            let changes = ClientChanges::from_options(first_name, last_name, email);
            let rows = db.change_client(client_id, &changes).await?;
            println!(
                "Client {} changed: {:?} ({} row(s))",
                client_id,
                changes.columns(),
                rows
            );
        }
        Command::DeletePhone { client_id, phone } => {
            let rows = db.delete_phone(client_id, &phone).await?;
            println!("Phone {} of client {} deleted ({} row(s))", phone, client_id, rows);
        }
        Command::DeleteAllPhones { client_id } => {
            let rows = db.delete_all_phones(client_id).await?;
            println!("{} phone(s) of client {} deleted", rows, client_id);
        }
        Command::DeleteClient { client_id } => {
            let deleted = db.delete_client(client_id).await?;
            println!(
                "Client {} deleted ({} client row(s), {} phone(s))",
                client_id, deleted.clients, deleted.phones
            );
        }
        Command::Find {
            first_name,
            last_name,
            email,
            phone,
        } => {
            let filter = ClientFilter::from_options(first_name, last_name, email, phone);
            let rows = db.find_clients(&filter).await?;
            print_rows(&rows);
        }
        Command::Demo => {
            demo::run(db).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_phone() {
        let cli = Cli::try_parse_from(["contacts", "add-phone", "4", "+79000000005"]).unwrap();
        assert_eq!(
            cli.command,
            Command::AddPhone {
                client_id: 4,
                phone: "+79000000005".into()
            }
        );
    }

    #[test]
    fn test_parse_change_client_with_email_only() {
        let cli =
            Cli::try_parse_from(["contacts", "change-client", "3", "--email", "jj@mail.com"])
                .unwrap();
        assert_eq!(
            cli.command,
            Command::ChangeClient {
                client_id: 3,
                first_name: None,
                last_name: None,
                email: Some("jj@mail.com".into()),
            }
        );
    }

    #[test]
    fn test_parse_find() {
        let cli = Cli::try_parse_from([
            "contacts",
            "find",
            "--first-name",
            "John",
            "--email",
            "jj@mail.com",
        ])
        .unwrap();
        match cli.command {
            Command::Find {
                first_name,
                last_name,
                email,
                phone,
            } => {
                assert_eq!(first_name.as_deref(), Some("John"));
                assert_eq!(last_name, None);
                assert_eq!(email.as_deref(), Some("jj@mail.com"));
                assert_eq!(phone, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_client_id_must_be_a_number() {
        assert!(Cli::try_parse_from(["contacts", "delete-client", "bob"]).is_err());
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["contacts"]).is_err());
    }
}
