//! Demonstration scenario: a handful of clients and phones, some edits, some searches.

use anyhow::Result;

use crate::cli::print_rows;
use crate::db::{ClientChanges, ClientFilter, Database};
use crate::models::{ClientRow, NewClient};

/// Results of the three searches that close the scenario
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    pub by_name_and_email: Vec<ClientRow>,
    pub by_phone: Vec<ClientRow>,
    pub by_missing_phone: Vec<ClientRow>,
}

pub async fn run(db: &Database) -> Result<DemoOutcome> {
    db.initialize().await?;
    println!("Tables created.");

    let mut ids = Vec::new();
    for (first_name, last_name, email) in [
        ("Bob", "Smith", "bs@mail.com"),
        ("Sam", "Kim", "sk@mail.com"),
        ("John", "Doe", "jd@mail.com"),
        ("Yan", "Soer", "ys@mail.com"),
    ] {
        let client = db
            .add_client(&NewClient::new(first_name, last_name, email))
            .await?;
        println!("Client added: {}", client);
        ids.push(client.id);
    }
    let (bob, sam, john, yan) = (ids[0], ids[1], ids[2], ids[3]);

    for (client_id, phone) in [
        (bob, "+79000000001"),
        (sam, "+79000000002"),
        (sam, "+79000000003"),
        (john, "+79000000004"),
        (yan, "+79000000005"),
    ] {
        let phone = db.add_phone(client_id, phone).await?;
        println!("Phone added: {}", phone);
    }

    for (client_id, changes) in [
        (
            bob,
            ClientChanges::new()
                .first_name("Jonny")
                .last_name("Jonathan")
                .email("jj@mail.com"),
        ),
        (sam, ClientChanges::new().first_name("Samuel")),
        (john, ClientChanges::new().email("jj@mail.com")),
    ] {
        db.change_client(client_id, &changes).await?;
        println!("Client {} changed: {:?}", client_id, changes.columns());
    }

    db.delete_phone(bob, "+79000000001").await?;
    println!("Phone +79000000001 of client {} deleted", bob);

    db.delete_client(sam).await?;
    println!("Client {} deleted.", sam);

    let by_name_and_email = db
        .find_clients(&ClientFilter::new().first_name("John").email("jj@mail.com"))
        .await?;
    print_rows(&by_name_and_email);

    let by_phone = db
        .find_clients(&ClientFilter::new().phone("+79000000005"))
        .await?;
    print_rows(&by_phone);

    let by_missing_phone = db
        .find_clients(&ClientFilter::new().phone("+79000000006"))
        .await?;
    print_rows(&by_missing_phone);

    Ok(DemoOutcome {
        by_name_and_email,
        by_phone,
        by_missing_phone,
    })
}
