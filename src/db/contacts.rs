use sqlx::PgConnection;
use tracing::{debug, info};

use super::{ClientChanges, ClientFilter, Database};
use crate::error::{Result, StoreError};
use crate::models::{Client, ClientRow, DeletedClient, NewClient, Phone};

async fn delete_phones_of(conn: &mut PgConnection, client_id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM phones WHERE client_id = $1")
        .bind(client_id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}

impl Database {
    /// Insert a client and return it with its generated id
    pub async fn add_client(&self, client: &NewClient) -> Result<Client> {
        let mut tx = self.pool.begin().await?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(client_id = client.id, "client added");
        Ok(client)
    }

    /// Attach a phone number to an existing client
    ///
    /// Fails with [`StoreError::ReferentialIntegrity`] when `client_id` does not exist.
    pub async fn add_phone(&self, client_id: i32, phone: &str) -> Result<Phone> {
        let mut tx = self.pool.begin().await?;

        let phone = sqlx::query_as::<_, Phone>(
            r#"
            INSERT INTO phones (client_id, phone)
            VALUES ($1, $2)
            RETURNING client_id, phone
            "#,
        )
        .bind(client_id)
        .bind(phone)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| StoreError::from_phone_insert(err, client_id))?;

        tx.commit().await?;

        info!(client_id, phone = ?phone.phone, "phone added");
        Ok(phone)
    }

    /// Update the supplied fields of a client, returning the number of rows changed
    pub async fn change_client(&self, client_id: i32, changes: &ClientChanges) -> Result<u64> {
        let Some(mut query) = changes.to_query(client_id) else {
            debug!(client_id, "no client fields to change");
            return Ok(0);
        };

        let mut tx = self.pool.begin().await?;
        let result = query.build().execute(&mut *tx).await?;
        tx.commit().await?;

        info!(
            client_id,
            columns = ?changes.columns(),
            rows = result.rows_affected(),
            "client changed"
        );
        Ok(result.rows_affected())
    }

    /// Remove a single phone number from a client
    pub async fn delete_phone(&self, client_id: i32, phone: &str) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM phones WHERE client_id = $1 AND phone = $2")
            .bind(client_id)
            .bind(phone)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(client_id, phone, rows = result.rows_affected(), "phone deleted");
        Ok(result.rows_affected())
    }

    /// Remove every phone number of a client
    pub async fn delete_all_phones(&self, client_id: i32) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let rows = delete_phones_of(&mut *tx, client_id).await?;
        tx.commit().await?;

        info!(client_id, rows, "phones deleted");
        Ok(rows)
    }

    /// Delete a client together with its phones
    ///
    /// Phones are removed first so the foreign key on `phones.client_id` holds;
    /// both deletes share one transaction.
    pub async fn delete_client(&self, client_id: i32) -> Result<DeletedClient> {
        let mut tx = self.pool.begin().await?;

        let phones = delete_phones_of(&mut *tx, client_id).await?;
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(client_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let deleted = DeletedClient {
            phones,
            clients: result.rows_affected(),
        };
        info!(client_id, phones, clients = deleted.clients, "client deleted");
        Ok(deleted)
    }

    /// Find clients matching every supplied criterion, one row per matching phone
    pub async fn find_clients(&self, filter: &ClientFilter) -> Result<Vec<ClientRow>> {
        let mut query = filter.to_query()?;

        let rows = query
            .build_query_as::<ClientRow>()
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = rows.len(), "client search finished");
        Ok(rows)
    }
}
