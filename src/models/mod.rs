mod client;
mod client_row;
mod deleted_client;
mod phone;

pub use client::{Client, NewClient};
pub use client_row::ClientRow;
pub use deleted_client::DeletedClient;
pub use phone::Phone;
