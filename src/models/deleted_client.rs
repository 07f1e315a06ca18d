/// Rows removed by a client deletion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletedClient {
    pub phones: u64,
    pub clients: u64,
}
