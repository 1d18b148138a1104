//! Directory
//!
//! Lookup of clients and accounts by tax id. A miss is `None`, never an error.

use crate::aggregate::{Account, Client};

pub trait Directory {
    fn find_client(&self, tax_id: &str) -> Option<&Client>;

    fn find_client_mut(&mut self, tax_id: &str) -> Option<&mut Client>;

    /// First account opened by the client with this tax id
    fn find_account(&self, tax_id: &str) -> Option<&Account> {
        self.find_client(tax_id)
            .and_then(|client| client.accounts().first())
    }
}
