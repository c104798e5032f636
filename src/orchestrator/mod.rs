pub mod address_book;

pub mod connection;

pub mod error;

pub mod invoker;

pub mod session;

pub use self::address_book::{AddressBook, CodeIdBook, ContractName};
pub use self::connection::{open_query_handle, open_signing_handle};
pub use self::session::Session;
