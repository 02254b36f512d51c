//! Person records service: CRUD, paging and name search over a record store, with every store
//! failure classified into a [`error::ServiceError`].

pub mod error;
pub mod request;
pub mod search;
pub mod service;
pub mod timer;
