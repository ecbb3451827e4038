// Account service: signup, login, password hashing.
// Credentials never leave this module unhashed; handlers return only
// success markers and the (id, name) pair on login.

pub mod handlers;
pub mod password;
pub mod service;
