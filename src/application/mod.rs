pub mod notifications;
pub mod seed;
pub mod todo_store;
#[cfg(test)]
mod todo_store_tests;
