//! End-to-end tests at the HTTP request/response level.
//!
//! Each test file covers a specific scenario, driving the router directly
//! with deterministic requests and checking status, headers and body.

#![cfg(test)]

mod helpers;

mod test_backing_file;
mod test_create_animal;
mod test_create_invalid;
mod test_get_animal;
mod test_list_animals;
mod test_list_filters;
mod test_save_failure;
