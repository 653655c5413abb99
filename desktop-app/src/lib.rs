//! Desktop client for a car shop service: a grid of the service's cars with forms to add,
//! edit and delete them.

pub mod client;
pub mod config;
pub mod controller;
pub mod forms;
pub mod grid;
pub mod gui;
