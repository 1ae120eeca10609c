//! Dispatcher behavior tests

mod support;
