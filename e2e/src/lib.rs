//! End-to-end tests of the Tellonym client against a local mock API.

#[cfg(test)]
mod tests;
