/// Command line variable bindings.
///
/// Parses the `name=value` arguments used to seed the environment before a
/// script runs.
pub mod binding;
