//! Uniform `type (value)` rendering for accessor diagnostics.
//!
//! Every error path in the config accessor goes through [`describe`] so the
//! wording stays identical across accessors. Downstream tooling matches on
//! these strings; change them and you change the contract.

use super::value::ConfigValue;

/// Render a value as `"<type-name> (<printable-value>)"`,
/// e.g. `string (a string)`, `int (2)`, `float64 (3.6)`.
pub fn describe(value: &ConfigValue) -> String {
    format!("{} ({})", value.type_name(), value)
}
