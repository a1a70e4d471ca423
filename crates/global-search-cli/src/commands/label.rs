use anyhow::Result;
use global_search_core::{derive_label, filter_rights, map_types, Field};

/// Print one display label per input value.
pub fn print_labels(values: &[String]) {
    for value in values {
        println!("{}", derive_label(value));
    }
}

/// Print the rights list after the global-search rights policy, as JSON.
pub fn print_rights(values: Vec<String>) -> Result<()> {
    let filtered = filter_rights(Field::Present(values));
    println!("{}", serde_json::to_string(&filtered)?);
    Ok(())
}

/// Print the types list after the global-search types policy, as JSON.
pub fn print_types(values: Vec<String>) -> Result<()> {
    let mapped = map_types(Field::Present(values));
    println!("{}", serde_json::to_string(&mapped)?);
    Ok(())
}
