pub mod config;
pub mod families;
pub mod label;
pub mod serialize;

pub use families::show_families;
pub use label::{print_labels, print_rights, print_types};
pub use serialize::{run_serialize, SerializeOptions};

/// Map a configured level name onto a twyg level, defaulting to info.
pub fn parse_log_level(name: &str) -> twyg::LogLevel {
    match name.to_ascii_lowercase().as_str() {
        "trace" => twyg::LogLevel::Trace,
        "debug" => twyg::LogLevel::Debug,
        "warn" | "warning" => twyg::LogLevel::Warn,
        "error" => twyg::LogLevel::Error,
        _ => twyg::LogLevel::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert!(matches!(parse_log_level("DEBUG"), twyg::LogLevel::Debug));
        assert!(matches!(parse_log_level("warning"), twyg::LogLevel::Warn));
        assert!(matches!(parse_log_level("nonsense"), twyg::LogLevel::Info));
    }
}
