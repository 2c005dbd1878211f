// Core engine for the "Should I Learn IIoT Integration?" career-fit assessment:
// question catalog, progress tracking, and deterministic scoring.

pub mod catalog;
pub mod recommend;
pub mod scoring;
pub mod tracker;
pub mod types;

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        assert_eq!(get_version(), "0.1.0");
    }
}
