//! CLI command messaging system
//!
//! Consistent messaging for the one-shot configuration commands.

/// Severity tag printed in front of a command message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Info,
    Warn,
    Success,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Tag::Info => "\x1b[1;33m[INFO]\x1b[0m",
            Tag::Warn => "\x1b[1;91m[WARN]\x1b[0m",
            Tag::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

/// Format a command message; details follow the title after a tab.
pub fn format_message(tag: Tag, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag.label(), title)
    } else {
        format!("{} {}\t {}", tag.label(), title, details)
    }
}

pub fn print_message(tag: Tag, title: &str, details: &str) {
    println!("{}", format_message(tag, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Tag::Info,
            $title,
            &format!($($details)*),
        )
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Tag::Warn,
            $title,
            &format!($($details)*),
        )
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Tag::Success,
            $title,
            &format!($($details)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message(Tag::Success, "Language saved", "hi"),
            "\x1b[1;32m[SUCCESS]\x1b[0m Language saved\t hi"
        );
        assert_eq!(
            format_message(Tag::Warn, "Nothing to reset", ""),
            "\x1b[1;91m[WARN]\x1b[0m Nothing to reset"
        );
    }
}
