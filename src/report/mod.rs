pub mod histogram;
pub mod json;
pub mod table;

use crate::config::Config;

pub fn print_listing(items: &[(String, u64)], config: &Config) {
    if config.json_output {
        println!("{}", json::render(items));
    } else {
        print!("{}", table::render(items));
    }
}

pub fn print_histogram(lines: &[String]) {
    if lines.is_empty() {
        println!("No purchases recorded.");
        return;
    }

    for line in lines {
        println!("{line}");
    }
}

/// Message for a single-item lookup, keeping "not found" apart from any count.
pub fn lookup_message(item: &str, count: Option<u64>) -> String {
    match count {
        Some(count) => format!("Total of {count} {item} sold today."),
        None => String::from("Item not found in file or entered incorrectly."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_messages_differ_for_absent_and_found() {
        assert_eq!(lookup_message("milk", Some(3)), "Total of 3 milk sold today.");
        assert_eq!(
            lookup_message("cheese", None),
            "Item not found in file or entered incorrectly."
        );
    }
}
