//! Terminal output. Every line is emitted as a [`PRINT_TARGET`] event so it
//! goes through the same subscriber as the log messages.

use crate::terminal::{banner, colors};
use cohort_common::log::PRINT_TARGET;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Widest key printed under a person in the tree view.
const TREE_KEY_WIDTH: usize = "Salary".len();

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title: String = format!("⟦ COHORT v{} ⟧", env!("CARGO_PKG_VERSION"));
    let side: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str())) / 2;
    let rule: ColoredString = "═".repeat(side).color(colors::SEPARATOR);

    print(&format!("{rule}{}{rule}", title.bright_green().bold()));
    banner::print();
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let (left, right) = split_padding(TOTAL_WIDTH, title.chars().count());

    print(&format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        title.color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR),
    ));
}

pub fn fat_separator() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}

/// Prints `> key....: value`, padding the key to `key_width`.
pub fn aligned_line(key: &str, value: ColoredString, key_width: usize) {
    print(&format!(
        "{} {}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        leader(key, key_width + 1).color(colors::SEPARATOR),
        value
    ));
}

pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

pub fn as_tree_one_level(details: &[(String, ColoredString)]) {
    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            leader(key, TREE_KEY_WIDTH + 1).color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let (left, _) = split_padding(TOTAL_WIDTH, console::measure_text_width(msg));
    print(&format!("{}{}", " ".repeat(left), msg));
}

/// Dots after `key` up to `width` columns, then a colon.
fn leader(key: &str, width: usize) -> String {
    format!("{}:", ".".repeat(width.saturating_sub(key.len())))
}

/// Splits the room left around `content` columns into left/right halves.
fn split_padding(total: usize, content: usize) -> (usize, usize) {
    let room: usize = total.saturating_sub(content);
    (room / 2, room - room / 2)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
