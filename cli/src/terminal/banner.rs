use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
               ____ ___  _   _  ___  ____ _____
              / ___/ _ \| | | |/ _ \|  _ \_   _|
             | |  | | | | |_| | | | | |_) || |
             | |__| |_| |  _  | |_| |  _ < | |
              \____\___/|_| |_|\___/|_| \_\|_|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.green()));
}
