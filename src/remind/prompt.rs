use remind::ui::Confirm;
use std::io::{self, BufRead, Write};

const PREFIX: &str = ">>";

/// Interactive confirmation over stdin/stdout
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        yesno(message)
    }
}

fn prompt(message: &str) -> String {
    print!("{0} {1}\n{0} ", PREFIX, message);
    let _ = io::stdout().flush();

    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
    line.trim().to_string()
}

/// Ask until the answer is recognizable; empty input accepts the default
fn yesno(message: &str) -> bool {
    loop {
        let response = prompt(&format!("{} [yes]", message)).to_lowercase();
        if response.is_empty() || response == "y" || response == "yes" {
            return true;
        }
        if response == "n" || response == "no" {
            return false;
        }
    }
}
