//! Terminal colors for pretty output.

pub use anstream::{eprintln as aeprintln, println as aprintln};

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[38;2;158;206;106m"; // #9ece6a
const YELLOW: &str = "\x1b[38;2;224;175;104m"; // #e0af68
const BLUE: &str = "\x1b[38;2;122;162;247m"; // #7aa2f7

fn paint(color: &str, text: &str) -> String {
    format!("{}{}{}", color, text, RESET)
}

pub fn p_g(text: &str) -> String {
    paint(GREEN, text)
}

pub fn p_y(text: &str) -> String {
    paint(YELLOW, text)
}

pub fn p_b(text: &str) -> String {
    paint(BLUE, text)
}

/// Colors a plan line by its leading marker.
pub fn paint_plan_line(line: &str) -> String {
    if line.starts_with('+') {
        p_g(line)
    } else if line.starts_with('~') {
        p_y(line)
    } else if line.starts_with('=') {
        p_b(line)
    } else {
        line.to_string()
    }
}
