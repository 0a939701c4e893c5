//! Static support-resources panel, shown while the support alert is active.

use crossterm::ExecutableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{Write, stdout};

pub const TITLE: &str = "Need help? Here are some resources";

/// `(name, contact)` pairs.
pub const RESOURCES: [(&str, &str); 4] = [
    ("National Helpline", "123-456-7890"),
    ("Meditation App", "Headspace - https://www.headspace.com"),
    (
        "Self-Help Articles",
        "American Psychological Association - https://www.psychologytoday.com/us",
    ),
    ("Online Counseling", "BetterHelp - https://www.betterhelp.com"),
];

pub fn print_panel() {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: 0xff,
        g: 0x6e,
        b: 0x6e,
    }));
    let _ = out.execute(SetAttribute(Attribute::Bold));
    let _ = out.execute(Print(format!("\r\n{}\r\n", TITLE)));
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    for (name, contact) in RESOURCES {
        let _ = out.execute(Print(format!("  - {}: {}\r\n", name, contact)));
    }
    let _ = out.execute(Print("\r\n"));
    let _ = out.flush();
}
