//! Welcome banner: "REFLECT" in the figlet standard font, shaded left to right.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

impl Rgb {
    /// Channel-wise blend toward `other`; `step` of `steps` (0 = self, steps = other).
    fn blend(self, other: Rgb, step: usize, steps: usize) -> Rgb {
        let mix = |from: u8, to: u8| -> u8 {
            if steps == 0 {
                return to;
            }
            let (from, to) = (i32::from(from), i32::from(to));
            let v = from + (to - from) * step as i32 / steps as i32;
            v.clamp(0, 255) as u8
        };
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }

    fn color(self) -> Color {
        Color::Rgb {
            r: self.0,
            g: self.1,
            b: self.2,
        }
    }
}

const DUSK: Rgb = Rgb(0xb3, 0x9d, 0xdb);
const SEA: Rgb = Rgb(0x4d, 0xb6, 0xac);

/// Split a line into same-color runs; the shade depends only on the column.
fn shaded_runs(line: &str, width: usize) -> Vec<(Rgb, String)> {
    let mut runs: Vec<(Rgb, String)> = Vec::new();
    for (col, ch) in line.chars().enumerate() {
        let shade = DUSK.blend(SEA, col, width.saturating_sub(1));
        match runs.last_mut() {
            Some((last, text)) if *last == shade => text.push(ch),
            _ => runs.push((shade, ch.to_string())),
        }
    }
    runs
}

/// Prints the banner and a version line. A plain title stands in if the font fails to load.
pub fn print_welcome() {
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("REFLECT").map(|fig| fig.to_string()))
        .unwrap_or_else(|| "REFLECT".to_string());
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(1);

    let mut out = stdout();
    for line in art.lines() {
        for (shade, text) in shaded_runs(line, width) {
            let _ = queue!(out, SetForegroundColor(shade.color()), Print(text));
        }
        let _ = queue!(out, ResetColor, Print("\r\n"));
    }
    let _ = queue!(
        out,
        SetForegroundColor(SEA.color()),
        Print(format!(
            "v{}  mood journal\r\n\r\n",
            env!("CARGO_PKG_VERSION")
        )),
        ResetColor
    );
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(DUSK.blend(SEA, 0, 10), DUSK);
        assert_eq!(DUSK.blend(SEA, 10, 10), SEA);
        assert_eq!(DUSK.blend(SEA, 0, 0), SEA);
    }

    #[test]
    fn test_shaded_runs_cover_line() {
        let runs = shaded_runs("ab  cd", 6);
        let joined: String = runs.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(joined, "ab  cd");
        assert_eq!(runs.first().map(|(c, _)| *c), Some(DUSK));
        assert_eq!(runs.last().map(|(c, _)| *c), Some(SEA));
    }
}
