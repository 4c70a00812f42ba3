//! Startup banner shown before the first prompt.

/// Render the banner text inside a box. The width follows the text so
/// custom `--banner` values stay framed.
#[must_use]
pub fn render(text: &str) -> String {
    let width = text.chars().count() + 2;
    let top = format!("╭{}╮", "─".repeat(width));
    let middle = format!("│ {} │", text);
    let bottom = format!("╰{}╯", "─".repeat(width));
    format!("{}\n{}\n{}", top, middle, bottom)
}

/// Print the banner with a blank line of spacing underneath.
pub fn print(text: &str) {
    println!("{}", render(text));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_text() {
        let banner = render("npmss");
        assert!(banner.contains("npmss"));
    }

    #[test]
    fn test_render_width_follows_text() {
        let banner = render("ab");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0].chars().count(),
            lines[1].chars().count(),
            "box edges should line up"
        );
        assert_eq!(lines[0].chars().count(), lines[2].chars().count());
    }
}
