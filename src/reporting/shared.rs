// src/reporting/shared.rs

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Cuts `text` to `width` characters, marking the cut with `…`.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("node", 1), "node");
        assert_eq!(pluralize("edge", 0), "edges");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Borges", 10), "Borges");
        assert_eq!(truncate("Jorge Luis Borges", 8), "Jorge L…");
        assert_eq!(truncate("José", 4), "José");
    }
}
