/// A block of interpretation text under one heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

/// Interpretation of a score sheet, rendered by the output formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn section<I, S>(&mut self, heading: impl Into<String>, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections.push(Section {
            heading: heading.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn find(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}

/// Something to show the user right after scoring, before the full report.
#[derive(Debug, Clone, PartialEq)]
pub enum Checkpoint {
    /// Print the lines, then ask whether to go on. Declining ends the session.
    Gate {
        lines: Vec<String>,
        question: &'static str,
        abort_message: &'static str,
    },
    /// Print the lines and carry on.
    Notice { lines: Vec<String> },
}

/// Turn `["a", "b"]` into bullet lines.
pub fn bullets(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| format!("• {}", item)).collect()
}

/// Turn `["a", "b"]` into `1. a`, `2. b`.
pub fn numbered(items: &[&str]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_builder() {
        let mut report = Report::new("Title");
        report
            .section("First", ["one", "two"])
            .section("Second", vec!["three".to_string()]);
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.find("Second").unwrap().lines, vec!["three"]);
        assert!(report.find("Missing").is_none());
    }

    #[test]
    fn test_list_helpers() {
        assert_eq!(bullets(&["a", "b"]), vec!["• a", "• b"]);
        assert_eq!(numbered(&["a", "b"]), vec!["1. a", "2. b"]);
    }
}
