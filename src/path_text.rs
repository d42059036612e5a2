/// A slash-separated name split into its directory prefix and last segment,
/// so the prefix can be rendered muted and truncated first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathText {
    pub directory: String,
    pub file_name: String,
}

impl PathText {
    pub fn new(path: &str) -> Self {
        match path.rsplit_once('/') {
            Some((directory, file_name)) if !file_name.is_empty() => Self {
                directory: format!("{directory}/"),
                file_name: file_name.to_string(),
            },
            _ => Self {
                directory: String::new(),
                file_name: path.to_string(),
            },
        }
    }

    pub fn full(&self) -> String {
        format!("{}{}", self.directory, self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::PathText;

    #[test]
    fn splits_nested_branch_name() {
        let text = PathText::new("feature/auth/login");
        assert_eq!(text.directory, "feature/auth/");
        assert_eq!(text.file_name, "login");
        assert_eq!(text.full(), "feature/auth/login");
    }

    #[test]
    fn keeps_flat_name_as_file_name() {
        let text = PathText::new("main");
        assert_eq!(text.directory, "");
        assert_eq!(text.file_name, "main");
    }

    #[test]
    fn trailing_slash_is_not_split() {
        let text = PathText::new("feature/");
        assert_eq!(text.directory, "");
        assert_eq!(text.file_name, "feature/");
    }
}
