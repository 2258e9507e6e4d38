//! Search job creation options.

/// Optional time bounds sent alongside a submitted query.
///
/// Empty or whitespace-only values are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateJobOptions {
    /// Earliest time for search (e.g., "-24h", "2024-01-01T00:00:00").
    pub earliest_time: Option<String>,
    /// Latest time for search (e.g., "now").
    pub latest_time: Option<String>,
}

impl CreateJobOptions {
    pub fn earliest(&self) -> Option<&str> {
        non_blank(self.earliest_time.as_deref())
    }

    pub fn latest(&self) -> Option<&str> {
        non_blank(self.latest_time.as_deref())
    }

    /// Form fields for `POST /services/search/jobs`, including `output_mode`.
    pub fn form_fields<'a>(&'a self, query: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut form = vec![("search", query), ("output_mode", "json")];
        if let Some(earliest) = self.earliest() {
            form.push(("earliest_time", earliest));
        }
        if let Some(latest) = self.latest() {
            form.push(("latest_time", latest));
        }
        form
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_default() {
        let options = CreateJobOptions::default();
        assert_eq!(
            options.form_fields("search earliest=-1h x"),
            vec![("search", "search earliest=-1h x"), ("output_mode", "json")]
        );
    }

    #[test]
    fn test_form_fields_with_bounds() {
        let options = CreateJobOptions {
            earliest_time: Some("-24h".to_string()),
            latest_time: Some("now".to_string()),
        };
        let form = options.form_fields("search x");
        assert!(form.contains(&("earliest_time", "-24h")));
        assert!(form.contains(&("latest_time", "now")));
    }

    #[test]
    fn test_blank_bounds_skipped() {
        let options = CreateJobOptions {
            earliest_time: Some("  ".to_string()),
            latest_time: Some(String::new()),
        };
        assert_eq!(options.earliest(), None);
        assert_eq!(options.form_fields("search x").len(), 2);
    }
}
