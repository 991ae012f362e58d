//! Request building.
//!
//! Turns a typed `FactRequest` into the `{subject}/{category}` path and the
//! query parameters NumbersAPI understands. Only explicitly set modifiers are
//! emitted, so the service applies its own defaults for everything else.
//! Nothing here touches the network.

mod date;
mod types;

pub use date::{DateSelector, MonthDay};
pub use types::{Category, FactRequest, Modifiers, NotFoundPolicy, Subject};

impl FactRequest {
    /// Returns the resource path, without a leading slash.
    pub fn path(&self) -> String {
        format!("{}/{}", self.subject, self.category)
    }

    /// Returns the query parameters in a fixed order.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let m = &self.modifiers;
        let mut params = Vec::new();
        if m.fragment {
            params.push(("fragment", "true".to_string()));
        }
        if let Some(policy) = m.not_found {
            params.push(("notfound", policy.to_string()));
        }
        if let Some(ref text) = m.default_text {
            params.push(("default", text.clone()));
        }
        if let Some(min) = m.min {
            params.push(("min", min.to_string()));
        }
        if let Some(max) = m.max {
            params.push(("max", max.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_each_subject_kind() {
        assert_eq!(
            FactRequest::new(Subject::Number(42), Category::Trivia).path(),
            "42/trivia"
        );
        assert_eq!(
            FactRequest::new(Subject::Number(-12344), Category::Year).path(),
            "-12344/year"
        );
        assert_eq!(
            FactRequest::new(Subject::Random, Category::Math).path(),
            "random/math"
        );
        assert_eq!(
            FactRequest::new(Subject::Date(MonthDay::new(12, 25)), Category::Date).path(),
            "12/25/date"
        );
    }

    #[test]
    fn test_path_keeps_wide_numbers() {
        let request = FactRequest::new(Subject::Number(1234567890987654321), Category::Trivia);
        assert_eq!(request.path(), "1234567890987654321/trivia");
    }

    #[test]
    fn test_parse_integer_widths() {
        assert_eq!(Subject::parse_integer("-7"), Some(Subject::Number(-7)));
        assert_eq!(
            Subject::parse_integer("170141183460469231731687303715884105728"),
            Some(Subject::Wide(
                "170141183460469231731687303715884105728".to_string()
            ))
        );
        for input in ["", "-", "12/25", "1e40", "12 34", "random"] {
            assert_eq!(Subject::parse_integer(input), None, "input {input:?}");
        }
    }

    #[test]
    fn test_date_selector_subject() {
        let subject = Subject::from(DateSelector::parse("5/2").unwrap());
        assert_eq!(subject.to_string(), "05/02");
        assert_eq!(Subject::from(DateSelector::Random), Subject::Random);
    }

    #[test]
    fn test_default_request_has_no_query() {
        let request = FactRequest::new(Subject::Number(7), Category::Trivia);
        assert!(request.query().is_empty());
    }

    #[test]
    fn test_fragment_false_is_not_sent() {
        let request = FactRequest::new(Subject::Number(23), Category::Trivia).with_fragment(false);
        assert!(request.query().is_empty());
    }

    #[test]
    fn test_all_modifiers_in_order() {
        let request = FactRequest::new(Subject::Random, Category::Trivia)
            .with_fragment(true)
            .with_not_found(NotFoundPolicy::Ceil)
            .with_default_text("foo bar")
            .with_range(Some(-5), Some(10));
        assert_eq!(
            request.query(),
            vec![
                ("fragment", "true".to_string()),
                ("notfound", "ceil".to_string()),
                ("default", "foo bar".to_string()),
                ("min", "-5".to_string()),
                ("max", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_bound_is_sent_alone() {
        let request = FactRequest::new(Subject::Random, Category::Trivia).with_range(None, Some(5));
        assert_eq!(request.query(), vec![("max", "5".to_string())]);
    }

    #[test]
    fn test_category_wire_names() {
        use std::str::FromStr;
        use strum::IntoEnumIterator;

        for category in Category::iter() {
            let name = category.to_string();
            assert_eq!(name, name.to_lowercase());
            assert_eq!(Category::from_str(&name).unwrap(), category);
        }
        assert_eq!(Category::default(), Category::Trivia);
        assert_eq!(NotFoundPolicy::Default.as_ref(), "default");
        assert_eq!(NotFoundPolicy::Floor.as_ref(), "floor");
    }
}
