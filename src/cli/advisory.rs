//! Advisory checks on a request before it is sent.
//!
//! These never change what is sent; they only flag argument combinations the
//! service is known to handle poorly.

use strum_macros::EnumIter;

use crate::request::{Category, FactRequest, NotFoundPolicy, Subject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Advisory {
    /// `--default` combined with a `--notfound` policy other than `default`
    IgnoredDefault,
    /// `--min`/`--max` on a subject that is not `random`
    RangeWithoutRandom,
    /// A number that does not survive a trip through `f64`
    ImpreciseNumber,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::IgnoredDefault => {
                "--default value will likely be ignored by NumbersAPI when --notfound is not set to \"default\""
            }
            Advisory::RangeWithoutRandom => {
                "using --min or --max for non-random numbers is likely not useful"
            }
            Advisory::ImpreciseNumber => {
                "NumbersAPI is likely to return incorrect answers for some very large numbers"
            }
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Warning: {}", self.message())
    }
}

/// Returns every advisory that applies to `request`, in a stable order.
pub fn advisories(request: &FactRequest) -> Vec<Advisory> {
    let m = &request.modifiers;
    let mut found = Vec::new();

    let policy_overrides_default = matches!(m.not_found, Some(p) if p != NotFoundPolicy::Default);
    if policy_overrides_default && m.default_text.is_some() {
        found.push(Advisory::IgnoredDefault);
    }

    if (m.min.is_some() || m.max.is_some()) && !request.subject.is_random() {
        found.push(Advisory::RangeWithoutRandom);
    }

    let imprecise = match &request.subject {
        Subject::Number(n) => !survives_float_round_trip(*n),
        Subject::Wide(_) => true,
        Subject::Date(_) | Subject::Random => false,
    };
    if imprecise && request.category != Category::Date {
        found.push(Advisory::ImpreciseNumber);
    }

    found
}

// The service stores numbers as doubles
fn survives_float_round_trip(n: i128) -> bool {
    let f = n as f64;
    f < i128::MAX as f64 && f as i128 == n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::MonthDay;
    use strum::IntoEnumIterator;

    #[test]
    fn test_plain_request_has_no_advisories() {
        let request = FactRequest::new(Subject::Number(42), Category::Trivia);
        assert!(advisories(&request).is_empty());
    }

    #[test]
    fn test_ignored_default() {
        let request = FactRequest::new(Subject::Number(5555555555), Category::Trivia)
            .with_default_text("foo")
            .with_not_found(NotFoundPolicy::Ceil);
        assert_eq!(advisories(&request), vec![Advisory::IgnoredDefault]);

        let request = FactRequest::new(Subject::Number(7), Category::Trivia)
            .with_default_text("foo")
            .with_not_found(NotFoundPolicy::Default);
        assert!(advisories(&request).is_empty());

        let request =
            FactRequest::new(Subject::Number(7), Category::Trivia).with_default_text("foo");
        assert!(advisories(&request).is_empty());
    }

    #[test]
    fn test_range_without_random() {
        let request =
            FactRequest::new(Subject::Number(55), Category::Trivia).with_range(Some(5), None);
        assert_eq!(advisories(&request), vec![Advisory::RangeWithoutRandom]);

        let request =
            FactRequest::new(Subject::Number(66), Category::Trivia).with_range(None, Some(5));
        assert_eq!(advisories(&request), vec![Advisory::RangeWithoutRandom]);

        let request = FactRequest::new(Subject::Random, Category::Trivia).with_range(Some(5), Some(5));
        assert!(advisories(&request).is_empty());
    }

    #[test]
    fn test_imprecise_number() {
        let request = FactRequest::new(Subject::Number(1234567890987654321), Category::Trivia);
        assert_eq!(advisories(&request), vec![Advisory::ImpreciseNumber]);

        let request = FactRequest::new(Subject::Number(314159265358979), Category::Trivia);
        assert!(advisories(&request).is_empty());

        let request = FactRequest::new(Subject::Number(i128::MAX), Category::Year);
        assert_eq!(advisories(&request), vec![Advisory::ImpreciseNumber]);

        let wide = Subject::Wide("1000000000000000000000000000000000000000".to_string());
        let request = FactRequest::new(wide.clone(), Category::Math);
        assert_eq!(advisories(&request), vec![Advisory::ImpreciseNumber]);

        let request = FactRequest::new(wide, Category::Date);
        assert!(advisories(&request).is_empty());
    }

    #[test]
    fn test_imprecise_number_skipped_for_date_category() {
        let request = FactRequest::new(Subject::Number(1234567890987654321), Category::Date);
        assert!(advisories(&request).is_empty());

        let request = FactRequest::new(Subject::Date(MonthDay::new(12, 25)), Category::Trivia);
        assert!(advisories(&request).is_empty());
    }

    #[test]
    fn test_advisory_display_is_prefixed() {
        for advisory in Advisory::iter() {
            let line = advisory.to_string();
            assert!(line.starts_with("Warning: "));
            assert!(line.ends_with(advisory.message()));
        }
    }
}
