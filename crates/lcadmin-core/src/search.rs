// ── Client-side keyword fallback ──
//
// Some list endpoints take no keyword parameter; for those the match
// happens here, case-insensitively, over the entity's display fields.
// Server-filtered lists never pass through this module a second time.

use lcadmin_api::types::{EmissionCompartment, IndustryCode, MidpointCategory, UnitGroup};

/// Display fields an entity exposes to the keyword fallback.
pub trait KeywordMatch {
    fn keyword_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over any display field.
    /// An empty keyword matches everything.
    fn matches_keyword(&self, keyword: &str) -> bool {
        if keyword.is_empty() {
            return true;
        }
        let needle = keyword.to_lowercase();
        self.keyword_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl KeywordMatch for MidpointCategory {
    fn keyword_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(abbr) = self.abbr.as_deref() {
            fields.push(abbr);
        }
        fields
    }
}

impl KeywordMatch for UnitGroup {
    fn keyword_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl KeywordMatch for EmissionCompartment {
    fn keyword_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl KeywordMatch for IndustryCode {
    fn keyword_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.name.as_str()]
    }
}

/// Keep only the items matching `keyword`.
pub fn filter_keyword<T: KeywordMatch + Clone>(items: &[T], keyword: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_keyword(keyword))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn compartment(name: &str) -> EmissionCompartment {
        EmissionCompartment {
            id: Uuid::from_u128(7),
            name: name.to_owned(),
            description: None,
        }
    }

    #[test]
    fn match_is_case_insensitive() {
        let c = compartment("Freshwater");
        assert!(c.matches_keyword("fresh"));
        assert!(c.matches_keyword("WATER"));
        assert!(!c.matches_keyword("soil"));
    }

    #[test]
    fn empty_keyword_matches_everything() {
        assert!(compartment("Air").matches_keyword(""));
    }

    #[test]
    fn industry_codes_match_on_code_and_name() {
        let code = IndustryCode {
            id: Uuid::from_u128(9),
            code: "C1061".to_owned(),
            name: "Grain milling".to_owned(),
        };
        assert!(code.matches_keyword("c10"));
        assert!(code.matches_keyword("milling"));
        assert!(!code.matches_keyword("smelting"));
    }

    #[test]
    fn filter_keeps_only_matches() {
        let items = vec![
            compartment("Air"),
            compartment("Freshwater"),
            compartment("Agricultural soil"),
        ];
        let hits = filter_keyword(&items, "a");
        assert_eq!(hits.len(), 3);
        let hits = filter_keyword(&items, "soil");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Agricultural soil");
    }
}
