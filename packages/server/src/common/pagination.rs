//! Page-number pagination for the master-data list endpoints.
//!
//! The backend paginates with `pageNumber`/`pageSize` and reports
//! `totalCount`/`totalPages`/`hasPrevious`/`hasNext`; the console validates
//! and clamps the parameters before forwarding them upstream.

use serde::Deserialize;

/// Default page size for master-data lists (zones, wards, categories, ...).
pub const DEFAULT_PAGE_SIZE: i32 = 100;

/// Page size used when a caller wants the full rate table in one page.
pub const RATE_PAGE_SIZE: i32 = 1000;

/// Upper bound accepted for any page size.
pub const MAX_PAGE_SIZE: i32 = 1000;

/// Raw pagination parameters as they arrive on the query string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page_number: Option<i32>,
    pub page_size: Option<i32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub is_active: Option<bool>,
}

impl PageParams {
    /// Apply defaults and bounds. `default_page_size` differs per endpoint:
    /// the rate table fetches one large page, master lists fetch 100.
    pub fn validate(&self, default_page_size: i32) -> ValidatedPageParams {
        let page_number = self.page_number.unwrap_or(1).max(1);
        let page_size = self
            .page_size
            .unwrap_or(default_page_size)
            .clamp(1, MAX_PAGE_SIZE);

        // Only the two sort orders the backend understands survive.
        let sort_order = self
            .sort_order
            .as_deref()
            .filter(|order| matches!(*order, "asc" | "desc"))
            .map(String::from);

        ValidatedPageParams {
            page_number,
            page_size,
            sort_by: self.sort_by.clone(),
            sort_order,
            is_active: self.is_active,
        }
    }
}

/// Pagination parameters after defaulting and clamping.
#[derive(Debug, Clone)]
pub struct ValidatedPageParams {
    pub page_number: i32,
    pub page_size: i32,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub is_active: Option<bool>,
}

impl From<ValidatedPageParams> for wtis::models::MasterQuery {
    fn from(params: ValidatedPageParams) -> Self {
        wtis::models::MasterQuery {
            page_number: Some(params.page_number),
            page_size: Some(params.page_size),
            sort_by: params.sort_by,
            sort_order: params.sort_order,
            is_active: params.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_applies_defaults() {
        let params = PageParams::default().validate(DEFAULT_PAGE_SIZE);
        assert_eq!(params.page_number, 1);
        assert_eq!(params.page_size, 100);
        assert!(params.sort_order.is_none());
    }

    #[test]
    fn validate_clamps_bounds() {
        let params = PageParams {
            page_number: Some(-3),
            page_size: Some(9999),
            ..Default::default()
        }
        .validate(DEFAULT_PAGE_SIZE);
        assert_eq!(params.page_number, 1);
        assert_eq!(params.page_size, MAX_PAGE_SIZE);

        let params = PageParams {
            page_size: Some(0),
            ..Default::default()
        }
        .validate(DEFAULT_PAGE_SIZE);
        assert_eq!(params.page_size, 1);
    }

    #[test]
    fn validate_rejects_unknown_sort_order() {
        let params = PageParams {
            sort_order: Some("sideways".to_string()),
            ..Default::default()
        }
        .validate(DEFAULT_PAGE_SIZE);
        assert!(params.sort_order.is_none());

        let params = PageParams {
            sort_order: Some("desc".to_string()),
            ..Default::default()
        }
        .validate(DEFAULT_PAGE_SIZE);
        assert_eq!(params.sort_order.as_deref(), Some("desc"));
    }

    #[test]
    fn validated_params_convert_to_master_query() {
        let query: wtis::models::MasterQuery = PageParams {
            page_number: Some(2),
            is_active: Some(true),
            ..Default::default()
        }
        .validate(DEFAULT_PAGE_SIZE)
        .into();
        assert_eq!(query.page_number, Some(2));
        assert_eq!(query.page_size, Some(100));
        assert_eq!(query.is_active, Some(true));
    }
}
