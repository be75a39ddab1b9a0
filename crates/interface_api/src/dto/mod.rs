//! Request/response views of the registry entities

pub mod client;
pub mod policy;

use serde::Deserialize;
use utoipa::IntoParams;

use core_kernel::PageRequest;

pub use client::{ClientRequest, ClientResponse};
pub use policy::{ClientReference, PolicyRequest, PolicyResponse};

/// Default page size of `GET /api/clients`
pub const CLIENT_PAGE_SIZE: u32 = 10;

/// Default page size of `GET /api/policies`
pub const POLICY_PAGE_SIZE: u32 = 20;

/// Paging query of list endpoints
///
/// Values are kept raw and read leniently: anything that is not a usable
/// number falls back to the endpoint default.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 0-based page index (default 0)
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
    /// Items per page (endpoint default, at most 2000)
    #[param(value_type = Option<u32>)]
    pub size: Option<String>,
}

impl PageParams {
    /// Resolves the query into a page request
    ///
    /// A negative or unparsable page becomes 0. A size below 1 or unparsable
    /// becomes `default_size`.
    pub fn to_request(&self, default_size: u32) -> PageRequest {
        let page = parse_number(self.page.as_deref())
            .filter(|page| *page >= 0)
            .map_or(0, saturate);
        let size = parse_number(self.size.as_deref())
            .filter(|size| *size >= 1)
            .map_or(default_size, saturate);
        PageRequest::new(page, size)
    }
}

fn parse_number(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

fn saturate(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::pagination::MAX_PAGE_SIZE;

    fn params(page: Option<&str>, size: Option<&str>) -> PageParams {
        PageParams {
            page: page.map(str::to_string),
            size: size.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults_follow_the_endpoint() {
        let request = PageParams::default().to_request(CLIENT_PAGE_SIZE);
        assert_eq!(request, PageRequest::new(0, 10));

        let request = PageParams::default().to_request(POLICY_PAGE_SIZE);
        assert_eq!(request, PageRequest::new(0, 20));
    }

    #[test]
    fn test_unusable_page_is_first_page() {
        for raw in ["-1", "abc", "", "1.5"] {
            let request = params(Some(raw), None).to_request(CLIENT_PAGE_SIZE);
            assert_eq!(request.page, 0, "page={raw}");
        }
    }

    #[test]
    fn test_unusable_size_is_default() {
        for raw in ["0", "-3", "ten", ""] {
            let request = params(None, Some(raw)).to_request(POLICY_PAGE_SIZE);
            assert_eq!(request.size, POLICY_PAGE_SIZE, "size={raw}");
        }
    }

    #[test]
    fn test_valid_values_are_kept_and_size_capped() {
        let request = params(Some("2"), Some("5")).to_request(CLIENT_PAGE_SIZE);
        assert_eq!(request, PageRequest::new(2, 5));

        let request = params(None, Some("5000")).to_request(CLIENT_PAGE_SIZE);
        assert_eq!(request.size, MAX_PAGE_SIZE);
    }
}
