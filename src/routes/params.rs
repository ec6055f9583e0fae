use serde::Deserialize;
use utoipa::ToSchema;

/// Clients are always listed 20 per page.
pub const CLIENT_PAGE_SIZE: i64 = 20;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ClientListQuery {
    pub page: Option<i64>,
}

impl ClientListQuery {
    pub fn normalize(&self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let offset = (page - 1) * CLIENT_PAGE_SIZE;
        (CLIENT_PAGE_SIZE, offset)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductListQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ProductListQuery {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let page_size = self.page_size.unwrap_or(10).clamp(1, 100);
        let offset = (page - 1) * page_size;
        (page, page_size, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_pages_are_one_based() {
        let (limit, offset) = ClientListQuery { page: None }.normalize();
        assert_eq!((limit, offset), (20, 0));

        let (_, offset) = ClientListQuery { page: Some(3) }.normalize();
        assert_eq!(offset, 40);

        // Page 0 and negative pages clamp to the first page.
        let (_, offset) = ClientListQuery { page: Some(0) }.normalize();
        assert_eq!(offset, 0);
    }

    #[test]
    fn product_page_size_defaults_and_clamps() {
        let (page, page_size, offset) = ProductListQuery::default().normalize();
        assert_eq!((page, page_size, offset), (1, 10, 0));

        let (_, page_size, _) = ProductListQuery {
            page: None,
            page_size: Some(1000),
        }
        .normalize();
        assert_eq!(page_size, 100);

        let (page, page_size, offset) = ProductListQuery {
            page: Some(2),
            page_size: Some(5),
        }
        .normalize();
        assert_eq!((page, page_size, offset), (2, 5, 5));
    }
}
