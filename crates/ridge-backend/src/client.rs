//! The typed backend client.
//!
//! The hosted backend exposes a row-oriented REST API (`/rest/v1/{table}`
//! with `column=op.value` filter parameters) plus an object store
//! (`/storage/v1`). This client wraps both behind typed methods. Requests
//! are independent fire-and-await operations: no retries, no caching; a
//! failure is reported once and the caller decides whether to try again.

use crate::{BackendConfig, BackendError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use ridge_commerce::catalog::{Brand, Category, Product};
use ridge_commerce::checkout::{Order, OrderPayload};
use ridge_commerce::ids::{OrderId, ProductId, UserId};
use ridge_commerce::search::{CatalogQuery, SearchResults};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

/// Client for the hosted data backend.
pub struct BackendClient {
    http: Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Build a client from a validated configuration.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", config.api_key());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer)
                .map_err(|e| BackendError::Config(e.to_string()))?,
        );
        headers.insert(
            "apikey",
            HeaderValue::from_str(config.api_key())
                .map_err(|e| BackendError::Config(e.to_string()))?,
        );

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| BackendError::Config(e.to_string()))?;

        Ok(Self { http, config })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, table)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!(%method, url, "backend request");
        self.http.request(method, url)
    }

    async fn check(&self, response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(code = status.as_u16(), body, "backend error response");
        Err(BackendError::Status {
            code: status.as_u16(),
            body,
        })
    }

    /// Fetch rows from a table.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(String, String)],
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .request(Method::GET, &self.table_url(table))
            .query(params)
            .send()
            .await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch rows plus the exact total match count (for pagination).
    pub async fn select_counted<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(String, String)],
    ) -> Result<(Vec<T>, i64), BackendError> {
        let response = self
            .request(Method::GET, &self.table_url(table))
            .query(params)
            .header("Prefer", "count=exact")
            .send()
            .await?;
        let response = self.check(response).await?;

        let total = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total);
        let items: Vec<T> = response.json().await?;
        let total = total.unwrap_or(items.len() as i64);
        Ok((items, total))
    }

    /// Insert one row.
    pub async fn insert<T: Serialize>(&self, table: &str, row: &T) -> Result<(), BackendError> {
        let response = self
            .request(Method::POST, &self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    /// Insert one row and read back the created record.
    pub async fn insert_returning<T: Serialize, R: DeserializeOwned>(
        &self,
        table: &str,
        row: &T,
    ) -> Result<R, BackendError> {
        let response = self
            .request(Method::POST, &self.table_url(table))
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;
        let response = self.check(response).await?;

        let mut rows: Vec<R> = response.json().await?;
        if rows.is_empty() {
            return Err(BackendError::Decode(
                "insert returned no representation".to_string(),
            ));
        }
        Ok(rows.remove(0))
    }

    /// Patch rows matching the filter parameters.
    pub async fn update<T: Serialize>(
        &self,
        table: &str,
        params: &[(String, String)],
        patch: &T,
    ) -> Result<(), BackendError> {
        let response = self
            .request(Method::PATCH, &self.table_url(table))
            .query(params)
            .header("Prefer", "return=minimal")
            .json(patch)
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    /// Delete rows matching the filter parameters.
    pub async fn delete(
        &self,
        table: &str,
        params: &[(String, String)],
    ) -> Result<(), BackendError> {
        let response = self
            .request(Method::DELETE, &self.table_url(table))
            .query(params)
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    /// Upload a file to the object store and return its public URL.
    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, BackendError> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.config.base_url, bucket, path
        );
        let response = self
            .request(Method::POST, &url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;
        self.check(response).await?;

        Ok(public_object_url(&self.config.base_url, bucket, path))
    }

    // ---- typed convenience methods ----

    /// Fetch a catalog page.
    pub async fn products(
        &self,
        query: &CatalogQuery,
    ) -> Result<SearchResults<Product>, BackendError> {
        let (items, total) = self
            .select_counted::<Product>("products", &query.to_params())
            .await?;
        Ok(SearchResults::new(items, query.page, query.per_page, total))
    }

    /// Fetch one product by id; `None` when the id is unknown.
    pub async fn product(&self, id: &ProductId) -> Result<Option<Product>, BackendError> {
        let params = vec![
            ("id".to_string(), format!("eq.{}", id.as_str())),
            ("limit".to_string(), "1".to_string()),
        ];
        let mut rows: Vec<Product> = self.select("products", &params).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    /// Create a catalog product.
    pub async fn create_product(&self, product: &Product) -> Result<(), BackendError> {
        self.insert("products", product).await
    }

    /// Replace a catalog product by id.
    pub async fn update_product(&self, product: &Product) -> Result<(), BackendError> {
        let params = vec![("id".to_string(), format!("eq.{}", product.id.as_str()))];
        self.update("products", &params, product).await
    }

    /// Archive a product, hiding it from the storefront.
    pub async fn archive_product(&self, id: &ProductId) -> Result<(), BackendError> {
        let params = vec![("id".to_string(), format!("eq.{}", id.as_str()))];
        self.update("products", &params, &json!({ "status": "archived" }))
            .await
    }

    /// Fetch all categories, in display order.
    pub async fn categories(&self) -> Result<Vec<Category>, BackendError> {
        let params = vec![("order".to_string(), "position.asc".to_string())];
        self.select("categories", &params).await
    }

    /// Fetch all brands.
    pub async fn brands(&self) -> Result<Vec<Brand>, BackendError> {
        let params = vec![("order".to_string(), "slug.asc".to_string())];
        self.select("brands", &params).await
    }

    /// Fetch orders, newest first.
    pub async fn orders(&self) -> Result<Vec<Order>, BackendError> {
        let params = vec![("order".to_string(), "created_at.desc".to_string())];
        self.select("orders", &params).await
    }

    /// Fetch one customer's orders, newest first.
    pub async fn orders_for_user(&self, user: &UserId) -> Result<Vec<Order>, BackendError> {
        let params = vec![
            ("user_id".to_string(), format!("eq.{}", user.as_str())),
            ("order".to_string(), "created_at.desc".to_string()),
        ];
        self.select("orders", &params).await
    }

    /// Submit an order and return the created order id.
    ///
    /// The caller clears the cart only after this succeeds.
    pub async fn create_order(&self, payload: &OrderPayload) -> Result<OrderId, BackendError> {
        #[derive(serde::Deserialize)]
        struct CreatedRow {
            id: String,
        }
        let created: CreatedRow = self.insert_returning("orders", payload).await?;
        Ok(OrderId::new(created.id))
    }

    /// Probe connectivity with a cheap HEAD request against the row API.
    pub async fn ping(&self) -> Result<(), BackendError> {
        let response = self
            .request(Method::HEAD, &self.table_url("products"))
            .query(&[("limit", "1")])
            .send()
            .await?;
        if response.status() == StatusCode::METHOD_NOT_ALLOWED {
            // Some deployments reject HEAD; reachable is good enough.
            return Ok(());
        }
        self.check(response).await?;
        Ok(())
    }
}

/// Public URL of an uploaded object.
fn public_object_url(base_url: &str, bucket: &str, path: &str) -> String {
    format!("{}/storage/v1/object/public/{}/{}", base_url, bucket, path)
}

/// Parse the total out of a `content-range` header value like `0-23/49`.
fn parse_content_range_total(value: &str) -> Option<i64> {
    value.rsplit('/').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client() -> BackendClient {
        BackendClient::new(
            BackendConfig::new("https://shop.example.dev", "test-key")
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap()
    }

    #[test]
    fn test_table_url() {
        assert_eq!(
            client().table_url("products"),
            "https://shop.example.dev/rest/v1/products"
        );
    }

    #[test]
    fn test_public_object_url() {
        assert_eq!(
            public_object_url("https://shop.example.dev", "product-images", "carrier/1.jpg"),
            "https://shop.example.dev/storage/v1/object/public/product-images/carrier/1.jpg"
        );
    }

    #[test]
    fn test_parse_content_range_total() {
        assert_eq!(parse_content_range_total("0-23/49"), Some(49));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
        assert_eq!(parse_content_range_total("garbage"), None);
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(BackendClient::new(BackendConfig::new("", "key")).is_err());
    }
}
