//! High-level gateway facade
//!
//! The outward contract of the crate: per-entity search and get operations
//! that hide the probing machinery and return canonical records. Candidate
//! lists are rebuilt fresh for every call; nothing about a winning
//! combination is cached or shared across requests, so concurrent calls
//! need no locking.

use crate::auth::{build_auth_candidates, AuthCandidate};
use crate::config::GatewayConfig;
use crate::endpoint::{self, SearchField};
use crate::error::{Error, Result};
use crate::http::{HttpTransport, Transport};
use crate::merge::merge_by_id;
use crate::normalize::{
    normalize_customer, normalize_item, normalize_sales_order, vendor_name_from,
    CanonicalCustomer, CanonicalItem, CanonicalSalesOrder,
};
use crate::probe::ProbeExecutor;
use crate::types::{EntityKind, JsonValue, PageSpec};
use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Ceiling for caller-supplied page numbers; anything past this is a typo
/// or a scraper, not a navigation request.
const MAX_PAGE: u32 = 100_000;

/// Result of the diagnostic ping
#[derive(Debug, Clone, Serialize)]
pub struct PingReport {
    /// A working (auth, endpoint, shape) combination was found
    pub ok: bool,
    /// Rows returned by the probe's one-row sample query
    pub sample_count: usize,
}

/// The gateway facade
pub struct Gateway {
    config: GatewayConfig,
    transport: Arc<dyn Transport>,
}

impl Gateway {
    /// Create a gateway backed by the real HTTP transport
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(config.base_url.clone())?);
        Ok(Self { config, transport })
    }

    /// Create a gateway over a caller-supplied transport (tests)
    pub fn with_transport(config: GatewayConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    fn executor(&self) -> ProbeExecutor<'_> {
        ProbeExecutor::new(self.transport.as_ref(), self.config.timeout)
    }

    fn auth_candidates(&self) -> Result<Vec<AuthCandidate>> {
        build_auth_candidates(&self.config.credentials)
    }

    // ========================================================================
    // Customers
    // ========================================================================

    /// Search customers by free text. The query is required on this route; a
    /// blank query fails validation before any network call.
    pub async fn search_customers(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<CanonicalCustomer>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::validation("customer search requires a query"));
        }

        let page = PageSpec {
            page: page.clamp(1, MAX_PAGE),
            page_size: page_size.clamp(1, 500),
        };

        let lists = self.fan_out_search(EntityKind::Customer, query, page).await?;
        let canonical = lists
            .into_iter()
            .map(|records| records.iter().map(normalize_customer).collect())
            .collect();
        Ok(merge_by_id(canonical))
    }

    /// Fetch one customer by id
    pub async fn get_customer(&self, id: i64) -> Result<CanonicalCustomer> {
        let raw = self.probe_get_record(EntityKind::Customer, id).await?;
        Ok(normalize_customer(&raw))
    }

    // ========================================================================
    // Items
    // ========================================================================

    /// Search items by free text. A blank query short-circuits to an empty
    /// result without any network call.
    pub async fn search_items(
        &self,
        query: &str,
        take: u32,
        skip: u32,
    ) -> Result<Vec<CanonicalItem>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let page = PageSpec::from_take_skip(take, skip);
        let lists = self.fan_out_search(EntityKind::Item, query, page).await?;
        let canonical = lists
            .into_iter()
            .map(|records| records.iter().map(normalize_item).collect())
            .collect();
        Ok(merge_by_id(canonical))
    }

    /// Fetch one item by id, enriched with its vendor name when the
    /// item-vendor lookup succeeds. A vendor lookup failure is logged and
    /// tolerated; it never fails the item fetch.
    pub async fn get_item(&self, id: i64) -> Result<CanonicalItem> {
        let raw = self.probe_get_record(EntityKind::Item, id).await?;
        let item = normalize_item(&raw);

        if item.vendor_name.is_empty() {
            match self.lookup_item_vendor(id).await {
                Ok(Some(vendor_name)) => {
                    return Ok(CanonicalItem {
                        vendor_name,
                        ..item
                    });
                }
                Ok(None) => {}
                Err(e) => warn!(item = id, error = %e, "item vendor lookup failed"),
            }
        }

        Ok(item)
    }

    /// Probe the item-vendor route and pull the first vendor's name.
    async fn lookup_item_vendor(&self, item_id: i64) -> Result<Option<String>> {
        let auths = self.auth_candidates()?;
        let endpoints = endpoint::item_vendor_candidates(item_id);
        let vendors = self
            .executor()
            .probe_search(&endpoints, &auths, true)
            .await?;

        Ok(vendors
            .first()
            .map(vendor_name_from)
            .filter(|name| !name.is_empty()))
    }

    // ========================================================================
    // Sales Orders
    // ========================================================================

    /// Search sales orders by document number or customer text. A blank
    /// query short-circuits to an empty result.
    pub async fn search_sales_orders(
        &self,
        query: &str,
        take: u32,
    ) -> Result<Vec<CanonicalSalesOrder>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let page = PageSpec::from_take_skip(take, 0);
        let lists = self
            .fan_out_search(EntityKind::SalesOrder, query, page)
            .await?;
        let canonical = lists
            .into_iter()
            .map(|records| records.iter().map(normalize_sales_order).collect())
            .collect();
        Ok(merge_by_id(canonical))
    }

    /// Fetch one sales order by id. This entity kind is passed through
    /// verbatim rather than normalized; probing still applies.
    pub async fn get_sales_order(&self, id: i64) -> Result<JsonValue> {
        self.probe_get_record(EntityKind::SalesOrder, id).await
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Probe reachability with a one-row "list everything" customer query.
    pub async fn ping(&self) -> Result<PingReport> {
        let auths = self.auth_candidates()?;
        let field = endpoint::search_fields(EntityKind::Customer)[0];
        let endpoints = endpoint::search_candidates(
            EntityKind::Customer,
            &field,
            "",
            PageSpec {
                page: 1,
                page_size: 1,
            },
        );

        let records = self.executor().probe_search(&endpoints, &auths, true).await?;
        Ok(PingReport {
            ok: true,
            sample_count: records.len(),
        })
    }

    // ========================================================================
    // Shared plumbing
    // ========================================================================

    /// Run one field-scoped probe per natural text field of the entity,
    /// concurrently, and return the raw record lists in field order
    /// (primary first). The primary field's failure propagates; a secondary
    /// field's failure contributes an empty list and a warning.
    async fn fan_out_search(
        &self,
        entity: EntityKind,
        query: &str,
        page: PageSpec,
    ) -> Result<Vec<Vec<JsonValue>>> {
        let auths = self.auth_candidates()?;
        let allow_empty = query.is_empty();
        let fields: Vec<SearchField> = endpoint::search_fields(entity);

        let probes = fields.iter().map(|field| {
            let endpoints = endpoint::search_candidates(entity, field, query, page);
            let auths = &auths;
            async move {
                self.executor()
                    .probe_search(&endpoints, auths, allow_empty)
                    .await
            }
        });
        let results = join_all(probes).await;

        let mut lists = Vec::with_capacity(fields.len());
        for (field, result) in fields.iter().zip(results) {
            match result {
                Ok(records) => lists.push(records),
                Err(e) if field.primary => return Err(e),
                Err(e) => {
                    warn!(
                        entity = %entity,
                        field = field.property,
                        error = %e,
                        "secondary field search failed"
                    );
                    lists.push(Vec::new());
                }
            }
        }
        Ok(lists)
    }

    /// Probe a get-by-id and distinguish an absent record from exhaustion.
    async fn probe_get_record(&self, entity: EntityKind, id: i64) -> Result<JsonValue> {
        let auths = self.auth_candidates()?;
        let endpoints = endpoint::get_candidates(entity, id);
        let value = self.executor().probe_get(&endpoints, &auths).await?;

        if value.is_null() {
            return Err(Error::not_found(entity.label(), id));
        }
        Ok(value)
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.config.base_url)
            .field("debug", &self.config.debug)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::http::{TransportRequest, TransportResponse};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Answers every request with the same 200 body and records what it saw.
    struct CannedTransport {
        body: String,
        requests: Mutex<Vec<TransportRequest>>,
    }

    impl CannedTransport {
        fn new(body: &serde_json::Value) -> Arc<Self> {
            Arc::new(Self {
                body: body.to_string(),
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn send(&self, request: TransportRequest) -> crate::error::Result<TransportResponse> {
            self.requests.lock().unwrap().push(request);
            Ok(TransportResponse {
                status: 200,
                body: self.body.clone(),
            })
        }
    }

    fn gateway_without_credentials() -> Gateway {
        // No credentials: operations that reach candidate construction fail
        // with a configuration error before any network call.
        Gateway::new(GatewayConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_blank_customer_query_fails_validation_before_probing() {
        let gateway = gateway_without_credentials();
        let err = gateway.search_customers("   ", 1, 25).await.unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[tokio::test]
    async fn test_blank_item_query_short_circuits_to_empty() {
        let gateway = gateway_without_credentials();
        // Would fail with a config error if it tried to build auth candidates
        let items = gateway.search_items("  ", 25, 0).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_blank_sales_order_query_short_circuits_to_empty() {
        let gateway = gateway_without_credentials();
        let orders = gateway.search_sales_orders("", 25).await.unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credentials_surface_as_config_error() {
        let gateway = gateway_without_credentials();
        let err = gateway.get_customer(1).await.unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[tokio::test]
    async fn test_with_transport_drives_search_and_clamps_pagination() {
        let transport = CannedTransport::new(&json!({
            "Items": [{"Id": 7, "Company": "Acme"}]
        }));
        let config = GatewayConfig::builder().bearer_token("tok").build();
        let gateway = Gateway::with_transport(config, transport.clone());

        let customers = gateway
            .search_customers("acme", u32::MAX, u32::MAX)
            .await
            .unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].id, 7);

        // One accepted combination per fanned-out field, with the absurd
        // pagination clamped before it reached any candidate body
        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        for request in requests.iter() {
            let body = request.body.as_ref().unwrap();
            assert_eq!(body["NumberOfRecords"], 500);
            assert_eq!(body["PageNumber"], 100_000);
        }
    }

    #[test]
    fn test_gateway_debug_does_not_leak_credentials() {
        let config = GatewayConfig::builder()
            .api_key("secret-key")
            .bearer_token("secret-token")
            .build();
        let gateway = Gateway::new(config).unwrap();
        let debug_str = format!("{gateway:?}");
        assert!(!debug_str.contains("secret-key"));
        assert!(!debug_str.contains("secret-token"));
    }
}
