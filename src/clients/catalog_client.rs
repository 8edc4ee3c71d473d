use tracing::{debug, info, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::catalog_actor::{demo_products, CatalogError};
use crate::domain::{Page, PageRequest, Product, ProductForm, ProductId};

/// Client for the catalog store.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(CatalogClient, Product, ProductId, CatalogError, product);

fn map_framework_error(e: FrameworkError) -> CatalogError {
    match e {
        FrameworkError::NotFound(id) => CatalogError::NotFound(id),
        FrameworkError::Rejected(reason) => CatalogError::Validation(vec![reason]),
        other => CatalogError::ActorCommunicationError(other.to_string()),
    }
}

impl CatalogClient {
    /// Validates the admin form and stores the product.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create_product(&self, form: ProductForm) -> Result<Product, CatalogError> {
        debug!("Sending request");
        let payload = form.validate().map_err(CatalogError::Validation)?;
        let id = self.inner.create(payload).await.map_err(map_framework_error)?;
        self.inner
            .get(id)
            .await
            .map_err(map_framework_error)?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn update_product(&self, id: ProductId, form: ProductForm) -> Result<Product, CatalogError> {
        debug!("Sending request");
        let patch = form.validate_patch().map_err(CatalogError::Validation)?;
        self.inner.update(id, patch).await.map_err(map_framework_error)
    }

    /// Newest products first.
    #[instrument(skip(self))]
    pub async fn list_products(&self, page: PageRequest) -> Result<Page<Product>, CatalogError> {
        debug!("Sending request");
        let items = self.inner.list(page.offset(), page.size()).await.map_err(map_framework_error)?;
        let count = self.count_products().await?;
        Ok(Page::new(items, page, count))
    }

    /// Every product, newest first, for the shopping page.
    #[instrument(skip(self))]
    pub async fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        self.inner.list(0, usize::MAX).await.map_err(map_framework_error)
    }

    #[instrument(skip(self))]
    pub async fn count_products(&self) -> Result<usize, CatalogError> {
        debug!("Sending request");
        self.inner.count().await.map_err(map_framework_error)
    }

    /// Fills the catalog with random demo products.
    #[instrument(skip(self))]
    pub async fn seed_products(&self, count: usize) -> Result<usize, CatalogError> {
        for payload in demo_products(count) {
            self.inner.create(payload).await.map_err(map_framework_error)?;
        }
        info!(count, "Seeded demo products");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::ResourceActor;
    use rust_decimal::Decimal;

    fn start() -> CatalogClient {
        let (actor, inner) = ResourceActor::<Product>::new(10, ProductId::generate);
        tokio::spawn(actor.run());
        CatalogClient::new(inner)
    }

    fn form(name: &str, price: &str) -> ProductForm {
        ProductForm { name: name.into(), price: price.into(), ..Default::default() }
    }

    #[tokio::test]
    async fn test_create_edit_delete_product() {
        let catalog = start();

        let created = catalog.create_product(form("Desk Lamp", "12.50")).await.unwrap();
        assert_eq!(created.price, Decimal::new(1250, 2));

        let edited = catalog.update_product(created.id, form("Desk Lamp XL", "15")).await.unwrap();
        assert_eq!(edited.name, "Desk Lamp XL");
        assert!(edited.modified_at >= created.modified_at);

        catalog.delete_product(created.id).await.unwrap();
        assert_eq!(catalog.get_product(created.id).await.unwrap(), None);
        assert!(matches!(catalog.delete_product(created.id).await, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_store() {
        let catalog = start();
        let err = catalog.create_product(form("", "abc")).await.unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Validation);
        assert_eq!(err.messages().len(), 2);
        assert_eq!(catalog.count_products().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let catalog = start();
        let err = catalog.update_product(ProductId::generate(), form("X", "1")).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_seed_and_page() {
        let catalog = start();
        catalog.seed_products(25).await.unwrap();
        let page = catalog.list_products(PageRequest::new(Some(3), Some(10))).await.unwrap();
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(catalog.all_products().await.unwrap().len(), 25);
    }
}
