//! Product Service

use shared::models::{NewProduct, Product};
use shared::request::ProductCreate;

use crate::db::repository::{ProductRepository, UnitOfWork};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppResult, ErrorCode};

use super::rules;

/// Create a product. The price must be present and non-negative.
pub async fn create<U: UnitOfWork>(uow: &mut U, req: ProductCreate) -> AppResult<Product> {
    validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
    let price = rules::require_price(req.price, ErrorCode::ProductInvalidPrice)?;

    let product = uow
        .products()
        .create(NewProduct {
            name: req.name,
            price,
        })
        .await?;

    tracing::info!(product_id = product.id, price = %product.price, "Product created");
    Ok(product)
}

pub async fn list<U: UnitOfWork>(uow: &mut U) -> AppResult<Vec<Product>> {
    Ok(uow.products().find_all().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::setup;
    use rust_decimal::Decimal;

    fn req(price: Option<Decimal>) -> ProductCreate {
        ProductCreate {
            name: "Fried chicken".into(),
            price,
        }
    }

    #[tokio::test]
    async fn test_create_returns_stored_product() {
        let (_db, mut uow) = setup().await;
        let product = create(&mut uow, req(Some(Decimal::from(16000)))).await.unwrap();
        assert_eq!(product.name, "Fried chicken");
        assert_eq!(product.price, Decimal::from(16000));

        let all = list(&mut uow).await.unwrap();
        assert_eq!(all, vec![product]);
    }

    #[tokio::test]
    async fn test_create_accepts_zero_price() {
        let (_db, mut uow) = setup().await;
        assert!(create(&mut uow, req(Some(Decimal::ZERO))).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_missing_or_negative_price() {
        let (_db, mut uow) = setup().await;

        let err = create(&mut uow, req(None)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);
        assert!(err.is_invalid_argument());

        let err = create(&mut uow, req(Some(Decimal::NEGATIVE_ONE))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);

        assert!(list(&mut uow).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_names_are_not_unique() {
        let (_db, mut uow) = setup().await;
        let a = create(&mut uow, req(Some(Decimal::ONE))).await.unwrap();
        let b = create(&mut uow, req(Some(Decimal::ONE))).await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
