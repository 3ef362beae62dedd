//! [`ActorEntity`] implementation for [`InventoryItem`].

use super::actions::InventoryAction;
use super::error::InventoryError;
use crate::framework::ActorEntity;
use crate::model::{InventoryItem, InventoryItemCreate, InventoryItemUpdate, ItemId, DEFAULT_UNIT};
use async_trait::async_trait;

fn validate_name(name: &str) -> Result<String, InventoryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InventoryError::EmptyName);
    }
    Ok(name.to_string())
}

fn validate_price(price: f64) -> Result<f64, InventoryError> {
    if !price.is_finite() || price < 0.0 {
        return Err(InventoryError::InvalidPrice(price));
    }
    Ok(price)
}

fn validate_discount(discount: Option<f64>) -> Result<Option<f64>, InventoryError> {
    match discount {
        Some(d) if !(0.0..=100.0).contains(&d) => Err(InventoryError::InvalidDiscount(d)),
        other => Ok(other),
    }
}

/// Blank units fall back to [`DEFAULT_UNIT`].
fn unit_or_default(unit: Option<String>) -> String {
    unit.map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_UNIT.to_string())
}

#[async_trait]
impl ActorEntity for InventoryItem {
    type Id = ItemId;
    type Create = InventoryItemCreate;
    type Update = InventoryItemUpdate;
    type Action = InventoryAction;
    type ActionResult = bool;
    type Context = ();
    type Error = InventoryError;

    fn id(&self) -> &ItemId {
        &self.id
    }

    /// New items start in stock unless the params carry a stock flag.
    fn from_create_params(id: ItemId, params: InventoryItemCreate) -> Result<Self, InventoryError> {
        Ok(Self {
            id,
            name: validate_name(&params.name)?,
            category: params.category,
            category_id: params.category_id,
            price: validate_price(params.price)?,
            unit: unit_or_default(params.unit),
            in_stock: params.in_stock.unwrap_or(true),
            brand: params.brand,
            discount: validate_discount(params.discount)?,
        })
    }

    /// Validates every supplied field before applying any of them.
    async fn on_update(&mut self, update: InventoryItemUpdate, _ctx: &()) -> Result<(), InventoryError> {
        let name = update.name.as_deref().map(validate_name).transpose()?;
        let price = update.price.map(validate_price).transpose()?;
        let discount = update.discount.map(validate_discount).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if update.unit.is_some() {
            self.unit = unit_or_default(update.unit);
        }
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(discount) = discount {
            self.discount = discount;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: InventoryAction, _ctx: &()) -> Result<bool, InventoryError> {
        match action {
            InventoryAction::ToggleStock => {
                self.in_stock = !self.in_stock;
                Ok(self.in_stock)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, price: f64) -> InventoryItemCreate {
        InventoryItemCreate {
            name: name.into(),
            category: "Dairy".into(),
            category_id: Some("cat-dairy".into()),
            price,
            unit: None,
            brand: Some("Amul".into()),
            discount: None,
            in_stock: None,
        }
    }

    #[test]
    fn test_create_defaults_unit_and_stock() {
        let item = InventoryItem::from_create_params(ItemId::from("PROD-0001"), create("  Paneer ", 90.0)).unwrap();
        assert_eq!(item.name, "Paneer");
        assert_eq!(item.unit, DEFAULT_UNIT);
        assert!(item.in_stock);
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let id = ItemId::from("PROD-0001");
        assert_eq!(
            InventoryItem::from_create_params(id.clone(), create("   ", 10.0)).unwrap_err(),
            InventoryError::EmptyName
        );
        assert_eq!(
            InventoryItem::from_create_params(id.clone(), create("Curd", -1.0)).unwrap_err(),
            InventoryError::InvalidPrice(-1.0)
        );
        assert!(matches!(
            InventoryItem::from_create_params(id, create("Curd", f64::NAN)).unwrap_err(),
            InventoryError::InvalidPrice(_)
        ));
    }

    #[tokio::test]
    async fn test_update_is_all_or_nothing() {
        let mut item = InventoryItem::from_create_params(ItemId::from("PROD-0001"), create("Paneer", 90.0)).unwrap();

        let bad = InventoryItemUpdate {
            name: Some("Malai Paneer".into()),
            price: Some(-5.0),
            ..Default::default()
        };
        assert!(item.on_update(bad, &()).await.is_err());
        assert_eq!(item.name, "Paneer");

        let good = InventoryItemUpdate {
            price: Some(95.0),
            unit: Some("200 g".into()),
            ..Default::default()
        };
        item.on_update(good, &()).await.unwrap();
        assert_eq!(item.price, 95.0);
        assert_eq!(item.unit, "200 g");
        assert_eq!(item.name, "Paneer");
    }

    #[test]
    fn test_copy_params_keep_stock_flag() {
        let mut item = InventoryItem::from_create_params(ItemId::from("PROD-0001"), create("Paneer", 90.0)).unwrap();
        item.in_stock = false;

        let copy = InventoryItem::from_create_params(ItemId::from("PROD-0002"), InventoryItemCreate::from(&item)).unwrap();
        assert!(!copy.in_stock);
        assert_eq!(copy.brand.as_deref(), Some("Amul"));
    }

    #[tokio::test]
    async fn test_update_can_clear_brand_and_discount() {
        let mut params = create("Paneer", 90.0);
        params.discount = Some(10.0);
        let mut item = InventoryItem::from_create_params(ItemId::from("PROD-0001"), params).unwrap();

        // Absent fields are left alone.
        item.on_update(InventoryItemUpdate { price: Some(85.0), ..Default::default() }, &())
            .await
            .unwrap();
        assert_eq!(item.brand.as_deref(), Some("Amul"));
        assert_eq!(item.discount, Some(10.0));

        let bad = InventoryItemUpdate {
            brand: Some(None),
            discount: Some(Some(120.0)),
            ..Default::default()
        };
        assert_eq!(item.on_update(bad, &()).await.unwrap_err(), InventoryError::InvalidDiscount(120.0));
        assert_eq!(item.brand.as_deref(), Some("Amul"));

        let clear = InventoryItemUpdate {
            brand: Some(None),
            discount: Some(None),
            ..Default::default()
        };
        item.on_update(clear, &()).await.unwrap();
        assert_eq!(item.brand, None);
        assert_eq!(item.discount, None);
        assert_eq!(item.price, 85.0);
    }

    #[tokio::test]
    async fn test_toggle_stock_returns_new_value() {
        let mut item = InventoryItem::from_create_params(ItemId::from("PROD-0001"), create("Paneer", 90.0)).unwrap();
        assert!(!item.handle_action(InventoryAction::ToggleStock, &()).await.unwrap());
        assert!(item.handle_action(InventoryAction::ToggleStock, &()).await.unwrap());
    }
}
