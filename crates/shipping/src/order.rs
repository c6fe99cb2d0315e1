use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dispatch_core::{DispatchError, DispatchResult, Entity};

/// Opaque order attributes, as supplied by the ordering system.
pub type OrderDetails = BTreeMap<String, serde_json::Value>;

/// The customer order being shipped.
///
/// Both the id and the details can be replaced after construction, but neither
/// is ever allowed to become empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOrder")]
pub struct Order {
    id: String,
    details: OrderDetails,
}

#[derive(Deserialize)]
struct RawOrder {
    id: String,
    details: OrderDetails,
}

impl TryFrom<RawOrder> for Order {
    type Error = DispatchError;

    fn try_from(raw: RawOrder) -> Result<Self, Self::Error> {
        Order::new(raw.id, raw.details)
    }
}

impl Order {
    pub fn new(id: impl Into<String>, details: OrderDetails) -> DispatchResult<Self> {
        let id = id.into();
        ensure_id(&id)?;
        ensure_details(&details)?;
        Ok(Self { id, details })
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> DispatchResult<()> {
        let id = id.into();
        ensure_id(&id)?;
        self.id = id;
        Ok(())
    }

    pub fn set_details(&mut self, details: OrderDetails) -> DispatchResult<()> {
        ensure_details(&details)?;
        self.details = details;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn details(&self) -> &OrderDetails {
        &self.details
    }
}

impl Entity for Order {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

fn ensure_id(id: &str) -> DispatchResult<()> {
    if id.is_empty() {
        return Err(DispatchError::invalid_argument("order id cannot be empty"));
    }
    Ok(())
}

fn ensure_details(details: &OrderDetails) -> DispatchResult<()> {
    if details.is_empty() {
        return Err(DispatchError::invalid_argument("order details cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details() -> OrderDetails {
        OrderDetails::from([("customer".to_string(), json!("Jane Doe"))])
    }

    #[test]
    fn new_order_keeps_id_and_details() {
        let order = Order::new("ORD-1", details()).unwrap();
        assert_eq!(order.id(), "ORD-1");
        assert_eq!(order.details(), &details());
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = Order::new("", details()).unwrap_err();
        assert_eq!(err, DispatchError::invalid_argument("order id cannot be empty"));
    }

    #[test]
    fn empty_details_are_rejected() {
        let err = Order::new("ORD-1", OrderDetails::new()).unwrap_err();
        assert_eq!(err, DispatchError::invalid_argument("order details cannot be empty"));
    }

    #[test]
    fn setters_revalidate_and_leave_state_untouched_on_failure() {
        let mut order = Order::new("ORD-1", details()).unwrap();

        assert!(order.set_id("").unwrap_err().is_invalid_argument());
        assert!(order.set_details(OrderDetails::new()).unwrap_err().is_invalid_argument());
        assert_eq!(order.id(), "ORD-1");
        assert_eq!(order.details(), &details());

        order.set_id("ORD-2").unwrap();
        let replacement = OrderDetails::from([("weight_kg".to_string(), json!(3))]);
        order.set_details(replacement.clone()).unwrap();
        assert_eq!(order.id(), "ORD-2");
        assert_eq!(order.details(), &replacement);
    }

    #[test]
    fn identity_is_the_order_id() {
        fn entity_id<E: Entity>(entity: &E) -> &E::Id {
            entity.id()
        }

        let mut order = Order::new("ORD-1", details()).unwrap();
        order
            .set_details(OrderDetails::from([("gift".to_string(), json!(true))]))
            .unwrap();
        assert_eq!(entity_id(&order), "ORD-1");
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let ok: Order =
            serde_json::from_value(json!({"id": "ORD-9", "details": {"sku": "X1"}})).unwrap();
        assert_eq!(ok.id(), "ORD-9");

        let bad = serde_json::from_value::<Order>(json!({"id": "", "details": {"sku": "X1"}}));
        assert!(bad.is_err());

        let bad = serde_json::from_value::<Order>(json!({"id": "ORD-9", "details": {}}));
        assert!(bad.is_err());
    }
}
