use std::sync::Arc;

use dispatch_core::{DispatchError, DispatchResult, ValueObject};

use crate::courier::Courier;
use crate::order::Order;

/// A shipment request: one order, bound to one courier under a courier-minted id.
///
/// The id and courier name are captured once at construction and never change.
#[derive(Debug, Clone)]
pub struct Consignment {
    id: String,
    courier_name: String,
    courier: Arc<dyn Courier>,
    order: Order,
}

impl Consignment {
    /// Ask `courier` for an id and its name, and bind them to `order`.
    ///
    /// Fails with `InvalidArgument` if the courier yields an empty id or name.
    pub fn new(order: Order, courier: Arc<dyn Courier>) -> DispatchResult<Self> {
        let id = courier.generate_consignment_id(&order);
        if id.is_empty() {
            return Err(DispatchError::invalid_argument(format!(
                "empty consignment id generated by courier {courier:?}"
            )));
        }

        let courier_name = courier.name().to_string();
        if courier_name.is_empty() {
            return Err(DispatchError::invalid_argument(format!(
                "empty courier name supplied by courier {courier:?}"
            )));
        }

        Ok(Self {
            id,
            courier_name,
            courier,
            order,
        })
    }

    /// Build a consignment without asking the courier, skipping validation.
    #[cfg(test)]
    pub(crate) fn unchecked(
        id: impl Into<String>,
        courier_name: impl Into<String>,
        courier: Arc<dyn Courier>,
        order: Order,
    ) -> Self {
        Self {
            id: id.into(),
            courier_name: courier_name.into(),
            courier,
            order,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn courier_name(&self) -> &str {
        &self.courier_name
    }

    pub fn courier(&self) -> &Arc<dyn Courier> {
        &self.courier
    }

    pub fn order(&self) -> &Order {
        &self.order
    }
}

impl PartialEq for Consignment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.courier_name == other.courier_name
            && self.order == other.order
            && Arc::ptr_eq(&self.courier, &other.courier)
    }
}

impl ValueObject for Consignment {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courier::CounterCourier;
    use crate::order::OrderDetails;

    /// Courier returning whatever it was built with, including empty strings.
    #[derive(Debug)]
    struct FixedCourier {
        name: &'static str,
        id: &'static str,
    }

    impl Courier for FixedCourier {
        fn name(&self) -> &str {
            self.name
        }

        fn generate_consignment_id(&self, _order: &Order) -> String {
            self.id.to_string()
        }
    }

    fn order() -> Order {
        Order::new("ORD-1", OrderDetails::from([("k".to_string(), "v".into())])).unwrap()
    }

    #[test]
    fn consignment_captures_courier_id_and_name() {
        let courier: Arc<dyn Courier> = Arc::new(CounterCourier::new("Example"));
        let consignment = Consignment::new(order(), Arc::clone(&courier)).unwrap();

        assert_eq!(consignment.id(), "1");
        assert_eq!(consignment.courier_name(), "Example");
        assert_eq!(consignment.order(), &order());
        assert!(Arc::ptr_eq(consignment.courier(), &courier));
    }

    #[test]
    fn each_consignment_gets_a_fresh_id() {
        let courier: Arc<dyn Courier> = Arc::new(CounterCourier::new("Example"));
        let first = Consignment::new(order(), Arc::clone(&courier)).unwrap();
        let second = Consignment::new(order(), courier).unwrap();
        assert_ne!(first.id(), second.id());
        assert_ne!(first, second);
    }

    #[test]
    fn clones_compare_equal_by_value() {
        fn same_value<V: ValueObject>(a: &V, b: &V) -> bool {
            a == b
        }

        let courier: Arc<dyn Courier> = Arc::new(CounterCourier::new("Example"));
        let consignment = Consignment::new(order(), courier).unwrap();
        assert!(same_value(&consignment, &consignment.clone()));
    }

    #[test]
    fn empty_generated_id_is_rejected() {
        let courier = Arc::new(FixedCourier {
            name: "Example",
            id: "",
        });
        let err = Consignment::new(order(), courier).unwrap_err();
        match err {
            DispatchError::InvalidArgument(msg) => {
                assert!(msg.contains("empty consignment id"));
                assert!(msg.contains("FixedCourier"));
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn empty_courier_name_is_rejected() {
        let courier = Arc::new(FixedCourier {
            name: "",
            id: "A12345",
        });
        let err = Consignment::new(order(), courier).unwrap_err();
        match err {
            DispatchError::InvalidArgument(msg) => assert!(msg.contains("empty courier name")),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }
}
