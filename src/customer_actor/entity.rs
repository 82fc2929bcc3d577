use super::actions::CustomerAction;
use super::dtos::CustomerCreate;
use crate::domain::Customer;
use crate::registry::{Entity, EntityId};

impl Entity for Customer {
    type CreateParams = CustomerCreate;
    type Action = CustomerAction;
    type ActionResult = ();

    const KIND: &'static str = "customer";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_create_params(id: EntityId, params: CustomerCreate) -> Self {
        Customer::new(id, params.name)
    }

    fn apply(&mut self, action: CustomerAction) {
        match action {
            CustomerAction::RecordOrder(order_id) => self.record_order(order_id),
        }
    }
}
