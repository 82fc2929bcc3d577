use super::dtos::OrderCreate;
use crate::domain::Order;
use crate::registry::{Entity, EntityId};

impl Entity for Order {
    type CreateParams = OrderCreate;
    type Action = ();
    type ActionResult = ();

    const KIND: &'static str = "order";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_create_params(id: EntityId, params: OrderCreate) -> Self {
        Order::place(id, params.customer_id, &params.products, params.placed_at)
    }

    fn apply(&mut self, _action: ()) {}
}
