use crate::middleware::chain::Handler;
use crate::middleware::routes::RouteTable;
use crate::modules::users::controller::{get_user, get_users};

pub fn init_users_routes() -> RouteTable {
    RouteTable::new()
        .get("/", Handler::new(get_users))
        .get("/{id}", Handler::new(get_user))
}
