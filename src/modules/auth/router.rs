use crate::middleware::auth::auth_gate;
use crate::middleware::chain::Handler;
use crate::middleware::routes::RouteTable;
use crate::modules::auth::controller::auth_test;

pub fn init_auth_routes() -> RouteTable {
    RouteTable::new().get("/test", auth_gate().wrap(Handler::new(auth_test)))
}
