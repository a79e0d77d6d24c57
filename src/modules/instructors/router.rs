use crate::middleware::chain::Handler;
use crate::middleware::routes::RouteTable;
use crate::modules::instructors::controller::{get_instructor, get_instructors};

pub fn init_instructors_routes() -> RouteTable {
    RouteTable::new()
        .get("/", Handler::new(get_instructors))
        .get("/{id}", Handler::new(get_instructor))
}
