use crate::middleware::chain::Handler;
use crate::middleware::routes::RouteTable;
use crate::modules::courses::controller::{get_course, get_courses};

pub fn init_courses_routes() -> RouteTable {
    RouteTable::new()
        .get("/", Handler::new(get_courses))
        .get("/{id}", Handler::new(get_course))
}
