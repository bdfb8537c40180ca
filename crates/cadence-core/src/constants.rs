/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";
pub const APP_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", APP_ROUTE_COMPONENT);

pub const TASKS_ROUTE_COMPONENT: &str = "tasks";
pub const TASKS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", TASKS_ROUTE_COMPONENT);

pub const RECURRENCE_ROUTE_COMPONENT: &str = "recurrence";
pub const RECURRENCE_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", RECURRENCE_ROUTE_COMPONENT);
