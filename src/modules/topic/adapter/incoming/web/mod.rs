pub mod query_params;
pub mod routes;
