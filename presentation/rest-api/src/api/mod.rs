pub mod error;
pub mod tags;
pub mod root {
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod routes;
}
pub mod recommendation {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
