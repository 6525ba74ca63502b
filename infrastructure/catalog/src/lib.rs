pub mod product {
    pub mod builtin;
    pub mod entity;
    pub mod repository;
}
