pub mod source;
pub mod matches {
    pub mod entity;
    pub mod repository;
}
