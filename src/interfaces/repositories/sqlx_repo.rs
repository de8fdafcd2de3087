use crate::db::postgres::Database;

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub db: Database,
}

#[derive(Clone)]
pub struct SqlxContactRepo {
    pub db: Database,
}
