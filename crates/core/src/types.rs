/// All database primary and foreign keys are PostgreSQL BIGSERIAL/BIGINT.
pub type DbId = i64;
