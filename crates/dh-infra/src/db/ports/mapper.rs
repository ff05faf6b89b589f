use anyhow::Result;

/// Domain record -> insertable row, tagged with its owner and snapshot position.
pub trait InsertMapper<D, R>: Sync + Send {
    fn to_row(&self, owner: &str, position: i32, domain: &D) -> Result<R>;
}

pub trait RowMapper<R, D>: Sync + Send {
    fn to_domain(&self, row: &R) -> Result<D>;
}
