use serde::Deserialize;

/// Catalog records carry more fields than the cart service reads; only the
/// id matters for the existence check, the rest is ignored on deserialize.
#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    pub id: i64,
}
