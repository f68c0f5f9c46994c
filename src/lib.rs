pub mod attributes;
pub mod codec;
pub mod loader;
pub mod schema;

pub use crate::codec::decode;
pub use crate::codec::encode;
pub use crate::loader::load;
pub use crate::schema::CardList;
