pub mod block_hasher;

pub use block_hasher::BlockHashService;
