pub mod jwt_codec;
pub mod session_repository;

pub use jwt_codec::Hs256TokenCodec;
pub use session_repository::PostgresSessionRepository;
