use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, error};

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenCodec},
    common::entities::app_errors::CoreError,
};

/// HMAC-SHA256 signed access tokens.
#[derive(Clone)]
pub struct Hs256TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Hs256TokenCodec {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenCodec for Hs256TokenCodec {
    fn encode(&self, claims: JwtClaim) -> Result<String, CoreError> {
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign access token: {}", e);
            CoreError::InternalServerError
        })
    }

    fn decode(&self, token: String) -> Result<JwtClaim, CoreError> {
        decode::<JwtClaim>(&token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejected access token: {}", e);
                CoreError::InvalidToken
            })
    }
}
