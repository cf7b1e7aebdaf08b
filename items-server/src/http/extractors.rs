//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON body whose rejections become 400 `{"error": ...}` responses
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Extract and validate an integer item id from path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub i64);

impl ItemId {
    /// Parse a raw path segment.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        raw.parse::<i64>().map(Self).map_err(|_| {
            tracing::debug!(raw, "rejected item id");
            ValidationError::InvalidId
        })
    }
}

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ValidationError::InvalidId)?;

        Ok(Self::parse(&id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers() {
        assert_eq!(ItemId::parse("1").unwrap(), ItemId(1));
        assert_eq!(ItemId::parse("-7").unwrap(), ItemId(-7));
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["abc", "1.5", "", " 1", "99999999999999999999"] {
            let err = ItemId::parse(raw).unwrap_err();
            assert_eq!(err, ValidationError::InvalidId, "{raw}");
        }
    }
}
