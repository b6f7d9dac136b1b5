use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// `Json<T>` that also runs `validator` rules before the handler sees the body.
/// Both malformed JSON and rule violations come back as 422 `{"detail": ...}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field}: {}", e.code),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fortune::models::FortuneRequest;

    #[test]
    fn test_validation_errors_become_422_detail() {
        let request = FortuneRequest {
            birth_date: "1990-01-01".into(),
            gender: "female".into(),
            zodiac: "tiger".into(),
            name: Some("n".repeat(51)),
            concern: None,
            fortune_types: vec![],
        };
        let err = AppError::from(request.validate().unwrap_err());
        match err {
            AppError::Validation(detail) => {
                assert_eq!(
                    detail,
                    "fortune_types must contain between 1 and 6 entries; name must be at most 50 characters"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
