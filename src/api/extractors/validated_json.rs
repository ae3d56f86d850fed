//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body that has passed its `Validate` rules.
///
/// Malformed JSON and rule failures both reject with a validation error;
/// rule failures are listed one message per offending field.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(collect_messages(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten field errors into a sorted, de-duplicated message list
fn collect_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} é inválido", field))
            })
        })
        .collect();

    messages.sort();
    messages.dedup();
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct Sample {
        #[validate(required(message = "nome é obrigatório"))]
        nome: Option<String>,
        #[validate(required(message = "cpf é obrigatório"))]
        cpf: Option<String>,
        #[validate(email)]
        email: Option<String>,
    }

    #[test]
    fn test_messages_are_itemized_and_sorted() {
        let sample = Sample {
            nome: None,
            cpf: None,
            email: Some("não-é-email".to_string()),
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(
            collect_messages(&errors),
            vec![
                "cpf é obrigatório".to_string(),
                "email é inválido".to_string(),
                "nome é obrigatório".to_string(),
            ]
        );
    }
}
