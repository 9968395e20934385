use async_trait::async_trait;
use contracts::usecases::u508_save_query::{SaveQueryRequest, SaveQueryResponse};
use gloo_net::http::Request;

use super::error::SaveQueryError;
use super::state::SaveQuerySubmission;
use crate::shared::api_utils::api_url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Delivers a submission to the saved query API
#[async_trait(?Send)]
pub trait SaveQueryTransport {
    async fn create(
        &self,
        submission: &SaveQuerySubmission,
    ) -> Result<SaveQueryResponse, SaveQueryError>;
}

/// Encodes the request as a form body, the way the API reads `csrf_token`
pub fn encode_form(request: &SaveQueryRequest) -> Result<String, SaveQueryError> {
    Ok(serde_qs::to_string(request)?)
}

/// Fetch based transport; one POST per call, no retry and no timeout
#[derive(Debug, Clone, Default)]
pub struct HttpSaveQueryTransport {
    api_base: Option<String>,
}

impl HttpSaveQueryTransport {
    pub fn new(api_base: Option<String>) -> Self {
        Self { api_base }
    }

    pub fn url(&self, submission: &SaveQuerySubmission) -> String {
        api_url(self.api_base.as_deref(), submission.path)
    }
}

#[async_trait(?Send)]
impl SaveQueryTransport for HttpSaveQueryTransport {
    async fn create(
        &self,
        submission: &SaveQuerySubmission,
    ) -> Result<SaveQueryResponse, SaveQueryError> {
        let body = encode_form(&submission.request)?;

        let response = Request::post(&self.url(submission))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| SaveQueryError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SaveQueryError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(SaveQueryError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<SaveQueryResponse>()
            .await
            .map_err(|e| SaveQueryError::Decode(e.to_string()))
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Transport that records submissions and answers with a fixed result
    pub struct RecordingTransport {
        calls: Mutex<Vec<SaveQuerySubmission>>,
        reply: Result<SaveQueryResponse, SaveQueryError>,
    }

    impl RecordingTransport {
        pub fn replying(reply: Result<SaveQueryResponse, SaveQueryError>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply,
            }
        }

        pub fn calls(&self) -> Vec<SaveQuerySubmission> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl SaveQueryTransport for RecordingTransport {
        async fn create(
            &self,
            submission: &SaveQuerySubmission,
        ) -> Result<SaveQueryResponse, SaveQueryError> {
            self.calls.lock().unwrap().push(submission.clone());
            self.reply.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u508_save_query::state::{QueryContext, SaveQueryForm};

    fn submission() -> SaveQuerySubmission {
        let mut form = SaveQueryForm::new("Q1");
        form.set_description("test");
        form.save(
            QueryContext {
                sql: "SELECT 1".to_string(),
                schema: "public".to_string(),
                db_id: 3,
            },
            "tok".to_string(),
        )
    }

    #[test]
    fn test_url_is_relative_by_default() {
        let transport = HttpSaveQueryTransport::default();
        assert_eq!(transport.url(&submission()), "/savedqueryviewapi/api/create");
    }

    #[test]
    fn test_url_with_api_base() {
        let transport = HttpSaveQueryTransport::new(Some("https://bi.example.com/".into()));
        assert_eq!(
            transport.url(&submission()),
            "https://bi.example.com/savedqueryviewapi/api/create"
        );
    }

    #[test]
    fn test_form_body_carries_every_field() {
        let body = encode_form(&submission().request).unwrap();
        for pair in ["label=Q1", "description=test", "db_id=3", "schema=public", "csrf_token=tok"] {
            assert!(body.contains(pair), "{} missing from {}", pair, body);
        }
        let parsed: SaveQueryRequest = serde_qs::from_str(&body).unwrap();
        assert_eq!(parsed.sql, "SELECT 1");
    }
}
