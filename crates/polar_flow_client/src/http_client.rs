//! HTTP client implementation for the Polar Flow web service.
//!
//! [`ReqwestFlowClient::login`] performs the form login and hands back a
//! [`FlowSession`], the reqwest-based implementation of the
//! [`FlowClient`](crate::FlowClient) trait.

use crate::{DateRange, FlowClient, FlowError, ReportResponse, SportResult};
use async_trait::async_trait;
use regex::Regex;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::sync::LazyLock;

static CSRF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"csrfToken" value="([a-z0-9\-]+)""#).expect("csrf pattern is valid")
});

/// Unauthenticated client; holds the cookie jar that the session inherits.
#[derive(Clone, Debug)]
pub struct ReqwestFlowClient {
    base_url: String,
    client: reqwest::Client,
}

/// Authenticated session. Cookies set during login live in `client`.
#[derive(Clone, Debug)]
pub struct FlowSession {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct LoginForm<'a> {
    #[serde(rename = "csrfToken")]
    csrf_token: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnURL")]
    return_url: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportRequest<'a> {
    bar_type: &'a str,
    group: &'a str,
    report: &'a str,
    report_subtype: &'a str,
    time_frame: &'a str,
    from: String,
    to: String,
    sport: [&'a str; 1],
}

impl<'a> ReportRequest<'a> {
    fn new(sport: &'a str, range: &DateRange) -> Self {
        Self {
            bar_type: "distance",
            group: "day",
            report: "custom",
            report_subtype: "training",
            time_frame: range.time_frame.as_str(),
            from: range.from_param(),
            to: range.to_param(),
            sport: [sport],
        }
    }
}

impl ReqwestFlowClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the service (e.g., "https://flow.polar.com")
    pub fn new(base_url: &str) -> Result<Self, FlowError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    /// Obtain the CSRF token from the login page.
    async fn obtain_csrf(&self) -> Result<String, FlowError> {
        let url = self.login_url();
        tracing::debug!(%url, "fetching login page");
        let page = self.client.get(&url).send().await?.text().await?;
        let token = extract_csrf(&page)
            .ok_or_else(|| FlowError::Auth("csrf token not found in login page".into()))?;
        tracing::debug!("csrf token found");
        Ok(token)
    }

    /// Log in and return a session whose cookie jar carries the
    /// authentication for every later request.
    pub async fn login(
        self,
        email: &str,
        password: &SecretString,
    ) -> Result<FlowSession, FlowError> {
        let csrf_token = self.obtain_csrf().await?;
        let form = LoginForm {
            csrf_token: &csrf_token,
            email,
            password: password.expose_secret(),
            return_url: "/",
        };
        let resp = self.client.post(self.login_url()).form(&form).send().await?;
        let status = resp.status();
        if !(status.is_success() || status.is_redirection()) {
            let body = resp.text().await.unwrap_or_default();
            let body_snippet: String = body.chars().take(256).collect();
            return Err(FlowError::Auth(format!(
                "login rejected with status {}: {body_snippet}",
                status.as_u16()
            )));
        }
        tracing::info!("logged in");
        Ok(FlowSession {
            base_url: self.base_url,
            client: self.client,
        })
    }
}

impl FlowSession {
    fn report_url(&self) -> String {
        format!("{}/progress/getReportAsJson", self.base_url)
    }
}

#[async_trait]
impl FlowClient for FlowSession {
    async fn fetch_sport_stats(
        &self,
        sport: &str,
        range: &DateRange,
    ) -> Result<SportResult, FlowError> {
        let body = ReportRequest::new(sport, range);
        tracing::debug!(%sport, from = %body.from, to = %body.to, "requesting report");
        let resp = self
            .client
            .post(self.report_url())
            .header("x-requested-with", "XMLHttpRequest")
            .json(&body)
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => {
                let text = resp.text().await?;
                let report: ReportResponse = serde_json::from_str(&text)
                    .map_err(|e| FlowError::Parse(format!("report for {sport}: {e}")))?;
                let result = report
                    .progress_container
                    .training_report_summary
                    .into_sport_result(sport);
                tracing::info!(
                    %sport,
                    distance = result.distance,
                    duration = result.duration,
                    count = result.count,
                    "report fetched"
                );
                Ok(result)
            }
            // The service answers 500 for sports it does not know.
            StatusCode::INTERNAL_SERVER_ERROR => Err(FlowError::SportUnknown(sport.to_string())),
            status => {
                let body = resp.text().await.unwrap_or_default();
                let body_snippet: String = body.chars().take(256).collect();
                Err(FlowError::Report {
                    status: status.as_u16(),
                    body: body_snippet,
                })
            }
        }
    }
}

pub fn extract_csrf(page: &str) -> Option<String> {
    CSRF_RE
        .captures(page)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_csrf_from_login_form() {
        let page = r#"<form method="post" action="/login">
            <input type="hidden" name="csrfToken" value="3f2a9c1e-77b0-4d5e-9a61-0c4b2e8d1f00"/>
            <input type="email" name="email"/>
        </form>"#;
        assert_eq!(
            extract_csrf(page).as_deref(),
            Some("3f2a9c1e-77b0-4d5e-9a61-0c4b2e8d1f00")
        );
    }

    #[test]
    fn extract_csrf_absent() {
        assert!(extract_csrf("<html><body>maintenance</body></html>").is_none());
    }

    #[test]
    fn extract_csrf_rejects_uppercase_token() {
        assert!(extract_csrf(r#"name="csrfToken" value="ABC""#).is_none());
    }

    #[test]
    fn report_request_wire_format() {
        let range = DateRange::month(2024, 2).unwrap();
        let body = serde_json::to_value(ReportRequest::new("RUNNING", &range)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "barType": "distance",
                "group": "day",
                "report": "custom",
                "reportSubtype": "training",
                "timeFrame": "month",
                "from": "01-02-2024",
                "to": "29-02-2024",
                "sport": ["RUNNING"]
            })
        );
    }

    #[test]
    fn client_new_trims_base_url() {
        let client = ReqwestFlowClient::new("http://localhost/").unwrap();
        assert_eq!(client.login_url(), "http://localhost/login");
    }
}
